use crate::problem::{Cost, FlightCostMatrix};
use crate::search::stats::{MoveKind, SearchStats};
use crate::solution::{eval_tour_cost, Solution};
use crate::utils::Countdown;

/// First-improvement 2-opt local search over adjacent swaps, non-adjacent
/// swaps, and segment flips. Every accepted move restarts the scan from day
/// 1, so on normal termination the tour admits no improving move from any of
/// the three neighbourhoods. The deadline is polled at the top of each
/// restart; on expiry the current tour is returned as-is.
pub fn two_opt(
    initial: Solution,
    costs: &FlightCostMatrix,
    countdown: &Countdown,
    stats: &mut SearchStats,
) -> Solution {
    let Solution {
        tour: mut best_tour,
        cost: mut best_cost,
    } = initial;
    let len = best_tour.len();

    'from_scratch: loop {
        if countdown.is_finished() {
            break;
        }

        for day1 in 1..len.saturating_sub(2) {
            // scratch for the flip variant; each flip at (day1, day2) fully
            // overwrites the previously flipped range
            let mut flip = best_tour.clone();

            for day2 in day1 + 1..len - 1 {
                if day2 == day1 + 1 {
                    let mut swapped = best_tour.clone();
                    swapped.swap(day1, day2);
                    if let Some(cost) = eval_tour_cost(&swapped, costs) {
                        if cost < best_cost {
                            best_tour = swapped;
                            best_cost = cost;
                            stats.record_accept(MoveKind::AdjacentSwap);
                            continue 'from_scratch;
                        }
                    }
                } else if let Some(cost) = swap_delta_cost(&best_tour, best_cost, day1, day2, costs)
                {
                    if cost < best_cost {
                        best_tour.swap(day1, day2);
                        best_cost = cost;
                        stats.record_accept(MoveKind::Swap);
                        continue 'from_scratch;
                    }
                }

                for i in 0..=(day2 - day1) {
                    flip[day1 + i] = best_tour[day2 - i];
                }
                if let Some(cost) = eval_tour_cost(&flip, costs) {
                    if cost < best_cost {
                        best_tour = flip;
                        best_cost = cost;
                        stats.record_accept(MoveKind::SegmentFlip);
                        continue 'from_scratch;
                    }
                }
            }
        }

        break; // exhausted all improving moves, the tour is 2-opt
    }

    Solution {
        tour: best_tour,
        cost: best_cost,
    }
}

/// Cost after exchanging the cities at `day1` and `day2` (`day2 > day1 + 1`),
/// computed in O(1): the four affected legs at days `day1-1`, `day1`,
/// `day2-1`, `day2` are replaced, every other leg keeps its price. `None`
/// when any of the four new legs has no flight.
pub(crate) fn swap_delta_cost(
    tour: &[usize],
    tour_cost: Cost,
    day1: usize,
    day2: usize,
    costs: &FlightCostMatrix,
) -> Option<Cost> {
    debug_assert!(day1 + 1 < day2);
    let city1 = tour[day1];
    let city2 = tour[day2];

    let added = costs.cost(day1 - 1, tour[day1 - 1], city2)?
        + costs.cost(day1, city2, tour[day1 + 1])?
        + costs.cost(day2 - 1, tour[day2 - 1], city1)?
        + costs.cost(day2, city1, tour[day2 + 1])?;

    let removed = costs.cost(day1 - 1, tour[day1 - 1], city1)?
        + costs.cost(day1, city1, tour[day1 + 1])?
        + costs.cost(day2 - 1, tour[day2 - 1], city2)?
        + costs.cost(day2, city2, tour[day2 + 1])?;

    Some(tour_cost - removed + added)
}
