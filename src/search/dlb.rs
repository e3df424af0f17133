use fixedbitset::FixedBitSet;

use crate::problem::FlightCostMatrix;
use crate::search::stats::{MoveKind, SearchStats};
use crate::search::two_opt::swap_delta_cost;
use crate::solution::{eval_tour_cost, Solution, Tour};
use crate::utils::Countdown;

/// 2-opt with don't-look bits: the move set and acceptance rule of
/// [`two_opt`](crate::search::two_opt::two_opt), but the outer scan skips
/// positions whose preceding city is marked. A city's bit is set after a
/// full unsuccessful pass with it as anchor and cleared again when a move
/// changes a neighbour within `reset_radius` positions. Inside the ILS loop
/// this amortises the search cost, since a perturbation only disturbs a
/// small neighbourhood.
pub fn two_opt_with_dont_look_bits(
    initial: Solution,
    costs: &FlightCostMatrix,
    countdown: &Countdown,
    reset_radius: usize,
    stats: &mut SearchStats,
) -> Solution {
    let Solution {
        tour: mut best_tour,
        cost: mut best_cost,
    } = initial;
    let len = best_tour.len();
    let num_cities = len - 1;
    let mut dont_look = FixedBitSet::with_capacity(num_cities);

    'from_scratch: loop {
        if countdown.is_finished() {
            break;
        }

        for day1 in 1..len.saturating_sub(2) {
            if dont_look.contains(best_tour[day1 - 1]) {
                continue;
            }

            let mut flip = best_tour.clone();

            for day2 in day1 + 1..len - 1 {
                if day2 == day1 + 1 {
                    let mut swapped = best_tour.clone();
                    swapped.swap(day1, day2);
                    if let Some(cost) = eval_tour_cost(&swapped, costs) {
                        if cost < best_cost {
                            clear_bits_around_changes(
                                &best_tour,
                                &swapped,
                                reset_radius,
                                &mut dont_look,
                            );
                            best_tour = swapped;
                            best_cost = cost;
                            stats.record_accept(MoveKind::AdjacentSwap);
                            continue 'from_scratch;
                        }
                    }
                } else if let Some(cost) = swap_delta_cost(&best_tour, best_cost, day1, day2, costs)
                {
                    if cost < best_cost {
                        let mut swapped = best_tour.clone();
                        swapped.swap(day1, day2);
                        clear_bits_around_changes(
                            &best_tour,
                            &swapped,
                            reset_radius,
                            &mut dont_look,
                        );
                        best_tour = swapped;
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
                        clear_bits_around_changes(&best_tour, &flip, reset_radius, &mut dont_look);
                        best_tour = flip;
                        best_cost = cost;
                        stats.record_accept(MoveKind::SegmentFlip);
                        continue 'from_scratch;
                    }
                }
            }

            dont_look.insert(best_tour[day1 - 1]);
        }

        break; // exhausted all improving moves at unmarked positions
    }

    Solution {
        tour: best_tour,
        cost: best_cost,
    }
}

/// Compares the tours city by city; for every city whose left or right
/// neighbour differs between the two, the bits of all cities within
/// `reset_radius` positions of its old slot are cleared.
fn clear_bits_around_changes(
    old_tour: &Tour,
    new_tour: &Tour,
    reset_radius: usize,
    dont_look: &mut FixedBitSet,
) {
    let num_cities = old_tour.len() - 1;
    for city in 0..num_cities {
        let Some(old_slot) = old_tour.iter().position(|&c| c == city) else {
            continue;
        };
        let Some(new_slot) = new_tour.iter().position(|&c| c == city) else {
            continue;
        };

        let left_changed = old_slot > 0
            && new_slot > 0
            && old_tour[old_slot - 1] != new_tour[new_slot - 1];
        let right_changed = old_slot < old_tour.len() - 1
            && new_slot < new_tour.len() - 1
            && old_tour[old_slot + 1] != new_tour[new_slot + 1];

        if left_changed || right_changed {
            let lo = old_slot.saturating_sub(reset_radius);
            let hi = (old_slot + reset_radius).min(new_tour.len() - 1);
            for slot in lo..=hi {
                dont_look.set(old_tour[slot], false);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::two_opt::two_opt;
    use crate::utils::{dense_test_instance, Countdown};

    fn seed_solution(n: usize, costs: &FlightCostMatrix) -> Solution {
        let tour: Vec<usize> = (0..n).chain([0]).collect();
        let cost = eval_tour_cost(&tour, costs).unwrap();
        Solution { tour, cost }
    }

    #[test]
    fn matches_plain_two_opt_with_a_full_reset_window() {
        // with the window spanning the whole tour every accepted move clears
        // all bits, so the scan is identical to the plain engine
        for n in [7, 9, 12] {
            let instance = dense_test_instance(n);
            let initial = seed_solution(n, &instance.costs);

            let plain = two_opt(
                initial.clone(),
                &instance.costs,
                &Countdown::unlimited(),
                &mut SearchStats::new(),
            );
            let with_bits = two_opt_with_dont_look_bits(
                initial,
                &instance.costs,
                &Countdown::unlimited(),
                n,
                &mut SearchStats::new(),
            );

            assert_eq!(plain.cost, with_bits.cost, "costs diverge for n = {}", n);
            assert_eq!(plain.tour, with_bits.tour, "tours diverge for n = {}", n);
        }
    }

    #[test]
    fn default_window_still_improves_and_reports_a_consistent_cost() {
        let instance = dense_test_instance(9);
        let initial = seed_solution(9, &instance.costs);
        let initial_cost = initial.cost;

        let result = two_opt_with_dont_look_bits(
            initial,
            &instance.costs,
            &Countdown::unlimited(),
            3,
            &mut SearchStats::new(),
        );

        assert!(result.cost <= initial_cost);
        assert_eq!(eval_tour_cost(&result.tour, &instance.costs), Some(result.cost));
        crate::utils::validator::assert_feasible_tour(&instance, &result.tour);
    }

    #[test]
    fn expired_deadline_returns_the_input_tour() {
        let instance = dense_test_instance(7);
        let initial = seed_solution(7, &instance.costs);

        let countdown = Countdown::new(
            took::Timer::new(),
            crate::utils::TimeLimit::Duration(std::time::Duration::ZERO),
        );
        let result = two_opt_with_dont_look_bits(
            initial.clone(),
            &instance.costs,
            &countdown,
            3,
            &mut SearchStats::new(),
        );

        assert_eq!(result, initial);
    }
}
