use rand::Rng;

use crate::problem::FlightCostMatrix;
use crate::solution::{eval_tour_cost, Solution, Tour};
use crate::utils::Random;

/// Four non-empty segments need eight days between the pinned endpoints.
const MIN_CITIES: usize = 8;

/// Reconnects the four segments cut at `day1 < day2 < day3 < day4` in the
/// order first, third, second, fourth. Both endpoints stay pinned.
fn double_bridge(tour: &[usize], day1: usize, day2: usize, day3: usize, day4: usize) -> Tour {
    let mut new_tour = Vec::with_capacity(tour.len());
    new_tour.extend_from_slice(&tour[..day1]);
    new_tour.extend_from_slice(&tour[day3..day4]);
    new_tour.extend_from_slice(&tour[day2..day3]);
    new_tour.extend_from_slice(&tour[day1..day2]);
    new_tour.extend_from_slice(&tour[day4..]);
    new_tour
}

/// Random double-bridge perturbation restricted by a cost ratio: the kicked
/// tour is accepted only when it is feasible and cheaper than
/// `max_cost_ratio` times the original cost. Larger ratios admit worse
/// intermediate tours and diversify the search more aggressively. Up to
/// `max_iters` random cut 4-tuples are tried (tuples violating the
/// minimum-gap condition count as failed tries); `None` when none is
/// accepted.
pub fn restricted_double_bridge_kick(
    sol: &Solution,
    costs: &FlightCostMatrix,
    max_cost_ratio: f64,
    max_iters: usize,
    rng: &mut Random,
) -> Option<Solution> {
    let num_cities = sol.tour.len() - 1;
    if num_cities < MIN_CITIES {
        return None;
    }

    for _ in 0..max_iters {
        let mut days = [0usize; 4];
        let mut i = 0;
        while i < 4 {
            let d = rng.gen_range(1..num_cities);
            if days[..i].contains(&d) {
                continue;
            }
            days[i] = d;
            i += 1;
        }
        days.sort_unstable();

        // every segment between two consecutive cuts must span at least two
        // days
        if days[1] <= days[0] + 1 || days[2] <= days[1] + 1 || days[3] <= days[2] + 1 {
            continue;
        }

        let candidate = double_bridge(&sol.tour, days[0], days[1], days[2], days[3]);
        if let Some(cost) = eval_tour_cost(&candidate, costs) {
            if (cost as f64) < max_cost_ratio * (sol.cost as f64) {
                return Some(Solution {
                    tour: candidate,
                    cost,
                });
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::{assert_vec_eq, create_seeded_rng, dense_test_instance};

    #[test]
    fn segments_are_reconnected_in_first_third_second_fourth_order() {
        let tour: Vec<usize> = (0..12).chain([0]).collect();
        let kicked = double_bridge(&tour, 2, 4, 7, 9);

        assert_vec_eq(
            &vec![0, 1, 7, 8, 4, 5, 6, 2, 3, 9, 10, 11, 0],
            &kicked,
        );
    }

    #[test]
    fn kick_preserves_the_permutation_and_respects_the_ratio() {
        let instance = dense_test_instance(12);
        let tour: Vec<usize> = (0..12).chain([0]).collect();
        let cost = eval_tour_cost(&tour, &instance.costs).unwrap();
        let sol = Solution { tour, cost };

        let mut rng = create_seeded_rng(7);
        let kicked = restricted_double_bridge_kick(&sol, &instance.costs, 10.0, 2000, &mut rng)
            .expect("a dense instance always admits a kick");

        crate::utils::validator::assert_feasible_tour(&instance, &kicked.tour);
        assert_ne!(kicked.tour, sol.tour);
        assert!((kicked.cost as f64) < 10.0 * (sol.cost as f64));
        assert_eq!(
            eval_tour_cost(&kicked.tour, &instance.costs),
            Some(kicked.cost)
        );
    }

    #[test]
    fn a_tight_ratio_only_accepts_cheaper_tours() {
        let instance = dense_test_instance(12);
        let tour: Vec<usize> = (0..12).chain([0]).collect();
        let cost = eval_tour_cost(&tour, &instance.costs).unwrap();
        let sol = Solution { tour, cost };

        let mut rng = create_seeded_rng(11);
        if let Some(kicked) =
            restricted_double_bridge_kick(&sol, &instance.costs, 1.0, 2000, &mut rng)
        {
            assert!(kicked.cost < sol.cost);
        }
    }

    #[test]
    fn tours_too_short_for_four_segments_are_rejected() {
        let instance = dense_test_instance(7);
        let tour: Vec<usize> = (0..7).chain([0]).collect();
        let cost = eval_tour_cost(&tour, &instance.costs).unwrap();
        let sol = Solution { tour, cost };

        let mut rng = create_seeded_rng(3);
        assert!(restricted_double_bridge_kick(&sol, &instance.costs, 10.0, 100, &mut rng).is_none());
    }
}
