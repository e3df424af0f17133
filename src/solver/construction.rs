use fixedbitset::FixedBitSet;
use log::info;
use rand::Rng;
use took::Timer;

use crate::problem::{Cost, Instance};
use crate::solution::{eval_tour_cost, BestTour, Solution, Tour};
use crate::utils::logging::format_log_method_solution_timed;
use crate::utils::Random;

const DOUBLE_ENDED_NN_SEEDS: usize = 1000;
const RANDOM_TOUR_ATTEMPTS: usize = 10_000;

/// Initial-tour cascade: lookahead nearest-neighbour first, then the best of
/// 1000 randomly anchored double-ended nearest-neighbour tours, then a plain
/// random feasibility search. `None` when every stage fails.
pub fn construct(instance: &Instance, rng: &mut Random) -> Option<Solution> {
    let timer = Timer::new();
    if let Some(sol) = nn_tour_with_lookahead(instance) {
        info!(
            "{}",
            format_log_method_solution_timed("LookaheadNN", &sol, timer.took())
        );
        return Some(sol);
    }

    info!("lookahead nearest-neighbour failed, trying double-ended nearest-neighbour");
    let timer = Timer::new();
    if let Some(sol) = best_double_ended_nn_tour(instance, rng, DOUBLE_ENDED_NN_SEEDS) {
        info!(
            "{}",
            format_log_method_solution_timed("DoubleEndedNN", &sol, timer.took())
        );
        return Some(sol);
    }

    info!("double-ended nearest-neighbour failed, trying random feasibility search");
    let timer = Timer::new();
    if let Some(sol) = random_feasible_tour(instance, rng, RANDOM_TOUR_ATTEMPTS) {
        info!(
            "{}",
            format_log_method_solution_timed("RandomTour", &sol, timer.took())
        );
        return Some(sol);
    }

    None
}

/// Nearest-neighbour construction with a one-tour lookahead: each candidate
/// next city is scored by its leg price plus the cost of completing the tour
/// from there with purely greedy moves. Candidates whose greedy completion
/// gets stuck are skipped entirely.
pub fn nn_tour_with_lookahead(instance: &Instance) -> Option<Solution> {
    let n = instance.num_cities;
    let start = instance.start_city;

    let mut to_visit = FixedBitSet::with_capacity(n);
    to_visit.insert_range(..);
    to_visit.set(start, false);

    let mut tour = Vec::with_capacity(n + 1);
    tour.push(start);
    let mut total = 0;
    let mut curr = start;

    for day in 0..n {
        if day == n - 1 {
            // the last day must return to the start city
            total += instance.costs.cost(day, curr, start)?;
            tour.push(start);
        } else {
            let mut best: Option<(usize, Cost, Cost)> = None;
            for conn in instance.outbound.flights(curr, day) {
                if !to_visit.contains(conn.city) {
                    continue;
                }
                let Some(completion) =
                    greedy_completion_cost(day + 1, conn.city, start, &to_visit, instance)
                else {
                    continue;
                };
                let candidate_total = conn.cost + completion;
                if best.map_or(true, |(_, _, t)| candidate_total < t) {
                    best = Some((conn.city, conn.cost, candidate_total));
                }
            }

            let (next, price, _) = best?;
            to_visit.set(next, false);
            tour.push(next);
            total += price;
            curr = next;
        }
    }

    Some(Solution { tour, cost: total })
}

/// Cost of closing the tour from `from` on `start_day` back to `to` by
/// always taking the cheapest flight to an unvisited city. `None` when the
/// greedy walk gets stuck.
fn greedy_completion_cost(
    start_day: usize,
    from: usize,
    to: usize,
    unvisited: &FixedBitSet,
    instance: &Instance,
) -> Option<Cost> {
    let n = instance.num_cities;
    let mut to_visit = unvisited.clone();
    to_visit.set(from, false);

    let mut total = 0;
    let mut curr = from;
    for day in start_day..n {
        if day == n - 1 {
            total += instance.costs.cost(day, curr, to)?;
        } else {
            let next = instance
                .outbound
                .flights(curr, day)
                .iter()
                .find(|c| to_visit.contains(c.city))?;
            to_visit.set(next.city, false);
            total += next.cost;
            curr = next.city;
        }
    }
    Some(total)
}

/// Best feasible tour over `max_iters` random `(anchor_city, anchor_day)`
/// seeds of the double-ended construction.
pub fn best_double_ended_nn_tour(
    instance: &Instance,
    rng: &mut Random,
    max_iters: usize,
) -> Option<Solution> {
    let n = instance.num_cities;
    // city index 0 is the start city by order of ingest
    debug_assert_eq!(instance.start_city, 0);

    let mut best = BestTour::None;
    for _ in 0..max_iters {
        let anchor_city = rng.gen_range(1..n);
        let anchor_day = rng.gen_range(1..n);
        if let Some(tour) = double_ended_nn_tour(anchor_city, anchor_day, instance) {
            if let Some(cost) = eval_tour_cost(&tour, &instance.costs) {
                best.replace_if_better(Solution { tour, cost });
            }
        }
    }
    best.into_option()
}

/// Grows a tour from a seed city placed at `anchor_day` toward both ends at
/// once, always taking the cheaper of the two cheapest frontier extensions
/// (ties extend backward). Day 0 and day N stay pinned to the start city;
/// `None` as soon as either frontier cannot move or a pinned leg has no
/// flight.
pub fn double_ended_nn_tour(
    anchor_city: usize,
    anchor_day: usize,
    instance: &Instance,
) -> Option<Tour> {
    let n = instance.num_cities;
    let start = instance.start_city;
    debug_assert!(anchor_city != start);
    debug_assert!((1..n).contains(&anchor_day));

    let mut to_visit = FixedBitSet::with_capacity(n);
    to_visit.insert_range(..);
    to_visit.set(start, false);
    to_visit.set(anchor_city, false);

    let mut tour = vec![start; n + 1];
    tour[anchor_day] = anchor_city;

    // the forward frontier city sits at slot end_day, the backward frontier
    // city at slot front_day + 1
    let mut end_day = anchor_day;
    let mut end_city = anchor_city;
    let mut front_day = anchor_day - 1;
    let mut front_city = anchor_city;

    loop {
        let mut best_next = None;
        let mut best_prev = None;

        if end_day == n - 1 {
            if !instance.costs.has_flight(end_day, end_city, start) {
                return None;
            }
        } else {
            best_next = instance
                .outbound
                .flights(end_city, end_day)
                .iter()
                .find(|c| to_visit.contains(c.city))
                .copied();
        }

        if front_day == 0 {
            if !instance.costs.has_flight(0, start, front_city) {
                return None;
            }
        } else {
            best_prev = instance
                .inbound
                .flights(front_city, front_day)
                .iter()
                .find(|c| to_visit.contains(c.city))
                .copied();
        }

        if end_day == n - 1 && front_day == 0 {
            return Some(tour);
        }

        match (best_next, best_prev) {
            (None, None) => return None,
            (Some(next), None) => {
                end_day += 1;
                end_city = next.city;
                to_visit.set(end_city, false);
                tour[end_day] = end_city;
            }
            (None, Some(prev)) => {
                front_city = prev.city;
                to_visit.set(front_city, false);
                tour[front_day] = front_city;
                front_day -= 1;
            }
            (Some(next), Some(prev)) => {
                if next.cost < prev.cost {
                    end_day += 1;
                    end_city = next.city;
                    to_visit.set(end_city, false);
                    tour[end_day] = end_city;
                } else {
                    front_city = prev.city;
                    to_visit.set(front_city, false);
                    tour[front_day] = front_city;
                    front_day -= 1;
                }
            }
        }
    }
}

/// Last-resort construction: on every day pick uniformly among the feasible
/// unvisited destinations, forcing the return leg on the final day. An
/// attempt that strands itself is discarded; `None` after `max_iters` failed
/// attempts.
pub fn random_feasible_tour(
    instance: &Instance,
    rng: &mut Random,
    max_iters: usize,
) -> Option<Solution> {
    let n = instance.num_cities;
    let start = instance.start_city;

    'attempt: for _ in 0..max_iters {
        let mut to_visit = FixedBitSet::with_capacity(n);
        to_visit.insert_range(..);
        to_visit.set(start, false);

        let mut tour = Vec::with_capacity(n + 1);
        tour.push(start);
        let mut total = 0;
        let mut curr = start;

        for day in 0..n {
            if day == n - 1 {
                match instance.costs.cost(day, curr, start) {
                    Some(price) => {
                        total += price;
                        tour.push(start);
                        return Some(Solution { tour, cost: total });
                    }
                    None => continue 'attempt,
                }
            } else {
                let reachable: Vec<_> = instance
                    .outbound
                    .flights(curr, day)
                    .iter()
                    .filter(|c| to_visit.contains(c.city))
                    .collect();
                if reachable.is_empty() {
                    continue 'attempt;
                }
                let pick = reachable[rng.gen_range(0..reachable.len())];
                to_visit.set(pick.city, false);
                tour.push(pick.city);
                total += pick.cost;
                curr = pick.city;
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::challenge_reader::read_instance;
    use crate::utils::{assert_vec_eq, create_seeded_rng};

    fn unique_chain_instance() -> Instance {
        let input = "AAA\n\
                     AAA BBB 0 1\n\
                     BBB CCC 1 1\n\
                     CCC DDD 2 1\n\
                     DDD AAA 3 1\n";
        read_instance(input.as_bytes()).unwrap()
    }

    #[test]
    fn lookahead_finds_the_unique_feasible_tour() {
        let instance = unique_chain_instance();
        let sol = nn_tour_with_lookahead(&instance).unwrap();

        assert_eq!(sol.cost, 4);
        assert_vec_eq(&vec![0, 1, 2, 3, 0], &sol.tour);
    }

    #[test]
    fn lookahead_rejects_the_dead_end_branch() {
        // from AAA both BBB and CCC cost 1 on day 0, but only the BBB branch
        // can be completed back to AAA
        let input = "AAA\n\
                     AAA BBB 0 1\n\
                     AAA CCC 0 1\n\
                     BBB CCC 1 1\n\
                     CCC DDD 2 1\n\
                     DDD AAA 3 1\n\
                     CCC DDD 1 1\n\
                     DDD BBB 2 1\n";
        let instance = read_instance(input.as_bytes()).unwrap();

        let sol = nn_tour_with_lookahead(&instance).unwrap();
        assert_eq!(sol.tour[1], 1, "constructor must pick BBB, not CCC");
        assert_eq!(sol.cost, 4);
    }

    #[test]
    fn lookahead_fails_on_an_instance_with_no_tour() {
        let input = "AAA\nAAA BBB 0 1\n";
        let instance = read_instance(input.as_bytes()).unwrap();

        assert!(nn_tour_with_lookahead(&instance).is_none());
    }

    #[test]
    fn double_ended_growth_recovers_the_chain_from_a_late_anchor() {
        let instance = unique_chain_instance();

        let tour = double_ended_nn_tour(2, 2, &instance).unwrap();
        assert_vec_eq(&vec![0, 1, 2, 3, 0], &tour);
    }

    #[test]
    fn double_ended_growth_fails_when_the_anchor_cannot_reach_day_zero() {
        let instance = unique_chain_instance();

        // CCC at day 1 would need a day-0 flight AAA -> CCC, which is absent
        assert!(double_ended_nn_tour(2, 1, &instance).is_none());
    }

    #[test]
    fn random_search_finds_a_forced_tour() {
        let instance = unique_chain_instance();
        let mut rng = create_seeded_rng(99);

        let sol = random_feasible_tour(&instance, &mut rng, 10).unwrap();
        assert_eq!(sol.cost, 4);
        assert_vec_eq(&vec![0, 1, 2, 3, 0], &sol.tour);
    }

    #[test]
    fn random_search_gives_up_on_an_infeasible_instance() {
        let input = "AAA\nAAA BBB 0 1\n";
        let instance = read_instance(input.as_bytes()).unwrap();
        let mut rng = create_seeded_rng(5);

        assert!(random_feasible_tour(&instance, &mut rng, 100).is_none());
    }

    #[test]
    fn the_cascade_returns_none_when_every_stage_fails() {
        let input = "AAA\nAAA BBB 0 1\n";
        let instance = read_instance(input.as_bytes()).unwrap();
        let mut rng = create_seeded_rng(1);

        assert!(construct(&instance, &mut rng).is_none());
    }

    #[test]
    fn the_cascade_evaluates_tours_consistently() {
        let instance = crate::utils::dense_test_instance(12);
        let mut rng = create_seeded_rng(21);

        let sol = construct(&instance, &mut rng).unwrap();
        crate::utils::validator::assert_feasible_tour(&instance, &sol.tour);
        assert_eq!(eval_tour_cost(&sol.tour, &instance.costs), Some(sol.cost));
    }
}
