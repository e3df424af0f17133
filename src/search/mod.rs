pub mod dlb;
pub mod double_bridge;
pub mod stats;
pub mod two_opt;

/// Asserts the 2-opt property: no adjacent swap, non-adjacent swap, or
/// segment flip yields a strictly cheaper feasible tour.
#[cfg(test)]
pub(crate) fn assert_no_improving_move(
    tour: &[usize],
    cost: crate::problem::Cost,
    costs: &crate::problem::FlightCostMatrix,
) {
    use crate::solution::eval_tour_cost;

    assert_eq!(eval_tour_cost(tour, costs), Some(cost));

    let len = tour.len();
    for day1 in 1..len - 2 {
        for day2 in day1 + 1..len - 1 {
            let mut swapped = tour.to_vec();
            swapped.swap(day1, day2);
            if let Some(c) = eval_tour_cost(&swapped, costs) {
                assert!(
                    c >= cost,
                    "swap at ({}, {}) improves {} -> {}",
                    day1,
                    day2,
                    cost,
                    c
                );
            }

            let mut flipped = tour.to_vec();
            flipped[day1..=day2].reverse();
            if let Some(c) = eval_tour_cost(&flipped, costs) {
                assert!(
                    c >= cost,
                    "flip at ({}, {}) improves {} -> {}",
                    day1,
                    day2,
                    cost,
                    c
                );
            }
        }
    }
}
