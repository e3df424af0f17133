use fixedbitset::FixedBitSet;

use crate::problem::Instance;
use crate::solution::eval_tour_cost;

/// Panics unless `tour` is a closed permutation tour of the instance:
/// length N+1, pinned to the start city at both ends, every other city
/// visited exactly once.
pub fn assert_valid_tour(instance: &Instance, tour: &[usize]) {
    let n = instance.num_cities;
    assert_eq!(
        tour.len(),
        n + 1,
        "tour has {} entries, expected {}",
        tour.len(),
        n + 1
    );
    assert_eq!(tour[0], instance.start_city, "tour does not begin at the start city");
    assert_eq!(tour[n], instance.start_city, "tour does not end at the start city");

    let mut seen = FixedBitSet::with_capacity(n);
    for &city in &tour[..n] {
        assert!(city < n, "city index {} out of range", city);
        assert!(!seen.contains(city), "city {} visited twice", city);
        seen.insert(city);
    }
    assert_eq!(seen.count_ones(..), n, "not every city is visited");
}

/// `assert_valid_tour` plus the requirement that every leg has a flight.
pub fn assert_feasible_tour(instance: &Instance, tour: &[usize]) {
    assert_valid_tour(instance, tour);
    assert!(
        eval_tour_cost(tour, &instance.costs).is_some(),
        "tour contains a leg with no flight"
    );
}
