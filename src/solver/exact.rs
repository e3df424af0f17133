use crate::problem::Instance;
use crate::solution::{eval_tour_cost, Solution};

/// Exhaustive enumeration for tiny instances: walks every permutation of the
/// non-start cities in lexicographic order and keeps the cheapest feasible
/// closed tour. At the 10-city limit this is 9! = 362 880 evaluations.
pub fn solve_exhaustive(instance: &Instance) -> Option<Solution> {
    let n = instance.num_cities;
    let start = instance.start_city;

    let mut tour = Vec::with_capacity(n + 1);
    tour.push(start);
    tour.extend((0..n).filter(|&c| c != start));
    tour.push(start);

    let mut best: Option<Solution> = None;
    loop {
        if let Some(cost) = eval_tour_cost(&tour, &instance.costs) {
            if best.as_ref().map_or(true, |b| cost < b.cost) {
                best = Some(Solution {
                    tour: tour.clone(),
                    cost,
                });
            }
        }
        if !next_permutation(&mut tour[1..n]) {
            break;
        }
    }

    best
}

/// Rearranges the slice into its lexicographic successor; `false` when the
/// slice already holds the last permutation (leaving it reversed to the
/// first, as `std::next_permutation` does).
fn next_permutation(slice: &mut [usize]) -> bool {
    if slice.len() < 2 {
        return false;
    }
    let mut i = slice.len() - 1;
    while i > 0 && slice[i - 1] >= slice[i] {
        i -= 1;
    }
    if i == 0 {
        slice.reverse();
        return false;
    }
    let mut j = slice.len() - 1;
    while slice[j] <= slice[i - 1] {
        j -= 1;
    }
    slice.swap(i - 1, j);
    slice[i..].reverse();
    true
}
