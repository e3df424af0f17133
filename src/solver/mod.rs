use log::info;
use took::{Timer, Took};

use crate::problem::Instance;
use crate::solution::Solution;
use crate::utils::{Countdown, Random};

pub mod construction;
pub mod exact;
pub mod ils;

/// Instances up to this size are enumerated exhaustively instead of searched
/// heuristically.
pub const EXHAUSTIVE_SEARCH_LIMIT: usize = 10;

pub struct SolverResult {
    pub solution: Option<Solution>,
    pub time: Took,
}

pub fn solve(
    instance: &Instance,
    params: &ils::Parameters,
    rng: &mut Random,
    countdown: &Countdown,
) -> SolverResult {
    let timer = Timer::new();

    let solution = if instance.num_cities <= EXHAUSTIVE_SEARCH_LIMIT {
        info!(
            "{} cities, enumerating all tours exhaustively",
            instance.num_cities
        );
        exact::solve_exhaustive(instance)
    } else {
        ils::iterated_local_search(instance, params, rng, countdown)
    };

    SolverResult {
        solution,
        time: timer.took(),
    }
}
