use std::time::{Duration, Instant};

use log::{debug, info};
use took::Timer;

use crate::problem::Instance;
use crate::search::dlb::two_opt_with_dont_look_bits;
use crate::search::double_bridge::restricted_double_bridge_kick;
use crate::search::stats::SearchStats;
use crate::search::two_opt::two_opt;
use crate::solution::Solution;
use crate::solver::construction::construct;
use crate::utils::logging::format_log_method_solution_timed;
use crate::utils::{Countdown, Random};

/// After this long without improvement on small instances, the working tour
/// is re-seeded with a mild kick of the global best.
const STAGNATION_LIMIT: Duration = Duration::from_secs(4);
const RESTART_COST_RATIO: f64 = 1.15;
const KICK_ATTEMPTS: usize = 2000;

pub struct Parameters {
    pub dlb_reset_radius: usize,
}

/// Iterated local search: construct, polish with plain 2-opt, then until the
/// deadline alternate restricted double-bridge kicks with don't-look-bit
/// 2-opt, accepting improvements of the working tour and tracking the global
/// best separately. `None` only when no initial tour could be constructed.
pub fn iterated_local_search(
    instance: &Instance,
    params: &Parameters,
    rng: &mut Random,
    countdown: &Countdown,
) -> Option<Solution> {
    let initial = construct(instance, rng)?;
    #[cfg(feature = "search_assertions")]
    crate::utils::validator::assert_feasible_tour(instance, &initial.tour);

    let mut stats = SearchStats::new();
    let timer = Timer::new();
    let initial = two_opt(initial, &instance.costs, countdown, &mut stats);
    info!(
        "{}",
        format_log_method_solution_timed("2-opt", &initial, timer.took())
    );

    let n = instance.num_cities;
    let max_cost_ratio = if n < 100 {
        1.35
    } else if n > 100 {
        1.075
    } else {
        1.1
    };

    let mut global_best = initial.clone();
    let mut working = initial;
    let mut last_improvement = Instant::now();
    let mut iterations = 0usize;

    while countdown.is_time_remaining() {
        iterations += 1;

        if n < 100 && last_improvement.elapsed() > STAGNATION_LIMIT {
            if let Some(restart) = restricted_double_bridge_kick(
                &global_best,
                &instance.costs,
                RESTART_COST_RATIO,
                KICK_ATTEMPTS,
                rng,
            ) {
                debug!("stagnation restart from the global best at cost {}", restart.cost);
                working = restart;
                last_improvement = Instant::now();
            }
        }

        let Some(kicked) = restricted_double_bridge_kick(
            &working,
            &instance.costs,
            max_cost_ratio,
            KICK_ATTEMPTS,
            rng,
        ) else {
            continue;
        };

        let improved = two_opt_with_dont_look_bits(
            kicked,
            &instance.costs,
            countdown,
            params.dlb_reset_radius,
            &mut stats,
        );

        if improved.cost < working.cost {
            working = improved;
            last_improvement = Instant::now();
        }
        if working.cost < global_best.cost {
            debug!(
                "new global best {} after {:?}",
                working.cost,
                countdown.time_elapsed()
            );
            global_best = working.clone();
        }
    }

    info!(
        "ILS stopped after {} iterations, accepted moves: {}",
        iterations, stats
    );
    #[cfg(feature = "search_assertions")]
    crate::utils::validator::assert_feasible_tour(instance, &global_best.tour);

    Some(global_best)
}
