#![allow(dead_code)]

use clap::Parser;
use log::info;
use rand::random;
use took::Timer;

use crate::cli::ProgramArguments;
use crate::utils::logging::format_log_solution;
use crate::utils::{create_seeded_rng, Countdown};

mod cli;
mod io;
mod problem;
mod search;
mod solution;
mod solver;
mod utils;

fn main() -> anyhow::Result<()> {
    // the wall-clock budget runs from process start, parsing included
    let timer = Timer::new();
    env_logger::init();

    let args = ProgramArguments::parse();
    info!("{:?}", &args);

    let seed_value = args.seed.unwrap_or_else(|| random::<i128>().abs());
    info!("seed: {}", seed_value);
    let mut rng = create_seeded_rng(seed_value);

    let load_timer = Timer::new();
    let instance = io::load_instance(args.instance.as_deref())?;
    info!(
        "instance loaded after {}: {} cities, start {}",
        load_timer.took(),
        instance.num_cities,
        instance.city_name(instance.start_city)
    );

    let countdown = Countdown::new(timer, args.solver.time_limit());

    info!("starting solver");
    let res = solver::solve(
        &instance,
        &args.solver.ils_parameters(),
        &mut rng,
        &countdown,
    );

    info!("finished after {}", res.time);
    match &res.solution {
        Some(sol) => {
            info!("best tour found: {}", format_log_solution(sol));
            let stdout = std::io::stdout();
            io::itinerary_writer::write_itinerary(&mut stdout.lock(), sol, &instance)?;
        }
        None => info!("no feasible tour found"),
    }

    if args.print_summary_to_stderr {
        eprintln!(
            "{},{}",
            res.solution
                .as_ref()
                .map(|s| s.cost.to_string())
                .unwrap_or_else(|| "-".to_string()),
            res.time.as_std().as_secs_f64()
        );
    }

    Ok(())
}
