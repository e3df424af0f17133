use std::time::Duration;

use clap::Parser;

use crate::solver::ils;
use crate::utils::TimeLimit;

#[derive(Parser, Debug)]
#[command(version)]
pub struct ProgramArguments {
    #[arg(long, help = "rng seed")]
    pub seed: Option<i128>,

    #[arg(short, long, help = "instance file path (reads stdin when omitted)")]
    pub instance: Option<String>,

    #[command(flatten)]
    pub solver: SolverArguments,

    #[arg(
        long,
        help = "print cost and elapsed seconds to stderr",
        default_value = "false"
    )]
    pub print_summary_to_stderr: bool,
}

#[derive(clap::Args, Clone, Debug)]
pub struct SolverArguments {
    #[arg(long, default_value = "29.9", help = "wall-clock budget in seconds")]
    pub time_limit_in_seconds: f64,

    #[arg(
        long,
        default_value = "3",
        help = "reset window radius for the don't-look bits"
    )]
    pub dlb_reset_radius: usize,
}

impl SolverArguments {
    pub(crate) fn time_limit(&self) -> TimeLimit {
        TimeLimit::Duration(Duration::from_secs_f64(self.time_limit_in_seconds))
    }

    pub(crate) fn ils_parameters(&self) -> ils::Parameters {
        ils::Parameters {
            dlb_reset_radius: self.dlb_reset_radius,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        ProgramArguments::command().debug_assert()
    }
}
