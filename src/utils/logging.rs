use took::Took;

use crate::solution::Solution;

pub fn format_log_method_solution_timed(method: &str, sol: &Solution, took: Took) -> String {
    format!("{method} - {}, took: {took}", format_log_solution(sol))
}

pub fn format_log_solution(sol: &Solution) -> String {
    format!(
        "cost {} over {} days",
        sol.cost,
        sol.tour.len().saturating_sub(1)
    )
}
