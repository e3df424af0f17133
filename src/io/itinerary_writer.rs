use std::io::Write;

use anyhow::Context;

use crate::problem::Instance;
use crate::solution::Solution;

/// Prints the answer in the challenge output format: the total cost on the
/// first line, then one `from to day cost` line per flight leg.
pub fn write_itinerary(
    out: &mut impl Write,
    sol: &Solution,
    instance: &Instance,
) -> anyhow::Result<()> {
    writeln!(out, "{}", sol.cost)?;
    for (day, leg) in sol.tour.windows(2).enumerate() {
        let price = instance
            .costs
            .cost(day, leg[0], leg[1])
            .with_context(|| format!("tour has no flight on day {}", day))?;
        writeln!(
            out,
            "{} {} {} {}",
            instance.city_name(leg[0]),
            instance.city_name(leg[1]),
            day,
            price
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::challenge_reader::read_instance;

    #[test]
    fn prints_cost_and_one_line_per_leg() -> anyhow::Result<()> {
        let input = "AAA\n\
                     AAA BBB 0 10\n\
                     BBB CCC 1 10\n\
                     CCC AAA 2 10\n";
        let instance = read_instance(input.as_bytes())?;
        let sol = Solution {
            tour: vec![0, 1, 2, 0],
            cost: 30,
        };

        let mut buffer = Vec::new();
        write_itinerary(&mut buffer, &sol, &instance)?;

        assert_eq!(
            String::from_utf8(buffer)?,
            "30\nAAA BBB 0 10\nBBB CCC 1 10\nCCC AAA 2 10\n"
        );
        Ok(())
    }

    #[test]
    fn infeasible_tour_is_an_error() -> anyhow::Result<()> {
        let input = "AAA\nAAA BBB 0 10\n";
        let instance = read_instance(input.as_bytes())?;
        let sol = Solution {
            tour: vec![0, 1, 0],
            cost: 20,
        };

        let mut buffer = Vec::new();
        assert!(write_itinerary(&mut buffer, &sol, &instance).is_err());
        Ok(())
    }
}
