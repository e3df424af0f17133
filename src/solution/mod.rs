use crate::problem::{Cost, FlightCostMatrix};

/// A closed tour: `tour[d]` is the city occupied at the start of day `d`,
/// `tour[0]` and `tour[num_cities]` are the start city.
pub type Tour = Vec<usize>;

/// Total price of a tour, or `None` as soon as any leg has no flight.
pub fn eval_tour_cost(tour: &[usize], costs: &FlightCostMatrix) -> Option<Cost> {
    let mut total = 0;
    for (day, leg) in tour.windows(2).enumerate() {
        total += costs.cost(day, leg[0], leg[1])?;
    }
    Some(total)
}

/// A feasible tour together with its evaluated cost.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    pub tour: Tour,
    pub cost: Cost,
}

#[derive(Debug)]
pub enum BestTour {
    Some(Solution),
    None,
}

impl BestTour {
    pub fn is_none(&self) -> bool {
        match self {
            Self::None => true,
            _ => false,
        }
    }
    pub fn is_some(&self) -> bool {
        !self.is_none()
    }

    pub fn cost(&self) -> Option<Cost> {
        match self {
            Self::Some(sol) => Option::Some(sol.cost),
            Self::None => Option::None,
        }
    }

    pub fn replace_if_better(&mut self, candidate: Solution) {
        match self {
            Self::None => *self = Self::Some(candidate),
            Self::Some(incumbent) => {
                if candidate.cost < incumbent.cost {
                    *self = Self::Some(candidate)
                }
            }
        }
    }

    pub fn into_option(self) -> Option<Solution> {
        match self {
            Self::Some(sol) => Option::Some(sol),
            Self::None => Option::None,
        }
    }
}
