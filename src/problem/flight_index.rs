use crate::problem::{Cost, FlightCostMatrix};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Connection {
    pub city: usize,
    pub cost: Cost,
}

/// Per-`(city, day)` flight lists sorted ascending by price, so the cheapest
/// feasible extension is the first unvisited entry. Ties are broken by city
/// index to keep runs reproducible. One projection lists destinations
/// reachable *from* a city (outbound), the mirror lists origins that *reach*
/// a city (inbound). Immutable once built.
pub struct FlightIndex {
    n: usize,
    lists: Vec<Vec<Connection>>,
}

impl FlightIndex {
    pub fn outbound_of(costs: &FlightCostMatrix) -> Self {
        let n = costs.num_cities();
        let mut lists = vec![Vec::new(); n * n];
        for day in 0..n {
            for from in 0..n {
                let list = &mut lists[from * n + day];
                for to in 0..n {
                    if let Some(cost) = costs.cost(day, from, to) {
                        list.push(Connection { city: to, cost });
                    }
                }
                list.sort_unstable_by_key(|c| (c.cost, c.city));
            }
        }
        Self { n, lists }
    }

    pub fn inbound_of(costs: &FlightCostMatrix) -> Self {
        let n = costs.num_cities();
        let mut lists = vec![Vec::new(); n * n];
        for day in 0..n {
            for to in 0..n {
                let list = &mut lists[to * n + day];
                for from in 0..n {
                    if let Some(cost) = costs.cost(day, from, to) {
                        list.push(Connection { city: from, cost });
                    }
                }
                list.sort_unstable_by_key(|c| (c.cost, c.city));
            }
        }
        Self { n, lists }
    }

    #[inline(always)]
    pub fn flights(&self, city: usize, day: usize) -> &[Connection] {
        debug_assert!(city < self.n && day < self.n);
        &self.lists[city * self.n + day]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::FlightCostMatrixBuilder;

    fn sample_costs() -> FlightCostMatrix {
        let mut builder = FlightCostMatrixBuilder::with_num_cities(4);
        builder
            .set_flight(0, 0, 1, 30)
            .set_flight(0, 0, 2, 10)
            .set_flight(0, 0, 3, 30)
            .set_flight(1, 2, 0, 5)
            .set_flight(1, 3, 0, 5);
        builder.build()
    }

    #[test]
    fn outbound_is_sorted_ascending_by_price() {
        let index = FlightIndex::outbound_of(&sample_costs());
        let flights = index.flights(0, 0);

        assert_eq!(flights[0], Connection { city: 2, cost: 10 });
        assert_eq!(flights.len(), 3);
        assert!(flights.windows(2).all(|w| w[0].cost <= w[1].cost));
    }

    #[test]
    fn price_ties_are_broken_by_city_index() {
        let index = FlightIndex::outbound_of(&sample_costs());
        let flights = index.flights(0, 0);

        assert_eq!(flights[1], Connection { city: 1, cost: 30 });
        assert_eq!(flights[2], Connection { city: 3, cost: 30 });
    }

    #[test]
    fn inbound_mirrors_outbound() {
        let costs = sample_costs();
        let inbound = FlightIndex::inbound_of(&costs);

        let arriving = inbound.flights(0, 1);
        assert_eq!(arriving.len(), 2);
        assert_eq!(arriving[0], Connection { city: 2, cost: 5 });
        assert_eq!(arriving[1], Connection { city: 3, cost: 5 });

        assert!(inbound.flights(1, 0).iter().any(|c| c.city == 0 && c.cost == 30));
    }

    #[test]
    fn cities_without_flights_have_empty_lists() {
        let index = FlightIndex::outbound_of(&sample_costs());
        assert!(index.flights(1, 1).is_empty());
    }
}
