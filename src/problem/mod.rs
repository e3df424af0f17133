pub mod flight_costs;
pub mod flight_index;

pub use flight_costs::{FlightCostMatrix, FlightCostMatrixBuilder};
pub use flight_index::{Connection, FlightIndex};

/// Price of a single flight leg. Total tour costs also fit, the challenge
/// caps individual prices well below `u32::MAX / num_cities`.
pub type Cost = u32;

pub struct Instance {
    pub num_cities: usize,
    pub start_city: usize,
    pub city_names: Vec<String>,
    pub costs: FlightCostMatrix,
    pub outbound: FlightIndex,
    pub inbound: FlightIndex,
}

impl Instance {
    pub fn new(city_names: Vec<String>, start_city: usize, costs: FlightCostMatrix) -> Self {
        let num_cities = city_names.len();
        debug_assert_eq!(num_cities, costs.num_cities());
        debug_assert!(start_city < num_cities);

        let outbound = FlightIndex::outbound_of(&costs);
        let inbound = FlightIndex::inbound_of(&costs);
        Self {
            num_cities,
            start_city,
            city_names,
            costs,
            outbound,
            inbound,
        }
    }

    #[inline(always)]
    pub fn city_name(&self, city: usize) -> &str {
        &self.city_names[city]
    }
}
