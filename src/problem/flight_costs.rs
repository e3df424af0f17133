use std::num::NonZeroU32;

use crate::problem::Cost;

/// Dense `(day, from, to)` lookup of one-way flight prices. A missing flight
/// is `None`; prices are strictly positive. Immutable once built.
pub struct FlightCostMatrix {
    n: usize,
    data: Vec<Option<NonZeroU32>>,
}

impl FlightCostMatrix {
    #[inline(always)]
    fn idx(&self, day: usize, from: usize, to: usize) -> usize {
        debug_assert!(day < self.n);
        debug_assert!(from < self.n);
        debug_assert!(to < self.n);
        (day * self.n + from) * self.n + to
    }

    #[inline(always)]
    pub fn cost(&self, day: usize, from: usize, to: usize) -> Option<Cost> {
        self.data[self.idx(day, from, to)].map(NonZeroU32::get)
    }

    #[inline(always)]
    pub fn has_flight(&self, day: usize, from: usize, to: usize) -> bool {
        self.data[self.idx(day, from, to)].is_some()
    }

    #[inline(always)]
    pub fn num_cities(&self) -> usize {
        self.n
    }
}

pub struct FlightCostMatrixBuilder {
    n: usize,
    data: Vec<Option<NonZeroU32>>,
}

impl FlightCostMatrixBuilder {
    pub fn with_num_cities(num_cities: usize) -> Self {
        Self {
            n: num_cities,
            data: vec![None; num_cities * num_cities * num_cities],
        }
    }

    /// Registers a flight. Later writes to the same `(day, from, to)` slot
    /// replace earlier ones.
    pub fn set_flight(&mut self, day: usize, from: usize, to: usize, cost: Cost) -> &mut Self {
        debug_assert!(day < self.n && from < self.n && to < self.n);
        self.data[(day * self.n + from) * self.n + to] = NonZeroU32::new(cost);
        self
    }

    pub fn build(self) -> FlightCostMatrix {
        FlightCostMatrix {
            n: self.n,
            data: self.data,
        }
    }
}
