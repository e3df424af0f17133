#[cfg(test)]
use std::fmt::Debug;
use std::time::Duration;

use rand::{RngCore, SeedableRng};
use rand_pcg::Pcg64Mcg;
use took::Timer;

pub mod logging;
pub mod validator;

pub type Random = Pcg64Mcg;

pub fn create_seeded_rng(seed: i128) -> Random {
    let mut rng = Pcg64Mcg::from_seed(seed.to_le_bytes());
    // discard the first three
    rng.next_u64();
    rng.next_u64();
    rng.next_u64();
    rng
}

pub enum TimeLimit {
    Duration(Duration),
    None,
}

impl TimeLimit {
    pub fn is_none(&self) -> bool {
        match self {
            Self::None => true,
            _ => false,
        }
    }
}

/// Wall-clock budget running from a caller-supplied start. Everything that
/// must stop in time polls `is_finished` at its loop heads; on expiry the
/// caller emits whatever best answer it holds.
pub struct Countdown {
    start: Timer,
    time_limit: TimeLimit,
}

impl Countdown {
    pub fn new(start: Timer, limit: TimeLimit) -> Self {
        Self {
            start,
            time_limit: limit,
        }
    }

    pub fn unlimited() -> Self {
        Self {
            start: Timer::new(),
            time_limit: TimeLimit::None,
        }
    }

    pub fn time_remaining(&self) -> Duration {
        match self.time_limit {
            TimeLimit::Duration(limit) => limit.saturating_sub(self.time_elapsed()),
            TimeLimit::None => Duration::MAX,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.time_remaining() == Duration::ZERO
    }

    pub fn is_time_remaining(&self) -> bool {
        !self.is_finished()
    }

    pub fn time_elapsed(&self) -> Duration {
        self.start.took().clone().into_std()
    }
}

#[cfg(test)]
pub fn assert_vec_eq<T: PartialEq + Eq + Debug>(expect: &Vec<T>, actual: &Vec<T>) {
    assert_eq!(
        expect.len(),
        actual.len(),
        "sizes of the vecs differ (expect: {}, actual: {})",
        expect.len(),
        actual.len()
    );
    for (idx, (x, y)) in expect.iter().zip(actual.iter()).enumerate() {
        assert_eq!(
            x, y,
            "vecs differ at index {} ({:?} != {:?})\n expect: {:?}\n actual: {:?}",
            idx, x, y, &expect, &actual
        );
    }
}

/// Instance with every flight priced, so every permutation is feasible and
/// the search modules can be exercised without hand-written tables.
#[cfg(test)]
pub(crate) fn dense_test_instance(n: usize) -> crate::problem::Instance {
    use crate::problem::{FlightCostMatrixBuilder, Instance};

    let mut builder = FlightCostMatrixBuilder::with_num_cities(n);
    for day in 0..n {
        for from in 0..n {
            for to in 0..n {
                if from != to {
                    let price = ((7 * day + 3 * from + 5 * to) % 90 + 10) as u32;
                    builder.set_flight(day, from, to, price);
                }
            }
        }
    }
    let names = (0..n).map(|i| format!("C{:02}", i)).collect();
    Instance::new(names, 0, builder.build())
}
