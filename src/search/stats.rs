use std::fmt;

use enum_map::{Enum, EnumMap};

#[derive(Copy, Clone, Debug, Enum)]
pub enum MoveKind {
    AdjacentSwap,
    Swap,
    SegmentFlip,
}

/// Accepted-move counters, accumulated across all local-search invocations
/// of a run and reported once at the end.
#[derive(Default)]
pub struct SearchStats {
    accepted: EnumMap<MoveKind, usize>,
}

impl SearchStats {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline(always)]
    pub fn record_accept(&mut self, kind: MoveKind) {
        self.accepted[kind] += 1;
    }

    pub fn accepted(&self, kind: MoveKind) -> usize {
        self.accepted[kind]
    }

    pub fn total_accepted(&self) -> usize {
        self.accepted.values().sum()
    }
}

impl fmt::Display for SearchStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} total ({} adjacent swaps, {} swaps, {} flips)",
            self.total_accepted(),
            self.accepted[MoveKind::AdjacentSwap],
            self.accepted[MoveKind::Swap],
            self.accepted[MoveKind::SegmentFlip],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_accepted_moves_per_kind() {
        let mut stats = SearchStats::new();
        stats.record_accept(MoveKind::Swap);
        stats.record_accept(MoveKind::Swap);
        stats.record_accept(MoveKind::SegmentFlip);

        assert_eq!(stats.accepted(MoveKind::Swap), 2);
        assert_eq!(stats.accepted(MoveKind::AdjacentSwap), 0);
        assert_eq!(stats.total_accepted(), 3);
    }
}
