//! Per-row change baselines
//!
//! The baseline for a key is the bid/offer pair most recently *rendered*,
//! so `diff` only reads and `commit` only writes. Callers must read every diff
//! of a pass before committing any of it (see `pass::prepare_pass`).

use std::collections::HashMap;

use crate::domain::Direction;

/// Percent move from `previous` to `current`.
/// A zero baseline or a non-finite result yields 0.
pub fn percent_change(previous: f64, current: f64) -> f64 {
    if previous == 0.0 {
        return 0.0;
    }

    let pct = (current - previous) / previous * 100.0;
    if pct.is_finite() {
        pct
    } else {
        0.0
    }
}

/// Change of one side of a row relative to its baseline
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SideChange {
    pub direction: Direction,
    pub percent_change: f64,
}

impl SideChange {
    fn between(previous: f64, current: f64) -> Self {
        Self {
            direction: Direction::between(previous, current),
            percent_change: percent_change(previous, current),
        }
    }
}

/// Change of both sides of a row
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RowChange {
    pub bid: SideChange,
    pub offer: SideChange,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Baseline {
    bid: f64,
    offer: f64,
}

/// Last rendered bid/offer per `symbol_level`
#[derive(Debug, Default, Clone)]
pub struct ChangeTracker {
    baselines: HashMap<String, Baseline>,
}

impl ChangeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compare new values against the committed baseline.
    /// A key without a baseline is `Flat` with 0% on both sides.
    pub fn diff(&self, symbol_level: &str, bid: f64, offer: f64) -> RowChange {
        match self.baselines.get(symbol_level) {
            Some(baseline) => RowChange {
                bid: SideChange::between(baseline.bid, bid),
                offer: SideChange::between(baseline.offer, offer),
            },
            None => RowChange::default(),
        }
    }

    /// Overwrite the baseline for a key
    pub fn commit(&mut self, symbol_level: &str, bid: f64, offer: f64) {
        let baseline = Baseline { bid, offer };
        match self.baselines.get_mut(symbol_level) {
            Some(existing) => *existing = baseline,
            None => {
                self.baselines.insert(symbol_level.to_string(), baseline);
            }
        }
    }

    /// Committed `(bid, offer)` for a key
    pub fn baseline(&self, symbol_level: &str) -> Option<(f64, f64)> {
        self.baselines.get(symbol_level).map(|b| (b.bid, b.offer))
    }

    pub fn len(&self) -> usize {
        self.baselines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.baselines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_observation_is_flat() {
        let tracker = ChangeTracker::new();
        let change = tracker.diff("AAPL-1", 100.0, 101.0);

        assert_eq!(change.bid.direction, Direction::Flat);
        assert_eq!(change.offer.direction, Direction::Flat);
        assert_eq!(change.bid.percent_change, 0.0);
    }

    #[test]
    fn test_diff_against_committed_baseline() {
        let mut tracker = ChangeTracker::new();
        tracker.commit("AAPL-1", 100.0, 101.0);

        let change = tracker.diff("AAPL-1", 105.0, 100.0);
        assert_eq!(change.bid.direction, Direction::Up);
        assert!((change.bid.percent_change - 5.0).abs() < 1e-9);
        assert_eq!(change.offer.direction, Direction::Down);

        let same = tracker.diff("AAPL-1", 100.0, 101.0);
        assert_eq!(same.bid.direction, Direction::Flat);
        assert_eq!(same.offer.direction, Direction::Flat);
    }

    #[test]
    fn test_diff_does_not_move_baseline() {
        let mut tracker = ChangeTracker::new();
        tracker.commit("AAPL-1", 100.0, 101.0);

        tracker.diff("AAPL-1", 105.0, 101.0);
        let again = tracker.diff("AAPL-1", 105.0, 101.0);

        assert_eq!(again.bid.direction, Direction::Up);
        assert_eq!(tracker.baseline("AAPL-1"), Some((100.0, 101.0)));
    }

    #[test]
    fn test_zero_baseline_guard() {
        let mut tracker = ChangeTracker::new();
        tracker.commit("AAPL-1", 0.0, 0.0);

        let change = tracker.diff("AAPL-1", 10.0, 0.0);
        assert_eq!(change.bid.direction, Direction::Up);
        assert_eq!(change.bid.percent_change, 0.0);
        assert_eq!(change.offer.percent_change, 0.0);
    }

    #[test]
    fn test_percent_change_non_finite() {
        assert_eq!(percent_change(f64::MIN_POSITIVE, f64::MAX), 0.0);
        assert_eq!(percent_change(100.0, f64::NAN), 0.0);
        assert_eq!(percent_change(50.0, 25.0), -50.0);
    }
}
