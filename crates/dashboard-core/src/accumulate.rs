// File: crates/dashboard-core/src/accumulate.rs
// Summary: Incremental accumulator states updated in O(1) per add/remove transition.
// Notes:
// - Transitions are explicit state-passing: each consumes the previous state
//   and returns the next. Nothing here touches shared mutable state, which is
//   what keeps these testable without the filtering layer present.

/// Count pair: total rows seen plus rows satisfying a secondary predicate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Tally {
    pub count: u64,
    pub matched: u64,
}

impl Tally {
    pub fn add(mut self, matched: bool) -> Self {
        self.count += 1;
        if matched {
            self.matched += 1;
        }
        self
    }

    pub fn remove(mut self, matched: bool) -> Self {
        self.count = self.count.saturating_sub(1);
        if matched {
            self.matched = self.matched.saturating_sub(1);
        }
        self
    }

    /// Fraction of rows matching the predicate; 0.0 on an empty tally.
    /// The zero-denominator policy is deliberate and relied on by the
    /// indicator and rank-distribution widgets.
    pub fn ratio(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.matched as f64 / self.count as f64
        }
    }
}

/// Running average: `average` is recomputed from `total / count` on every
/// transition, never nudged incrementally, so it cannot drift.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Average {
    pub count: u64,
    pub total: f64,
    pub average: f64,
}

impl Average {
    pub fn add(mut self, value: f64) -> Self {
        self.count += 1;
        self.total += value;
        self.average = self.total / self.count as f64;
        self
    }

    /// Removing the last value resets `total` and `average` to exactly 0.0
    /// rather than leaving float-subtraction residue behind.
    pub fn remove(mut self, value: f64) -> Self {
        self.count = self.count.saturating_sub(1);
        if self.count == 0 {
            self.total = 0.0;
            self.average = 0.0;
        } else {
            self.total -= value;
            self.average = self.total / self.count as f64;
        }
        self
    }
}
