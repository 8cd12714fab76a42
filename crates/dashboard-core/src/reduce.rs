// File: crates/dashboard-core/src/reduce.rs
// Summary: Reducer seam: add/remove/initial triples tying accumulator states to records.

use crate::accumulate::{Average, Tally};
use crate::record::{Rank, Record, Sex};

/// An add/remove/initial triple over some accumulator state.
///
/// The filtering layer fires `add` when a record enters the active selection
/// and `remove` when it leaves; both are O(1) and symmetric, so any sequence
/// of adds undone by the same removes lands back on `initial()`.
pub trait Reduce {
    type State: Clone + Default;

    fn initial(&self) -> Self::State {
        Self::State::default()
    }

    fn add(&self, state: Self::State, record: &Record) -> Self::State;

    fn remove(&self, state: Self::State, record: &Record) -> Self::State;
}

/// Plain row count, the default group reduction. Drives the discipline
/// selector, the gender-balance chart, and scatter point multiplicity.
#[derive(Clone, Copy, Debug, Default)]
pub struct CountRows;

impl Reduce for CountRows {
    type State = u64;

    fn add(&self, state: u64, _record: &Record) -> u64 {
        state + 1
    }

    fn remove(&self, state: u64, _record: &Record) -> u64 {
        state.saturating_sub(1)
    }
}

/// Tally of rows holding one academic rank, for the rank-distribution stacks.
#[derive(Clone, Copy, Debug)]
pub struct RankShare {
    pub rank: Rank,
}

impl Reduce for RankShare {
    type State = Tally;

    fn add(&self, state: Tally, record: &Record) -> Tally {
        state.add(record.rank == self.rank)
    }

    fn remove(&self, state: Tally, record: &Record) -> Tally {
        state.remove(record.rank == self.rank)
    }
}

/// Tally scoped to one sex: only rows of that sex are counted at all, and of
/// those, full professors are the matched subset. Backs the
/// percent-are-professors indicators.
#[derive(Clone, Copy, Debug)]
pub struct ProfessorShare {
    pub sex: Sex,
}

impl Reduce for ProfessorShare {
    type State = Tally;

    fn add(&self, state: Tally, record: &Record) -> Tally {
        if record.sex == self.sex {
            state.add(record.rank == Rank::Prof)
        } else {
            state
        }
    }

    fn remove(&self, state: Tally, record: &Record) -> Tally {
        if record.sex == self.sex {
            state.remove(record.rank == Rank::Prof)
        } else {
            state
        }
    }
}

/// Running average of salary.
#[derive(Clone, Copy, Debug, Default)]
pub struct SalaryAverage;

impl Reduce for SalaryAverage {
    type State = Average;

    fn add(&self, state: Average, record: &Record) -> Average {
        state.add(record.salary as f64)
    }

    fn remove(&self, state: Average, record: &Record) -> Average {
        state.remove(record.salary as f64)
    }
}
