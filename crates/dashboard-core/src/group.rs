// File: crates/dashboard-core/src/group.rs
// Summary: Group-by-category dispatch routing deltas to per-key accumulator series.

use std::collections::BTreeMap;

use crate::filter::Delta;
use crate::record::{Rank, Record, Sex};
use crate::reduce::{RankShare, Reduce};

/// One independent accumulator series per distinct key value.
///
/// A series is created zero-valued the first time its key is observed; after
/// that, each delta touches exactly the series owning the record's key. Keys
/// iterate in sorted order, which keeps bar categories stable.
pub struct Grouped<K: Ord, R: Reduce> {
    key: fn(&Record) -> K,
    reducer: R,
    states: BTreeMap<K, R::State>,
}

impl<K: Ord, R: Reduce> Grouped<K, R> {
    pub fn new(key: fn(&Record) -> K, reducer: R) -> Self {
        Self {
            key,
            reducer,
            states: BTreeMap::new(),
        }
    }

    pub fn apply(&mut self, delta: &Delta<'_>) {
        match *delta {
            Delta::Added(record) => {
                let k = (self.key)(record);
                let prev = self
                    .states
                    .remove(&k)
                    .unwrap_or_else(|| self.reducer.initial());
                self.states.insert(k, self.reducer.add(prev, record));
            }
            Delta::Removed(record) => {
                let k = (self.key)(record);
                let prev = self
                    .states
                    .remove(&k)
                    .unwrap_or_else(|| self.reducer.initial());
                self.states.insert(k, self.reducer.remove(prev, record));
            }
        }
    }

    pub fn get(&self, key: &K) -> Option<&R::State> {
        self.states.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &R::State)> {
        self.states.iter()
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

/// Single accumulator over the whole active row set (no grouping key).
pub struct GroupAll<R: Reduce> {
    reducer: R,
    state: R::State,
}

impl<R: Reduce> GroupAll<R> {
    pub fn new(reducer: R) -> Self {
        let state = reducer.initial();
        Self { reducer, state }
    }

    pub fn apply(&mut self, delta: &Delta<'_>) {
        let prev = std::mem::take(&mut self.state);
        self.state = match *delta {
            Delta::Added(record) => self.reducer.add(prev, record),
            Delta::Removed(record) => self.reducer.remove(prev, record),
        };
    }

    pub fn state(&self) -> &R::State {
        &self.state
    }
}

/// Factory for the rank-distribution series: one independent tally-per-sex
/// group for each rank value.
pub fn rank_by_sex(rank: Rank) -> Grouped<Sex, RankShare> {
    Grouped::new(|r| r.sex, RankShare { rank })
}
