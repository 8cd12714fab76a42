// File: crates/dashboard-core/src/filter.rs
// Summary: Delta stream fed to groups when the active selection changes.

use crate::record::Record;

/// One membership change in the active row set.
#[derive(Clone, Copy, Debug)]
pub enum Delta<'a> {
    Added(&'a Record),
    Removed(&'a Record),
}

/// Single-dimension selection driver.
///
/// Holds the current selection on one categorical key and, on retarget, diffs
/// old vs. new membership per record to yield the minimal delta sequence.
/// Groups listening to the stream then do O(1) accumulator work per delta
/// instead of rescanning the dataset. This is the seam a multidimensional
/// crossfilter would plug into; it is not one itself.
pub struct DimensionFilter {
    key: fn(&Record) -> &str,
    selected: Option<String>,
}

impl DimensionFilter {
    pub fn new(key: fn(&Record) -> &str) -> Self {
        Self { key, selected: None }
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Whether a record is inside the current selection.
    pub fn accepts(&self, record: &Record) -> bool {
        match &self.selected {
            None => true,
            Some(want) => (self.key)(record) == want,
        }
    }

    /// Switch the selection and return the deltas that take the active row
    /// set from the old selection to the new one. A no-op retarget yields no
    /// deltas.
    pub fn retarget<'a>(
        &mut self,
        records: &'a [Record],
        selection: Option<&str>,
    ) -> Vec<Delta<'a>> {
        let next = selection.map(str::to_owned);
        if next == self.selected {
            return Vec::new();
        }

        let mut deltas = Vec::new();
        for record in records {
            let was = member(&self.selected, self.key, record);
            let now = member(&next, self.key, record);
            match (was, now) {
                (false, true) => deltas.push(Delta::Added(record)),
                (true, false) => deltas.push(Delta::Removed(record)),
                _ => {}
            }
        }
        self.selected = next;
        deltas
    }
}

fn member(selection: &Option<String>, key: fn(&Record) -> &str, record: &Record) -> bool {
    match selection {
        None => true,
        Some(want) => key(record) == want,
    }
}
