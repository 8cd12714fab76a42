// File: crates/dashboard-core/tests/filter.rs
// Purpose: Selection retargeting emits the minimal delta sequence.

use dashboard_core::filter::{Delta, DimensionFilter};
use dashboard_core::{Rank, Record, Sex};

fn rec(discipline: &str) -> Record {
    Record {
        salary: 100_000,
        sex: Sex::Female,
        rank: Rank::Prof,
        discipline: discipline.to_owned(),
        yrs_service: 10,
        yrs_since_phd: 12,
    }
}

fn discipline(r: &Record) -> &str {
    &r.discipline
}

#[test]
fn retarget_diffs_membership() {
    let records = vec![rec("A"), rec("B"), rec("A"), rec("B")];
    let mut filter = DimensionFilter::new(discipline);
    assert!(records.iter().all(|r| filter.accepts(r)));

    // None -> Some("A"): only the B rows leave.
    let deltas = filter.retarget(&records, Some("A"));
    assert_eq!(deltas.len(), 2);
    assert!(deltas
        .iter()
        .all(|d| matches!(d, Delta::Removed(r) if r.discipline == "B")));

    // Some("A") -> Some("B"): A rows leave, B rows enter.
    let deltas = filter.retarget(&records, Some("B"));
    assert_eq!(deltas.len(), 4);
    let added = deltas
        .iter()
        .filter(|d| matches!(d, Delta::Added(r) if r.discipline == "B"))
        .count();
    let removed = deltas
        .iter()
        .filter(|d| matches!(d, Delta::Removed(r) if r.discipline == "A"))
        .count();
    assert_eq!((added, removed), (2, 2));

    // Some("B") -> None: the A rows come back.
    let deltas = filter.retarget(&records, None);
    assert_eq!(deltas.len(), 2);
    assert!(deltas
        .iter()
        .all(|d| matches!(d, Delta::Added(r) if r.discipline == "A")));
}

#[test]
fn noop_retarget_emits_nothing() {
    let records = vec![rec("A"), rec("B")];
    let mut filter = DimensionFilter::new(discipline);

    assert!(filter.retarget(&records, None).is_empty());
    let _ = filter.retarget(&records, Some("A"));
    assert!(filter.retarget(&records, Some("A")).is_empty());
    assert_eq!(filter.selected(), Some("A"));

    // Unknown selection empties the active set.
    let deltas = filter.retarget(&records, Some("Z"));
    assert_eq!(deltas.len(), 1);
    assert!(!filter.accepts(&records[0]));
}
