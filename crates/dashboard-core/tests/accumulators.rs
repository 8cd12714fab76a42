// File: crates/dashboard-core/tests/accumulators.rs
// Purpose: Transition-level properties of the Tally and Average accumulators.

use dashboard_core::{Average, Tally};

#[test]
fn average_matches_running_scenario() {
    let avg = Average::default().add(90_000.0).add(110_000.0);
    assert_eq!(avg.count, 2);
    assert_eq!(avg.average, 100_000.0);

    let avg = avg.remove(90_000.0);
    assert_eq!(avg.average, 110_000.0);

    let avg = avg.remove(110_000.0);
    assert_eq!(avg, Average::default());
}

#[test]
fn average_is_always_total_over_count() {
    let values = [91_000.0, 103_750.0, 88_125.5, 120_000.0, 99_999.25];
    let mut avg = Average::default();
    for &v in &values {
        avg = avg.add(v);
        let expect = avg.total / avg.count as f64;
        assert_eq!(avg.average, expect);
    }
    for &v in &values[..3] {
        avg = avg.remove(v);
        let expect = if avg.count == 0 {
            0.0
        } else {
            avg.total / avg.count as f64
        };
        assert_eq!(avg.average, expect);
    }
}

#[test]
fn average_round_trip_has_zero_drift() {
    // Awkward decimals on purpose: plain subtraction would leave residue.
    let values = [0.1, 0.2, 0.3, 1e9, 7.77, 0.123456789];
    let mut avg = Average::default();
    for &v in &values {
        avg = avg.add(v);
    }
    // Remove in a different order than added.
    for &v in &[0.3, 1e9, 0.1, 0.123456789, 7.77, 0.2] {
        avg = avg.remove(v);
    }
    assert_eq!(avg, Average::default());
    assert_eq!(avg.total.to_bits(), 0.0f64.to_bits());
    assert_eq!(avg.average.to_bits(), 0.0f64.to_bits());
}

#[test]
fn removing_last_value_resets_exactly() {
    let avg = Average::default().add(0.1).add(0.2).remove(0.2).remove(0.1);
    // Not merely "close to zero": the last removal resets the state.
    assert_eq!(avg.total, 0.0);
    assert_eq!(avg.average, 0.0);
    assert_eq!(avg.count, 0);
}

#[test]
fn tally_round_trip_and_bounds() {
    let flags = [true, false, true, true, false];
    let mut tally = Tally::default();
    for &m in &flags {
        tally = tally.add(m);
        assert!(tally.matched <= tally.count);
    }
    assert_eq!(tally.count, 5);
    assert_eq!(tally.matched, 3);

    for &m in &[false, true, true, false, true] {
        tally = tally.remove(m);
        assert!(tally.matched <= tally.count);
    }
    assert_eq!(tally, Tally::default());
}

#[test]
fn tally_ratio_is_zero_on_empty() {
    assert_eq!(Tally::default().ratio(), 0.0);

    let tally = Tally::default().add(true).add(false);
    assert_eq!(tally.ratio(), 0.5);

    let tally = tally.remove(true).remove(false);
    assert_eq!(tally.ratio(), 0.0);
}
