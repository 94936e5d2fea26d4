mod common;

use readiness_core::{build_report, CountdownConfig, FormulaSet, ReadinessSnapshot};

#[test]
fn fallback_report_builds() {
    let report = build_report(
        &ReadinessSnapshot::fallback(),
        &CountdownConfig::builtin(),
        FormulaSet::all(),
    );
    assert!(report.science.is_some());
    assert!(report.convergence.is_some());
    assert!(report.curve.is_some());
    assert!(report.civilization.is_some());
    assert!(report.legacy.is_some());
}

#[test]
fn fixtures_are_readable() {
    for name in common::PAYLOAD_FIXTURES {
        common::load_fixture(name).expect("fixture should load");
    }
}
