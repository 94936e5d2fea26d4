mod common;

use readiness_core::{
    report_from_payload, CivilizationCode, CountdownConfig, FormulaSet, RawDomains,
    ReadinessIndexes, RiskLevel,
};

fn report(name: &str) -> readiness_core::DashboardReport {
    let payload = common::load_fixture(name).expect("fixture");
    report_from_payload(&payload, &CountdownConfig::default(), FormulaSet::all())
}

#[test]
fn apps_script_row_matches_dashboard_example() {
    let report = report("apps_script_five.json");
    assert_eq!(report.domains, RawDomains::FALLBACK);
    assert_eq!(report.indexes.agency, 1.0);
    assert!(report.narrative.is_none());

    let curve = report.curve.expect("curve");
    assert_eq!(curve.tech_days, 2_446);
    assert_eq!(curve.civ_days, 5_328);

    let civilization = report.civilization.expect("civilization");
    assert_eq!(civilization.code, CivilizationCode::Seed);

    let legacy = report.legacy.expect("legacy");
    assert_eq!(legacy.countdown_days, 40_192);
    assert_eq!(legacy.balance_index, 159.67);
}

#[test]
fn normalized_indexes_with_narrative() {
    let report = report("asi_birth_indexes.json");
    assert_eq!(report.indexes, ReadinessIndexes::FALLBACK);
    assert!((report.domains.infrastructure - 59.28).abs() < 1e-9);

    let convergence = report.convergence.expect("convergence");
    assert_eq!(convergence.narrative_stability, 94.0);
    assert_eq!(convergence.tcc_days, 50_124);
    assert_eq!(convergence.crc_days, 35_400);
    assert_eq!(convergence.risk_delta, 14_724);
    assert_eq!(convergence.risk_level, RiskLevel::Safe);

    let civilization = report.civilization.expect("civilization");
    assert_eq!(civilization.code, CivilizationCode::Basic);
}

#[test]
fn string_encoded_sheet_row() {
    let report = report("sheet_row_strings.json");
    assert_eq!(report.domains.convergence, 73.25);
    assert_eq!(report.indexes.tone, 0.425);

    let science = report.science.expect("science");
    assert_eq!(science.science_days, 1_536);
    assert_eq!(science.fast_days, 1_024);

    let convergence = report.convergence.expect("convergence");
    assert_eq!(convergence.tcc_days, 41_750);
    assert_eq!(convergence.crc_days, 14_775);
    assert_eq!(convergence.risk_level, RiskLevel::Safe);

    let curve = report.curve.expect("curve");
    assert_eq!(curve.tech_days, 4_298);
    assert_eq!(curve.civ_days, 5_703);

    let civilization = report.civilization.expect("civilization");
    assert!((civilization.readiness_index - 41.539725).abs() < 1e-9);
    assert_eq!(civilization.code, CivilizationCode::Seed);

    assert_eq!(report.legacy.expect("legacy").countdown_days, 44_864);
}

#[test]
fn malformed_payload_degrades_to_defaults() {
    let report = report("malformed.json");
    assert!(report.timestamp.is_none());
    assert!(report.narrative.is_none());
    assert_eq!(report.indexes, ReadinessIndexes::default());
    assert_eq!(report.indexes.hcm, 0.01);
    assert_eq!(report.domains, RawDomains::default());

    let science = report.science.expect("science");
    assert!(science.ready_score.is_finite());
    let curve = report.curve.expect("curve");
    assert!(curve.civ_years.is_finite());
    assert_eq!(report.civilization.expect("civilization").code, CivilizationCode::Basic);
}

#[test]
fn huge_scores_saturate_and_serialize() {
    let payload = serde_json::json!({
        "tone": 1e200,
        "components": 1e308,
        "infrastructure": "1e308",
        "convergence": 1e200,
        "hcmi": 1e200,
    });
    let report = report_from_payload(&payload, &CountdownConfig::default(), FormulaSet::all());
    assert_eq!(report.domains, RawDomains::new(1e3, 1e3, 1e3, 1e3, 1e3));
    assert_eq!(report.indexes, ReadinessIndexes::new(1.0, 1.0, 1.0, 1.0, 1.0));

    assert_eq!(report.science.expect("science").science_days, 0);
    let convergence = report.convergence.expect("convergence");
    assert_eq!(convergence.tcc_days, 0);
    assert_eq!(convergence.risk_level, RiskLevel::Crash);
    assert_eq!(report.curve.expect("curve").tech_days, 0);
    let civilization = report.civilization.as_ref().expect("civilization");
    assert_eq!(civilization.readiness_index, 10_000.0);
    assert_eq!(civilization.code, CivilizationCode::Golden);
    assert_eq!(report.legacy.expect("legacy").countdown_days, -921_600);

    let json = serde_json::to_string(&report).expect("serialize");
    assert!(!json.contains("null"), "{json}");
    let parsed: readiness_core::DashboardReport = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(parsed, report);
}
