mod common;

use readiness_core::{report_from_payload, CountdownConfig, DashboardReport, FormulaSet};
use serde_json::Value;

#[test]
fn reports_survive_json_round_trip_bit_for_bit() {
    for name in common::PAYLOAD_FIXTURES {
        let payload = common::load_fixture(name).expect("fixture");
        let report = report_from_payload(&payload, &CountdownConfig::default(), FormulaSet::all());
        let json = serde_json::to_string(&report).expect("serialize");
        let parsed: DashboardReport = serde_json::from_str(&json).expect("deserialize");

        let science = (report.science.unwrap(), parsed.science.unwrap());
        assert_eq!(science.0.ready_score.to_bits(), science.1.ready_score.to_bits());
        assert_eq!(science.0.science_years.to_bits(), science.1.science_years.to_bits());
        assert_eq!(science.0.fast_years.to_bits(), science.1.fast_years.to_bits());

        let convergence = (report.convergence.unwrap(), parsed.convergence.unwrap());
        assert_eq!(convergence.0.tcl.to_bits(), convergence.1.tcl.to_bits());
        assert_eq!(convergence.0.crl.to_bits(), convergence.1.crl.to_bits());

        let curve = (report.curve.unwrap(), parsed.curve.unwrap());
        assert_eq!(curve.0.tech_years.to_bits(), curve.1.tech_years.to_bits());
        assert_eq!(curve.0.civ_years.to_bits(), curve.1.civ_years.to_bits());

        assert_eq!(report, parsed, "fixture {name}");
    }
}

#[test]
fn report_uses_dashboard_field_names() {
    let payload = common::load_fixture("apps_script_five.json").expect("fixture");
    let report = report_from_payload(&payload, &CountdownConfig::default(), FormulaSet::all());
    let json: Value = serde_json::to_value(&report).expect("serialize");

    for key in ["readyScore", "scienceYears", "scienceDays", "fastYears", "fastDays"] {
        assert!(json["science"].get(key).is_some(), "science.{key}");
    }
    for key in ["TCL", "TCC_days", "CRL", "CRC_days", "RiskDelta", "RiskLevel", "narrativeStability"] {
        assert!(json["convergence"].get(key).is_some(), "convergence.{key}");
    }
    for key in ["techLevel", "techYears", "techDays", "civLevel", "civYears", "civDays"] {
        assert!(json["curve"].get(key).is_some(), "curve.{key}");
    }
    for key in ["code", "label", "techIndex", "heartIndex", "readinessIndex", "balanceIndex"] {
        assert!(json["civilization"].get(key).is_some(), "civilization.{key}");
    }
    for key in ["asi_index", "countdown_days", "safety_bias", "balance_index", "five_element_maturity"] {
        assert!(json["legacy"].get(key).is_some(), "legacy.{key}");
    }
    assert_eq!(json["civilization"]["code"], "seed");
    assert_eq!(json["convergence"]["RiskLevel"], "Safe");
}
