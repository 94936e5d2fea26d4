mod common;

use readiness_core::{
    build_report, load_countdown_config_from_env, ClassificationPrecedence, CivilizationCode,
    FormulaSet, RawDomains, ReadinessIndexes, ReadinessSnapshot, RiskLevel,
    COUNTDOWN_CONFIG_PATH_ENV,
};

// Single test in this binary: it mutates the process environment.
#[test]
fn env_override_changes_tuning_and_bad_paths_fall_back() {
    std::env::set_var(
        COUNTDOWN_CONFIG_PATH_ENV,
        common::fixture_path("countdown_config_legacy.json"),
    );
    let (config, metadata) = load_countdown_config_from_env();
    assert!(metadata.path().is_some());
    assert_eq!(
        config.civilization().precedence(),
        ClassificationPrecedence::Legacy
    );
    assert_eq!(config.convergence().tension_band_days(), 20_000);

    let saturated = ReadinessSnapshot::from_indexes(ReadinessIndexes::new(1.0, 1.0, 1.0, 1.0, 1.0));
    let report = build_report(&saturated, &config, FormulaSet::CONVERGENCE);
    let convergence = report.convergence.expect("convergence");
    assert_eq!(convergence.risk_delta, -3_750);
    assert_eq!(convergence.risk_level, RiskLevel::Tense);

    let lopsided =
        ReadinessSnapshot::from_domains(RawDomains::new(10.0, 100.0, 100.0, 100.0, 10.0));
    let report = build_report(&lopsided, &config, FormulaSet::CIVILIZATION);
    assert_eq!(
        report.civilization.expect("civilization").code,
        CivilizationCode::Seed
    );

    std::env::set_var(COUNTDOWN_CONFIG_PATH_ENV, common::fixture_path("missing.json"));
    let (config, metadata) = load_countdown_config_from_env();
    assert!(metadata.path().is_none());
    assert_eq!(
        config.civilization().precedence(),
        ClassificationPrecedence::Current
    );
    let report = build_report(&saturated, &config, FormulaSet::CONVERGENCE);
    assert_eq!(
        report.convergence.expect("convergence").risk_level,
        RiskLevel::Crash
    );
    let report = build_report(&lopsided, &config, FormulaSet::CIVILIZATION);
    assert_eq!(
        report.civilization.expect("civilization").code,
        CivilizationCode::Basic
    );

    std::env::remove_var(COUNTDOWN_CONFIG_PATH_ENV);
}
