//! Countdown and risk calculators behind the civilization readiness dashboard.
//!
//! Five readiness indexes go in; every formula generation the dashboard has
//! shipped comes out. Each calculator is a pure function of a normalized
//! [`ReadinessSnapshot`] and the tuning constants in [`CountdownConfig`].
//! [`build_report`] runs the generations a caller asks for.

pub mod civilization;
pub mod convergence;
mod countdown_config;
pub mod curve;
pub mod legacy;
pub mod normalize;
mod report;
pub mod rounding;
pub mod science;

pub use civilization::{civilization_status, classify, CivilizationIndexes};
pub use convergence::{classify_risk, convergence_countdown};
pub use countdown_config::{
    load_countdown_config_from_env, CivilizationThresholds, ClassificationPrecedence,
    ConvergenceConfig, CountdownConfig, CountdownConfigError, CountdownConfigMetadata,
    CurveConfig, ScienceConfig, BUILTIN_COUNTDOWN_CONFIG, COUNTDOWN_CONFIG_PATH_ENV,
};
pub use curve::{curve_countdown, curve_from_levels};
pub use legacy::legacy_readiness;
pub use normalize::normalize_payload;
pub use report::{
    build_report, report_from_payload, CountdownModel, FormulaSet, UnknownFormulaError,
};
pub use science::{readiness_score, science_countdown};

pub use readiness_schema::{
    CivilizationCode, CivilizationStatus, ConvergenceCountdown, CurveCountdown, DashboardReport,
    LegacyReadiness, NarrativeData, RawDomains, ReadinessAxis, ReadinessIndexes,
    ReadinessSnapshot, RiskLevel, ScienceCountdown,
};
