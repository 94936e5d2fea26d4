use std::{
    env, fs, io,
    path::{Path, PathBuf},
    sync::Arc,
};

use serde::Deserialize;
use thiserror::Error;

pub const BUILTIN_COUNTDOWN_CONFIG: &str = include_str!("data/countdown_config.json");

pub const COUNTDOWN_CONFIG_PATH_ENV: &str = "COUNTDOWN_CONFIG_PATH";

/// Tunable constants for every formula generation, kept in one place.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CountdownConfig {
    days_per_year: f64,
    science: ScienceConfig,
    convergence: ConvergenceConfig,
    curve: CurveConfig,
    civilization: CivilizationThresholds,
}

impl CountdownConfig {
    pub fn builtin() -> Arc<Self> {
        Arc::new(
            Self::from_json_str(BUILTIN_COUNTDOWN_CONFIG)
                .expect("builtin countdown config should parse"),
        )
    }

    pub fn from_json_str(json: &str) -> Result<Self, CountdownConfigError> {
        let config: CountdownConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, CountdownConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| CountdownConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&contents)
    }

    pub fn validate(&self) -> Result<(), CountdownConfigError> {
        ensure_positive("days_per_year", self.days_per_year)?;
        ensure_non_negative(
            "science.science_horizon_years",
            self.science.science_horizon_years,
        )?;
        ensure_non_negative("science.fast_horizon_years", self.science.fast_horizon_years)?;
        ensure_positive("convergence.tech_base_days", self.convergence.tech_base_days)?;
        ensure_positive(
            "convergence.safety_base_days",
            self.convergence.safety_base_days,
        )?;
        if self.convergence.tension_band_days < 0 {
            return Err(CountdownConfigError::invalid(
                "convergence.tension_band_days",
                "must not be negative",
            ));
        }
        ensure_non_negative(
            "convergence.default_narrative_stability",
            self.convergence.default_narrative_stability,
        )?;
        ensure_non_negative("curve.tech_horizon_years", self.curve.tech_horizon_years)?;
        ensure_non_negative("curve.civ_scale_years", self.curve.civ_scale_years)?;
        ensure_positive("curve.civ_offset", self.curve.civ_offset)?;
        ensure_positive(
            "civilization.balance_gap_span",
            self.civilization.balance_gap_span,
        )?;
        Ok(())
    }

    pub fn days_per_year(&self) -> f64 {
        self.days_per_year
    }

    pub fn science(&self) -> &ScienceConfig {
        &self.science
    }

    pub fn convergence(&self) -> &ConvergenceConfig {
        &self.convergence
    }

    pub fn curve(&self) -> &CurveConfig {
        &self.curve
    }

    pub fn civilization(&self) -> &CivilizationThresholds {
        &self.civilization
    }
}

impl Default for CountdownConfig {
    fn default() -> Self {
        Self {
            days_per_year: 365.0,
            science: ScienceConfig::default(),
            convergence: ConvergenceConfig::default(),
            curve: CurveConfig::default(),
            civilization: CivilizationThresholds::default(),
        }
    }
}

fn ensure_positive(field: &'static str, value: f64) -> Result<(), CountdownConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(CountdownConfigError::invalid(field, "must be a positive number"))
    }
}

fn ensure_non_negative(field: &'static str, value: f64) -> Result<(), CountdownConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(CountdownConfigError::invalid(
            field,
            "must be a non-negative number",
        ))
    }
}

#[derive(Debug, Error)]
pub enum CountdownConfigError {
    #[error("failed to parse countdown config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("failed to read countdown config from {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid countdown config value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

impl CountdownConfigError {
    fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            field,
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScienceConfig {
    science_horizon_years: f64,
    fast_horizon_years: f64,
}

impl ScienceConfig {
    pub fn science_horizon_years(&self) -> f64 {
        self.science_horizon_years
    }

    pub fn fast_horizon_years(&self) -> f64 {
        self.fast_horizon_years
    }
}

impl Default for ScienceConfig {
    fn default() -> Self {
        Self {
            science_horizon_years: 30.0,
            fast_horizon_years: 20.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ConvergenceConfig {
    tech_base_days: f64,
    safety_base_days: f64,
    tension_band_days: i64,
    default_narrative_stability: f64,
}

impl ConvergenceConfig {
    pub fn tech_base_days(&self) -> f64 {
        self.tech_base_days
    }

    pub fn safety_base_days(&self) -> f64 {
        self.safety_base_days
    }

    /// Width of the band below zero in which a negative risk delta is still `Tense`.
    pub fn tension_band_days(&self) -> i64 {
        self.tension_band_days
    }

    pub fn default_narrative_stability(&self) -> f64 {
        self.default_narrative_stability
    }
}

impl Default for ConvergenceConfig {
    fn default() -> Self {
        Self {
            tech_base_days: 100_000.0,
            safety_base_days: 50_000.0,
            tension_band_days: 500,
            default_narrative_stability: 75.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CurveConfig {
    tech_horizon_years: f64,
    civ_scale_years: f64,
    civ_offset: f64,
}

impl CurveConfig {
    pub fn tech_horizon_years(&self) -> f64 {
        self.tech_horizon_years
    }

    pub fn civ_scale_years(&self) -> f64 {
        self.civ_scale_years
    }

    /// Added to the civilization level before taking the reciprocal; must stay positive.
    pub fn civ_offset(&self) -> f64 {
        self.civ_offset
    }
}

impl Default for CurveConfig {
    fn default() -> Self {
        Self {
            tech_horizon_years: 30.0,
            civ_scale_years: 20.0,
            civ_offset: 0.4,
        }
    }
}

/// Decision order used by the civilization classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ClassificationPrecedence {
    /// basic → golden → runaway → heart → seed
    #[default]
    Current,
    /// golden → heart → runaway → basic → seed, as shipped on the first status card
    Legacy,
}

impl ClassificationPrecedence {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClassificationPrecedence::Current => "current",
            ClassificationPrecedence::Legacy => "legacy",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CivilizationThresholds {
    precedence: ClassificationPrecedence,
    basic_readiness_max: f64,
    golden_readiness_min: f64,
    golden_balance_min: f64,
    skew_gap: f64,
    heart_readiness_min: f64,
    balance_gap_span: f64,
    legacy_basic_axis_max: f64,
}

impl CivilizationThresholds {
    pub fn precedence(&self) -> ClassificationPrecedence {
        self.precedence
    }

    /// Readiness strictly below this is `basic`.
    pub fn basic_readiness_max(&self) -> f64 {
        self.basic_readiness_max
    }

    pub fn golden_readiness_min(&self) -> f64 {
        self.golden_readiness_min
    }

    pub fn golden_balance_min(&self) -> f64 {
        self.golden_balance_min
    }

    /// Tech/heart gap that must be strictly exceeded for `runaway` or `heart`.
    pub fn skew_gap(&self) -> f64 {
        self.skew_gap
    }

    pub fn heart_readiness_min(&self) -> f64 {
        self.heart_readiness_min
    }

    /// Gap at which the balance index bottoms out at zero.
    pub fn balance_gap_span(&self) -> f64 {
        self.balance_gap_span
    }

    pub fn legacy_basic_axis_max(&self) -> f64 {
        self.legacy_basic_axis_max
    }
}

impl Default for CivilizationThresholds {
    fn default() -> Self {
        Self {
            precedence: ClassificationPrecedence::Current,
            basic_readiness_max: 20.0,
            golden_readiness_min: 80.0,
            golden_balance_min: 80.0,
            skew_gap: 20.0,
            heart_readiness_min: 40.0,
            balance_gap_span: 50.0,
            legacy_basic_axis_max: 30.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountdownConfigMetadata {
    path: Option<PathBuf>,
}

impl CountdownConfigMetadata {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }

    /// `None` when the builtin config is in use.
    pub fn path(&self) -> Option<&PathBuf> {
        self.path.as_ref()
    }
}

pub fn load_countdown_config_from_env() -> (Arc<CountdownConfig>, CountdownConfigMetadata) {
    let override_path = env::var(COUNTDOWN_CONFIG_PATH_ENV).ok().map(PathBuf::from);
    if let Some(path) = override_path {
        match CountdownConfig::from_file(&path) {
            Ok(config) => {
                tracing::info!(
                    target: "asi_countdown::config",
                    path = %path.display(),
                    precedence = config.civilization().precedence().as_str(),
                    "countdown_config.loaded=file"
                );
                return (
                    Arc::new(config),
                    CountdownConfigMetadata::new(Some(path)),
                );
            }
            Err(err) => {
                tracing::warn!(
                    target: "asi_countdown::config",
                    path = %path.display(),
                    error = %err,
                    "countdown_config.load_failed"
                );
            }
        }
    }

    let config = CountdownConfig::builtin();
    tracing::info!(
        target: "asi_countdown::config",
        precedence = config.civilization().precedence().as_str(),
        "countdown_config.loaded=builtin"
    );
    (config, CountdownConfigMetadata::new(None))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_matches_default() {
        let builtin = CountdownConfig::builtin();
        assert_eq!(*builtin, CountdownConfig::default());
    }

    #[test]
    fn partial_json_keeps_other_defaults() {
        let config = CountdownConfig::from_json_str(
            r#"{ "civilization": { "precedence": "legacy" }, "convergence": { "tension_band_days": 250 } }"#,
        )
        .expect("partial config should parse");
        assert_eq!(
            config.civilization().precedence(),
            ClassificationPrecedence::Legacy
        );
        assert_eq!(config.civilization().basic_readiness_max(), 20.0);
        assert_eq!(config.convergence().tension_band_days(), 250);
        assert_eq!(config.convergence().tech_base_days(), 100_000.0);
        assert_eq!(config.curve(), &CurveConfig::default());
    }

    #[test]
    fn rejects_non_positive_civ_offset() {
        let err = CountdownConfig::from_json_str(r#"{ "curve": { "civ_offset": 0.0 } }"#)
            .expect_err("zero offset must be rejected");
        assert!(matches!(
            err,
            CountdownConfigError::Invalid {
                field: "curve.civ_offset",
                ..
            }
        ));
    }

    #[test]
    fn rejects_negative_tension_band() {
        let err =
            CountdownConfig::from_json_str(r#"{ "convergence": { "tension_band_days": -1 } }"#)
                .expect_err("negative band must be rejected");
        assert!(err.to_string().contains("tension_band_days"));
    }

    #[test]
    fn reports_parse_errors() {
        let err = CountdownConfig::from_json_str("{ not json").expect_err("parse failure");
        assert!(matches!(err, CountdownConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let path = Path::new("definitely/not/here/countdown_config.json");
        let err = CountdownConfig::from_file(path).expect_err("missing file");
        assert!(matches!(err, CountdownConfigError::Read { .. }));
    }
}
