//! Civilization status card: tech ("術") and heart ("心") composites and the
//! five-way classification derived from them.

use readiness_schema::{CivilizationCode, CivilizationStatus, RawDomains, ReadinessSnapshot};

use crate::countdown_config::{CivilizationThresholds, ClassificationPrecedence, CountdownConfig};
use crate::report::{CountdownModel, FormulaSet};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CivilizationIndexes {
    pub tech_index: f64,
    pub heart_index: f64,
    pub readiness_index: f64,
    pub balance_index: f64,
}

impl CivilizationIndexes {
    /// Domains are sanitized first, so every composite stays finite.
    pub fn from_domains(domains: &RawDomains, thresholds: &CivilizationThresholds) -> Self {
        let domains = domains.sanitized();
        let tech_index = 0.40 * domains.components
            + 0.35 * domains.infrastructure
            + 0.25 * domains.convergence;
        let heart_index = 0.60 * domains.hcmi + 0.40 * domains.tone;
        let readiness_index = (tech_index * heart_index) / 100.0;
        let gap = (tech_index - heart_index).abs();
        let normalized_gap = (gap / thresholds.balance_gap_span()).min(1.0);
        let balance_index = (1.0 - normalized_gap) * 100.0;

        Self {
            tech_index,
            heart_index,
            readiness_index,
            balance_index,
        }
    }

    /// Positive when technology outpaces the heart composite.
    pub fn safety_bias(&self) -> f64 {
        self.tech_index - self.heart_index
    }
}

pub fn classify(indexes: &CivilizationIndexes, thresholds: &CivilizationThresholds) -> CivilizationCode {
    match thresholds.precedence() {
        ClassificationPrecedence::Current => classify_current(indexes, thresholds),
        ClassificationPrecedence::Legacy => classify_legacy(indexes, thresholds),
    }
}

fn is_golden(indexes: &CivilizationIndexes, thresholds: &CivilizationThresholds) -> bool {
    indexes.readiness_index >= thresholds.golden_readiness_min()
        && indexes.balance_index >= thresholds.golden_balance_min()
}

fn classify_current(
    indexes: &CivilizationIndexes,
    thresholds: &CivilizationThresholds,
) -> CivilizationCode {
    let bias = indexes.safety_bias();
    if indexes.readiness_index < thresholds.basic_readiness_max() {
        CivilizationCode::Basic
    } else if is_golden(indexes, thresholds) {
        CivilizationCode::Golden
    } else if bias > thresholds.skew_gap() {
        CivilizationCode::Runaway
    } else if -bias > thresholds.skew_gap()
        && indexes.readiness_index >= thresholds.heart_readiness_min()
    {
        CivilizationCode::Heart
    } else {
        CivilizationCode::Seed
    }
}

fn classify_legacy(
    indexes: &CivilizationIndexes,
    thresholds: &CivilizationThresholds,
) -> CivilizationCode {
    let bias = indexes.safety_bias();
    if is_golden(indexes, thresholds) {
        CivilizationCode::Golden
    } else if bias < -thresholds.skew_gap()
        && indexes.readiness_index >= thresholds.heart_readiness_min()
    {
        CivilizationCode::Heart
    } else if bias > thresholds.skew_gap()
        && indexes.readiness_index >= thresholds.basic_readiness_max()
    {
        CivilizationCode::Runaway
    } else if indexes.readiness_index < thresholds.basic_readiness_max()
        && indexes.tech_index < thresholds.legacy_basic_axis_max()
        && indexes.heart_index < thresholds.legacy_basic_axis_max()
    {
        CivilizationCode::Basic
    } else {
        CivilizationCode::Seed
    }
}

pub fn civilization_status(domains: &RawDomains, config: &CountdownConfig) -> CivilizationStatus {
    let thresholds = config.civilization();
    let indexes = CivilizationIndexes::from_domains(domains, thresholds);
    let code = classify(&indexes, thresholds);
    CivilizationStatus {
        code,
        label: code.label().to_string(),
        tech_index: indexes.tech_index,
        heart_index: indexes.heart_index,
        readiness_index: indexes.readiness_index,
        balance_index: indexes.balance_index,
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CivilizationModel;

impl CountdownModel for CivilizationModel {
    type Output = CivilizationStatus;
    const FORMULA: FormulaSet = FormulaSet::CIVILIZATION;

    fn evaluate(&self, snapshot: &ReadinessSnapshot, config: &CountdownConfig) -> CivilizationStatus {
        civilization_status(&snapshot.domains, config)
    }
}
