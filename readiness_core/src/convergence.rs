//! v2.0 model: Tech Convergence Level (TCL) against Civilization Readiness
//! Level (CRL), each converted to a day countdown, and the gap between the two
//! classified into a risk level.

use readiness_schema::{
    ConvergenceCountdown, NarrativeData, ReadinessIndexes, ReadinessSnapshot, RiskLevel,
};

use crate::countdown_config::{ConvergenceConfig, CountdownConfig};
use crate::report::{CountdownModel, FormulaSet};
use crate::rounding::round_days;

const LEVEL_MAX: f64 = 100.0;

fn clamp_level(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(0.0, LEVEL_MAX)
    } else {
        0.0
    }
}

/// `100 - |today - avg7d|`, or the configured default when no narrative pair is available.
pub fn narrative_stability(narrative: Option<&NarrativeData>, config: &ConvergenceConfig) -> f64 {
    match narrative {
        Some(narrative) => clamp_level(LEVEL_MAX - (narrative.today - narrative.avg7d).abs()),
        None => clamp_level(config.default_narrative_stability()),
    }
}

/// `0.4 * compute + 0.4 * embodiment + 0.2 * agency`, on the 0–100 scale.
pub fn tech_convergence_level(indexes: &ReadinessIndexes) -> f64 {
    let indexes = indexes.clamped();
    let tcl = 0.4 * (indexes.compute * 100.0)
        + 0.4 * (indexes.embodiment * 100.0)
        + 0.2 * (indexes.agency * 100.0);
    clamp_level(tcl)
}

/// `0.4 * hcm + 0.3 * tone + 0.3 * narrative stability`, on the 0–100 scale.
pub fn civilization_readiness_level(indexes: &ReadinessIndexes, narrative_stability: f64) -> f64 {
    let indexes = indexes.clamped();
    let crl = 0.4 * (indexes.hcm * 100.0)
        + 0.3 * (indexes.tone * 100.0)
        + 0.3 * narrative_stability;
    clamp_level(crl)
}

/// Days remaining from `base_days` once `level` percent of the way has been covered.
pub fn level_countdown_days(level: f64, base_days: f64) -> i64 {
    round_days(base_days * (1.0 - clamp_level(level) / LEVEL_MAX))
}

/// Positive delta: civilization reaches readiness before technology converges.
pub fn classify_risk(risk_delta: i64, tension_band_days: i64) -> RiskLevel {
    if risk_delta > 0 {
        RiskLevel::Safe
    } else if risk_delta.unsigned_abs() < tension_band_days.max(0).unsigned_abs() {
        RiskLevel::Tense
    } else {
        RiskLevel::Crash
    }
}

pub fn convergence_countdown(
    indexes: &ReadinessIndexes,
    narrative: Option<&NarrativeData>,
    config: &CountdownConfig,
) -> ConvergenceCountdown {
    let indexes = indexes.clamped();
    let convergence = config.convergence();
    let stability = narrative_stability(narrative, convergence);

    let tcl = tech_convergence_level(&indexes);
    let tcc_days = level_countdown_days(tcl, convergence.tech_base_days());

    let crl = civilization_readiness_level(&indexes, stability);
    let crc_days = level_countdown_days(crl, convergence.safety_base_days());

    let risk_delta = tcc_days - crc_days;
    let risk_level = classify_risk(risk_delta, convergence.tension_band_days());

    ConvergenceCountdown {
        tcl,
        tcc_days,
        crl,
        crc_days,
        risk_delta,
        risk_level,
        narrative_stability: stability,
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ConvergenceModel;

impl CountdownModel for ConvergenceModel {
    type Output = ConvergenceCountdown;
    const FORMULA: FormulaSet = FormulaSet::CONVERGENCE;

    fn evaluate(
        &self,
        snapshot: &ReadinessSnapshot,
        config: &CountdownConfig,
    ) -> ConvergenceCountdown {
        convergence_countdown(&snapshot.indexes, snapshot.narrative.as_ref(), config)
    }
}
