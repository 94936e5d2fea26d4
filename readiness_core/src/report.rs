use std::str::FromStr;

use readiness_schema::{DashboardReport, ReadinessSnapshot};
use serde_json::Value;
use thiserror::Error;

use crate::civilization::CivilizationModel;
use crate::convergence::ConvergenceModel;
use crate::countdown_config::CountdownConfig;
use crate::curve::CurveModel;
use crate::legacy::LegacyModel;
use crate::normalize::normalize_payload;
use crate::science::ScienceModel;

bitflags::bitflags! {
    /// Formula generations a caller wants in its report.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct FormulaSet: u8 {
        /// v1.1 science/fast quadratic decay
        const SCIENCE = 1 << 0;
        /// v2.0 TCL/CRL countdowns and risk delta
        const CONVERGENCE = 1 << 1;
        /// v2.5 linear tech / S-curve civilization
        const CURVE = 1 << 2;
        const CIVILIZATION = 1 << 3;
        const LEGACY = 1 << 4;
    }
}

impl Default for FormulaSet {
    fn default() -> Self {
        Self::all()
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown formula '{0}' (expected science, convergence, curve, civilization, legacy, v1.1, v2.0, v2.5 or all)")]
pub struct UnknownFormulaError(pub String);

impl FormulaSet {
    fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "all" => Some(Self::all()),
            "science" | "v1.1" => Some(Self::SCIENCE),
            "convergence" | "v2.0" => Some(Self::CONVERGENCE),
            "curve" | "v2.5" => Some(Self::CURVE),
            "civilization" => Some(Self::CIVILIZATION),
            "legacy" => Some(Self::LEGACY),
            _ => None,
        }
    }
}

/// Comma-separated list, e.g. `"v1.1,civilization"`.
impl FromStr for FormulaSet {
    type Err = UnknownFormulaError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        value
            .split(',')
            .filter(|label| !label.trim().is_empty())
            .try_fold(FormulaSet::empty(), |set, label| {
                FormulaSet::from_label(label)
                    .map(|flag| set | flag)
                    .ok_or_else(|| UnknownFormulaError(label.trim().to_string()))
            })
    }
}

/// Shared interface of every calculator: a pure function of the normalized
/// snapshot and the tuning constants.
pub trait CountdownModel {
    type Output;
    const FORMULA: FormulaSet;

    fn evaluate(&self, snapshot: &ReadinessSnapshot, config: &CountdownConfig) -> Self::Output;
}

fn run_model<M: CountdownModel>(
    model: M,
    formulas: FormulaSet,
    snapshot: &ReadinessSnapshot,
    config: &CountdownConfig,
) -> Option<M::Output> {
    formulas
        .contains(M::FORMULA)
        .then(|| model.evaluate(snapshot, config))
}

pub fn build_report(
    snapshot: &ReadinessSnapshot,
    config: &CountdownConfig,
    formulas: FormulaSet,
) -> DashboardReport {
    let mut report = DashboardReport::from_snapshot(snapshot);
    report.science = run_model(ScienceModel, formulas, snapshot, config);
    report.convergence = run_model(ConvergenceModel, formulas, snapshot, config);
    report.curve = run_model(CurveModel, formulas, snapshot, config);
    report.civilization = run_model(CivilizationModel, formulas, snapshot, config);
    report.legacy = run_model(LegacyModel, formulas, snapshot, config);

    tracing::debug!(
        target: "asi_countdown::report",
        formulas = ?formulas,
        risk_level = report.convergence.map(|c| c.risk_level.as_str()),
        civilization = report.civilization.as_ref().map(|c| c.code.as_str()),
        "report.built"
    );
    report
}

/// Normalize an upstream payload and build the report in one step.
pub fn report_from_payload(
    payload: &Value,
    config: &CountdownConfig,
    formulas: FormulaSet,
) -> DashboardReport {
    build_report(&normalize_payload(payload), config, formulas)
}
