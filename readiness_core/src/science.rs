//! v1.1 "science/fast" model: quadratic decay of the five-axis mean.

use readiness_schema::{clamp_unit, ReadinessIndexes, ReadinessSnapshot, ScienceCountdown};

use crate::countdown_config::CountdownConfig;
use crate::report::{CountdownModel, FormulaSet};
use crate::rounding::round_days;

/// Plain mean of the five normalized axes, each clamped to `[0, 1]` first.
pub fn readiness_score(indexes: &ReadinessIndexes) -> f64 {
    let ReadinessIndexes {
        tone,
        compute,
        embodiment,
        agency,
        hcm,
    } = indexes.clamped();
    (tone + compute + embodiment + agency + hcm) / 5.0
}

/// `(1 - score)^2 * horizon`, with the score clamped first.
pub fn decay_years(ready_score: f64, horizon_years: f64) -> f64 {
    let gap = 1.0 - clamp_unit(ready_score, 0.0);
    gap * gap * horizon_years
}

pub fn science_countdown(indexes: &ReadinessIndexes, config: &CountdownConfig) -> ScienceCountdown {
    let ready_score = clamp_unit(readiness_score(indexes), 0.0);
    let science = config.science();
    let science_years = decay_years(ready_score, science.science_horizon_years());
    let fast_years = decay_years(ready_score, science.fast_horizon_years());

    ScienceCountdown {
        ready_score,
        science_years,
        science_days: round_days(science_years * config.days_per_year()),
        fast_years,
        fast_days: round_days(fast_years * config.days_per_year()),
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ScienceModel;

impl CountdownModel for ScienceModel {
    type Output = ScienceCountdown;
    const FORMULA: FormulaSet = FormulaSet::SCIENCE;

    fn evaluate(&self, snapshot: &ReadinessSnapshot, config: &CountdownConfig) -> ScienceCountdown {
        science_countdown(&snapshot.indexes, config)
    }
}
