//! v2.5 model. Technology follows a linear decay toward convergence while
//! civilization readiness follows a reciprocal S-curve that never reaches zero.

use readiness_schema::{clamp_unit, CurveCountdown, RawDomains, ReadinessSnapshot, DOMAIN_SCALE};

use crate::countdown_config::CountdownConfig;
use crate::report::{CountdownModel, FormulaSet};
use crate::rounding::round_days;

/// `(components + infrastructure + convergence) / 300`, clamped to `[0, 1]`.
pub fn tech_level(components: f64, infrastructure: f64, convergence: f64) -> f64 {
    clamp_unit((components + infrastructure + convergence) / (3.0 * DOMAIN_SCALE), 0.0)
}

/// `hcmi / 100`, clamped to `[0, 1]`.
pub fn civ_level(hcmi: f64) -> f64 {
    clamp_unit(hcmi / DOMAIN_SCALE, 0.0)
}

/// Levels are clamped again here so the reciprocal divisor stays at least `civ_offset`.
pub fn curve_from_levels(tech_level: f64, civ_level: f64, config: &CountdownConfig) -> CurveCountdown {
    let curve = config.curve();
    let tech_level = clamp_unit(tech_level, 0.0);
    let civ_level = clamp_unit(civ_level, 0.0);

    let tech_years = (1.0 - tech_level) * curve.tech_horizon_years();
    let civ_years = (1.0 / (curve.civ_offset() + civ_level)) * curve.civ_scale_years();

    CurveCountdown {
        tech_level,
        tech_years,
        tech_days: round_days(tech_years * config.days_per_year()),
        civ_level,
        civ_years,
        civ_days: round_days(civ_years * config.days_per_year()),
    }
}

pub fn curve_countdown(domains: &RawDomains, config: &CountdownConfig) -> CurveCountdown {
    let domains = domains.sanitized();
    curve_from_levels(
        tech_level(domains.components, domains.infrastructure, domains.convergence),
        civ_level(domains.hcmi),
        config,
    )
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CurveModel;

impl CountdownModel for CurveModel {
    type Output = CurveCountdown;
    const FORMULA: FormulaSet = FormulaSet::CURVE;

    fn evaluate(&self, snapshot: &ReadinessSnapshot, config: &CountdownConfig) -> CurveCountdown {
        curve_countdown(&snapshot.domains, config)
    }
}
