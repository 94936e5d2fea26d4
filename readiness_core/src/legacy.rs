//! First-generation readiness summary: averages of the raw sheet scores and the
//! "1024 days per point" narrative countdown.

use readiness_schema::{LegacyReadiness, RawDomains, ReadinessSnapshot};

use crate::countdown_config::CountdownConfig;
use crate::report::{CountdownModel, FormulaSet};
use crate::rounding::{round_days, round_to};

const DAYS_PER_POINT: f64 = 1024.0;

/// Mean of the four technology-side scores, `hcmi` excluded.
fn average_tech(domains: &RawDomains) -> f64 {
    (domains.tone + domains.components + domains.infrastructure + domains.convergence) / 4.0
}

fn five_element_mean(domains: &RawDomains) -> f64 {
    (domains.tone + domains.components + domains.infrastructure + domains.convergence + domains.hcmi)
        / 5.0
}

/// `hcmi` as a percentage of the technology average; zero while there is no technology signal.
fn heart_tech_balance(domains: &RawDomains) -> f64 {
    let avg_tech = average_tech(domains);
    if avg_tech > 0.0 {
        (domains.hcmi / avg_tech) * 100.0
    } else {
        0.0
    }
}

/// Domains are sanitized first, so every field stays finite.
pub fn legacy_readiness(domains: &RawDomains) -> LegacyReadiness {
    let domains = &domains.sanitized();
    let avg_tech = average_tech(domains);
    let balance = heart_tech_balance(domains);

    LegacyReadiness {
        asi_index: 0.0,
        countdown_days: round_days((100.0 - avg_tech) * DAYS_PER_POINT),
        safety_bias: balance - 100.0,
        balance_index: round_to(balance, 2),
        five_element_maturity: round_to(five_element_mean(domains), 1),
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LegacyModel;

impl CountdownModel for LegacyModel {
    type Output = LegacyReadiness;
    const FORMULA: FormulaSet = FormulaSet::LEGACY;

    fn evaluate(&self, snapshot: &ReadinessSnapshot, _config: &CountdownConfig) -> LegacyReadiness {
        legacy_readiness(&snapshot.domains)
    }
}
