//! Wire contracts for the civilization readiness dashboard.
//!
//! Every value object here is a plain serde type whose JSON field names match
//! what the dashboard UI already consumes. Constructors clamp their inputs so a
//! value that exists is always in range; the arithmetic that derives countdowns
//! from these types lives in `readiness_core`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Default for a normalized axis that could not be resolved from a payload.
pub const DEFAULT_AXIS_INDEX: f64 = 0.0;
/// `hcm` defaults slightly above zero so the civilization level never starts at zero.
pub const DEFAULT_HCM_INDEX: f64 = 0.01;

/// Scale factor between the 0–100 sub-scores and the 0–1 indexes.
pub const DOMAIN_SCALE: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ReadinessAxis {
    Tone,
    Compute,
    Embodiment,
    Agency,
    Hcm,
}

impl ReadinessAxis {
    pub const ALL: [ReadinessAxis; 5] = [
        ReadinessAxis::Tone,
        ReadinessAxis::Compute,
        ReadinessAxis::Embodiment,
        ReadinessAxis::Agency,
        ReadinessAxis::Hcm,
    ];

    /// Key of the normalized value under `indexes.*`.
    pub fn as_str(self) -> &'static str {
        match self {
            ReadinessAxis::Tone => "tone",
            ReadinessAxis::Compute => "compute",
            ReadinessAxis::Embodiment => "embodiment",
            ReadinessAxis::Agency => "agency",
            ReadinessAxis::Hcm => "hcm",
        }
    }

    /// Key of the raw 0–100 sub-score feeding this axis.
    pub fn domain_key(self) -> &'static str {
        match self {
            ReadinessAxis::Tone => "tone",
            ReadinessAxis::Compute => "components",
            ReadinessAxis::Embodiment => "infrastructure",
            ReadinessAxis::Agency => "convergence",
            ReadinessAxis::Hcm => "hcmi",
        }
    }

    pub fn default_index(self) -> f64 {
        match self {
            ReadinessAxis::Hcm => DEFAULT_HCM_INDEX,
            _ => DEFAULT_AXIS_INDEX,
        }
    }

    pub fn default_domain(self) -> f64 {
        self.default_index() * DOMAIN_SCALE
    }
}

/// Largest raw sub-score kept after sanitizing: ten times the nominal scale.
pub const MAX_DOMAIN_SCORE: f64 = 1_000.0;

/// Clamp a value into `[0, 1]`. Infinities saturate; only NaN takes `fallback`.
pub fn clamp_unit(value: f64, fallback: f64) -> f64 {
    if value.is_nan() {
        fallback.clamp(0.0, 1.0)
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// Raw sub-scores are kept in `[0, MAX_DOMAIN_SCORE]`, NaN becoming `fallback`.
/// They are not capped at 100: upstream sheets regularly report values above
/// the nominal scale.
pub fn sanitize_domain(value: f64, fallback: f64) -> f64 {
    if value.is_nan() {
        fallback.clamp(0.0, MAX_DOMAIN_SCORE)
    } else {
        value.clamp(0.0, MAX_DOMAIN_SCORE)
    }
}

/// Five-axis readiness vector, every axis a fraction in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ReadinessIndexes {
    pub tone: f64,
    pub compute: f64,
    pub embodiment: f64,
    pub agency: f64,
    pub hcm: f64,
}

impl ReadinessIndexes {
    /// Vector substituted when the upstream sheet cannot be reached.
    pub const FALLBACK: ReadinessIndexes = ReadinessIndexes {
        tone: 0.02,
        compute: 0.51,
        embodiment: 0.5928,
        agency: 0.2882,
        hcm: 0.01,
    };

    pub fn new(tone: f64, compute: f64, embodiment: f64, agency: f64, hcm: f64) -> Self {
        Self {
            tone,
            compute,
            embodiment,
            agency,
            hcm,
        }
        .clamped()
    }

    pub fn get(&self, axis: ReadinessAxis) -> f64 {
        match axis {
            ReadinessAxis::Tone => self.tone,
            ReadinessAxis::Compute => self.compute,
            ReadinessAxis::Embodiment => self.embodiment,
            ReadinessAxis::Agency => self.agency,
            ReadinessAxis::Hcm => self.hcm,
        }
    }

    pub fn set(&mut self, axis: ReadinessAxis, value: f64) {
        let value = clamp_unit(value, axis.default_index());
        match axis {
            ReadinessAxis::Tone => self.tone = value,
            ReadinessAxis::Compute => self.compute = value,
            ReadinessAxis::Embodiment => self.embodiment = value,
            ReadinessAxis::Agency => self.agency = value,
            ReadinessAxis::Hcm => self.hcm = value,
        }
    }

    /// Idempotent: clamping an already clamped vector returns it unchanged.
    pub fn clamped(self) -> Self {
        let mut out = self;
        for axis in ReadinessAxis::ALL {
            out.set(axis, self.get(axis));
        }
        out
    }

    pub fn to_domains(self) -> RawDomains {
        RawDomains::new(
            self.tone * DOMAIN_SCALE,
            self.compute * DOMAIN_SCALE,
            self.embodiment * DOMAIN_SCALE,
            self.agency * DOMAIN_SCALE,
            self.hcm * DOMAIN_SCALE,
        )
    }
}

impl Default for ReadinessIndexes {
    fn default() -> Self {
        let mut indexes = Self {
            tone: 0.0,
            compute: 0.0,
            embodiment: 0.0,
            agency: 0.0,
            hcm: 0.0,
        };
        for axis in ReadinessAxis::ALL {
            indexes.set(axis, axis.default_index());
        }
        indexes
    }
}

/// The same five axes on their raw 0–100 sheet scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RawDomains {
    pub tone: f64,
    pub components: f64,
    pub infrastructure: f64,
    pub convergence: f64,
    pub hcmi: f64,
}

impl RawDomains {
    /// Sheet values used when neither the Apps Script endpoint nor the CSV export answers.
    pub const FALLBACK: RawDomains = RawDomains {
        tone: 10.0,
        components: 57.0,
        infrastructure: 57.0,
        convergence: 119.0,
        hcmi: 97.0,
    };

    pub fn new(tone: f64, components: f64, infrastructure: f64, convergence: f64, hcmi: f64) -> Self {
        Self {
            tone,
            components,
            infrastructure,
            convergence,
            hcmi,
        }
        .sanitized()
    }

    pub fn get(&self, axis: ReadinessAxis) -> f64 {
        match axis {
            ReadinessAxis::Tone => self.tone,
            ReadinessAxis::Compute => self.components,
            ReadinessAxis::Embodiment => self.infrastructure,
            ReadinessAxis::Agency => self.convergence,
            ReadinessAxis::Hcm => self.hcmi,
        }
    }

    pub fn set(&mut self, axis: ReadinessAxis, value: f64) {
        let value = sanitize_domain(value, axis.default_domain());
        match axis {
            ReadinessAxis::Tone => self.tone = value,
            ReadinessAxis::Compute => self.components = value,
            ReadinessAxis::Embodiment => self.infrastructure = value,
            ReadinessAxis::Agency => self.convergence = value,
            ReadinessAxis::Hcm => self.hcmi = value,
        }
    }

    pub fn sanitized(self) -> Self {
        let mut out = self;
        for axis in ReadinessAxis::ALL {
            out.set(axis, self.get(axis));
        }
        out
    }

    /// Divide by 100 and clamp, so e.g. `convergence = 119` becomes `agency = 1.0`.
    pub fn to_indexes(self) -> ReadinessIndexes {
        ReadinessIndexes::new(
            self.tone / DOMAIN_SCALE,
            self.components / DOMAIN_SCALE,
            self.infrastructure / DOMAIN_SCALE,
            self.convergence / DOMAIN_SCALE,
            self.hcmi / DOMAIN_SCALE,
        )
    }
}

impl Default for RawDomains {
    fn default() -> Self {
        ReadinessIndexes::default().to_domains()
    }
}

/// Today's narrative sentiment index against its seven-day average, both 0–100.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct NarrativeData {
    pub today: f64,
    pub avg7d: f64,
}

/// Normalized input shared by every formula generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema, Default)]
pub struct ReadinessSnapshot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    pub indexes: ReadinessIndexes,
    pub domains: RawDomains,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub narrative: Option<NarrativeData>,
}

impl ReadinessSnapshot {
    pub fn fallback() -> Self {
        Self {
            timestamp: None,
            indexes: ReadinessIndexes::FALLBACK,
            domains: RawDomains::FALLBACK,
            narrative: None,
        }
    }

    /// Build a snapshot from raw sub-scores alone, deriving the indexes.
    pub fn from_domains(domains: RawDomains) -> Self {
        let domains = domains.sanitized();
        Self {
            timestamp: None,
            indexes: domains.to_indexes(),
            domains,
            narrative: None,
        }
    }

    /// Build a snapshot from normalized indexes alone, deriving the sub-scores.
    pub fn from_indexes(indexes: ReadinessIndexes) -> Self {
        let indexes = indexes.clamped();
        Self {
            timestamp: None,
            indexes,
            domains: indexes.to_domains(),
            narrative: None,
        }
    }

    pub fn with_narrative(mut self, narrative: NarrativeData) -> Self {
        self.narrative = Some(narrative);
        self
    }
}

/// v1.1 quadratic-decay countdown.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScienceCountdown {
    pub ready_score: f64,
    pub science_years: f64,
    pub science_days: i64,
    pub fast_years: f64,
    pub fast_days: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum RiskLevel {
    Safe,
    Tense,
    Crash,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Safe => "Safe",
            RiskLevel::Tense => "Tense",
            RiskLevel::Crash => "Crash",
        }
    }
}

/// v2.0 tech convergence vs. civilization readiness countdown.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ConvergenceCountdown {
    #[serde(rename = "TCL")]
    pub tcl: f64,
    #[serde(rename = "TCC_days")]
    pub tcc_days: i64,
    #[serde(rename = "CRL")]
    pub crl: f64,
    #[serde(rename = "CRC_days")]
    pub crc_days: i64,
    #[serde(rename = "RiskDelta")]
    pub risk_delta: i64,
    #[serde(rename = "RiskLevel")]
    pub risk_level: RiskLevel,
    #[serde(rename = "narrativeStability")]
    pub narrative_stability: f64,
}

/// v2.5 linear tech / reciprocal civilization countdown.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CurveCountdown {
    pub tech_level: f64,
    pub tech_years: f64,
    pub tech_days: i64,
    pub civ_level: f64,
    pub civ_years: f64,
    pub civ_days: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum CivilizationCode {
    Basic,
    Seed,
    Runaway,
    Heart,
    Golden,
}

impl CivilizationCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            CivilizationCode::Basic => "basic",
            CivilizationCode::Seed => "seed",
            CivilizationCode::Runaway => "runaway",
            CivilizationCode::Heart => "heart",
            CivilizationCode::Golden => "golden",
        }
    }

    /// Display label shown on the dashboard's status card.
    pub fn label(&self) -> &'static str {
        match self {
            CivilizationCode::Basic => "基礎文明",
            CivilizationCode::Seed => "萌芽文明",
            CivilizationCode::Runaway => "暴衝文明",
            CivilizationCode::Heart => "心靈文明",
            CivilizationCode::Golden => "黃金文明",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CivilizationStatus {
    pub code: CivilizationCode,
    pub label: String,
    pub tech_index: f64,
    pub heart_index: f64,
    pub readiness_index: f64,
    pub balance_index: f64,
}

/// First-generation readiness summary kept for the `/api/readiness` consumers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct LegacyReadiness {
    pub asi_index: f64,
    pub countdown_days: i64,
    pub safety_bias: f64,
    pub balance_index: f64,
    pub five_element_maturity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardReport {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    pub indexes: ReadinessIndexes,
    pub domains: RawDomains,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub narrative: Option<NarrativeData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub science: Option<ScienceCountdown>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub convergence: Option<ConvergenceCountdown>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub curve: Option<CurveCountdown>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub civilization: Option<CivilizationStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legacy: Option<LegacyReadiness>,
}

impl DashboardReport {
    pub fn from_snapshot(snapshot: &ReadinessSnapshot) -> Self {
        Self {
            timestamp: snapshot.timestamp.clone(),
            indexes: snapshot.indexes,
            domains: snapshot.domains,
            narrative: snapshot.narrative,
            science: None,
            convergence: None,
            curve: None,
            civilization: None,
            legacy: None,
        }
    }
}

pub fn report_schema() -> schemars::schema::RootSchema {
    schemars::schema_for!(DashboardReport)
}

pub fn snapshot_schema() -> schemars::schema::RootSchema {
    schemars::schema_for!(ReadinessSnapshot)
}
