//! Turns an untrusted upstream payload into a fully populated [`ReadinessSnapshot`].
//!
//! Accepted shapes, in order of preference per axis:
//! 1. `indexes.<axis>` already normalized to `[0, 1]`
//! 2. the raw 0–100 sub-score at the top level (`components`, `hcmi`, ...) or under `domains`
//! 3. the axis default (`0`, or `0.01` for `hcm`)
//!
//! Numbers encoded as strings are accepted because the spreadsheet export
//! delivers every cell as text. Nothing here fails: unusable fields fall back
//! to defaults and are reported at debug level.

use readiness_schema::{
    clamp_unit, NarrativeData, RawDomains, ReadinessAxis, ReadinessIndexes,
    ReadinessSnapshot, DOMAIN_SCALE,
};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisSource {
    Index,
    Domain,
    Default,
}

impl AxisSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            AxisSource::Index => "index",
            AxisSource::Domain => "domain",
            AxisSource::Default => "default",
        }
    }
}

/// Read a finite number from a JSON number or a numeric string.
pub fn numeric(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|value| value.is_finite())
}

fn field<'a>(payload: &'a Value, section: Option<&str>, key: &str) -> Option<&'a Value> {
    match section {
        Some(section) => payload.get(section)?.get(key),
        None => payload.get(key),
    }
}

fn raw_domain(payload: &Value, axis: ReadinessAxis) -> Option<f64> {
    field(payload, None, axis.domain_key())
        .and_then(numeric)
        .or_else(|| field(payload, Some("domains"), axis.domain_key()).and_then(numeric))
}

/// Resolve one normalized axis and report where the value came from.
pub fn resolve_axis(payload: &Value, axis: ReadinessAxis) -> (f64, AxisSource) {
    if let Some(index) = field(payload, Some("indexes"), axis.as_str()).and_then(numeric) {
        return (clamp_unit(index, axis.default_index()), AxisSource::Index);
    }
    if let Some(raw) = raw_domain(payload, axis) {
        return (
            clamp_unit(raw / DOMAIN_SCALE, axis.default_index()),
            AxisSource::Domain,
        );
    }
    (axis.default_index(), AxisSource::Default)
}

pub fn normalize_indexes(payload: &Value) -> ReadinessIndexes {
    let mut indexes = ReadinessIndexes::default();
    for axis in ReadinessAxis::ALL {
        let (value, source) = resolve_axis(payload, axis);
        if source == AxisSource::Default {
            tracing::debug!(
                target: "asi_countdown::normalize",
                axis = axis.as_str(),
                value,
                "normalize.axis_defaulted"
            );
        } else {
            tracing::trace!(
                target: "asi_countdown::normalize",
                axis = axis.as_str(),
                source = source.as_str(),
                value,
                "normalize.axis_resolved"
            );
        }
        indexes.set(axis, value);
    }
    indexes
}

/// Raw sub-scores, re-derived from the normalized indexes where the payload only carried those.
pub fn normalize_domains(payload: &Value, indexes: &ReadinessIndexes) -> RawDomains {
    let mut domains = RawDomains::default();
    for axis in ReadinessAxis::ALL {
        let value = raw_domain(payload, axis)
            .unwrap_or_else(|| indexes.get(axis) * DOMAIN_SCALE);
        domains.set(axis, value);
    }
    domains
}

pub fn normalize_narrative(payload: &Value) -> Option<NarrativeData> {
    let narrative = payload.get("narrative")?;
    let today = narrative.get("today").and_then(numeric)?;
    let avg7d = narrative.get("avg7d").and_then(numeric)?;
    Some(NarrativeData { today, avg7d })
}

pub fn normalize_payload(payload: &Value) -> ReadinessSnapshot {
    let indexes = normalize_indexes(payload);
    let domains = normalize_domains(payload, &indexes);
    let timestamp = payload
        .get("timestamp")
        .and_then(Value::as_str)
        .filter(|timestamp| !timestamp.is_empty())
        .map(str::to_owned);

    ReadinessSnapshot {
        timestamp,
        indexes,
        domains,
        narrative: normalize_narrative(payload),
    }
}
