//! Validation and normalization of untrusted analysis payloads.
//!
//! Whatever the provider sends back, `normalize_payload` produces an
//! `AnalysisPayload` that satisfies every bound on the result contract.
//! Wrong-typed or missing fields degrade to defaults; nothing here fails.

use serde_json::Value;

use crate::analysis::models::{
    AnalysisPayload, MAX_CURRENT_SKILLS, MAX_IMPROVEMENTS, MAX_SKILLS_TO_ACQUIRE, MAX_STRENGTHS,
    MAX_SUGGESTED_SKILLS, MAX_SUITED_ROLES,
};
use crate::analysis::taxonomy::DEFAULT_SUITED_ROLES;
use crate::llm_client::extract_json_object;

const DEFAULT_SCORE: f64 = 50.0;
const DEFAULT_JOB_MATCH: f64 = 0.0;

/// Outcome of parsing a provider's free-text reply.
#[derive(Debug, Clone, PartialEq)]
pub enum ProviderReply {
    WellFormed(AnalysisPayload),
    Malformed { raw: String, reason: String },
}

/// Extracts the first JSON object from a provider reply and normalizes it.
pub fn parse_reply(text: &str) -> ProviderReply {
    match extract_json_object(text) {
        Some(value) => ProviderReply::WellFormed(normalize_payload(&value)),
        None => ProviderReply::Malformed {
            raw: text.to_string(),
            reason: "no JSON object found in reply".to_string(),
        },
    }
}

/// Clamps and defaults an arbitrary JSON value into a valid payload.
///
/// - `score`: rounded, clamped to 1..=100, 50 when missing or falsy
/// - `jobMatch`: explicit `null` stays absent; otherwise rounded, clamped to
///   0..=100, 0 when missing or falsy (a real 0 and "missing" look the same)
/// - list fields: non-arrays become empty, non-string items are dropped,
///   then truncated to their caps
/// - `suitedRoles`: an empty result is replaced by the default role pair
pub fn normalize_payload(raw: &Value) -> AnalysisPayload {
    let score = numeric_or(raw.get("score"), DEFAULT_SCORE)
        .round()
        .clamp(1.0, 100.0) as u32;

    let job_match = match raw.get("jobMatch") {
        Some(Value::Null) => None,
        other => Some(numeric_or(other, DEFAULT_JOB_MATCH).round().clamp(0.0, 100.0) as u32),
    };

    let mut suited_roles = string_list(raw.get("suitedRoles"), MAX_SUITED_ROLES);
    if suited_roles.is_empty() {
        suited_roles = DEFAULT_SUITED_ROLES.iter().map(|r| r.to_string()).collect();
    }

    AnalysisPayload {
        score,
        job_match,
        strengths: string_list(raw.get("strengths"), MAX_STRENGTHS),
        improvements: string_list(raw.get("improvements"), MAX_IMPROVEMENTS),
        current_skills: string_list(raw.get("currentSkills"), MAX_CURRENT_SKILLS),
        suggested_skills: string_list(raw.get("suggestedSkills"), MAX_SUGGESTED_SKILLS),
        skills_to_acquire: string_list(raw.get("skillsToAcquire"), MAX_SKILLS_TO_ACQUIRE),
        suited_roles,
    }
}

/// Reads a numeric field, treating missing and falsy values (`0`, `false`,
/// `""`) as `default`. Non-empty numeric strings ("72", "0") are accepted
/// as-is; other non-numeric values also take `default`.
fn numeric_or(value: Option<&Value>, default: f64) -> f64 {
    let n = match value {
        Some(Value::Number(n)) => n.as_f64().filter(|n| *n != 0.0),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        Some(Value::Bool(true)) => Some(1.0),
        _ => None,
    };
    n.filter(|n| n.is_finite()).unwrap_or(default)
}

fn string_list(value: Option<&Value>, cap: usize) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| item.as_str())
            .take(cap)
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    }
}
