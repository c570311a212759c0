use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// Length caps shared by the validator and the fallback scorer.
pub const MAX_STRENGTHS: usize = 6;
pub const MAX_IMPROVEMENTS: usize = 6;
pub const MAX_CURRENT_SKILLS: usize = 12;
pub const MAX_SUGGESTED_SKILLS: usize = 8;
pub const MAX_SKILLS_TO_ACQUIRE: usize = 8;
pub const MAX_SUITED_ROLES: usize = 6;

/// Remote LLM provider used for the AI path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    #[default]
    OpenAi,
    Gemini,
}

impl Provider {
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::OpenAi => "openai",
            Provider::Gemini => "gemini",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Provider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "openai" => Ok(Provider::OpenAi),
            "gemini" => Ok(Provider::Gemini),
            other => Err(format!("unknown provider '{other}' (expected openai or gemini)")),
        }
    }
}

/// Which path produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisMethod {
    Ai,
    Fallback,
}

/// The scoring fields both analysis paths must produce.
///
/// Only `validation::normalize_payload` and the fallback scorer build these,
/// so the bounds below always hold:
/// - `score` in 1..=100
/// - `job_match` is `None` or in 0..=100
/// - every list is within its `MAX_*` cap
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisPayload {
    pub score: u32,
    pub job_match: Option<u32>,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub current_skills: Vec<String>,
    pub suggested_skills: Vec<String>,
    pub skills_to_acquire: Vec<String>,
    pub suited_roles: Vec<String>,
}

/// Canonical analysis result returned to callers and stored in history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub score: u32,
    pub job_match: Option<u32>,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub current_skills: Vec<String>,
    pub suggested_skills: Vec<String>,
    pub skills_to_acquire: Vec<String>,
    pub suited_roles: Vec<String>,
    /// Caller-supplied title, verbatim.
    pub job_title: String,
    #[serde(rename = "isAIPowered")]
    pub is_ai_powered: bool,
    pub analysis_method: AnalysisMethod,
}

impl AnalysisResult {
    /// Stamps a validated payload with the raw job title and its provenance.
    pub fn from_payload(payload: AnalysisPayload, job_title: &str, method: AnalysisMethod) -> Self {
        let AnalysisPayload {
            score,
            job_match,
            strengths,
            improvements,
            current_skills,
            suggested_skills,
            skills_to_acquire,
            suited_roles,
        } = payload;

        Self {
            score,
            job_match,
            strengths,
            improvements,
            current_skills,
            suggested_skills,
            skills_to_acquire,
            suited_roles,
            job_title: job_title.to_string(),
            is_ai_powered: method == AnalysisMethod::Ai,
            analysis_method: method,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> AnalysisPayload {
        AnalysisPayload {
            score: 70,
            job_match: None,
            strengths: vec!["Clear summary".to_string()],
            improvements: vec![],
            current_skills: vec!["Rust".to_string()],
            suggested_skills: vec![],
            skills_to_acquire: vec![],
            suited_roles: vec!["Backend Developer".to_string()],
        }
    }

    #[test]
    fn test_provider_from_str() {
        assert_eq!("OpenAI".parse::<Provider>().unwrap(), Provider::OpenAi);
        assert_eq!(" gemini ".parse::<Provider>().unwrap(), Provider::Gemini);
        assert!("claude".parse::<Provider>().is_err());
    }

    #[test]
    fn test_provider_serde_is_lowercase() {
        assert_eq!(serde_json::to_string(&Provider::OpenAi).unwrap(), r#""openai""#);
        let p: Provider = serde_json::from_str(r#""gemini""#).unwrap();
        assert_eq!(p, Provider::Gemini);
    }

    #[test]
    fn test_from_payload_stamps_provenance() {
        let ai = AnalysisResult::from_payload(payload(), " Backend Dev ", AnalysisMethod::Ai);
        assert!(ai.is_ai_powered);
        assert_eq!(ai.analysis_method, AnalysisMethod::Ai);
        assert_eq!(ai.job_title, " Backend Dev ");

        let fb = AnalysisResult::from_payload(payload(), "", AnalysisMethod::Fallback);
        assert!(!fb.is_ai_powered);
        assert_eq!(fb.analysis_method, AnalysisMethod::Fallback);
    }

    #[test]
    fn test_result_serializes_with_contract_field_names() {
        let result = AnalysisResult::from_payload(payload(), "", AnalysisMethod::Fallback);
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["jobMatch"], serde_json::Value::Null);
        assert_eq!(value["isAIPowered"], false);
        assert_eq!(value["analysisMethod"], "fallback");
        assert_eq!(value["currentSkills"][0], "Rust");
        assert_eq!(value["jobTitle"], "");
    }
}
