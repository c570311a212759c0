//! Remote analysis: pluggable, trait-based AI path.
//!
//! `Analyzer` holds an `Arc<dyn RemoteAnalyzer>`; the production backend is
//! `LlmRemoteAnalyzer`, tests substitute scripted implementations.

use async_trait::async_trait;
use tracing::debug;

use crate::analysis::models::{AnalysisPayload, Provider};
use crate::analysis::orchestrator::MIN_RESUME_CHARS;
use crate::analysis::prompts::build_analysis_prompt;
use crate::analysis::validation::{parse_reply, ProviderReply};
use crate::llm_client::prompts::JSON_ONLY_SYSTEM;
use crate::llm_client::{LlmClient, LlmError};

#[async_trait]
pub trait RemoteAnalyzer: Send + Sync {
    /// Returns a validated payload, or the reason the remote path is unavailable.
    async fn analyze(
        &self,
        provider: Provider,
        resume_text: &str,
        job_title: Option<&str>,
    ) -> Result<AnalysisPayload, LlmError>;
}

/// AI analysis through `LlmClient`.
pub struct LlmRemoteAnalyzer(pub LlmClient);

#[async_trait]
impl RemoteAnalyzer for LlmRemoteAnalyzer {
    async fn analyze(
        &self,
        provider: Provider,
        resume_text: &str,
        job_title: Option<&str>,
    ) -> Result<AnalysisPayload, LlmError> {
        if resume_text.trim().chars().count() < MIN_RESUME_CHARS {
            return Err(LlmError::InputTooShort);
        }

        let prompt = build_analysis_prompt(resume_text, job_title);
        let reply = self.0.call(provider, &prompt, JSON_ONLY_SYSTEM).await?;

        match parse_reply(&reply) {
            ProviderReply::WellFormed(payload) => Ok(payload),
            ProviderReply::Malformed { raw, reason } => {
                debug!("Malformed {provider} reply ({reason}): {raw}");
                Err(LlmError::NoJson(provider))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::llm_client::ApiKeys;

    fn analyzer_without_keys() -> LlmRemoteAnalyzer {
        LlmRemoteAnalyzer(LlmClient::new(ApiKeys::default(), Duration::from_secs(5)).unwrap())
    }

    #[tokio::test]
    async fn test_short_resume_is_rejected_before_the_call() {
        let err = analyzer_without_keys()
            .analyze(Provider::OpenAi, "too short", None)
            .await
            .unwrap_err();
        assert!(matches!(err, LlmError::InputTooShort));
    }

    #[tokio::test]
    async fn test_missing_key_surfaces_as_error() {
        let resume = "A resume that is comfortably longer than fifty characters in total.";
        let err = analyzer_without_keys()
            .analyze(Provider::OpenAi, resume, Some("Data Scientist"))
            .await
            .unwrap_err();
        assert!(matches!(err, LlmError::MissingApiKey(Provider::OpenAi)));
    }
}
