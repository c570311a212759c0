//! Analysis orchestrator: the single entry point for analyzing a resume.
//!
//! Flow: length check → remote provider (one attempt) → validated result,
//! or on any remote failure → keyword fallback. Only the length check can
//! fail the call.

use std::sync::Arc;

use tracing::{info, warn};

use crate::analysis::fallback::FallbackScorer;
use crate::analysis::models::{AnalysisMethod, AnalysisResult, Provider};
use crate::analysis::remote::RemoteAnalyzer;
use crate::errors::AppError;

/// Minimum trimmed resume length, in characters.
pub const MIN_RESUME_CHARS: usize = 50;

pub struct Analyzer {
    remote: Arc<dyn RemoteAnalyzer>,
    fallback: FallbackScorer,
}

impl Analyzer {
    pub fn new(remote: Arc<dyn RemoteAnalyzer>, fallback: FallbackScorer) -> Self {
        Self { remote, fallback }
    }

    /// Analyzes a resume, preferring the remote provider.
    ///
    /// `job_title` is kept verbatim on the result; a blank title means no
    /// target role.
    pub async fn analyze(
        &self,
        resume_text: &str,
        job_title: &str,
        provider: Provider,
    ) -> Result<AnalysisResult, AppError> {
        let length = resume_text.trim().chars().count();
        if length < MIN_RESUME_CHARS {
            return Err(AppError::Validation(format!(
                "Resume text is too short ({length} characters). Please provide at least {MIN_RESUME_CHARS} characters."
            )));
        }

        let target = Some(job_title.trim()).filter(|t| !t.is_empty());

        match self.remote.analyze(provider, resume_text, target).await {
            Ok(payload) => {
                info!("AI analysis via {provider} succeeded: score={}", payload.score);
                Ok(AnalysisResult::from_payload(
                    payload,
                    job_title,
                    AnalysisMethod::Ai,
                ))
            }
            Err(e) => {
                warn!("AI analysis via {provider} failed, falling back to keyword matching: {e}");
                let result = self.fallback.analyze(resume_text, job_title);
                info!("Fallback analysis complete: score={}", result.score);
                Ok(result)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::analysis::models::AnalysisPayload;
    use crate::analysis::validation::normalize_payload;
    use crate::llm_client::LlmError;

    const RESUME: &str = "Frontend developer with five years of React, JavaScript and HTML/CSS experience building responsive UI.";

    /// Scripted remote backend that records how it was called.
    struct ScriptedRemote {
        reply: Option<serde_json::Value>,
        calls: AtomicU32,
        seen_title: Mutex<Option<Option<String>>>,
    }

    impl ScriptedRemote {
        fn ok(reply: serde_json::Value) -> Self {
            Self {
                reply: Some(reply),
                calls: AtomicU32::new(0),
                seen_title: Mutex::new(None),
            }
        }

        fn failing() -> Self {
            Self {
                reply: None,
                calls: AtomicU32::new(0),
                seen_title: Mutex::new(None),
            }
        }
    }

    #[async_trait]
    impl RemoteAnalyzer for ScriptedRemote {
        async fn analyze(
            &self,
            provider: Provider,
            _resume_text: &str,
            job_title: Option<&str>,
        ) -> Result<AnalysisPayload, LlmError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.seen_title.lock().unwrap() = Some(job_title.map(str::to_string));
            match &self.reply {
                Some(v) => Ok(normalize_payload(v)),
                None => Err(LlmError::Api {
                    provider,
                    status: 503,
                    message: "Service Unavailable".to_string(),
                }),
            }
        }
    }

    fn analyzer(remote: Arc<ScriptedRemote>) -> Analyzer {
        Analyzer::new(remote, FallbackScorer::default())
    }

    #[tokio::test]
    async fn test_short_resume_is_a_validation_error() {
        let remote = Arc::new(ScriptedRemote::failing());
        let err = analyzer(remote.clone())
            .analyze("   short resume   ", "Software Engineer", Provider::OpenAi)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(remote.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_successful_remote_is_stamped_ai() {
        let remote = Arc::new(ScriptedRemote::ok(serde_json::json!({
            "score": 88,
            "jobMatch": 74,
            "strengths": ["Strong React portfolio"],
            "suitedRoles": ["Frontend Developer"]
        })));
        let result = analyzer(remote.clone())
            .analyze(RESUME, " Frontend Developer ", Provider::Gemini)
            .await
            .unwrap();

        assert!(result.is_ai_powered);
        assert_eq!(result.analysis_method, AnalysisMethod::Ai);
        assert_eq!(result.score, 88);
        assert_eq!(result.job_match, Some(74));
        assert_eq!(result.job_title, " Frontend Developer ");
        assert_eq!(
            *remote.seen_title.lock().unwrap(),
            Some(Some("Frontend Developer".to_string()))
        );
    }

    #[tokio::test]
    async fn test_blank_title_is_sent_as_none() {
        let remote = Arc::new(ScriptedRemote::ok(serde_json::json!({ "score": 70, "jobMatch": null })));
        let result = analyzer(remote.clone())
            .analyze(RESUME, "   ", Provider::OpenAi)
            .await
            .unwrap();

        assert_eq!(result.job_match, None);
        assert_eq!(*remote.seen_title.lock().unwrap(), Some(None));
    }

    #[tokio::test]
    async fn test_remote_failure_falls_back_after_one_attempt() {
        let remote = Arc::new(ScriptedRemote::failing());
        let result = analyzer(remote.clone())
            .analyze(RESUME, "Frontend Developer", Provider::OpenAi)
            .await
            .unwrap();

        assert_eq!(remote.calls.load(Ordering::SeqCst), 1);
        assert!(!result.is_ai_powered);
        assert_eq!(result.analysis_method, AnalysisMethod::Fallback);
        assert_eq!(result, FallbackScorer::default().analyze(RESUME, "Frontend Developer"));
    }

    #[tokio::test]
    async fn test_fallback_without_title_has_null_job_match() {
        let remote = Arc::new(ScriptedRemote::failing());
        let result = analyzer(remote)
            .analyze(RESUME, "", Provider::Gemini)
            .await
            .unwrap();

        assert_eq!(result.job_match, None);
        assert!(result.skills_to_acquire.is_empty());
        assert!(result.suggested_skills.len() <= 8);
    }
}
