//! Axum route handlers for the Analysis API.

use axum::{extract::State, Json};
use serde::Deserialize;
use tracing::warn;

use crate::analysis::models::{AnalysisResult, Provider};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    pub resume_text: String,
    #[serde(default)]
    pub job_title: String,
    /// `openai` (default) or `gemini`.
    pub provider: Option<String>,
    /// When set, the result is appended to this user's history.
    pub user_id: Option<String>,
}

/// POST /api/v1/analyze
///
/// Analyzes a resume. Never fails because the AI provider is down; the
/// result's `analysisMethod` says which path produced it.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalysisResult>, AppError> {
    let provider = match request.provider.as_deref() {
        Some(name) => name.parse::<Provider>().map_err(AppError::Validation)?,
        None => Provider::default(),
    };

    let result = state
        .analyzer
        .analyze(&request.resume_text, &request.job_title, provider)
        .await?;

    if let Some(user_id) = request.user_id.as_deref().filter(|u| !u.trim().is_empty()) {
        if let Err(e) = state
            .history
            .save(user_id, &request.resume_text, &result)
            .await
        {
            warn!("Failed to save analysis to history for user {user_id}: {e}");
        }
    }

    Ok(Json(result))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;

    use super::*;
    use crate::analysis::fallback::FallbackScorer;
    use crate::analysis::models::{AnalysisMethod, AnalysisPayload};
    use crate::analysis::orchestrator::Analyzer;
    use crate::analysis::remote::RemoteAnalyzer;
    use crate::history::store::{KeyValueStore, MemoryStore, StoreError};
    use crate::history::HistoryService;
    use crate::llm_client::LlmError;

    const RESUME: &str = "Data analyst experienced in SQL, Excel and Tableau reporting for finance teams.";

    struct Unavailable;

    #[async_trait]
    impl RemoteAnalyzer for Unavailable {
        async fn analyze(
            &self,
            provider: Provider,
            _resume_text: &str,
            _job_title: Option<&str>,
        ) -> Result<AnalysisPayload, LlmError> {
            Err(LlmError::MissingApiKey(provider))
        }
    }

    struct BrokenStore;

    #[async_trait]
    impl KeyValueStore for BrokenStore {
        async fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
            Err(StoreError::Serde(serde_json::from_str::<u32>("x").unwrap_err()))
        }
        async fn put(&self, _key: &str, _value: String) -> Result<(), StoreError> {
            Err(StoreError::Serde(serde_json::from_str::<u32>("x").unwrap_err()))
        }
    }

    fn state_with(store: Arc<dyn KeyValueStore>) -> AppState {
        AppState {
            analyzer: Arc::new(Analyzer::new(Arc::new(Unavailable), FallbackScorer::default())),
            history: HistoryService::new(store),
        }
    }

    fn request(provider: Option<&str>, user_id: Option<&str>) -> AnalyzeRequest {
        AnalyzeRequest {
            resume_text: RESUME.to_string(),
            job_title: "Data Scientist".to_string(),
            provider: provider.map(str::to_string),
            user_id: user_id.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn test_analyze_saves_history_for_user() {
        let state = state_with(Arc::new(MemoryStore::new()));
        let Json(result) = handle_analyze(State(state.clone()), Json(request(None, Some("u1"))))
            .await
            .unwrap();

        assert_eq!(result.analysis_method, AnalysisMethod::Fallback);
        let history = state.history.list("u1").await.unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].result, result);
    }

    #[tokio::test]
    async fn test_unknown_provider_is_rejected() {
        let state = state_with(Arc::new(MemoryStore::new()));
        let err = handle_analyze(State(state), Json(request(Some("claude"), None)))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_history_failure_does_not_fail_analysis() {
        let state = state_with(Arc::new(BrokenStore));
        let result = handle_analyze(State(state), Json(request(Some("gemini"), Some("u1")))).await;
        assert!(result.is_ok());
    }

    #[test]
    fn test_request_defaults() {
        let req: AnalyzeRequest =
            serde_json::from_str(r#"{"resumeText": "text"}"#).unwrap();
        assert_eq!(req.job_title, "");
        assert!(req.provider.is_none());
        assert!(req.user_id.is_none());
    }
}
