use std::sync::Arc;

use crate::analysis::orchestrator::Analyzer;
use crate::history::HistoryService;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Remote-first analyzer with the keyword fallback wired in.
    pub analyzer: Arc<Analyzer>,
    /// History over the configured store (Redis or in-memory).
    pub history: HistoryService,
}
