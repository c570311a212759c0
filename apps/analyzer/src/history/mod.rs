//! Per-user analysis history: the ten most recent results, newest first.

pub mod handlers;
pub mod store;

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::{Mutex, OwnedMutexGuard};
use tracing::warn;
use uuid::Uuid;

use crate::analysis::models::AnalysisResult;
use crate::history::store::{KeyValueStore, StoreError};

pub const MAX_HISTORY_ENTRIES: usize = 10;
const SNIPPET_CHARS: usize = 120;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub resume_snippet: String,
    pub result: AnalysisResult,
}

/// Read-modify-write access to each user's history is serialized per user
/// within this process.
#[derive(Clone)]
pub struct HistoryService {
    store: Arc<dyn KeyValueStore>,
    user_locks: Arc<Mutex<HashMap<String, Arc<Mutex<()>>>>>,
}

impl HistoryService {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            user_locks: Arc::default(),
        }
    }

    async fn lock_user(&self, user_id: &str) -> OwnedMutexGuard<()> {
        let lock = self
            .user_locks
            .lock()
            .await
            .entry(user_id.to_string())
            .or_default()
            .clone();
        lock.lock_owned().await
    }

    /// Returns the user's history, newest first.
    /// Missing or unreadable data reads as an empty history.
    pub async fn list(&self, user_id: &str) -> Result<Vec<HistoryEntry>, StoreError> {
        let raw = self.store.get(&history_key(user_id)).await?;
        Ok(raw
            .and_then(|json| match serde_json::from_str(&json) {
                Ok(entries) => Some(entries),
                Err(e) => {
                    warn!("Discarding unreadable history for user {user_id}: {e}");
                    None
                }
            })
            .unwrap_or_default())
    }

    /// Prepends a new entry, keeping at most `MAX_HISTORY_ENTRIES`.
    pub async fn save(
        &self,
        user_id: &str,
        resume_text: &str,
        result: &AnalysisResult,
    ) -> Result<Vec<HistoryEntry>, StoreError> {
        let _guard = self.lock_user(user_id).await;
        let mut history = self.list(user_id).await?;
        history.insert(
            0,
            HistoryEntry {
                id: Uuid::new_v4(),
                created_at: Utc::now(),
                resume_snippet: resume_snippet(resume_text),
                result: result.clone(),
            },
        );
        history.truncate(MAX_HISTORY_ENTRIES);
        self.write(user_id, &history).await?;
        Ok(history)
    }

    /// Removes one entry and returns what remains.
    pub async fn delete(
        &self,
        user_id: &str,
        entry_id: Uuid,
    ) -> Result<Vec<HistoryEntry>, StoreError> {
        let _guard = self.lock_user(user_id).await;
        let mut history = self.list(user_id).await?;
        history.retain(|e| e.id != entry_id);
        self.write(user_id, &history).await?;
        Ok(history)
    }

    async fn write(&self, user_id: &str, history: &[HistoryEntry]) -> Result<(), StoreError> {
        let json = serde_json::to_string(history)?;
        self.store.put(&history_key(user_id), json).await
    }
}

fn history_key(user_id: &str) -> String {
    format!("history:{user_id}")
}

/// First 120 characters, trimmed, with an ellipsis when the resume was longer.
pub fn resume_snippet(resume_text: &str) -> String {
    let head: String = resume_text.chars().take(SNIPPET_CHARS).collect();
    let mut snippet = head.trim().to_string();
    if resume_text.chars().count() > SNIPPET_CHARS {
        snippet.push('…');
    }
    snippet
}
