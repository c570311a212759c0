mod analysis;
mod config;
mod errors;
mod history;
mod llm_client;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::fallback::{FallbackScorer, FixedSampler, MatchSampler, RandomSampler};
use crate::analysis::orchestrator::Analyzer;
use crate::analysis::models::Provider;
use crate::analysis::remote::LlmRemoteAnalyzer;
use crate::config::{Config, UnknownRoleMatch};
use crate::history::store::{KeyValueStore, MemoryStore, RedisStore};
use crate::history::HistoryService;
use crate::llm_client::{ApiKeys, LlmClient};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resume Analyzer v{}", env!("CARGO_PKG_VERSION"));

    // Initialize LLM client
    let llm = LlmClient::new(
        ApiKeys {
            openai: config.openai_api_key.clone(),
            gemini: config.gemini_api_key.clone(),
        },
        Duration::from_secs(config.llm_timeout_secs),
    )?;
    for provider in [Provider::OpenAi, Provider::Gemini] {
        if !llm.has_key(provider) {
            info!("No API key for {provider}; its requests will use the keyword fallback");
        }
    }

    let sampler: Arc<dyn MatchSampler> = match config.unknown_role_match {
        UnknownRoleMatch::Random => Arc::new(RandomSampler),
        UnknownRoleMatch::Fixed(value) => Arc::new(FixedSampler(value)),
    };
    let analyzer = Analyzer::new(
        Arc::new(LlmRemoteAnalyzer(llm)),
        FallbackScorer::new(sampler),
    );

    // History store: Redis when configured, otherwise in-process
    let store: Arc<dyn KeyValueStore> = match config.redis_url.as_deref() {
        Some(url) => {
            info!("History store: Redis");
            Arc::new(RedisStore::open(url, env!("CARGO_PKG_NAME"))?)
        }
        None => {
            info!("History store: in-memory (REDIS_URL not set)");
            Arc::new(MemoryStore::new())
        }
    };

    let state = AppState {
        analyzer: Arc::new(analyzer),
        history: HistoryService::new(store),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
