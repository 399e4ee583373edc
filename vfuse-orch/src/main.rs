//! vfuse-orch - Unified Analysis Orchestrator
//!
//! Accepts one piece of user-submitted content and produces one fused
//! trustworthiness verdict by fanning out to the configured analysis
//! collaborators, fusing whatever signals return, and labeling the result.

use anyhow::Result;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use vfuse_orch::config::OrchestratorConfig;
use vfuse_orch::providers::http_collaborators;
use vfuse_orch::{AppState, Orchestrator};

#[tokio::main]
async fn main() -> Result<()> {
    let config = OrchestratorConfig::load()?;

    // Initialize tracing (config level unless RUST_LOG overrides)
    let default_filter = config.logging.level.clone().unwrap_or_else(|| "info".to_string());
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("Starting vfuse-orch (Unified Analysis Orchestrator)");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));
    info!(
        per_source_timeout_ms = config.per_source_timeout_ms,
        working_language = %config.working_language,
        "Configuration loaded"
    );

    let bundle = http_collaborators(&config.collaborators);
    let orchestrator = Arc::new(Orchestrator::new(&config, bundle));
    info!(
        signal_providers = orchestrator.provider_count(),
        "Collaborator clients initialized"
    );

    let state = AppState::new(orchestrator);
    let app = vfuse_orch::build_router(state);

    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;
    info!("Listening on http://{}", config.listen_addr);
    info!("Health check: http://{}/health", config.listen_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
