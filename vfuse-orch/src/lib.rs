//! vfuse-orch library interface
//!
//! Exposes the orchestrator pipeline and HTTP router for integration testing.

pub mod api;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod fusion;
pub mod normalizer;
pub mod orchestrator;
pub mod presenter;
pub mod providers;
pub mod types;

pub use crate::error::{ApiError, ApiResult};
pub use crate::orchestrator::{CollaboratorBundle, Orchestrator};

use axum::Router;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Application state shared across handlers
///
/// The orchestrator (with its immutable collaborator bundle) is built once at
/// startup and shared read-only across concurrent requests.
#[derive(Clone)]
pub struct AppState {
    pub orchestrator: Arc<Orchestrator>,
    /// Service startup timestamp for uptime tracking
    pub startup_time: DateTime<Utc>,
}

impl AppState {
    pub fn new(orchestrator: Arc<Orchestrator>) -> Self {
        Self {
            orchestrator,
            startup_time: Utc::now(),
        }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(api::analyze_routes())
        .merge(api::health_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
