//! Unified Analysis Orchestrator
//!
//! Ties the pipeline stages together for one request:
//! normalize → dispatch (parallel fan-out) → aggregate → synthesize →
//! classify → assemble.
//!
//! One logical task per request; the only suspension point beyond collaborator
//! I/O is the dispatcher's fan-in barrier. All collaborator handles are
//! immutable and shared read-only across concurrent requests; nothing
//! persists between requests.

use crate::config::OrchestratorConfig;
use crate::dispatch::SignalDispatcher;
use crate::fusion::{aggregate, classify_scores, synthesize};
use crate::normalizer::Normalizer;
use crate::presenter::PresentationAssembler;
use crate::types::{
    AnalysisLabel, AnalysisRequest, AnalyzeOptions, OrchestratorError, Presenter, SignalProvider,
    SignalStatus, Transcriber, Translator, UnifiedResponse,
};
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};
use uuid::Uuid;

/// Immutable bundle of collaborator handles
///
/// Constructed once at process start (HTTP adapters) or per test (stubs) and
/// passed by reference into the orchestrator; keeps the orchestrator free of
/// hidden global state.
pub struct CollaboratorBundle {
    pub providers: Vec<Arc<dyn SignalProvider>>,
    pub transcriber: Arc<dyn Transcriber>,
    pub translator: Arc<dyn Translator>,
    pub presenter: Arc<dyn Presenter>,
}

/// Unified Analysis Orchestrator
pub struct Orchestrator {
    normalizer: Normalizer,
    dispatcher: SignalDispatcher,
    assembler: PresentationAssembler,
}

impl Orchestrator {
    pub fn new(config: &OrchestratorConfig, bundle: CollaboratorBundle) -> Self {
        Self {
            normalizer: Normalizer::new(
                bundle.transcriber,
                bundle.translator,
                config.working_language.clone(),
            ),
            dispatcher: SignalDispatcher::new(
                bundle.providers,
                Duration::from_millis(config.per_source_timeout_ms),
            ),
            assembler: PresentationAssembler::new(bundle.presenter),
        }
    }

    /// Analyze one piece of content into a unified verdict
    ///
    /// Every syntactically valid request yields a structurally valid
    /// response: collaborator failures and timeouts are absorbed into
    /// information gaps, and the all-failed case produces the degraded
    /// response (scores 0, YELLOW, empty sources).
    ///
    /// # Errors
    /// `OrchestratorError::InvalidInput` for malformed or empty payloads; no
    /// dispatch is attempted in that case.
    pub async fn analyze(
        &self,
        request: &AnalysisRequest,
        options: &AnalyzeOptions,
        cancel: CancellationToken,
    ) -> Result<UnifiedResponse, OrchestratorError> {
        let request_id = Uuid::new_v4();

        let canonical = self.normalizer.normalize(request, options).await?;
        info!(
            %request_id,
            content_type = %canonical.content_type,
            applicable = canonical.applicable.len(),
            "Analysis started"
        );

        let results = self.dispatcher.dispatch(&canonical, &cancel).await;
        for result in &results {
            debug!(
                %request_id,
                source = %result.source,
                status = ?result.status,
                latency_ms = result.latency_ms,
                "Signal terminal state"
            );
        }

        let aggregated = aggregate(&results, &canonical.gaps);
        let fused = synthesize(&aggregated);

        // Degraded requests carry the fixed insufficient-evidence label:
        // neither confirmed safe nor unsafe.
        let label = if aggregated.is_degraded() {
            AnalysisLabel::Yellow
        } else {
            classify_scores(
                fused.content_authenticity_score,
                fused.source_integrity_score,
            )
        };

        let response = self
            .assembler
            .assemble(&canonical, label, &fused, &aggregated)
            .await;

        info!(
            %request_id,
            label = %response.analysis_label,
            ok_signals = results
                .iter()
                .filter(|r| r.status == SignalStatus::Ok)
                .count(),
            gaps = fused.information_gaps.len(),
            "Analysis complete"
        );

        Ok(response)
    }

    /// Number of registered signal providers
    pub fn provider_count(&self) -> usize {
        self.dispatcher.provider_count()
    }
}
