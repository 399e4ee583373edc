//! Signal Dispatcher
//!
//! Issues one concurrent, independently time-boxed call per applicable signal
//! source and collects a `SignalResult` for each after every call has reached
//! a terminal state (completed, failed, or timed out).
//!
//! Per-source error isolation: a slow or failing provider never blocks or
//! invalidates another provider. A call that errors is recorded as `Failed`;
//! one that exceeds the per-source timeout is recorded as `TimedOut` and its
//! in-flight future is dropped. No source is retried within a request.
//! Cancellation of the parent request propagates to every in-flight call.

use crate::types::{CanonicalRequest, SignalProvider, SignalResult, SignalStatus};
use futures::future::join_all;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// Default per-source timeout
pub const DEFAULT_SOURCE_TIMEOUT: Duration = Duration::from_millis(8000);

/// Signal Dispatcher
///
/// Holds the full provider set; each dispatch filters down to the sources the
/// normalizer marked applicable. Providers are immutable and shared read-only
/// across concurrent requests.
pub struct SignalDispatcher {
    providers: Vec<Arc<dyn SignalProvider>>,
    source_timeout: Duration,
}

impl SignalDispatcher {
    pub fn new(providers: Vec<Arc<dyn SignalProvider>>, source_timeout: Duration) -> Self {
        Self {
            providers,
            source_timeout,
        }
    }

    /// Fan out to every applicable source and wait at the single fan-in point
    ///
    /// Returns one `SignalResult` per applicable source, in the applicable
    /// order. An empty applicable set returns immediately with an empty vec.
    pub async fn dispatch(
        &self,
        request: &CanonicalRequest,
        cancel: &CancellationToken,
    ) -> Vec<SignalResult> {
        let calls = request.applicable.iter().filter_map(|source| {
            let provider = self
                .providers
                .iter()
                .find(|p| p.source() == *source)
                .cloned();
            if provider.is_none() {
                warn!(source = %source, "No provider registered for applicable source");
            }
            provider
        });

        let futures = calls.map(|provider| {
            let cancel = cancel.clone();
            async move {
                let source = provider.source();
                let start = Instant::now();

                let outcome = tokio::select! {
                    _ = cancel.cancelled() => {
                        debug!(source = %source, "Call cancelled by parent request");
                        SignalStatus::Failed
                    }
                    result = tokio::time::timeout(self.source_timeout, provider.fetch(request)) => {
                        match result {
                            Ok(Ok(payload)) => {
                                return SignalResult {
                                    source,
                                    status: SignalStatus::Ok,
                                    payload: Some(payload),
                                    latency_ms: start.elapsed().as_millis() as u64,
                                };
                            }
                            Ok(Err(e)) => {
                                warn!(source = %source, error = %e, "Signal call failed");
                                SignalStatus::Failed
                            }
                            Err(_) => {
                                warn!(
                                    source = %source,
                                    timeout_ms = self.source_timeout.as_millis() as u64,
                                    "Signal call timed out"
                                );
                                SignalStatus::TimedOut
                            }
                        }
                    }
                };

                SignalResult {
                    source,
                    status: outcome,
                    payload: None,
                    latency_ms: start.elapsed().as_millis() as u64,
                }
            }
        });

        let results = join_all(futures).await;

        debug!(
            dispatched = results.len(),
            ok = results
                .iter()
                .filter(|r| r.status == SignalStatus::Ok)
                .count(),
            "All signal calls reached a terminal state"
        );

        results
    }

    /// Number of registered providers
    pub fn provider_count(&self) -> usize {
        self.providers.len()
    }
}

// ============================================================================
// Tests
// ============================================================================
