//! Signal Aggregator
//!
//! Collapses dispatcher results into a per-source payload map, discarding
//! failed and timed-out entries but recording each discarded source as a
//! human-readable information gap. Pure function; no I/O, no failure mode.

use crate::types::{SignalPayload, SignalResult, SignalSource, SignalStatus};
use std::collections::BTreeMap;
use tracing::debug;

/// Aggregated view of a request's signal results
#[derive(Debug, Clone, Default)]
pub struct AggregatedSignals {
    /// Successfully decoded payloads, keyed by source (ordered map for
    /// deterministic downstream iteration)
    pub payloads: BTreeMap<SignalSource, SignalPayload>,
    /// One entry per discarded source, plus any gap notes carried over from
    /// normalization
    pub gaps: Vec<String>,
    /// How many sources were dispatched
    pub applicable_count: usize,
    /// How many sources returned Ok
    pub ok_count: usize,
}

impl AggregatedSignals {
    /// True when no signal in the whole request succeeded
    pub fn is_degraded(&self) -> bool {
        self.ok_count == 0
    }

    pub fn payload(&self, source: SignalSource) -> Option<&SignalPayload> {
        self.payloads.get(&source)
    }
}

/// Aggregate dispatcher results, seeding gaps collected during normalization
pub fn aggregate(results: &[SignalResult], seed_gaps: &[String]) -> AggregatedSignals {
    let mut aggregated = AggregatedSignals {
        gaps: seed_gaps.to_vec(),
        applicable_count: results.len(),
        ..Default::default()
    };

    for result in results {
        match (&result.status, &result.payload) {
            (SignalStatus::Ok, Some(payload)) => {
                aggregated
                    .payloads
                    .insert(result.source, payload.clone());
                aggregated.ok_count += 1;
            }
            (SignalStatus::Ok, None) => {
                // Ok without a payload should not happen; treat as a gap.
                aggregated
                    .gaps
                    .push(format!("{} signal unavailable", result.source.describe()));
            }
            (SignalStatus::Failed, _) => {
                aggregated
                    .gaps
                    .push(format!("{} signal unavailable", result.source.describe()));
            }
            (SignalStatus::TimedOut, _) => {
                aggregated
                    .gaps
                    .push(format!("{} signal timed out", result.source.describe()));
            }
        }
    }

    debug!(
        ok = aggregated.ok_count,
        gaps = aggregated.gaps.len(),
        applicable = aggregated.applicable_count,
        "Signals aggregated"
    );

    aggregated
}

// ============================================================================
// Tests
// ============================================================================
