//! Presentation Assembler
//!
//! Turns the fused state, label, and content type into the final
//! `UnifiedResponse`. Natural-language phrasing is delegated to the external
//! presentation collaborator; the score fields and source list are always
//! passed through verbatim so the collaborator cannot alter numeric results.
//!
//! If the collaborator fails, deterministic templated text is built from the
//! label and the top evidence item; a phrasing failure never fails the
//! request. The fully degraded case (no signal succeeded) skips the
//! collaborator entirely and uses the deterministic insufficient-evidence
//! text.

use crate::fusion::aggregator::AggregatedSignals;
use crate::types::{
    AnalysisLabel, CandidateSource, CanonicalRequest, FusedAssessment, PresentationInput,
    Presenter, UnifiedResponse,
};
use std::sync::Arc;
use tracing::{debug, warn};

/// Presentation Assembler
pub struct PresentationAssembler {
    presenter: Arc<dyn Presenter>,
}

impl PresentationAssembler {
    pub fn new(presenter: Arc<dyn Presenter>) -> Self {
        Self { presenter }
    }

    /// Assemble the final response
    pub async fn assemble(
        &self,
        request: &CanonicalRequest,
        label: AnalysisLabel,
        fused: &FusedAssessment,
        signals: &AggregatedSignals,
    ) -> UnifiedResponse {
        let text = if signals.is_degraded() {
            degraded_text(fused)
        } else {
            let input = PresentationInput {
                content_type: request.content_type,
                analysis_label: label,
                raw_signals: signals.payloads.values().cloned().collect(),
                candidate_sources: fused
                    .evidence
                    .iter()
                    .map(|item| CandidateSource {
                        url: item.url.clone(),
                        title: Some(item.title.clone()),
                        snippet: None,
                        relevance: Some(item.credibility_score),
                    })
                    .collect(),
            };

            match self.presenter.format(&input).await {
                Ok(text) => {
                    debug!("Presentation collaborator produced phrasing");
                    (
                        text.one_line_description,
                        text.summary,
                        text.educational_insight,
                    )
                }
                Err(e) => {
                    warn!(error = %e, "Presentation collaborator failed; using template");
                    template_text(label, fused)
                }
            }
        };

        UnifiedResponse {
            analysis_label: label,
            one_line_description: text.0,
            summary: text.1,
            educational_insight: text.2,
            sources: fused.evidence.clone(),
            source_integrity_score: fused.source_integrity_score,
            content_authenticity_score: fused.content_authenticity_score,
            trust_explainability_score: fused.trust_explainability_score,
            content_type: request.content_type,
            detected_language: request.detected_language.clone(),
        }
    }
}

/// Deterministic fallback phrasing from the label and top evidence
fn template_text(label: AnalysisLabel, fused: &FusedAssessment) -> (String, String, String) {
    let one_line = match label {
        AnalysisLabel::Red => "High risk: this content shows strong signs of being false or harmful.",
        AnalysisLabel::Orange => "Caution: significant reliability concerns were found.",
        AnalysisLabel::Yellow => "Mixed signals: verify this content against additional sources.",
        AnalysisLabel::Green => "No significant reliability concerns were found.",
    }
    .to_string();

    let mut summary = format!(
        "Automated analysis rated this content {} (authenticity {:.0}/100, source integrity {:.0}/100).",
        label,
        fused.content_authenticity_score,
        fused.source_integrity_score
    );
    if let Some(top) = fused.evidence.first() {
        summary.push_str(&format!(
            " The most credible related source found was \"{}\" ({}).",
            top.title, top.url
        ));
    }
    if !fused.information_gaps.is_empty() {
        summary.push_str(&format!(
            " {} analysis signal(s) were unavailable, which lowers confidence.",
            fused.information_gaps.len()
        ));
    }

    let insight = match label {
        AnalysisLabel::Red => {
            "Content spreading false or harmful claims often uses emotional urgency. \
             Check whether reputable outlets report the same claim before sharing."
        }
        AnalysisLabel::Orange => {
            "When several reliability checks raise concerns, look for the original \
             source of the claim and compare it with established references."
        }
        AnalysisLabel::Yellow => {
            "Partial or conflicting evidence is common for emerging stories. \
             Revisit the claim later or consult multiple independent sources."
        }
        AnalysisLabel::Green => {
            "Even well-rated content benefits from source checking. Credible \
             material cites verifiable sources and avoids unsupported certainty."
        }
    }
    .to_string();

    (one_line, summary, insight)
}

/// Phrasing for the no-signal degraded case
fn degraded_text(fused: &FusedAssessment) -> (String, String, String) {
    let mut summary = "No analysis signal was available for this content, so its \
                       trustworthiness could not be assessed; treat this verdict as \
                       inconclusive rather than an endorsement or a warning."
        .to_string();
    if !fused.information_gaps.is_empty() {
        summary.push_str(&format!(
            " Unavailable signals: {}.",
            fused.information_gaps.join("; ")
        ));
    }

    (
        "Insufficient evidence: no analysis signal was available.".to_string(),
        summary,
        "When automated checks are unavailable, rely on manual verification: \
         find the original source and look for independent corroboration."
            .to_string(),
    )
}

// ============================================================================
// Tests
// ============================================================================
