//! Score Synthesizer
//!
//! Fuses whatever signals are present into three bounded sub-scores. Each
//! sub-score is a weighted combination over only the present signals, with
//! weights renormalized to sum to 1 over that subset, so a missing signal
//! never silently biases a score toward zero.
//!
//! All weights and thresholds are named constants so exact coefficients can
//! be substituted without touching the renormalization logic.

use crate::fusion::aggregator::AggregatedSignals;
use crate::types::{
    EvidenceSource, FactCheckVerdict, FusedAssessment, SafetyRating, SignalPayload, SignalSource,
};
use std::collections::HashMap;
use tracing::debug;

// Source integrity weights
const W_URL_REPUTATION: f32 = 0.3;
const W_WEB_RELEVANCE: f32 = 0.3;
const W_CREDIBILITY: f32 = 0.4;

// Content authenticity weights
const W_SYNTHETIC: f32 = 0.5;
const W_SAFETY: f32 = 0.3;
const W_FACT_CHECK: f32 = 0.2;

// Trust explainability weights
const W_COVERAGE: f32 = 0.5;
const W_EVIDENCE: f32 = 0.5;

/// Evidence items beyond this count no longer raise explainability
const EVIDENCE_CAP: usize = 5;

/// Midpoint used when a sub-score has no present signal group at all
/// (but at least one signal elsewhere succeeded)
const NEUTRAL_SCORE: f32 = 50.0;

/// Fact-check evidence carries no numeric score in its contract
const FACT_CHECK_EVIDENCE_CREDIBILITY: f32 = 50.0;

/// Fuse the aggregated signals into a `FusedAssessment`
///
/// The fully degraded case (no signal succeeded) forces all three scores to
/// zero with an empty evidence list; the caller pairs that with the fixed
/// insufficient-evidence label.
pub fn synthesize(signals: &AggregatedSignals) -> FusedAssessment {
    if signals.is_degraded() {
        return FusedAssessment {
            source_integrity_score: 0.0,
            content_authenticity_score: 0.0,
            trust_explainability_score: 0.0,
            evidence: Vec::new(),
            information_gaps: signals.gaps.clone(),
        };
    }

    let evidence = merge_evidence(signals);

    let source_integrity = weighted_combination(&[
        (W_URL_REPUTATION, url_reputation_component(signals)),
        (W_WEB_RELEVANCE, web_relevance_component(signals)),
        (W_CREDIBILITY, credibility_component(signals)),
    ])
    .unwrap_or(NEUTRAL_SCORE);

    let content_authenticity = weighted_combination(&[
        (W_SYNTHETIC, synthetic_component(signals)),
        (W_SAFETY, safety_component(signals)),
        (W_FACT_CHECK, fact_check_component(signals)),
    ])
    .unwrap_or(NEUTRAL_SCORE);

    let trust_explainability = explainability_score(signals, evidence.len());

    debug!(
        source_integrity,
        content_authenticity,
        trust_explainability,
        evidence = evidence.len(),
        "Scores synthesized"
    );

    FusedAssessment {
        source_integrity_score: source_integrity,
        content_authenticity_score: content_authenticity,
        trust_explainability_score: trust_explainability,
        evidence,
        information_gaps: signals.gaps.clone(),
    }
}

/// Weighted combination over present components, renormalized to the present
/// subset; None when no component is present
fn weighted_combination(components: &[(f32, Option<f32>)]) -> Option<f32> {
    let mut weight_sum = 0.0;
    let mut acc = 0.0;
    for (weight, value) in components {
        if let Some(value) = value {
            weight_sum += weight;
            acc += weight * value;
        }
    }
    if weight_sum > 0.0 {
        Some((acc / weight_sum).clamp(0.0, 100.0))
    } else {
        None
    }
}

/// URL reputation verdict: safe → 100, unsafe scaled by worst threat severity
fn url_reputation_component(signals: &AggregatedSignals) -> Option<f32> {
    match signals.payload(SignalSource::UrlReputation)? {
        SignalPayload::UrlReputation(report) => Some(if report.is_safe {
            100.0
        } else {
            threat_severity_score(&report.threat_types)
        }),
        _ => None,
    }
}

/// Worst listed threat wins; an unsafe verdict with no listed threats still
/// scores low
fn threat_severity_score(threat_types: &[String]) -> f32 {
    threat_types
        .iter()
        .map(|threat| match threat.as_str() {
            "MALWARE" | "SOCIAL_ENGINEERING" => 0.0,
            "UNWANTED_SOFTWARE" => 15.0,
            "POTENTIALLY_HARMFUL_APPLICATION" => 25.0,
            _ => 10.0,
        })
        .reduce(f32::min)
        .unwrap_or(10.0)
}

/// Mean relevance across web findings, absent when the list is empty
fn web_relevance_component(signals: &AggregatedSignals) -> Option<f32> {
    match signals.payload(SignalSource::WebAnalysis)? {
        SignalPayload::WebAnalysis(report) => {
            if report.current_information.is_empty() {
                None
            } else {
                let sum: f32 = report
                    .current_information
                    .iter()
                    .map(|finding| finding.relevance.clamp(0.0, 100.0))
                    .sum();
                Some(sum / report.current_information.len() as f32)
            }
        }
        _ => None,
    }
}

fn credibility_component(signals: &AggregatedSignals) -> Option<f32> {
    match signals.payload(SignalSource::Credibility)? {
        SignalPayload::Credibility(report) => Some(report.credibility_score.clamp(0.0, 100.0)),
        _ => None,
    }
}

/// Synthetic verdict: authentic → 100, synthetic → inverse of detector
/// confidence
fn synthetic_component(signals: &AggregatedSignals) -> Option<f32> {
    match signals.payload(SignalSource::SyntheticDetection)? {
        SignalPayload::SyntheticDetection(report) => Some(if report.is_synthetic {
            (100.0 - report.confidence_score).clamp(0.0, 100.0)
        } else {
            100.0
        }),
        _ => None,
    }
}

/// Safety rating mapped to a score, blended toward the neutral midpoint by
/// the classifier's own confidence: zero-confidence input is score-neutral,
/// full confidence yields the rating value unchanged
fn safety_component(signals: &AggregatedSignals) -> Option<f32> {
    match signals.payload(SignalSource::Safety)? {
        SignalPayload::Safety(assessment) => {
            let rating_value = match assessment.safety_rating {
                SafetyRating::Safe => 100.0,
                SafetyRating::Misleading => 40.0,
                SafetyRating::Harmful => 10.0,
                SafetyRating::Unknown => 50.0,
            };
            let confidence = (assessment.confidence_score / 100.0).clamp(0.0, 1.0);
            Some(NEUTRAL_SCORE + (rating_value - NEUTRAL_SCORE) * confidence)
        }
        _ => None,
    }
}

fn fact_check_component(signals: &AggregatedSignals) -> Option<f32> {
    match signals.payload(SignalSource::FactCheck)? {
        SignalPayload::FactCheck(report) => Some(match report.verdict {
            FactCheckVerdict::True => 100.0,
            FactCheckVerdict::Uncertain => 50.0,
            FactCheckVerdict::Misleading => 30.0,
            FactCheckVerdict::False => 0.0,
        }),
        _ => None,
    }
}

/// Coverage of applicable sources plus normalized evidence count, each scaled
/// to 0-100
fn explainability_score(signals: &AggregatedSignals, evidence_count: usize) -> f32 {
    let coverage = if signals.applicable_count > 0 {
        signals.ok_count as f32 / signals.applicable_count as f32
    } else {
        0.0
    };
    let evidence_fraction = evidence_count.min(EVIDENCE_CAP) as f32 / EVIDENCE_CAP as f32;

    ((W_COVERAGE * coverage + W_EVIDENCE * evidence_fraction) * 100.0).clamp(0.0, 100.0)
}

/// Merge every evidence-shaped item surfaced by any successful signal
///
/// Deduplicated by url keeping the highest-credibility occurrence; sorted
/// descending by credibility with ties left in first-seen order (stable
/// sort).
fn merge_evidence(signals: &AggregatedSignals) -> Vec<EvidenceSource> {
    let mut evidence: Vec<EvidenceSource> = Vec::new();
    let mut seen: HashMap<String, usize> = HashMap::new();

    let mut push = |item: EvidenceSource| {
        if item.url.trim().is_empty() {
            return;
        }
        match seen.get(&item.url) {
            Some(&index) => {
                if item.credibility_score > evidence[index].credibility_score {
                    evidence[index] = item;
                }
            }
            None => {
                seen.insert(item.url.clone(), evidence.len());
                evidence.push(item);
            }
        }
    };

    for payload in signals.payloads.values() {
        match payload {
            SignalPayload::WebAnalysis(report) => {
                for finding in &report.current_information {
                    push(EvidenceSource {
                        url: finding.url.clone(),
                        title: finding.title.clone(),
                        credibility_score: finding.relevance.clamp(0.0, 100.0),
                    });
                }
            }
            SignalPayload::FactCheck(report) => {
                for item in &report.evidence {
                    push(EvidenceSource {
                        url: item.source.clone(),
                        title: item.title.clone(),
                        credibility_score: FACT_CHECK_EVIDENCE_CREDIBILITY,
                    });
                }
            }
            SignalPayload::Credibility(report) => {
                // The assessment source is evidence only when it is a URL.
                if report.source.starts_with("http://")
                    || report.source.starts_with("https://")
                {
                    push(EvidenceSource {
                        url: report.source.clone(),
                        title: "Credibility assessment".to_string(),
                        credibility_score: report.credibility_score.clamp(0.0, 100.0),
                    });
                }
            }
            _ => {}
        }
    }

    evidence.sort_by(|a, b| {
        b.credibility_score
            .partial_cmp(&a.credibility_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    evidence
}

// ============================================================================
// Tests
// ============================================================================
