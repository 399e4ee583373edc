//! End-to-end pipeline tests over the orchestrator with stub collaborators
//!
//! Exercises the full normalize → dispatch → fuse → classify → assemble path
//! for the canonical verdict scenarios, the degraded (all-failed) case,
//! timeout absorption, and response determinism.

mod helpers;

use helpers::{bundle, MockProvider};
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use vfuse_orch::config::OrchestratorConfig;
use vfuse_orch::types::{
    AnalysisLabel, AnalysisRequest, AnalyzeOptions, FactCheckVerdict, OrchestratorError,
    SafetyRating, SignalSource,
};
use vfuse_orch::Orchestrator;

fn text_request(text: &str) -> AnalysisRequest {
    AnalysisRequest::Text {
        text: text.to_string(),
    }
}

async fn analyze(
    orchestrator: &Orchestrator,
    request: &AnalysisRequest,
) -> Result<vfuse_orch::types::UnifiedResponse, OrchestratorError> {
    orchestrator
        .analyze(request, &AnalyzeOptions::default(), CancellationToken::new())
        .await
}

#[tokio::test]
async fn test_debunked_harmful_claim_is_red() {
    // Fact-check says False, safety says HARMFUL with high confidence; the
    // remaining text collaborators are down. Authenticity collapses well
    // below the RED threshold.
    let orchestrator = Orchestrator::new(
        &OrchestratorConfig::default(),
        bundle(vec![
            MockProvider::ok(helpers::safety(SafetyRating::Harmful, 90.0)),
            MockProvider::ok(helpers::fact_check(FactCheckVerdict::False)),
            MockProvider::failing(SignalSource::WebAnalysis),
            MockProvider::failing(SignalSource::Credibility),
        ]),
    );

    let response = analyze(&orchestrator, &text_request("Drinking bleach cures flu"))
        .await
        .unwrap();

    assert_eq!(response.analysis_label, AnalysisLabel::Red);
    assert!(response.content_authenticity_score < 30.0);
    // Only the two successful signals reach the presentation collaborator.
    assert_eq!(response.summary, "Deterministic summary over 2 signal(s).");
}

#[tokio::test]
async fn test_malware_url_with_lone_signal_is_orange() {
    // Only URL reputation responds, flagging MALWARE. Integrity goes to 0,
    // authenticity stays neutral, so the verdict lands on ORANGE with the
    // four missing signals recorded as gaps.
    let orchestrator = Orchestrator::new(
        &OrchestratorConfig::default(),
        bundle(vec![
            MockProvider::ok(helpers::url_reputation(false, &["MALWARE"])),
            MockProvider::failing(SignalSource::Safety),
            MockProvider::failing(SignalSource::FactCheck),
            MockProvider::failing(SignalSource::WebAnalysis),
            MockProvider::failing(SignalSource::Credibility),
        ]),
    );

    let request = AnalysisRequest::Url {
        url: "https://malware.example/download".to_string(),
    };
    let response = analyze(&orchestrator, &request).await.unwrap();

    assert_eq!(response.analysis_label, AnalysisLabel::Orange);
    assert!(response.source_integrity_score < 35.0);
    assert_eq!(response.summary, "Deterministic summary over 1 signal(s).");
}

#[tokio::test]
async fn test_well_supported_claim_is_green() {
    let orchestrator = Orchestrator::new(
        &OrchestratorConfig::default(),
        bundle(vec![
            MockProvider::ok(helpers::safety(SafetyRating::Safe, 95.0)),
            MockProvider::ok(helpers::fact_check_with_evidence(
                FactCheckVerdict::True,
                &[
                    ("https://factcheck.example/a", "Claim confirmed"),
                    ("https://factcheck.example/b", "Independent confirmation"),
                ],
            )),
            MockProvider::ok(helpers::web_analysis(&[85.0, 85.0, 85.0])),
            MockProvider::ok(helpers::credibility(90.0)),
        ]),
    );

    let response = analyze(&orchestrator, &text_request("Water boils at 100C at sea level"))
        .await
        .unwrap();

    assert_eq!(response.analysis_label, AnalysisLabel::Green);
    assert!(response.content_authenticity_score >= 80.0);
    assert!(response.source_integrity_score >= 65.0);
    // Full coverage and five evidence items max out explainability.
    assert!(response.trust_explainability_score > 80.0);
    assert_eq!(response.sources.len(), 5);
    // Sources are deduplicated and sorted by descending credibility.
    for pair in response.sources.windows(2) {
        assert!(pair[0].credibility_score >= pair[1].credibility_score);
    }
}

#[tokio::test]
async fn test_all_signals_down_yields_degraded_yellow() {
    let orchestrator = Orchestrator::new(
        &OrchestratorConfig::default(),
        bundle(vec![
            MockProvider::failing(SignalSource::Safety),
            MockProvider::failing(SignalSource::FactCheck),
            MockProvider::failing(SignalSource::WebAnalysis),
            MockProvider::failing(SignalSource::Credibility),
        ]),
    );

    let response = analyze(&orchestrator, &text_request("Anything at all"))
        .await
        .unwrap();

    assert_eq!(response.analysis_label, AnalysisLabel::Yellow);
    assert_eq!(response.source_integrity_score, 0.0);
    assert_eq!(response.content_authenticity_score, 0.0);
    assert_eq!(response.trust_explainability_score, 0.0);
    assert!(response.sources.is_empty());
    assert!(response.summary.contains("No analysis signal was available"));
}

#[tokio::test]
async fn test_identical_requests_produce_identical_responses() {
    let orchestrator = Orchestrator::new(
        &OrchestratorConfig::default(),
        bundle(vec![
            MockProvider::ok(helpers::safety(SafetyRating::Safe, 80.0)),
            MockProvider::ok(helpers::fact_check(FactCheckVerdict::Uncertain)),
            MockProvider::ok(helpers::web_analysis(&[60.0, 70.0])),
            MockProvider::failing(SignalSource::Credibility),
        ]),
    );

    let request = text_request("The same claim twice");
    let first = analyze(&orchestrator, &request).await.unwrap();
    let second = analyze(&orchestrator, &request).await.unwrap();

    assert_eq!(first, second);
}

#[tokio::test(start_paused = true)]
async fn test_slow_collaborator_times_out_and_is_absorbed() {
    let config = OrchestratorConfig {
        per_source_timeout_ms: 50,
        ..OrchestratorConfig::default()
    };
    let orchestrator = Orchestrator::new(
        &config,
        bundle(vec![
            MockProvider::slow(
                helpers::safety(SafetyRating::Safe, 95.0),
                Duration::from_millis(500),
            ),
            MockProvider::ok(helpers::fact_check(FactCheckVerdict::True)),
            MockProvider::failing(SignalSource::WebAnalysis),
            MockProvider::failing(SignalSource::Credibility),
        ]),
    );

    let response = analyze(&orchestrator, &text_request("A slow safety check"))
        .await
        .unwrap();

    // The timed-out safety signal is absorbed; the fact-check verdict alone
    // still drives the scores.
    assert_eq!(response.summary, "Deterministic summary over 1 signal(s).");
    assert!(response.content_authenticity_score > 90.0);
}

#[tokio::test]
async fn test_empty_text_is_rejected_without_dispatch() {
    let orchestrator = Orchestrator::new(
        &OrchestratorConfig::default(),
        bundle(vec![MockProvider::ok(helpers::safety(
            SafetyRating::Safe,
            90.0,
        ))]),
    );

    let result = analyze(&orchestrator, &text_request("   ")).await;
    assert!(matches!(result, Err(OrchestratorError::InvalidInput(_))));
}

#[tokio::test]
async fn test_invalid_url_is_rejected() {
    let orchestrator = Orchestrator::new(
        &OrchestratorConfig::default(),
        bundle(vec![MockProvider::ok(helpers::url_reputation(true, &[]))]),
    );

    let request = AnalysisRequest::Url {
        url: "ftp://files.example/archive".to_string(),
    };
    let result = analyze(&orchestrator, &request).await;
    assert!(matches!(result, Err(OrchestratorError::InvalidInput(_))));
}
