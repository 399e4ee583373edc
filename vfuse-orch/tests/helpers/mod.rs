//! Deterministic collaborator stubs shared by integration tests
//!
//! Every stub is fully deterministic so repeated runs of the orchestrator
//! over identical input produce identical responses.

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;
use vfuse_orch::types::{
    CanonicalRequest, CredibilityReport, FactCheckEvidence, FactCheckReport, FactCheckVerdict,
    LanguageDetection, MediaPayload, PresentationInput, PresentationText, Presenter,
    ProviderError, SafetyAssessment, SafetyRating, SignalPayload, SignalProvider, SignalSource,
    SyntheticDetectionReport, Transcriber, Transcription, Translator, UrlReputationReport,
    WebAnalysisReport, WebFinding,
};
use vfuse_orch::CollaboratorBundle;

// ============================================================================
// Signal Providers
// ============================================================================

/// Signal provider stub with configurable outcome and latency
pub struct MockProvider {
    source: SignalSource,
    payload: Option<SignalPayload>,
    delay: Duration,
}

impl MockProvider {
    pub fn ok(payload: SignalPayload) -> Arc<dyn SignalProvider> {
        Arc::new(Self {
            source: payload.source(),
            payload: Some(payload),
            delay: Duration::ZERO,
        })
    }

    pub fn failing(source: SignalSource) -> Arc<dyn SignalProvider> {
        Arc::new(Self {
            source,
            payload: None,
            delay: Duration::ZERO,
        })
    }

    pub fn slow(payload: SignalPayload, delay: Duration) -> Arc<dyn SignalProvider> {
        Arc::new(Self {
            source: payload.source(),
            payload: Some(payload),
            delay,
        })
    }
}

#[async_trait::async_trait]
impl SignalProvider for MockProvider {
    fn source(&self) -> SignalSource {
        self.source
    }

    async fn fetch(&self, _request: &CanonicalRequest) -> Result<SignalPayload, ProviderError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.payload
            .clone()
            .ok_or_else(|| ProviderError::Network("mock collaborator offline".to_string()))
    }
}

// ============================================================================
// Support Collaborators
// ============================================================================

pub struct MockTranscriber {
    pub text: Option<&'static str>,
}

#[async_trait::async_trait]
impl Transcriber for MockTranscriber {
    async fn transcribe(&self, _audio: &MediaPayload) -> Result<Transcription, ProviderError> {
        match self.text {
            Some(text) => Ok(Transcription {
                transcription: text.to_string(),
                confidence: 92.0,
                language: Some("en".to_string()),
            }),
            None => Err(ProviderError::Network("mock transcriber offline".to_string())),
        }
    }
}

pub struct MockTranslator;

#[async_trait::async_trait]
impl Translator for MockTranslator {
    async fn detect_language(&self, _text: &str) -> Result<LanguageDetection, ProviderError> {
        Ok(LanguageDetection {
            language: "en".to_string(),
            confidence: 99.0,
        })
    }

    async fn translate(
        &self,
        text: &str,
        _target_language: &str,
    ) -> Result<String, ProviderError> {
        Ok(text.to_string())
    }
}

pub struct MockPresenter {
    pub fail: bool,
}

#[async_trait::async_trait]
impl Presenter for MockPresenter {
    async fn format(
        &self,
        input: &PresentationInput,
    ) -> Result<PresentationText, ProviderError> {
        if self.fail {
            return Err(ProviderError::Api(503, "mock presenter overloaded".to_string()));
        }
        Ok(PresentationText {
            one_line_description: format!("Verdict: {}", input.analysis_label),
            summary: format!(
                "Deterministic summary over {} signal(s).",
                input.raw_signals.len()
            ),
            educational_insight: "Deterministic insight.".to_string(),
            sources: Vec::new(),
        })
    }
}

/// Bundle the given providers with working deterministic support stubs
pub fn bundle(providers: Vec<Arc<dyn SignalProvider>>) -> CollaboratorBundle {
    CollaboratorBundle {
        providers,
        transcriber: Arc::new(MockTranscriber {
            text: Some("transcribed words"),
        }),
        translator: Arc::new(MockTranslator),
        presenter: Arc::new(MockPresenter { fail: false }),
    }
}

// ============================================================================
// Payload Builders
// ============================================================================

pub fn safety(rating: SafetyRating, confidence: f32) -> SignalPayload {
    SignalPayload::Safety(SafetyAssessment {
        safety_rating: rating,
        confidence_score: confidence,
        explanation: "stub explanation".to_string(),
        topics: Vec::new(),
        content_analysis: String::new(),
    })
}

pub fn fact_check(verdict: FactCheckVerdict) -> SignalPayload {
    fact_check_with_evidence(verdict, &[])
}

pub fn fact_check_with_evidence(
    verdict: FactCheckVerdict,
    sources: &[(&str, &str)],
) -> SignalPayload {
    SignalPayload::FactCheck(FactCheckReport {
        verdict,
        evidence: sources
            .iter()
            .map(|(url, title)| FactCheckEvidence {
                source: url.to_string(),
                title: title.to_string(),
                snippet: String::new(),
            })
            .collect(),
        explanation: "stub explanation".to_string(),
    })
}

pub fn credibility(score: f32) -> SignalPayload {
    SignalPayload::Credibility(CredibilityReport {
        credibility_score: score,
        assessment_summary: "stub assessment".to_string(),
        misleading_indicators: Vec::new(),
        source: String::new(),
    })
}

pub fn web_analysis(relevances: &[f32]) -> SignalPayload {
    SignalPayload::WebAnalysis(WebAnalysisReport {
        real_time_fact_check: true,
        current_information: relevances
            .iter()
            .enumerate()
            .map(|(i, &relevance)| WebFinding {
                title: format!("Finding {}", i),
                url: format!("https://news.example/{}", i),
                snippet: String::new(),
                date: "2025-06-01".to_string(),
                relevance,
            })
            .collect(),
        information_gaps: Vec::new(),
        analysis_summary: "stub summary".to_string(),
    })
}

pub fn url_reputation(is_safe: bool, threats: &[&str]) -> SignalPayload {
    SignalPayload::UrlReputation(UrlReputationReport {
        is_safe,
        threat_types: threats.iter().map(|t| t.to_string()).collect(),
        details: String::new(),
    })
}

pub fn synthetic(is_synthetic: bool, confidence: f32) -> SignalPayload {
    SignalPayload::SyntheticDetection(SyntheticDetectionReport {
        is_synthetic,
        confidence_score: confidence,
        analysis: String::new(),
        markers_detected: Vec::new(),
    })
}
