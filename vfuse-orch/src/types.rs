//! Core types and trait definitions for the unified analysis pipeline
//!
//! Defines the data model flowing through the pipeline stages:
//! - **Input:** `AnalysisRequest` (five content variants) → `CanonicalRequest`
//! - **Signals:** `SignalSource` / `SignalResult` / `SignalPayload` per-collaborator records
//! - **Output:** `FusedAssessment` → `UnifiedResponse`
//!
//! Also defines the collaborator traits (`SignalProvider`, `Transcriber`,
//! `Translator`, `Presenter`) implemented by the HTTP adapters in `providers`
//! and by deterministic stubs in tests.
//!
//! `SignalPayload` is a closed tagged union keyed by source: every
//! collaborator response has exactly one typed variant, so no stage handles
//! free-form JSON.

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// Input Types
// ============================================================================

/// One piece of user-submitted content to analyze
///
/// Immutable once constructed; media variants carry base64 payloads with an
/// optional declared MIME type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum AnalysisRequest {
    /// Free text (a claim, a post, an article excerpt)
    #[serde(rename_all = "camelCase")]
    Text { text: String },
    /// A URL to assess
    #[serde(rename_all = "camelCase")]
    Url { url: String },
    /// Base64-encoded image
    #[serde(rename_all = "camelCase")]
    Image {
        data: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        mime_type: Option<String>,
    },
    /// Base64-encoded video
    #[serde(rename_all = "camelCase")]
    Video {
        data: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        mime_type: Option<String>,
    },
    /// Base64-encoded audio clip
    #[serde(rename_all = "camelCase")]
    Audio {
        data: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        mime_type: Option<String>,
    },
}

/// Content type of an analysis request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ContentType {
    Text,
    Url,
    Image,
    Video,
    Audio,
}

impl ContentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Text => "text",
            ContentType::Url => "url",
            ContentType::Image => "image",
            ContentType::Video => "video",
            ContentType::Audio => "audio",
        }
    }
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Media category for payload/MIME consistency checks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MediaKind {
    Image,
    Video,
    Audio,
}

impl MediaKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaKind::Image => "image",
            MediaKind::Video => "video",
            MediaKind::Audio => "audio",
        }
    }
}

/// Decoded media payload carried through the pipeline
#[derive(Debug, Clone, PartialEq)]
pub struct MediaPayload {
    /// Raw decoded bytes
    pub bytes: Vec<u8>,
    /// Declared MIME type, if the caller supplied one
    pub mime_type: Option<String>,
    /// Media category derived from the request variant
    pub kind: MediaKind,
}

/// Per-request caller options
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeOptions {
    /// Search engine identifier forwarded to the web-analysis collaborator
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_engine_id: Option<String>,
}

/// Canonical request produced by the input normalizer
///
/// Carries whatever canonical forms the normalizer could derive (text, URL,
/// media) plus the set of signal sources applicable to this content type.
#[derive(Debug, Clone, PartialEq)]
pub struct CanonicalRequest {
    /// Original content type (kept for the response and presentation phrasing)
    pub content_type: ContentType,
    /// Canonical text in the working language, when derivable
    pub text: Option<String>,
    /// Canonical URL string, for URL inputs
    pub url: Option<String>,
    /// Decoded media payload, for image/video/audio inputs
    pub media: Option<MediaPayload>,
    /// Language detected on the original text (response locale only; never
    /// alters scoring)
    pub detected_language: Option<String>,
    /// Search engine identifier forwarded to web analysis
    pub search_engine_id: Option<String>,
    /// Signal sources applicable to this content type, in dispatch order
    pub applicable: Vec<SignalSource>,
    /// Gap notes collected during normalization (e.g. transcription failure)
    pub gaps: Vec<String>,
}

// ============================================================================
// Signal Types
// ============================================================================

/// Identifier for one signal collaborator (fixed enumeration)
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum SignalSource {
    Safety,
    FactCheck,
    WebAnalysis,
    SyntheticDetection,
    UrlReputation,
    Credibility,
}

impl SignalSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            SignalSource::Safety => "safety",
            SignalSource::FactCheck => "factCheck",
            SignalSource::WebAnalysis => "webAnalysis",
            SignalSource::SyntheticDetection => "syntheticDetection",
            SignalSource::UrlReputation => "urlReputation",
            SignalSource::Credibility => "credibility",
        }
    }

    /// Human-readable name used in information-gap messages
    pub fn describe(&self) -> &'static str {
        match self {
            SignalSource::Safety => "safety",
            SignalSource::FactCheck => "fact-check",
            SignalSource::WebAnalysis => "web-search",
            SignalSource::SyntheticDetection => "synthetic-media detection",
            SignalSource::UrlReputation => "URL reputation",
            SignalSource::Credibility => "source credibility",
        }
    }
}

impl std::fmt::Display for SignalSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Terminal state of one collaborator call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SignalStatus {
    Ok,
    Failed,
    TimedOut,
}

/// One collaborator call outcome
///
/// Exactly one instance per applicable source per request; created by the
/// dispatcher, never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignalResult {
    pub source: SignalSource,
    pub status: SignalStatus,
    /// Decoded payload; present only when `status == Ok`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<SignalPayload>,
    /// Wall-clock time the call took to reach a terminal state
    pub latency_ms: u64,
}

/// Closed tagged union of collaborator payloads, keyed by source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "camelCase")]
pub enum SignalPayload {
    Safety(SafetyAssessment),
    FactCheck(FactCheckReport),
    WebAnalysis(WebAnalysisReport),
    SyntheticDetection(SyntheticDetectionReport),
    UrlReputation(UrlReputationReport),
    Credibility(CredibilityReport),
}

impl SignalPayload {
    pub fn source(&self) -> SignalSource {
        match self {
            SignalPayload::Safety(_) => SignalSource::Safety,
            SignalPayload::FactCheck(_) => SignalSource::FactCheck,
            SignalPayload::WebAnalysis(_) => SignalSource::WebAnalysis,
            SignalPayload::SyntheticDetection(_) => SignalSource::SyntheticDetection,
            SignalPayload::UrlReputation(_) => SignalSource::UrlReputation,
            SignalPayload::Credibility(_) => SignalSource::Credibility,
        }
    }
}

// ============================================================================
// Collaborator Response Shapes
// ============================================================================

/// Safety classification of content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SafetyRating {
    Safe,
    Harmful,
    Misleading,
    Unknown,
}

/// Safety-assessment collaborator response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SafetyAssessment {
    pub safety_rating: SafetyRating,
    /// 0..100
    pub confidence_score: f32,
    pub explanation: String,
    #[serde(default)]
    pub topics: Vec<String>,
    #[serde(default)]
    pub content_analysis: String,
}

/// Fact-check verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum FactCheckVerdict {
    True,
    False,
    Misleading,
    Uncertain,
}

/// One piece of fact-check evidence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FactCheckEvidence {
    /// Source URL
    pub source: String,
    pub title: String,
    #[serde(default)]
    pub snippet: String,
}

/// Fact-check collaborator response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FactCheckReport {
    pub verdict: FactCheckVerdict,
    #[serde(default)]
    pub evidence: Vec<FactCheckEvidence>,
    pub explanation: String,
}

/// One current-information finding from the web-analysis collaborator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebFinding {
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub snippet: String,
    #[serde(default)]
    pub date: String,
    /// 0..100
    pub relevance: f32,
}

/// Web-analysis collaborator response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebAnalysisReport {
    pub real_time_fact_check: bool,
    #[serde(default)]
    pub current_information: Vec<WebFinding>,
    #[serde(default)]
    pub information_gaps: Vec<String>,
    pub analysis_summary: String,
}

/// Synthetic-media detection collaborator response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyntheticDetectionReport {
    pub is_synthetic: bool,
    /// 0..100
    pub confidence_score: f32,
    pub analysis: String,
    #[serde(default)]
    pub markers_detected: Vec<String>,
}

/// URL-reputation collaborator response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlReputationReport {
    pub is_safe: bool,
    #[serde(default)]
    pub threat_types: Vec<String>,
    #[serde(default)]
    pub details: String,
}

/// Source-credibility collaborator response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CredibilityReport {
    /// 0..100
    pub credibility_score: f32,
    pub assessment_summary: String,
    #[serde(default)]
    pub misleading_indicators: Vec<String>,
    /// Name or URL of the assessment source
    #[serde(default)]
    pub source: String,
}

/// Audio transcription collaborator response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transcription {
    pub transcription: String,
    /// 0..100
    pub confidence: f32,
    #[serde(default)]
    pub language: Option<String>,
}

/// Language detection collaborator response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageDetection {
    pub language: String,
    /// 0..100
    pub confidence: f32,
}

// ============================================================================
// Fused Output Types
// ============================================================================

/// A source URL with title and credibility used to substantiate the verdict
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvidenceSource {
    pub url: String,
    pub title: String,
    /// 0..100
    pub credibility_score: f32,
}

/// The fused state produced once per request by the score synthesizer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FusedAssessment {
    /// 0..100
    pub source_integrity_score: f32,
    /// 0..100
    pub content_authenticity_score: f32,
    /// 0..100
    pub trust_explainability_score: f32,
    /// Deduplicated by url, descending credibility, ties first-seen
    pub evidence: Vec<EvidenceSource>,
    pub information_gaps: Vec<String>,
}

/// Four-level ordinal verdict label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AnalysisLabel {
    Red,
    Orange,
    Yellow,
    Green,
}

impl AnalysisLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisLabel::Red => "RED",
            AnalysisLabel::Orange => "ORANGE",
            AnalysisLabel::Yellow => "YELLOW",
            AnalysisLabel::Green => "GREEN",
        }
    }
}

impl std::fmt::Display for AnalysisLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The single fused response returned for every syntactically valid request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnifiedResponse {
    pub analysis_label: AnalysisLabel,
    pub one_line_description: String,
    pub summary: String,
    pub educational_insight: String,
    /// No duplicate urls; descending credibility
    pub sources: Vec<EvidenceSource>,
    pub source_integrity_score: f32,
    pub content_authenticity_score: f32,
    pub trust_explainability_score: f32,
    pub content_type: ContentType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detected_language: Option<String>,
}

// ============================================================================
// Presentation Collaborator Shapes
// ============================================================================

/// One candidate source offered to the presentation collaborator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateSource {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snippet: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relevance: Option<f32>,
}

/// Request to the presentation collaborator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresentationInput {
    pub content_type: ContentType,
    pub analysis_label: AnalysisLabel,
    /// Closed union of successful signal payloads, in source order
    pub raw_signals: Vec<SignalPayload>,
    pub candidate_sources: Vec<CandidateSource>,
}

/// One source as phrased by the presentation collaborator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresentedSource {
    pub url: String,
    pub title: String,
    /// 0..100
    pub credibility: f32,
}

/// Presentation collaborator response
///
/// Only the three text fields are used; `sources` and score fields of the
/// response are always taken verbatim from the fused assessment, so the
/// collaborator cannot alter numeric results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresentationText {
    pub one_line_description: String,
    pub summary: String,
    pub educational_insight: String,
    #[serde(default)]
    pub sources: Vec<PresentedSource>,
}

// ============================================================================
// Errors
// ============================================================================

/// Collaborator call errors (absorbed per-source by the dispatcher)
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("API error {0}: {1}")]
    Api(u16, String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Unsupported content: {0}")]
    Unsupported(String),
}

/// Orchestrator-level errors
///
/// Only `InvalidInput` ever reaches the caller as a request error; every
/// collaborator failure is absorbed into the returned `UnifiedResponse`.
#[derive(Debug, Error)]
pub enum OrchestratorError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

// ============================================================================
// Collaborator Traits
// ============================================================================

/// One external signal source
///
/// All providers implement this trait for uniform concurrent dispatch. Each
/// call is independent: a provider failure or timeout never blocks or
/// invalidates another provider.
#[async_trait::async_trait]
pub trait SignalProvider: Send + Sync {
    /// Which signal this provider produces
    fn source(&self) -> SignalSource;

    /// Fetch the signal for the canonical request
    ///
    /// # Errors
    /// Returns `ProviderError` on any failure; the dispatcher records it as
    /// a `Failed` signal result (per-source error isolation).
    async fn fetch(&self, request: &CanonicalRequest) -> Result<SignalPayload, ProviderError>;
}

/// Audio transcription collaborator
#[async_trait::async_trait]
pub trait Transcriber: Send + Sync {
    async fn transcribe(&self, audio: &MediaPayload) -> Result<Transcription, ProviderError>;
}

/// Language detection and translation collaborator
#[async_trait::async_trait]
pub trait Translator: Send + Sync {
    async fn detect_language(&self, text: &str) -> Result<LanguageDetection, ProviderError>;

    async fn translate(&self, text: &str, target_language: &str)
        -> Result<String, ProviderError>;
}

/// Natural-language presentation collaborator
#[async_trait::async_trait]
pub trait Presenter: Send + Sync {
    async fn format(&self, input: &PresentationInput) -> Result<PresentationText, ProviderError>;
}

// ============================================================================
// Tests
// ============================================================================
