//! Input Normalizer
//!
//! Maps the five request variants into a `CanonicalRequest` and determines
//! which signal sources apply to the content type:
//! - text → safety, fact-check, web-analysis, credibility
//! - url → the text set plus URL reputation (the URL string is the canonical
//!   text for content-based sources, which accept the `url` content type)
//! - image / video → synthetic detection, safety, credibility
//! - audio → transcribed first, then routed like text
//!
//! Text not in the working language is translated before dispatch; the
//! detected source language is kept for the response locale and never alters
//! scoring. Transcription or translation failure is absorbed as a gap note,
//! not surfaced as a request error.
//!
//! Fails with `InvalidInput` on empty payloads, undecodable base64, malformed
//! URLs, or a declared MIME type inconsistent with the sniffed content.

use crate::types::{
    AnalysisRequest, AnalyzeOptions, CanonicalRequest, ContentType, MediaKind, MediaPayload,
    OrchestratorError, SignalSource, Transcriber, Translator,
};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use std::sync::Arc;
use tracing::{debug, warn};

/// Sources applicable to text-oriented content
const TEXT_SOURCES: [SignalSource; 4] = [
    SignalSource::Safety,
    SignalSource::FactCheck,
    SignalSource::WebAnalysis,
    SignalSource::Credibility,
];

/// Sources applicable to visual media
const MEDIA_SOURCES: [SignalSource; 3] = [
    SignalSource::SyntheticDetection,
    SignalSource::Safety,
    SignalSource::Credibility,
];

/// Input Normalizer
///
/// Holds the support collaborators (transcription, translation) needed to
/// reduce audio and foreign-language inputs to canonical working-language
/// text.
pub struct Normalizer {
    transcriber: Arc<dyn Transcriber>,
    translator: Arc<dyn Translator>,
    working_language: String,
}

impl Normalizer {
    pub fn new(
        transcriber: Arc<dyn Transcriber>,
        translator: Arc<dyn Translator>,
        working_language: impl Into<String>,
    ) -> Self {
        Self {
            transcriber,
            translator,
            working_language: working_language.into(),
        }
    }

    /// Normalize a request into canonical form plus applicable sources
    ///
    /// # Errors
    /// Returns `OrchestratorError::InvalidInput` for malformed payloads; no
    /// dispatch is attempted in that case.
    pub async fn normalize(
        &self,
        request: &AnalysisRequest,
        options: &AnalyzeOptions,
    ) -> Result<CanonicalRequest, OrchestratorError> {
        let mut canonical = match request {
            AnalysisRequest::Text { text } => {
                let text = text.trim();
                if text.is_empty() {
                    return Err(OrchestratorError::InvalidInput(
                        "text payload is empty".to_string(),
                    ));
                }
                CanonicalRequest {
                    content_type: ContentType::Text,
                    text: Some(text.to_string()),
                    url: None,
                    media: None,
                    detected_language: None,
                    search_engine_id: None,
                    applicable: TEXT_SOURCES.to_vec(),
                    gaps: Vec::new(),
                }
            }
            AnalysisRequest::Url { url } => {
                let parsed = reqwest::Url::parse(url.trim()).map_err(|e| {
                    OrchestratorError::InvalidInput(format!("malformed URL: {}", e))
                })?;
                if parsed.scheme() != "http" && parsed.scheme() != "https" {
                    return Err(OrchestratorError::InvalidInput(format!(
                        "unsupported URL scheme: {}",
                        parsed.scheme()
                    )));
                }
                let mut applicable = TEXT_SOURCES.to_vec();
                applicable.push(SignalSource::UrlReputation);
                CanonicalRequest {
                    content_type: ContentType::Url,
                    // Content-based sources receive the URL itself and fetch
                    // what they need under the `url` content type.
                    text: Some(parsed.to_string()),
                    url: Some(parsed.to_string()),
                    media: None,
                    detected_language: None,
                    search_engine_id: None,
                    applicable,
                    gaps: Vec::new(),
                }
            }
            AnalysisRequest::Image { data, mime_type } => {
                let media = decode_media(data, mime_type.as_deref(), MediaKind::Image)?;
                CanonicalRequest {
                    content_type: ContentType::Image,
                    text: None,
                    url: None,
                    media: Some(media),
                    detected_language: None,
                    search_engine_id: None,
                    applicable: MEDIA_SOURCES.to_vec(),
                    gaps: Vec::new(),
                }
            }
            AnalysisRequest::Video { data, mime_type } => {
                let media = decode_media(data, mime_type.as_deref(), MediaKind::Video)?;
                CanonicalRequest {
                    content_type: ContentType::Video,
                    text: None,
                    url: None,
                    media: Some(media),
                    detected_language: None,
                    search_engine_id: None,
                    applicable: MEDIA_SOURCES.to_vec(),
                    gaps: Vec::new(),
                }
            }
            AnalysisRequest::Audio { data, mime_type } => {
                let media = decode_media(data, mime_type.as_deref(), MediaKind::Audio)?;
                self.normalize_audio(media).await
            }
        };

        canonical.search_engine_id = options.search_engine_id.clone();

        // Language handling applies to genuine text; URL strings are not
        // natural language.
        if canonical.content_type != ContentType::Url {
            self.apply_language(&mut canonical).await;
        }

        debug!(
            content_type = %canonical.content_type,
            applicable = canonical.applicable.len(),
            detected_language = canonical.detected_language.as_deref().unwrap_or("-"),
            "Request normalized"
        );

        Ok(canonical)
    }

    /// Route audio through transcription, then treat it as text
    ///
    /// A transcription failure leaves no canonical text, so no text source is
    /// applicable; the request still proceeds to a (degraded) response.
    async fn normalize_audio(&self, media: MediaPayload) -> CanonicalRequest {
        match self.transcriber.transcribe(&media).await {
            Ok(transcription) if !transcription.transcription.trim().is_empty() => {
                debug!(
                    confidence = transcription.confidence,
                    language = transcription.language.as_deref().unwrap_or("-"),
                    "Audio transcribed"
                );
                CanonicalRequest {
                    content_type: ContentType::Audio,
                    text: Some(transcription.transcription.trim().to_string()),
                    url: None,
                    media: Some(media),
                    detected_language: transcription.language,
                    search_engine_id: None,
                    applicable: TEXT_SOURCES.to_vec(),
                    gaps: Vec::new(),
                }
            }
            Ok(_) => {
                warn!("Transcription returned empty text");
                CanonicalRequest {
                    content_type: ContentType::Audio,
                    text: None,
                    url: None,
                    media: Some(media),
                    detected_language: None,
                    search_engine_id: None,
                    applicable: Vec::new(),
                    gaps: vec!["audio transcription produced no text".to_string()],
                }
            }
            Err(e) => {
                warn!(error = %e, "Transcription collaborator failed");
                CanonicalRequest {
                    content_type: ContentType::Audio,
                    text: None,
                    url: None,
                    media: Some(media),
                    detected_language: None,
                    search_engine_id: None,
                    applicable: Vec::new(),
                    gaps: vec!["audio transcription unavailable".to_string()],
                }
            }
        }
    }

    /// Detect the text language and translate into the working language when
    /// needed; failures degrade to analyzing the original text.
    async fn apply_language(&self, canonical: &mut CanonicalRequest) {
        let Some(text) = canonical.text.clone() else {
            return;
        };

        let detected = match self.translator.detect_language(&text).await {
            Ok(detection) => detection.language,
            Err(e) => {
                debug!(error = %e, "Language detection failed; assuming working language");
                return;
            }
        };

        if canonical.detected_language.is_none() {
            canonical.detected_language = Some(detected.clone());
        }

        if detected == self.working_language {
            return;
        }

        match self.translator.translate(&text, &self.working_language).await {
            Ok(translated) if !translated.trim().is_empty() => {
                debug!(from = %detected, to = %self.working_language, "Text translated");
                canonical.text = Some(translated);
            }
            Ok(_) | Err(_) => {
                warn!(from = %detected, "Translation unavailable; analyzing original text");
                canonical
                    .gaps
                    .push("translation unavailable; analysis ran on original text".to_string());
            }
        }
    }
}

/// Decode a base64 media payload and check MIME consistency
fn decode_media(
    data: &str,
    declared_mime: Option<&str>,
    kind: MediaKind,
) -> Result<MediaPayload, OrchestratorError> {
    let trimmed = data.trim();
    if trimmed.is_empty() {
        return Err(OrchestratorError::InvalidInput(format!(
            "{} payload is empty",
            kind.as_str()
        )));
    }

    let bytes = BASE64.decode(trimmed).map_err(|e| {
        OrchestratorError::InvalidInput(format!("bad base64 encoding: {}", e))
    })?;
    if bytes.is_empty() {
        return Err(OrchestratorError::InvalidInput(format!(
            "{} payload is empty",
            kind.as_str()
        )));
    }

    // Declared MIME must agree with the request variant.
    if let Some(mime) = declared_mime {
        let prefix = mime.split('/').next().unwrap_or("");
        if prefix != kind.as_str() {
            return Err(OrchestratorError::InvalidInput(format!(
                "declared MIME type {} does not match {} content",
                mime,
                kind.as_str()
            )));
        }
    }

    // Sniffed content must agree with the request variant when recognizable.
    if let Some(sniffed) = infer::get(&bytes) {
        let matches = match kind {
            MediaKind::Image => sniffed.matcher_type() == infer::MatcherType::Image,
            MediaKind::Video => sniffed.matcher_type() == infer::MatcherType::Video,
            MediaKind::Audio => sniffed.matcher_type() == infer::MatcherType::Audio,
        };
        if !matches {
            return Err(OrchestratorError::InvalidInput(format!(
                "payload content ({}) does not match declared {} type",
                sniffed.mime_type(),
                kind.as_str()
            )));
        }
    }

    Ok(MediaPayload {
        bytes,
        mime_type: declared_mime.map(str::to_string),
        kind,
    })
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{LanguageDetection, ProviderError, Transcription};

    struct StubTranscriber {
        result: Option<Transcription>,
    }

    #[async_trait::async_trait]
    impl Transcriber for StubTranscriber {
        async fn transcribe(
            &self,
            _audio: &MediaPayload,
        ) -> Result<Transcription, ProviderError> {
            self.result
                .clone()
                .ok_or_else(|| ProviderError::Network("stub offline".to_string()))
        }
    }

    struct StubTranslator {
        language: &'static str,
    }

    #[async_trait::async_trait]
    impl Translator for StubTranslator {
        async fn detect_language(&self, _text: &str) -> Result<LanguageDetection, ProviderError> {
            Ok(LanguageDetection {
                language: self.language.to_string(),
                confidence: 95.0,
            })
        }

        async fn translate(
            &self,
            text: &str,
            _target_language: &str,
        ) -> Result<String, ProviderError> {
            Ok(format!("[translated] {}", text))
        }
    }

    fn normalizer(transcription: Option<Transcription>, language: &'static str) -> Normalizer {
        Normalizer::new(
            Arc::new(StubTranscriber {
                result: transcription,
            }),
            Arc::new(StubTranslator { language }),
            "en",
        )
    }

    fn png_base64() -> String {
        let bytes: &[u8] = &[
            0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D,
        ];
        BASE64.encode(bytes)
    }

    fn wav_base64() -> String {
        let mut bytes = b"RIFF".to_vec();
        bytes.extend_from_slice(&[0x24, 0x00, 0x00, 0x00]);
        bytes.extend_from_slice(b"WAVEfmt ");
        BASE64.encode(&bytes)
    }

    #[tokio::test]
    async fn test_text_routes_to_text_sources() {
        let n = normalizer(None, "en");
        let canonical = n
            .normalize(
                &AnalysisRequest::Text {
                    text: "  some claim  ".to_string(),
                },
                &AnalyzeOptions::default(),
            )
            .await
            .unwrap();

        assert_eq!(canonical.content_type, ContentType::Text);
        assert_eq!(canonical.text.as_deref(), Some("some claim"));
        assert_eq!(canonical.applicable, TEXT_SOURCES.to_vec());
    }

    #[tokio::test]
    async fn test_empty_text_is_invalid() {
        let n = normalizer(None, "en");
        let result = n
            .normalize(
                &AnalysisRequest::Text {
                    text: "   ".to_string(),
                },
                &AnalyzeOptions::default(),
            )
            .await;
        assert!(matches!(result, Err(OrchestratorError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_url_adds_reputation_source() {
        let n = normalizer(None, "en");
        let canonical = n
            .normalize(
                &AnalysisRequest::Url {
                    url: "https://example.com/article".to_string(),
                },
                &AnalyzeOptions::default(),
            )
            .await
            .unwrap();

        assert_eq!(canonical.content_type, ContentType::Url);
        assert!(canonical
            .applicable
            .contains(&SignalSource::UrlReputation));
        assert_eq!(canonical.applicable.len(), 5);
        assert_eq!(
            canonical.url.as_deref(),
            Some("https://example.com/article")
        );
    }

    #[tokio::test]
    async fn test_malformed_url_is_invalid() {
        let n = normalizer(None, "en");
        let result = n
            .normalize(
                &AnalysisRequest::Url {
                    url: "not a url".to_string(),
                },
                &AnalyzeOptions::default(),
            )
            .await;
        assert!(matches!(result, Err(OrchestratorError::InvalidInput(_))));

        let result = n
            .normalize(
                &AnalysisRequest::Url {
                    url: "file:///etc/passwd".to_string(),
                },
                &AnalyzeOptions::default(),
            )
            .await;
        assert!(matches!(result, Err(OrchestratorError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_image_routes_to_media_sources() {
        let n = normalizer(None, "en");
        let canonical = n
            .normalize(
                &AnalysisRequest::Image {
                    data: png_base64(),
                    mime_type: Some("image/png".to_string()),
                },
                &AnalyzeOptions::default(),
            )
            .await
            .unwrap();

        assert_eq!(canonical.applicable, MEDIA_SOURCES.to_vec());
        assert!(canonical.media.is_some());
    }

    #[tokio::test]
    async fn test_bad_base64_is_invalid() {
        let n = normalizer(None, "en");
        let result = n
            .normalize(
                &AnalysisRequest::Image {
                    data: "!!!not-base64!!!".to_string(),
                    mime_type: None,
                },
                &AnalyzeOptions::default(),
            )
            .await;
        assert!(matches!(result, Err(OrchestratorError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_mime_mismatch_is_invalid() {
        let n = normalizer(None, "en");

        // Declared video MIME on an image request
        let result = n
            .normalize(
                &AnalysisRequest::Image {
                    data: png_base64(),
                    mime_type: Some("video/mp4".to_string()),
                },
                &AnalyzeOptions::default(),
            )
            .await;
        assert!(matches!(result, Err(OrchestratorError::InvalidInput(_))));

        // PNG bytes submitted as video content
        let result = n
            .normalize(
                &AnalysisRequest::Video {
                    data: png_base64(),
                    mime_type: None,
                },
                &AnalyzeOptions::default(),
            )
            .await;
        assert!(matches!(result, Err(OrchestratorError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_audio_transcribed_then_treated_as_text() {
        let n = normalizer(
            Some(Transcription {
                transcription: "spoken words".to_string(),
                confidence: 88.0,
                language: Some("en".to_string()),
            }),
            "en",
        );
        let canonical = n
            .normalize(
                &AnalysisRequest::Audio {
                    data: wav_base64(),
                    mime_type: Some("audio/wav".to_string()),
                },
                &AnalyzeOptions::default(),
            )
            .await
            .unwrap();

        assert_eq!(canonical.content_type, ContentType::Audio);
        assert_eq!(canonical.text.as_deref(), Some("spoken words"));
        assert_eq!(canonical.applicable, TEXT_SOURCES.to_vec());
        assert_eq!(canonical.detected_language.as_deref(), Some("en"));
    }

    #[tokio::test]
    async fn test_transcription_failure_becomes_gap() {
        let n = normalizer(None, "en");
        let canonical = n
            .normalize(
                &AnalysisRequest::Audio {
                    data: wav_base64(),
                    mime_type: None,
                },
                &AnalyzeOptions::default(),
            )
            .await
            .unwrap();

        assert!(canonical.applicable.is_empty());
        assert_eq!(canonical.gaps.len(), 1);
        assert!(canonical.gaps[0].contains("transcription"));
    }

    #[tokio::test]
    async fn test_foreign_language_translated() {
        let n = normalizer(None, "es");
        let canonical = n
            .normalize(
                &AnalysisRequest::Text {
                    text: "una afirmación".to_string(),
                },
                &AnalyzeOptions::default(),
            )
            .await
            .unwrap();

        assert_eq!(canonical.detected_language.as_deref(), Some("es"));
        assert_eq!(
            canonical.text.as_deref(),
            Some("[translated] una afirmación")
        );
    }

    #[tokio::test]
    async fn test_search_engine_id_forwarded() {
        let n = normalizer(None, "en");
        let canonical = n
            .normalize(
                &AnalysisRequest::Text {
                    text: "claim".to_string(),
                },
                &AnalyzeOptions {
                    search_engine_id: Some("engine-7".to_string()),
                },
            )
            .await
            .unwrap();
        assert_eq!(canonical.search_engine_id.as_deref(), Some("engine-7"));
    }
}
