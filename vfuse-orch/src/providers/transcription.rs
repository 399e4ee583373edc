//! Audio transcription collaborator client

use crate::config::CollaboratorEndpoint;
use crate::providers::{build_http_client, post_json};
use crate::types::{MediaPayload, ProviderError, Transcriber, Transcription};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde::Serialize;

const PATH: &str = "/transcribe";

/// Transcription API client
pub struct TranscriptionClient {
    http: reqwest::Client,
    endpoint: CollaboratorEndpoint,
}

impl TranscriptionClient {
    pub fn new(endpoint: CollaboratorEndpoint) -> Self {
        Self {
            http: build_http_client(),
            endpoint,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TranscribeRequest<'a> {
    audio_data: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    mime_type: Option<&'a str>,
}

#[async_trait::async_trait]
impl Transcriber for TranscriptionClient {
    async fn transcribe(&self, audio: &MediaPayload) -> Result<Transcription, ProviderError> {
        let encoded = BASE64.encode(&audio.bytes);
        post_json(
            &self.http,
            &self.endpoint,
            PATH,
            &TranscribeRequest {
                audio_data: &encoded,
                mime_type: audio.mime_type.as_deref(),
            },
        )
        .await
    }
}
