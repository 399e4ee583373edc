//! Synthetic-media detection collaborator client

use crate::config::CollaboratorEndpoint;
use crate::providers::{build_http_client, media_content, post_json};
use crate::types::{
    CanonicalRequest, ProviderError, SignalPayload, SignalProvider, SignalSource,
    SyntheticDetectionReport,
};
use serde::Serialize;

const PATH: &str = "/synthetic-detection";

/// Synthetic-media detection API client
pub struct SyntheticDetectionClient {
    http: reqwest::Client,
    endpoint: CollaboratorEndpoint,
}

impl SyntheticDetectionClient {
    pub fn new(endpoint: CollaboratorEndpoint) -> Self {
        Self {
            http: build_http_client(),
            endpoint,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SyntheticDetectionRequest<'a> {
    media: &'a str,
    content_type: &'a str,
}

#[async_trait::async_trait]
impl SignalProvider for SyntheticDetectionClient {
    fn source(&self) -> SignalSource {
        SignalSource::SyntheticDetection
    }

    async fn fetch(&self, request: &CanonicalRequest) -> Result<SignalPayload, ProviderError> {
        let (media, content_type) = media_content(request)?;

        let report: SyntheticDetectionReport = post_json(
            &self.http,
            &self.endpoint,
            PATH,
            &SyntheticDetectionRequest {
                media: &media,
                content_type,
            },
        )
        .await?;

        Ok(SignalPayload::SyntheticDetection(report))
    }
}
