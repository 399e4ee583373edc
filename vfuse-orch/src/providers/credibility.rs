//! Source-credibility collaborator client

use crate::config::CollaboratorEndpoint;
use crate::providers::{build_http_client, media_content, post_json, text_content};
use crate::types::{
    CanonicalRequest, CredibilityReport, ProviderError, SignalPayload, SignalProvider,
    SignalSource,
};
use serde::Serialize;

const PATH: &str = "/credibility-score";

/// Credibility-scoring API client
pub struct CredibilityClient {
    http: reqwest::Client,
    endpoint: CollaboratorEndpoint,
}

impl CredibilityClient {
    pub fn new(endpoint: CollaboratorEndpoint) -> Self {
        Self {
            http: build_http_client(),
            endpoint,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CredibilityRequest<'a> {
    content: &'a str,
    content_type: &'a str,
}

#[async_trait::async_trait]
impl SignalProvider for CredibilityClient {
    fn source(&self) -> SignalSource {
        SignalSource::Credibility
    }

    async fn fetch(&self, request: &CanonicalRequest) -> Result<SignalPayload, ProviderError> {
        let (content, content_type) = if request.media.is_some() {
            media_content(request)?
        } else {
            let (text, content_type) = text_content(request)?;
            (text.to_string(), content_type)
        };

        let report: CredibilityReport = post_json(
            &self.http,
            &self.endpoint,
            PATH,
            &CredibilityRequest {
                content: &content,
                content_type,
            },
        )
        .await?;

        Ok(SignalPayload::Credibility(report))
    }
}
