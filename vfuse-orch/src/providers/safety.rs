//! Safety-assessment collaborator client

use crate::config::CollaboratorEndpoint;
use crate::providers::{build_http_client, media_content, post_json, text_content};
use crate::types::{
    CanonicalRequest, ProviderError, SafetyAssessment, SignalPayload, SignalProvider,
    SignalSource,
};
use serde::Serialize;

const PATH: &str = "/safety-assessment";

/// Safety-assessment API client
pub struct SafetyClient {
    http: reqwest::Client,
    endpoint: CollaboratorEndpoint,
}

impl SafetyClient {
    pub fn new(endpoint: CollaboratorEndpoint) -> Self {
        Self {
            http: build_http_client(),
            endpoint,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SafetyRequest<'a> {
    content: &'a str,
    content_type: &'a str,
}

#[async_trait::async_trait]
impl SignalProvider for SafetyClient {
    fn source(&self) -> SignalSource {
        SignalSource::Safety
    }

    async fn fetch(&self, request: &CanonicalRequest) -> Result<SignalPayload, ProviderError> {
        // The safety contract knows text|image|url; video frames go in under
        // the image content type.
        let (content, content_type) = if request.media.is_some() {
            let (data, _) = media_content(request)?;
            (data, "image")
        } else {
            let (text, content_type) = text_content(request)?;
            (text.to_string(), content_type)
        };

        let report: SafetyAssessment = post_json(
            &self.http,
            &self.endpoint,
            PATH,
            &SafetyRequest {
                content: &content,
                content_type,
            },
        )
        .await?;

        Ok(SignalPayload::Safety(report))
    }
}
