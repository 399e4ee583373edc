//! Fact-check collaborator client

use crate::config::CollaboratorEndpoint;
use crate::providers::{build_http_client, post_json};
use crate::types::{
    CanonicalRequest, FactCheckReport, ProviderError, SignalPayload, SignalProvider,
    SignalSource,
};
use serde::Serialize;

const PATH: &str = "/fact-check";

/// Fact-check API client
pub struct FactCheckClient {
    http: reqwest::Client,
    endpoint: CollaboratorEndpoint,
}

impl FactCheckClient {
    pub fn new(endpoint: CollaboratorEndpoint) -> Self {
        Self {
            http: build_http_client(),
            endpoint,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct FactCheckRequest<'a> {
    claim: &'a str,
}

#[async_trait::async_trait]
impl SignalProvider for FactCheckClient {
    fn source(&self) -> SignalSource {
        SignalSource::FactCheck
    }

    async fn fetch(&self, request: &CanonicalRequest) -> Result<SignalPayload, ProviderError> {
        let claim = request.text.as_deref().ok_or_else(|| {
            ProviderError::Unsupported("no claim text to fact-check".to_string())
        })?;

        let report: FactCheckReport = post_json(
            &self.http,
            &self.endpoint,
            PATH,
            &FactCheckRequest { claim },
        )
        .await?;

        Ok(SignalPayload::FactCheck(report))
    }
}
