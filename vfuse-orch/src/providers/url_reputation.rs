//! URL-reputation collaborator client

use crate::config::CollaboratorEndpoint;
use crate::providers::{build_http_client, post_json};
use crate::types::{
    CanonicalRequest, ProviderError, SignalPayload, SignalProvider, SignalSource,
    UrlReputationReport,
};
use serde::Serialize;

const PATH: &str = "/url-reputation";

/// URL-reputation API client
pub struct UrlReputationClient {
    http: reqwest::Client,
    endpoint: CollaboratorEndpoint,
}

impl UrlReputationClient {
    pub fn new(endpoint: CollaboratorEndpoint) -> Self {
        Self {
            http: build_http_client(),
            endpoint,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct UrlReputationRequest<'a> {
    url: &'a str,
}

#[async_trait::async_trait]
impl SignalProvider for UrlReputationClient {
    fn source(&self) -> SignalSource {
        SignalSource::UrlReputation
    }

    async fn fetch(&self, request: &CanonicalRequest) -> Result<SignalPayload, ProviderError> {
        let url = request.url.as_deref().ok_or_else(|| {
            ProviderError::Unsupported("no URL for reputation lookup".to_string())
        })?;

        let report: UrlReputationReport =
            post_json(&self.http, &self.endpoint, PATH, &UrlReputationRequest { url }).await?;

        Ok(SignalPayload::UrlReputation(report))
    }
}
