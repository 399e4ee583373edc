//! Natural-language presentation collaborator client

use crate::config::CollaboratorEndpoint;
use crate::providers::{build_http_client, post_json};
use crate::types::{PresentationInput, PresentationText, Presenter, ProviderError};

const PATH: &str = "/format";

/// Presentation API client
pub struct PresentationClient {
    http: reqwest::Client,
    endpoint: CollaboratorEndpoint,
}

impl PresentationClient {
    pub fn new(endpoint: CollaboratorEndpoint) -> Self {
        Self {
            http: build_http_client(),
            endpoint,
        }
    }
}

#[async_trait::async_trait]
impl Presenter for PresentationClient {
    async fn format(&self, input: &PresentationInput) -> Result<PresentationText, ProviderError> {
        post_json(&self.http, &self.endpoint, PATH, input).await
    }
}
