//! Web-analysis (search corroboration) collaborator client

use crate::config::CollaboratorEndpoint;
use crate::providers::{build_http_client, post_json, text_content};
use crate::types::{
    CanonicalRequest, ProviderError, SignalPayload, SignalProvider, SignalSource,
    WebAnalysisReport,
};
use serde::Serialize;

const PATH: &str = "/web-analysis";

/// Web-analysis API client
pub struct WebAnalysisClient {
    http: reqwest::Client,
    endpoint: CollaboratorEndpoint,
}

impl WebAnalysisClient {
    pub fn new(endpoint: CollaboratorEndpoint) -> Self {
        Self {
            http: build_http_client(),
            endpoint,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct WebAnalysisRequest<'a> {
    query: &'a str,
    content_type: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    search_engine_id: Option<&'a str>,
}

#[async_trait::async_trait]
impl SignalProvider for WebAnalysisClient {
    fn source(&self) -> SignalSource {
        SignalSource::WebAnalysis
    }

    async fn fetch(&self, request: &CanonicalRequest) -> Result<SignalPayload, ProviderError> {
        let (query, content_type) = text_content(request)?;

        let report: WebAnalysisReport = post_json(
            &self.http,
            &self.endpoint,
            PATH,
            &WebAnalysisRequest {
                query,
                content_type,
                search_engine_id: request.search_engine_id.as_deref(),
            },
        )
        .await?;

        Ok(SignalPayload::WebAnalysis(report))
    }
}
