//! Collaborator HTTP client adapters
//!
//! One thin reqwest client per external collaborator, each speaking the
//! narrow JSON request/response contract of its service and implementing the
//! matching trait from `types`. Clients are immutable after construction and
//! shared read-only across concurrent requests.
//!
//! Per-call deadlines are enforced by the dispatcher; the HTTP clients carry
//! a wider safety-net timeout so support collaborators (transcription,
//! translation, presentation) cannot hang the pipeline either.

pub mod credibility;
pub mod fact_check;
pub mod presentation;
pub mod safety;
pub mod synthetic;
pub mod transcription;
pub mod translation;
pub mod url_reputation;
pub mod web_analysis;

pub use credibility::CredibilityClient;
pub use fact_check::FactCheckClient;
pub use presentation::PresentationClient;
pub use safety::SafetyClient;
pub use synthetic::SyntheticDetectionClient;
pub use transcription::TranscriptionClient;
pub use translation::TranslationClient;
pub use url_reputation::UrlReputationClient;
pub use web_analysis::WebAnalysisClient;

use crate::config::{CollaboratorEndpoint, CollaboratorsConfig};
use crate::orchestrator::CollaboratorBundle;
use crate::types::ProviderError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

const USER_AGENT: &str = concat!("VeriFuse/", env!("CARGO_PKG_VERSION"));
const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Shared HTTP client configuration for all collaborator adapters
pub(crate) fn build_http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(HTTP_TIMEOUT)
        .build()
        .unwrap_or_default()
}

/// POST a JSON body to a collaborator endpoint and decode the JSON response
pub(crate) async fn post_json<Req, Resp>(
    http: &reqwest::Client,
    endpoint: &CollaboratorEndpoint,
    path: &str,
    body: &Req,
) -> Result<Resp, ProviderError>
where
    Req: Serialize + ?Sized,
    Resp: DeserializeOwned,
{
    let url = format!("{}{}", endpoint.base_url.trim_end_matches('/'), path);

    let mut request = http.post(&url).json(body);
    if let Some(key) = &endpoint.api_key {
        request = request.bearer_auth(key);
    }

    let response = request
        .send()
        .await
        .map_err(|e| ProviderError::Network(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        let error_text = response.text().await.unwrap_or_default();
        return Err(ProviderError::Api(status.as_u16(), error_text));
    }

    response
        .json()
        .await
        .map_err(|e| ProviderError::Parse(e.to_string()))
}

/// Build the full collaborator bundle from resolved configuration
pub fn http_collaborators(config: &CollaboratorsConfig) -> CollaboratorBundle {
    CollaboratorBundle {
        providers: vec![
            Arc::new(SafetyClient::new(config.safety.clone())),
            Arc::new(FactCheckClient::new(config.fact_check.clone())),
            Arc::new(WebAnalysisClient::new(config.web_analysis.clone())),
            Arc::new(SyntheticDetectionClient::new(
                config.synthetic_detection.clone(),
            )),
            Arc::new(UrlReputationClient::new(config.url_reputation.clone())),
            Arc::new(CredibilityClient::new(config.credibility.clone())),
        ],
        transcriber: Arc::new(TranscriptionClient::new(config.transcription.clone())),
        translator: Arc::new(TranslationClient::new(config.translation.clone())),
        presenter: Arc::new(PresentationClient::new(config.presentation.clone())),
    }
}

/// Canonical content for text-oriented collaborators: URL inputs are passed
/// as the URL string under the `url` content type, everything else as text.
pub(crate) fn text_content(
    request: &crate::types::CanonicalRequest,
) -> Result<(&str, &'static str), ProviderError> {
    if let Some(url) = &request.url {
        return Ok((url, "url"));
    }
    match &request.text {
        Some(text) => Ok((text, "text")),
        None => Err(ProviderError::Unsupported(
            "no canonical text for text-oriented collaborator".to_string(),
        )),
    }
}

/// Canonical media re-encoded for the wire, with its category name
pub(crate) fn media_content(
    request: &crate::types::CanonicalRequest,
) -> Result<(String, &'static str), ProviderError> {
    use base64::engine::general_purpose::STANDARD as BASE64;
    use base64::Engine as _;

    match &request.media {
        Some(media) => Ok((BASE64.encode(&media.bytes), media.kind.as_str())),
        None => Err(ProviderError::Unsupported(
            "no media payload for media-oriented collaborator".to_string(),
        )),
    }
}
