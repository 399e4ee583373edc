//! Language detection and translation collaborator client

use crate::config::CollaboratorEndpoint;
use crate::providers::{build_http_client, post_json};
use crate::types::{LanguageDetection, ProviderError, Translator};
use serde::{Deserialize, Serialize};

const TRANSLATE_PATH: &str = "/translate";
const DETECT_PATH: &str = "/detect-language";

/// Translation API client
pub struct TranslationClient {
    http: reqwest::Client,
    endpoint: CollaboratorEndpoint,
}

impl TranslationClient {
    pub fn new(endpoint: CollaboratorEndpoint) -> Self {
        Self {
            http: build_http_client(),
            endpoint,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TranslateRequest<'a> {
    text: &'a str,
    target_language: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TranslateResponse {
    translated_text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DetectRequest<'a> {
    text: &'a str,
}

#[async_trait::async_trait]
impl Translator for TranslationClient {
    async fn detect_language(&self, text: &str) -> Result<LanguageDetection, ProviderError> {
        post_json(&self.http, &self.endpoint, DETECT_PATH, &DetectRequest { text }).await
    }

    async fn translate(
        &self,
        text: &str,
        target_language: &str,
    ) -> Result<String, ProviderError> {
        let response: TranslateResponse = post_json(
            &self.http,
            &self.endpoint,
            TRANSLATE_PATH,
            &TranslateRequest {
                text,
                target_language,
            },
        )
        .await?;
        Ok(response.translated_text)
    }
}
