//! Configuration resolution for vfuse-orch
//!
//! Settings resolve with ENV → TOML → built-in default priority. The
//! orchestrator keeps no persistent state, so there is no stored-settings
//! tier; environment variables are authoritative for deployments.
//!
//! Collaborator endpoints default to fixed local ports so a full local stack
//! runs with zero configuration.

use serde::{Deserialize, Serialize};
use tracing::warn;
use vfuse_common::config::LoggingConfig;
use vfuse_common::Result;

/// Environment variable naming an explicit config file path
pub const CONFIG_PATH_ENV: &str = "VFUSE_ORCH_CONFIG";
/// Shared API key override for all collaborators
pub const API_KEY_ENV: &str = "VFUSE_COLLAB_API_KEY";

const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:5810";
const DEFAULT_SOURCE_TIMEOUT_MS: u64 = 8000;
const DEFAULT_WORKING_LANGUAGE: &str = "en";

/// One collaborator endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollaboratorEndpoint {
    pub base_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

impl CollaboratorEndpoint {
    fn local(port: u16) -> Self {
        Self {
            base_url: format!("http://127.0.0.1:{}", port),
            api_key: None,
        }
    }
}

/// Endpoints for every external collaborator
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CollaboratorsConfig {
    pub safety: CollaboratorEndpoint,
    pub fact_check: CollaboratorEndpoint,
    pub web_analysis: CollaboratorEndpoint,
    pub credibility: CollaboratorEndpoint,
    pub synthetic_detection: CollaboratorEndpoint,
    pub url_reputation: CollaboratorEndpoint,
    pub transcription: CollaboratorEndpoint,
    pub translation: CollaboratorEndpoint,
    pub presentation: CollaboratorEndpoint,
}

impl Default for CollaboratorsConfig {
    fn default() -> Self {
        Self {
            safety: CollaboratorEndpoint::local(5811),
            fact_check: CollaboratorEndpoint::local(5812),
            web_analysis: CollaboratorEndpoint::local(5813),
            credibility: CollaboratorEndpoint::local(5814),
            synthetic_detection: CollaboratorEndpoint::local(5815),
            url_reputation: CollaboratorEndpoint::local(5816),
            transcription: CollaboratorEndpoint::local(5817),
            translation: CollaboratorEndpoint::local(5818),
            presentation: CollaboratorEndpoint::local(5819),
        }
    }
}

/// TOML file shape for vfuse-orch
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub listen_addr: Option<String>,
    pub per_source_timeout_ms: Option<u64>,
    pub working_language: Option<String>,
    pub api_key: Option<String>,
    pub logging: LoggingConfig,
    pub collaborators: Option<CollaboratorsConfig>,
}

/// Resolved orchestrator configuration (immutable after startup)
#[derive(Debug, Clone)]
pub struct OrchestratorConfig {
    pub listen_addr: String,
    /// Per-source dispatch timeout in milliseconds
    pub per_source_timeout_ms: u64,
    /// Working language of the text-oriented collaborators
    pub working_language: String,
    pub logging: LoggingConfig,
    pub collaborators: CollaboratorsConfig,
}

impl Default for OrchestratorConfig {
    fn default() -> Self {
        Self {
            listen_addr: DEFAULT_LISTEN_ADDR.to_string(),
            per_source_timeout_ms: DEFAULT_SOURCE_TIMEOUT_MS,
            working_language: DEFAULT_WORKING_LANGUAGE.to_string(),
            logging: LoggingConfig::default(),
            collaborators: CollaboratorsConfig::default(),
        }
    }
}

impl OrchestratorConfig {
    /// Load configuration: TOML file (if any) overridden by environment
    pub fn load() -> Result<Self> {
        let toml_config: TomlConfig =
            vfuse_common::config::load_or_default(CONFIG_PATH_ENV, "vfuse-orch")?;
        Ok(Self::from_sources(toml_config))
    }

    /// Resolve from a parsed TOML config plus process environment
    pub fn from_sources(toml_config: TomlConfig) -> Self {
        let listen_addr = std::env::var("VFUSE_ORCH_LISTEN")
            .ok()
            .or(toml_config.listen_addr)
            .unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string());

        let per_source_timeout_ms = std::env::var("VFUSE_ORCH_SOURCE_TIMEOUT_MS")
            .ok()
            .and_then(|value| match value.parse() {
                Ok(parsed) => Some(parsed),
                Err(_) => {
                    warn!(value = %value, "Ignoring unparseable VFUSE_ORCH_SOURCE_TIMEOUT_MS");
                    None
                }
            })
            .or(toml_config.per_source_timeout_ms)
            .unwrap_or(DEFAULT_SOURCE_TIMEOUT_MS);

        let working_language = std::env::var("VFUSE_WORKING_LANGUAGE")
            .ok()
            .or(toml_config.working_language)
            .unwrap_or_else(|| DEFAULT_WORKING_LANGUAGE.to_string());

        let mut collaborators = toml_config.collaborators.unwrap_or_default();

        // A shared API key applies to every collaborator that has none of
        // its own; ENV wins over TOML.
        let env_key = std::env::var(API_KEY_ENV).ok().filter(|k| !k.trim().is_empty());
        let toml_key = toml_config.api_key.filter(|k| !k.trim().is_empty());
        if env_key.is_some() && toml_key.is_some() {
            warn!(
                "Collaborator API key found in both environment and TOML; \
                 using environment (highest priority)"
            );
        }
        if let Some(key) = env_key.or(toml_key) {
            for endpoint in [
                &mut collaborators.safety,
                &mut collaborators.fact_check,
                &mut collaborators.web_analysis,
                &mut collaborators.credibility,
                &mut collaborators.synthetic_detection,
                &mut collaborators.url_reputation,
                &mut collaborators.transcription,
                &mut collaborators.translation,
                &mut collaborators.presentation,
            ] {
                if endpoint.api_key.is_none() {
                    endpoint.api_key = Some(key.clone());
                }
            }
        }

        Self {
            listen_addr,
            per_source_timeout_ms,
            working_language,
            logging: toml_config.logging,
            collaborators,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
