//! Configuration file loading
//!
//! Config file resolution priority order:
//! 1. Environment variable (explicit path)
//! 2. Per-user config file (`~/.config/vfuse/<service>.toml` via `XDG_CONFIG_HOME`/`HOME`)
//! 3. System config file (`/etc/vfuse/<service>.toml`)
//!
//! Service-specific settings layer environment-variable overrides on top of
//! the TOML values; that resolution lives with each service.

use crate::{Error, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Logging configuration shared by all services
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LoggingConfig {
    /// Log filter directive (e.g. "info", "vfuse_orch=debug")
    pub level: Option<String>,
}

/// Resolve the config file path for a service, or None when no file exists
///
/// `env_var` names an environment variable that, when set, points directly at
/// the file to use (highest priority, even if the file is missing the caller
/// gets the error rather than a silent fallback).
pub fn resolve_config_path(env_var: &str, service: &str) -> Option<PathBuf> {
    if let Ok(path) = std::env::var(env_var) {
        return Some(PathBuf::from(path));
    }

    let file_name = format!("{}.toml", service);

    let user_config = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .ok()
        .or_else(|| std::env::var("HOME").map(|h| PathBuf::from(h).join(".config")).ok())
        .map(|d| d.join("vfuse").join(&file_name));

    if let Some(path) = user_config {
        if path.exists() {
            return Some(path);
        }
    }

    let system_config = PathBuf::from("/etc/vfuse").join(&file_name);
    if system_config.exists() {
        return Some(system_config);
    }

    None
}

/// Read and parse a TOML config file into the given type
pub fn read_toml_file<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::Config(format!("Read TOML failed ({}): {}", path.display(), e)))?;
    let parsed = toml::from_str(&content)
        .map_err(|e| Error::Config(format!("Parse TOML failed ({}): {}", path.display(), e)))?;
    debug!(path = %path.display(), "Loaded TOML config");
    Ok(parsed)
}

/// Read a TOML config file if a path resolves, otherwise fall back to defaults
pub fn load_or_default<T: DeserializeOwned + Default>(env_var: &str, service: &str) -> Result<T> {
    match resolve_config_path(env_var, service) {
        Some(path) => read_toml_file(&path),
        None => Ok(T::default()),
    }
}
