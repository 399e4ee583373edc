//! # VeriFuse Common Library
//!
//! Shared code for VeriFuse services including:
//! - Common error types
//! - TOML configuration loading with environment overrides

pub mod config;
pub mod error;

pub use error::{Error, Result};
