//! Configuration management for the transliteration service
//!
//! Supports loading configuration from:
//! - Profile defaults (`server` or `desktop`)
//! - YAML/TOML files under `config/`
//! - Environment variables (HINDI_XLIT__ prefix)

pub mod constants;
pub mod settings;
pub mod transliteration;

pub use settings::{
    load_settings, load_settings_from, ObservabilityConfig, Profile, ServerConfig, Settings,
};
pub use transliteration::{TransliterationConfig, TransliterationProvider};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}
