//! Transliteration backend configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::constants::engine;
use crate::ConfigError;

/// Which backend serves requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TransliterationProvider {
    /// Native rule engine with lexicon
    #[default]
    #[serde(alias = "native")]
    Rules,
    /// External model service over HTTP
    #[serde(alias = "sidecar")]
    Http,
}

/// Transliteration configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransliterationConfig {
    #[serde(default)]
    pub provider: TransliterationProvider,

    /// Candidates requested per word
    #[serde(default = "default_max_candidates")]
    pub max_candidates: usize,

    /// Beam width of the rule engine
    #[serde(default = "default_beam_width")]
    pub beam_width: usize,

    /// Longest accepted word (grapheme clusters)
    #[serde(default = "default_max_word_length")]
    pub max_word_length: usize,

    /// Optional YAML lexicon merged over the built-in one
    #[serde(default)]
    pub lexicon_path: Option<PathBuf>,

    /// Sidecar base URL (http provider)
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Sidecar request timeout
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Use the rule engine when the sidecar fails
    #[serde(default = "default_true")]
    pub fallback_to_rules: bool,
}

fn default_max_candidates() -> usize {
    engine::MAX_CANDIDATES
}

fn default_beam_width() -> usize {
    engine::BEAM_WIDTH
}

fn default_max_word_length() -> usize {
    engine::MAX_WORD_LENGTH
}

fn default_endpoint() -> String {
    engine::SIDECAR_ENDPOINT.to_string()
}

fn default_timeout_ms() -> u64 {
    engine::SIDECAR_TIMEOUT_MS
}

fn default_true() -> bool {
    true
}

impl Default for TransliterationConfig {
    fn default() -> Self {
        Self {
            provider: TransliterationProvider::default(),
            max_candidates: default_max_candidates(),
            beam_width: default_beam_width(),
            max_word_length: default_max_word_length(),
            lexicon_path: None,
            endpoint: default_endpoint(),
            timeout_ms: default_timeout_ms(),
            fallback_to_rules: true,
        }
    }
}

impl TransliterationConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_candidates == 0 {
            return Err(ConfigError::InvalidValue {
                field: "transliteration.max_candidates".to_string(),
                message: "Must be at least 1".to_string(),
            });
        }

        if self.beam_width < self.max_candidates {
            return Err(ConfigError::InvalidValue {
                field: "transliteration.beam_width".to_string(),
                message: format!(
                    "Must be at least max_candidates ({}), got {}",
                    self.max_candidates, self.beam_width
                ),
            });
        }

        if self.max_word_length == 0 {
            return Err(ConfigError::InvalidValue {
                field: "transliteration.max_word_length".to_string(),
                message: "Must be at least 1".to_string(),
            });
        }

        if self.provider == TransliterationProvider::Http {
            if self.endpoint.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: "transliteration.endpoint".to_string(),
                    message: "Endpoint is required for the http provider".to_string(),
                });
            }
            if !self.endpoint.starts_with("http://") && !self.endpoint.starts_with("https://") {
                return Err(ConfigError::InvalidValue {
                    field: "transliteration.endpoint".to_string(),
                    message: format!("Expected an http(s) URL, got '{}'", self.endpoint),
                });
            }
            if self.timeout_ms == 0 {
                return Err(ConfigError::InvalidValue {
                    field: "transliteration.timeout_ms".to_string(),
                    message: "Timeout must be at least 1ms".to_string(),
                });
            }
        }

        Ok(())
    }

    /// Non-fatal issues: the engine still starts with the built-in lexicon
    pub fn warnings(&self) -> Vec<String> {
        match &self.lexicon_path {
            Some(path) if !path.exists() => vec![format!(
                "Lexicon file {} not found, using built-in lexicon only",
                path.display()
            )],
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TransliterationConfig::default();
        assert_eq!(config.provider, TransliterationProvider::Rules);
        assert_eq!(config.max_candidates, 5);
        assert!(config.fallback_to_rules);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_candidate_bounds() {
        let mut config = TransliterationConfig::default();
        config.max_candidates = 0;
        assert!(config.validate().is_err());

        config.max_candidates = 20;
        config.beam_width = 10;
        assert!(config.validate().is_err());

        config.beam_width = 20;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_http_provider_requires_endpoint() {
        let mut config = TransliterationConfig {
            provider: TransliterationProvider::Http,
            endpoint: String::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        config.endpoint = "localhost:8765".to_string();
        assert!(config.validate().is_err());

        config.endpoint = "http://localhost:8765".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_lexicon_is_a_warning() {
        let mut config = TransliterationConfig::default();
        assert!(config.warnings().is_empty());

        config.lexicon_path = Some("/nonexistent/lexicon.yaml".into());
        assert!(config.validate().is_ok());
        assert_eq!(config.warnings().len(), 1);
    }
}
