//! Transliteration backends
//!
//! - `RuleTransliterator`: native engine (lexicon + weighted rules + beam search)
//! - `HttpTransliterator`: external model sidecar
//! - `FallbackTransliterator`: primary backend with a fallback
//!
//! `create_transliterator` builds the configured backend once at startup.

pub mod fallback;
pub mod http;
pub mod lexicon;
pub mod rules;

pub use fallback::FallbackTransliterator;
pub use http::{HttpTransliterator, HttpTransliteratorConfig};
pub use lexicon::Lexicon;
pub use rules::{RuleConfig, RuleTransliterator};

use std::sync::Arc;

use hindi_xlit_config::{TransliterationConfig, TransliterationProvider};
use hindi_xlit_core::{Result, Transliterator};

/// Build the rule engine from config, loading the lexicon file if one is set
pub fn create_rule_transliterator(config: &TransliterationConfig) -> RuleTransliterator {
    let lexicon = match &config.lexicon_path {
        Some(path) => match Lexicon::load(path) {
            Ok(lexicon) => lexicon,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load lexicon, using built-in entries");
                Lexicon::builtin()
            }
        },
        None => Lexicon::builtin(),
    };

    RuleTransliterator::new(
        RuleConfig {
            default_candidates: config.max_candidates,
            beam_width: config.beam_width,
            max_word_length: config.max_word_length,
        },
        lexicon,
    )
}

/// Create transliterator based on config
pub fn create_transliterator(config: &TransliterationConfig) -> Result<Arc<dyn Transliterator>> {
    match config.provider {
        TransliterationProvider::Rules => {
            tracing::info!("Using native rule transliterator");
            Ok(Arc::new(create_rule_transliterator(config)))
        }
        TransliterationProvider::Http => {
            let primary = Arc::new(HttpTransliterator::new(HttpTransliteratorConfig {
                endpoint: config.endpoint.clone(),
                timeout_ms: config.timeout_ms,
                default_candidates: config.max_candidates,
            })?);

            if config.fallback_to_rules {
                tracing::info!(endpoint = %config.endpoint, "Using HTTP transliterator with rule fallback");
                let fallback = Arc::new(create_rule_transliterator(config));
                Ok(Arc::new(FallbackTransliterator::new(primary, fallback)))
            } else {
                tracing::info!(endpoint = %config.endpoint, "Using HTTP transliterator (no fallback)");
                Ok(primary)
            }
        }
    }
}
