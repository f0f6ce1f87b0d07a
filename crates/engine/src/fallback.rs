//! Primary backend with a fallback
//!
//! Used to put the rule engine behind the sidecar: when the sidecar is down
//! or misbehaves, requests are still answered.

use async_trait::async_trait;
use std::sync::Arc;

use hindi_xlit_core::{BackendHealth, Error, Result, Transliterator};

pub struct FallbackTransliterator {
    primary: Arc<dyn Transliterator>,
    fallback: Arc<dyn Transliterator>,
    name: String,
}

impl FallbackTransliterator {
    pub fn new(primary: Arc<dyn Transliterator>, fallback: Arc<dyn Transliterator>) -> Self {
        let name = format!("{}+{}", primary.name(), fallback.name());
        Self {
            primary,
            fallback,
            name,
        }
    }
}

#[async_trait]
impl Transliterator for FallbackTransliterator {
    async fn transliterate(
        &self,
        word: &str,
        max_candidates: Option<usize>,
    ) -> Result<Vec<String>> {
        match self.primary.transliterate(word, max_candidates).await {
            Ok(candidates) => Ok(candidates),
            // Bad input fails the same way everywhere
            Err(e @ Error::InputTooLong { .. }) => Err(e),
            Err(e) => {
                tracing::warn!(
                    primary = self.primary.name(),
                    fallback = self.fallback.name(),
                    error = %e,
                    "Primary transliterator failed, using fallback"
                );
                self.fallback.transliterate(word, max_candidates).await
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }

    /// Ready while either backend can serve
    async fn health(&self) -> BackendHealth {
        let primary = self.primary.health().await;
        if primary.ready {
            return BackendHealth::ready(&self.name);
        }

        let fallback = self.fallback.health().await;
        BackendHealth {
            backend: self.name.clone(),
            ready: fallback.ready,
            detail: Some(format!(
                "{} degraded: {}",
                primary.backend,
                primary.detail.unwrap_or_default()
            )),
        }
    }
}
