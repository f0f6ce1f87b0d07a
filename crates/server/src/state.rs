//! Application State
//!
//! Built once in `main` and cloned into every handler. Nothing in it is
//! mutated after startup, so there are no locks.

use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;

use hindi_xlit_config::Settings;
use hindi_xlit_core::Transliterator;

use crate::ServerError;

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Settings>,
    /// Transliteration backend, constructed once at startup
    pub transliterator: Arc<dyn Transliterator>,
    /// Present when metrics are enabled and the recorder is installed
    pub metrics: Option<PrometheusHandle>,
}

impl AppState {
    pub fn new(config: Settings, transliterator: Arc<dyn Transliterator>) -> Self {
        Self {
            config: Arc::new(config),
            transliterator,
            metrics: None,
        }
    }

    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(handle);
        self
    }

    /// Candidates requested from the backend per word
    pub fn max_candidates(&self) -> usize {
        self.config.transliteration.max_candidates
    }

    /// Ranked candidates for `word`, capped at the configured count
    pub async fn candidates(&self, word: &str) -> Result<Vec<String>, ServerError> {
        let limit = self.max_candidates();
        let mut candidates = self
            .transliterator
            .transliterate(word, Some(limit))
            .await?;
        candidates.truncate(limit);
        Ok(candidates)
    }
}
