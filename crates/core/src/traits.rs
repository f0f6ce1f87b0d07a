//! Transliteration backend trait
//!
//! Every backend (native rules, HTTP sidecar, fallback chain) implements
//! `Transliterator`, so the server holds a single `Arc<dyn Transliterator>`
//! and never knows which one it is talking to.

use async_trait::async_trait;
use serde::Serialize;

use crate::Result;

/// Backend readiness as reported on the health endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BackendHealth {
    pub backend: String,
    pub ready: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl BackendHealth {
    pub fn ready(backend: impl Into<String>) -> Self {
        Self {
            backend: backend.into(),
            ready: true,
            detail: None,
        }
    }

    pub fn unavailable(backend: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            backend: backend.into(),
            ready: false,
            detail: Some(detail.into()),
        }
    }
}

/// Roman (Hinglish) to Devanagari transliteration
///
/// Implementations are immutable after construction and shared across
/// requests, hence `Send + Sync`.
#[async_trait]
pub trait Transliterator: Send + Sync {
    /// Ranked Devanagari candidates for `word`, most likely first.
    ///
    /// `max_candidates` of `None` lets the backend use its own default.
    async fn transliterate(&self, word: &str, max_candidates: Option<usize>)
        -> Result<Vec<String>>;

    /// Backend name for logs and health output
    fn name(&self) -> &str;

    /// Readiness check. Local backends are always ready.
    async fn health(&self) -> BackendHealth {
        BackendHealth::ready(self.name())
    }
}
