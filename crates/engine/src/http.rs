//! HTTP sidecar backend
//!
//! Forwards words to an external model service (e.g. a neural
//! transliteration model served from Python) and returns its ranked
//! candidates.
//!
//! Protocol:
//! - `POST {endpoint}/transliterate` with `{"word": "...", "top_k": n}`,
//!   answered by `{"candidates": ["...", ...]}`
//! - `GET {endpoint}/health`, any 2xx means ready

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use hindi_xlit_config::constants::engine;
use hindi_xlit_core::{BackendHealth, Error, Result, Transliterator};

/// Sidecar client configuration
#[derive(Debug, Clone)]
pub struct HttpTransliteratorConfig {
    /// Base URL, without a trailing path
    pub endpoint: String,
    pub timeout_ms: u64,
    /// `top_k` sent when the caller does not ask for a count
    pub default_candidates: usize,
}

impl Default for HttpTransliteratorConfig {
    fn default() -> Self {
        Self {
            endpoint: engine::SIDECAR_ENDPOINT.to_string(),
            timeout_ms: engine::SIDECAR_TIMEOUT_MS,
            default_candidates: engine::MAX_CANDIDATES,
        }
    }
}

#[derive(Debug, Serialize)]
struct SidecarRequest<'a> {
    word: &'a str,
    top_k: usize,
}

#[derive(Debug, Deserialize)]
struct SidecarResponse {
    candidates: Vec<String>,
}

/// Transliterator backed by an HTTP model service
pub struct HttpTransliterator {
    config: HttpTransliteratorConfig,
    client: reqwest::Client,
}

impl HttpTransliterator {
    pub fn new(mut config: HttpTransliteratorConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| Error::Backend(format!("Failed to create HTTP client: {}", e)))?;

        config.endpoint = config.endpoint.trim_end_matches('/').to_string();
        tracing::info!(endpoint = %config.endpoint, "HTTP transliteration backend configured");

        Ok(Self { config, client })
    }

    /// Create with custom endpoint and default limits
    pub fn with_endpoint(endpoint: impl Into<String>) -> Result<Self> {
        Self::new(HttpTransliteratorConfig {
            endpoint: endpoint.into(),
            ..Default::default()
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.config.endpoint
    }
}

#[async_trait]
impl Transliterator for HttpTransliterator {
    /// A blank word is answered locally with `[""]`: the sidecar protocol
    /// treats an empty candidate list as a failure.
    async fn transliterate(
        &self,
        word: &str,
        max_candidates: Option<usize>,
    ) -> Result<Vec<String>> {
        if word.trim().is_empty() {
            return Ok(vec![String::new()]);
        }

        let top_k = max_candidates
            .unwrap_or(self.config.default_candidates)
            .max(1);
        let url = format!("{}/transliterate", self.config.endpoint);

        let response = self
            .client
            .post(&url)
            .json(&SidecarRequest { word, top_k })
            .send()
            .await
            .map_err(|e| Error::Backend(format!("Sidecar request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(Error::Backend(format!(
                "Sidecar returned error: {}",
                response.status()
            )));
        }

        let body: SidecarResponse = response
            .json()
            .await
            .map_err(|e| Error::Backend(format!("Failed to parse sidecar response: {}", e)))?;

        let mut candidates: Vec<String> = Vec::with_capacity(top_k);
        for candidate in body.candidates {
            if !candidate.is_empty() && !candidates.contains(&candidate) {
                candidates.push(candidate);
            }
        }
        candidates.truncate(top_k);

        if candidates.is_empty() {
            return Err(Error::Backend(format!(
                "Sidecar returned no candidates for '{}'",
                word
            )));
        }

        Ok(candidates)
    }

    fn name(&self) -> &str {
        "http"
    }

    async fn health(&self) -> BackendHealth {
        let url = format!("{}/health", self.config.endpoint);
        match self.client.get(&url).send().await {
            Ok(resp) if resp.status().is_success() => BackendHealth::ready(self.name()),
            Ok(resp) => BackendHealth::unavailable(
                self.name(),
                format!("sidecar returned {}", resp.status()),
            ),
            Err(e) => BackendHealth::unavailable(self.name(), format!("sidecar unreachable: {}", e)),
        }
    }
}
