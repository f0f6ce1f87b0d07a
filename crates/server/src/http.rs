//! HTTP Endpoints
//!
//! - `GET /`: index page
//! - `POST /transliterate`: top suggestion for one word
//! - `POST /suggestions`: ranked list for the suggestion dropdown
//! - `GET /health`, `GET /metrics`

use axum::{
    body::Bytes,
    extract::{Json, State},
    http::{header, HeaderValue, Method, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use hindi_xlit_core::Suggestions;

use crate::metrics::{record_duration, record_error, record_request};
use crate::state::AppState;
use crate::ServerError;

const INDEX_HTML: &str = include_str!("../assets/index.html");

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    let cors_layer = build_cors_layer(
        &state.config.server.cors_origins,
        state.config.server.cors_enabled,
    );

    Router::new()
        .route("/", get(index))
        .route("/transliterate", post(transliterate))
        .route("/suggestions", post(suggestions))
        .route("/health", get(health_check))
        .route("/metrics", get(metrics_handler))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer)
        .with_state(state)
}

/// Build CORS layer from configured origins
///
/// - If cors_enabled is false, returns permissive layer
/// - Otherwise only the configured origins are allowed
fn build_cors_layer(origins: &[String], enabled: bool) -> CorsLayer {
    if !enabled {
        tracing::debug!("CORS restrictions disabled, allowing all origins");
        return CorsLayer::permissive();
    }

    let parsed_origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| {
            origin.parse::<HeaderValue>().ok().or_else(|| {
                tracing::warn!("Invalid CORS origin: {}", origin);
                None
            })
        })
        .collect();

    if parsed_origins.is_empty() {
        tracing::warn!("No valid CORS origins configured, cross-origin requests will be rejected");
    } else {
        tracing::info!("CORS configured with {} origins", parsed_origins.len());
    }

    CorsLayer::new()
        .allow_origin(parsed_origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
}

/// Request body shared by both POST endpoints
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TransliterateRequest {
    /// Missing means `""`
    #[serde(default)]
    pub word: String,
}

/// `/transliterate` response; `suggestions` is a single string
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransliterateResponse {
    pub suggestions: String,
}

/// `/suggestions` response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestionsResponse {
    pub word: String,
    /// Ranked candidates, the original word last
    pub candidates: Vec<String>,
}

/// Parse a request body leniently.
///
/// An empty body counts as `{}`. The content type is not checked. Anything
/// that is not a JSON object, or a `word` that is not a string, is rejected.
pub fn parse_request(body: &[u8]) -> Result<TransliterateRequest, ServerError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(TransliterateRequest::default());
    }

    let value: serde_json::Value = serde_json::from_slice(body)
        .map_err(|e| ServerError::InvalidRequest(format!("Body is not JSON: {}", e)))?;

    let object = value
        .as_object()
        .ok_or_else(|| ServerError::InvalidRequest("Body is not a JSON object".to_string()))?;

    match object.get("word") {
        None => Ok(TransliterateRequest::default()),
        Some(serde_json::Value::String(word)) => Ok(TransliterateRequest { word: word.clone() }),
        Some(other) => Err(ServerError::InvalidRequest(format!(
            "'word' must be a string, got {}",
            other
        ))),
    }
}

/// Log, count and convert a request failure
fn fail(endpoint: &'static str, err: ServerError) -> StatusCode {
    tracing::error!(endpoint, kind = err.kind(), error = %err, "Request failed");
    record_error(endpoint, err.kind());
    err.into()
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Top candidate for one word
async fn transliterate(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<TransliterateResponse>, StatusCode> {
    const ENDPOINT: &str = "transliterate";
    let started = Instant::now();
    record_request(ENDPOINT);

    let request = parse_request(&body).map_err(|e| fail(ENDPOINT, e))?;
    let candidates = state
        .candidates(&request.word)
        .await
        .map_err(|e| fail(ENDPOINT, e))?;

    let list = Suggestions::top_with_original(request.word, candidates);
    tracing::debug!(word = %list.original(), suggestion = %list.top(), "Transliterated");

    record_duration(ENDPOINT, started.elapsed());
    Ok(Json(TransliterateResponse {
        suggestions: list.top().to_string(),
    }))
}

/// Ranked candidates followed by the original word
async fn suggestions(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<SuggestionsResponse>, StatusCode> {
    const ENDPOINT: &str = "suggestions";
    let started = Instant::now();
    record_request(ENDPOINT);

    let request = parse_request(&body).map_err(|e| fail(ENDPOINT, e))?;
    let candidates = state
        .candidates(&request.word)
        .await
        .map_err(|e| fail(ENDPOINT, e))?;

    let list = Suggestions::new(request.word, candidates);

    record_duration(ENDPOINT, started.elapsed());
    Ok(Json(SuggestionsResponse {
        word: list.original().to_string(),
        candidates: list.display_list(state.max_candidates()),
    }))
}

/// Liveness plus backend readiness
async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<serde_json::Value>) {
    let backend = state.transliterator.health().await;

    let (status, status_code) = if backend.ready {
        ("healthy", StatusCode::OK)
    } else {
        ("degraded", StatusCode::SERVICE_UNAVAILABLE)
    };

    (
        status_code,
        Json(serde_json::json!({
            "status": status,
            "version": env!("CARGO_PKG_VERSION"),
            "profile": state.config.profile.as_str(),
            "backend": backend,
        })),
    )
}

/// Prometheus text format; 404 when metrics are disabled
async fn metrics_handler(State(state): State<AppState>) -> Response {
    match &state.metrics {
        Some(handle) => (
            [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
            handle.render(),
        )
            .into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}
