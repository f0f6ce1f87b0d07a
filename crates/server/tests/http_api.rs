//! Router tests against the rule engine and stub backends

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use metrics_exporter_prometheus::PrometheusBuilder;
use std::sync::Arc;
use tower::ServiceExt;

use hindi_xlit_config::{Profile, Settings};
use hindi_xlit_core::{BackendHealth, Error, Result, ScriptDetector, Transliterator};
use hindi_xlit_engine::RuleTransliterator;
use hindi_xlit_server::{create_router, AppState};

/// Returns fixed candidates and records nothing
struct Fixed(Vec<&'static str>);

#[async_trait]
impl Transliterator for Fixed {
    async fn transliterate(&self, _word: &str, n: Option<usize>) -> Result<Vec<String>> {
        let n = n.unwrap_or(usize::MAX);
        Ok(self.0.iter().take(n).map(|s| s.to_string()).collect())
    }

    fn name(&self) -> &str {
        "fixed"
    }
}

/// Always fails
struct Broken;

#[async_trait]
impl Transliterator for Broken {
    async fn transliterate(&self, _word: &str, _n: Option<usize>) -> Result<Vec<String>> {
        Err(Error::Backend("model crashed".to_string()))
    }

    fn name(&self) -> &str {
        "broken"
    }

    async fn health(&self) -> BackendHealth {
        BackendHealth::unavailable("broken", "model crashed")
    }
}

fn app_with(backend: Arc<dyn Transliterator>) -> Router {
    create_router(AppState::new(Settings::for_profile(Profile::Desktop), backend))
}

fn rules_app() -> Router {
    app_with(Arc::new(RuleTransliterator::default()))
}

async fn post(app: Router, path: &str, body: impl Into<String>) -> (StatusCode, Vec<u8>) {
    let resp = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(path)
                .header("content-type", "application/json")
                .body(Body::from(body.into()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), 10_000).await.unwrap();
    (status, bytes.to_vec())
}

async fn get(app: Router, path: &str) -> (StatusCode, Vec<u8>) {
    let resp = app
        .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), 100_000).await.unwrap();
    (status, bytes.to_vec())
}

fn json(bytes: &[u8]) -> serde_json::Value {
    serde_json::from_slice(bytes).unwrap()
}

#[tokio::test]
async fn transliterate_returns_top_candidate() {
    let (status, body) = post(rules_app(), "/transliterate", r#"{"word": "namaste"}"#).await;
    assert_eq!(status, StatusCode::OK);

    let suggestion = json(&body)["suggestions"].as_str().unwrap().to_string();
    assert_eq!(suggestion, "नमस्ते");
    assert_ne!(suggestion, "namaste");
    assert!(ScriptDetector::new().is_devanagari(&suggestion));
}

#[tokio::test]
async fn nasal_clusters_are_well_formed() {
    let (status, body) = post(rules_app(), "/transliterate", r#"{"word": "kanya"}"#).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json(&body)["suggestions"], "कन्या");

    for body in [r#"{"word": "nyay"}"#, r#"{"word": "ng"}"#, r#"{"word": "n"}"#] {
        let (status, bytes) = post(rules_app(), "/suggestions", body).await;
        assert_eq!(status, StatusCode::OK);
        for candidate in json(&bytes)["candidates"].as_array().unwrap() {
            assert!(!candidate.as_str().unwrap().starts_with('ं'), "{} -> {}", body, candidate);
        }
    }
}

#[tokio::test]
async fn whitespace_padding_is_not_counted() {
    let body = format!(r#"{{"word": "{}"}}"#, " ".repeat(70));
    let (status, bytes) = post(rules_app(), "/transliterate", body).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json(&bytes), serde_json::json!({ "suggestions": "" }));
}

#[tokio::test]
async fn transliterate_uses_backend_order() {
    let app = app_with(Arc::new(Fixed(vec!["पहला", "दूसरा"])));
    let (status, body) = post(app, "/transliterate", r#"{"word": "anything"}"#).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json(&body), serde_json::json!({ "suggestions": "पहला" }));
}

#[tokio::test]
async fn suggestions_field_is_a_string() {
    for body in [r#"{"word": "hindi"}"#, r#"{"word": "kya"}"#, r#"{"word": ""}"#, "{}"] {
        let (status, bytes) = post(rules_app(), "/transliterate", body).await;
        assert_eq!(status, StatusCode::OK);
        assert!(json(&bytes)["suggestions"].is_string(), "{}", body);
    }
}

#[tokio::test]
async fn response_is_raw_utf8() {
    let (_, body) = post(rules_app(), "/transliterate", r#"{"word": "kya"}"#).await;
    let text = String::from_utf8(body).unwrap();
    assert!(text.contains("क्या"));
    assert!(!text.contains("\\u"));
}

#[tokio::test]
async fn missing_word_equals_empty_word() {
    let (s1, empty_object) = post(rules_app(), "/transliterate", "{}").await;
    let (s2, empty_word) = post(rules_app(), "/transliterate", r#"{"word": ""}"#).await;
    assert_eq!(s1, StatusCode::OK);
    assert_eq!(s2, StatusCode::OK);
    assert_eq!(json(&empty_object), json(&empty_word));
}

#[tokio::test]
async fn empty_body_is_treated_as_empty_object() {
    let (status, body) = post(rules_app(), "/transliterate", "").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json(&body), serde_json::json!({ "suggestions": "" }));
}

#[tokio::test]
async fn empty_candidate_list_falls_back_to_word() {
    let app = app_with(Arc::new(Fixed(vec![])));
    let (status, body) = post(app, "/transliterate", r#"{"word": "xyz"}"#).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json(&body)["suggestions"], "xyz");
}

#[tokio::test]
async fn backend_failure_is_bare_500() {
    let app = app_with(Arc::new(Broken));
    let (status, body) = post(app, "/transliterate", r#"{"word": "namaste"}"#).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.is_empty());
}

#[tokio::test]
async fn malformed_bodies_are_500() {
    for body in ["not json", r#"{"word": null}"#, r#"{"word": 7}"#, r#"["namaste"]"#] {
        let (status, _) = post(rules_app(), "/transliterate", body).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{}", body);
    }
}

#[tokio::test]
async fn unsupported_input_is_500_and_service_recovers() {
    let app = rules_app();
    let (status, _) = post(app.clone(), "/transliterate", r#"{"word": "chai☕"}"#).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    let (status, _) = post(app, "/transliterate", r#"{"word": "chai"}"#).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn index_page_is_served() {
    let app = rules_app();
    let (status, body) = get(app.clone(), "/").await;
    assert_eq!(status, StatusCode::OK);
    let page = String::from_utf8(body).unwrap();
    assert!(page.contains("<textarea"));

    // Unaffected by prior requests
    post(app.clone(), "/transliterate", r#"{"word": "namaste"}"#).await;
    let (status, again) = get(app, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(String::from_utf8(again).unwrap(), page);
}

#[tokio::test]
async fn suggestions_endpoint_lists_candidates_then_word() {
    let app = app_with(Arc::new(Fixed(vec!["हिंदी", "hindi", "हिन्दी"])));
    let (status, body) = post(app, "/suggestions", r#"{"word": "hindi"}"#).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json(&body),
        serde_json::json!({
            "word": "hindi",
            "candidates": ["हिंदी", "हिन्दी", "hindi"]
        })
    );
}

#[tokio::test]
async fn suggestions_endpoint_caps_candidates() {
    let (status, body) = post(rules_app(), "/suggestions", r#"{"word": "tathya"}"#).await;
    assert_eq!(status, StatusCode::OK);
    let candidates = json(&body)["candidates"].as_array().unwrap().clone();
    assert_eq!(candidates.len(), 6);
    assert_eq!(candidates.last().unwrap(), "tathya");
}

#[tokio::test]
async fn health_reports_backend() {
    let (status, body) = get(rules_app(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    let health = json(&body);
    assert_eq!(health["status"], "healthy");
    assert_eq!(health["profile"], "desktop");
    assert_eq!(health["backend"]["backend"], "rules");

    let (status, body) = get(app_with(Arc::new(Broken)), "/health").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(json(&body)["status"], "degraded");
}

#[tokio::test]
async fn metrics_endpoint_depends_on_recorder() {
    let (status, _) = get(rules_app(), "/metrics").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let handle = PrometheusBuilder::new().build_recorder().handle();
    let state = AppState::new(
        Settings::for_profile(Profile::Server),
        Arc::new(RuleTransliterator::default()),
    )
    .with_metrics(handle);
    let (status, _) = get(create_router(state), "/metrics").await;
    assert_eq!(status, StatusCode::OK);
}
