//! Hinglish Transliteration Server
//!
//! Serves the index page and the transliteration endpoints over HTTP.

pub mod http;
pub mod metrics;
pub mod state;

pub use http::create_router;
pub use metrics::install_recorder;
pub use state::AppState;

use hindi_xlit_config::Settings;
use thiserror::Error;

/// Server errors
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Transliteration failed: {0}")]
    Transliteration(#[from] hindi_xlit_core::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ServerError {
    /// Label for the error counter
    pub fn kind(&self) -> &'static str {
        match self {
            ServerError::InvalidRequest(_) => "invalid_request",
            ServerError::Transliteration(e) => e.kind(),
            ServerError::Internal(_) => "internal",
        }
    }
}

/// Every fault on the transliteration endpoints is a bare 500; clients never
/// see a typed error body.
impl From<ServerError> for axum::http::StatusCode {
    fn from(err: ServerError) -> Self {
        match err {
            ServerError::InvalidRequest(_) => axum::http::StatusCode::INTERNAL_SERVER_ERROR,
            ServerError::Transliteration(_) => axum::http::StatusCode::INTERNAL_SERVER_ERROR,
            ServerError::Internal(_) => axum::http::StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Default `EnvFilter` directives when `RUST_LOG` is unset.
///
/// `server.debug` raises the level to at least `debug`.
pub fn default_log_filter(config: &Settings) -> String {
    let configured = config.observability.log_level.to_ascii_lowercase();
    let level = if config.server.debug && configured != "trace" {
        "debug".to_string()
    } else {
        configured
    };
    format!("hindi_xlit={},tower_http={}", level, level)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use hindi_xlit_config::Profile;

    #[test]
    fn test_all_errors_are_500() {
        let errors = [
            ServerError::InvalidRequest("not json".to_string()),
            ServerError::Transliteration(hindi_xlit_core::Error::Backend("down".to_string())),
            ServerError::Internal("oops".to_string()),
        ];
        for err in errors {
            assert_eq!(StatusCode::from(err), StatusCode::INTERNAL_SERVER_ERROR);
        }
    }

    #[test]
    fn test_error_kind_follows_core_error() {
        let err = ServerError::from(hindi_xlit_core::Error::InputTooLong { len: 80, max: 64 });
        assert_eq!(err.kind(), "input_too_long");
    }

    #[test]
    fn test_log_filter_per_profile() {
        let server = Settings::for_profile(Profile::Server);
        assert_eq!(default_log_filter(&server), "hindi_xlit=debug,tower_http=debug");

        let desktop = Settings::for_profile(Profile::Desktop);
        assert_eq!(default_log_filter(&desktop), "hindi_xlit=info,tower_http=info");

        let mut verbose = Settings::for_profile(Profile::Server);
        verbose.observability.log_level = "trace".to_string();
        assert_eq!(default_log_filter(&verbose), "hindi_xlit=trace,tower_http=trace");
    }
}
