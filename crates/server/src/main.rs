//! Hinglish Transliteration Server Entry Point
//!
//! One binary for both deployments; `HINDI_XLIT_PROFILE` picks the defaults:
//! - `server`: 0.0.0.0:5000, debug logging
//! - `desktop`: 127.0.0.1:5001, for a local desktop shell

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};

use hindi_xlit_config::{constants::env, load_settings, Profile, Settings};
use hindi_xlit_engine::create_transliterator;
use hindi_xlit_server::{create_router, default_log_filter, install_recorder, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let profile = match Profile::from_env() {
        Ok(profile) => profile,
        Err(e) => {
            eprintln!("Warning: {}. Using the server profile.", e);
            Profile::default()
        }
    };

    // Priority: env vars > config/{env}.yaml > config/default.yaml > profile defaults
    let env_name = std::env::var(env::ENVIRONMENT).ok();
    let config = match load_settings(profile, env_name.as_deref()) {
        Ok(settings) => {
            // Tracing not yet initialized, use eprintln for early logging
            eprintln!(
                "Loaded configuration (profile: {}, env: {})",
                profile,
                env_name.as_deref().unwrap_or("default")
            );
            settings
        }
        Err(e) => {
            eprintln!("Warning: Failed to load config: {}. Using {} defaults.", e, profile);
            Settings::for_profile(profile)
        }
    };

    init_tracing(&config);
    for warning in config.warnings() {
        tracing::warn!("{}", warning);
    }

    tracing::info!("Starting hindi-xlit v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        profile = %config.profile,
        debug = config.server.debug,
        provider = ?config.transliteration.provider,
        max_candidates = config.transliteration.max_candidates,
        "Configuration loaded"
    );

    let transliterator = create_transliterator(&config.transliteration)?;
    let health = transliterator.health().await;
    if health.ready {
        tracing::info!(backend = %health.backend, "Transliteration backend ready");
    } else {
        tracing::warn!(
            backend = %health.backend,
            detail = health.detail.as_deref().unwrap_or(""),
            "Transliteration backend not ready, requests may fail"
        );
    }

    let mut state = AppState::new(config.clone(), transliterator);
    if config.observability.metrics_enabled {
        match install_recorder() {
            Ok(handle) => {
                tracing::info!("Prometheus metrics available at /metrics");
                state = state.with_metrics(handle);
            }
            Err(e) => tracing::warn!(error = %e, "Failed to install metrics recorder"),
        }
    }

    let app = create_router(state);

    let addr = config.server.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown...");
        }
    }
}

fn init_tracing(config: &Settings) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_log_filter(config).into());

    let subscriber = tracing_subscriber::registry().with(env_filter);
    let fmt_layer = if config.observability.log_json {
        tracing_subscriber::fmt::layer().json().boxed()
    } else {
        tracing_subscriber::fmt::layer().boxed()
    };
    subscriber.with(fmt_layer).init();
}
