//! Centralized defaults
//!
//! Single source of truth for ports, limits and environment variable names.

/// Listener defaults per deployment profile
pub mod ports {
    /// Public server profile
    pub const SERVER: u16 = 5000;

    /// Desktop profile. 5000 collides with the macOS AirPlay receiver.
    pub const DESKTOP: u16 = 5001;
}

pub mod hosts {
    pub const ALL_INTERFACES: &str = "0.0.0.0";
    pub const LOOPBACK: &str = "127.0.0.1";
}

/// Transliteration engine defaults
pub mod engine {
    /// Candidates requested from the backend per word
    pub const MAX_CANDIDATES: usize = 5;

    /// Hypotheses kept per step of the rule engine's beam search
    pub const BEAM_WIDTH: usize = 16;

    /// Longest accepted word, in grapheme clusters
    pub const MAX_WORD_LENGTH: usize = 64;

    /// Sidecar request timeout
    pub const SIDECAR_TIMEOUT_MS: u64 = 5_000;

    pub const SIDECAR_ENDPOINT: &str = "http://127.0.0.1:8765";
}

/// Environment variables read outside the layered config
pub mod env {
    /// Selects the deployment profile (`server` or `desktop`)
    pub const PROFILE: &str = "HINDI_XLIT_PROFILE";

    /// Selects `config/{env}.yaml`
    pub const ENVIRONMENT: &str = "HINDI_XLIT_ENV";

    /// Prefix for layered overrides, e.g. `HINDI_XLIT__SERVER__PORT`
    pub const PREFIX: &str = "HINDI_XLIT";
}
