//! Main settings module

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

use crate::constants::{env, hosts, ports};
use crate::{ConfigError, TransliterationConfig};

/// Deployment profile
///
/// Both profiles run the same handler; they differ only in listener and
/// logging defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    /// Public server: all interfaces, port 5000, debug on
    #[default]
    Server,
    /// Embedded behind a local desktop shell: loopback, port 5001, debug off
    Desktop,
}

impl Profile {
    /// Read the profile from `HINDI_XLIT_PROFILE`, defaulting to `server`
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var(env::PROFILE) {
            Ok(value) if !value.trim().is_empty() => value.parse(),
            _ => Ok(Self::default()),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Server => "server",
            Self::Desktop => "desktop",
        }
    }
}

impl FromStr for Profile {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "server" | "web" => Ok(Self::Server),
            "desktop" | "electron" | "local" => Ok(Self::Desktop),
            other => Err(ConfigError::InvalidValue {
                field: env::PROFILE.to_string(),
                message: format!("Unknown profile '{}', expected 'server' or 'desktop'", other),
            }),
        }
    }
}

impl std::fmt::Display for Profile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Main application settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Deployment profile the defaults were taken from
    #[serde(default)]
    pub profile: Profile,

    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Transliteration backend configuration
    #[serde(default)]
    pub transliteration: TransliterationConfig,

    /// Observability configuration
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

impl Settings {
    /// Defaults for a deployment profile
    pub fn for_profile(profile: Profile) -> Self {
        Self {
            profile,
            server: ServerConfig::for_profile(profile),
            transliteration: TransliterationConfig::default(),
            observability: ObservabilityConfig::for_profile(profile),
        }
    }

    /// Validate settings
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_server()?;
        self.validate_observability()?;
        self.transliteration.validate()?;
        Ok(())
    }

    fn validate_server(&self) -> Result<(), ConfigError> {
        let server = &self.server;

        if server.port == 0 {
            return Err(ConfigError::InvalidValue {
                field: "server.port".to_string(),
                message: "Port cannot be 0".to_string(),
            });
        }

        if server.host.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "server.host".to_string(),
                message: "Host cannot be empty".to_string(),
            });
        }

        Ok(())
    }

    /// Non-fatal issues to report once logging is up
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        if self.profile == Profile::Desktop && !self.server.is_loopback() {
            warnings.push(format!(
                "Desktop profile is bound to non-loopback address {}",
                self.server.host
            ));
        }
        warnings.extend(self.transliteration.warnings());
        warnings
    }

    fn validate_observability(&self) -> Result<(), ConfigError> {
        const LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

        let level = self.observability.log_level.to_ascii_lowercase();
        if !LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "observability.log_level".to_string(),
                message: format!(
                    "Unknown level '{}', expected one of {}",
                    self.observability.log_level,
                    LEVELS.join(", ")
                ),
            });
        }

        Ok(())
    }
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address
    #[serde(default = "default_host")]
    pub host: String,

    /// Bind port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Verbose logging and request tracing
    #[serde(default)]
    pub debug: bool,

    /// Restrict cross-origin requests to `cors_origins`
    #[serde(default)]
    pub cors_enabled: bool,

    /// CORS allowed origins
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    hosts::ALL_INTERFACES.to_string()
}

fn default_port() -> u16 {
    ports::SERVER
}

impl ServerConfig {
    pub fn for_profile(profile: Profile) -> Self {
        match profile {
            Profile::Server => Self {
                host: hosts::ALL_INTERFACES.to_string(),
                port: ports::SERVER,
                debug: true,
                ..Default::default()
            },
            Profile::Desktop => Self {
                host: hosts::LOOPBACK.to_string(),
                port: ports::DESKTOP,
                debug: false,
                ..Default::default()
            },
        }
    }

    /// `host:port`
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn is_loopback(&self) -> bool {
        match self.host.parse::<std::net::IpAddr>() {
            Ok(ip) => ip.is_loopback(),
            Err(_) => self.host.eq_ignore_ascii_case("localhost"),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            debug: false,
            cors_enabled: false,
            cors_origins: Vec::new(),
        }
    }
}

/// Observability configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Enable JSON logging
    #[serde(default)]
    pub log_json: bool,

    /// Expose Prometheus metrics on /metrics
    #[serde(default = "default_true")]
    pub metrics_enabled: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

impl ObservabilityConfig {
    pub fn for_profile(profile: Profile) -> Self {
        let log_level = match profile {
            Profile::Server => "debug",
            Profile::Desktop => "info",
        };
        Self {
            log_level: log_level.to_string(),
            ..Default::default()
        }
    }
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_json: false,
            metrics_enabled: true,
        }
    }
}

/// Load settings from `config/` and environment
///
/// Priority (highest to lowest):
/// 1. Environment variables (HINDI_XLIT__ prefix, `__` separator)
/// 2. config/{env}.yaml (if env specified)
/// 3. config/default.yaml
/// 4. Profile defaults
pub fn load_settings(profile: Profile, env_name: Option<&str>) -> Result<Settings, ConfigError> {
    load_settings_from(Path::new("config"), profile, env_name)
}

/// Load settings with an explicit config directory
pub fn load_settings_from(
    config_dir: &Path,
    profile: Profile,
    env_name: Option<&str>,
) -> Result<Settings, ConfigError> {
    let defaults = Settings::for_profile(profile);

    let mut builder = Config::builder()
        .set_default("profile", profile.as_str())?
        .set_default("server.host", defaults.server.host.as_str())?
        .set_default("server.port", i64::from(defaults.server.port))?
        .set_default("server.debug", defaults.server.debug)?
        .set_default(
            "observability.log_level",
            defaults.observability.log_level.as_str(),
        )?;

    // Load default config
    let default_file = config_dir.join("default");
    builder = builder.add_source(File::with_name(&default_file.to_string_lossy()).required(false));

    // Load environment-specific config
    if let Some(name) = env_name {
        let env_file = config_dir.join(name);
        if !has_config_file(&env_file) {
            return Err(ConfigError::FileNotFound(env_file.display().to_string()));
        }
        builder = builder.add_source(File::with_name(&env_file.to_string_lossy()));
    }

    // Load from environment variables
    builder = builder.add_source(
        Environment::with_prefix(env::PREFIX)
            .separator("__")
            .list_separator(",")
            .with_list_parse_key("server.cors_origins")
            .try_parsing(true),
    );

    let config = builder.build()?;
    let settings: Settings = config.try_deserialize()?;

    // Validate
    settings.validate()?;

    Ok(settings)
}

fn has_config_file(stem: &Path) -> bool {
    ["yaml", "yml", "toml", "json"]
        .iter()
        .any(|ext| stem.with_extension(ext).is_file())
}
