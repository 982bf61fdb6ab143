//! Configuration for the registration flow.

use anyhow::{Context, Result};
use secrecy::SecretString;
use serde::Deserialize;
use std::time::Duration;

/// Registration configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// ULP backend configuration
    #[serde(default)]
    pub ulp: UlpConfig,

    /// Sign-up payload constants
    #[serde(default)]
    pub registration: RegistrationConfig,

    /// Logging configuration
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UlpConfig {
    /// ULP backend-for-frontend base URL
    #[serde(default = "default_ulp_base_url")]
    pub base_url: String,

    /// Request timeout
    #[serde(default = "default_timeout", with = "humantime_serde")]
    pub timeout: Duration,

    /// Bearer token of the signed-in SSO session
    #[serde(default)]
    pub auth_token: Option<SecretString>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RegistrationConfig {
    /// Region code attached to every school record
    #[serde(default = "default_state_code")]
    pub state_code: u32,

    /// Account channel reported as `digiacc`
    #[serde(default = "default_digiacc")]
    pub digiacc: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub level: String,
}

// Default implementations
impl Default for UlpConfig {
    fn default() -> Self {
        Self {
            base_url: default_ulp_base_url(),
            timeout: default_timeout(),
            auth_token: None,
        }
    }
}

impl Default for RegistrationConfig {
    fn default() -> Self {
        Self {
            state_code: default_state_code(),
            digiacc: default_digiacc(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

// Default value functions
fn default_ulp_base_url() -> String {
    "https://ulp.uniteframework.io/ulp-bff".into()
}

fn default_timeout() -> Duration {
    Duration::from_secs(30)
}

fn default_state_code() -> u32 {
    16
}

fn default_digiacc() -> String {
    "portal".into()
}

fn default_log_level() -> String {
    "info".into()
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .separator("__")
                    .try_parsing(false),
            )
            .build()
            .context("Failed to build configuration")?;

        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }
}
