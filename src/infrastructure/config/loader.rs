use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::domain::models::config::Config;

/// Project config file, relative to the working directory
pub const PROJECT_CONFIG: &str = ".supaseed/config.yaml";

/// Optional local overrides, relative to the working directory
pub const LOCAL_CONFIG: &str = ".supaseed/local.yaml";

/// Environment variable holding the project endpoint
pub const URL_ENV: &str = "SUPABASE_URL";

/// Environment variable holding the administrative secret
pub const SERVICE_ROLE_KEY_ENV: &str = "SUPABASE_SERVICE_ROLE_KEY";

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config file not found: {0}")]
    MissingConfigFile(PathBuf),

    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid log format: {0}. Must be one of: json, pretty")]
    InvalidLogFormat(String),

    #[error("Invalid timeout_secs: {0}. Must be at least 1")]
    InvalidTimeout(u64),

    #[error("Fixture email cannot be empty")]
    EmptyFixtureEmail,
}

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with hierarchical merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. `path` if given, otherwise .supaseed/config.yaml then .supaseed/local.yaml
    /// 3. Environment variables (SUPASEED_* prefix, `__` for nesting)
    /// 4. SUPABASE_URL and SUPABASE_SERVICE_ROLE_KEY
    ///
    /// Credentials are not checked here.
    pub fn load(path: Option<&Path>) -> Result<Config> {
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));

        figment = match path {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigError::MissingConfigFile(path.to_path_buf()).into());
                }
                figment.merge(Yaml::file(path))
            }
            None => figment
                .merge(Yaml::file(PROJECT_CONFIG))
                .merge(Yaml::file(LOCAL_CONFIG)),
        };

        figment = figment.merge(Env::prefixed("SUPASEED_").split("__"));

        let config: Config = merge_credentials(figment)
            .extract()
            .context("Failed to extract configuration from figment")?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate configuration after loading
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&config.logging.level.to_lowercase().as_str()) {
            return Err(ConfigError::InvalidLogLevel(config.logging.level.clone()));
        }

        let valid_log_formats = ["json", "pretty"];
        if !valid_log_formats.contains(&config.logging.format.as_str()) {
            return Err(ConfigError::InvalidLogFormat(config.logging.format.clone()));
        }

        if config.supabase.timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout(config.supabase.timeout_secs));
        }

        if config.fixture.email.trim().is_empty() {
            return Err(ConfigError::EmptyFixtureEmail);
        }

        Ok(())
    }
}

/// The two unprefixed variables, mapped onto `supabase.*`
///
/// Read as plain strings: figment's `Env` parses values, which would turn a
/// digits-only key into an integer.
fn merge_credentials(mut figment: Figment) -> Figment {
    for (var, key) in [
        (URL_ENV, "supabase.url"),
        (SERVICE_ROLE_KEY_ENV, "supabase.service_role_key"),
    ] {
        if let Ok(value) = std::env::var(var) {
            figment = figment.merge(Serialized::default(key, value));
        }
    }
    figment
}
