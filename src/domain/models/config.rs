use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure for Supaseed
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// Supabase project endpoint and administrative credentials
    #[serde(default)]
    pub supabase: SupabaseConfig,

    /// The user account to create
    #[serde(default)]
    pub fixture: FixtureUser,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Supabase connection settings
///
/// The credentials are deliberately left unchecked here; an empty value is
/// reported when the admin client is constructed.
#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SupabaseConfig {
    /// Project URL, e.g. `https://xyzcompany.supabase.co`
    #[serde(default)]
    pub url: String,

    /// Service role key (administrative secret)
    #[serde(default)]
    pub service_role_key: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

const fn default_timeout_secs() -> u64 {
    30
}

impl Default for SupabaseConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            service_role_key: String::new(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl std::fmt::Debug for SupabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SupabaseConfig")
            .field("url", &self.url)
            .field(
                "service_role_key",
                &if self.service_role_key.is_empty() {
                    "<unset>"
                } else {
                    "[REDACTED]"
                },
            )
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// Test user created by the seed command
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct FixtureUser {
    /// Account email
    #[serde(default = "default_fixture_email")]
    pub email: String,

    /// Account password
    #[serde(default = "default_fixture_password")]
    pub password: String,

    /// Mark the email as already confirmed
    #[serde(default = "default_email_confirm")]
    pub email_confirm: bool,
}

fn default_fixture_email() -> String {
    "test@example.com".to_string()
}

fn default_fixture_password() -> String {
    "testpassword123".to_string()
}

const fn default_email_confirm() -> bool {
    true
}

impl Default for FixtureUser {
    fn default() -> Self {
        Self {
            email: default_fixture_email(),
            password: default_fixture_password(),
            email_confirm: default_email_confirm(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: json or pretty
    #[serde(default = "default_log_format")]
    pub format: String,

    /// Directory for log files (stderr only when unset)
    #[serde(default)]
    pub log_dir: Option<PathBuf>,

    /// File rotation policy, used only with `log_dir`
    #[serde(default)]
    pub rotation: RotationPolicy,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            log_dir: None,
            rotation: RotationPolicy::default(),
        }
    }
}

/// Log file rotation policy
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RotationPolicy {
    #[default]
    Daily,
    Hourly,
    Never,
}
