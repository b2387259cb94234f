//! Implementation of the default `supaseed` command.

use anyhow::Result;
use serde::Serialize;
use tracing::error;

use crate::cli::output::{output, progress, CommandOutput};
use crate::domain::models::config::Config;
use crate::infrastructure::supabase::SupabaseAdminClient;
use crate::services::test_user_service::{SeedOutcome, TestUserService};

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct SeedOutput {
    pub success: bool,
    pub user_id: Option<String>,
    pub email: Option<String>,
    pub error: Option<String>,
}

impl From<&SeedOutcome> for SeedOutput {
    fn from(outcome: &SeedOutcome) -> Self {
        match outcome {
            SeedOutcome::Created(user) => Self {
                success: true,
                user_id: Some(user.id.clone()),
                email: user.email.clone(),
                error: None,
            },
            SeedOutcome::NotCreated => Self {
                success: false,
                user_id: None,
                email: None,
                error: None,
            },
            SeedOutcome::Failed { error } => Self {
                success: false,
                user_id: None,
                email: None,
                error: Some(error.clone()),
            },
        }
    }
}

impl CommandOutput for SeedOutput {
    fn to_human(&self) -> String {
        if let Some(ref error) = self.error {
            return format!("❌ Error: {error}");
        }
        match self.user_id {
            Some(ref id) => {
                let email = self.email.as_deref().unwrap_or("None");
                format!(
                    "✅ Test user created with ID: {id}\nEmail: {email}\n\n\
                     Use this user ID in your backend: {id}"
                )
            }
            None => "❌ Failed to create user".to_string(),
        }
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Create the fixture user and print the result
///
/// Never fails: a config error, a client construction error and a remote
/// error all end up as [`SeedOutcome::Failed`].
pub async fn execute(config: Result<Config>, json_mode: bool) -> SeedOutcome {
    let outcome = match config {
        Ok(config) => seed(&config, json_mode).await,
        Err(err) => {
            error!("configuration failed: {err:#}");
            SeedOutcome::failed(&format!("{err:#}"))
        }
    };

    output(&SeedOutput::from(&outcome), json_mode);
    outcome
}

async fn seed(config: &Config, json_mode: bool) -> SeedOutcome {
    let client = match SupabaseAdminClient::new(&config.supabase) {
        Ok(client) => client,
        Err(err) => {
            error!("failed to build Supabase client: {err}");
            return SeedOutcome::failed(&err);
        }
    };
    progress("✅ Supabase client created successfully", json_mode);

    progress("Creating test user...", json_mode);
    TestUserService::new(client).create(&config.fixture).await
}

/// Process exit status for an outcome
///
/// Status 0 is kept for every outcome unless the caller asked for failures
/// to be visible.
pub const fn exit_status(outcome: &SeedOutcome, fail_on_error: bool) -> u8 {
    if fail_on_error && !outcome.is_created() {
        1
    } else {
        0
    }
}
