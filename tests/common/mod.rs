//! Common test utilities for integration tests
//!
//! Provides shared fixtures and helpers used across multiple integration
//! test files.

use assert_cmd::Command;
use std::path::Path;
use tempfile::TempDir;

use supaseed::SupabaseConfig;

/// Service role key used against mock servers
pub const SERVICE_KEY: &str = "test-service-role-key";

/// Create a temporary directory for test isolation
///
/// Returns a TempDir that will be cleaned up when dropped.
#[allow(dead_code)]
pub fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// Supabase settings pointing at `url` with [`SERVICE_KEY`]
#[allow(dead_code)]
pub fn supabase_config(url: &str) -> SupabaseConfig {
    SupabaseConfig {
        url: url.to_string(),
        service_role_key: SERVICE_KEY.to_string(),
        timeout_secs: 5,
    }
}

/// Build a `supaseed` invocation that runs in `cwd` with no inherited
/// Supabase or Supaseed settings
#[allow(dead_code)]
pub fn supaseed_command(cwd: &Path) -> Command {
    let mut command = assert_cmd::cargo_bin_cmd!("supaseed");
    command
        .current_dir(cwd)
        .env_remove("SUPABASE_URL")
        .env_remove("SUPABASE_SERVICE_ROLE_KEY")
        .env_remove("RUST_LOG");
    for (key, _) in std::env::vars() {
        if key.starts_with("SUPASEED_") {
            command.env_remove(key);
        }
    }
    command
}

/// Mock data generators
pub mod mock_data {
    use serde_json::json;

    /// GoTrue user object as returned by `POST /auth/v1/admin/users`
    #[allow(dead_code)]
    pub fn user_body(id: &str, email: &str) -> serde_json::Value {
        json!({
            "id": id,
            "aud": "authenticated",
            "role": "authenticated",
            "email": email,
            "email_confirmed_at": "2024-05-01T12:00:00.000000Z",
            "phone": "",
            "app_metadata": { "provider": "email", "providers": ["email"] },
            "user_metadata": {},
            "identities": [],
            "created_at": "2024-05-01T12:00:00.000000Z",
            "updated_at": "2024-05-01T12:00:00.000000Z",
            "is_anonymous": false
        })
    }

    /// Error body GoTrue sends for a duplicate email
    #[allow(dead_code)]
    pub fn email_exists_body() -> serde_json::Value {
        json!({
            "code": 422,
            "error_code": "email_exists",
            "msg": "A user with this email address has already been registered"
        })
    }
}
