/// End-to-end tests for the `supaseed` command
///
/// The binary is run against a mock Supabase server with an isolated
/// environment and working directory. Covers the printed output, the
/// `.env` and config file sources, JSON mode and exit status.
mod common;

use common::mock_data::{email_exists_body, user_body};
use common::{supabase_config, supaseed_command, temp_dir, SERVICE_KEY};
use mockito::{Matcher, Server};
use predicates::prelude::*;
use serde_json::json;
use std::fs;
use supaseed::cli::commands::create_user::{execute, exit_status};
use supaseed::{Config, SeedOutcome};

const USER_ID: &str = "1b4e28ba-2fa1-11d2-883f-0016d3cca427";

/// Extension trait to assert a run exited 0 without warnings on stderr.
trait AssertExt {
    fn success_without_warnings(self) -> Self;
}

impl AssertExt for assert_cmd::assert::Assert {
    fn success_without_warnings(self) -> Self {
        self.success()
            .stderr(predicates::str::contains("WARN").not())
    }
}

#[test]
fn test_binary_creates_user() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", "/auth/v1/admin/users")
        .match_header("apikey", SERVICE_KEY)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(user_body(USER_ID, "test@example.com").to_string())
        .expect(1)
        .create();

    let dir = temp_dir();
    supaseed_command(dir.path())
        .env("SUPABASE_URL", server.url())
        .env("SUPABASE_SERVICE_ROLE_KEY", SERVICE_KEY)
        .assert()
        .success_without_warnings()
        .stdout(predicate::eq(format!(
            "✅ Supabase client created successfully\n\
             Creating test user...\n\
             ✅ Test user created with ID: {USER_ID}\n\
             Email: test@example.com\n\n\
             Use this user ID in your backend: {USER_ID}\n"
        )));

    mock.assert();
}

#[test]
fn test_binary_reads_dotenv_file() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", "/auth/v1/admin/users")
        .match_header("authorization", format!("Bearer {SERVICE_KEY}").as_str())
        .with_status(200)
        .with_body(user_body(USER_ID, "test@example.com").to_string())
        .create();

    let dir = temp_dir();
    fs::write(
        dir.path().join(".env"),
        format!(
            "SUPABASE_URL={}\nSUPABASE_SERVICE_ROLE_KEY={SERVICE_KEY}\n",
            server.url()
        ),
    )
    .unwrap();

    supaseed_command(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(USER_ID));
    mock.assert();
}

#[test]
fn test_binary_uses_fixture_from_config_file() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", "/auth/v1/admin/users")
        .match_body(Matcher::PartialJson(json!({ "email": "qa@example.com" })))
        .with_status(200)
        .with_body(user_body(USER_ID, "qa@example.com").to_string())
        .create();

    let dir = temp_dir();
    fs::create_dir(dir.path().join(".supaseed")).unwrap();
    fs::write(
        dir.path().join(".supaseed/config.yaml"),
        "fixture:\n  email: qa@example.com\n",
    )
    .unwrap();

    supaseed_command(dir.path())
        .env("SUPABASE_URL", server.url())
        .env("SUPABASE_SERVICE_ROLE_KEY", SERVICE_KEY)
        .assert()
        .success()
        .stdout(predicate::str::contains("Email: qa@example.com"));
    mock.assert();
}

#[test]
fn test_binary_local_config_overrides_project_config() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", "/auth/v1/admin/users")
        .match_body(Matcher::PartialJson(json!({ "email": "local@example.com" })))
        .with_status(200)
        .with_body(user_body(USER_ID, "local@example.com").to_string())
        .expect(1)
        .create();

    let dir = temp_dir();
    fs::create_dir(dir.path().join(".supaseed")).unwrap();
    fs::write(
        dir.path().join(".supaseed/config.yaml"),
        "fixture:\n  email: project@example.com\n  password: projectpassword\n",
    )
    .unwrap();
    fs::write(
        dir.path().join(".supaseed/local.yaml"),
        "fixture:\n  email: local@example.com\n",
    )
    .unwrap();

    supaseed_command(dir.path())
        .env("SUPABASE_URL", server.url())
        .env("SUPABASE_SERVICE_ROLE_KEY", SERVICE_KEY)
        .assert()
        .success()
        .stdout(predicate::str::contains("Email: local@example.com"))
        .stdout(predicate::str::contains("project@example.com").not());
    mock.assert();
}

#[test]
fn test_binary_missing_credentials_exits_zero() {
    let dir = temp_dir();
    supaseed_command(dir.path())
        .assert()
        .success()
        .stdout(predicate::eq("❌ Error: supabase_url is required\n"));
}

#[test]
fn test_binary_missing_key_only() {
    let dir = temp_dir();
    supaseed_command(dir.path())
        .env("SUPABASE_URL", "https://demo.supabase.co")
        .assert()
        .success()
        .stdout(predicate::eq("❌ Error: supabase_key is required\n"));
}

#[test]
fn test_binary_fail_on_error_sets_status() {
    let dir = temp_dir();
    supaseed_command(dir.path())
        .arg("--fail-on-error")
        .assert()
        .code(1)
        .stdout(predicate::str::starts_with("❌ Error:"));
}

#[test]
fn test_binary_unreachable_endpoint() {
    let dir = temp_dir();
    supaseed_command(dir.path())
        .env("SUPABASE_URL", "http://127.0.0.1:1")
        .env("SUPABASE_SERVICE_ROLE_KEY", SERVICE_KEY)
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "✅ Supabase client created successfully\nCreating test user...\n",
        ))
        .stdout(predicate::str::contains("❌ Error: Network error:"))
        .stdout(predicate::str::contains("Use this user ID").not());
}

#[test]
fn test_binary_json_output_on_duplicate() {
    let mut server = Server::new();
    let _mock = server
        .mock("POST", "/auth/v1/admin/users")
        .with_status(422)
        .with_body(email_exists_body().to_string())
        .create();

    let dir = temp_dir();
    let assert = supaseed_command(dir.path())
        .arg("--json")
        .env("SUPABASE_URL", server.url())
        .env("SUPABASE_SERVICE_ROLE_KEY", SERVICE_KEY)
        .assert()
        .success();

    let report: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout)
        .expect("stdout should be one JSON document");
    assert_eq!(report["success"], false);
    assert!(report["user_id"].is_null());
    assert!(report["error"]
        .as_str()
        .unwrap()
        .contains("already been registered"));
}

#[test]
fn test_binary_logs_remote_failure_once() {
    let mut server = Server::new();
    let _mock = server
        .mock("POST", "/auth/v1/admin/users")
        .with_status(422)
        .with_body(
            json!({
                "error_code": "email_exists",
                "msg": "A user with this email address has already been registered",
                "password": "leaked-password"
            })
            .to_string(),
        )
        .create();

    let dir = temp_dir();
    let assert = supaseed_command(dir.path())
        .env("SUPABASE_URL", server.url())
        .env("SUPABASE_SERVICE_ROLE_KEY", SERVICE_KEY)
        .env("SUPASEED_LOGGING__FORMAT", "json")
        .assert()
        .success_without_warnings()
        .stdout(predicate::str::contains("❌ Error:"));

    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).into_owned();
    assert_eq!(stderr.matches("\"level\":\"ERROR\"").count(), 1, "{stderr}");
    assert!(!stderr.contains(SERVICE_KEY));
    assert!(!stderr.contains("leaked-password"));
}

#[tokio::test]
async fn test_execute_against_mock() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/auth/v1/admin/users")
        .with_status(200)
        .with_body(user_body(USER_ID, "test@example.com").to_string())
        .create_async()
        .await;

    let config = Config {
        supabase: supabase_config(&server.url()),
        ..Config::default()
    };
    let outcome = execute(Ok(config), true).await;

    assert_eq!(outcome.user_id(), Some(USER_ID));
    assert_eq!(exit_status(&outcome, true), 0);
}

#[tokio::test]
async fn test_execute_bad_key_is_absent() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/auth/v1/admin/users")
        .with_status(401)
        .with_body(json!({ "message": "Invalid API key" }).to_string())
        .create_async()
        .await;

    let config = Config {
        supabase: supabase_config(&server.url()),
        ..Config::default()
    };
    let outcome = execute(Ok(config), true).await;

    assert_eq!(outcome.user_id(), None);
    assert_eq!(
        outcome,
        SeedOutcome::Failed {
            error: "Unauthorized: Invalid API key".to_string()
        }
    );
    assert_eq!(exit_status(&outcome, false), 0);
}
