//! Auth user records as exchanged with the admin API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::config::FixtureUser;

/// Body of `POST /auth/v1/admin/users`
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateUserRequest {
    pub email: String,
    pub password: String,
    pub email_confirm: bool,
}

impl From<&FixtureUser> for CreateUserRequest {
    fn from(fixture: &FixtureUser) -> Self {
        Self {
            email: fixture.email.clone(),
            password: fixture.password.clone(),
            email_confirm: fixture.email_confirm,
        }
    }
}

impl std::fmt::Debug for CreateUserRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CreateUserRequest")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .field("email_confirm", &self.email_confirm)
            .finish()
    }
}

/// A user owned by the remote auth service.
///
/// `id` is opaque and assigned by the platform. Only `id` and `email` are
/// relied upon; the rest is kept for logging.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub aud: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub email_confirmed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Result of a successful create call.
///
/// The platform answers either with the user object itself or with a
/// `{ "user": ... }` envelope; anything without a non-empty user id is
/// treated as "no user".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateUserResponse {
    pub user: Option<User>,
}

impl CreateUserResponse {
    pub fn from_body(body: serde_json::Value) -> Result<Self, serde_json::Error> {
        let candidate = match body {
            serde_json::Value::Object(mut map) => match map.remove("user") {
                Some(inner) if inner.is_object() => inner,
                Some(_) => return Ok(Self::default()),
                None => serde_json::Value::Object(map),
            },
            _ => return Ok(Self::default()),
        };

        let has_id = candidate
            .get("id")
            .and_then(serde_json::Value::as_str)
            .is_some_and(|id| !id.trim().is_empty());
        if !has_id {
            return Ok(Self::default());
        }

        Ok(Self {
            user: Some(serde_json::from_value(candidate)?),
        })
    }
}
