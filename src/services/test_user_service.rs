//! The create-test-user operation.
//!
//! Everything that can go wrong, from building the client to the remote
//! call, collapses into [`SeedOutcome::Failed`] with a printable message.

use tracing::{error, info, instrument};

use crate::domain::errors::AdminApiError;
use crate::domain::models::config::FixtureUser;
use crate::domain::models::user::{CreateUserRequest, User};
use crate::domain::ports::AdminAuthClient;
use crate::infrastructure::logging::SecretScrubber;

/// What a single seeding attempt produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedOutcome {
    /// The platform created the account
    Created(User),
    /// The call succeeded but returned no user
    NotCreated,
    /// Any error, already stringified and scrubbed
    Failed { error: String },
}

impl SeedOutcome {
    /// Identifier of the created user, absent otherwise
    pub fn user_id(&self) -> Option<&str> {
        match self {
            Self::Created(user) => Some(user.id.as_str()),
            Self::NotCreated | Self::Failed { .. } => None,
        }
    }

    pub const fn is_created(&self) -> bool {
        matches!(self, Self::Created(_))
    }

    /// Convert an error into the generic failure outcome
    pub fn failed(err: &dyn std::fmt::Display) -> Self {
        Self::Failed {
            error: SecretScrubber::new().scrub_message(&err.to_string()),
        }
    }
}

/// Creates the fixture user through an [`AdminAuthClient`]
pub struct TestUserService<C> {
    client: C,
}

impl<C: AdminAuthClient> TestUserService<C> {
    pub const fn new(client: C) -> Self {
        Self { client }
    }

    /// Issue one create request for `fixture` and branch on the response
    #[instrument(skip(self, fixture), fields(email = %fixture.email))]
    pub async fn create(&self, fixture: &FixtureUser) -> SeedOutcome {
        let request = CreateUserRequest::from(fixture);

        match self.client.create_user(&request).await {
            Ok(response) => match response.user {
                Some(user) => {
                    info!(user_id = %user.id, "test user created");
                    SeedOutcome::Created(user)
                }
                None => SeedOutcome::NotCreated,
            },
            Err(err) => {
                log_failure(&err);
                SeedOutcome::failed(&err)
            }
        }
    }
}

fn log_failure(err: &AdminApiError) {
    error!(
        configuration = err.is_configuration(),
        remote = err.is_remote(),
        "create test user failed: {}",
        SecretScrubber::new().scrub_message(&err.to_string())
    );
}
