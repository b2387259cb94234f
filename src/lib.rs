//! Supaseed - Supabase test user seeding
//!
//! Creates a pre-confirmed test account through the Supabase auth admin API
//! using the project URL and service role key from the environment.
//!
//! # Architecture
//!
//! The crate keeps the usual layering:
//!
//! - **Domain Layer** (`domain`): configuration, user models, the admin client port
//! - **Service Layer** (`services`): the create-test-user operation
//! - **Infrastructure Layer** (`infrastructure`): figment config, tracing, HTTP client
//! - **CLI Layer** (`cli`): command-line interface
//!
//! # Example
//!
//! ```no_run
//! use supaseed::{ConfigLoader, SupabaseAdminClient, TestUserService};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = ConfigLoader::load(None)?;
//! let client = SupabaseAdminClient::new(&config.supabase)?;
//! let outcome = TestUserService::new(client).create(&config.fixture).await;
//! println!("{:?}", outcome.user_id());
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::errors::AdminApiError;
pub use domain::models::{
    Config, CreateUserRequest, CreateUserResponse, FixtureUser, LoggingConfig, SupabaseConfig,
    User,
};
pub use domain::ports::AdminAuthClient;
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use infrastructure::supabase::SupabaseAdminClient;
pub use services::{SeedOutcome, TestUserService};
