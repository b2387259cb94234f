pub mod config;
pub mod user;

pub use config::{Config, FixtureUser, LoggingConfig, RotationPolicy, SupabaseConfig};
pub use user::{CreateUserRequest, CreateUserResponse, User};
