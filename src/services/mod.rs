//! Service layer for Supaseed

pub mod test_user_service;

pub use test_user_service::{SeedOutcome, TestUserService};
