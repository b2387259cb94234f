//! Domain layer for Supaseed
//!
//! Configuration and user models, the admin client port and its errors.

pub mod errors;
pub mod models;
pub mod ports;

pub use errors::AdminApiError;
