//! Infrastructure layer
//!
//! Adapters for configuration, logging and the Supabase admin API.

pub mod config;
pub mod logging;
pub mod supabase;
