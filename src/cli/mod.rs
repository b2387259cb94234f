pub mod commands;
pub mod output;
pub mod types;

pub use types::Cli;
