//! CLI type definitions
//!
//! This module contains the clap structure that defines the CLI interface.
//! With no flags the command behaves like the plain seeding script: human
//! output and exit status 0 whatever happened.

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "supaseed")]
#[command(
    about = "Create a pre-confirmed test user in a Supabase project",
    long_about = "Reads SUPABASE_URL and SUPABASE_SERVICE_ROLE_KEY (a .env file in the \
                  working directory is honored) and creates the fixture user through the \
                  auth admin API."
)]
#[command(version)]
pub struct Cli {
    /// Output in JSON format
    #[arg(short, long)]
    pub json: bool,

    /// Config file (defaults to .supaseed/config.yaml and .supaseed/local.yaml)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Exit with status 1 when no user was created
    #[arg(long)]
    pub fail_on_error: bool,
}
