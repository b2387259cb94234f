//! Supaseed CLI entry point.

use clap::Parser;
use std::process::ExitCode;

use supaseed::cli::commands::create_user;
use supaseed::cli::Cli;
use supaseed::infrastructure::logging::LoggerImpl;
use supaseed::ConfigLoader;

#[tokio::main]
async fn main() -> ExitCode {
    // Missing .env is fine; the variables may come from the real environment
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = ConfigLoader::load(cli.config.as_deref());
    let logging = config
        .as_ref()
        .map(|config| config.logging.clone())
        .unwrap_or_default();
    let _logger = match LoggerImpl::init(&logging) {
        Ok(logger) => Some(logger),
        Err(err) => {
            eprintln!("Failed to initialize logging: {err}");
            None
        }
    };

    let outcome = create_user::execute(config, cli.json).await;

    ExitCode::from(create_user::exit_status(&outcome, cli.fail_on_error))
}
