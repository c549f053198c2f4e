mod cli;
mod config;
mod download;
mod error;
mod github;
mod install;
mod path;
mod platform;
mod prompt;
mod session;
mod types;
mod ui;


use anyhow::Result;
use clap::Parser;
use cli::Cli;
use config::InstallerSettings;
use prompt::LinePrompt;
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = setup_logging(&cli) {
        eprintln!("Could not set up logging: {}", e);
    }

    ui::banner();

    let settings = match InstallerSettings::load() {
        Ok(settings) => settings,
        Err(e) => {
            ui::error(&format!("Error getting home directory: {}", e));
            return ExitCode::FAILURE;
        }
    };

    let mut prompt = LinePrompt::stdio();
    match session::run(&settings, &mut prompt).await {
        Ok(outcome) => {
            tracing::debug!("Session finished: {:?}", outcome);
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::debug!("Session failed: {:?}", e);
            ui::error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

fn setup_logging(cli: &Cli) -> Result<()> {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_level()));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    Ok(())
}
