use anyhow::Result;
use contact_cadence::config::Config;
use contact_cadence::notify::gmail::GmailClient;
use contact_cadence::sheets::rest::SheetsClient;
use contact_cadence::{RunOutcome, SelectionEngine, SelectionError};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

const CONFIG_PATH_VAR: &str = "CONTACT_CADENCE_CONFIG";

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("contact_cadence=info")),
        )
        .init();

    let dry_run = std::env::args().any(|arg| arg == "--dry-run");

    // Every failure ends the run; the scheduler fires again next week.
    match run(dry_run).await {
        Ok(outcome) => {
            tracing::info!(outcome = ?outcome, "selection run finished");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("Failed with error {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(dry_run: bool) -> Result<RunOutcome> {
    let config_path = std::env::var(CONFIG_PATH_VAR)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("config.toml"));
    let config = Config::load(&config_path)
        .map_err(|e| SelectionError::Configuration(format!("{:#}", e)))?;

    // Load saved keys from .env (real env vars take precedence)
    Config::load_env_file();
    let token = Config::access_token()?;

    let timeout = Duration::from_millis(config.request_timeout_ms);
    let store = SheetsClient::new(
        &config.sheets.api_base,
        &config.sheets.spreadsheet_id,
        token.clone(),
        timeout,
    )?;
    let notifier = GmailClient::new(&config.mail.api_base, token, timeout)?;

    if dry_run {
        tracing::info!("** DRY RUN ** sheet and mailbox will not be touched");
    }

    let engine = SelectionEngine::new(config, store, notifier)?.with_dry_run(dry_run);
    Ok(engine.run().await?)
}
