use tasknotes::cli::Cli;
use tasknotes::commands;
use tasknotes::context::AppContext;
use tasknotes::error::TasknotesError;
use tasknotes::logger::{initialize as LoggerInitialize, level_for};

use client_core::credential_store::paths::detect_data_paths;

use std::process::ExitCode;

use clap::Parser;
use log::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logger FIRST
    let log_dir = match detect_data_paths() {
        Ok(paths) => paths.log_dir,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };
    if let Err(e) = LoggerInitialize(&log_dir, level_for(cli.verbose)) {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }

    info!("tasknotes {} starting", env!("CARGO_PKG_VERSION"));
    info!("Log directory: {}", log_dir.display());

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            if e.is_authorization() {
                error!("Session rejected by the backend; run `tasknotes login`");
            }
            e.exit_code()
        }
    }
}

async fn run(cli: Cli) -> Result<(), TasknotesError> {
    let context = AppContext::bootstrap(&cli)?;
    commands::run(cli.command, &context).await
}
