mod commands;
mod error;
mod shell;
mod util;

use anyhow::{Context as _, Result};
use clap::Parser;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

use crate::commands::Context;
use crate::error::{exit_code_for, report_error};
use rapport_config as config;
use rapport_store::{Store, StoreOptions};

#[derive(Debug, Parser)]
#[command(
    name = "rapport",
    version,
    about = "rapport contact manager",
    long_about = "Reads commands from stdin, one per line. State lives in memory and is gone when the session ends."
)]
struct Cli {
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    json: bool,
    #[arg(long, short)]
    verbose: bool,
    /// Start with empty collections instead of the sample records
    #[arg(long)]
    no_seed: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let verbose = cli.verbose;
    init_logging(verbose);
    match run(cli) {
        Ok(None) => ExitCode::SUCCESS,
        // Already reported by the shell when the command failed.
        Ok(Some(err)) => exit_code_for(&err),
        Err(err) => {
            report_error(&err, verbose);
            exit_code_for(&err)
        }
    }
}

fn run(cli: Cli) -> Result<Option<anyhow::Error>> {
    let Cli {
        config: config_path,
        json,
        verbose,
        no_seed,
    } = cli;

    let app_config = config::load(config_path.clone()).with_context(|| "load config")?;
    if verbose {
        match config::resolve_config_path(config_path) {
            Ok(path) => {
                if path.exists() {
                    debug!(path = %path.display(), "config resolved");
                } else {
                    debug!(path = %path.display(), "config missing, using defaults");
                }
            }
            Err(err) => {
                debug!(error = %err, "config unavailable");
            }
        }
    }

    let store = Store::with_options(StoreOptions {
        avatar_fallback: app_config.avatar_fallback_url.clone(),
        seed: app_config.seed_sample_data && !no_seed,
    });
    store.subscribe(|event| debug!(?event, "store changed"));

    let ctx = Context {
        store: &store,
        json,
        verbose,
        config: &app_config,
    };

    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    let summary = shell::run(&ctx, stdin.lock(), interactive)?;
    debug!(
        commands = summary.commands,
        failures = summary.failures,
        "session finished"
    );
    Ok(summary.last_error)
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
