//! pakstage CLI - staging-board reconciler for dynamic content paks
//!
//! Usage: pakstage [--json] [--color <WHEN>] [-v...] [--config <FILE>] <COMMAND>
//!
//! Commands:
//!   board   Reconcile a package listing and print the three lanes
//!   check   Report rejected records and cross-lane splits

mod commands;
mod ui;

use std::process::ExitCode;

use anyhow::{anyhow, Result};
use clap::Parser;
use pakstage::config::Config;
use pakstage::presentation::{Cli, Commands};

use crate::ui::context::UiContext;

/// Exit status for errors that stop a command before it reports
const EXIT_FATAL: u8 = 2;

/// Stack for the command thread. Board serialization nests once per
/// hierarchy level, so long parent chains need far more than the default.
const WORKER_STACK_SIZE: usize = 512 * 1024 * 1024;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let json = cli.json;

    match run_on_worker(cli) {
        Ok(code) => code,
        Err(err) => {
            ui::error::print_error(&err, json);
            ExitCode::from(EXIT_FATAL)
        }
    }
}

fn run_on_worker(cli: Cli) -> Result<ExitCode> {
    let worker = std::thread::Builder::new()
        .name("pakstage".to_string())
        .stack_size(WORKER_STACK_SIZE)
        .spawn(move || run(cli))?;

    worker
        .join()
        .unwrap_or_else(|_| Err(anyhow!("pakstage worker thread panicked")))
}

fn run(cli: Cli) -> Result<ExitCode> {
    let working_dir = std::env::current_dir()?;
    let (config, warnings) = Config::discover(cli.config.as_deref(), &working_dir)?;
    if !cli.json {
        ui::output::print_config_warnings(&warnings);
    }

    let ui = UiContext::new(cli.json, cli.verbose, cli.color, &config);

    match cli.command {
        Commands::Board { input } => commands::board::cmd_board(&input, &config, &ui),
        Commands::Check {
            input,
            strict_warnings,
        } => commands::check::cmd_check(&input, strict_warnings, &config, &ui),
    }
}
