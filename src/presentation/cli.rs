//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! Global flags (--json, --color, --verbose, --config) are inherited by all
//! subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// pakstage - staging-board reconciler for dynamic content paks
#[derive(Parser, Debug)]
#[command(name = "pakstage")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format for CI (NDJSON on stdout)
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Configuration file (defaults to ./pakstage.toml, then the user config)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Reconcile a package listing and print the three lanes
    Board {
        /// Package listing JSON (`-` for stdin)
        input: PathBuf,
    },

    /// Report rejected records and cross-lane splits (exits non-zero on issues)
    Check {
        /// Package listing JSON (`-` for stdin)
        input: PathBuf,

        /// Fail on cross-lane splits too (CI mode)
        #[arg(long)]
        strict_warnings: bool,
    },
}
