//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::scan::OutputFormat;

/// shipcheck - Pre-deploy security posture checks.
#[derive(Debug, Parser)]
#[command(name = "shipcheck")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Path to scan config file (overrides <project>/.shipcheck.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log each rule as it runs
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Scan the project and report a verdict (default if no command specified)
    Scan(ScanArgs),

    /// List the rules in the order they run
    Rules,

    /// Resolve and validate the deployment stage configuration
    Stage(StageArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `scan` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ScanArgs {
    /// Report format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `stage` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct StageArgs {
    /// Stage to resolve (development, staging, production, testing);
    /// defaults to FLASK_ENV, then development
    #[arg(short, long, value_name = "STAGE")]
    pub stage: Option<String>,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
