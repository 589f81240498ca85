//! namingng CLI tool.
//!
//! Usage:
//! ```bash
//! namingng check [OPTIONS] [PATHS]...
//! namingng validate-config
//! namingng list-rules
//! namingng init
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use namingng_core::Severity;
use namingng_rules::Preset;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod config_resolver;

/// Naming-convention and include-guard linter for C/C++ symbol dumps
#[derive(Parser)]
#[command(name = "namingng")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file (JSON, or TOML by extension)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check symbol dumps (`*.dump.json`) against the naming config
    Check {
        /// Dump files or directories to search (default: current directory)
        #[arg(default_value = ".")]
        paths: Vec<PathBuf>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,

        /// Exit with status 1 when a finding reaches this severity
        #[arg(long, default_value = "error")]
        fail_on: FailOn,

        /// Rule set to run
        #[arg(long, default_value = "all")]
        preset: PresetArg,
    },

    /// Validate the configuration without checking anything
    ValidateConfig,

    /// List available rules
    ListRules,

    /// Initialize configuration file
    Init {
        /// Overwrite existing config
        #[arg(long)]
        force: bool,
    },
}

/// Output format for check results.
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// `file:line:column: severity: message [id]` lines with a summary.
    #[default]
    Text,
    /// `[file:line] (severity) message` lines.
    Standalone,
    /// JSON output.
    Json,
}

/// Severity threshold for a failing exit status.
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum FailOn {
    /// Any finding fails.
    Style,
    /// Only error-class findings fail.
    Error,
}

impl From<FailOn> for Severity {
    fn from(value: FailOn) -> Self {
        match value {
            FailOn::Style => Severity::Style,
            FailOn::Error => Severity::Error,
        }
    }
}

/// Rule set selection.
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum PresetArg {
    /// Naming convention and include guard checks.
    All,
    /// Naming convention checks only.
    Naming,
}

impl From<PresetArg> for Preset {
    fn from(value: PresetArg) -> Self {
        match value {
            PresetArg::All => Preset::All,
            PresetArg::Naming => Preset::NamingOnly,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Check {
            paths,
            format,
            fail_on,
            preset,
        } => commands::check::run(
            &paths,
            format,
            fail_on.into(),
            preset.into(),
            cli.config.as_deref(),
        ),
        Commands::ValidateConfig => commands::validate_config::run(cli.config.as_deref()),
        Commands::ListRules => {
            commands::list_rules::run();
            Ok(())
        }
        Commands::Init { force } => commands::init::run(force),
    }
}
