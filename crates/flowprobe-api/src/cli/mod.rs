//! CLI command definitions for the `flowprobe` binary.
//!
//! Uses clap derive macros for argument parsing. Each subcommand lives in
//! its own module with a handler taking the shared [`AppState`](crate::state::AppState).

pub mod config;
pub mod payload;
pub mod probe;
pub mod secret;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Check that a workflow-automation container can reach its platform API.
#[derive(Parser)]
#[command(name = "flowprobe", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except the outcome and errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed logs on stderr (-v for verbose, -vv for trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Export tracing spans through OpenTelemetry (stdout exporter).
    #[arg(long, global = true)]
    pub otel: bool,

    /// Read configuration from this file instead of ~/.flowprobe/config.toml.
    #[arg(long, global = true, env = "FLOWPROBE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Do not consult the OS keychain for secrets.
    #[arg(long, global = true, env = "FLOWPROBE_NO_KEYCHAIN")]
    pub no_keychain: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Probe API connectivity from inside the configured container.
    Probe(probe::ProbeArgs),

    /// Print or save the content-pipeline workflow payload.
    Payload(payload::PayloadArgs),

    /// Manage the platform API key.
    Secret {
        #[command(subcommand)]
        action: secret::SecretCommand,
    },

    /// Show the effective configuration.
    Config,

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}
