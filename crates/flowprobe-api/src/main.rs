//! flowprobe CLI entry point.
//!
//! Binary name: `flowprobe`
//!
//! Parses CLI arguments, sets up logging, loads configuration, then
//! dispatches to the command handler.

mod cli;
mod state;

use std::process::ExitCode;

use clap::Parser;
use clap_complete::generate;

use cli::{Cli, Commands};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let filter = flowprobe_observe::tracing_setup::verbosity_filter(cli.verbose, cli.quiet);
    if let Err(e) = flowprobe_observe::tracing_setup::init_tracing(filter, cli.otel) {
        eprintln!("Warning: failed to initialize logging: {e}");
    }

    let code = run(cli).await;
    flowprobe_observe::tracing_setup::shutdown_tracing();
    code
}

async fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let Cli {
        json,
        quiet,
        config,
        no_keychain,
        command,
        ..
    } = cli;
    let init_state = || AppState::init(config.as_deref(), !no_keychain);

    match command {
        // Neither completions nor payload export need configuration
        Commands::Completions { shell } => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            generate(shell, &mut cmd, "flowprobe", &mut std::io::stdout());
            Ok(ExitCode::SUCCESS)
        }

        Commands::Payload(args) => {
            cli::payload::export_payload(args, quiet || json).await?;
            Ok(ExitCode::SUCCESS)
        }

        Commands::Probe(args) => {
            let state = init_state().await?;
            cli::probe::run_probe(&state, args, json, quiet).await
        }

        Commands::Secret { action } => {
            let state = init_state().await?;
            cli::secret::handle_secret(&state, action, json).await?;
            Ok(ExitCode::SUCCESS)
        }

        Commands::Config => {
            let state = init_state().await?;
            cli::config::show_config(&state, json)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn payload_runs_without_configuration() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("pipeline.yaml");
        let cli = Cli::try_parse_from([
            "flowprobe",
            "--config",
            "/nonexistent/flowprobe.toml",
            "payload",
            "--format",
            "yaml",
            "-o",
            out.to_str().unwrap(),
        ])
        .unwrap();

        let code = run(cli).await.unwrap();
        assert_eq!(code, ExitCode::SUCCESS);
        assert!(out.exists());
    }

    #[tokio::test]
    async fn bad_config_path_is_an_error_not_a_panic() {
        let cli = Cli::try_parse_from([
            "flowprobe",
            "--config",
            "/nonexistent/flowprobe.toml",
            "--no-keychain",
            "config",
        ])
        .unwrap();

        let err = run(cli).await.unwrap_err();
        assert!(err.to_string().contains("/nonexistent/flowprobe.toml"));
    }
}
