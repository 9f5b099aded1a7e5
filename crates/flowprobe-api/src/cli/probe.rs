//! `flowprobe probe` -- run the container connectivity check.

use std::fmt::Write as _;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::Result;
use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use flowprobe_core::probe::ProbeInvocation;
use flowprobe_core::report::{
    self, ADJUSTMENT_LINE, CONFIGURED_LINES, ERROR_PREFIX, TIMEOUT_LINE,
};
use flowprobe_types::config::ProbeConfig;
use flowprobe_types::probe::{ProbeOutcome, ProbeReport};

use crate::state::AppState;

#[derive(Args, Debug)]
pub struct ProbeArgs {
    /// Container to exec into (overrides config).
    #[arg(long, env = "FLOWPROBE_CONTAINER")]
    pub container: Option<String>,

    /// Timeout in seconds for the whole runtime invocation (overrides config).
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Container runtime binary (overrides config).
    #[arg(long, env = "FLOWPROBE_RUNTIME")]
    pub runtime: Option<String>,

    /// Print the command that would run, without running it.
    #[arg(long)]
    pub dry_run: bool,

    /// Exit with status 1 unless the probe confirms access.
    #[arg(long)]
    pub strict: bool,
}

/// Apply CLI overrides on top of the loaded configuration.
pub fn effective_config(base: &ProbeConfig, args: &ProbeArgs) -> ProbeConfig {
    let mut config = base.clone();
    if let Some(container) = &args.container {
        config.container = container.clone();
    }
    if let Some(timeout) = args.timeout {
        config.timeout_secs = timeout;
    }
    if let Some(runtime) = &args.runtime {
        config.runtime = runtime.clone();
    }
    config
}

/// Run the probe and print its report.
///
/// Always succeeds unless `--strict` is set and the outcome is not
/// "configured".
pub async fn run_probe(state: &AppState, args: ProbeArgs, json: bool, quiet: bool) -> Result<ExitCode> {
    let config = effective_config(&state.config.probe, &args);

    if args.dry_run {
        print!("{}", dry_run_text(&config, json)?);
        return Ok(ExitCode::SUCCESS);
    }

    let spinner = (!json && !quiet && console::Term::stderr().is_term()).then(|| {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::with_template("  {spinner} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_message(format!("Probing {} from '{}'...", config.host, config.container));
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    });

    let report = state.probe_service().run(&config).await;

    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if quiet {
        for line in report::outcome_lines(&report.outcome) {
            println!("{}", styled(&line));
        }
    } else {
        print_report(&report);
    }

    Ok(exit_code(&report.outcome, args.strict))
}

/// Process exit code for a finished probe.
///
/// Every outcome exits 0 unless `strict` is set, in which case anything
/// other than [`ProbeOutcome::Configured`] exits 1.
pub fn exit_code(outcome: &ProbeOutcome, strict: bool) -> ExitCode {
    if strict && !outcome.is_configured() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn print_report(report: &ProbeReport) {
    for line in report::render_report(report) {
        println!("{}", styled(&line));
    }
}

/// Colour outcome lines; everything else is printed as-is.
fn styled(line: &str) -> String {
    if CONFIGURED_LINES.contains(&line) {
        style(line).green().to_string()
    } else if line == ADJUSTMENT_LINE || line == TIMEOUT_LINE {
        style(line).yellow().to_string()
    } else if line.starts_with(ERROR_PREFIX) {
        style(line).red().to_string()
    } else {
        line.to_string()
    }
}

/// The `--dry-run` plan. Names the credential's secret, never its value.
fn dry_run_text(config: &ProbeConfig, json: bool) -> Result<String> {
    let invocation = ProbeInvocation::for_config(config, None);

    if json {
        let plan = serde_json::json!({
            "program": invocation.program,
            "args": invocation.args,
            "timeout_secs": config.timeout_secs,
            "credential_secret": config.api_key_secret,
        });
        return Ok(format!("{}\n", serde_json::to_string_pretty(&plan)?));
    }

    let mut out = String::new();
    writeln!(out)?;
    writeln!(out, "  {} {}", style("Command:").bold(), invocation.display_command())?;
    writeln!(out, "  {} {}", style("Target:").bold(), config.target())?;
    writeln!(out, "  {} {}s", style("Timeout:").bold(), config.timeout_secs)?;
    writeln!(
        out,
        "  {} {} (resolved at run time)",
        style("API key:").bold(),
        config.api_key_secret
    )?;
    writeln!(out)?;
    writeln!(out, "  {}", style("── Probe script ──").dim())?;
    if let Some(script) = invocation.script() {
        for line in script.trim().lines() {
            writeln!(out, "  {line}")?;
        }
    }
    writeln!(out)?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> ProbeArgs {
        ProbeArgs {
            container: None,
            timeout: None,
            runtime: None,
            dry_run: false,
            strict: false,
        }
    }

    #[test]
    fn no_overrides_keeps_config() {
        let base = ProbeConfig::default();
        assert_eq!(effective_config(&base, &args()), base);
    }

    #[test]
    fn overrides_replace_fields() {
        let base = ProbeConfig::default();
        let args = ProbeArgs {
            container: Some("mcp-dev".to_string()),
            timeout: Some(3),
            runtime: Some("podman".to_string()),
            ..args()
        };
        let config = effective_config(&base, &args);
        assert_eq!(config.container, "mcp-dev");
        assert_eq!(config.timeout_secs, 3);
        assert_eq!(config.runtime, "podman");
        assert_eq!(config.host, base.host);
    }

    fn all_outcomes() -> Vec<ProbeOutcome> {
        vec![
            ProbeOutcome::Configured { status_code: 200 },
            ProbeOutcome::NeedsAdjustment {
                reason: "API responded with HTTP 401".to_string(),
            },
            ProbeOutcome::TimedOut { after_secs: 30 },
            ProbeOutcome::Error {
                message: "failed to launch 'docker': not found".to_string(),
            },
        ]
    }

    #[test]
    fn every_outcome_exits_zero_by_default() {
        for outcome in all_outcomes() {
            assert_eq!(exit_code(&outcome, false), ExitCode::SUCCESS, "{outcome:?}");
        }
    }

    #[test]
    fn strict_fails_unless_configured() {
        for outcome in all_outcomes() {
            let expected = if outcome.is_configured() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            };
            assert_eq!(exit_code(&outcome, true), expected, "{outcome:?}");
        }
    }

    #[test]
    fn dry_run_names_secret_without_its_value() {
        const VALUE: &str = "sk-dry-run-value-4821";
        // SAFETY: no other test in this crate reads N8N_API_KEY.
        unsafe { std::env::set_var("N8N_API_KEY", VALUE) };
        console::set_colors_enabled(false);

        let config = ProbeConfig::default();
        for json in [false, true] {
            let text = dry_run_text(&config, json).unwrap();
            assert!(text.contains("N8N_API_KEY"));
            assert!(text.contains("n8n-mcp-configured"));
            assert!(!text.contains(VALUE));
        }
        let plain = dry_run_text(&config, false).unwrap();
        assert!(plain.contains("docker exec -e FLOWPROBE_API_KEY n8n-mcp-configured node -e"));

        unsafe { std::env::remove_var("N8N_API_KEY") };
    }

    #[test]
    fn styled_keeps_plain_text() {
        console::set_colors_enabled(false);
        assert_eq!(styled(TIMEOUT_LINE), TIMEOUT_LINE);
        assert_eq!(styled("plain"), "plain");
    }
}
