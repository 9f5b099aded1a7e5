//! Console narrative for a probe run.
//!
//! Rendering is pure: it turns a [`ProbeReport`] into the ordered lines the
//! CLI prints. The closing checklist is always last, whatever the outcome.

use flowprobe_types::probe::{ProbeOutcome, ProbeReport};

pub const BANNER: &str = "🚀 MCP Workflow Deployment via Configured Container";
pub const ATTEMPT: &str = "📋 Attempting MCP workflow creation...";
pub const OUTPUT_HEADER: &str = "📊 MCP Container Output:";
pub const ERRORS_HEADER: &str = "⚠️ Errors:";

pub const CONFIGURED_LINES: [&str; 3] = [
    "🎉 MCP is properly configured!",
    "✅ The N8N-MCP integration is working",
    "🚀 Ready for direct workflow deployment through MCP tools",
];
pub const ADJUSTMENT_LINE: &str = "🔧 MCP configuration may need adjustment";
pub const TIMEOUT_LINE: &str = "⏰ MCP test timed out";
pub const ERROR_PREFIX: &str = "💥 Error: ";

pub const NEXT_STEPS_HEADER: &str = "📋 Next Steps:";
pub const NEXT_STEPS: [&str; 3] = [
    "1. MCP container is configured with N8N API access",
    "2. Use MCP tools for workflow management",
    "3. Test workflow deployment via MCP",
];

/// Render the full narrative for `report`.
pub fn render_report(report: &ProbeReport) -> Vec<String> {
    let mut lines = vec![BANNER.to_string(), ATTEMPT.to_string()];

    if report.completed {
        lines.push(OUTPUT_HEADER.to_string());
        lines.extend(report.stdout.lines().map(str::to_string));

        if !report.stderr.trim().is_empty() {
            lines.push(ERRORS_HEADER.to_string());
            lines.extend(report.stderr.trim_end().lines().map(str::to_string));
        }
    }

    lines.extend(outcome_lines(&report.outcome));

    lines.push(String::new());
    lines.push(NEXT_STEPS_HEADER.to_string());
    lines.extend(NEXT_STEPS.iter().map(|s| s.to_string()));
    lines
}

/// The outcome block alone.
pub fn outcome_lines(outcome: &ProbeOutcome) -> Vec<String> {
    match outcome {
        ProbeOutcome::Configured { .. } => CONFIGURED_LINES.iter().map(|s| s.to_string()).collect(),
        ProbeOutcome::NeedsAdjustment { reason } => {
            vec![ADJUSTMENT_LINE.to_string(), format!("   reason: {reason}")]
        }
        ProbeOutcome::TimedOut { .. } => vec![TIMEOUT_LINE.to_string()],
        ProbeOutcome::Error { message } => vec![format!("{ERROR_PREFIX}{message}")],
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use uuid::Uuid;

    use flowprobe_types::config::ProbeConfig;

    use super::*;

    fn report(outcome: ProbeOutcome, completed: bool, stdout: &str, stderr: &str) -> ProbeReport {
        ProbeReport {
            probe_id: Uuid::now_v7(),
            checked_at: Utc::now(),
            container: "n8n-mcp-configured".to_string(),
            target: ProbeConfig::default().target(),
            outcome,
            completed,
            stdout: stdout.to_string(),
            stderr: stderr.to_string(),
            duration_ms: 0,
        }
    }

    fn contains(lines: &[String], needle: &str) -> bool {
        lines.iter().any(|l| l == needle)
    }

    fn assert_next_steps_last(lines: &[String]) {
        let tail = &lines[lines.len() - 5..];
        assert_eq!(tail[0], "");
        assert_eq!(tail[1], NEXT_STEPS_HEADER);
        assert_eq!(&tail[2..], &NEXT_STEPS);
    }

    #[test]
    fn configured_shows_confirmation_not_adjustment() {
        let lines = render_report(&report(
            ProbeOutcome::Configured { status_code: 200 },
            true,
            "MCP Container N8N API Status: 200",
            "",
        ));
        for line in CONFIGURED_LINES {
            assert!(contains(&lines, line));
        }
        assert!(!contains(&lines, ADJUSTMENT_LINE));
        assert!(!contains(&lines, ERRORS_HEADER));
        assert_next_steps_last(&lines);
    }

    #[test]
    fn needs_adjustment_omits_confirmation() {
        let lines = render_report(&report(
            ProbeOutcome::NeedsAdjustment {
                reason: "API responded with HTTP 401".to_string(),
            },
            true,
            "MCP Container N8N API Status: 401",
            "",
        ));
        assert!(contains(&lines, ADJUSTMENT_LINE));
        assert!(contains(&lines, "   reason: API responded with HTTP 401"));
        for line in CONFIGURED_LINES {
            assert!(!contains(&lines, line));
        }
        assert_next_steps_last(&lines);
    }

    #[test]
    fn timeout_prints_only_timeout_message() {
        let lines = render_report(&report(
            ProbeOutcome::TimedOut { after_secs: 30 },
            false,
            "",
            "",
        ));
        assert!(contains(&lines, TIMEOUT_LINE));
        assert!(!contains(&lines, ADJUSTMENT_LINE));
        assert!(!contains(&lines, OUTPUT_HEADER));
        for line in CONFIGURED_LINES {
            assert!(!contains(&lines, line));
        }
        assert_eq!(
            lines,
            vec![
                BANNER, ATTEMPT, TIMEOUT_LINE, "", NEXT_STEPS_HEADER, NEXT_STEPS[0], NEXT_STEPS[1],
                NEXT_STEPS[2],
            ]
        );
    }

    #[test]
    fn error_message_is_surfaced() {
        let lines = render_report(&report(
            ProbeOutcome::Error {
                message: "failed to launch 'docker': No such file or directory".to_string(),
            },
            false,
            "",
            "",
        ));
        assert!(contains(
            &lines,
            "💥 Error: failed to launch 'docker': No such file or directory"
        ));
        assert_next_steps_last(&lines);
    }

    #[test]
    fn stderr_section_only_when_present() {
        let lines = render_report(&report(
            ProbeOutcome::NeedsAdjustment {
                reason: "x".to_string(),
            },
            true,
            "",
            "Error: No such container: n8n-mcp-configured\n",
        ));
        let idx = lines.iter().position(|l| l == ERRORS_HEADER).unwrap();
        assert_eq!(lines[idx + 1], "Error: No such container: n8n-mcp-configured");
    }

    #[test]
    fn output_section_precedes_outcome() {
        let lines = render_report(&report(
            ProbeOutcome::Configured { status_code: 200 },
            true,
            "first\nsecond",
            "",
        ));
        let output = lines.iter().position(|l| l == OUTPUT_HEADER).unwrap();
        let outcome = lines.iter().position(|l| l == CONFIGURED_LINES[0]).unwrap();
        assert_eq!(&lines[output + 1..output + 3], &["first", "second"]);
        assert!(output < outcome);
        assert_eq!(lines[0], BANNER);
    }
}
