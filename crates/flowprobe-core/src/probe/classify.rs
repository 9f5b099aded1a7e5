//! Probe outcome classification.
//!
//! Classification reads only the structured result record; free-form log
//! lines printed by the inner script are never pattern-matched.

use flowprobe_types::probe::{
    ProbeExitStatus, ProbeOutcome, ProbeRecord, ProbeResult, RESULT_RECORD_PREFIX,
};

/// Find the last result record in `stdout`.
///
/// Returns `None` when no line carries the record prefix, and `Some(Err)`
/// when the last such line is not a valid record.
pub fn extract_record(stdout: &str) -> Option<Result<ProbeRecord, serde_json::Error>> {
    stdout
        .lines()
        .rev()
        .find_map(|line| line.trim_end().strip_prefix(RESULT_RECORD_PREFIX))
        .map(serde_json::from_str)
}

/// `stdout` without result record lines, for display.
pub fn strip_records(stdout: &str) -> String {
    stdout
        .lines()
        .filter(|line| !line.starts_with(RESULT_RECORD_PREFIX))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Map a raw capture to an outcome.
pub fn classify(result: &ProbeResult, timeout_secs: u64) -> ProbeOutcome {
    match result.exit_status {
        ProbeExitStatus::Timeout => ProbeOutcome::TimedOut {
            after_secs: timeout_secs,
        },
        ProbeExitStatus::Error => ProbeOutcome::Error {
            message: result
                .error
                .clone()
                .unwrap_or_else(|| "unknown probe error".to_string()),
        },
        ProbeExitStatus::Success => classify_completed(result),
    }
}

fn classify_completed(result: &ProbeResult) -> ProbeOutcome {
    let record = match extract_record(&result.stdout) {
        Some(Ok(record)) => record,
        Some(Err(err)) => {
            return ProbeOutcome::NeedsAdjustment {
                reason: format!("malformed result record: {err}"),
            };
        }
        None => {
            let reason = match result.exit_code {
                Some(code) if code != 0 => {
                    format!("container runtime exited with status {code} and no result record")
                }
                _ => "probe script produced no result record".to_string(),
            };
            return ProbeOutcome::NeedsAdjustment { reason };
        }
    };

    match record {
        ProbeRecord {
            ok: true,
            status_code: Some(200),
            ..
        } => ProbeOutcome::Configured { status_code: 200 },
        ProbeRecord {
            error: Some(error), ..
        } => ProbeOutcome::NeedsAdjustment {
            reason: format!("request failed: {error}"),
        },
        ProbeRecord {
            status_code: Some(code),
            ..
        } => ProbeOutcome::NeedsAdjustment {
            reason: format!("API responded with HTTP {code}"),
        },
        ProbeRecord {
            status_code: None, ..
        } => ProbeOutcome::NeedsAdjustment {
            reason: "result record carried no status code".to_string(),
        },
    }
}
