//! Probe domain types.
//!
//! A probe runs one HTTPS request from inside a container and reports back.
//! The raw capture is a [`ProbeResult`]; the inner script additionally emits
//! a single structured [`ProbeRecord`] line, which classification turns into
//! a [`ProbeOutcome`]. [`ProbeReport`] is the machine-readable summary of a
//! whole run.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Line prefix the inner script uses for its structured result record.
pub const RESULT_RECORD_PREFIX: &str = "@@flowprobe-result ";

// ---------------------------------------------------------------------------
// Target
// ---------------------------------------------------------------------------

/// The remote endpoint the inner script calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbeTarget {
    pub host: String,
    pub port: u16,
    pub path: String,
    pub method: String,
    /// Header carrying the API credential (e.g. "X-N8N-API-KEY").
    pub api_key_header: String,
}

impl fmt::Display for ProbeTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.port == 443 {
            write!(f, "{} https://{}{}", self.method, self.host, self.path)
        } else {
            write!(
                f,
                "{} https://{}:{}{}",
                self.method, self.host, self.port, self.path
            )
        }
    }
}

// ---------------------------------------------------------------------------
// Raw capture
// ---------------------------------------------------------------------------

/// How the runtime process ended, from the caller's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeExitStatus {
    /// The process ran to completion within the timeout (any exit code).
    Success,
    /// The timeout elapsed and the process was abandoned.
    Timeout,
    /// The process could not be launched or awaited.
    Error,
}

/// Captured output of one runtime invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeResult {
    pub exit_status: ProbeExitStatus,
    /// Process exit code, when it completed and the platform reports one.
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
    /// Launch error message for [`ProbeExitStatus::Error`].
    pub error: Option<String>,
}

impl ProbeResult {
    pub fn completed(exit_code: Option<i32>, stdout: String, stderr: String) -> Self {
        Self {
            exit_status: ProbeExitStatus::Success,
            exit_code,
            stdout,
            stderr,
            error: None,
        }
    }

    pub fn timed_out() -> Self {
        Self {
            exit_status: ProbeExitStatus::Timeout,
            exit_code: None,
            stdout: String::new(),
            stderr: String::new(),
            error: None,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            exit_status: ProbeExitStatus::Error,
            exit_code: None,
            stdout: String::new(),
            stderr: String::new(),
            error: Some(message.into()),
        }
    }
}

// ---------------------------------------------------------------------------
// Structured record
// ---------------------------------------------------------------------------

/// The record the inner script prints on its result line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProbeRecord {
    /// HTTP status returned by the remote API, if a response arrived.
    #[serde(default)]
    pub status_code: Option<u16>,
    /// Whether the inner script considers the call successful.
    pub ok: bool,
    /// Transport error message, if the request failed.
    #[serde(default)]
    pub error: Option<String>,
}

// ---------------------------------------------------------------------------
// Outcome
// ---------------------------------------------------------------------------

/// Classified result of a probe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ProbeOutcome {
    /// The container reached the API and got HTTP 200.
    Configured { status_code: u16 },
    /// The probe ran but did not confirm access.
    NeedsAdjustment { reason: String },
    /// The runtime process exceeded the timeout.
    TimedOut { after_secs: u64 },
    /// Anything else (launch failure, missing credential, ...).
    Error { message: String },
}

impl ProbeOutcome {
    pub fn is_configured(&self) -> bool {
        matches!(self, ProbeOutcome::Configured { .. })
    }
}

impl fmt::Display for ProbeOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeOutcome::Configured { .. } => write!(f, "configured"),
            ProbeOutcome::NeedsAdjustment { .. } => write!(f, "needs_adjustment"),
            ProbeOutcome::TimedOut { .. } => write!(f, "timed_out"),
            ProbeOutcome::Error { .. } => write!(f, "error"),
        }
    }
}

// ---------------------------------------------------------------------------
// Report
// ---------------------------------------------------------------------------

/// Summary of one probe run, printed as JSON with `--json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProbeReport {
    /// UUIDv7 identifying this run in logs.
    pub probe_id: Uuid,
    pub checked_at: DateTime<Utc>,
    pub container: String,
    pub target: ProbeTarget,
    #[serde(flatten)]
    pub outcome: ProbeOutcome,
    /// Whether the runtime process completed, so its output is meaningful.
    pub completed: bool,
    pub stdout: String,
    pub stderr: String,
    pub duration_ms: u64,
}
