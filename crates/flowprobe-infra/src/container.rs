//! Container runtime runner.
//!
//! Implements [`ProbeRunner`] by spawning the runtime binary (`docker exec
//! ...`) with piped output and a hard timeout. On timeout the child is
//! killed when its handle is dropped.

use std::process::Stdio;

use flowprobe_core::probe::script::CREDENTIAL_ENV;
use flowprobe_core::probe::{ProbeInvocation, ProbeRunner};
use flowprobe_types::error::ProbeError;
use flowprobe_types::probe::ProbeResult;
use secrecy::ExposeSecret;

/// Runs probe invocations as local processes.
#[derive(Debug, Clone, Default)]
pub struct ContainerRunner;

impl ContainerRunner {
    pub fn new() -> Self {
        Self
    }
}

impl ProbeRunner for ContainerRunner {
    async fn run(&self, invocation: &ProbeInvocation) -> ProbeResult {
        let mut command = tokio::process::Command::new(&invocation.program);
        command
            .args(&invocation.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        if let Some(credential) = &invocation.credential {
            command.env(CREDENTIAL_ENV, credential.expose_secret());
        }

        let child = match command.spawn() {
            Ok(child) => child,
            Err(err) => {
                let err = ProbeError::Launch {
                    program: invocation.program.clone(),
                    reason: err.to_string(),
                };
                return ProbeResult::failed(err.to_string());
            }
        };

        tracing::debug!(pid = child.id(), "runtime process spawned");

        match tokio::time::timeout(invocation.timeout, child.wait_with_output()).await {
            Err(_) => {
                tracing::warn!(
                    timeout_secs = invocation.timeout.as_secs(),
                    "runtime process exceeded timeout, killing"
                );
                ProbeResult::timed_out()
            }
            Ok(Err(err)) => ProbeResult::failed(format!(
                "failed to wait for '{}': {err}",
                invocation.program
            )),
            Ok(Ok(output)) => {
                tracing::debug!(status = %output.status, "runtime process exited");
                ProbeResult::completed(
                    output.status.code(),
                    String::from_utf8_lossy(&output.stdout).into_owned(),
                    String::from_utf8_lossy(&output.stderr).into_owned(),
                )
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
