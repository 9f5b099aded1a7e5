//! Connectivity probe: runner trait and the service driving one probe run.
//!
//! - `script` -- inner script rendering and runtime invocation
//! - `classify` -- structured-record classification of captured output
//!
//! The service is linear: resolve the credential, launch once, classify.
//! Every failure becomes a [`ProbeOutcome`]; nothing is retried.

pub mod classify;
pub mod script;

use std::future::Future;
use std::time::Instant;

use chrono::Utc;
use tracing::Instrument;
use uuid::Uuid;

use flowprobe_types::config::ProbeConfig;
use flowprobe_types::error::ProbeError;
use flowprobe_types::probe::{ProbeExitStatus, ProbeOutcome, ProbeReport, ProbeResult};

use crate::secret::SecretResolver;

pub use script::ProbeInvocation;

/// Trait for launching the container runtime.
///
/// Implementors must always return a [`ProbeResult`]: launch failures and
/// timeouts are reported through its exit status, not as errors.
pub trait ProbeRunner: Send + Sync {
    fn run(&self, invocation: &ProbeInvocation) -> impl Future<Output = ProbeResult> + Send;
}

/// Runs a single connectivity probe.
pub struct ProbeService<R> {
    runner: R,
    secrets: SecretResolver,
}

impl<R: ProbeRunner> ProbeService<R> {
    pub fn new(runner: R, secrets: SecretResolver) -> Self {
        Self { runner, secrets }
    }

    /// Probe the target described by `config` and summarize the run.
    pub async fn run(&self, config: &ProbeConfig) -> ProbeReport {
        let probe_id = Uuid::now_v7();
        let span = tracing::info_span!(
            "probe",
            %probe_id,
            container = %config.container,
            runtime = %config.runtime,
        );

        async move {
            let checked_at = Utc::now();
            let start = Instant::now();

            let result = match self.credential(config).await {
                Ok(credential) => {
                    let invocation = ProbeInvocation::for_config(config, Some(credential));
                    tracing::debug!(command = %invocation.display_command(), "launching probe");
                    self.runner.run(&invocation).await
                }
                Err(err) => {
                    tracing::warn!(error = %err, "probe aborted before launch");
                    ProbeResult::failed(err.to_string())
                }
            };

            let outcome = classify::classify(&result, config.timeout_secs);
            let duration_ms = start.elapsed().as_millis() as u64;

            match &outcome {
                ProbeOutcome::Configured { status_code } => {
                    tracing::info!(status_code, duration_ms, "probe succeeded")
                }
                ProbeOutcome::NeedsAdjustment { reason } => {
                    tracing::warn!(%reason, duration_ms, "probe needs adjustment")
                }
                ProbeOutcome::TimedOut { after_secs } => {
                    tracing::warn!(after_secs, "probe timed out")
                }
                ProbeOutcome::Error { message } => {
                    tracing::error!(%message, "probe failed")
                }
            }

            ProbeReport {
                probe_id,
                checked_at,
                container: config.container.clone(),
                target: config.target(),
                outcome,
                completed: result.exit_status == ProbeExitStatus::Success,
                stdout: classify::strip_records(&result.stdout),
                stderr: result.stderr,
                duration_ms,
            }
        }
        .instrument(span)
        .await
    }

    async fn credential(&self, config: &ProbeConfig) -> Result<secrecy::SecretString, ProbeError> {
        match self.secrets.resolve(&config.api_key_secret).await? {
            Some(resolved) => Ok(resolved.value),
            None => Err(ProbeError::MissingCredential(
                config.api_key_secret.clone(),
            )),
        }
    }
}
