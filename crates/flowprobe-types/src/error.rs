use thiserror::Error;

/// Errors raised while launching or awaiting a probe.
///
/// The prober converts these into a `ProbeOutcome`; they never abort a run.
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("failed to launch '{program}': {reason}")]
    Launch { program: String, reason: String },

    #[error("secret '{0}' not found in environment or keychain")]
    MissingCredential(String),

    #[error("secret lookup failed: {0}")]
    Secret(#[from] SecretError),
}

/// Errors related to secret operations.
#[derive(Debug, Error)]
pub enum SecretError {
    #[error("secret provider is read-only")]
    ReadOnly,

    #[error("secret provider unavailable: {0}")]
    ProviderUnavailable(String),
}

/// Errors loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {reason}")]
    Read { path: String, reason: String },

    #[error("failed to parse {path}: {reason}")]
    Parse { path: String, reason: String },
}
