//! Environment variable secret provider.
//!
//! A read-only provider that checks environment variables. It is the
//! highest-priority provider in the resolution chain: env vars override the
//! keychain. The secret key is used directly as the variable name
//! (e.g. "N8N_API_KEY").

use flowprobe_core::secret::SecretProvider;
use flowprobe_types::error::SecretError;
use flowprobe_types::secret::SecretSource;

/// Environment variable secret provider.
///
/// Read-only: `set()` returns [`SecretError::ReadOnly`] because environment
/// variables cannot be persistently modified.
pub struct EnvSecretProvider;

impl EnvSecretProvider {
    pub fn new() -> Self {
        Self
    }
}

impl Default for EnvSecretProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl SecretProvider for EnvSecretProvider {
    fn source(&self) -> SecretSource {
        SecretSource::Environment
    }

    async fn get(&self, key: &str) -> Result<Option<String>, SecretError> {
        match std::env::var(key) {
            Ok(val) if val.is_empty() => Ok(None),
            Ok(val) => Ok(Some(val)),
            Err(std::env::VarError::NotPresent) => Ok(None),
            // Present but not valid Unicode: treat as absent, secrets must be strings
            Err(std::env::VarError::NotUnicode(_)) => Ok(None),
        }
    }

    async fn set(&self, _key: &str, _value: &str) -> Result<(), SecretError> {
        Err(SecretError::ReadOnly)
    }
}
