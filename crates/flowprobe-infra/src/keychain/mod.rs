//! OS keychain adapter for secret storage.
//!
//! Uses the `keyring` crate to store/retrieve secrets via:
//! - macOS Keychain
//! - Linux Secret Service (GNOME Keyring, KDE Wallet)
//! - Windows Credential Manager

use flowprobe_core::secret::SecretProvider;
use flowprobe_types::error::SecretError;
use flowprobe_types::secret::SecretSource;

/// OS keychain secret provider using the `keyring` crate.
///
/// Entries live under one service name; the secret key is the account.
pub struct KeychainProvider {
    service_name: String,
}

impl KeychainProvider {
    /// Create a new KeychainProvider with the default service name "flowprobe".
    pub fn new() -> Self {
        Self {
            service_name: "flowprobe".to_string(),
        }
    }

    /// Create a KeychainProvider with a custom service name (useful for testing).
    pub fn with_service(service_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
        }
    }

    pub fn service_name(&self) -> &str {
        &self.service_name
    }

    fn entry(&self, key: &str) -> Result<keyring::Entry, SecretError> {
        keyring::Entry::new(&self.service_name, key)
            .map_err(|e| SecretError::ProviderUnavailable(format!("keychain entry error: {e}")))
    }
}

impl Default for KeychainProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl SecretProvider for KeychainProvider {
    fn source(&self) -> SecretSource {
        SecretSource::Keychain
    }

    async fn get(&self, key: &str) -> Result<Option<String>, SecretError> {
        let entry = self.entry(key)?;

        match entry.get_password() {
            Ok(value) => Ok(Some(value)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => Err(SecretError::ProviderUnavailable(format!(
                "keychain get error: {e}"
            ))),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), SecretError> {
        let entry = self.entry(key)?;

        entry
            .set_password(value)
            .map_err(|e| SecretError::ProviderUnavailable(format!("keychain set error: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_service_name() {
        assert_eq!(KeychainProvider::new().service_name(), "flowprobe");
        assert_eq!(
            KeychainProvider::with_service("flowprobe-test").service_name(),
            "flowprobe-test"
        );
    }

    #[test]
    fn reports_keychain_source() {
        assert_eq!(
            SecretProvider::source(&KeychainProvider::new()),
            SecretSource::Keychain
        );
    }
}
