//! Secret provider implementations and chain wiring.
//!
//! - `env`: Environment variable provider (read-only, highest priority)
//! - [`build_secret_chain`]: wires concrete providers in priority order
//!
//! The resulting chain is handed to `SecretResolver` in `flowprobe-core`
//! via the `DynSecretProvider` abstraction.

pub mod env;

use std::sync::Arc;

use flowprobe_core::secret::DynSecretProvider;

use crate::keychain::KeychainProvider;
use crate::secret::env::EnvSecretProvider;

/// Build the secret resolution chain.
///
/// The chain is ordered by precedence (first match wins):
/// 1. Environment variables (if `include_env` is true)
/// 2. OS keychain (if `keychain` is Some)
pub fn build_secret_chain(
    keychain: Option<KeychainProvider>,
    include_env: bool,
) -> Vec<DynSecretProvider> {
    let mut chain: Vec<DynSecretProvider> = Vec::new();

    if include_env {
        chain.push(Arc::new(EnvSecretProvider::new()));
    }

    if let Some(kc) = keychain {
        chain.push(Arc::new(kc));
    }

    chain
}
