//! Secret provider trait and chained resolution.
//!
//! Providers are async and not object-safe, so dynamic dispatch goes through
//! [`SecretProviderDyn`], blanket-implemented for every [`SecretProvider`]:
//! 1. `SecretProvider` uses `impl Future` returns
//! 2. `SecretProviderDyn` boxes those futures
//! 3. [`DynSecretProvider`] is an `Arc<dyn SecretProviderDyn>`

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use secrecy::SecretString;

use flowprobe_types::error::SecretError;
use flowprobe_types::secret::SecretSource;

/// Trait for secret storage backends (keychain, environment).
pub trait SecretProvider: Send + Sync {
    /// Which backend this provider reads from.
    fn source(&self) -> SecretSource;

    /// Retrieve a secret value by key.
    /// Returns None if the secret does not exist in this provider.
    fn get(
        &self,
        key: &str,
    ) -> impl Future<Output = Result<Option<String>, SecretError>> + Send;

    /// Store a secret value. Read-only providers return [`SecretError::ReadOnly`].
    fn set(&self, key: &str, value: &str) -> impl Future<Output = Result<(), SecretError>> + Send;
}

/// Object-safe version of [`SecretProvider`] with boxed futures.
pub trait SecretProviderDyn: Send + Sync {
    fn source(&self) -> SecretSource;

    fn get_boxed<'a>(
        &'a self,
        key: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<Option<String>, SecretError>> + Send + 'a>>;

    fn set_boxed<'a>(
        &'a self,
        key: &'a str,
        value: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<(), SecretError>> + Send + 'a>>;
}

impl<T: SecretProvider> SecretProviderDyn for T {
    fn source(&self) -> SecretSource {
        SecretProvider::source(self)
    }

    fn get_boxed<'a>(
        &'a self,
        key: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<Option<String>, SecretError>> + Send + 'a>> {
        Box::pin(self.get(key))
    }

    fn set_boxed<'a>(
        &'a self,
        key: &'a str,
        value: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<(), SecretError>> + Send + 'a>> {
        Box::pin(self.set(key, value))
    }
}

pub type DynSecretProvider = Arc<dyn SecretProviderDyn>;

/// A resolved secret together with the backend that supplied it.
pub struct ResolvedSecret {
    pub value: SecretString,
    pub source: SecretSource,
}

/// Resolves secrets through a chain of providers in priority order.
///
/// First match wins. A provider error aborts resolution; a provider that
/// simply lacks the key is skipped.
#[derive(Clone)]
pub struct SecretResolver {
    providers: Vec<DynSecretProvider>,
}

impl SecretResolver {
    pub fn new(providers: Vec<DynSecretProvider>) -> Self {
        Self { providers }
    }

    pub async fn resolve(&self, key: &str) -> Result<Option<ResolvedSecret>, SecretError> {
        for provider in &self.providers {
            if let Some(value) = provider.get_boxed(key).await? {
                tracing::debug!(key, source = %provider.source(), "secret resolved");
                return Ok(Some(ResolvedSecret {
                    value: SecretString::from(value),
                    source: provider.source(),
                }));
            }
        }
        Ok(None)
    }

    /// Store a secret in the first writable provider.
    ///
    /// Returns the backend that accepted the write.
    pub async fn store(&self, key: &str, value: &str) -> Result<SecretSource, SecretError> {
        for provider in &self.providers {
            match provider.set_boxed(key, value).await {
                Ok(()) => return Ok(provider.source()),
                Err(SecretError::ReadOnly) => continue,
                Err(e) => return Err(e),
            }
        }

        Err(SecretError::ProviderUnavailable(
            "no writable secret provider available".to_string(),
        ))
    }
}
