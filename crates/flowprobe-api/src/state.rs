//! Application state wiring configuration and services together.

use std::path::{Path, PathBuf};

use anyhow::Context;

use flowprobe_core::probe::ProbeService;
use flowprobe_core::secret::SecretResolver;
use flowprobe_infra::config::{load_config_file, load_global_config};
use flowprobe_infra::container::ContainerRunner;
use flowprobe_infra::filesystem::resolve_data_dir;
use flowprobe_infra::keychain::KeychainProvider;
use flowprobe_infra::secret::build_secret_chain;
use flowprobe_types::config::GlobalConfig;

pub type ConcreteProbeService = ProbeService<ContainerRunner>;

/// Shared state for CLI command handlers.
pub struct AppState {
    pub data_dir: PathBuf,
    /// Where the configuration came from, if a file was read.
    pub config_source: Option<PathBuf>,
    pub config: GlobalConfig,
    pub secrets: SecretResolver,
}

impl AppState {
    /// Resolve the data directory, load configuration and build the secret chain.
    pub async fn init(config_path: Option<&Path>, use_keychain: bool) -> anyhow::Result<Self> {
        let data_dir = resolve_data_dir();

        let (config, config_source) = match config_path {
            Some(path) => {
                let config = load_config_file(path)
                    .await
                    .with_context(|| format!("Failed to load configuration from {}", path.display()))?;
                (config, Some(path.to_path_buf()))
            }
            None => {
                let default_path = data_dir.join(flowprobe_infra::config::CONFIG_FILE_NAME);
                let exists = tokio::fs::try_exists(&default_path).await.unwrap_or(false);
                let config = load_global_config(&data_dir).await;
                (config, exists.then_some(default_path))
            }
        };

        let keychain = use_keychain.then(KeychainProvider::new);
        let secrets = SecretResolver::new(build_secret_chain(keychain, true));

        tracing::debug!(
            data_dir = %data_dir.display(),
            keychain = use_keychain,
            "application state initialized"
        );

        Ok(Self {
            data_dir,
            config_source,
            config,
            secrets,
        })
    }

    pub fn probe_service(&self) -> ConcreteProbeService {
        ProbeService::new(ContainerRunner::new(), self.secrets.clone())
    }
}
