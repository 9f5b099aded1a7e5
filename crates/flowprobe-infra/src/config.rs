//! Configuration loader for flowprobe.
//!
//! Reads `config.toml` from the data directory (`~/.flowprobe/` by default)
//! and deserializes it into [`GlobalConfig`]. Falls back to defaults when the
//! file is missing or malformed. An explicitly requested file is stricter:
//! see [`load_config_file`].

use std::path::Path;

use flowprobe_types::config::GlobalConfig;
use flowprobe_types::error::ConfigError;

pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Load configuration from `{data_dir}/config.toml`.
///
/// - If the file does not exist, returns [`GlobalConfig::default()`].
/// - If the file exists but fails to read or parse, logs a warning and returns the default.
pub async fn load_global_config(data_dir: &Path) -> GlobalConfig {
    let config_path = data_dir.join(CONFIG_FILE_NAME);

    let content = match tokio::fs::read_to_string(&config_path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config.toml found at {}, using defaults", config_path.display());
            return GlobalConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", config_path.display());
            return GlobalConfig::default();
        }
    };

    match toml::from_str::<GlobalConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(
                "Failed to parse {}: {err}, using defaults",
                config_path.display()
            );
            GlobalConfig::default()
        }
    }
}

/// Load configuration from an explicit path (`--config`).
///
/// Unlike [`load_global_config`], a missing or invalid file is an error.
pub async fn load_config_file(path: &Path) -> Result<GlobalConfig, ConfigError> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

    toml::from_str(&content).map_err(|e| ConfigError::Parse {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn load_global_config_missing_file_returns_default() {
        let tmp = TempDir::new().unwrap();
        let config = load_global_config(tmp.path()).await;
        assert_eq!(config, GlobalConfig::default());
    }

    #[tokio::test]
    async fn load_global_config_valid_toml_returns_parsed() {
        let tmp = TempDir::new().unwrap();
        tokio::fs::write(
            tmp.path().join(CONFIG_FILE_NAME),
            r#"
[probe]
runtime = "podman"
container = "mcp-staging"
timeout_secs = 45
"#,
        )
        .await
        .unwrap();

        let config = load_global_config(tmp.path()).await;
        assert_eq!(config.probe.runtime, "podman");
        assert_eq!(config.probe.container, "mcp-staging");
        assert_eq!(config.probe.timeout_secs, 45);
        assert_eq!(config.probe.interpreter, "node");
    }

    #[tokio::test]
    async fn load_global_config_invalid_toml_returns_default() {
        let tmp = TempDir::new().unwrap();
        tokio::fs::write(tmp.path().join(CONFIG_FILE_NAME), "this is not { valid toml !!!")
            .await
            .unwrap();

        let config = load_global_config(tmp.path()).await;
        assert_eq!(config, GlobalConfig::default());
    }

    #[tokio::test]
    async fn load_config_file_missing_is_error() {
        let tmp = TempDir::new().unwrap();
        let err = load_config_file(&tmp.path().join("absent.toml"))
            .await
            .unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[tokio::test]
    async fn load_config_file_invalid_is_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("bad.toml");
        tokio::fs::write(&path, "[probe]\ntimeout_secs = \"soon\"\n")
            .await
            .unwrap();

        let err = load_config_file(&path).await.unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[tokio::test]
    async fn load_config_file_valid() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("probe.toml");
        tokio::fs::write(&path, "[probe]\nport = 8443\n").await.unwrap();

        let config = load_config_file(&path).await.unwrap();
        assert_eq!(config.probe.port, 8443);
    }
}
