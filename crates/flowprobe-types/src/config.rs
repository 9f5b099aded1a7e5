//! Global configuration types for flowprobe.
//!
//! `GlobalConfig` represents the top-level `config.toml`. Every field has a
//! default, so an empty or missing file yields a working configuration.

use serde::{Deserialize, Serialize};

use crate::probe::ProbeTarget;

/// Top-level configuration.
///
/// Loaded from `~/.flowprobe/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Connectivity probe settings (`[probe]` table).
    #[serde(default)]
    pub probe: ProbeConfig,
}

/// Settings for the container connectivity probe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProbeConfig {
    /// Container runtime binary (`docker`, `podman`, ...).
    pub runtime: String,
    /// Name or id of the running container to exec into.
    pub container: String,
    /// Interpreter inside the container that runs the probe script.
    pub interpreter: String,
    /// Ceiling on the whole runtime invocation.
    pub timeout_secs: u64,
    /// Remote API host.
    pub host: String,
    pub port: u16,
    pub path: String,
    pub method: String,
    /// Header carrying the API key.
    pub api_key_header: String,
    /// Secret name the API key is resolved under (env var / keychain entry).
    pub api_key_secret: String,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            runtime: "docker".to_string(),
            container: "n8n-mcp-configured".to_string(),
            interpreter: "node".to_string(),
            timeout_secs: 30,
            host: "lifemastery.app.n8n.cloud".to_string(),
            port: 443,
            path: "/api/v1/workflows".to_string(),
            method: "GET".to_string(),
            api_key_header: "X-N8N-API-KEY".to_string(),
            api_key_secret: "N8N_API_KEY".to_string(),
        }
    }
}

impl ProbeConfig {
    /// The endpoint portion of the configuration.
    pub fn target(&self) -> ProbeTarget {
        ProbeTarget {
            host: self.host.clone(),
            port: self.port,
            path: self.path.clone(),
            method: self.method.clone(),
            api_key_header: self.api_key_header.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probe_config_default_values() {
        let config = ProbeConfig::default();
        assert_eq!(config.runtime, "docker");
        assert_eq!(config.container, "n8n-mcp-configured");
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.port, 443);
        assert_eq!(config.api_key_header, "X-N8N-API-KEY");
    }

    #[test]
    fn test_global_config_deserialize_empty() {
        let config: GlobalConfig = toml::from_str("").unwrap();
        assert_eq!(config, GlobalConfig::default());
    }

    #[test]
    fn test_global_config_deserialize_partial_probe_table() {
        let toml_str = r#"
[probe]
container = "mcp-staging"
timeout_secs = 10
host = "staging.example.com"
"#;
        let config: GlobalConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.probe.container, "mcp-staging");
        assert_eq!(config.probe.timeout_secs, 10);
        assert_eq!(config.probe.host, "staging.example.com");
        // Unset fields keep their defaults
        assert_eq!(config.probe.runtime, "docker");
        assert_eq!(config.probe.path, "/api/v1/workflows");
    }

    #[test]
    fn test_target_copies_endpoint_fields() {
        let config = ProbeConfig {
            port: 8443,
            ..ProbeConfig::default()
        };
        let target = config.target();
        assert_eq!(target.host, config.host);
        assert_eq!(target.port, 8443);
        assert_eq!(target.method, "GET");
    }

    #[test]
    fn test_global_config_serde_roundtrip() {
        let mut config = GlobalConfig::default();
        config.probe.interpreter = "nodejs".to_string();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: GlobalConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }
}
