use serde::{Deserialize, Serialize};

use std::fmt;

/// Storage backend a secret was resolved from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SecretSource {
    /// OS keychain (macOS Keychain / Linux Secret Service).
    Keychain,
    /// Environment variable.
    Environment,
}

impl fmt::Display for SecretSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SecretSource::Keychain => write!(f, "keychain"),
            SecretSource::Environment => write!(f, "environment"),
        }
    }
}

/// Show a masked representation of a secret: last 4 chars visible.
pub fn mask(value: &str) -> String {
    let chars: Vec<char> = value.chars().collect();
    if chars.len() <= 4 {
        "****".to_string()
    } else {
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("****{tail}")
    }
}
