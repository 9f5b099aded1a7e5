//! Filesystem helpers: data directory resolution and artifact writes.

use std::path::{Path, PathBuf};

/// Resolve the data directory from environment or platform defaults.
///
/// Priority:
/// 1. `FLOWPROBE_DATA_DIR` environment variable
/// 2. `~/.flowprobe`
pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("FLOWPROBE_DATA_DIR") {
        return PathBuf::from(dir);
    }

    if let Some(home) = dirs::home_dir() {
        return home.join(".flowprobe");
    }

    // Last resort: current directory
    PathBuf::from(".flowprobe")
}

/// Write `content` to `path`, creating parent directories as needed.
pub async fn write_artifact(path: &Path, content: &str) -> Result<(), std::io::Error> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }
    tokio::fs::write(path, content).await
}
