//! Application data path resolution
//!
//! Paths are resolved against the platform data directory rather than the
//! working directory, so the store ends up in the same place whether the app
//! is launched from a terminal or a desktop shell.

use std::path::PathBuf;
use tracing::debug;

/// Get the application data directory for Infinity.
///
/// Creates the directory if it doesn't exist.
pub fn get_app_data_dir() -> PathBuf {
    let dir = dirs::data_dir()
        .map(|base| base.join("infinity"))
        .or_else(|| dirs::home_dir().map(|home| home.join(".infinity")))
        .unwrap_or_else(|| PathBuf::from("/tmp/infinity"));

    if let Err(e) = std::fs::create_dir_all(&dir) {
        eprintln!("Warning: Failed to create app data directory {:?}: {}", dir, e);
    }

    debug!("App data directory: {:?}", dir);
    dir
}

/// Get the snapshot store path for Infinity.
pub fn get_store_path() -> PathBuf {
    get_app_data_dir().join("infinity.db")
}
