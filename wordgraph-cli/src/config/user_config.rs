//! User-level configuration location
//!
//! `~/.config/wordgraph/config.toml` (or the platform equivalent) uses the
//! same format as the project file and is consulted when no project file
//! exists.

use std::path::PathBuf;

/// Get the user config file path
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("wordgraph").join("config.toml"))
}
