//! Configuration module for wordgraph
//!
//! This module handles:
//! - Project-level configuration (wordgraph.toml / .wordgraphrc.json)
//! - User-level fallback (~/.config/wordgraph/config.toml)

mod project_config;
mod user_config;

pub use project_config::{load_config_file, load_project_config, ProjectConfig};
