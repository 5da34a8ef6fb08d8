//! Project-level configuration support
//!
//! Loads configuration from `wordgraph.toml` or `.wordgraphrc.json` in the
//! working directory, falling back to the user config file.
//!
//! # Configuration Format
//!
//! ```toml
//! # wordgraph.toml
//! file = "text.txt"
//!
//! [walk]
//! seed = 42
//! output = "traversalResult.txt"
//!
//! [render]
//! dot_binary = "dot"
//! image_format = "png"
//! dot_path = "output.dot"
//! image_path = "image.png"
//!
//! [output]
//! format = "text"
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use super::user_config;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    /// Default corpus file
    pub file: Option<PathBuf>,
    pub walk: WalkConfig,
    pub render: RenderConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WalkConfig {
    /// Seed for the random generator (augment and walk)
    pub seed: Option<u64>,
    /// Write walks to this file, one word per line
    pub output: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub dot_binary: String,
    pub image_format: String,
    pub dot_path: PathBuf,
    pub image_path: PathBuf,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            dot_binary: "dot".to_string(),
            image_format: "png".to_string(),
            dot_path: PathBuf::from("output.dot"),
            image_path: PathBuf::from("image.png"),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// text or json
    pub format: Option<String>,
}

pub const TOML_NAME: &str = "wordgraph.toml";
pub const JSON_NAME: &str = ".wordgraphrc.json";

/// Load configuration from `dir`, then the user config, then defaults.
///
/// Unreadable or invalid files are logged and skipped.
pub fn load_project_config(dir: &Path) -> ProjectConfig {
    let candidates = [dir.join(TOML_NAME), dir.join(JSON_NAME)]
        .into_iter()
        .chain(user_config::user_config_path());

    for path in candidates {
        if !path.exists() {
            continue;
        }
        match load_config_file(&path) {
            Ok(config) => {
                debug!("Loaded config from {}", path.display());
                return config;
            }
            Err(e) => {
                warn!("Failed to load {}: {}", path.display(), e);
            }
        }
    }

    debug!("No config found, using defaults");
    ProjectConfig::default()
}

/// Load a config file, choosing the parser by extension (JSON or TOML)
pub fn load_config_file(path: &Path) -> anyhow::Result<ProjectConfig> {
    let content = std::fs::read_to_string(path)?;
    let is_json = path.extension().is_some_and(|ext| ext == "json");
    let config = if is_json {
        serde_json::from_str(&content)?
    } else {
        toml::from_str(&content)?
    };
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = ProjectConfig::default();
        assert!(config.file.is_none());
        assert!(config.walk.seed.is_none());
        assert_eq!(config.render.dot_binary, "dot");
        assert_eq!(config.render.image_format, "png");
        assert_eq!(config.render.dot_path, PathBuf::from("output.dot"));
    }

    #[test]
    fn test_load_toml() {
        let dir = tempdir().unwrap();
        std::fs::write(
            dir.path().join(TOML_NAME),
            r#"
file = "corpus.txt"

[walk]
seed = 7

[render]
image_format = "svg"

[output]
format = "json"
"#,
        )
        .unwrap();

        let config = load_project_config(dir.path());
        assert_eq!(config.file, Some(PathBuf::from("corpus.txt")));
        assert_eq!(config.walk.seed, Some(7));
        assert_eq!(config.render.image_format, "svg");
        // Unset keys keep their defaults
        assert_eq!(config.render.dot_binary, "dot");
        assert_eq!(config.output.format.as_deref(), Some("json"));
    }

    #[test]
    fn test_load_json() {
        let dir = tempdir().unwrap();
        std::fs::write(
            dir.path().join(JSON_NAME),
            r#"{ "walk": { "seed": 99 } }"#,
        )
        .unwrap();

        let config = load_project_config(dir.path());
        assert_eq!(config.walk.seed, Some(99));
    }

    #[test]
    fn test_toml_wins_over_json() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join(TOML_NAME), "[walk]\nseed = 1\n").unwrap();
        std::fs::write(dir.path().join(JSON_NAME), r#"{ "walk": { "seed": 2 } }"#).unwrap();

        assert_eq!(load_project_config(dir.path()).walk.seed, Some(1));
    }

    #[test]
    fn test_invalid_file_is_skipped() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join(TOML_NAME), "[walk\nseed = ").unwrap();
        std::fs::write(dir.path().join(JSON_NAME), r#"{ "walk": { "seed": 3 } }"#).unwrap();

        assert_eq!(load_project_config(dir.path()).walk.seed, Some(3));
    }

    #[test]
    fn test_load_config_file_reports_errors() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "seed = [").unwrap();
        assert!(load_config_file(&path).is_err());
    }
}
