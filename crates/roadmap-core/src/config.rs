//! Configuration for roadmap (stored in ~/.config/roadmap/config.toml)

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, RoadmapError};
use crate::format::OutputFormat;

const CONFIG_DIR: &str = "roadmap";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "ROADMAP_CONFIG_DIR";

/// Vertex count of a freshly started map
pub const DEFAULT_VERTICES: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoadmapConfig {
    /// Vertex count for new maps
    #[serde(default = "default_vertices")]
    pub default_vertices: usize,

    /// Also add the opposite-labelled reverse edge when adding an edge
    #[serde(default)]
    pub bidirectional: bool,

    /// Output format used when `--format` is not given
    #[serde(default)]
    pub format: OutputFormat,
}

fn default_vertices() -> usize {
    DEFAULT_VERTICES
}

impl Default for RoadmapConfig {
    fn default() -> Self {
        Self {
            default_vertices: DEFAULT_VERTICES,
            bidirectional: false,
            format: OutputFormat::default(),
        }
    }
}

impl RoadmapConfig {
    /// Location of the user config file
    pub fn config_path() -> Result<PathBuf> {
        // Allow environment variable override for testing
        let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            PathBuf::from(env_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| {
                    RoadmapError::Other("unable to determine config directory".to_string())
                })?
                .join(CONFIG_DIR)
        };

        Ok(config_dir.join(CONFIG_FILE))
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| RoadmapError::io_operation("read config", path.display(), e))?;
        let config: RoadmapConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load the user config file, or defaults when there is none
    pub fn load_default() -> Result<Self> {
        let path = match Self::config_path() {
            Ok(path) => path,
            Err(e) => {
                tracing::debug!(error = %e, "no config directory, using defaults");
                return Ok(Self::default());
            }
        };

        if !path.exists() {
            return Ok(Self::default());
        }

        Self::load(&path)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| RoadmapError::Other(format!("failed to serialize config: {}", e)))?;
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).map_err(|e| {
                RoadmapError::io_operation("create config directory", dir.display(), e)
            })?;
        }
        fs::write(path, content)
            .map_err(|e| RoadmapError::io_operation("write config", path.display(), e))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = RoadmapConfig::default();
        assert_eq!(config.default_vertices, 10);
        assert!(!config.bidirectional);
        assert_eq!(config.format, OutputFormat::Human);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = RoadmapConfig {
            default_vertices: 25,
            bidirectional: true,
            format: OutputFormat::Json,
        };
        config.save(&path).unwrap();

        let loaded = RoadmapConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "bidirectional = true\n").unwrap();

        let loaded = RoadmapConfig::load(&path).unwrap();
        assert!(loaded.bidirectional);
        assert_eq!(loaded.default_vertices, DEFAULT_VERTICES);
        assert_eq!(loaded.format, OutputFormat::Human);
    }

    #[test]
    fn test_invalid_toml_is_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "default_vertices = \"many\"\n").unwrap();

        assert!(matches!(
            RoadmapConfig::load(&path),
            Err(RoadmapError::Toml(_))
        ));
    }

    #[test]
    fn test_load_missing_file_is_error() {
        let dir = tempdir().unwrap();
        assert!(RoadmapConfig::load(&dir.path().join("absent.toml")).is_err());
    }
}
