//! Engine configuration for graphroute
//!
//! Configuration is read from `config.toml`, either an explicit path or
//! `graphroute/config.toml` under the platform config directory.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use crate::bail_invalid;
use crate::error::{GraphError, Result};

pub use types::{EngineConfig, DEFAULT_MAX_LABEL_LEN, DEFAULT_MAX_VERTICES};

const CONFIG_DIR: &str = "graphroute";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "GRAPHROUTE_CONFIG_DIR";

impl EngineConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: EngineConfig = toml::from_str(&content)?;
        config.validate()?;

        tracing::debug!(
            path = %path.display(),
            max_vertices = config.max_vertices,
            max_label_len = config.max_label_len,
            "config_loaded"
        );

        Ok(config)
    }

    /// Load the user configuration if one exists, otherwise the defaults
    pub fn discover() -> Result<Self> {
        let path = Self::config_path()?;

        if !path.exists() {
            return Ok(Self::default());
        }

        Self::load(&path)
    }

    /// Reject limits no graph could satisfy
    pub fn validate(&self) -> Result<()> {
        if self.max_vertices == 0 {
            bail_invalid!("max_vertices", self.max_vertices);
        }
        if self.max_label_len == 0 {
            bail_invalid!("max_label_len", self.max_label_len);
        }
        Ok(())
    }

    fn config_path() -> Result<PathBuf> {
        // Allow environment variable override for testing
        let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            PathBuf::from(env_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| {
                    GraphError::Other("unable to determine config directory".to_string())
                })?
                .join(CONFIG_DIR)
        };

        Ok(config_dir.join(CONFIG_FILE))
    }
}
