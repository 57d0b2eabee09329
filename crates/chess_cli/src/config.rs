//! Driver configuration (`chess_cli.toml`).

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chess_rules::EngineConfig;
use serde::{Deserialize, Serialize};

pub const DEFAULT_CONFIG: &str = "chess_cli.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Fallback filter when `RUST_LOG` is unset
    pub log_filter: String,
    /// Directory `save` writes into
    pub save_dir: PathBuf,
    pub engine: EngineConfig,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_filter: "info".to_string(),
            save_dir: PathBuf::from("."),
            engine: EngineConfig::default(),
        }
    }
}

impl CliConfig {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).context("invalid driver config")
    }

    /// Reads `path`, or returns the defaults when the file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::from_toml_str(&text)
    }
}
