//! Project configuration file (`errgen.toml`)

use super::runtime::GeneratorPreferences;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// File name the CLI looks for when `--config` is not given
pub const DEFAULT_CONFIG_FILE: &str = "errgen.toml";

#[derive(Debug, thiserror::Error)]
pub enum ProjectConfigError {
    #[error("Failed to read config {path}: {message}")]
    Read { path: String, message: String },

    #[error("Invalid TOML in {path}: {message}")]
    Parse { path: String, message: String },
}

/// Inputs and outputs of one generation run.
///
/// Relative paths are resolved against the directory holding the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    /// Registry files or directories
    pub inputs: Vec<PathBuf>,
    pub source_output: Option<PathBuf>,
    pub markdown_dir: Option<PathBuf>,
    pub preferences: GeneratorPreferences,
}

impl ProjectConfig {
    pub fn from_toml_str(content: &str, origin: &Path) -> Result<Self, ProjectConfigError> {
        toml::from_str(content).map_err(|e| ProjectConfigError::Parse {
            path: origin.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Load a config file, resolving its relative paths
    pub fn load(path: &Path) -> Result<Self, ProjectConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ProjectConfigError::Read {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        let config = Self::from_toml_str(&content, path)?;
        let base = path.parent().unwrap_or_else(|| Path::new(""));
        Ok(config.resolve_relative_to(base))
    }

    /// Load `path` if it exists, otherwise return the defaults
    pub fn load_or_default(path: &Path) -> Result<Self, ProjectConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    fn resolve_relative_to(mut self, base: &Path) -> Self {
        let resolve = |p: PathBuf| if p.is_relative() { base.join(p) } else { p };

        self.inputs = self.inputs.into_iter().map(resolve).collect();
        self.source_output = self.source_output.map(resolve);
        self.markdown_dir = self.markdown_dir.map(resolve);
        self
    }
}
