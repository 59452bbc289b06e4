//! Registry loader: TOML and JSON files, or directories of them

use super::error::LoadError;
use crate::definition::Registry;
use crate::logging::codes;
use crate::{log_debug, log_success};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Registry file formats, chosen by extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryFormat {
    Toml,
    Json,
}

impl RegistryFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Some(Self::Toml),
            Some("json") => Some(Self::Json),
            _ => None,
        }
    }
}

/// Parse registry text in the given format. `origin` only labels errors.
pub fn parse_registry(
    content: &str,
    format: RegistryFormat,
    origin: &Path,
) -> Result<Registry, LoadError> {
    match format {
        RegistryFormat::Toml => toml::from_str(content).map_err(|e| LoadError::Toml {
            path: origin.to_path_buf(),
            message: e.to_string(),
        }),
        RegistryFormat::Json => serde_json::from_str(content).map_err(|e| LoadError::Json {
            path: origin.to_path_buf(),
            message: e.to_string(),
        }),
    }
}

/// Load one registry file
pub fn load_registry_file(path: &Path) -> Result<Registry, LoadError> {
    let format = RegistryFormat::from_path(path).ok_or_else(|| LoadError::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;

    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let registry = parse_registry(&content, format, path)?;
    log_debug!("Parsed registry file",
        "file" => path.display(),
        "definitions" => registry.len());
    Ok(registry)
}

/// Registry files directly inside `dir`, sorted by path
fn discover_registry_files(dir: &Path) -> Result<Vec<PathBuf>, LoadError> {
    let io_error = |source: std::io::Error| LoadError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_error)? {
        let path = entry.map_err(io_error)?.path();
        if path.is_file() && RegistryFormat::from_path(&path).is_some() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Load and merge registries from files and directories.
///
/// A key defined by two different sources is an error.
pub fn load_registry<P: AsRef<Path>>(inputs: &[P]) -> Result<Registry, LoadError> {
    if inputs.is_empty() {
        return Err(LoadError::NoInputs);
    }

    let mut files = Vec::new();
    for input in inputs {
        let input = input.as_ref();
        if input.is_dir() {
            files.extend(discover_registry_files(input)?);
        } else {
            files.push(input.to_path_buf());
        }
    }

    let mut registry = Registry::new();
    let mut sources: HashMap<String, PathBuf> = HashMap::new();

    for file in &files {
        for (key, definition) in load_registry_file(file)? {
            if let Some(first) = sources.get(&key) {
                return Err(LoadError::DuplicateKey {
                    key,
                    first: first.clone(),
                    second: file.clone(),
                });
            }
            sources.insert(key.clone(), file.clone());
            registry.insert(key, definition);
        }
    }

    log_success!(codes::success::REGISTRY_LOADED, "Registry loaded",
        "files" => files.len(),
        "definitions" => registry.len());
    Ok(registry)
}
