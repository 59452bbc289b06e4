//! Error definitions and the registry that maps lookup keys to them

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Registry of error definitions keyed by lookup key.
///
/// A `BTreeMap` iterates in byte-wise ascending key order, which is the
/// ordering both renderers emit.
pub type Registry = BTreeMap<String, ErrorDefinition>;

fn default_http_status() -> u16 {
    500
}

/// A single centrally-defined error
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDefinition {
    /// Machine-readable identifier, conventionally equal to the registry key
    #[serde(default)]
    pub code: String,
    /// Human-readable summary
    #[serde(default)]
    pub msg: String,
    #[serde(default)]
    pub cause: String,
    #[serde(default = "default_http_status")]
    pub http_status: u16,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub severity: String,
    #[serde(default)]
    pub is_retryable: bool,
    #[serde(default)]
    pub solution: String,
    /// Partition key selecting the Markdown document this error lands in
    #[serde(default)]
    pub domain: String,
    /// Free-text labels, order preserved in output
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Default for ErrorDefinition {
    fn default() -> Self {
        Self {
            code: String::new(),
            msg: String::new(),
            cause: String::new(),
            http_status: default_http_status(),
            category: String::new(),
            severity: String::new(),
            is_retryable: false,
            solution: String::new(),
            domain: String::new(),
            tags: Vec::new(),
        }
    }
}

/// Group a registry into one sub-registry per `domain` value.
///
/// Definitions keep their original keys. An empty domain is not filtered out
/// here; callers validate domain names before using them as paths.
pub fn partition_by_domain(registry: &Registry) -> BTreeMap<String, Registry> {
    registry
        .iter()
        .fold(BTreeMap::new(), |mut partitions, (key, definition)| {
            partitions
                .entry(definition.domain.clone())
                .or_insert_with(Registry::new)
                .insert(key.clone(), definition.clone());
            partitions
        })
}

/// `code` values used by more than one registry key, with the keys using them.
///
/// Duplicates are allowed; this exists so callers can warn about them.
pub fn duplicate_codes(registry: &Registry) -> Vec<(String, Vec<String>)> {
    let mut by_code: BTreeMap<&str, Vec<String>> = BTreeMap::new();
    for (key, definition) in registry {
        by_code
            .entry(definition.code.as_str())
            .or_default()
            .push(key.clone());
    }

    by_code
        .into_iter()
        .filter(|(_, keys)| keys.len() > 1)
        .map(|(code, keys)| (code.to_string(), keys))
        .collect()
}
