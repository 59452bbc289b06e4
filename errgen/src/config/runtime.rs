// RUNTIME PREFERENCES

use crate::codegen::DEFAULT_GENERATOR_NAME;
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorPreferences {
    /// Name written into the generated-file header
    pub generator_name: String,

    /// Whether to log a warning for `code` values shared by several keys
    pub warn_duplicate_codes: bool,
}

impl Default for GeneratorPreferences {
    fn default() -> Self {
        Self {
            generator_name: env::var("ERRGEN_GENERATOR_NAME")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_GENERATOR_NAME.to_string()),
            warn_duplicate_codes: env::var("ERRGEN_WARN_DUPLICATE_CODES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
        }
    }
}
