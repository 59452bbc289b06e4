use crate::logging::{codes, Code};

/// Errors raised while rendering generated content
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    #[error("no error definitions provided")]
    EmptyRegistry,

    #[error("invalid domain name '{domain}': must be non-empty and contain no whitespace, '.', '/' or '\\'")]
    InvalidDomain { domain: String },

    #[error("invalid error key '{key}': not a valid Rust identifier")]
    InvalidKey { key: String },
}

impl RenderError {
    /// Get the appropriate error code for this error type
    pub fn error_code(&self) -> Code {
        match self {
            RenderError::EmptyRegistry => codes::generation::EMPTY_REGISTRY,
            RenderError::InvalidDomain { .. } => codes::generation::INVALID_DOMAIN,
            RenderError::InvalidKey { .. } => codes::generation::INVALID_KEY,
        }
    }
}
