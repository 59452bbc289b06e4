use crate::codegen::RenderError;
use crate::logging::{codes, Code};
use std::path::PathBuf;

/// Orchestration errors.
///
/// Failures are wrapped in `SourceStage` or `DomainStage` so the message says
/// which artifact could not be produced.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("output file path cannot be empty")]
    EmptyOutputPath,

    #[error("markdown output directory cannot be empty")]
    EmptyMarkdownDir,

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write source content: {0}")]
    SourceStage(#[source] Box<GenerateError>),

    #[error("failed to write markdown for domain '{domain}': {source}")]
    DomainStage {
        domain: String,
        #[source]
        source: Box<GenerateError>,
    },
}

impl GenerateError {
    pub fn source_stage(error: impl Into<GenerateError>) -> Self {
        Self::SourceStage(Box::new(error.into()))
    }

    pub fn domain_stage(domain: &str, error: impl Into<GenerateError>) -> Self {
        Self::DomainStage {
            domain: domain.to_string(),
            source: Box::new(error.into()),
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Innermost error with the stage wrappers removed
    pub fn root(&self) -> &GenerateError {
        match self {
            Self::SourceStage(inner) => inner.root(),
            Self::DomainStage { source, .. } => source.root(),
            other => other,
        }
    }

    /// Domain whose Markdown failed, if the failure is domain-specific
    pub fn domain(&self) -> Option<&str> {
        match self {
            Self::DomainStage { domain, .. } => Some(domain.as_str()),
            _ => None,
        }
    }

    /// Get the appropriate error code for this error type
    pub fn error_code(&self) -> Code {
        match self.root() {
            Self::EmptyOutputPath => codes::generation::EMPTY_OUTPUT_PATH,
            Self::EmptyMarkdownDir => codes::generation::EMPTY_MARKDOWN_DIR,
            Self::Render(render) => render.error_code(),
            Self::Io { .. } => codes::generation::IO_FAILURE,
            // root() never returns a stage wrapper
            Self::SourceStage(_) | Self::DomainStage { .. } => codes::generation::IO_FAILURE,
        }
    }
}
