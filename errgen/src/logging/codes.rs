//! Stable codes attached to every failure and success the generator reports
//!
//! Codes are grouped by the stage that raises them so log output and CLI
//! diagnostics can be grepped independently of message wording.

/// Universal code wrapper for both error and success codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code(&'static str);

impl Code {
    pub const fn new(code: &'static str) -> Self {
        Self(code)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// CODE CONSTANTS
// ============================================================================

/// Rendering and orchestration error codes
pub mod generation {
    use super::Code;

    pub const EMPTY_REGISTRY: Code = Code::new("G001");
    pub const INVALID_DOMAIN: Code = Code::new("G002");
    pub const INVALID_KEY: Code = Code::new("G003");
    pub const EMPTY_OUTPUT_PATH: Code = Code::new("G004");
    pub const EMPTY_MARKDOWN_DIR: Code = Code::new("G005");
    pub const IO_FAILURE: Code = Code::new("G006");
}

/// Registry loading error codes
pub mod registry {
    use super::Code;

    pub const IO_ERROR: Code = Code::new("R001");
    pub const UNSUPPORTED_FORMAT: Code = Code::new("R002");
    pub const PARSE_ERROR: Code = Code::new("R003");
    pub const DUPLICATE_KEY: Code = Code::new("R004");
    pub const NO_INPUTS: Code = Code::new("R005");
}

/// Success codes
pub mod success {
    use super::Code;

    pub const REGISTRY_LOADED: Code = Code::new("S001");
    pub const SOURCE_WRITTEN: Code = Code::new("S002");
    pub const MARKDOWN_WRITTEN: Code = Code::new("S003");
    pub const GENERATION_COMPLETED: Code = Code::new("S004");
}

/// Human-readable description for a code string
pub fn get_description(code: &str) -> &'static str {
    match code {
        "G001" => "No error definitions were provided to a renderer",
        "G002" => "Domain name is empty or contains whitespace, '.', '/' or '\\'",
        "G003" => "Registry key is not a valid Rust identifier",
        "G004" => "Source output file path is empty",
        "G005" => "Markdown output directory is empty",
        "G006" => "Directory creation or file write failed",
        "R001" => "Registry input could not be read",
        "R002" => "Registry input has an unsupported file extension",
        "R003" => "Registry input could not be parsed",
        "R004" => "The same registry key is defined in more than one input",
        "R005" => "No registry inputs were supplied",
        "S001" => "Registry loaded",
        "S002" => "Source file written",
        "S003" => "Markdown document written",
        "S004" => "Generation completed",
        _ => "Unknown error",
    }
}
