//! Error registry code and documentation generator
//!
//! Errors are defined once in a registry (key -> [`ErrorDefinition`]). From it
//! the generator renders a Rust module exposing every error as a constant plus
//! a lookup table, and one Markdown reference document per domain.

// Internal modules
pub mod codegen;
pub mod config;
pub mod definition;
#[macro_use]
pub mod logging;
pub mod pipeline;
pub mod registry;
pub mod utils;

// Re-export key types for library consumers
pub use codegen::{render_markdown, render_source_code, RenderError};
pub use definition::{ErrorDefinition, Registry};
pub use pipeline::{generate, generate_with_preferences, verify, GenerateError, GenerationReport};
pub use registry::{load_registry, LoadError};
