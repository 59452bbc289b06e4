//! Configuration for the generator
//!
//! `runtime` holds preferences read from the environment; `project` is the
//! optional `errgen.toml` the CLI reads.

pub mod project;
pub mod runtime;

pub use project::{ProjectConfig, ProjectConfigError, DEFAULT_CONFIG_FILE};
pub use runtime::GeneratorPreferences;
