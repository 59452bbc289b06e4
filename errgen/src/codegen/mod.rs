//! Content generation
//!
//! - `source`: the Rust module exposing every error as a constant
//! - `markdown`: the per-domain reference documents
//!
//! Both renderers are pure: identical registries give byte-identical text.

mod error;
mod markdown;
mod source;
mod title;

pub use error::RenderError;
pub use markdown::{validate_domain, MarkdownGenerator};
pub use source::{is_valid_identifier, render_source_code, SourceGenerator, DEFAULT_GENERATOR_NAME};
pub use title::{normalize_title, TitleCache};

use crate::definition::Registry;

/// Render one domain's document with a throwaway title cache
pub fn render_markdown(domain: &str, registry: &Registry) -> Result<String, RenderError> {
    MarkdownGenerator::new().render(domain, registry)
}
