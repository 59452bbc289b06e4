//! Shared text helpers used by both renderers

pub mod escape;

pub use escape::{escape_for_code_literal, escape_for_markdown_block, escape_for_markdown_table_cell};
