//! Escaping for text embedded in generated Rust string literals and Markdown
//!
//! None of these functions reformat whitespace; every character that is not
//! special to the target context passes through unchanged.

/// Escape text for embedding inside a double-quoted Rust string literal.
///
/// Backslash is handled in the same pass as the other characters, so an
/// inserted escape backslash is never escaped a second time.
pub fn escape_for_code_literal(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            // A bare CR is rejected inside Rust string literals.
            '\r' => escaped.push_str("\\r"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Escape the pipe character, which would otherwise end a table cell
pub fn escape_for_markdown_table_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

/// Escape backticks, which would otherwise open or close an inline code span
pub fn escape_for_markdown_block(text: &str) -> String {
    text.replace('`', "\\`")
}
