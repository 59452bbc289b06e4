//! Markdown reference generator
//!
//! Renders one domain's errors as a summary table followed by a detail
//! section per error.

use super::error::RenderError;
use super::title::TitleCache;
use crate::definition::{ErrorDefinition, Registry};
use crate::utils::{escape_for_markdown_block, escape_for_markdown_table_cell};
use std::sync::Arc;

const TABLE_HEADER: &str = "| Code | Msg | HTTP | Category | Severity | Retryable |\n";
const TABLE_ALIGNMENT: &str =
    "|:------:|:-----:|:------:|:----------:|:----------:|:-----------:|\n";

/// Check that `domain` can be used as a document name and directory name
pub fn validate_domain(domain: &str) -> Result<(), RenderError> {
    let invalid = domain.trim().is_empty()
        || domain
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '.' | '/' | '\\'));

    if invalid {
        return Err(RenderError::InvalidDomain {
            domain: domain.to_string(),
        });
    }
    Ok(())
}

/// Markdown documentation generator
#[derive(Debug, Default, Clone)]
pub struct MarkdownGenerator {
    titles: Arc<TitleCache>,
}

impl MarkdownGenerator {
    /// Create a generator with its own title cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a generator that shares `titles` with other generators
    pub fn with_cache(titles: Arc<TitleCache>) -> Self {
        Self { titles }
    }

    pub fn title_cache(&self) -> &TitleCache {
        &self.titles
    }

    /// Render the document for `domain` from the errors in `registry`
    pub fn render(&self, domain: &str, registry: &Registry) -> Result<String, RenderError> {
        validate_domain(domain)?;

        if registry.is_empty() {
            return Err(RenderError::EmptyRegistry);
        }

        // Rough capacity: header + table rows + ~300 bytes of details per error
        let mut output = String::with_capacity(500 + registry.len() * 300);
        output.push_str(&self.titles.normalize(domain));

        Self::write_summary_table(&mut output, registry);
        output.push_str("\n---\n\n");

        for (key, definition) in registry {
            Self::write_details(&mut output, key, definition);
        }

        let trimmed_len = output.trim_end_matches('\n').len();
        output.truncate(trimmed_len);
        output.push('\n');
        Ok(output)
    }

    fn write_summary_table(output: &mut String, registry: &Registry) {
        output.push_str(TABLE_HEADER);
        output.push_str(TABLE_ALIGNMENT);

        for definition in registry.values() {
            output.push_str(&format!(
                "| {} | {} | {} | {} | {} | {} |\n",
                definition.code,
                escape_for_markdown_table_cell(&definition.msg),
                definition.http_status,
                definition.category,
                definition.severity,
                definition.is_retryable,
            ));
        }
    }

    fn write_details(output: &mut String, key: &str, definition: &ErrorDefinition) {
        output.push_str(&format!("## {}\n\n", key));
        output.push_str(&format!(
            "- **Message**: {}\n",
            escape_for_markdown_block(&definition.msg)
        ));
        output.push_str(&format!(
            "- **Cause**: {}\n",
            escape_for_markdown_block(&definition.cause)
        ));
        output.push_str(&format!(
            "- **Solution**: {}\n",
            escape_for_markdown_block(&definition.solution)
        ));
        output.push_str(&format!("- **HTTP Status**: {}\n", definition.http_status));
        output.push_str(&format!("- **Category**: {}\n", definition.category));
        output.push_str(&format!("- **Severity**: {}\n", definition.severity));
        output.push_str(&format!("- **Retryable**: {}\n", definition.is_retryable));

        if !definition.tags.is_empty() {
            let tags: Vec<String> = definition
                .tags
                .iter()
                .map(|tag| format!("`{}`", tag))
                .collect();
            output.push_str(&format!("- **Tags**: {}\n", tags.join(", ")));
        }

        // Sections end with one blank line whether or not they list tags.
        output.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn user_registry() -> Registry {
        let mut registry = Registry::new();
        registry.insert(
            "UR0002".into(),
            ErrorDefinition {
                code: "USER_LOCKED".into(),
                msg: "Account | locked".into(),
                cause: "Too many `login` attempts".into(),
                http_status: 423,
                category: "auth".into(),
                severity: "medium".into(),
                is_retryable: true,
                solution: "Wait and retry".into(),
                domain: "user".into(),
                tags: vec!["security".into(), "auth".into()],
            },
        );
        registry.insert(
            "UR0001".into(),
            ErrorDefinition {
                code: "USER_NOT_FOUND".into(),
                msg: "User not found".into(),
                cause: "User ID missing".into(),
                http_status: 404,
                category: "user".into(),
                severity: "low".into(),
                is_retryable: false,
                solution: "Provide correct user ID".into(),
                domain: "user".into(),
                tags: vec![],
            },
        );
        registry
    }

    #[test]
    fn test_full_document() {
        let output = MarkdownGenerator::new().render("user", &user_registry()).unwrap();
        let expected = "\
# User Errors

| Code | Msg | HTTP | Category | Severity | Retryable |
|:------:|:-----:|:------:|:----------:|:----------:|:-----------:|
| USER_NOT_FOUND | User not found | 404 | user | low | false |
| USER_LOCKED | Account \\| locked | 423 | auth | medium | true |

---

## UR0001

- **Message**: User not found
- **Cause**: User ID missing
- **Solution**: Provide correct user ID
- **HTTP Status**: 404
- **Category**: user
- **Severity**: low
- **Retryable**: false

## UR0002

- **Message**: Account | locked
- **Cause**: Too many \\`login\\` attempts
- **Solution**: Wait and retry
- **HTTP Status**: 423
- **Category**: auth
- **Severity**: medium
- **Retryable**: true
- **Tags**: `security`, `auth`
";
        assert_eq!(output, expected);
    }

    #[test]
    fn test_single_trailing_newline() {
        let output = MarkdownGenerator::new().render("user", &user_registry()).unwrap();
        assert!(output.ends_with('\n'));
        assert!(!output.ends_with("\n\n"));
    }

    #[test]
    fn test_tags_omitted_when_empty() {
        let mut registry = user_registry();
        registry.remove("UR0002");
        let output = MarkdownGenerator::new().render("user", &registry).unwrap();
        assert!(!output.contains("**Tags**"));
    }

    #[test]
    fn test_tags_keep_order() {
        let output = MarkdownGenerator::new().render("user", &user_registry()).unwrap();
        assert!(output.contains("- **Tags**: `security`, `auth`\n"));
    }

    #[test]
    fn test_empty_registry() {
        assert_matches!(
            MarkdownGenerator::new().render("user", &Registry::new()),
            Err(RenderError::EmptyRegistry)
        );
    }

    #[test]
    fn test_invalid_domains() {
        let generator = MarkdownGenerator::new();
        for domain in ["", "   ", "ord ers", "a.b", "a/b", "a\\b", "tab\there"] {
            assert_matches!(
                generator.render(domain, &user_registry()),
                Err(RenderError::InvalidDomain { domain: d }) if d == domain
            );
        }
    }

    #[test]
    fn test_invalid_domain_checked_before_empty_registry() {
        assert_matches!(
            MarkdownGenerator::new().render("ord ers", &Registry::new()),
            Err(RenderError::InvalidDomain { .. })
        );
    }

    #[test]
    fn test_hyphenated_domain_title() {
        let output = MarkdownGenerator::new()
            .render("user-auth", &user_registry())
            .unwrap();
        assert!(output.starts_with("# User-Auth Errors\n\n| Code |"));
    }

    #[test]
    fn test_shared_cache() {
        let cache = Arc::new(TitleCache::new());
        let first = MarkdownGenerator::with_cache(Arc::clone(&cache));
        let second = MarkdownGenerator::with_cache(Arc::clone(&cache));

        first.render("user", &user_registry()).unwrap();
        second.render("billing", &user_registry()).unwrap();

        assert_eq!(cache.len(), 2);
        assert!(first.title_cache().contains("billing"));
    }

    #[test]
    fn test_deterministic_output() {
        let generator = MarkdownGenerator::new();
        let first = generator.render("user", &user_registry()).unwrap();
        let second = MarkdownGenerator::new().render("user", &user_registry()).unwrap();
        assert_eq!(first, second);
    }
}
