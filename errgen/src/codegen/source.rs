//! Rust source generator
//!
//! Renders a registry into one self-contained Rust module: the `Error` type,
//! one constant per registry key, and a sorted `ERROR_MAP` with a `lookup`
//! helper. Writing the text out is the pipeline's job.

use super::error::RenderError;
use crate::definition::{ErrorDefinition, Registry};
use crate::utils::escape_for_code_literal as escape;

/// Generator name used in the header when none is configured
pub const DEFAULT_GENERATOR_NAME: &str = "errgen";

/// Names the generated module defines or binds itself; keys may not shadow them.
/// A constant named like a local binding turns that binding into a constant pattern.
const GENERATED_ITEMS: &[&str] = &[
    "Error",
    "ERROR_MAP",
    "lookup",
    "__key",
    "__candidate",
    "__index",
];

const RUST_KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "crate",
    "do", "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl",
    "in", "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref",
    "return", "self", "Self", "static", "struct", "super", "trait", "true", "try", "type",
    "typeof", "unsafe", "unsized", "use", "virtual", "where", "while", "yield",
];

/// Render with the default generator name
pub fn render_source_code(registry: &Registry) -> Result<String, RenderError> {
    SourceGenerator::default().render(registry)
}

/// Whether `key` can be emitted as a constant name in the generated module
pub fn is_valid_identifier(key: &str) -> bool {
    let mut chars = key.chars();
    let starts_ok = match chars.next() {
        Some(first) => first.is_ascii_alphabetic() || first == '_',
        None => false,
    };

    starts_ok
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        && key != "_"
        && !RUST_KEYWORDS.contains(&key)
        && !GENERATED_ITEMS.contains(&key)
}

/// Rust source generator
#[derive(Debug, Clone)]
pub struct SourceGenerator {
    generator_name: String,
}

impl Default for SourceGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_GENERATOR_NAME)
    }
}

impl SourceGenerator {
    /// Create a generator whose header names `generator_name`
    pub fn new(generator_name: &str) -> Self {
        Self {
            generator_name: generator_name.to_string(),
        }
    }

    /// Render the whole registry into Rust source text
    pub fn render(&self, registry: &Registry) -> Result<String, RenderError> {
        if registry.is_empty() {
            return Err(RenderError::EmptyRegistry);
        }

        if let Some(key) = registry.keys().find(|key| !is_valid_identifier(key)) {
            return Err(RenderError::InvalidKey { key: key.clone() });
        }

        let mut output = String::with_capacity(1024 + registry.len() * 400);
        self.write_header(&mut output);
        Self::write_type_declaration(&mut output);
        for (key, definition) in registry {
            Self::write_constant(&mut output, key, definition);
        }
        Self::write_lookup_map(&mut output, registry);

        Ok(output)
    }

    fn write_header(&self, output: &mut String) {
        output.push_str(&format!(
            "// Code generated by {}; DO NOT EDIT.\n\n",
            self.generator_name
        ));
    }

    fn write_type_declaration(output: &mut String) {
        output.push_str("/// A centrally defined error.\n");
        output.push_str("#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]\n");
        output.push_str("pub struct Error {\n");
        output.push_str("    pub code: &'static str,\n");
        output.push_str("    pub msg: &'static str,\n");
        output.push_str("    pub cause: &'static str,\n");
        output.push_str("    pub http_status: u16,\n");
        output.push_str("    pub category: &'static str,\n");
        output.push_str("    pub severity: &'static str,\n");
        output.push_str("    pub is_retryable: bool,\n");
        output.push_str("    pub solution: &'static str,\n");
        output.push_str("    pub tags: &'static [&'static str],\n");
        output.push_str("}\n\n");
    }

    fn write_constant(output: &mut String, key: &str, definition: &ErrorDefinition) {
        if key.chars().any(|c| c.is_ascii_lowercase()) {
            output.push_str("#[allow(non_upper_case_globals)]\n");
        }
        output.push_str(&format!("pub const {}: &Error = &Error {{\n", key));
        output.push_str(&format!("    code: \"{}\",\n", escape(&definition.code)));
        output.push_str(&format!("    msg: \"{}\",\n", escape(&definition.msg)));
        output.push_str(&format!("    cause: \"{}\",\n", escape(&definition.cause)));
        output.push_str(&format!("    http_status: {},\n", definition.http_status));
        output.push_str(&format!("    category: \"{}\",\n", escape(&definition.category)));
        output.push_str(&format!("    severity: \"{}\",\n", escape(&definition.severity)));
        output.push_str(&format!("    is_retryable: {},\n", definition.is_retryable));
        output.push_str(&format!("    solution: \"{}\",\n", escape(&definition.solution)));

        if definition.tags.is_empty() {
            output.push_str("    tags: &[],\n");
        } else {
            output.push_str("    tags: &[\n");
            for tag in &definition.tags {
                output.push_str(&format!("        \"{}\",\n", escape(tag)));
            }
            output.push_str("    ],\n");
        }
        output.push_str("};\n\n");
    }

    fn write_lookup_map(output: &mut String, registry: &Registry) {
        output.push_str("/// Every error keyed by registry key, sorted ascending by key.\n");
        output.push_str("pub static ERROR_MAP: &[(&str, &Error)] = &[\n");
        for key in registry.keys() {
            output.push_str(&format!("    (\"{}\", {}),\n", escape(key), key));
        }
        output.push_str("];\n\n");

        output.push_str("/// Look up an error by registry key.\n");
        output.push_str("pub fn lookup(__key: &str) -> Option<&'static Error> {\n");
        output.push_str("    ERROR_MAP\n");
        output.push_str("        .binary_search_by(|(__candidate, _)| __candidate.cmp(&__key))\n");
        output.push_str("        .ok()\n");
        output.push_str("        .map(|__index| ERROR_MAP[__index].1)\n");
        output.push_str("}\n");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn sample_registry() -> Registry {
        let mut registry = Registry::new();
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
                tags: vec!["auth".into()],
            },
        );
        registry.insert(
            "OR0001".into(),
            ErrorDefinition {
                code: "ORDER_FAILED".into(),
                msg: "Order could not be completed".into(),
                cause: "Payment issue".into(),
                http_status: 500,
                category: "order".into(),
                severity: "critical".into(),
                is_retryable: true,
                solution: "Check payment system".into(),
                domain: "order".into(),
                tags: vec![],
            },
        );
        registry
    }

    #[test]
    fn test_empty_registry() {
        assert_matches!(
            render_source_code(&Registry::new()),
            Err(RenderError::EmptyRegistry)
        );
    }

    #[test]
    fn test_header_and_type() {
        let output = render_source_code(&sample_registry()).unwrap();
        assert!(output.starts_with("// Code generated by errgen; DO NOT EDIT.\n\n"));
        assert!(output.contains("pub struct Error {\n    pub code: &'static str,\n"));
        assert!(output.contains("    pub http_status: u16,\n"));
        assert!(output.contains("    pub tags: &'static [&'static str],\n}\n"));
    }

    #[test]
    fn test_custom_generator_name() {
        let output = SourceGenerator::new("build.rs")
            .render(&sample_registry())
            .unwrap();
        assert!(output.starts_with("// Code generated by build.rs; DO NOT EDIT.\n"));
    }

    #[test]
    fn test_constants_sorted_by_key() {
        let output = render_source_code(&sample_registry()).unwrap();
        let order = output.find("pub const OR0001").unwrap();
        let user = output.find("pub const UR0001").unwrap();
        assert!(order < user);

        let map_start = output.find("pub static ERROR_MAP").unwrap();
        let map = &output[map_start..];
        assert!(map.find("(\"OR0001\", OR0001)").unwrap() < map.find("(\"UR0001\", UR0001)").unwrap());
    }

    #[test]
    fn test_constant_body() {
        let output = render_source_code(&sample_registry()).unwrap();
        let expected = "pub const UR0001: &Error = &Error {\n\
                        \x20   code: \"USER_NOT_FOUND\",\n\
                        \x20   msg: \"User not found\",\n\
                        \x20   cause: \"User ID missing\",\n\
                        \x20   http_status: 404,\n\
                        \x20   category: \"user\",\n\
                        \x20   severity: \"low\",\n\
                        \x20   is_retryable: false,\n\
                        \x20   solution: \"Provide correct user ID\",\n\
                        \x20   tags: &[\n\
                        \x20       \"auth\",\n\
                        \x20   ],\n\
                        };\n";
        assert!(output.contains(expected), "{output}");
        assert!(output.contains("    is_retryable: true,\n    solution: \"Check payment system\",\n    tags: &[],\n"));
    }

    #[test]
    fn test_text_fields_are_escaped() {
        let mut registry = sample_registry();
        registry.get_mut("UR0001").unwrap().msg = "say \"hi\"\nC:\\path".into();
        registry.get_mut("UR0001").unwrap().tags = vec!["a\"b".into()];

        let output = render_source_code(&registry).unwrap();
        assert!(output.contains(r#"    msg: "say \"hi\"\nC:\\path","#));
        assert!(output.contains(r#"        "a\"b","#));
    }

    #[test]
    fn test_deterministic_output() {
        let first = render_source_code(&sample_registry()).unwrap();
        let second = render_source_code(&sample_registry()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_lookup_function_emitted() {
        let output = render_source_code(&sample_registry()).unwrap();
        assert!(output.contains("pub fn lookup(__key: &str) -> Option<&'static Error> {\n"));
        assert!(output.ends_with("}\n"));
    }

    #[test]
    fn test_lowercase_key_allows_lint() {
        let mut registry = Registry::new();
        registry.insert("user_missing".into(), ErrorDefinition::default());
        let output = render_source_code(&registry).unwrap();
        assert!(output.contains(
            "#[allow(non_upper_case_globals)]\npub const user_missing: &Error = &Error {\n"
        ));
        assert!(!render_source_code(&sample_registry())
            .unwrap()
            .contains("allow(non_upper_case_globals)"));
    }

    #[test]
    fn test_invalid_key() {
        let mut registry = sample_registry();
        registry.insert("bad-key".into(), ErrorDefinition::default());
        assert_matches!(
            render_source_code(&registry),
            Err(RenderError::InvalidKey { key }) if key == "bad-key"
        );
    }

    #[test]
    fn test_identifier_rules() {
        assert!(is_valid_identifier("UR0001"));
        assert!(is_valid_identifier("_private"));
        assert!(is_valid_identifier("snake_case"));
        assert!(!is_valid_identifier(""));
        assert!(!is_valid_identifier("_"));
        assert!(!is_valid_identifier("0START"));
        assert!(!is_valid_identifier("has space"));
        assert!(!is_valid_identifier("fn"));
        assert!(!is_valid_identifier("Error"));
        assert!(!is_valid_identifier("ERROR_MAP"));
        assert!(!is_valid_identifier("ünicode"));
    }

    /// The registry `testdata/sample_errors.rs` was rendered from
    fn fixture_registry() -> Registry {
        let mut registry = Registry::new();
        registry.insert(
            "OR0001".into(),
            ErrorDefinition {
                code: "ORDER_FAILED".into(),
                msg: "Order \"42\" failed".into(),
                cause: "Gateway at C:\\pay\\gw".into(),
                http_status: 500,
                category: "order".into(),
                severity: "critical".into(),
                is_retryable: true,
                solution: "Retry later\r\nor contact support".into(),
                domain: "order".into(),
                tags: vec!["payment".into(), "order".into()],
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
        registry.insert(
            "index".into(),
            ErrorDefinition {
                code: "INDEX_STALE".into(),
                msg: "Search index stale".into(),
                cause: "Reindex lagging".into(),
                http_status: 503,
                category: "search".into(),
                severity: "medium".into(),
                is_retryable: true,
                solution: "Wait for reindex".into(),
                domain: "search".into(),
                tags: vec!["search".into()],
            },
        );
        registry.insert(
            "key".into(),
            ErrorDefinition {
                code: "KEY_REVOKED".into(),
                msg: "API key revoked".into(),
                cause: "Key rotated".into(),
                http_status: 401,
                category: "auth".into(),
                severity: "high".into(),
                is_retryable: false,
                solution: "Issue a new key".into(),
                domain: "auth".into(),
                tags: vec![],
            },
        );
        registry
    }

    // The checked-in rendering, compiled as part of the test build
    #[allow(dead_code)]
    mod rendered {
        include!("testdata/sample_errors.rs");
    }

    #[test]
    fn test_render_matches_fixture() {
        let output = render_source_code(&fixture_registry()).unwrap();
        assert_eq!(output, include_str!("testdata/sample_errors.rs"));
    }

    #[test]
    fn test_rendered_lookup() {
        assert_eq!(rendered::lookup("OR0001").map(|e| e.code), Some("ORDER_FAILED"));
        assert_eq!(rendered::lookup("UR0001").map(|e| e.http_status), Some(404));
        assert_eq!(rendered::lookup("key").map(|e| e.code), Some("KEY_REVOKED"));
        assert_eq!(rendered::lookup("index").map(|e| e.code), Some("INDEX_STALE"));
        assert!(rendered::lookup("missing").is_none());
        assert!(rendered::lookup("").is_none());

        let keys: Vec<&str> = rendered::ERROR_MAP.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, vec!["OR0001", "UR0001", "index", "key"]);
    }

    #[test]
    fn test_rendered_text_round_trips() {
        let order = rendered::OR0001;
        assert_eq!(order.msg, "Order \"42\" failed");
        assert_eq!(order.cause, "Gateway at C:\\pay\\gw");
        assert_eq!(order.solution, "Retry later\r\nor contact support");
        assert_eq!(order.tags, &["payment", "order"]);
        assert!(order.is_retryable);

        assert!(rendered::UR0001.tags.is_empty());
        assert_eq!(rendered::index.tags, &["search"]);
        assert_eq!(rendered::key.http_status, 401);
    }

    #[test]
    fn test_lookup_local_names_are_valid_keys() {
        let mut registry = Registry::new();
        for name in ["key", "candidate", "index", "OTHER"] {
            registry.insert(name.into(), ErrorDefinition::default());
        }
        let output = render_source_code(&registry).unwrap();
        assert!(output.contains("pub const candidate: &Error = &Error {\n"));
        assert!(output.contains(".map(|__index| ERROR_MAP[__index].1)\n"));
    }

    #[test]
    fn test_lookup_bindings_rejected_as_keys() {
        for name in ["__key", "__candidate", "__index"] {
            assert!(!is_valid_identifier(name), "{name}");

            let mut registry = Registry::new();
            registry.insert(name.into(), ErrorDefinition::default());
            assert_matches!(
                render_source_code(&registry),
                Err(RenderError::InvalidKey { key }) if key == name
            );
        }
    }
}
