//! Domain identifier to Markdown heading conversion, with a shared cache

use std::collections::HashMap;
use std::sync::RwLock;

/// Build the top-level heading for a domain.
///
/// Each hyphen-separated segment is lower-cased and then gets an upper-case
/// first character. Empty segments (leading, trailing or doubled hyphens) are
/// kept as they are.
pub fn normalize_title(domain: &str) -> String {
    let parts: Vec<String> = domain.split('-').map(capitalize_segment).collect();
    format!("# {} Errors\n\n", parts.join("-"))
}

fn capitalize_segment(segment: &str) -> String {
    let lower = segment.to_lowercase();
    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Memoized [`normalize_title`] results keyed by the raw domain string.
///
/// Entries are never evicted while the cache lives. Concurrent writers for
/// the same key always store the same value.
#[derive(Debug, Default)]
pub struct TitleCache {
    entries: RwLock<HashMap<String, String>>,
}

impl TitleCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached heading for `domain`, computing and storing it on first use
    pub fn normalize(&self, domain: &str) -> String {
        if let Ok(entries) = self.entries.read() {
            if let Some(title) = entries.get(domain) {
                return title.clone();
            }
        }

        let title = normalize_title(domain);
        // A poisoned lock only loses memoization; the title itself is still correct.
        if let Ok(mut entries) = self.entries.write() {
            entries
                .entry(domain.to_string())
                .or_insert_with(|| title.clone());
        }
        title
    }

    pub fn len(&self) -> usize {
        self.entries.read().map(|entries| entries.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, domain: &str) -> bool {
        self.entries
            .read()
            .map(|entries| entries.contains_key(domain))
            .unwrap_or(false)
    }

    /// Drop every memoized heading
    pub fn clear(&self) {
        if let Ok(mut entries) = self.entries.write() {
            entries.clear();
        }
    }
}
