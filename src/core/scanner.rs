use regex::Regex;

/// Pulls candidate URLs out of raw markup.
///
/// This is a deliberately lightweight pattern scan, not an HTML parse: it
/// tolerates malformed markup and captures `href`/`src` values from anchor,
/// iframe and embed tags in document order. Duplicates are kept; callers
/// that need a set deduplicate themselves.
pub struct PageScanner {
    pattern: Regex,
}

impl PageScanner {
    pub fn new() -> Self {
        let pattern = Regex::new(r#"(?i)<(?:a|iframe|embed)[^>]+(?:href|src)=["']([^"']+)"#)
            .expect("Failed to compile page scan pattern");

        Self { pattern }
    }

    pub fn scan(&self, html: &str) -> Vec<String> {
        self.pattern
            .captures_iter(html)
            .filter_map(|captures| captures.get(1))
            .map(|matched| matched.as_str().to_string())
            .collect()
    }
}
