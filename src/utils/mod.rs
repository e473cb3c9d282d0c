use regex::Regex;

/// Compiles a set of URL patterns up front so matching stays allocation-free.
/// Patterns come from static provider tables, so a bad one is a programming
/// error rather than runtime input.
pub fn compile_patterns(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|pattern| {
            Regex::new(pattern)
                .unwrap_or_else(|e| panic!("Invalid URL pattern {:?}: {}", pattern, e))
        })
        .collect()
}

pub fn matches_any(patterns: &[Regex], url: &str) -> bool {
    patterns.iter().any(|pattern| pattern.is_match(url))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compile_patterns() {
        let patterns = compile_patterns(&[r"(?i)youtube\.com/watch", r"(?i)youtu\.be/"]);
        assert_eq!(patterns.len(), 2);
    }

    #[test]
    fn test_matches_any() {
        let patterns = compile_patterns(&[r"(?i)vimeo\.com/", r"(?i)youtu\.be/"]);
        assert!(matches_any(&patterns, "https://vimeo.com/123456"));
        assert!(matches_any(&patterns, "https://YOUTU.BE/abc"));
        assert!(!matches_any(&patterns, "https://example.com/page"));
    }

    #[test]
    #[should_panic]
    fn test_invalid_pattern_panics() {
        compile_patterns(&["("]);
    }
}
