//! Exclusion-pattern matching for discovered URLs
//!
//! Exclude patterns come in two shapes: glob patterns containing `*`
//! (each `*` matches any run of characters, including none) and plain
//! substring patterns. Matching is case-sensitive; URLs are expected to
//! arrive already normalized by the backend.

/// Checks if a URL matches a single exclusion pattern
///
/// 1. Glob: "*/private/*" matches any URL with a "/private/" segment,
///    "*.pdf" matches any URL ending in ".pdf".
/// 2. Substring: "logout" matches any URL containing "logout".
///
/// # Examples
///
/// ```
/// use crawlctl::pattern::matches_pattern;
///
/// assert!(matches_pattern("*/private/*", "https://example.com/private/a"));
/// assert!(matches_pattern("*.pdf", "https://example.com/doc.pdf"));
/// assert!(matches_pattern("logout", "https://example.com/user/logout"));
/// assert!(!matches_pattern("*.pdf", "https://example.com/doc.html"));
/// ```
pub fn matches_pattern(pattern: &str, url: &str) -> bool {
    if pattern.contains('*') {
        matches_glob(pattern, url)
    } else {
        url.contains(pattern)
    }
}

/// Checks if a URL matches any pattern in a list
pub fn matches_any(patterns: &[String], url: &str) -> bool {
    patterns.iter().any(|p| matches_pattern(p, url))
}

/// Glob matching with `*` wildcards
///
/// Splits the pattern on `*` and scans the candidate for each literal
/// segment in order. A pattern without a leading `*` anchors the first
/// segment at the start; without a trailing `*`, the last segment anchors
/// at the end.
fn matches_glob(pattern: &str, candidate: &str) -> bool {
    let mut segments: Vec<&str> = pattern.split('*').collect();

    // Pattern was all wildcards
    if segments.iter().all(|s| s.is_empty()) {
        return true;
    }

    let anchored_start = !pattern.starts_with('*');
    let anchored_end = !pattern.ends_with('*');

    let mut remaining = candidate;

    // Anchored suffix is stripped up front so middle segments cannot
    // consume the characters it needs
    if anchored_end {
        let last = segments.pop().unwrap_or("");
        match remaining.strip_suffix(last) {
            Some(rest) => remaining = rest,
            None => return false,
        }
    }

    for (i, segment) in segments.iter().enumerate() {
        if segment.is_empty() {
            continue;
        }

        if i == 0 && anchored_start {
            match remaining.strip_prefix(segment) {
                Some(rest) => remaining = rest,
                None => return false,
            }
            continue;
        }

        // Leftmost match leaves the most room for later segments
        match remaining.find(segment) {
            Some(pos) => remaining = &remaining[pos + segment.len()..],
            None => return false,
        }
    }

    true
}
