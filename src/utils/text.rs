//! Text cleanup for LLM responses.
//!
//! Completion endpoints return assignment lists in loosely controlled
//! formats: numbered lines, bullet markers, blank separator lines. These
//! helpers normalize a raw response into a clean list of prompt strings
//! without depending on the model honoring the requested format.

use regex::Regex;
use std::sync::LazyLock;

/// Matches leading enumeration on a line: `1.`, `2)`, `10 -`, `3:` and
/// the same with surrounding whitespace.
static ENUMERATION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\d+\s*[.):\-]\s*").expect("valid enumeration regex"));

/// Strips a leading numeric enumeration marker from a single line.
///
/// Lines without a marker are returned trimmed but otherwise unchanged.
pub fn strip_enumeration(line: &str) -> &str {
    match ENUMERATION_PATTERN.find(line) {
        Some(m) => line[m.end()..].trim(),
        None => line.trim(),
    }
}

/// Splits a raw completion into cleaned prompt lines.
///
/// The response is split on line breaks, each line is stripped of leading
/// enumeration, empty lines are dropped, and at most `max` lines are
/// kept. Fewer than `max` lines is accepted silently; no padding is
/// performed.
pub fn clean_prompt_lines(raw: &str, max: usize) -> Vec<String> {
    raw.lines()
        .map(strip_enumeration)
        .filter(|line| !line.is_empty())
        .take(max)
        .map(|line| line.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_enumeration_dot() {
        assert_eq!(strip_enumeration("1. Write about a tree."), "Write about a tree.");
        assert_eq!(strip_enumeration("10. Tenth prompt"), "Tenth prompt");
    }

    #[test]
    fn test_strip_enumeration_other_markers() {
        assert_eq!(strip_enumeration("2) Second"), "Second");
        assert_eq!(strip_enumeration("3: Third"), "Third");
        assert_eq!(strip_enumeration("  4 - Fourth"), "Fourth");
    }

    #[test]
    fn test_strip_enumeration_leaves_plain_lines() {
        assert_eq!(strip_enumeration("Write about a tree."), "Write about a tree.");
        assert_eq!(strip_enumeration("  padded  "), "padded");
    }

    #[test]
    fn test_strip_enumeration_does_not_eat_numeric_content() {
        // A line that merely begins with a number but has no marker.
        assert_eq!(strip_enumeration("1984 as dystopia"), "1984 as dystopia");
    }

    #[test]
    fn test_clean_prompt_lines_drops_empty_and_truncates() {
        let raw = "1. First\n\n2. Second\n   \n3. Third\n4. Fourth";
        let lines = clean_prompt_lines(raw, 3);
        assert_eq!(lines, vec!["First", "Second", "Third"]);
    }

    #[test]
    fn test_clean_prompt_lines_accepts_fewer_than_max() {
        let raw = "1. Only one";
        let lines = clean_prompt_lines(raw, 10);
        assert_eq!(lines, vec!["Only one"]);
    }

    #[test]
    fn test_clean_prompt_lines_caps_overlong_response() {
        let raw: String = (1..=15).map(|i| format!("{}. Prompt {}\n", i, i)).collect();
        let lines = clean_prompt_lines(&raw, 10);
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[9], "Prompt 10");
    }
}
