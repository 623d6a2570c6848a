//! Configuration file parsing utilities.
//!
//! Helpers shared by the `settings.conf` and `theme.conf` readers.

/// What: Check if a line should be skipped (empty or comment).
///
/// Inputs:
/// - `line`: Line to check
///
/// Output:
/// - `true` if the line should be skipped, `false` otherwise
///
/// Details:
/// - Skips empty lines and lines starting with `#`, `//`, or `;`
#[must_use]
pub fn skip_comment_or_empty(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty()
        || trimmed.starts_with('#')
        || trimmed.starts_with("//")
        || trimmed.starts_with(';')
}

/// What: Split a `key = value` line.
///
/// Inputs:
/// - `line`: Line containing key=value format
///
/// Output:
/// - `Some((key, value))` with both sides trimmed; `None` without `=` or with an empty key
///
/// Details:
/// - Splits on the first `=` so values may contain `=` themselves
#[must_use]
pub fn parse_key_value(line: &str) -> Option<(&str, &str)> {
    let (key, value) = line.trim().split_once('=')?;
    let key = key.trim();
    if key.is_empty() {
        return None;
    }
    Some((key, value.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Comment styles and blank lines are skipped
    fn config_skip_comment_or_empty() {
        assert!(skip_comment_or_empty("   "));
        assert!(skip_comment_or_empty("# note"));
        assert!(skip_comment_or_empty("// note"));
        assert!(skip_comment_or_empty("; note"));
        assert!(!skip_comment_or_empty("key = value"));
    }

    #[test]
    /// What: Key/value splitting trims and keeps later `=` in the value
    fn config_parse_key_value() {
        assert_eq!(parse_key_value(" a = b "), Some(("a", "b")));
        assert_eq!(parse_key_value("url = x?y=z"), Some(("url", "x?y=z")));
        assert_eq!(parse_key_value("novalue ="), Some(("novalue", "")));
        assert_eq!(parse_key_value("= orphan"), None);
        assert_eq!(parse_key_value("no separator"), None);
    }
}
