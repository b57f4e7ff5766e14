use regex::Regex;
use std::sync::LazyLock;

/// Leading deprecation markers used by the feed (`x`, `X`, optionally spaced)
static MARKER_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[xX]\s*)+").expect("marker pattern compiles"));

/// Any run of whitespace, including non-breaking space
static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern compiles"));

/// Normalize a raw tag value before it enters a facet or is compared
///
/// - Fold non-breaking spaces to plain spaces and trim
/// - Strip the leading marker run (`x`/`X`, each optionally followed by whitespace)
/// - Collapse internal whitespace runs to a single ASCII space
///
/// An empty result means the value is absent and must be discarded.
/// Applying this twice gives the same result as applying it once.
pub fn clean_tag(raw: &str) -> String {
    let folded = raw.replace('\u{00A0}', " ");
    let stripped = MARKER_RUN.replace(folded.trim(), "");
    WHITESPACE_RUN
        .replace_all(stripped.trim(), " ")
        .into_owned()
}

/// Normalize a tag and return `None` when nothing remains
pub fn clean_tag_opt(raw: &str) -> Option<String> {
    let cleaned = clean_tag(raw);
    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_glued_marker() {
        assert_eq!(clean_tag("xHistory"), "History");
        assert_eq!(clean_tag("XHistory"), "History");
    }

    #[test]
    fn test_strips_spaced_marker_and_collapses() {
        assert_eq!(clean_tag("  x  modern art "), "modern art");
        assert_eq!(clean_tag("x History"), "History");
    }

    #[test]
    fn test_collapses_non_breaking_space() {
        assert_eq!(clean_tag("Social\u{00A0}\u{00A0}Studies"), "Social Studies");
        assert_eq!(clean_tag("World \t  History"), "World History");
    }

    #[test]
    fn test_plain_values_untouched() {
        assert_eq!(clean_tag("Science"), "Science");
        assert_eq!(clean_tag("Primary Sources"), "Primary Sources");
    }

    #[test]
    fn test_empty_after_cleanup() {
        assert_eq!(clean_tag(""), "");
        assert_eq!(clean_tag("   "), "");
        assert_eq!(clean_tag("x"), "");
        assert_eq!(clean_tag(" X \u{00A0}"), "");
        assert_eq!(clean_tag_opt("x "), None);
        assert_eq!(clean_tag_opt(" Arts "), Some("Arts".to_string()));
    }

    #[test]
    fn test_idempotent() {
        let samples = [
            "xHistory",
            "  x  modern art ",
            "xxylophone",
            "x x X Music",
            "\u{00A0}x\u{00A0}Film\u{00A0}Studies\u{00A0}",
            "Plain",
            "",
            "X",
        ];

        for sample in samples {
            let once = clean_tag(sample);
            assert_eq!(clean_tag(&once), once, "not idempotent for {sample:?}");
        }
    }
}
