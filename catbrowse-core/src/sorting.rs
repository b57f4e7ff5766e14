use regex::Regex;
use std::cmp::Ordering;
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;

use crate::models::Item;

static LEADING_ARTICLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?i)(the|a|an|der|die|das|le|la|les|el|los|las|il|lo|gli|un|une|een)\s+")
        .expect("article pattern compiles")
});

/// Sort items by name using library conventions
///
/// Leading articles are ignored, Unicode is compared in decomposed lowercase
/// form, and ties fall back to the raw name.
pub fn sort_items(items: &mut [&Item]) {
    items.sort_by(|a, b| compare_names(a.name(), b.name()));
}

fn compare_names(a: &str, b: &str) -> Ordering {
    normalize_for_sorting(a)
        .cmp(&normalize_for_sorting(b))
        .then_with(|| a.cmp(b))
}

/// Normalize a name into its sort key
/// - Strip leading articles (a, an, the and common non-English ones)
/// - NFD decomposition, then lowercase
/// - Collapse whitespace
pub fn normalize_for_sorting(s: &str) -> String {
    let without_articles = strip_leading_articles(s.trim());
    let normalized: String = without_articles.nfd().collect::<String>().to_lowercase();
    normalized.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Strip one leading article, case-insensitively
pub fn strip_leading_articles(s: &str) -> String {
    LEADING_ARTICLE.replace(s, "").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_leading_articles() {
        assert_eq!(strip_leading_articles("The New York Times"), "New York Times");
        assert_eq!(strip_leading_articles("an Atlas"), "Atlas");
        assert_eq!(strip_leading_articles("Theory of Music"), "Theory of Music");
    }

    #[test]
    fn test_normalize_for_sorting() {
        assert_eq!(normalize_for_sorting("  The  Économiste "), "e\u{301}conomiste");
        assert_eq!(normalize_for_sorting("JSTOR"), "jstor");
    }

    #[test]
    fn test_sort_items_ignores_articles_and_case() {
        let items = vec![
            Item::new("The Zoology Index"),
            Item::new("britannica"),
            Item::new("An Atlas of Maps"),
            Item::new("Chronicle"),
        ];
        let mut refs: Vec<&Item> = items.iter().collect();

        sort_items(&mut refs);

        let names: Vec<&str> = refs.iter().map(|i| i.name()).collect();
        assert_eq!(
            names,
            ["An Atlas of Maps", "britannica", "Chronicle", "The Zoology Index"]
        );
    }
}
