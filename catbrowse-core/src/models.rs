use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::config::PrimarySlots;
use crate::normalize::{clean_tag, clean_tag_opt};

/// First-letter index bucket: `A`..=`Z`, or `#` for anything else
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Letter(char);

impl Letter {
    /// Bucket for names that do not start with an ASCII letter
    pub const OTHER: Letter = Letter('#');

    /// Letter bucket of a name: uppercased first character, `#` unless in `A`..=`Z`
    ///
    /// Uppercasing comes first, so `ı` lands on `I` and `ſ` on `S`.
    pub fn of(name: &str) -> Letter {
        match name
            .trim()
            .chars()
            .next()
            .and_then(|c| c.to_uppercase().next())
        {
            Some(c) if c.is_ascii_uppercase() => Letter(c),
            _ => Letter::OTHER,
        }
    }

    /// Parse a letter button label
    ///
    /// Empty labels and `all` (any case) mean "no letter selected".
    pub fn parse(label: &str) -> Option<Letter> {
        let label = label.trim();
        if label.is_empty() || label.eq_ignore_ascii_case("all") {
            None
        } else {
            Some(Letter::of(label))
        }
    }

    /// The full alphabet bar in display order: `#`, then `A` to `Z`
    pub fn alphabet() -> impl Iterator<Item = Letter> {
        std::iter::once('#').chain('A'..='Z').map(Letter)
    }

    pub fn as_char(self) -> char {
        self.0
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Letter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One catalog entry, built once from a parsed feed row
///
/// Tag fields are normalized on the way in and empty tags are dropped, so
/// every value an item exposes is already comparable against facet values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    name: String,
    provider: String,
    image_url: String,
    database_url: String,
    description: String,
    tag1: String,
    tag2: String,
    tags: Vec<String>,
}

impl Item {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into().trim().to_string(),
            provider: String::new(),
            image_url: String::new(),
            database_url: String::new(),
            description: String::new(),
            tag1: String::new(),
            tag2: String::new(),
            tags: Vec::new(),
        }
    }

    pub fn with_provider(mut self, provider: &str) -> Self {
        self.provider = provider.trim().to_string();
        self
    }

    pub fn with_links(mut self, image_url: &str, database_url: &str) -> Self {
        self.image_url = image_url.trim().to_string();
        self.database_url = database_url.trim().to_string();
        self
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.trim().to_string();
        self
    }

    pub fn with_tag1(mut self, raw: &str) -> Self {
        self.tag1 = clean_tag(raw);
        self
    }

    pub fn with_tag2(mut self, raw: &str) -> Self {
        self.tag2 = clean_tag(raw);
        self
    }

    /// Set the free tags; each is normalized and empty ones are discarded
    pub fn with_tags<I, S>(mut self, raw: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.tags = raw
            .into_iter()
            .filter_map(|t| clean_tag_opt(t.as_ref()))
            .collect();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn provider(&self) -> &str {
        &self.provider
    }

    pub fn image_url(&self) -> &str {
        &self.image_url
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn tag1(&self) -> &str {
        &self.tag1
    }

    pub fn tag2(&self) -> &str {
        &self.tag2
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Letter bucket, always derived from the current name
    pub fn first_letter(&self) -> Letter {
        Letter::of(&self.name)
    }

    /// Label used in listings: `Name (Provider)` when a provider is known
    pub fn display_name(&self) -> String {
        if self.provider.is_empty() {
            self.name.clone()
        } else {
            format!("{} ({})", self.name, self.provider)
        }
    }

    /// Values this item offers to the primary tag facet
    pub fn primary_values(&self, slots: PrimarySlots) -> impl Iterator<Item = &str> {
        let second = match slots {
            PrimarySlots::Single => None,
            PrimarySlots::Either => Some(self.tag2.as_str()),
        };
        std::iter::once(self.tag1.as_str())
            .chain(second)
            .filter(|v| !v.is_empty())
    }

    /// Values this item offers to the secondary and tertiary tag facets
    pub fn secondary_values(&self, slots: PrimarySlots) -> impl Iterator<Item = &str> {
        let second = match slots {
            PrimarySlots::Single => Some(self.tag2.as_str()),
            PrimarySlots::Either => None,
        };
        second
            .into_iter()
            .chain(self.tags.iter().map(String::as_str))
            .filter(|v| !v.is_empty())
    }

    pub fn has_primary(&self, value: &str, slots: PrimarySlots) -> bool {
        self.primary_values(slots).any(|v| v == value)
    }

    pub fn has_secondary(&self, value: &str, slots: PrimarySlots) -> bool {
        self.secondary_values(slots).any(|v| v == value)
    }
}

/// Value of a single-choice facet control
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Selection {
    /// No constraint
    #[default]
    All,
    /// Exact-match constraint
    Only(String),
}

impl Selection {
    /// Interpret a control value; empty and `all` (any case) mean no constraint
    pub fn from_label(label: &str) -> Self {
        let label = label.trim();
        if label.is_empty() || label.eq_ignore_ascii_case("all") {
            Selection::All
        } else {
            Selection::Only(label.to_string())
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Selection::All)
    }

    pub fn value(&self) -> Option<&str> {
        match self {
            Selection::All => None,
            Selection::Only(v) => Some(v),
        }
    }

    /// Whether `candidate` equals the selected value
    pub fn is(&self, candidate: &str) -> bool {
        self.value() == Some(candidate)
    }
}

impl From<&str> for Selection {
    fn from(label: &str) -> Self {
        Selection::from_label(label)
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::All => write!(f, "all"),
            Selection::Only(v) => write!(f, "{v}"),
        }
    }
}

impl Serialize for Selection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A filterable dimension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Tag1,
    Tag2,
    Tag3,
    Provider,
    Letter,
}

impl Dimension {
    pub const ALL: [Dimension; 5] = [
        Dimension::Tag1,
        Dimension::Tag2,
        Dimension::Tag3,
        Dimension::Provider,
        Dimension::Letter,
    ];

    /// Position in the tag hierarchy (0 for tag1), `None` for non-tag facets
    pub fn tag_level(self) -> Option<usize> {
        match self {
            Dimension::Tag1 => Some(0),
            Dimension::Tag2 => Some(1),
            Dimension::Tag3 => Some(2),
            Dimension::Provider | Dimension::Letter => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Dimension::Tag1 => "tag1",
            Dimension::Tag2 => "tag2",
            Dimension::Tag3 => "tag3",
            Dimension::Provider => "provider",
            Dimension::Letter => "letter",
        }
    }

    /// Placeholder text of the "all" option in a control
    pub fn all_label(self) -> &'static str {
        match self {
            Dimension::Tag1 => "All Primary Tags",
            Dimension::Tag2 => "All Secondary Tags",
            Dimension::Tag3 => "All Tags",
            Dimension::Provider => "All Providers",
            Dimension::Letter => "All",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dimension {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tag1" | "primary" => Ok(Dimension::Tag1),
            "tag2" | "secondary" => Ok(Dimension::Tag2),
            "tag3" | "tertiary" => Ok(Dimension::Tag3),
            "provider" => Ok(Dimension::Provider),
            "letter" => Ok(Dimension::Letter),
            other => Err(format!(
                "unknown dimension '{other}' (expected tag1, tag2, tag3, provider or letter)"
            )),
        }
    }
}

/// Current facet selections of one browsing session
///
/// Only [`FilterState::set_selection`] and [`FilterState::clear`] mutate it,
/// which keeps the cascade rules in one place.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct FilterState {
    tag1: Selection,
    tag2: Selection,
    tag3: Selection,
    provider: Selection,
    letter: Option<Letter>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tag1(&self) -> &Selection {
        &self.tag1
    }

    pub fn tag2(&self) -> &Selection {
        &self.tag2
    }

    pub fn tag3(&self) -> &Selection {
        &self.tag3
    }

    pub fn provider(&self) -> &Selection {
        &self.provider
    }

    pub fn letter(&self) -> Option<Letter> {
        self.letter
    }

    /// Selection of a tag or provider dimension; `None` for the letter
    pub fn selection(&self, dimension: Dimension) -> Option<&Selection> {
        match dimension {
            Dimension::Tag1 => Some(&self.tag1),
            Dimension::Tag2 => Some(&self.tag2),
            Dimension::Tag3 => Some(&self.tag3),
            Dimension::Provider => Some(&self.provider),
            Dimension::Letter => None,
        }
    }

    pub fn is_active(&self, dimension: Dimension) -> bool {
        match dimension {
            Dimension::Letter => self.letter.is_some(),
            other => self.selection(other).is_some_and(|s| !s.is_all()),
        }
    }

    /// Update one dimension and apply the cascade
    ///
    /// - tag1 resets tag2 and tag3
    /// - tag2 resets tag3
    /// - any tag or provider change clears the letter
    /// - a letter change leaves tags and provider alone
    pub fn set_selection(&mut self, dimension: Dimension, value: &str) {
        match dimension {
            Dimension::Tag1 => {
                self.tag1 = Selection::from_label(value);
                self.tag2 = Selection::All;
                self.tag3 = Selection::All;
                self.letter = None;
            }
            Dimension::Tag2 => {
                self.tag2 = Selection::from_label(value);
                self.tag3 = Selection::All;
                self.letter = None;
            }
            Dimension::Tag3 => {
                self.tag3 = Selection::from_label(value);
                self.letter = None;
            }
            Dimension::Provider => {
                self.provider = Selection::from_label(value);
                self.letter = None;
            }
            Dimension::Letter => {
                self.letter = Letter::parse(value);
            }
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_letter_is_derived_from_name() {
        assert_eq!(Item::new("alpha").first_letter(), Letter('A'));
        assert_eq!(Item::new("  Zeta").first_letter(), Letter('Z'));
        assert_eq!(Item::new("3D Atlas").first_letter(), Letter::OTHER);
        assert_eq!(Item::new("Élan").first_letter(), Letter::OTHER);
        assert_eq!(Item::new("ıçin").first_letter(), Letter('I'));
        assert_eq!(Item::new("ſtar").first_letter(), Letter('S'));
        assert_eq!(Item::new("").first_letter(), Letter::OTHER);
    }

    #[test]
    fn test_letter_parse() {
        assert_eq!(Letter::parse("b"), Some(Letter('B')));
        assert_eq!(Letter::parse("#"), Some(Letter::OTHER));
        assert_eq!(Letter::parse("7"), Some(Letter::OTHER));
        assert_eq!(Letter::parse("All"), None);
        assert_eq!(Letter::parse(""), None);
    }

    #[test]
    fn test_alphabet_order() {
        let letters: String = Letter::alphabet().map(Letter::as_char).collect();
        assert_eq!(letters, "#ABCDEFGHIJKLMNOPQRSTUVWXYZ");
    }

    #[test]
    fn test_item_normalizes_tags() {
        let item = Item::new("Beta")
            .with_tag1(" xArts ")
            .with_tags(["x History", "", "  ", "Music"]);

        assert_eq!(item.tag1(), "Arts");
        assert_eq!(item.tags(), ["History", "Music"]);
    }

    #[test]
    fn test_primary_and_secondary_slots() {
        let item = Item::new("Gale")
            .with_tag1("Science")
            .with_tag2("History")
            .with_tags(["Biology"]);

        let single: Vec<_> = item.primary_values(PrimarySlots::Single).collect();
        assert_eq!(single, ["Science"]);
        let secondary: Vec<_> = item.secondary_values(PrimarySlots::Single).collect();
        assert_eq!(secondary, ["History", "Biology"]);

        let either: Vec<_> = item.primary_values(PrimarySlots::Either).collect();
        assert_eq!(either, ["Science", "History"]);
        let secondary: Vec<_> = item.secondary_values(PrimarySlots::Either).collect();
        assert_eq!(secondary, ["Biology"]);
    }

    #[test]
    fn test_display_name() {
        assert_eq!(Item::new("Alpha").display_name(), "Alpha");
        assert_eq!(
            Item::new("Beta").with_provider("Acme").display_name(),
            "Beta (Acme)"
        );
    }

    #[test]
    fn test_selection_labels() {
        assert_eq!(Selection::from_label("all"), Selection::All);
        assert_eq!(Selection::from_label("  "), Selection::All);
        assert_eq!(Selection::from_label("All"), Selection::All);
        assert_eq!(Selection::from_label(" ALL "), Selection::All);
        assert_eq!(
            Selection::from_label("  Science "),
            Selection::Only("Science".to_string())
        );
        assert_eq!(
            Selection::from_label("Science"),
            Selection::Only("Science".to_string())
        );
        assert!(Selection::from("Arts").is("Arts"));
        assert!(!Selection::All.is("Arts"));
    }

    #[test]
    fn test_dimension_from_str() {
        assert_eq!("tag1".parse::<Dimension>(), Ok(Dimension::Tag1));
        assert_eq!("Secondary".parse::<Dimension>(), Ok(Dimension::Tag2));
        assert_eq!("provider".parse::<Dimension>(), Ok(Dimension::Provider));
        assert!("color".parse::<Dimension>().is_err());
    }

    #[test]
    fn test_tag1_cascade_resets_downstream() {
        let mut state = FilterState::new();
        state.set_selection(Dimension::Tag1, "Science");
        state.set_selection(Dimension::Tag2, "History");
        state.set_selection(Dimension::Tag3, "Maps");
        state.set_selection(Dimension::Letter, "B");

        state.set_selection(Dimension::Tag1, "Arts");

        assert!(state.tag1().is("Arts"));
        assert!(state.tag2().is_all());
        assert!(state.tag3().is_all());
        assert_eq!(state.letter(), None);
    }

    #[test]
    fn test_tag2_cascade_keeps_tag1() {
        let mut state = FilterState::new();
        state.set_selection(Dimension::Tag1, "Science");
        state.set_selection(Dimension::Tag2, "History");
        state.set_selection(Dimension::Tag3, "Maps");

        state.set_selection(Dimension::Tag2, "Biology");

        assert!(state.tag1().is("Science"));
        assert!(state.tag2().is("Biology"));
        assert!(state.tag3().is_all());
    }

    #[test]
    fn test_letter_does_not_touch_facets() {
        let mut state = FilterState::new();
        state.set_selection(Dimension::Provider, "Acme");
        state.set_selection(Dimension::Letter, "b");

        assert!(state.provider().is("Acme"));
        assert_eq!(state.letter(), Letter::parse("B"));

        state.set_selection(Dimension::Letter, "all");
        assert_eq!(state.letter(), None);
        assert!(state.provider().is("Acme"));
    }

    #[test]
    fn test_every_facet_edit_clears_letter() {
        for dimension in [
            Dimension::Tag1,
            Dimension::Tag2,
            Dimension::Tag3,
            Dimension::Provider,
        ] {
            let mut state = FilterState::new();
            state.set_selection(Dimension::Letter, "Q");
            state.set_selection(dimension, "anything");
            assert_eq!(state.letter(), None, "{dimension} left the letter set");
        }
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut state = FilterState::new();
        state.set_selection(Dimension::Tag1, "Science");
        state.set_selection(Dimension::Provider, "Acme");

        state.clear();
        let once = state.clone();
        state.clear();

        assert_eq!(state, once);
        assert!(state.is_default());
    }

    #[test]
    fn test_is_active() {
        let mut state = FilterState::new();
        assert!(Dimension::ALL.iter().all(|d| !state.is_active(*d)));

        state.set_selection(Dimension::Tag3, "Maps");
        assert!(state.is_active(Dimension::Tag3));
        assert!(!state.is_active(Dimension::Tag1));
    }
}
