//! Engine and feed configuration
//!
//! The catalog has gone through several revisions that differ in how deep the
//! tag hierarchy goes, whether `tag2` is a second primary slot, and how the
//! alphabet bar reacts to a selected letter. These knobs select a variant
//! instead of forking the engine.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::models::Dimension;

/// How many tag levels the hierarchy exposes (1 to 3)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct TagDepth(u8);

impl TagDepth {
    pub const MAX: TagDepth = TagDepth(3);

    /// Number of tag levels
    pub fn levels(self) -> usize {
        usize::from(self.0)
    }
}

impl Default for TagDepth {
    fn default() -> Self {
        TagDepth::MAX
    }
}

impl TryFrom<u8> for TagDepth {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if (1..=3).contains(&value) {
            Ok(TagDepth(value))
        } else {
            Err(format!("tag_depth must be between 1 and 3, got {value}"))
        }
    }
}

impl From<TagDepth> for u8 {
    fn from(depth: TagDepth) -> Self {
        depth.0
    }
}

/// Whether `tag2` is matched by the primary control alongside `tag1`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrimarySlots {
    /// Only `tag1` is primary; `tag2` joins the secondary pool
    #[default]
    Single,
    /// `tag1` and `tag2` are interchangeable primary slots
    Either,
}

/// How the alphabet bar is computed while a letter is selected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LetterAvailability {
    /// The selected letter never narrows its own availability
    #[default]
    Frozen,
    /// Letters are taken from the fully filtered result
    Narrowed,
}

/// Behavioral variant of the filter engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub tag_depth: TagDepth,
    pub primary_slots: PrimarySlots,
    pub letter_availability: LetterAvailability,
}

impl EngineConfig {
    /// Whether a dimension takes part in filtering under this configuration
    pub fn is_enabled(&self, dimension: Dimension) -> bool {
        dimension
            .tag_level()
            .is_none_or(|level| level < self.tag_depth.levels())
    }

    /// Enabled dimensions in control order
    pub fn dimensions(&self) -> impl Iterator<Item = Dimension> + '_ {
        Dimension::ALL
            .into_iter()
            .filter(move |d| self.is_enabled(*d))
    }
}

/// Column positions of a tab-separated catalog feed
///
/// Columns 0 to 4 are always name, provider, image URL, database URL and
/// description. Every column after the last tag column is a free tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedLayout {
    pub tag1_column: usize,
    pub tag2_column: Option<usize>,
}

impl Default for FeedLayout {
    fn default() -> Self {
        Self {
            tag1_column: 5,
            tag2_column: None,
        }
    }
}

impl FeedLayout {
    /// First column holding free tags
    pub fn tags_start(&self) -> usize {
        self.tag2_column
            .map_or(self.tag1_column, |c| c.max(self.tag1_column))
            + 1
    }

    /// Reject layouts whose tag columns overlap the fixed columns or each other
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.tag1_column < 5 {
            return Err(CoreError::InvalidConfig(format!(
                "tag1_column {} overlaps the fixed columns 0-4",
                self.tag1_column
            )));
        }
        if let Some(col) = self.tag2_column {
            if col < 5 || col == self.tag1_column {
                return Err(CoreError::InvalidConfig(format!(
                    "tag2_column {col} overlaps another column"
                )));
            }
        }
        Ok(())
    }
}

/// Complete configuration file: `[engine]` and `[feed]` tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BrowserConfig {
    pub engine: EngineConfig,
    pub feed: FeedLayout,
}

impl BrowserConfig {
    /// Parse and validate a TOML configuration
    pub fn from_toml_str(text: &str) -> Result<Self, CoreError> {
        let config: BrowserConfig = toml::from_str(text)?;
        config.feed.validate()?;
        Ok(config)
    }
}
