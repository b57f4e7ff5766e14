//! Browsing session over a fixed item list
//!
//! [`FilterEngine`] owns the items, their [`FacetCatalog`] and the session's
//! [`FilterState`]. Every mutation goes through it and every read derives a
//! fresh, consistent view, so matched items, option availability and the
//! count always describe the same state.
//!
//! ```
//! use catbrowse_core::{Dimension, EngineConfig, FilterEngine, Item};
//!
//! let items = vec![
//!     Item::new("Alpha").with_tag1("Science"),
//!     Item::new("Beta").with_provider("Acme").with_tag1("Arts"),
//! ];
//! let mut engine = FilterEngine::new(items, EngineConfig::default());
//!
//! engine.set_selection(Dimension::Tag1, "Science");
//! assert_eq!(engine.result_count(), 1);
//! assert_eq!(engine.view().count_label, "1 database found");
//! ```

use serde::Serialize;

use crate::availability::{available_options, FacetOption};
use crate::catalog::FacetCatalog;
use crate::config::EngineConfig;
use crate::error::CoreError;
use crate::filtering::{apply_filters, count_label, has_filters, result_count};
use crate::grouping::{group_by_letter, LetterSection};
use crate::models::{Dimension, FilterState, Item};

/// Message shown when nothing matches
pub const EMPTY_MESSAGE: &str = "No results match your filters.";

/// A user action against the filter controls
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionEvent {
    /// Pick a value (or `all`) in one control
    Select(Dimension, String),
    /// Reset every control
    Clear,
}

/// A click on a tag label of a rendered item
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagClick {
    /// The item's primary tag
    Primary(String),
    /// One of the item's other tags, remembering the item's primary tag
    Secondary { primary: String, tag: String },
}

impl TagClick {
    pub fn primary(tag: impl Into<String>) -> Self {
        TagClick::Primary(tag.into())
    }

    pub fn secondary(item: &Item, tag: impl Into<String>) -> Self {
        TagClick::Secondary {
            primary: item.tag1().to_string(),
            tag: tag.into(),
        }
    }
}

/// State of one dropdown control
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacetControl {
    pub dimension: Dimension,
    pub placeholder: &'static str,
    pub visible: bool,
    pub selected: String,
    pub options: Vec<FacetOption>,
}

/// One button of the alphabet bar
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LetterButton {
    pub label: String,
    pub enabled: bool,
    pub active: bool,
}

/// Everything a renderer needs after a state change
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterView<'a> {
    pub state: FilterState,
    pub controls: Vec<FacetControl>,
    pub alphabet: Vec<LetterButton>,
    pub sections: Vec<LetterSection<'a>>,
    pub count: usize,
    pub count_label: String,
    pub clear_enabled: bool,
    pub show_empty_message: bool,
}

impl FilterView<'_> {
    pub fn to_json(&self) -> Result<String, CoreError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Stateful faceted filter over one item list
#[derive(Debug, Clone)]
pub struct FilterEngine {
    config: EngineConfig,
    items: Vec<Item>,
    catalog: FacetCatalog,
    state: FilterState,
}

impl FilterEngine {
    /// Create a session with all selections at their defaults
    pub fn new(items: Vec<Item>, config: EngineConfig) -> Self {
        let catalog = FacetCatalog::build(&items, &config);
        Self {
            config,
            items,
            catalog,
            state: FilterState::new(),
        }
    }

    /// Swap the item list and rebuild the catalog; selections are kept
    pub fn set_items(&mut self, items: Vec<Item>) {
        self.catalog = FacetCatalog::build(&items, &self.config);
        self.items = items;
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn catalog(&self) -> &FacetCatalog {
        &self.catalog
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    /// Change one control and apply the cascade
    ///
    /// Dimensions disabled by the configured tag depth are ignored.
    pub fn set_selection(&mut self, dimension: Dimension, value: &str) -> &FilterState {
        if !self.config.is_enabled(dimension) {
            tracing::debug!(%dimension, value, "ignoring selection on disabled dimension");
            return &self.state;
        }

        let before = self.state.clone();
        self.state.set_selection(dimension, value);
        tracing::debug!(
            %dimension,
            value,
            letter_cleared = before.letter().is_some() && self.state.letter().is_none(),
            "selection changed"
        );
        &self.state
    }

    /// Reset every selection to its default
    pub fn clear(&mut self) -> &FilterState {
        tracing::debug!("filters cleared");
        self.state.clear();
        &self.state
    }

    /// Apply one user event
    pub fn apply(&mut self, event: &SelectionEvent) -> &FilterState {
        match event {
            SelectionEvent::Select(dimension, value) => self.set_selection(*dimension, value),
            SelectionEvent::Clear => self.clear(),
        }
    }

    /// Follow a tag label click
    ///
    /// A secondary tag also selects its item's primary tag so the secondary
    /// control has the clicked value among its options.
    pub fn follow_tag(&mut self, click: &TagClick) -> &FilterState {
        match click {
            TagClick::Primary(tag) => self.set_selection(Dimension::Tag1, tag),
            TagClick::Secondary { primary, tag } => {
                self.set_selection(Dimension::Tag1, primary);
                self.set_selection(Dimension::Tag2, tag)
            }
        }
    }

    pub fn matched_items(&self) -> Vec<&Item> {
        apply_filters(&self.items, &self.state, &self.config)
    }

    pub fn result_count(&self) -> usize {
        result_count(&self.items, &self.state, &self.config)
    }

    pub fn is_any_filter_active(&self) -> bool {
        has_filters(&self.state)
    }

    pub fn available_options(&self, dimension: Dimension) -> Vec<FacetOption> {
        available_options(
            dimension,
            &self.items,
            &self.state,
            &self.catalog,
            &self.config,
        )
    }

    /// Control state for a tag or provider dimension
    pub fn control(&self, dimension: Dimension) -> FacetControl {
        let options = if dimension == Dimension::Letter {
            Vec::new()
        } else {
            self.available_options(dimension)
        };
        let visible = match dimension {
            Dimension::Tag1 | Dimension::Provider => self.config.is_enabled(dimension),
            Dimension::Tag2 | Dimension::Tag3 => !options.is_empty(),
            Dimension::Letter => false,
        };

        FacetControl {
            dimension,
            placeholder: dimension.all_label(),
            visible,
            selected: self
                .state
                .selection(dimension)
                .map(ToString::to_string)
                .unwrap_or_default(),
            options,
        }
    }

    /// Alphabet bar: the "All" button followed by `#` and `A`..`Z`
    pub fn alphabet(&self) -> Vec<LetterButton> {
        let all = LetterButton {
            label: Dimension::Letter.all_label().to_string(),
            enabled: true,
            active: self.state.letter().is_none(),
        };

        std::iter::once(all)
            .chain(
                self.available_options(Dimension::Letter)
                    .into_iter()
                    .map(|option| LetterButton {
                        label: option.value,
                        enabled: option.enabled,
                        active: option.selected,
                    }),
            )
            .collect()
    }

    /// Derive the complete view for the current state
    pub fn view(&self) -> FilterView<'_> {
        let matched = self.matched_items();
        let count = matched.len();

        FilterView {
            state: self.state.clone(),
            controls: self
                .config
                .dimensions()
                .filter(|d| *d != Dimension::Letter)
                .map(|d| self.control(d))
                .collect(),
            alphabet: self.alphabet(),
            sections: group_by_letter(&matched),
            count,
            count_label: count_label(count),
            clear_enabled: self.is_any_filter_active(),
            show_empty_message: count == 0,
        }
    }
}
