// Public modules
pub mod availability;
pub mod catalog;
pub mod config;
pub mod engine;
pub mod error;
pub mod filtering;
pub mod grouping;
pub mod io;
pub mod models;
pub mod normalize;
pub mod sorting;
pub mod validation;

// Re-export commonly used types for convenience
pub use availability::{available_letters, available_options, available_values, FacetOption};
pub use catalog::FacetCatalog;
pub use config::{BrowserConfig, EngineConfig, FeedLayout, LetterAvailability, PrimarySlots, TagDepth};
pub use engine::{
    FacetControl, FilterEngine, FilterView, LetterButton, SelectionEvent, TagClick, EMPTY_MESSAGE,
};
pub use error::CoreError;
pub use filtering::{
    apply_filters, count_label, has_filters, matches_except, matches_filters, result_count,
};
pub use grouping::{group_by_facet, group_by_letter, LetterSection, UNSPECIFIED_GROUP};
pub use io::{load_feed, parse_feed};
pub use models::{Dimension, FilterState, Item, Letter, Selection};
pub use normalize::clean_tag;
pub use sorting::{normalize_for_sorting, sort_items, strip_leading_articles};
pub use validation::validate_items;
