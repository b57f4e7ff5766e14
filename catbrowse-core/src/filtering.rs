use crate::config::EngineConfig;
use crate::models::{Dimension, FilterState, Item};

/// Check a single facet predicate
///
/// Inactive selections and dimensions disabled by the configuration are
/// vacuously true.
pub fn matches_dimension(
    item: &Item,
    state: &FilterState,
    config: &EngineConfig,
    dimension: Dimension,
) -> bool {
    if !config.is_enabled(dimension) {
        return true;
    }

    let slots = config.primary_slots;
    match dimension {
        Dimension::Tag1 => state
            .tag1()
            .value()
            .is_none_or(|v| item.has_primary(v, slots)),
        Dimension::Tag2 => state
            .tag2()
            .value()
            .is_none_or(|v| item.has_secondary(v, slots)),
        Dimension::Tag3 => state
            .tag3()
            .value()
            .is_none_or(|v| item.has_secondary(v, slots)),
        Dimension::Provider => state.provider().value().is_none_or(|v| item.provider() == v),
        Dimension::Letter => state.letter().is_none_or(|l| item.first_letter() == l),
    }
}

/// Check if an item matches every active facet (AND semantics)
pub fn matches_filters(item: &Item, state: &FilterState, config: &EngineConfig) -> bool {
    Dimension::ALL
        .iter()
        .all(|d| matches_dimension(item, state, config, *d))
}

/// Check if an item matches every active facet except `skip`
pub fn matches_except(
    item: &Item,
    state: &FilterState,
    config: &EngineConfig,
    skip: Dimension,
) -> bool {
    Dimension::ALL
        .iter()
        .filter(|d| **d != skip)
        .all(|d| matches_dimension(item, state, config, *d))
}

/// Apply filters to a list of items, keeping input order
pub fn apply_filters<'a>(
    items: &'a [Item],
    state: &FilterState,
    config: &EngineConfig,
) -> Vec<&'a Item> {
    items
        .iter()
        .filter(|item| matches_filters(item, state, config))
        .collect()
}

/// Number of items passing the active filters
pub fn result_count(items: &[Item], state: &FilterState, config: &EngineConfig) -> usize {
    items
        .iter()
        .filter(|item| matches_filters(item, state, config))
        .count()
}

/// Check if any selection differs from its default
pub fn has_filters(state: &FilterState) -> bool {
    !state.is_default()
}

/// Pluralized result label, e.g. `1 database found`
pub fn count_label(count: usize) -> String {
    let suffix = if count == 1 { "" } else { "s" };
    format!("{count} database{suffix} found")
}
