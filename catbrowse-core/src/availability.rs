//! Which facet options still lead somewhere
//!
//! An option is enabled when picking it would leave at least one item,
//! judged against every other active facet ("what if this one were free").
//! When no other facet is active the unfiltered catalog answers directly.

use serde::Serialize;
use std::collections::BTreeSet;

use crate::catalog::FacetCatalog;
use crate::config::{EngineConfig, LetterAvailability};
use crate::filtering::{matches_except, matches_filters};
use crate::models::{Dimension, FilterState, Item, Letter};

/// One entry of a facet control
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacetOption {
    pub value: String,
    pub enabled: bool,
    pub selected: bool,
}

/// Whether any enabled dimension other than `dimension` has a selection
pub fn other_facets_active(
    dimension: Dimension,
    state: &FilterState,
    config: &EngineConfig,
) -> bool {
    config
        .dimensions()
        .filter(|d| *d != dimension)
        .any(|d| state.is_active(d))
}

/// Values of `dimension` that keep the result non-empty
pub fn available_values(
    dimension: Dimension,
    items: &[Item],
    state: &FilterState,
    catalog: &FacetCatalog,
    config: &EngineConfig,
) -> BTreeSet<String> {
    if dimension == Dimension::Letter {
        return available_letters(items, state, catalog, config)
            .into_iter()
            .map(|l| l.to_string())
            .collect();
    }
    if !config.is_enabled(dimension) {
        return BTreeSet::new();
    }

    if !other_facets_active(dimension, state, config) {
        return catalog.options(dimension, state, config).into_iter().collect();
    }

    let slots = config.primary_slots;
    let mut values = BTreeSet::new();
    for item in items
        .iter()
        .filter(|item| matches_except(item, state, config, dimension))
    {
        match dimension {
            Dimension::Tag1 => values.extend(item.primary_values(slots).map(str::to_string)),
            Dimension::Tag2 | Dimension::Tag3 => {
                values.extend(item.secondary_values(slots).map(str::to_string))
            }
            Dimension::Provider => {
                if !item.provider().is_empty() {
                    values.insert(item.provider().to_string());
                }
            }
            Dimension::Letter => {}
        }
    }
    values
}

/// Letters of the alphabet bar that keep the result non-empty
///
/// With [`LetterAvailability::Frozen`] the selected letter is left free, so
/// choosing a letter never disables its neighbours. With
/// [`LetterAvailability::Narrowed`] the fully filtered result decides.
pub fn available_letters(
    items: &[Item],
    state: &FilterState,
    catalog: &FacetCatalog,
    config: &EngineConfig,
) -> BTreeSet<Letter> {
    if !other_facets_active(Dimension::Letter, state, config) {
        return catalog.available_letters().clone();
    }

    items
        .iter()
        .filter(|item| match config.letter_availability {
            LetterAvailability::Frozen => matches_except(item, state, config, Dimension::Letter),
            LetterAvailability::Narrowed => matches_filters(item, state, config),
        })
        .map(Item::first_letter)
        .collect()
}

/// Options a control for `dimension` displays, each flagged enabled/selected
///
/// For the letter dimension this is the full alphabet bar (`#`, `A`..`Z`).
pub fn available_options(
    dimension: Dimension,
    items: &[Item],
    state: &FilterState,
    catalog: &FacetCatalog,
    config: &EngineConfig,
) -> Vec<FacetOption> {
    if dimension == Dimension::Letter {
        let enabled = available_letters(items, state, catalog, config);
        return Letter::alphabet()
            .map(|letter| FacetOption {
                value: letter.to_string(),
                enabled: enabled.contains(&letter),
                selected: state.letter() == Some(letter),
            })
            .collect();
    }

    let enabled = available_values(dimension, items, state, catalog, config);
    let selection = state.selection(dimension);
    catalog
        .options(dimension, state, config)
        .into_iter()
        .map(|value| FacetOption {
            enabled: enabled.contains(&value),
            selected: selection.is_some_and(|s| s.is(&value)),
            value,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filtering::apply_filters;

    fn scenario_items() -> Vec<Item> {
        vec![
            Item::new("Alpha").with_tag1("Science"),
            Item::new("Beta")
                .with_provider("Acme")
                .with_tag1("Arts")
                .with_tags(["x History"]),
        ]
    }

    fn letters(set: &BTreeSet<Letter>) -> String {
        set.iter().map(|l| l.as_char()).collect()
    }

    #[test]
    fn test_unfiltered_regime_uses_catalog() {
        let items = scenario_items();
        let config = EngineConfig::default();
        let catalog = FacetCatalog::build(&items, &config);
        let state = FilterState::new();

        assert_eq!(letters(&available_letters(&items, &state, &catalog, &config)), "AB");
        let providers = available_values(Dimension::Provider, &items, &state, &catalog, &config);
        assert_eq!(providers.into_iter().collect::<Vec<_>>(), ["Acme"]);
    }

    #[test]
    fn test_letters_narrow_once_a_tag_is_chosen() {
        let items = scenario_items();
        let config = EngineConfig::default();
        let catalog = FacetCatalog::build(&items, &config);
        let mut state = FilterState::new();
        state.set_selection(Dimension::Tag1, "Science");

        assert_eq!(letters(&available_letters(&items, &state, &catalog, &config)), "A");
    }

    #[test]
    fn test_own_selection_does_not_disable_siblings() {
        let items = scenario_items();
        let config = EngineConfig::default();
        let catalog = FacetCatalog::build(&items, &config);
        let mut state = FilterState::new();
        state.set_selection(Dimension::Tag1, "Science");

        let options = available_options(Dimension::Tag1, &items, &state, &catalog, &config);
        assert!(options.iter().all(|o| o.enabled));
        assert!(options.iter().any(|o| o.value == "Science" && o.selected));
    }

    #[test]
    fn test_provider_disables_dead_end_tags() {
        let items = scenario_items();
        let config = EngineConfig::default();
        let catalog = FacetCatalog::build(&items, &config);
        let mut state = FilterState::new();
        state.set_selection(Dimension::Provider, "Acme");

        let options = available_options(Dimension::Tag1, &items, &state, &catalog, &config);
        let arts = options.iter().find(|o| o.value == "Arts").unwrap();
        let science = options.iter().find(|o| o.value == "Science").unwrap();
        assert!(arts.enabled);
        assert!(!science.enabled);
    }

    #[test]
    fn test_frozen_letters_ignore_selected_letter() {
        let items = vec![
            Item::new("Alpha").with_provider("Acme"),
            Item::new("Beta").with_provider("Acme"),
            Item::new("Gamma").with_provider("Gale"),
        ];
        let config = EngineConfig::default();
        let catalog = FacetCatalog::build(&items, &config);
        let mut state = FilterState::new();
        state.set_selection(Dimension::Provider, "Acme");
        state.set_selection(Dimension::Letter, "B");

        assert_eq!(letters(&available_letters(&items, &state, &catalog, &config)), "AB");

        let narrowed = EngineConfig {
            letter_availability: LetterAvailability::Narrowed,
            ..config
        };
        assert_eq!(letters(&available_letters(&items, &state, &catalog, &narrowed)), "B");
    }

    #[test]
    fn test_letter_alone_keeps_catalog_letters() {
        let items = scenario_items();
        let config = EngineConfig {
            letter_availability: LetterAvailability::Narrowed,
            ..EngineConfig::default()
        };
        let catalog = FacetCatalog::build(&items, &config);
        let mut state = FilterState::new();
        state.set_selection(Dimension::Letter, "A");

        assert_eq!(letters(&available_letters(&items, &state, &catalog, &config)), "AB");
    }

    #[test]
    fn test_alphabet_bar_lists_every_letter() {
        let items = scenario_items();
        let config = EngineConfig::default();
        let catalog = FacetCatalog::build(&items, &config);
        let mut state = FilterState::new();
        state.set_selection(Dimension::Letter, "B");

        let bar = available_options(Dimension::Letter, &items, &state, &catalog, &config);
        assert_eq!(bar.len(), 27);
        assert_eq!(bar[0].value, "#");
        assert!(!bar[0].enabled);
        let b = bar.iter().find(|o| o.value == "B").unwrap();
        assert!(b.enabled && b.selected);
    }

    #[test]
    fn test_availability_is_sound() {
        let items = vec![
            Item::new("Alpha")
                .with_provider("Acme")
                .with_tag1("Science")
                .with_tags(["Biology", "Maps"]),
            Item::new("Bravo")
                .with_provider("Gale")
                .with_tag1("Science")
                .with_tags(["Biology"]),
            Item::new("Charlie")
                .with_provider("Acme")
                .with_tag1("History")
                .with_tags(["Maps"]),
        ];
        let config = EngineConfig::default();
        let catalog = FacetCatalog::build(&items, &config);
        let mut state = FilterState::new();
        state.set_selection(Dimension::Tag1, "Science");
        state.set_selection(Dimension::Tag2, "Biology");
        state.set_selection(Dimension::Provider, "Acme");

        for dimension in config.dimensions() {
            for option in available_options(dimension, &items, &state, &catalog, &config) {
                if !option.enabled {
                    continue;
                }
                let witnessed = items.iter().any(|i| {
                    matches_except(i, &state, &config, dimension)
                        && witness(i, dimension, &option.value, &config)
                });
                assert!(witnessed, "{dimension}={} has no witness", option.value);
            }
        }

        assert!(!apply_filters(&items, &state, &config).is_empty());
    }

    fn witness(item: &Item, dimension: Dimension, value: &str, config: &EngineConfig) -> bool {
        let slots = config.primary_slots;
        match dimension {
            Dimension::Tag1 => item.has_primary(value, slots),
            Dimension::Tag2 | Dimension::Tag3 => item.has_secondary(value, slots),
            Dimension::Provider => item.provider() == value,
            Dimension::Letter => item.first_letter().to_string() == value,
        }
    }
}
