use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

use crate::config::EngineConfig;
use crate::models::{Dimension, FilterState, Item, Letter, Selection};

/// Secondary values under one primary value, each with its tertiary values
type SecondaryTree = BTreeMap<String, BTreeSet<String>>;

/// Legal values of every facet, derived from the full item list
///
/// Independent of the current selections. Rebuild it whenever the item list
/// changes. All value lists come out in ascending lexicographic order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FacetCatalog {
    tag1_values: BTreeSet<String>,
    tag_tree: BTreeMap<String, SecondaryTree>,
    provider_values: BTreeSet<String>,
    available_letters: BTreeSet<Letter>,
}

impl FacetCatalog {
    /// Build the catalog for `items`
    pub fn build(items: &[Item], config: &EngineConfig) -> Self {
        let slots = config.primary_slots;
        let mut catalog = FacetCatalog::default();

        for item in items {
            catalog.available_letters.insert(item.first_letter());

            if !item.provider().is_empty() {
                catalog.provider_values.insert(item.provider().to_string());
            }

            let pool: BTreeSet<&str> = item.secondary_values(slots).collect();
            for primary in item.primary_values(slots) {
                catalog.tag1_values.insert(primary.to_string());
                let secondaries = catalog.tag_tree.entry(primary.to_string()).or_default();

                for &secondary in &pool {
                    let tertiaries = secondaries.entry(secondary.to_string()).or_default();
                    tertiaries.extend(
                        pool.iter()
                            .filter(|t| **t != secondary)
                            .map(|t| t.to_string()),
                    );
                }
            }
        }

        tracing::info!(
            items = items.len(),
            primary_tags = catalog.tag1_values.len(),
            providers = catalog.provider_values.len(),
            letters = catalog.available_letters.len(),
            "built facet catalog"
        );

        catalog
    }

    pub fn tag1_values(&self) -> &BTreeSet<String> {
        &self.tag1_values
    }

    pub fn provider_values(&self) -> &BTreeSet<String> {
        &self.provider_values
    }

    pub fn available_letters(&self) -> &BTreeSet<Letter> {
        &self.available_letters
    }

    /// Tag values reachable below an upstream path of 0 to 2 concrete tags
    ///
    /// An empty path lists the primary values. A longer path lists the values
    /// found on items carrying every tag of the path, minus the path's last tag.
    pub fn tag_values(&self, path: &[&str]) -> Vec<&str> {
        match path {
            [] => self.tag1_values.iter().map(String::as_str).collect(),
            [t1] => self
                .tag_tree
                .get(*t1)
                .map(|tree| tree.keys().map(String::as_str).collect())
                .unwrap_or_default(),
            [t1, t2] => self
                .tag_tree
                .get(*t1)
                .and_then(|tree| tree.get(*t2))
                .map(|set| set.iter().map(String::as_str).collect())
                .unwrap_or_default(),
            _ => Vec::new(),
        }
    }

    /// Secondary options once a primary tag is chosen; empty for `all`
    pub fn tag2_values_for(&self, tag1: &Selection) -> Vec<&str> {
        match tag1.value() {
            Some(t1) => self.tag_values(&[t1]),
            None => Vec::new(),
        }
    }

    /// Tertiary options once both upstream tags are chosen; empty otherwise
    pub fn tag3_values_for(&self, tag1: &Selection, tag2: &Selection) -> Vec<&str> {
        match (tag1.value(), tag2.value()) {
            (Some(t1), Some(t2)) => self.tag_values(&[t1, t2]),
            _ => Vec::new(),
        }
    }

    /// Option list a control for `dimension` shows under the current upstream selections
    ///
    /// Letters are not listed here; the alphabet bar always shows every letter.
    pub fn options(
        &self,
        dimension: Dimension,
        state: &FilterState,
        config: &EngineConfig,
    ) -> Vec<String> {
        if !config.is_enabled(dimension) {
            return Vec::new();
        }

        let values = match dimension {
            Dimension::Tag1 => self.tag_values(&[]),
            Dimension::Tag2 => self.tag2_values_for(state.tag1()),
            Dimension::Tag3 => self.tag3_values_for(state.tag1(), state.tag2()),
            Dimension::Provider => self.provider_values.iter().map(String::as_str).collect(),
            Dimension::Letter => Vec::new(),
        };
        values.into_iter().map(str::to_string).collect()
    }
}
