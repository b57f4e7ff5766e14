use serde::Serialize;
use std::collections::BTreeMap;

use crate::config::PrimarySlots;
use crate::models::{Dimension, Item, Letter};

/// Group label for items without a value in the grouping facet
pub const UNSPECIFIED_GROUP: &str = "(none)";

/// Matched items sharing a first letter, in input order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LetterSection<'a> {
    pub letter: Letter,
    pub items: Vec<&'a Item>,
}

/// Group items into letter sections
///
/// Sections come out in alphabet-bar order and only non-empty sections exist.
pub fn group_by_letter<'a>(items: &[&'a Item]) -> Vec<LetterSection<'a>> {
    let mut sections: BTreeMap<Letter, Vec<&'a Item>> = BTreeMap::new();

    for item in items {
        sections.entry(item.first_letter()).or_default().push(*item);
    }

    sections
        .into_iter()
        .map(|(letter, items)| LetterSection { letter, items })
        .collect()
}

/// Group items by the values they carry for a facet
///
/// Items with multiple values for the facet appear in multiple groups.
/// Items without any value land in [`UNSPECIFIED_GROUP`].
pub fn group_by_facet<'a>(
    items: &[&'a Item],
    dimension: Dimension,
    slots: PrimarySlots,
) -> BTreeMap<String, Vec<&'a Item>> {
    let mut groups: BTreeMap<String, Vec<&'a Item>> = BTreeMap::new();

    for item in items {
        let values: Vec<String> = match dimension {
            Dimension::Tag1 => item.primary_values(slots).map(str::to_string).collect(),
            Dimension::Tag2 | Dimension::Tag3 => {
                item.secondary_values(slots).map(str::to_string).collect()
            }
            Dimension::Provider if !item.provider().is_empty() => {
                vec![item.provider().to_string()]
            }
            Dimension::Provider => Vec::new(),
            Dimension::Letter => vec![item.first_letter().to_string()],
        };

        if values.is_empty() {
            groups
                .entry(UNSPECIFIED_GROUP.to_string())
                .or_default()
                .push(*item);
        } else {
            for value in values {
                let group = groups.entry(value).or_default();
                if !group.iter().any(|existing| std::ptr::eq(*existing, *item)) {
                    group.push(*item);
                }
            }
        }
    }

    groups
}
