use std::collections::HashSet;

use crate::models::Item;

/// Check parsed items for problems that do not stop browsing
///
/// Returns Ok(()) if clean, or Err(Vec<String>) with one warning per problem.
/// Items are still usable either way; empty names simply land in `#`.
pub fn validate_items(items: &[Item]) -> Result<(), Vec<String>> {
    let mut warnings = Vec::new();
    let mut names = HashSet::new();

    for (idx, item) in items.iter().enumerate() {
        let item_ref = format!("Item #{} ('{}')", idx + 1, item.name());

        if item.name().is_empty() {
            warnings.push(format!("{item_ref}: name is empty"));
            continue;
        }

        if !names.insert(item.name().to_lowercase()) {
            warnings.push(format!("{item_ref}: duplicate name"));
        }

        if item.tag1().is_empty() && item.tags().is_empty() {
            warnings.push(format!(
                "{item_ref}: has no tags and can only be found by letter or provider"
            ));
        }
    }

    if warnings.is_empty() {
        Ok(())
    } else {
        Err(warnings)
    }
}
