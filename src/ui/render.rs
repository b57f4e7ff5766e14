use catbrowse_core::{group_by_facet, sort_items, Dimension, Item, EMPTY_MESSAGE};
use colored::Colorize;

use super::formatting::{
    control_title, format_alphabet, format_clear_button, format_control, format_item,
};
use crate::state::AppState;

/// How matched items are sectioned in text output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum GroupBy {
    /// Alphabet sections, as in the listing page
    #[default]
    Letter,
    Provider,
    /// Primary tag values
    Tag1,
}

/// Text output switches
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    pub sort_by_name: bool,
    pub group_by: GroupBy,
}

/// Render the whole browsing page for the current selections
pub fn render_page(state: &AppState, options: &RenderOptions) -> String {
    let engine = &state.engine;
    let view = engine.view();
    let slots = engine.config().primary_slots;

    let mut lines = vec![format!("# {}", state.title()).bold().to_string(), String::new()];

    for control in view.controls.iter().filter(|c| c.visible) {
        lines.push(format_control(control));
    }
    lines.push(format!(
        "{} {}",
        format!("{:<14}", "Letter:").bold(),
        format_alphabet(&view.alphabet)
    ));
    lines.push(String::new());
    lines.push(format!(
        "{}  {}",
        view.count_label.bold(),
        format_clear_button(view.clear_enabled)
    ));
    lines.push(String::new());

    if view.show_empty_message {
        lines.push(EMPTY_MESSAGE.yellow().to_string());
        return lines.join("\n");
    }

    let groups: Vec<(String, Vec<&Item>)> = match options.group_by {
        GroupBy::Letter => view
            .sections
            .iter()
            .map(|section| (section.letter.to_string(), section.items.clone()))
            .collect(),
        GroupBy::Provider | GroupBy::Tag1 => {
            let dimension = match options.group_by {
                GroupBy::Provider => Dimension::Provider,
                _ => Dimension::Tag1,
            };
            let matched = engine.matched_items();
            group_by_facet(&matched, dimension, slots)
                .into_iter()
                .map(|(name, items)| (format!("{}: {name}", control_title(dimension)), items))
                .collect()
        }
    };

    for (heading, mut items) in groups {
        if options.sort_by_name {
            sort_items(&mut items);
        }
        lines.push(format!("## {heading}").bold().to_string());
        lines.push(String::new());
        for item in items {
            lines.push(format_item(item, slots));
        }
        lines.push(String::new());
    }

    lines.join("\n").trim_end().to_string()
}
