use catbrowse_core::{Dimension, FacetControl, Item, LetterButton, PrimarySlots};
use colored::Colorize;

/// Heading for a dropdown control
pub fn control_title(dimension: Dimension) -> &'static str {
    match dimension {
        Dimension::Tag1 => "Primary tag",
        Dimension::Tag2 => "Secondary tag",
        Dimension::Tag3 => "Tertiary tag",
        Dimension::Provider => "Provider",
        Dimension::Letter => "Letter",
    }
}

/// Render one dropdown: placeholder first, then its options
///
/// The selected entry is bracketed, disabled options are dimmed.
pub fn format_control(control: &FacetControl) -> String {
    let placeholder_selected = control.selected == "all" || control.selected.is_empty();
    let placeholder = if placeholder_selected {
        format!("[{}]", control.placeholder).green().bold().to_string()
    } else {
        control.placeholder.to_string()
    };

    let entries: Vec<String> = std::iter::once(placeholder)
        .chain(control.options.iter().map(|option| {
            if option.selected {
                format!("[{}]", option.value).green().bold().to_string()
            } else if option.enabled {
                option.value.clone()
            } else {
                option.value.dimmed().to_string()
            }
        }))
        .collect();

    let title = format!("{:<14}", format!("{}:", control_title(control.dimension)));
    format!("{} {}", title.bold(), entries.join(" | "))
}

/// Render the alphabet bar
pub fn format_alphabet(buttons: &[LetterButton]) -> String {
    buttons
        .iter()
        .map(|button| {
            if button.active {
                format!("[{}]", button.label).green().bold().to_string()
            } else if button.enabled {
                button.label.clone()
            } else {
                button.label.dimmed().to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render the clear button; it is only clickable while a filter is active
pub fn format_clear_button(enabled: bool) -> String {
    if enabled {
        "[Clear filters]".yellow().to_string()
    } else {
        "[Clear filters]".dimmed().to_string()
    }
}

/// Render one matched item
///
/// Primary tags come first, the other tags follow the separator.
pub fn format_item(item: &Item, slots: PrimarySlots) -> String {
    let mut lines = vec![format!("- {}", item.display_name().bold())];

    if !item.description().is_empty() {
        lines.push(format!("  {}", item.description()));
    }

    let primary: Vec<String> = item
        .primary_values(slots)
        .map(|tag| tag.cyan().to_string())
        .collect();
    let secondary: Vec<&str> = item.secondary_values(slots).collect();
    if !primary.is_empty() || !secondary.is_empty() {
        let mut tag_line = primary.join(", ");
        if !secondary.is_empty() {
            if !tag_line.is_empty() {
                tag_line.push_str(" / ");
            }
            tag_line.push_str(&secondary.join(", "));
        }
        lines.push(format!("  Tags: {tag_line}"));
    }

    if !item.database_url().is_empty() {
        lines.push(format!("  {}", item.database_url().underline()));
    }

    lines.join("\n")
}
