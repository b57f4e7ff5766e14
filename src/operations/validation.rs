use catbrowse_core::{Dimension, SelectionEvent};

/// Validation error with field and message
#[derive(Debug, PartialEq, Eq)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// One step replayed against the browsing session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseAction {
    /// A control change or the clear button
    Event(SelectionEvent),
    /// A click on a tag label of the named item
    Click { item: String, tag: String },
}

/// Parse a `--select` argument
///
/// Accepted forms:
/// - `DIM=VALUE`, e.g. `tag1=Science`, `letter=B`, `provider=all`
/// - `clear`
/// - `@ITEM=TAG`, a click on `TAG` as shown on the item named `ITEM`
pub fn parse_action(arg: &str) -> Result<BrowseAction, ValidationError> {
    let arg = arg.trim();

    if arg.eq_ignore_ascii_case("clear") {
        return Ok(BrowseAction::Event(SelectionEvent::Clear));
    }

    let Some((key, value)) = arg.split_once('=') else {
        return Err(ValidationError {
            field: "select".to_string(),
            message: format!("'{arg}' is not DIM=VALUE, @ITEM=TAG or clear"),
        });
    };

    if let Some(item) = key.strip_prefix('@') {
        let item = item.trim();
        if item.is_empty() || value.trim().is_empty() {
            return Err(ValidationError {
                field: "select".to_string(),
                message: format!("'{arg}' needs both an item name and a tag"),
            });
        }
        return Ok(BrowseAction::Click {
            item: item.to_string(),
            tag: value.trim().to_string(),
        });
    }

    let dimension: Dimension = key.parse().map_err(|message| ValidationError {
        field: "select".to_string(),
        message,
    })?;

    Ok(BrowseAction::Event(SelectionEvent::Select(
        dimension,
        value.trim().to_string(),
    )))
}

/// Parse every `--select` argument, keeping order
pub fn parse_actions(args: &[String]) -> Result<Vec<BrowseAction>, ValidationError> {
    args.iter().map(|arg| parse_action(arg)).collect()
}
