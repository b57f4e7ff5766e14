use catbrowse_core::{BrowserConfig, LetterAvailability, PrimarySlots, TagDepth};

use crate::operations::BrowseAction;
use crate::state::AppState;

/// Engine settings given on the command line; they win over the config file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EngineOverrides {
    pub tag_depth: Option<TagDepth>,
    pub primary_slots: Option<PrimarySlots>,
    pub letter_availability: Option<LetterAvailability>,
}

/// Merge command line overrides into the loaded configuration
pub fn apply_overrides(config: &mut BrowserConfig, overrides: &EngineOverrides) {
    if let Some(depth) = overrides.tag_depth {
        config.engine.tag_depth = depth;
    }
    if let Some(slots) = overrides.primary_slots {
        config.engine.primary_slots = slots;
    }
    if let Some(letters) = overrides.letter_availability {
        config.engine.letter_availability = letters;
    }
}

/// Replay the selection actions in command line order
///
/// Stops at the first action that cannot be resolved.
pub fn replay_actions(state: &mut AppState, actions: &[BrowseAction]) -> anyhow::Result<()> {
    for (step, action) in actions.iter().enumerate() {
        state.apply_action(action)?;
        tracing::debug!(
            step = step + 1,
            ?action,
            matched = state.engine.result_count(),
            "applied action"
        );
    }
    Ok(())
}
