use anyhow::bail;
use catbrowse_core::{validate_items, BrowserConfig, FilterEngine, TagClick};
use std::path::{Path, PathBuf};

use crate::operations::{load_items, BrowseAction};

/// Browsing session for one loaded feed
#[derive(Debug)]
pub struct AppState {
    /// Filter engine over the loaded items
    pub engine: FilterEngine,
    /// Path of the loaded feed
    pub current_file: PathBuf,
    /// Data quality warnings found while loading
    pub warnings: Vec<String>,
}

impl AppState {
    /// Load a feed and start a session with default selections
    pub fn load_from_file(path: &Path, config: &BrowserConfig) -> anyhow::Result<Self> {
        let items = load_items(path, &config.feed)?;

        let warnings = match validate_items(&items) {
            Ok(()) => Vec::new(),
            Err(warnings) => {
                for warning in &warnings {
                    tracing::warn!("{warning}");
                }
                warnings
            }
        };

        Ok(Self {
            engine: FilterEngine::new(items, config.engine),
            current_file: path.to_path_buf(),
            warnings,
        })
    }

    /// Replay one command line action
    pub fn apply_action(&mut self, action: &BrowseAction) -> anyhow::Result<()> {
        match action {
            BrowseAction::Event(event) => {
                self.engine.apply(event);
            }
            BrowseAction::Click { item, tag } => {
                let click = self.resolve_click(item, tag)?;
                self.engine.follow_tag(&click);
            }
        }
        Ok(())
    }

    /// Turn a click on a named item's tag label into a [`TagClick`]
    fn resolve_click(&self, name: &str, tag: &str) -> anyhow::Result<TagClick> {
        let Some(item) = self
            .engine
            .items()
            .iter()
            .find(|item| item.name().eq_ignore_ascii_case(name))
        else {
            bail!("No item named '{name}' in {}", self.current_file.display());
        };

        let slots = self.engine.config().primary_slots;
        if let Some(primary) = item
            .primary_values(slots)
            .find(|candidate| candidate.eq_ignore_ascii_case(tag))
        {
            return Ok(TagClick::primary(primary));
        }

        match item
            .secondary_values(slots)
            .find(|candidate| candidate.eq_ignore_ascii_case(tag))
        {
            Some(tag) => Ok(TagClick::secondary(item, tag)),
            None => bail!("Item '{}' has no tag '{tag}'", item.name()),
        }
    }

    /// Title line for the current feed
    pub fn title(&self) -> String {
        let file_name = self
            .current_file
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("Untitled");
        format!("catbrowse - {file_name}")
    }
}
