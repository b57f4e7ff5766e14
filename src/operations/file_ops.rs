use anyhow::Context;
use catbrowse_core::{load_feed, BrowserConfig, FeedLayout, Item};
use std::fs;
use std::path::Path;

/// Load the configuration file, or defaults when no path is given
pub fn load_config(path: Option<&Path>) -> anyhow::Result<BrowserConfig> {
    let Some(path) = path else {
        return Ok(BrowserConfig::default());
    };

    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    let config = BrowserConfig::from_toml_str(&text)
        .with_context(|| format!("Invalid config file {}", path.display()))?;

    tracing::debug!(path = %path.display(), ?config, "loaded configuration");
    Ok(config)
}

/// Load and parse the catalog feed
pub fn load_items(path: &Path, layout: &FeedLayout) -> anyhow::Result<Vec<Item>> {
    let items = load_feed(path, layout)
        .with_context(|| format!("Failed to load feed {}", path.display()))?;

    tracing::info!(path = %path.display(), items = items.len(), "loaded feed");
    Ok(items)
}
