use csv::{ReaderBuilder, StringRecord};
use std::fs;
use std::path::Path;

use crate::config::FeedLayout;
use crate::error::CoreError;
use crate::models::Item;

/// Parse a tab-separated catalog feed
///
/// The first row is a header and is skipped. Quotes are literal, rows may
/// have any number of columns, and missing columns read as empty strings.
pub fn parse_feed(text: &str, layout: &FeedLayout) -> Result<Vec<Item>, CoreError> {
    let mut reader = ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(true)
        .flexible(true)
        .quoting(false)
        .from_reader(text.as_bytes());

    let mut items = Vec::new();
    for record in reader.records() {
        items.push(item_from_record(&record?, layout));
    }

    tracing::debug!(rows = items.len(), "parsed feed");
    Ok(items)
}

/// Load and parse a feed file
pub fn load_feed<P: AsRef<Path>>(path: P, layout: &FeedLayout) -> Result<Vec<Item>, CoreError> {
    let contents = fs::read_to_string(path)?;
    parse_feed(&contents, layout)
}

fn item_from_record(record: &StringRecord, layout: &FeedLayout) -> Item {
    let column = |idx: usize| record.get(idx).unwrap_or("");

    let mut item = Item::new(column(0))
        .with_provider(column(1))
        .with_links(column(2), column(3))
        .with_description(column(4))
        .with_tag1(column(layout.tag1_column));

    if let Some(tag2_column) = layout.tag2_column {
        item = item.with_tag2(column(tag2_column));
    }

    item.with_tags(record.iter().skip(layout.tags_start()))
}
