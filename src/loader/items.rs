//! Items file parser.
//!
//! Format: a count line, then two lines per item (name, description).

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::item::Item;
use crate::loader::LineCursor;

/// Load the item catalog from `path`.
///
/// # Errors
/// - on IO failure or any malformed record (fatal tier)
pub fn load_items(path: &Path) -> Result<Vec<Item>> {
    let raw = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    parse_items(&raw).with_context(|| format!("parsing {}", path.display()))
}

/// Parse the items file format.
///
/// # Errors
/// - on a malformed count or a record cut short
pub fn parse_items(src: &str) -> Result<Vec<Item>> {
    let mut cursor = LineCursor::new(src);
    let count = cursor.next_count("item count")?;
    // count is unvalidated file input; a short record errors on the first missing line
    let mut items = Vec::new();
    for n in 0..count {
        let name = cursor.next_line(&format!("name of item {n}"))?;
        let description = cursor.next_line(&format!("description of item {n}"))?;
        items.push(Item::new(name, description));
    }
    Ok(items)
}
