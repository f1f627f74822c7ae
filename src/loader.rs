//! Loader utilities for building a [`DelveWorld`] from world data files.
//!
//! A world is three line-oriented files in one directory: `items.txt`,
//! `creatures.txt`, and `rooms.txt`. Items and creatures load first so the
//! rooms loader can resolve occupant names against the finished catalogs.
//!
//! Failures come in two tiers. Anything structural -- missing file, bad
//! count, short record, exit pointing outside the room graph -- is fatal,
//! because every later lookup depends on the graph being sound. An occupant
//! name that matches nothing in a catalog is only a warning: the entry is
//! kept as an unresolved slot and skipped by all consumers.

pub mod creatures;
pub mod items;
pub mod rooms;

use std::path::Path;

use anyhow::{Context, Result, anyhow, bail};
use log::info;

use crate::handle::RoomId;
use crate::player::Player;
use crate::world::DelveWorld;

/// Load a complete world from the data files in `dir`.
///
/// # Errors
/// Errors bubble up from file IO or any structural parse failure.
pub fn load_world(dir: &Path) -> Result<DelveWorld> {
    let items = items::load_items(&dir.join("items.txt")).context("while loading item catalog")?;
    let creatures = creatures::load_creatures(&dir.join("creatures.txt")).context("while loading creature catalog")?;
    let rooms =
        rooms::load_rooms(&dir.join("rooms.txt"), &items, &creatures).context("while loading room graph")?;
    if rooms.is_empty() {
        bail!("world has no rooms; nowhere to put the player");
    }

    info!("{} items added to DelveWorld", items.len());
    info!("{} creatures added to DelveWorld", creatures.len());
    info!("{} rooms added to DelveWorld", rooms.len());

    Ok(DelveWorld {
        items,
        creatures,
        rooms,
        player: Player::new_at(RoomId(0)),
    })
}

/// Line iterator that tracks position so parse errors can name the
/// offending line.
pub(crate) struct LineCursor<'a> {
    lines: std::str::Lines<'a>,
    line_no: usize,
}

impl<'a> LineCursor<'a> {
    pub(crate) fn new(src: &'a str) -> Self {
        Self {
            lines: src.lines(),
            line_no: 0,
        }
    }

    pub(crate) fn line_no(&self) -> usize {
        self.line_no
    }

    /// Next line, trimmed of trailing whitespace. Running out of input is an
    /// error naming what was expected.
    pub(crate) fn next_line(&mut self, expected: &str) -> Result<&'a str> {
        self.line_no += 1;
        self.lines
            .next()
            .map(str::trim_end)
            .ok_or_else(|| anyhow!("line {}: expected {expected}, found end of file", self.line_no))
    }

    /// Next line parsed as a non-negative count.
    pub(crate) fn next_count(&mut self, expected: &str) -> Result<usize> {
        let line = self.next_line(expected)?;
        line.trim()
            .parse()
            .map_err(|_| anyhow!("line {}: expected {expected}, got '{line}'", self.line_no))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_reports_line_numbers_on_eof() {
        let mut cursor = LineCursor::new("3\nTorch");
        assert_eq!(cursor.next_count("count").unwrap(), 3);
        assert_eq!(cursor.next_line("name").unwrap(), "Torch");
        let err = cursor.next_line("description").unwrap_err();
        assert!(err.to_string().contains("line 3"));
        assert!(err.to_string().contains("description"));
    }

    #[test]
    fn cursor_rejects_non_numeric_counts() {
        let mut cursor = LineCursor::new("three\n");
        assert!(cursor.next_count("item count").is_err());
    }
}
