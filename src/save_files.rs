//! Save-game codec and slot discovery.
//!
//! A save file records the player only -- world data is re-derived from the
//! static catalogs at startup, so there is no version or checksum. The format
//! is line-oriented:
//!
//! ```text
//! <health> <strength> <currentRoom>
//! <inventory count>
//! <item handle>        (one per line)
//! ```
//!
//! Loading parses and validates the *entire* record before anything is
//! committed; a corrupted file can never leave the live player half-updated.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use anyhow::{Context, Result};
use log::warn;
use thiserror::Error;

use crate::handle::{ItemId, RoomId};
use crate::player::{INVENTORY_CAPACITY, Player};
use crate::world::DelveWorld;

pub const SAVE_DIR: &str = "saved_games";
pub const SAVE_EXT: &str = "sav";

/// Ways reading a save file can fail. `Io` usually means "no such save";
/// everything else is some flavor of corruption.
#[derive(Debug, Error)]
pub enum SaveFileError {
    #[error("reading save file: {0}")]
    Io(#[from] io::Error),
    #[error("save file corrupted: {0}")]
    Corrupted(String),
}

/// A discovered save slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveSlot {
    pub slot: String,
    pub path: PathBuf,
    pub modified: Option<SystemTime>,
}

/// Normalize a player-supplied slot name into a filesystem-safe slug, so a
/// slot can never name a path outside the save directory.
pub fn sanitize_slot(raw: &str) -> String {
    let mut slug = String::new();
    let mut pending_sep = false;
    for ch in raw.trim().chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_sep && !slug.is_empty() {
                slug.push('-');
            }
            slug.push(ch.to_ascii_lowercase());
            pending_sep = false;
        } else if (ch == '-' || ch == '_') && !slug.is_empty() {
            slug.push(ch);
            pending_sep = false;
        } else {
            pending_sep = true;
        }
    }
    let slug = slug.trim_matches(&['-', '_'][..]).to_string();
    if slug.is_empty() { "game".to_string() } else { slug }
}

/// Path of the save file for a named slot. The slot name is sanitized first.
pub fn save_path(slot: &str) -> PathBuf {
    PathBuf::from(SAVE_DIR).join(format!("{}.{SAVE_EXT}", sanitize_slot(slot)))
}

/// Serialize the player record into the save-file wire format.
pub fn render_save(player: &Player) -> String {
    let mut out = format!(
        "{} {} {}\n{}\n",
        player.health,
        player.strength,
        player.current_room,
        player.inventory.len()
    );
    for item_id in &player.inventory {
        out.push_str(&format!("{item_id}\n"));
    }
    out
}

/// Write the player record to `path`, creating parent directories as needed.
///
/// # Errors
/// - on any filesystem failure (the live player is unaffected either way)
pub fn write_save(path: &Path, player: &Player) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).with_context(|| format!("creating save directory {}", parent.display()))?;
    }
    fs::write(path, render_save(player)).with_context(|| format!("writing save file {}", path.display()))
}

/// Read and fully parse a save file. The result still needs
/// [`validate_for`] against the loaded world before it may be committed.
///
/// # Errors
/// - [`SaveFileError::Io`] if the file cannot be read
/// - [`SaveFileError::Corrupted`] on any short read or type mismatch
pub fn read_save(path: &Path) -> Result<Player, SaveFileError> {
    let raw = fs::read_to_string(path)?;
    parse_save(&raw)
}

/// Parse the wire format into a candidate player record.
///
/// # Errors
/// - [`SaveFileError::Corrupted`] naming the first malformed field
pub fn parse_save(raw: &str) -> Result<Player, SaveFileError> {
    let corrupted = |reason: &str| SaveFileError::Corrupted(reason.to_string());
    let mut lines = raw.lines();

    let header = lines.next().ok_or_else(|| corrupted("missing header line"))?;
    let mut fields = header.split_whitespace();
    let health: i32 = parse_field(fields.next(), "health")?;
    let strength: i32 = parse_field(fields.next(), "strength")?;
    let current_room: usize = parse_field(fields.next(), "current room")?;
    if fields.next().is_some() {
        return Err(corrupted("trailing data on header line"));
    }

    let count: usize = parse_field(lines.next(), "inventory count")?;
    if count > INVENTORY_CAPACITY {
        return Err(SaveFileError::Corrupted(format!(
            "inventory count {count} exceeds capacity {INVENTORY_CAPACITY}"
        )));
    }

    let mut inventory = Vec::with_capacity(count);
    for n in 0..count {
        let handle: usize = parse_field(lines.next(), &format!("inventory entry {n}"))?;
        inventory.push(ItemId(handle));
    }

    Ok(Player {
        health,
        strength,
        current_room: RoomId(current_room),
        inventory,
    })
}

/// Check a parsed record against the loaded catalogs: the room handle and
/// every inventory handle must be in range. A save is only valid against the
/// exact catalogs it was created with, and this is the structural half of
/// that contract.
///
/// # Errors
/// - [`SaveFileError::Corrupted`] naming the dangling handle
pub fn validate_for(world: &DelveWorld, record: &Player) -> Result<(), SaveFileError> {
    if record.current_room.index() >= world.rooms.len() {
        return Err(SaveFileError::Corrupted(format!(
            "room handle {} out of range ({} rooms)",
            record.current_room,
            world.rooms.len()
        )));
    }
    for item_id in &record.inventory {
        if item_id.index() >= world.items.len() {
            return Err(SaveFileError::Corrupted(format!(
                "item handle {} out of range ({} items)",
                item_id,
                world.items.len()
            )));
        }
    }
    Ok(())
}

fn parse_field<T: std::str::FromStr>(field: Option<&str>, what: &str) -> Result<T, SaveFileError> {
    let text = field
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| SaveFileError::Corrupted(format!("missing {what}")))?;
    text.parse()
        .map_err(|_| SaveFileError::Corrupted(format!("bad {what}: '{text}'")))
}

/// Discover save slots stored in `dir`, sorted most recent first.
///
/// # Errors
/// Returns an error if the directory contents cannot be enumerated.
pub fn collect_save_slots(dir: &Path) -> Result<Vec<SaveSlot>> {
    if !dir.exists() {
        return Ok(Vec::new());
    }

    let mut slots = Vec::new();
    for entry in fs::read_dir(dir).with_context(|| format!("reading {}", dir.display()))? {
        let entry = entry.with_context(|| format!("enumerating {}", dir.display()))?;
        if let Some(slot) = slot_from_entry(&entry) {
            slots.push(slot);
        }
    }
    slots.sort_by(|a, b| b.modified.cmp(&a.modified).then(a.slot.cmp(&b.slot)));
    Ok(slots)
}

fn slot_from_entry(entry: &fs::DirEntry) -> Option<SaveSlot> {
    let path = entry.path();
    if !path.is_file() {
        return None;
    }
    if path.extension().and_then(|ext| ext.to_str()) != Some(SAVE_EXT) {
        if path.file_name().is_some_and(|name| name != std::ffi::OsStr::new(".history")) {
            warn!("ignoring non-save file in save directory: {}", path.display());
        }
        return None;
    }
    let slot = path.file_stem().and_then(|stem| stem.to_str())?.to_string();
    if slot.is_empty() {
        return None;
    }
    let modified = entry.metadata().ok().and_then(|meta| meta.modified().ok());
    Some(SaveSlot { slot, path, modified })
}

/// Format a human-friendly modified time relative to now.
pub fn format_modified(modified: SystemTime) -> String {
    match SystemTime::now().duration_since(modified) {
        Ok(delta) => format_duration(delta),
        Err(_) => "in the future".to_string(),
    }
}

/// Convert a duration into a compact "time ago" string.
fn format_duration(duration: Duration) -> String {
    const MINUTE: u64 = 60;
    const HOUR: u64 = MINUTE * 60;
    const DAY: u64 = HOUR * 24;

    let secs = duration.as_secs();
    if secs < 30 {
        "just now".to_string()
    } else if secs < MINUTE {
        format!("{secs}s ago")
    } else if secs < HOUR {
        format!("{}m ago", secs / MINUTE)
    } else if secs < DAY {
        format!("{}h ago", secs / HOUR)
    } else {
        format!("{}d ago", secs / DAY)
    }
}
