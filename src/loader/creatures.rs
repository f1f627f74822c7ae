//! Creatures file parser.
//!
//! Format: a count line, then one line per creature:
//! `<name> <health> <strength>`. Names carry no embedded whitespace.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};

use crate::creature::Creature;
use crate::loader::LineCursor;

/// Load the creature catalog from `path`.
///
/// # Errors
/// - on IO failure or any malformed record (fatal tier)
pub fn load_creatures(path: &Path) -> Result<Vec<Creature>> {
    let raw = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    parse_creatures(&raw).with_context(|| format!("parsing {}", path.display()))
}

/// Parse the creatures file format.
///
/// # Errors
/// - on a malformed count or creature record
pub fn parse_creatures(src: &str) -> Result<Vec<Creature>> {
    let mut cursor = LineCursor::new(src);
    let count = cursor.next_count("creature count")?;
    let mut creatures = Vec::new();
    for n in 0..count {
        let line = cursor.next_line(&format!("creature record {n}"))?;
        creatures.push(parse_record(line, cursor.line_no())?);
    }
    Ok(creatures)
}

fn parse_record(line: &str, line_no: usize) -> Result<Creature> {
    let mut fields = line.split_whitespace();
    let name = fields
        .next()
        .ok_or_else(|| anyhow!("line {line_no}: empty creature record"))?;
    let health = parse_stat(fields.next(), "health", line_no)?;
    let strength = parse_stat(fields.next(), "strength", line_no)?;
    if fields.next().is_some() {
        return Err(anyhow!("line {line_no}: trailing data in creature record '{line}'"));
    }
    Ok(Creature::new(name, health, strength))
}

fn parse_stat(field: Option<&str>, what: &str, line_no: usize) -> Result<i32> {
    let text = field.ok_or_else(|| anyhow!("line {line_no}: missing creature {what}"))?;
    text.parse()
        .map_err(|_| anyhow!("line {line_no}: bad creature {what}: '{text}'"))
}
