//! Rooms file parser and cross-reference resolution.
//!
//! Format, per room after the count line: name, description, item count plus
//! that many item-name lines, creature count plus that many creature-name
//! lines, then one line of four exit fields `up down left right` (a room
//! index, or -1 for no exit).
//!
//! Name resolution against the catalogs is the recoverable tier: a miss is
//! logged and stored as an unresolved slot. Exit fields are the fatal tier;
//! an exit must land inside the declared room count or the graph is unsound.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use log::warn;

use crate::creature::Creature;
use crate::handle::{CreatureId, ItemId, RoomId};
use crate::item::Item;
use crate::loader::LineCursor;
use crate::room::{CreatureSlot, Direction, ItemSlot, Room};

/// Load the room graph from `path`, resolving occupant names against the
/// already-loaded catalogs.
///
/// # Errors
/// - on IO failure or any structural parse failure (fatal tier)
pub fn load_rooms(path: &Path, items: &[Item], creatures: &[Creature]) -> Result<Vec<Room>> {
    let raw = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    parse_rooms(&raw, items, creatures).with_context(|| format!("parsing {}", path.display()))
}

/// Parse the rooms file format.
///
/// # Errors
/// - on malformed counts, short records, or out-of-range exit fields
pub fn parse_rooms(src: &str, items: &[Item], creatures: &[Creature]) -> Result<Vec<Room>> {
    let mut cursor = LineCursor::new(src);
    let room_count = cursor.next_count("room count")?;
    let mut rooms = Vec::new();

    for n in 0..room_count {
        let name = cursor.next_line(&format!("name of room {n}"))?;
        let description = cursor.next_line(&format!("description of room {n}"))?;
        let mut room = Room::new(name, description);

        let item_count = cursor.next_count(&format!("item count for room {n}"))?;
        for _ in 0..item_count {
            let item_name = cursor.next_line(&format!("item name in room {n}"))?;
            room.items.push(resolve_item(item_name, items, &room.name));
        }

        let creature_count = cursor.next_count(&format!("creature count for room {n}"))?;
        for _ in 0..creature_count {
            let creature_name = cursor.next_line(&format!("creature name in room {n}"))?;
            room.creatures.push(resolve_creature(creature_name, creatures, &room.name));
        }

        let exit_line = cursor.next_line(&format!("exit record for room {n}"))?;
        parse_exits(&mut room, exit_line, room_count, cursor.line_no())?;

        rooms.push(room);
    }
    Ok(rooms)
}

fn resolve_item(name: &str, items: &[Item], room_name: &str) -> ItemSlot {
    match items.iter().position(|item| item.name_matches(name)) {
        Some(index) => ItemSlot::Present(ItemId(index)),
        None => {
            warn!("item '{name}' in room '{room_name}' not found in catalog");
            ItemSlot::Unresolved(name.to_string())
        },
    }
}

fn resolve_creature(name: &str, creatures: &[Creature], room_name: &str) -> CreatureSlot {
    match creatures.iter().position(|creature| creature.name_matches(name)) {
        Some(index) => CreatureSlot::Present(CreatureId(index)),
        None => {
            warn!("creature '{name}' in room '{room_name}' not found in catalog");
            CreatureSlot::Unresolved(name.to_string())
        },
    }
}

fn parse_exits(room: &mut Room, line: &str, room_count: usize, line_no: usize) -> Result<()> {
    let mut fields = line.split_whitespace();
    for direction in Direction::ALL {
        let field = fields
            .next()
            .ok_or_else(|| anyhow!("line {line_no}: missing {direction} exit field"))?;
        room.exits.set(direction, parse_exit(field, direction, room_count, line_no)?);
    }
    if fields.next().is_some() {
        return Err(anyhow!("line {line_no}: trailing data in exit record '{line}'"));
    }
    Ok(())
}

fn parse_exit(field: &str, direction: Direction, room_count: usize, line_no: usize) -> Result<Option<RoomId>> {
    let value: i64 = field
        .parse()
        .map_err(|_| anyhow!("line {line_no}: bad {direction} exit: '{field}'"))?;
    if value == -1 {
        return Ok(None);
    }
    usize::try_from(value)
        .ok()
        .filter(|index| *index < room_count)
        .map(|index| Some(RoomId(index)))
        .ok_or_else(|| {
            anyhow!("line {line_no}: {direction} exit {value} outside room graph (0..{room_count})")
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalogs() -> (Vec<Item>, Vec<Creature>) {
        (
            vec![Item::new("Torch", "A torch."), Item::new("Key", "A key.")],
            vec![Creature::new("Goblin", 5, 2)],
        )
    }

    const TWO_ROOMS: &str = "2\n\
        Guard Post\nA cramped post.\n\
        1\nTorch\n\
        0\n\
        -1 -1 -1 1\n\
        Long Hall\nPillars march into the dark.\n\
        0\n\
        1\nGoblin\n\
        -1 -1 0 -1\n";

    #[test]
    fn parses_rooms_and_resolves_names() {
        let (items, creatures) = catalogs();
        let rooms = parse_rooms(TWO_ROOMS, &items, &creatures).unwrap();
        assert_eq!(rooms.len(), 2);
        assert_eq!(rooms[0].name, "Guard Post");
        assert_eq!(rooms[0].items, vec![ItemSlot::Present(ItemId(0))]);
        assert_eq!(rooms[0].exits.right, Some(RoomId(1)));
        assert_eq!(rooms[0].exits.up, None);
        assert_eq!(rooms[1].creatures, vec![CreatureSlot::Present(CreatureId(0))]);
        assert_eq!(rooms[1].exits.left, Some(RoomId(0)));
    }

    #[test]
    fn name_resolution_is_case_insensitive() {
        let (items, creatures) = catalogs();
        let src = "1\nCell\nBare.\n1\ntorch\n1\nGOBLIN\n-1 -1 -1 -1\n";
        let rooms = parse_rooms(src, &items, &creatures).unwrap();
        assert_eq!(rooms[0].items, vec![ItemSlot::Present(ItemId(0))]);
        assert_eq!(rooms[0].creatures, vec![CreatureSlot::Present(CreatureId(0))]);
    }

    #[test]
    fn unresolved_names_degrade_to_slots_not_errors() {
        let (items, creatures) = catalogs();
        let src = "1\nCell\nBare.\n1\nLantern\n1\nWyrm\n-1 -1 -1 -1\n";
        let rooms = parse_rooms(src, &items, &creatures).unwrap();
        assert_eq!(rooms[0].items, vec![ItemSlot::Unresolved("Lantern".into())]);
        assert_eq!(rooms[0].creatures, vec![CreatureSlot::Unresolved("Wyrm".into())]);
    }

    #[test]
    fn out_of_range_exits_are_fatal() {
        let (items, creatures) = catalogs();
        let src = "1\nCell\nBare.\n0\n0\n-1 -1 -1 5\n";
        let err = parse_rooms(src, &items, &creatures).unwrap_err();
        assert!(err.to_string().contains("right exit 5"));

        let src = "1\nCell\nBare.\n0\n0\n-2 -1 -1 -1\n";
        assert!(parse_rooms(src, &items, &creatures).is_err());
    }

    #[test]
    fn absurd_room_count_is_fatal_not_a_panic() {
        let (items, creatures) = catalogs();
        let err = parse_rooms("18446744073709551615\n", &items, &creatures).unwrap_err();
        assert!(err.to_string().contains("name of room 0"));
    }

    #[test]
    fn short_exit_records_are_fatal() {
        let (items, creatures) = catalogs();
        let src = "1\nCell\nBare.\n0\n0\n-1 -1 -1\n";
        assert!(parse_rooms(src, &items, &creatures).is_err());
        let src = "1\nCell\nBare.\n0\n0\n-1 -1 -1 -1 0\n";
        assert!(parse_rooms(src, &items, &creatures).is_err());
    }
}
