//! Room definitions and spatial utilities.
//!
//! Rooms own their occupancy: ordered lists of item and creature handles,
//! plus up to four directional exits. Occupancy lists hold *slots* rather
//! than bare handles so that a name the loader could not resolve is
//! represented explicitly instead of sharing a sentinel with "end of list"
//! -- the end of a list is simply the end of the `Vec`.

use std::fmt;
use std::str::FromStr;

use crate::handle::{CreatureId, ItemId, RoomId};

/// The four directions a room may connect in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error type for an unrecognized direction token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownDirection(pub String);

impl fmt::Display for UnknownDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown direction '{}'", self.0)
    }
}

impl std::error::Error for UnknownDirection {}

impl FromStr for Direction {
    type Err = UnknownDirection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            "left" => Ok(Direction::Left),
            "right" => Ok(Direction::Right),
            _ => Err(UnknownDirection(s.to_string())),
        }
    }
}

/// Directional connections out of a room. `None` means no exit that way.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Exits {
    pub up: Option<RoomId>,
    pub down: Option<RoomId>,
    pub left: Option<RoomId>,
    pub right: Option<RoomId>,
}

impl Exits {
    pub fn get(&self, direction: Direction) -> Option<RoomId> {
        match direction {
            Direction::Up => self.up,
            Direction::Down => self.down,
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }

    pub fn set(&mut self, direction: Direction, target: Option<RoomId>) {
        match direction {
            Direction::Up => self.up = target,
            Direction::Down => self.down = target,
            Direction::Left => self.left = target,
            Direction::Right => self.right = target,
        }
    }
}

/// One entry in a room's item list.
///
/// `Unresolved` records an item name from the rooms file that matched nothing
/// in the catalog. It keeps its position (presence order is observable) but
/// every consumer skips it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemSlot {
    Present(ItemId),
    Unresolved(String),
}

impl ItemSlot {
    pub fn id(&self) -> Option<ItemId> {
        match self {
            ItemSlot::Present(id) => Some(*id),
            ItemSlot::Unresolved(_) => None,
        }
    }
}

/// One entry in a room's creature list. See [`ItemSlot`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreatureSlot {
    Present(CreatureId),
    Unresolved(String),
}

impl CreatureSlot {
    pub fn id(&self) -> Option<CreatureId> {
        match self {
            CreatureSlot::Present(id) => Some(*id),
            CreatureSlot::Unresolved(_) => None,
        }
    }
}

/// Any visitable location in the game world.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub name: String,
    pub description: String,
    pub items: Vec<ItemSlot>,
    pub creatures: Vec<CreatureSlot>,
    pub exits: Exits,
}

impl Room {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            items: Vec::new(),
            creatures: Vec::new(),
            exits: Exits::default(),
        }
    }

    /// Remove the first occurrence of `item_id` from the room, shifting the
    /// remaining entries down so presence order is preserved. Returns whether
    /// anything was removed.
    pub fn remove_item(&mut self, item_id: ItemId) -> bool {
        if let Some(pos) = self.items.iter().position(|slot| slot.id() == Some(item_id)) {
            self.items.remove(pos);
            true
        } else {
            false
        }
    }

    /// Remove the first occurrence of `creature_id`, preserving the order of
    /// the remaining occupants. Returns whether anything was removed.
    pub fn remove_creature(&mut self, creature_id: CreatureId) -> bool {
        if let Some(pos) = self.creatures.iter().position(|slot| slot.id() == Some(creature_id)) {
            self.creatures.remove(pos);
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_parse_is_case_insensitive() {
        assert_eq!("UP".parse::<Direction>().unwrap(), Direction::Up);
        assert_eq!("Left".parse::<Direction>().unwrap(), Direction::Left);
        assert!("north".parse::<Direction>().is_err());
    }

    #[test]
    fn exits_roundtrip_through_get_and_set() {
        let mut exits = Exits::default();
        assert_eq!(exits.get(Direction::Right), None);
        exits.set(Direction::Right, Some(RoomId(1)));
        assert_eq!(exits.get(Direction::Right), Some(RoomId(1)));
        assert_eq!(exits.get(Direction::Left), None);
    }

    #[test]
    fn remove_item_takes_one_occurrence_and_keeps_order() {
        let mut room = Room::new("Cell", "Bare stone.");
        room.items = vec![
            ItemSlot::Present(ItemId(2)),
            ItemSlot::Present(ItemId(0)),
            ItemSlot::Present(ItemId(2)),
            ItemSlot::Present(ItemId(1)),
        ];
        assert!(room.remove_item(ItemId(2)));
        assert_eq!(
            room.items,
            vec![
                ItemSlot::Present(ItemId(0)),
                ItemSlot::Present(ItemId(2)),
                ItemSlot::Present(ItemId(1)),
            ]
        );
        assert!(!room.remove_item(ItemId(7)));
    }

    #[test]
    fn remove_creature_skips_unresolved_slots() {
        let mut room = Room::new("Pit", "Dark.");
        room.creatures = vec![
            CreatureSlot::Unresolved("wyrm".into()),
            CreatureSlot::Present(CreatureId(0)),
        ];
        assert!(room.remove_creature(CreatureId(0)));
        assert_eq!(room.creatures, vec![CreatureSlot::Unresolved("wyrm".into())]);
    }
}
