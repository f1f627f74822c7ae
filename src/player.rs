//! Player -- the single mutable record threaded through every command.

use crate::handle::{ItemId, RoomId};

/// Most items the player can carry at once.
pub const INVENTORY_CAPACITY: usize = 5;

/// Starting stats for a fresh game.
pub const START_HEALTH: i32 = 20;
pub const START_STRENGTH: i32 = 5;

/// Mutable player state: health, strength, location, and a bounded ordered
/// inventory. `health <= 0` is the terminal condition; the REPL checks it
/// after every command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub health: i32,
    pub strength: i32,
    pub current_room: RoomId,
    pub inventory: Vec<ItemId>,
}

impl Player {
    /// A fresh player standing in `start_room` with default stats.
    pub fn new_at(start_room: RoomId) -> Self {
        Self {
            health: START_HEALTH,
            strength: START_STRENGTH,
            current_room: start_room,
            inventory: Vec::new(),
        }
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    pub fn inventory_full(&self) -> bool {
        self.inventory.len() >= INVENTORY_CAPACITY
    }

    /// Append an item to the inventory. Callers check [`Self::inventory_full`]
    /// first; the capacity invariant is theirs to uphold before mutating any
    /// room list.
    pub fn add_item(&mut self, item_id: ItemId) {
        debug_assert!(!self.inventory_full());
        self.inventory.push(item_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_player_has_default_stats_and_empty_inventory() {
        let player = Player::new_at(RoomId(0));
        assert_eq!(player.health, START_HEALTH);
        assert_eq!(player.strength, START_STRENGTH);
        assert_eq!(player.current_room, RoomId(0));
        assert!(player.inventory.is_empty());
        assert!(player.is_alive());
    }

    #[test]
    fn inventory_full_at_capacity() {
        let mut player = Player::new_at(RoomId(0));
        for i in 0..INVENTORY_CAPACITY {
            assert!(!player.inventory_full());
            player.add_item(ItemId(i));
        }
        assert!(player.inventory_full());
        assert_eq!(player.inventory.len(), INVENTORY_CAPACITY);
    }

    #[test]
    fn inventory_preserves_insertion_order() {
        let mut player = Player::new_at(RoomId(0));
        player.add_item(ItemId(3));
        player.add_item(ItemId(1));
        assert_eq!(player.inventory, vec![ItemId(3), ItemId(1)]);
    }
}
