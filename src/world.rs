//! Data structures representing the game world.
//!
//! [`DelveWorld`] holds the immutable-after-load catalogs (items, creatures),
//! the room graph, and the player. It is created by the loader and then
//! passed to every command handler -- there is no global state.

use anyhow::{Result, anyhow};

use crate::creature::Creature;
use crate::handle::{CreatureId, ItemId, RoomId};
use crate::item::Item;
use crate::player::Player;
use crate::room::Room;

/// Complete state of a running game.
///
/// The catalogs are read-only after load; the mutable parts are the player,
/// room occupancy lists, and creature health.
#[derive(Debug, Clone)]
pub struct DelveWorld {
    pub items: Vec<Item>,
    pub creatures: Vec<Creature>,
    pub rooms: Vec<Room>,
    pub player: Player,
}

impl DelveWorld {
    /// Obtain a reference to the room the player occupies.
    ///
    /// # Errors
    /// - if the player's room handle is not in the graph (loader and save
    ///   validation make this unreachable in normal play)
    pub fn player_room_ref(&self) -> Result<&Room> {
        self.room_ref(self.player.current_room)
    }

    /// Obtain a mutable reference to the room the player occupies.
    ///
    /// # Errors
    /// - if the player's room handle is not in the graph
    pub fn player_room_mut(&mut self) -> Result<&mut Room> {
        let room_id = self.player.current_room;
        self.room_mut(room_id)
    }

    /// Look up a room by handle.
    ///
    /// # Errors
    /// - if the handle is out of range
    pub fn room_ref(&self, room_id: RoomId) -> Result<&Room> {
        self.rooms
            .get(room_id.index())
            .ok_or_else(|| anyhow!("room handle {room_id} not found in world"))
    }

    /// Look up a room by handle, mutably.
    ///
    /// # Errors
    /// - if the handle is out of range
    pub fn room_mut(&mut self, room_id: RoomId) -> Result<&mut Room> {
        self.rooms
            .get_mut(room_id.index())
            .ok_or_else(|| anyhow!("room handle {room_id} not found in world"))
    }

    pub fn item(&self, item_id: ItemId) -> Option<&Item> {
        self.items.get(item_id.index())
    }

    pub fn creature(&self, creature_id: CreatureId) -> Option<&Creature> {
        self.creatures.get(creature_id.index())
    }

    /// Names of the items present in `room`, in presence order.
    /// Unresolved slots are skipped, never dereferenced.
    pub fn item_names_in(&self, room: &Room) -> Vec<String> {
        room.items
            .iter()
            .filter_map(|slot| slot.id())
            .filter_map(|id| self.item(id))
            .map(|item| item.name.clone())
            .collect()
    }

    /// Names of the *living* creatures present in `room`, in presence order.
    /// Defeated creatures keep their slot but are never listed.
    pub fn living_creature_names_in(&self, room: &Room) -> Vec<String> {
        room.creatures
            .iter()
            .filter_map(|slot| slot.id())
            .filter_map(|id| self.creature(id))
            .filter(|creature| creature.is_alive())
            .map(|creature| creature.name.clone())
            .collect()
    }

    /// First living creature in `room`, in slot order. This is the combat
    /// target-selection rule.
    pub fn first_living_creature_in(&self, room: &Room) -> Option<CreatureId> {
        room.creatures
            .iter()
            .filter_map(|slot| slot.id())
            .find(|id| self.creature(*id).is_some_and(Creature::is_alive))
    }

    /// Find an item in `room` by case-insensitive exact name. Returns the
    /// slot position along with the handle so the caller can remove exactly
    /// that occurrence.
    pub fn find_item_in_room(&self, room: &Room, name: &str) -> Option<(usize, ItemId)> {
        room.items.iter().enumerate().find_map(|(pos, slot)| {
            let id = slot.id()?;
            self.item(id)
                .is_some_and(|item| item.name_matches(name))
                .then_some((pos, id))
        })
    }
}
