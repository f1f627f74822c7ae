//! `repl::inventory` module
//!
//! Handlers for commands that read or change the player inventory.

use anyhow::Result;
use log::info;

use crate::view::{View, ViewItem};
use crate::world::DelveWorld;

/// List carried items in insertion order.
pub fn inv_handler(world: &DelveWorld, view: &mut View) {
    let names = world
        .player
        .inventory
        .iter()
        .filter_map(|id| world.item(*id))
        .map(|item| item.name.clone())
        .collect();
    view.push(ViewItem::Inventory(names));
}

/// Pick up a named item from the current room.
///
/// Resolution, then the capacity check, then the atomic pair: remove exactly
/// one occurrence from the room list and append the handle to inventory.
/// Nothing mutates on either failure path.
///
/// # Errors
/// - if the player's room handle is dangling (corrupt state)
pub fn pickup_handler(world: &mut DelveWorld, view: &mut View, item_name: &str) -> Result<()> {
    let found = {
        let room = world.player_room_ref()?;
        world.find_item_in_room(room, item_name)
    };
    let Some((slot_pos, item_id)) = found else {
        view.push(ViewItem::Error("No such item here.".into()));
        return Ok(());
    };

    if world.player.inventory_full() {
        view.push(ViewItem::Error("Your inventory is full.".into()));
        return Ok(());
    }

    world.player_room_mut()?.items.remove(slot_pos);
    world.player.add_item(item_id);

    let name = world.item(item_id).map_or_else(|| item_name.to_string(), |i| i.name.clone());
    info!("player picked up '{name}' ({item_id})");
    view.push(ViewItem::ActionSuccess(format!("You picked up {name}.")));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::INVENTORY_CAPACITY;
    use crate::room::ItemSlot;
    use crate::{Item, ItemId};
    use crate::world::tests::two_room_world;

    #[test]
    fn empty_inventory_renders_the_empty_message() {
        let world = two_room_world();
        let mut view = View::new();
        inv_handler(&world, &mut view);
        assert_eq!(view.items, vec![ViewItem::Inventory(vec![])]);
    }

    #[test]
    fn pickup_moves_exactly_one_occurrence() {
        let mut world = two_room_world();
        // duplicate torch in the room
        world.rooms[0].items.push(ItemSlot::Present(ItemId(0)));

        let mut view = View::new();
        pickup_handler(&mut world, &mut view, "torch").unwrap();
        assert_eq!(world.player.inventory, vec![ItemId(0)]);
        assert_eq!(world.rooms[0].items, vec![ItemSlot::Present(ItemId(0))]);
        assert!(matches!(&view.items[0], ViewItem::ActionSuccess(msg) if msg == "You picked up Torch."));
    }

    #[test]
    fn pickup_of_absent_item_changes_nothing() {
        let mut world = two_room_world();
        let mut view = View::new();
        pickup_handler(&mut world, &mut view, "sword").unwrap();
        assert!(world.player.inventory.is_empty());
        assert_eq!(world.rooms[0].items.len(), 1);
        assert_eq!(view.items, vec![ViewItem::Error("No such item here.".into())]);
    }

    #[test]
    fn full_inventory_blocks_pickup_and_room_keeps_the_item() {
        let mut world = two_room_world();
        world.items.push(Item::new("Pebble", "A pebble."));
        for _ in 0..INVENTORY_CAPACITY {
            world.player.add_item(ItemId(1));
        }

        let mut view = View::new();
        pickup_handler(&mut world, &mut view, "Torch").unwrap();
        assert_eq!(world.player.inventory.len(), INVENTORY_CAPACITY);
        assert_eq!(world.rooms[0].items, vec![ItemSlot::Present(ItemId(0))]);
        assert_eq!(view.items, vec![ViewItem::Error("Your inventory is full.".into())]);
    }

    #[test]
    fn missing_item_outranks_full_inventory() {
        let mut world = two_room_world();
        world.items.push(Item::new("Pebble", "A pebble."));
        for _ in 0..INVENTORY_CAPACITY {
            world.player.add_item(ItemId(1));
        }

        let mut view = View::new();
        pickup_handler(&mut world, &mut view, "sword").unwrap();
        assert_eq!(view.items, vec![ViewItem::Error("No such item here.".into())]);
    }

    #[test]
    fn inventory_lists_names_in_insertion_order() {
        let mut world = two_room_world();
        world.items.push(Item::new("Key", "Rusty."));
        world.player.add_item(ItemId(1));
        world.player.add_item(ItemId(0));

        let mut view = View::new();
        inv_handler(&world, &mut view);
        assert_eq!(view.items, vec![ViewItem::Inventory(vec!["Key".into(), "Torch".into()])]);
    }
}
