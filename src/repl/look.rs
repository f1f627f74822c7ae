//! `repl::look` module
//!
//! Handler for describing the player's current room.

use anyhow::Result;

use crate::view::{View, ViewItem};
use crate::world::DelveWorld;

/// Describe the current room: name, description, then the item and living
/// creature lists, each only when non-empty. Defeated creatures keep their
/// room slot but never appear here.
///
/// # Errors
/// - if the player's room handle is dangling (corrupt state)
pub fn look_handler(world: &DelveWorld, view: &mut View) -> Result<()> {
    let room = world.player_room_ref()?;
    view.push(ViewItem::RoomDescription {
        name: room.name.clone(),
        description: room.description.clone(),
    });

    let item_names = world.item_names_in(room);
    if !item_names.is_empty() {
        view.push(ViewItem::RoomItems(item_names));
    }

    let creature_names = world.living_creature_names_in(room);
    if !creature_names.is_empty() {
        view.push(ViewItem::RoomCreatures(creature_names));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::ViewItem;
    use crate::world::tests::two_room_world;

    #[test]
    fn empty_sections_are_omitted() {
        let world = two_room_world();
        let mut view = View::new();
        look_handler(&world, &mut view).unwrap();
        // room 0 has an item and no creatures
        assert_eq!(view.items.len(), 2);
        assert!(matches!(&view.items[0], ViewItem::RoomDescription { name, .. } if name == "Guard Post"));
        assert_eq!(view.items[1], ViewItem::RoomItems(vec!["Torch".into()]));
    }

    #[test]
    fn dead_creatures_are_not_listed() {
        let mut world = two_room_world();
        world.player.current_room = crate::RoomId(1);

        let mut view = View::new();
        look_handler(&world, &mut view).unwrap();
        assert!(view.items.contains(&ViewItem::RoomCreatures(vec!["Goblin".into()])));

        world.creatures[0].health = 0;
        let mut view = View::new();
        look_handler(&world, &mut view).unwrap();
        assert!(!view.items.iter().any(|i| matches!(i, ViewItem::RoomCreatures(_))));
    }
}
