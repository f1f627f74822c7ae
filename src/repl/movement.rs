//! `repl::movement` module
//!
//! Handler for commands that change player location.

use anyhow::Result;
use log::info;

use crate::repl::look::look_handler;
use crate::room::Direction;
use crate::view::{View, ViewItem};
use crate::world::DelveWorld;

/// Move the player through the current room's exit in `input_dir`.
///
/// An unrecognized direction and a missing exit are distinct refusals;
/// neither changes state. A successful move always re-describes the
/// destination.
///
/// # Errors
/// - if a room handle is dangling (corrupt state; the loader range-checks
///   every exit, so this does not happen for loaded worlds)
pub fn move_handler(world: &mut DelveWorld, view: &mut View, input_dir: &str) -> Result<()> {
    let Ok(direction) = input_dir.parse::<Direction>() else {
        view.push(ViewItem::Error("Invalid direction.".into()));
        return Ok(());
    };

    let Some(destination) = world.player_room_ref()?.exits.get(direction) else {
        view.push(ViewItem::Error("You can't move that way.".into()));
        return Ok(());
    };

    // the exit was range-checked at load; this guards handler bugs
    let destination_name = world.room_ref(destination)?.name.clone();
    world.player.current_room = destination;
    info!("player moved {direction} to '{destination_name}' ({destination})");
    look_handler(world, view)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RoomId;
    use crate::world::tests::two_room_world;

    #[test]
    fn moving_through_an_exit_relocates_and_describes() {
        let mut world = two_room_world();
        let mut view = View::new();
        move_handler(&mut world, &mut view, "right").unwrap();
        assert_eq!(world.player.current_room, RoomId(1));
        assert!(matches!(&view.items[0], ViewItem::RoomDescription { name, .. } if name == "Long Hall"));
    }

    #[test]
    fn move_matches_an_explicit_look() {
        let mut world = two_room_world();
        let mut move_view = View::new();
        move_handler(&mut world, &mut move_view, "RIGHT").unwrap();

        let mut look_view = View::new();
        look_handler(&world, &mut look_view).unwrap();
        assert_eq!(move_view.items, look_view.items);
    }

    #[test]
    fn missing_exit_leaves_state_unchanged() {
        let mut world = two_room_world();
        let mut view = View::new();
        move_handler(&mut world, &mut view, "up").unwrap();
        assert_eq!(world.player.current_room, RoomId(0));
        assert_eq!(view.items, vec![ViewItem::Error("You can't move that way.".into())]);
    }

    #[test]
    fn bad_direction_token_is_a_distinct_refusal() {
        let mut world = two_room_world();
        let mut view = View::new();
        move_handler(&mut world, &mut view, "north").unwrap();
        assert_eq!(world.player.current_room, RoomId(0));
        assert_eq!(view.items, vec![ViewItem::Error("Invalid direction.".into())]);
    }
}
