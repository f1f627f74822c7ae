//! `repl::combat` module
//!
//! Handler for the attack command: target selection, running the encounter,
//! and clearing a defeated creature out of the room.

use anyhow::{Result, anyhow};
use log::info;

use crate::combat::resolve_encounter;
use crate::view::{View, ViewItem};
use crate::world::DelveWorld;

/// Fight the first living creature in the current room to defeat or death.
///
/// A defeated target has exactly one occurrence of its handle removed from
/// the room's creature list; the creature itself stays in the catalog.
///
/// # Errors
/// - if a room or creature handle is dangling (corrupt state)
pub fn attack_handler(world: &mut DelveWorld, view: &mut View) -> Result<()> {
    let room_id = world.player.current_room;
    let target = {
        let room = world.room_ref(room_id)?;
        world.first_living_creature_in(room)
    };
    let Some(creature_id) = target else {
        view.push(ViewItem::Error("No creature here to attack.".into()));
        return Ok(());
    };

    // split borrows: the encounter mutates player and one creature
    let DelveWorld {
        ref mut player,
        ref mut creatures,
        ..
    } = *world;
    let creature = creatures
        .get_mut(creature_id.index())
        .ok_or_else(|| anyhow!("creature handle {creature_id} not found in world"))?;

    let events = resolve_encounter(player, creature);
    let defeated = !creature.is_alive();
    info!(
        "encounter with '{}' ({creature_id}) ended: creature hp {}, player hp {}",
        creature.name, creature.health, player.health
    );

    for event in events {
        view.push(ViewItem::Combat(event));
    }
    if defeated {
        world.room_mut(room_id)?.remove_creature(creature_id);
    }
    Ok(())
}
