//! Combat resolution.
//!
//! One encounter runs to completion synchronously: strictly alternating
//! exchanges, no randomness, both strength values constant throughout.
//! The resolver mutates the two combatants and returns the blow-by-blow as
//! events; the caller pushes those to the [`crate::View`] and handles the
//! aftermath (removing a defeated creature from its room).

use crate::creature::Creature;
use crate::player::Player;

/// One displayable step of an encounter.
///
/// `remaining` values are raw -- a killing blow can drive health negative and
/// is reported as such, matching the combat log format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CombatEvent {
    Engaged { name: String },
    PlayerHit { name: String, damage: i32, remaining: i32 },
    CreatureDefeated { name: String },
    CreatureHit { name: String, damage: i32, remaining: i32 },
    PlayerSlain { name: String },
}

/// Run a full encounter between `player` and `creature`.
///
/// The player strikes first each round. A creature that drops to zero or
/// below is defeated immediately and gets no final retaliation; otherwise it
/// strikes back, and the encounter also ends if that kills the player.
pub fn resolve_encounter(player: &mut Player, creature: &mut Creature) -> Vec<CombatEvent> {
    let name = creature.name.clone();
    let mut events = vec![CombatEvent::Engaged { name: name.clone() }];

    while player.is_alive() && creature.is_alive() {
        creature.health -= player.strength;
        events.push(CombatEvent::PlayerHit {
            name: name.clone(),
            damage: player.strength,
            remaining: creature.health,
        });
        if !creature.is_alive() {
            events.push(CombatEvent::CreatureDefeated { name: name.clone() });
            break;
        }

        player.health -= creature.strength;
        events.push(CombatEvent::CreatureHit {
            name: name.clone(),
            damage: creature.strength,
            remaining: player.health,
        });
        if !player.is_alive() {
            events.push(CombatEvent::PlayerSlain { name: name.clone() });
            break;
        }
    }
    events
}
