//! Creature -- catalog entry for anything the player can fight.

/// A creature as loaded from the creatures file.
///
/// `health` is the only mutable field; it is signed because combat drives it
/// through zero and the final blow is reported at its raw (possibly negative)
/// value. A creature at or below zero health is defeated but stays in the
/// catalog so handles never dangle -- room views filter the dead out instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Creature {
    pub name: String,
    pub health: i32,
    pub strength: i32,
}

impl Creature {
    pub fn new(name: impl Into<String>, health: i32, strength: i32) -> Self {
        Self {
            name: name.into(),
            health,
            strength,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Case-insensitive exact name match, used when linking room occupant
    /// lists to the catalog.
    pub fn name_matches(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }
}
