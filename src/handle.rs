//! Typed handles into the world catalogs.
//!
//! Every room, item, and creature is identified by its position in the owning
//! catalog `Vec`. Handles are stable for the life of the process: catalogs are
//! append-only at load time and never reordered afterward.

use std::fmt;

macro_rules! handle_type {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(pub usize);

        impl $name {
            /// Raw position in the owning catalog.
            pub fn index(self) -> usize {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<usize> for $name {
            fn from(index: usize) -> Self {
                Self(index)
            }
        }
    };
}

handle_type! {
    /// Handle to a [`crate::Room`] in the room graph.
    RoomId
}
handle_type! {
    /// Handle to an [`crate::Item`] in the item catalog.
    ItemId
}
handle_type! {
    /// Handle to a [`crate::Creature`] in the creature catalog.
    CreatureId
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handles_display_as_raw_index() {
        assert_eq!(RoomId(3).to_string(), "3");
        assert_eq!(ItemId::from(0).to_string(), "0");
        assert_eq!(CreatureId(12).index(), 12);
    }

    #[test]
    fn handles_of_different_kinds_are_distinct_types() {
        // compile-time property; this just pins equality within a kind
        assert_eq!(RoomId(1), RoomId(1));
        assert_ne!(ItemId(1), ItemId(2));
    }
}
