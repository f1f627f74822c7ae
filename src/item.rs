//! Item -- catalog entry for anything the player can pick up.

/// An item as loaded from the items file. Immutable after load; where an item
/// currently *is* lives in the room occupancy lists and the player inventory,
/// not here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub name: String,
    pub description: String,
}

impl Item {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }

    /// Case-insensitive exact name match, the lookup rule used everywhere
    /// an item is referenced by name (world files, pickup command).
    pub fn name_matches(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_match_ignores_case_but_not_substrings() {
        let torch = Item::new("Torch", "A guttering pine torch.");
        assert!(torch.name_matches("torch"));
        assert!(torch.name_matches("TORCH"));
        assert!(!torch.name_matches("tor"));
        assert!(!torch.name_matches("torches"));
    }
}
