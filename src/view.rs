//! View module.
//!
//! Rather than printing from each handler, messages for the current turn are
//! aggregated as [`ViewItem`]s and rendered together at the end of the REPL
//! pass. Handlers stay print-free, which also makes them easy to test: the
//! buffer is inspectable before it is flushed.

use colored::Colorize;
use textwrap::{fill, termwidth};

use crate::combat::CombatEvent;
use crate::save_files::{SaveSlot, format_modified};
use crate::style::GameStyle;

/// Everything the engine can say to the player in one turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewItem {
    RoomDescription { name: String, description: String },
    RoomItems(Vec<String>),
    RoomCreatures(Vec<String>),
    Inventory(Vec<String>),
    ActionSuccess(String),
    Error(String),
    Combat(CombatEvent),
    SaveList(Vec<SaveSlot>),
    EngineMessage(String),
    Help,
    DeathNotice,
    Farewell,
}

/// Buffer of [`ViewItem`]s for the current turn. Push order is display order.
#[derive(Debug, Clone, Default)]
pub struct View {
    pub items: Vec<ViewItem>,
}

impl View {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, item: ViewItem) {
        self.items.push(item);
    }

    /// Render and clear the buffer.
    pub fn flush(&mut self) {
        let width = termwidth().clamp(40, 100);
        for item in self.items.drain(..) {
            render(&item, width);
        }
    }
}

fn render(item: &ViewItem, width: usize) {
    match item {
        ViewItem::RoomDescription { name, description } => {
            println!("You are in {}", name.room_style());
            println!("{}", fill(description, width).description_style());
        },
        ViewItem::RoomItems(names) => {
            println!("{}", "Items in the room:".subheading_style());
            for name in names {
                println!("  {}", name.item_style());
            }
        },
        ViewItem::RoomCreatures(names) => {
            println!("{}", "You see creatures:".subheading_style());
            for name in names {
                println!("  {}", name.creature_style());
            }
        },
        ViewItem::Inventory(names) => {
            if names.is_empty() {
                println!("Your inventory is empty.");
            } else {
                println!("{}", "You have:".subheading_style());
                for name in names {
                    println!("  {}", name.item_style());
                }
            }
        },
        ViewItem::ActionSuccess(msg) => println!("{msg}"),
        ViewItem::Error(msg) => println!("{}", msg.error_style()),
        ViewItem::Combat(event) => render_combat(event),
        ViewItem::SaveList(slots) => render_save_list(slots),
        ViewItem::EngineMessage(msg) => println!("{}", msg.engine_style()),
        ViewItem::Help => render_help(),
        ViewItem::DeathNotice => {
            println!("{}", "You have died. Game Over.".damage_style().bold());
        },
        ViewItem::Farewell => println!("Exiting game."),
    }
}

fn render_combat(event: &CombatEvent) {
    match event {
        CombatEvent::Engaged { name } => {
            println!("You attack the {}!", name.creature_style());
        },
        CombatEvent::PlayerHit { name, damage, remaining } => {
            println!(
                "You deal {} damage. The {} has {remaining} health left.",
                damage.to_string().damage_style(),
                name.creature_style()
            );
        },
        CombatEvent::CreatureDefeated { name } => {
            println!("You have defeated the {}!", name.creature_style());
        },
        CombatEvent::CreatureHit { name, damage, remaining } => {
            println!(
                "The {} attacks you for {} damage. You have {remaining} health left.",
                name.creature_style(),
                damage.to_string().damage_style()
            );
        },
        CombatEvent::PlayerSlain { name } => {
            println!("You have been slain by the {}.", name.creature_style());
        },
    }
}

fn render_save_list(slots: &[SaveSlot]) {
    if slots.is_empty() {
        println!("No games saved yet.");
        return;
    }
    println!("{}", "Saved games:".subheading_style());
    for slot in slots {
        match slot.modified {
            Some(modified) => println!("  {}  ({})", slot.slot, format_modified(modified).engine_style()),
            None => println!("  {}", slot.slot),
        }
    }
}

fn render_help() {
    println!("{}", "Commands:".subheading_style());
    println!("  move <direction>    up, down, left, or right");
    println!("  look                describe the current room");
    println!("  inventory           list what you are carrying");
    println!("  pickup <item>       take an item from the room");
    println!("  attack              fight the nearest creature");
    println!("  list                show saved games");
    println!("  save <name>         save your progress");
    println!("  load <name>         restore saved progress");
    println!("  exit                leave the game");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_order_is_preserved_and_flush_clears() {
        let mut view = View::new();
        view.push(ViewItem::Help);
        view.push(ViewItem::Farewell);
        assert_eq!(view.items.len(), 2);
        assert!(matches!(view.items[0], ViewItem::Help));
        view.flush();
        assert!(view.items.is_empty());
    }
}
