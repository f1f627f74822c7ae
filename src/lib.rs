#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]

pub const DELVE_VERSION: &str = env!("CARGO_PKG_VERSION");

// Core modules
pub mod combat;
pub mod command;
pub mod creature;
pub mod handle;
pub mod item;
pub mod loader;
pub mod player;
pub mod repl;
pub mod room;
pub mod save_files;
pub mod style;
pub mod view;
pub mod world;

// Re-exports for convenience
pub use creature::Creature;
pub use handle::{CreatureId, ItemId, RoomId};
pub use item::Item;
pub use loader::load_world;
pub use player::Player;
pub use repl::run_repl;
pub use room::{Direction, Room};
pub use view::{View, ViewItem};
pub use world::DelveWorld;
