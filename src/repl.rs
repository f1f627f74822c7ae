//! REPL and command dispatch.
//!
//! The game runs in a read-eval-print loop. This module and its submodules
//! implement the command handlers that manipulate the [`DelveWorld`]; each
//! handler pushes [`crate::ViewItem`]s and the loop flushes them once per
//! turn.

pub mod combat;
pub mod input;
pub mod inventory;
pub mod look;
pub mod movement;
pub mod system;

pub use combat::attack_handler;
pub use inventory::{inv_handler, pickup_handler};
pub use look::look_handler;
pub use movement::move_handler;
pub use system::{help_handler, list_saves_handler, load_handler, quit_handler, save_handler};

use anyhow::Result;
use log::info;

use crate::command::{Command, parse_command};
use crate::style::GameStyle;
use crate::view::{View, ViewItem};
use crate::world::DelveWorld;

use input::{InputEvent, InputManager};

/// Control flow signal used by handlers to exit the REPL.
pub enum ReplControl {
    Continue,
    Quit,
}

/// Run the main read-eval-print loop until the player quits or dies.
///
/// # Errors
/// - Propagates failures from handlers, such as a dangling room handle.
pub fn run_repl(world: &mut DelveWorld) -> Result<()> {
    let mut view = View::new();
    let mut input_manager = InputManager::new();

    loop {
        let prompt = format!("\n[hp {}] delve> ", world.player.health).prompt_style().to_string();

        let input = match input_manager.read_line(&prompt)? {
            InputEvent::Line(line) => line,
            InputEvent::Eof => "exit".to_string(),
            InputEvent::Interrupted => {
                view.push(ViewItem::EngineMessage("Command canceled.".to_string()));
                view.flush();
                continue;
            },
        };

        let command = parse_command(&input);
        if command.is_empty() {
            continue;
        }
        info!("dispatching {command:?}");

        match dispatch(world, &mut view, &command)? {
            ReplControl::Quit => {
                view.flush();
                break;
            },
            ReplControl::Continue => {},
        }

        if !world.player.is_alive() {
            view.push(ViewItem::DeathNotice);
            view.flush();
            break;
        }
        view.flush();
    }
    Ok(())
}

/// Apply one parsed command against the world. Split out from the loop so
/// tests can drive full turns without a terminal.
///
/// # Errors
/// - Propagates handler failures.
pub fn dispatch(world: &mut DelveWorld, view: &mut View, command: &Command) -> Result<ReplControl> {
    match command {
        Command::Help => help_handler(view),
        Command::Look => look_handler(world, view)?,
        Command::MoveTo(direction) => move_handler(world, view, direction)?,
        Command::Inventory => inv_handler(world, view),
        Command::Pickup(item_name) => pickup_handler(world, view, item_name)?,
        Command::Attack => attack_handler(world, view)?,
        Command::ListSaves => list_saves_handler(view),
        Command::Save(slot) => save_handler(world, view, slot),
        Command::Load(slot) => load_handler(world, view, slot)?,
        Command::Quit => return Ok(quit_handler(world, view)),
        Command::Usage(usage) => view.push(ViewItem::EngineMessage(format!("Usage: {usage}"))),
        Command::Unknown => {
            view.push(ViewItem::Error("Unknown command. Type 'help' for assistance.".into()));
        },
        Command::Empty => {},
    }
    Ok(ReplControl::Continue)
}
