#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
//! ** Delve **
//! Dungeon adventure game / engine

use std::path::PathBuf;

use anyhow::{Context, Result};
use colored::Colorize;
use log::info;

use delve::repl::look_handler;
use delve::style::GameStyle;
use delve::{View, load_world, run_repl};

fn main() -> Result<()> {
    env_logger::init();

    let data_dir = std::env::args().nth(1).map_or_else(|| PathBuf::from("data"), PathBuf::from);
    info!("Start: loading world from {}", data_dir.display());
    let mut world = load_world(&data_dir).context("while loading DelveWorld")?;
    info!("DelveWorld loaded successfully.");

    println!("{:^72}", "DELVE: A DESCENT INTO THE DARK".bright_yellow().underline());
    println!(
        "{}\n",
        "Type 'help' for commands. Your torch won't last forever.".description_style()
    );

    let mut view = View::new();
    look_handler(&world, &mut view)?;
    view.flush();

    run_repl(&mut world)
}
