//! Terminal input handling for the REPL.
//!
//! Wraps rustyline configuration, completion, and history tailored to the
//! engine's command set and save-slot workflow.

use std::path::{Path, PathBuf};

use anyhow::Result;
use lazy_static::lazy_static;
use log::warn;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

use crate::save_files::{SAVE_DIR, collect_save_slots};

/// Outcome of reading a line from the REPL input.
pub enum InputEvent {
    Line(String),
    Eof,
    Interrupted,
}

lazy_static! {
    static ref COMMAND_TERMS: Vec<&'static str> = vec![
        "attack",
        "exit",
        "help",
        "inventory",
        "list",
        "load",
        "look",
        "move",
        "pickup",
        "save",
    ];
}

const DIRECTION_TERMS: &[&str] = &["up", "down", "left", "right"];

type ReplEditor = rustyline::Editor<DelveHelper, DefaultHistory>;

#[derive(Default)]
struct DelveHelper;

impl Helper for DelveHelper {}

impl Completer for DelveHelper {
    type Candidate = Pair;

    fn complete(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> rustyline::Result<(usize, Vec<Self::Candidate>)> {
        let (start, prefix) = current_word(line, pos);
        let lower = prefix.to_lowercase();

        let before = line[..start].trim();
        let candidates: Vec<String> = match before {
            "" => COMMAND_TERMS.iter().map(ToString::to_string).collect(),
            "move" | "go" => DIRECTION_TERMS.iter().map(ToString::to_string).collect(),
            "load" | "save" => save_slot_names(),
            _ => Vec::new(),
        };

        let pairs = candidates
            .into_iter()
            .filter(|term| term.starts_with(&lower))
            .map(|term| Pair {
                display: term.clone(),
                replacement: term,
            })
            .collect();
        Ok((start, pairs))
    }
}

impl Hinter for DelveHelper {
    type Hint = String;
}

impl Highlighter for DelveHelper {}

impl Validator for DelveHelper {}

fn current_word(line: &str, pos: usize) -> (usize, String) {
    let slice = &line[..pos];
    let start = slice.rfind(char::is_whitespace).map_or(0, |i| i + 1);
    (start, slice[start..].to_string())
}

fn save_slot_names() -> Vec<String> {
    collect_save_slots(Path::new(SAVE_DIR))
        .map(|slots| slots.into_iter().map(|slot| slot.slot).collect())
        .unwrap_or_default()
}

fn history_path() -> PathBuf {
    PathBuf::from(SAVE_DIR).join(".history")
}

/// History lives under the save directory, which may not exist yet on a
/// fresh install; create it up front so `save_history` has somewhere to write.
fn ensure_history_dir(path: &Path) {
    if let Some(parent) = path.parent()
        && let Err(e) = std::fs::create_dir_all(parent)
    {
        warn!("failed to create history directory {}: {e}", parent.display());
    }
}

/// Owns the line editor and its history file.
pub struct InputManager {
    editor: Option<ReplEditor>,
}

impl InputManager {
    pub fn new() -> Self {
        let editor = match ReplEditor::new() {
            Ok(mut editor) => {
                editor.set_helper(Some(DelveHelper));
                ensure_history_dir(&history_path());
                if history_path().exists()
                    && let Err(e) = editor.load_history(&history_path())
                {
                    warn!("failed to load input history: {e}");
                }
                Some(editor)
            },
            Err(e) => {
                warn!("line editor unavailable ({e}); falling back to plain stdin");
                None
            },
        };
        Self { editor }
    }

    /// Read one line, translating editor signals into [`InputEvent`]s.
    ///
    /// # Errors
    /// - on unrecoverable read failures (not Ctrl-C / Ctrl-D)
    pub fn read_line(&mut self, prompt: &str) -> Result<InputEvent> {
        let Some(editor) = self.editor.as_mut() else {
            return read_line_plain(prompt);
        };
        match editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = editor.add_history_entry(&line);
                    if let Err(e) = editor.save_history(&history_path()) {
                        warn!("failed to save input history: {e}");
                    }
                }
                Ok(InputEvent::Line(line))
            },
            Err(ReadlineError::Interrupted) => Ok(InputEvent::Interrupted),
            Err(ReadlineError::Eof) => Ok(InputEvent::Eof),
            Err(e) => Err(e.into()),
        }
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

fn read_line_plain(prompt: &str) -> Result<InputEvent> {
    use std::io::{BufRead, Write};
    print!("{prompt}");
    std::io::stdout().flush()?;
    let mut line = String::new();
    if std::io::stdin().lock().read_line(&mut line)? == 0 {
        Ok(InputEvent::Eof)
    } else {
        Ok(InputEvent::Line(line))
    }
}
