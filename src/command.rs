//! Command module
//!
//! Describes possible commands used during gameplay and the line tokenizer.
//! Input is one command per line: a verb followed by a single trailing
//! argument string, so multi-word item names need no quoting.

/// Commands that can be executed by the player.
#[derive(Debug, Clone, PartialEq, Eq, variantly::Variantly)]
pub enum Command {
    Attack,
    Empty,
    Help,
    Inventory,
    ListSaves,
    Load(String),
    Look,
    MoveTo(String),
    Pickup(String),
    Quit,
    Save(String),
    Unknown,
    /// Recognized verb, missing its required argument; carries the usage line.
    Usage(&'static str),
}

/// Parses an input line and returns the corresponding [`Command`].
pub fn parse_command(input: &str) -> Command {
    let trimmed = input.trim();
    let (verb, arg) = match trimmed.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (trimmed, ""),
    };

    match verb.to_ascii_lowercase().as_str() {
        "" => Command::Empty,
        "help" | "?" => Command::Help,
        "look" => Command::Look,
        "inventory" | "inv" => Command::Inventory,
        "attack" => Command::Attack,
        "list" => Command::ListSaves,
        "quit" | "exit" => Command::Quit,
        "move" | "go" => {
            if arg.is_empty() {
                Command::Usage("move <direction>")
            } else {
                Command::MoveTo(arg.to_string())
            }
        },
        "pickup" | "take" => {
            if arg.is_empty() {
                Command::Usage("pickup <item>")
            } else {
                Command::Pickup(arg.to_string())
            }
        },
        "save" => {
            if arg.is_empty() {
                Command::Usage("save <name>")
            } else {
                Command::Save(arg.to_string())
            }
        },
        "load" => {
            if arg.is_empty() {
                Command::Usage("load <name>")
            } else {
                Command::Load(arg.to_string())
            }
        },
        _ => Command::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_verbs_parse() {
        assert!(parse_command("look").is_look());
        assert!(parse_command("  attack  ").is_attack());
        assert!(parse_command("inv").is_inventory());
        assert!(parse_command("exit").is_quit());
        assert!(parse_command("list").is_list_saves());
    }

    #[test]
    fn argument_is_the_whole_trailing_string() {
        assert_eq!(
            parse_command("pickup rusty iron key"),
            Command::Pickup("rusty iron key".into())
        );
        assert_eq!(parse_command("move right"), Command::MoveTo("right".into()));
        assert_eq!(parse_command("save slot one"), Command::Save("slot one".into()));
    }

    #[test]
    fn verbs_are_case_insensitive_but_arguments_are_kept_verbatim() {
        assert_eq!(parse_command("PICKUP Torch"), Command::Pickup("Torch".into()));
        assert_eq!(parse_command("Move UP"), Command::MoveTo("UP".into()));
    }

    #[test]
    fn missing_arguments_yield_usage() {
        assert_eq!(parse_command("move"), Command::Usage("move <direction>"));
        assert_eq!(parse_command("pickup  "), Command::Usage("pickup <item>"));
        assert_eq!(parse_command("save"), Command::Usage("save <name>"));
        assert_eq!(parse_command("load"), Command::Usage("load <name>"));
    }

    #[test]
    fn movement_verbs_expose_their_generated_accessors() {
        assert!(parse_command("go up").is_move_to());
        assert!(parse_command("move left").is_move_to());
        assert!(!parse_command("look").is_move_to());
    }

    #[test]
    fn unknown_and_empty_input() {
        assert!(parse_command("dance").is_unknown());
        assert!(parse_command("").is_empty());
        assert!(parse_command("   ").is_empty());
    }
}
