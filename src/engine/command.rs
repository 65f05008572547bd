use thiserror::Error;

/// A fully parsed command line. Arguments keep the case the player typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Look,
    /// Raw direction word; resolving it against the room happens at dispatch.
    Move(String),
    PickUp(String),
    Inventory,
    Help,
    Quit,
}

/// Malformed input. The `Display` text is exactly what the player sees.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Direction required. Usage: move <forward|back|left|right>")]
    MissingDirection,

    #[error("Invalid command. Usage: pick up <itemName>")]
    InvalidPick,

    #[error("Item name required. Usage: pick up <itemName>")]
    MissingItemName,

    #[error("Unknown command.")]
    UnknownCommand,
}

/// Parse one input line. Blank lines yield `Ok(None)`.
///
/// Only the verb is lowercased; `up` after `pick` is compared case-insensitively
/// and the item name is the remaining tokens rejoined with single spaces.
pub fn parse_command(input: &str) -> Result<Option<Command>, CommandError> {
    let mut tokens = input.split_whitespace();

    let Some(verb) = tokens.next() else {
        return Ok(None);
    };

    let command = match verb.to_lowercase().as_str() {
        "look" => Command::Look,
        "move" => match tokens.next() {
            Some(dir) => Command::Move(dir.to_string()),
            None => return Err(CommandError::MissingDirection),
        },
        "pick" => {
            match tokens.next() {
                Some(up) if up.eq_ignore_ascii_case("up") => {}
                _ => return Err(CommandError::InvalidPick),
            }
            let name = tokens.collect::<Vec<&str>>().join(" ");
            if name.is_empty() {
                return Err(CommandError::MissingItemName);
            }
            Command::PickUp(name)
        }
        "inventory" => Command::Inventory,
        "help" => Command::Help,
        "quit" | "exit" => Command::Quit,
        _ => return Err(CommandError::UnknownCommand),
    };

    Ok(Some(command))
}
