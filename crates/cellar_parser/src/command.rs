//! Command line classification.

use cellar_storage::Direction;

/// The verb prefix of a take command, including its separating space.
const TAKE_PREFIX: &str = "take ";

/// One classified line of player input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Walk through an exit.
    Move(Direction),
    /// Describe the current room and its items.
    Look,
    /// List the player's items.
    Inventory,
    /// Pick up an item by exact name.
    Take(String),
    /// End the session.
    Quit,
    /// Anything not recognized. Holds the original line.
    Invalid(String),
}

impl Command {
    /// Returns true for [`Command::Quit`].
    #[must_use]
    pub const fn is_quit(&self) -> bool {
        matches!(self, Self::Quit)
    }
}

/// Turns input lines into [`Command`]s.
pub struct CommandParser;

impl CommandParser {
    /// Words the parser recognizes, for completion.
    pub const KEYWORDS: [&'static str; 8] = ["n", "s", "e", "w", "look", "inventory", "take ", "q"];

    /// Classifies one line of input.
    ///
    /// Matching is exact and case-sensitive. A trailing carriage return is
    /// ignored. For `take`, everything after the first space is the item
    /// name, spaces and case kept; an empty name is invalid.
    #[must_use]
    pub fn parse(line: &str) -> Command {
        let line = line.strip_suffix('\r').unwrap_or(line);

        if let Some(direction) = Direction::from_short(line) {
            return Command::Move(direction);
        }

        match line {
            "look" => Command::Look,
            "inventory" => Command::Inventory,
            "q" => Command::Quit,
            _ => match line.strip_prefix(TAKE_PREFIX) {
                Some(name) if !name.is_empty() => Command::Take(name.to_string()),
                _ => Command::Invalid(line.to_string()),
            },
        }
    }
}
