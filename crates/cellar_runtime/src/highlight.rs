//! Input highlighting for the line editor.

use std::borrow::Cow;

use cellar_parser::{Command, CommandParser};

const VERB: &str = "\x1b[1;32m";
const ITEM: &str = "\x1b[33m";
const RESET: &str = "\x1b[0m";

/// Colors recognized commands as they are typed.
///
/// Known commands are shown in bold green; for `take`, the item name is
/// yellow. Anything else is left alone.
pub struct CommandHighlighter {}

impl CommandHighlighter {
    /// Creates a new highlighter.
    pub const fn new() -> Self {
        Self {}
    }

    /// Highlight a line of input.
    #[allow(clippy::unused_self)]
    pub fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        match CommandParser::parse(line) {
            Command::Invalid(_) => Cow::Borrowed(line),
            Command::Take(name) => Cow::Owned(format!("{VERB}take{RESET} {ITEM}{name}{RESET}")),
            _ => Cow::Owned(format!("{VERB}{line}{RESET}")),
        }
    }
}

impl Default for CommandHighlighter {
    fn default() -> Self {
        Self::new()
    }
}
