//! Results of player actions.
//!
//! None of these are errors: a blocked exit or a missing item is an ordinary
//! turn.

use cellar_foundation::RoomId;

/// Result of trying to walk through an exit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Movement {
    /// The player walked into `room`.
    Entered {
        /// The room now occupied.
        room: RoomId,
        /// Its description.
        description: String,
    },
    /// No exit that way; the player did not move.
    Blocked,
}

/// A snapshot of the current room.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoomView {
    /// The room's description.
    pub description: String,
    /// Names of the items in the room, front to back.
    pub items: Vec<String>,
}

/// Result of trying to pick up an item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TakeOutcome {
    /// The item was in the room and is now carried.
    Acquired(String),
    /// The item was not in the room. The player carries it anyway.
    NotPresent(String),
}

impl TakeOutcome {
    /// Returns the item name the player asked for.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Acquired(name) | Self::NotPresent(name) => name,
        }
    }
}
