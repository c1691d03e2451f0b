//! The player.

use cellar_foundation::{Inventory, RoomId};

/// Where the player stands and what they carry.
#[derive(Debug)]
pub struct Player {
    location: RoomId,
    /// Items the player has picked up.
    pub inventory: Inventory,
}

impl Player {
    /// Creates a player in `location` with an empty inventory.
    #[must_use]
    pub const fn new(location: RoomId) -> Self {
        Self {
            location,
            inventory: Inventory::new(),
        }
    }

    /// Returns the room the player is in.
    #[must_use]
    pub const fn location(&self) -> RoomId {
        self.location
    }

    pub(crate) fn move_to(&mut self, room: RoomId) {
        self.location = room;
    }
}
