//! Rooms and their exits.

use cellar_foundation::{Inventory, RoomId};

use crate::direction::Direction;

/// The four exits of a room. An absent exit means that way is blocked.
///
/// Exits hold plain [`RoomId`]s into the world arena and never own the
/// rooms they point at.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Exits {
    slots: [Option<RoomId>; 4],
}

impl Exits {
    /// Returns the room reached by going `direction`, if any.
    #[must_use]
    pub const fn get(&self, direction: Direction) -> Option<RoomId> {
        self.slots[direction.slot()]
    }

    /// Iterates over present exits in `n`, `s`, `e`, `w` order.
    pub fn iter(&self) -> impl Iterator<Item = (Direction, RoomId)> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(|dir| self.get(dir).map(|to| (dir, to)))
    }

    /// Returns true if no exit is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    pub(crate) fn set(&mut self, direction: Direction, to: RoomId) {
        self.slots[direction.slot()] = Some(to);
    }
}

/// A node of the room graph.
#[derive(Debug)]
pub struct Room {
    description: String,
    /// Items lying in the room.
    pub inventory: Inventory,
    exits: Exits,
}

impl Room {
    pub(crate) fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            inventory: Inventory::new(),
            exits: Exits::default(),
        }
    }

    /// Returns the room description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the room's exits.
    #[must_use]
    pub const fn exits(&self) -> &Exits {
        &self.exits
    }

    pub(crate) fn exits_mut(&mut self) -> &mut Exits {
        &mut self.exits
    }
}
