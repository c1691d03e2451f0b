//! The room arena.
//!
//! Rooms are stored in a `Vec` and addressed by [`RoomId`]. Exits are ids,
//! so cycles such as entrance ↔ treasure room need no shared ownership.
//!
//! A [`World`] is assembled with a [`WorldBuilder`]. Once built, the set of
//! rooms and the exits between them are fixed; only room inventories can
//! change.

use cellar_foundation::{Error, Inventory, Result, RoomId};

use crate::direction::Direction;
use crate::room::{Exits, Room};

/// A fixed graph of rooms with a designated entrance.
#[derive(Debug)]
pub struct World {
    rooms: Vec<Room>,
    entrance: RoomId,
}

impl World {
    /// Returns a builder for a new world.
    #[must_use]
    pub fn builder() -> WorldBuilder {
        WorldBuilder::new()
    }

    /// Returns the room players start in.
    #[must_use]
    pub const fn entrance(&self) -> RoomId {
        self.entrance
    }

    /// Returns the number of rooms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    /// Returns true if the world has no rooms.
    ///
    /// A built world always has at least its entrance, so this is only
    /// false in practice.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Looks up a room.
    ///
    /// # Errors
    ///
    /// Returns an error if `id` does not name a room in this world.
    pub fn room(&self, id: RoomId) -> Result<&Room> {
        self.rooms
            .get(id.index())
            .ok_or_else(|| Error::room_not_found(id))
    }

    /// Returns the items lying in a room, for mutation.
    ///
    /// # Errors
    ///
    /// Returns an error if `id` does not name a room in this world.
    pub fn room_inventory_mut(&mut self, id: RoomId) -> Result<&mut Inventory> {
        self.rooms
            .get_mut(id.index())
            .map(|room| &mut room.inventory)
            .ok_or_else(|| Error::room_not_found(id))
    }

    /// Returns where going `direction` from `id` leads, if anywhere.
    ///
    /// # Errors
    ///
    /// Returns an error if `id` does not name a room in this world.
    pub fn exit(&self, id: RoomId, direction: Direction) -> Result<Option<RoomId>> {
        Ok(self.room(id)?.exits().get(direction))
    }

    /// Iterates over all rooms with their ids, in creation order.
    pub fn rooms(&self) -> impl Iterator<Item = (RoomId, &Room)> {
        self.rooms
            .iter()
            .enumerate()
            .map(|(index, room)| (RoomId::new(index), room))
    }
}

/// Assembles a [`World`].
///
/// ```
/// use cellar_storage::{Direction, World};
///
/// let mut builder = World::builder();
/// let hall = builder.room("a hall");
/// let vault = builder.room("a vault");
/// builder.link_both(hall, Direction::North, vault).unwrap();
/// builder.item(vault, "Gold Crown").unwrap();
/// let world = builder.build(hall).unwrap();
///
/// assert_eq!(world.exit(vault, Direction::South).unwrap(), Some(hall));
/// ```
#[derive(Debug, Default)]
pub struct WorldBuilder {
    rooms: Vec<Room>,
}

impl WorldBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a room with no exits and no items, returning its id.
    pub fn room(&mut self, description: impl Into<String>) -> RoomId {
        let id = RoomId::new(self.rooms.len());
        self.rooms.push(Room::new(description));
        id
    }

    /// Adds a one-way exit from `from` to `to`.
    ///
    /// Linking the same direction twice replaces the earlier exit.
    ///
    /// # Errors
    ///
    /// Returns an error if either id is not a room in this builder.
    pub fn link(&mut self, from: RoomId, direction: Direction, to: RoomId) -> Result<&mut Self> {
        self.check(to)?;
        self.exits_mut(from)?.set(direction, to);
        Ok(self)
    }

    /// Adds an exit from `a` to `b` and the opposite exit from `b` back to `a`.
    ///
    /// # Errors
    ///
    /// Returns an error if either id is not a room in this builder.
    pub fn link_both(&mut self, a: RoomId, direction: Direction, b: RoomId) -> Result<&mut Self> {
        self.link(a, direction, b)?;
        self.link(b, direction.opposite(), a)
    }

    /// Places an item in a room.
    ///
    /// # Errors
    ///
    /// Returns an error if `room` is not a room in this builder.
    pub fn item(&mut self, room: RoomId, name: impl Into<String>) -> Result<&mut Self> {
        self.rooms
            .get_mut(room.index())
            .ok_or_else(|| Error::room_not_found(room))?
            .inventory
            .add(name);
        Ok(self)
    }

    /// Finishes the world, with `entrance` as the starting room.
    ///
    /// # Errors
    ///
    /// Returns an error if `entrance` is not a room in this builder.
    pub fn build(self, entrance: RoomId) -> Result<World> {
        self.check(entrance)?;
        Ok(World {
            rooms: self.rooms,
            entrance,
        })
    }

    fn check(&self, id: RoomId) -> Result<()> {
        if id.index() < self.rooms.len() {
            Ok(())
        } else {
            Err(Error::room_not_found(id))
        }
    }

    fn exits_mut(&mut self, id: RoomId) -> Result<&mut Exits> {
        self.rooms
            .get_mut(id.index())
            .map(Room::exits_mut)
            .ok_or_else(|| Error::room_not_found(id))
    }
}
