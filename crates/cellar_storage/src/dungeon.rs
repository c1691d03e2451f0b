//! The four-room dungeon.
//!
//! ```text
//!              treasure room
//!                   |
//!   armory ---- entrance ---- library
//! ```

use cellar_foundation::{Result, RoomId};

use crate::direction::Direction;
use crate::world::World;

/// Description of the starting room.
pub const ENTRANCE: &str = "the entrance to the dungeon";
/// Description of the room north of the entrance.
pub const TREASURE_ROOM: &str = "a room filled with treasure";
/// Description of the room west of the entrance.
pub const ARMORY: &str = "a room filled with weapons";
/// Description of the room east of the entrance.
pub const LIBRARY: &str = "a room filled with old books";

/// Ids of the dungeon's rooms.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DungeonRooms {
    /// Starting room, no items.
    pub entrance: RoomId,
    /// Holds the Gold Crown.
    pub treasure_room: RoomId,
    /// Holds a Sword and a Shield.
    pub armory: RoomId,
    /// Holds the Dusty Book.
    pub library: RoomId,
}

/// Builds the dungeon and returns it with the ids of its rooms.
///
/// # Errors
///
/// Never fails in practice; errors from the builder are propagated.
pub fn dungeon() -> Result<(World, DungeonRooms)> {
    let mut builder = World::builder();
    let treasure_room = builder.room(TREASURE_ROOM);
    let armory = builder.room(ARMORY);
    let entrance = builder.room(ENTRANCE);
    let library = builder.room(LIBRARY);

    builder
        .link_both(entrance, Direction::North, treasure_room)?
        .link_both(entrance, Direction::East, library)?
        .link_both(entrance, Direction::West, armory)?;

    builder
        .item(armory, "Sword")?
        .item(armory, "Shield")?
        .item(library, "Dusty Book")?
        .item(treasure_room, "Gold Crown")?;

    let world = builder.build(entrance)?;
    Ok((
        world,
        DungeonRooms {
            entrance,
            treasure_room,
            armory,
            library,
        },
    ))
}
