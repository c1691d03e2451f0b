//! The navigation engine.

use cellar_foundation::{ErrorContext, Inventory, Result, RoomId};
use cellar_storage::{Direction, DungeonRooms, World, dungeon};
use tracing::debug;

use crate::outcome::{Movement, RoomView, TakeOutcome};
use crate::player::Player;

/// A world and the player walking through it.
///
/// All operations run to completion; there is no hidden state besides the
/// player's position and the inventories.
#[derive(Debug)]
pub struct Game {
    world: World,
    player: Player,
}

impl Game {
    /// Starts a game with the player at the world's entrance.
    #[must_use]
    pub fn new(world: World) -> Self {
        let player = Player::new(world.entrance());
        Self { world, player }
    }

    /// Starts a game in the four-room dungeon.
    ///
    /// # Errors
    ///
    /// Returns an error if the dungeon fails to build.
    pub fn dungeon() -> Result<(Self, DungeonRooms)> {
        let (world, rooms) = dungeon()?;
        Ok((Self::new(world), rooms))
    }

    /// Returns the world.
    #[must_use]
    pub const fn world(&self) -> &World {
        &self.world
    }

    /// Returns the player.
    #[must_use]
    pub const fn player(&self) -> &Player {
        &self.player
    }

    /// Returns the room the player is in.
    #[must_use]
    pub const fn location(&self) -> RoomId {
        self.player.location()
    }

    /// Returns the player's inventory.
    #[must_use]
    pub const fn inventory(&self) -> &Inventory {
        &self.player.inventory
    }

    /// Names of the items the player carries, front to back.
    #[must_use]
    pub fn show_inventory(&self) -> Vec<String> {
        self.player.inventory.names().map(String::from).collect()
    }

    /// Walks through the exit in `direction`, if there is one.
    ///
    /// # Errors
    ///
    /// Returns an error if the player's room or the exit target is not in the
    /// world.
    pub fn go(&mut self, direction: Direction) -> Result<Movement> {
        let from = self.player.location();
        let exit = self
            .world
            .exit(from, direction)
            .map_err(|e| e.with_context(ErrorContext::new().with_operation("go").with_room(from)))?;
        let Some(to) = exit else {
            debug!(%from, %direction, "no exit");
            return Ok(Movement::Blocked);
        };

        let description = self.world.room(to)?.description().to_string();
        self.player.move_to(to);
        debug!(%from, %to, %direction, "moved");
        Ok(Movement::Entered {
            room: to,
            description,
        })
    }

    /// Describes the player's room and lists its items.
    ///
    /// # Errors
    ///
    /// Returns an error if the player's room is not in the world.
    pub fn look(&self) -> Result<RoomView> {
        let room = self.world.room(self.player.location())?;
        Ok(RoomView {
            description: room.description().to_string(),
            items: room.inventory.names().map(String::from).collect(),
        })
    }

    /// Picks up `name`.
    ///
    /// The item goes into the player's inventory before the room is
    /// checked, so the player ends up holding `name` even when the room
    /// never had it. Only the first matching item leaves the room.
    ///
    /// # Errors
    ///
    /// Returns an error if the player's room is not in the world; neither
    /// inventory changes in that case.
    pub fn take(&mut self, name: &str) -> Result<TakeOutcome> {
        let here = self.player.location();
        let room_items = self
            .world
            .room_inventory_mut(here)
            .map_err(|e| e.with_context(ErrorContext::new().with_operation("take").with_room(here)))?;

        self.player.inventory.add(name);
        let removed = room_items.remove(name);

        debug!(room = %here, item = name, removed, "take");
        if removed {
            Ok(TakeOutcome::Acquired(name.to_string()))
        } else {
            Ok(TakeOutcome::NotPresent(name.to_string()))
        }
    }
}
