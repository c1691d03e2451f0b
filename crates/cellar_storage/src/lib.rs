//! Room arena, directional exits, and the seeded dungeon for Cellar.
//!
//! This crate provides:
//! - [`Direction`] - The four cardinal directions
//! - [`Room`] - A description, an inventory, and up to four exits
//! - [`World`] - The room arena, fixed once built
//! - [`WorldBuilder`] - The only way to create rooms and link them
//! - [`dungeon`] - The four-room dungeon the game starts in

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod direction;
pub mod dungeon;
pub mod room;
pub mod world;

pub use direction::Direction;
pub use dungeon::{DungeonRooms, dungeon};
pub use room::{Exits, Room};
pub use world::{World, WorldBuilder};
