//! Items, the singly-linked inventory, and error types for Cellar.
//!
//! This crate provides:
//! - [`Item`] - A named object that can sit in an inventory
//! - [`Inventory`] - An owned, front-inserting singly-linked list of items
//! - [`RoomId`] - Stable index of a room in the world arena
//! - [`Error`] - Error types shared by every layer

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod inventory;
pub mod item;
pub mod room_id;

pub use error::{Error, ErrorContext, ErrorKind, Result};
pub use inventory::{Inventory, Iter, Names};
pub use item::Item;
pub use room_id::RoomId;
