//! Cellar - a four-room text adventure
//!
//! This crate re-exports all layers of Cellar for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: cellar_runtime    — REPL, line editing, rendering, CLI
//! Layer 3: cellar_engine     — Player state, move/look/take
//! Layer 2: cellar_parser     — Input line → Command
//! Layer 1: cellar_storage    — Rooms, exits, the dungeon
//! Layer 0: cellar_foundation — Item, Inventory, RoomId, Error
//! ```

pub use cellar_engine as engine;
pub use cellar_foundation as foundation;
pub use cellar_parser as parser;
pub use cellar_runtime as runtime;
pub use cellar_storage as storage;
