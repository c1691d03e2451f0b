//! Command classification for Cellar.
//!
//! Each input line maps to exactly one [`Command`]:
//!
//! ```text
//! "n" "s" "e" "w"   →  Move(direction)
//! "look"            →  Look
//! "inventory"       →  Inventory
//! "take <name>"     →  Take(name)      (rest of the line, verbatim)
//! "q"               →  Quit
//! anything else     →  Invalid(line)
//! ```
//!
//! # Modules
//!
//! - [`command`] - The [`Command`] type and [`CommandParser`]

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod command;

pub use command::{Command, CommandParser};
