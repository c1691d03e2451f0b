//! REPL, CLI, and console rendering for Cellar.
//!
//! This crate provides:
//! - [`Repl`] - The read-classify-respond loop
//! - [`Session`] - The game state for one run of the loop
//! - [`LineEditor`] - Input abstraction with rustyline and plain-stdin backends
//! - [`ReplConfig`] - Settings gathered from the command line
//! - [`logging`] - `tracing` subscriber setup

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod demo;
pub mod editor;
pub mod highlight;
pub mod logging;
pub mod render;
pub mod repl;
pub mod session;

pub use config::{ReplConfig, Verbosity};
pub use editor::{LineEditor, PlainEditor, ReadResult, RustylineEditor};
pub use repl::Repl;
pub use session::{Response, Session};
