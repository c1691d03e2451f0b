//! Integration tests across all layers
//!
//! Drives sessions and the REPL end to end.

mod repl;
mod session;
