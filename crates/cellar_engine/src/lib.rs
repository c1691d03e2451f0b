//! Player state and room navigation for Cellar.
//!
//! [`Game`] owns the [`World`](cellar_storage::World) and the [`Player`] and
//! resolves move, look, and take actions against them. The player's
//! position is the only navigation state: it starts at the world's entrance
//! and changes only when a move finds an exit.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod game;
pub mod outcome;
pub mod player;

pub use game::Game;
pub use outcome::{Movement, RoomView, TakeOutcome};
pub use player::Player;
