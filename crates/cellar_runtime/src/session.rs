//! Session state for the REPL.
//!
//! A session owns the [`Game`] for one run of the command loop and turns
//! classified commands into the lines to print.

use cellar_engine::Game;
use cellar_foundation::Result;
use cellar_parser::Command;
use cellar_storage::World;
use tracing::{debug, info};

use crate::render;

/// What to print for one command, and whether the session is over.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Response {
    /// Output lines, without trailing newlines.
    pub lines: Vec<String>,
    /// True once the player asked to quit.
    pub quit: bool,
}

impl Response {
    /// A response of a single line.
    #[must_use]
    pub fn line(line: impl Into<String>) -> Self {
        Self {
            lines: vec![line.into()],
            quit: false,
        }
    }

    /// A response of several lines.
    #[must_use]
    pub fn lines(lines: Vec<String>) -> Self {
        Self { lines, quit: false }
    }

    /// The response that ends the session.
    #[must_use]
    pub fn farewell() -> Self {
        Self {
            lines: vec![render::FAREWELL.to_string()],
            quit: true,
        }
    }
}

/// Game state for an interactive session.
#[derive(Debug)]
pub struct Session {
    /// The world and the player.
    game: Game,

    /// Commands handled so far, valid or not.
    turns: u64,
}

impl Session {
    /// Creates a session in the four-room dungeon.
    ///
    /// # Errors
    ///
    /// Returns an error if the dungeon fails to build.
    pub fn new() -> Result<Self> {
        let (game, _) = Game::dungeon()?;
        Ok(Self::with_game(game))
    }

    /// Creates a session in the given world.
    #[must_use]
    pub fn with_world(world: World) -> Self {
        Self::with_game(Game::new(world))
    }

    /// Creates a session around an existing game.
    #[must_use]
    pub fn with_game(game: Game) -> Self {
        info!(entrance = %game.location(), rooms = game.world().len(), "session started");
        Self { game, turns: 0 }
    }

    /// Returns the game.
    #[must_use]
    pub const fn game(&self) -> &Game {
        &self.game
    }

    /// Returns the number of commands handled.
    #[must_use]
    pub const fn turns(&self) -> u64 {
        self.turns
    }

    /// The line describing the player's current room.
    ///
    /// # Errors
    ///
    /// Returns an error if the player's room is not in the world.
    pub fn describe_location(&self) -> Result<String> {
        let room = self.game.world().room(self.game.location())?;
        Ok(render::description(room.description()))
    }

    /// Carries out one command.
    ///
    /// # Errors
    ///
    /// Returns an error only if the world is inconsistent; every game
    /// outcome, including invalid input, is a normal [`Response`].
    pub fn execute(&mut self, command: &Command) -> Result<Response> {
        self.turns += 1;
        debug!(turn = self.turns, ?command, "execute");

        let response = match command {
            Command::Move(direction) => Response::lines(render::movement(&self.game.go(*direction)?)),
            Command::Look => Response::lines(render::room_view(&self.game.look()?)),
            Command::Inventory => Response::lines(render::inventory(self.game.inventory().names())),
            Command::Take(name) => Response::line(render::take(&self.game.take(name)?)),
            Command::Quit => {
                info!(turns = self.turns, "player quit");
                Response::farewell()
            }
            Command::Invalid(line) => {
                debug!(input = %line, "unrecognized command");
                Response::line(render::INVALID)
            }
        };
        Ok(response)
    }
}
