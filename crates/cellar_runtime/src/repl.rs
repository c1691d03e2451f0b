//! The main REPL implementation.

use std::io::{self, Write};

use cellar_foundation::Result;
use cellar_parser::CommandParser;
use tracing::{debug, info};

use crate::config::ReplConfig;
use crate::demo::inventory_demo;
use crate::editor::{LineEditor, ReadResult, RustylineEditor};
use crate::render;
use crate::session::{Response, Session};

/// The interactive command loop.
pub struct Repl<E: LineEditor = RustylineEditor> {
    /// The line editor for input.
    editor: E,

    /// Game state.
    session: Session,

    /// Prompt, banner, and demo settings.
    config: ReplConfig,
}

impl Repl<RustylineEditor> {
    /// Creates a new REPL in the dungeon with the default rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize or the dungeon
    /// fails to build.
    pub fn new() -> Result<Self> {
        let editor = RustylineEditor::new()?;
        Ok(Self::with_editor(editor, Session::new()?))
    }
}

impl<E: LineEditor> Repl<E> {
    /// Creates a new REPL with the given editor and session.
    pub fn with_editor(editor: E, session: Session) -> Self {
        Self {
            editor,
            session,
            config: ReplConfig::default(),
        }
    }

    /// Replaces the configuration.
    #[must_use]
    pub fn with_config(mut self, config: ReplConfig) -> Self {
        self.config = config;
        self
    }

    /// Disables the welcome banner.
    #[must_use]
    pub fn without_banner(mut self) -> Self {
        self.config.show_banner = false;
        self
    }

    /// Returns a reference to the session.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &ReplConfig {
        &self.config
    }

    /// Runs the loop, writing game text to stdout.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input or writing output fails.
    pub fn run(&mut self) -> Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.run_with_output(&mut out)
    }

    /// Runs the loop, writing game text to `out`.
    ///
    /// Ends on `q` or end of input; both print the farewell.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input or writing output fails.
    pub fn run_with_output<W: Write>(&mut self, out: &mut W) -> Result<()> {
        if self.config.show_banner {
            Self::print_banner(out)?;
        }
        if self.config.run_demo {
            write_lines(out, &inventory_demo())?;
        }
        writeln!(out, "{}", self.session.describe_location()?)?;
        out.flush()?;

        loop {
            let Some(response) = self.read_eval()? else {
                writeln!(out, "{}", render::FAREWELL)?;
                break;
            };
            write_lines(out, &response.lines)?;
            out.flush()?;
            if response.quit {
                break;
            }
        }

        info!(turns = self.session.turns(), "session ended");
        Ok(())
    }

    /// Reads one line and executes it.
    ///
    /// Returns `Ok(None)` at end of input. Empty lines and Ctrl+C give an
    /// empty response; a line of only whitespace is still a command.
    fn read_eval(&mut self) -> Result<Option<Response>> {
        let line = match self.editor.read_line(&self.config.prompt)? {
            ReadResult::Line(line) => line,
            ReadResult::Interrupted => return Ok(Some(Response::default())),
            ReadResult::Eof => return Ok(None),
        };

        if line.is_empty() {
            return Ok(Some(Response::default()));
        }

        self.editor.add_history(&line);
        self.eval(&line).map(Some)
    }

    /// Classifies and executes one line of input.
    ///
    /// # Errors
    ///
    /// Returns an error only if the world is inconsistent.
    pub fn eval(&mut self, line: &str) -> Result<Response> {
        let command = CommandParser::parse(line);
        debug!(?command, "parsed");
        self.session.execute(&command)
    }

    /// Prints the welcome banner.
    fn print_banner<W: Write>(out: &mut W) -> io::Result<()> {
        writeln!(out, "\x1b[1;36mCellar v{}\x1b[0m", env!("CARGO_PKG_VERSION"))?;
        writeln!(out, "Four rooms, a few things worth taking. Type q to leave.\n")
    }
}

fn write_lines<W: Write>(out: &mut W, lines: &[String]) -> io::Result<()> {
    for line in lines {
        writeln!(out, "{line}")?;
    }
    Ok(())
}
