//! Error types for Cellar.
//!
//! Uses `thiserror` for error definitions. Ordinary game outcomes such as a
//! blocked exit or a missing item are not errors; these types cover broken
//! invariants and I/O failures only.

use std::fmt;
use std::io;

use thiserror::Error;

use crate::room_id::RoomId;

/// The main error type for Cellar operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates a room not found error.
    #[must_use]
    pub fn room_not_found(id: RoomId) -> Self {
        Self::new(ErrorKind::RoomNotFound(id))
    }

    /// Creates a line editor error.
    #[must_use]
    pub fn editor(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Editor(message.into()))
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal(message.into()))
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Self::new(ErrorKind::Io(err))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A room id does not name a room in the world arena.
    #[error("room not found: {0:?}")]
    RoomNotFound(RoomId),

    /// The line editor failed to initialize or read.
    #[error("line editor error: {0}")]
    Editor(String),

    /// Reading input or writing output failed.
    #[error("i/o error: {0}")]
    Io(#[source] io::Error),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// The operation that was running, e.g. `"take"`.
    pub operation: Option<String>,
    /// The room the player was in.
    pub room: Option<RoomId>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the operation name.
    #[must_use]
    pub fn with_operation(mut self, operation: impl Into<String>) -> Self {
        self.operation = Some(operation.into());
        self
    }

    /// Sets the room.
    #[must_use]
    pub fn with_room(mut self, room: RoomId) -> Self {
        self.room = Some(room);
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.operation, self.room) {
            (Some(op), Some(room)) => write!(f, "during {op} in {room}"),
            (Some(op), None) => write!(f, "during {op}"),
            (None, Some(room)) => write!(f, "in {room}"),
            (None, None) => Ok(()),
        }
    }
}

/// Result type alias using Cellar's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
