//! Settings for a REPL run.

use tracing::level_filters::LevelFilter;

/// The prompt printed before every command.
pub const DEFAULT_PROMPT: &str =
    "enter a direction (n/s/e/w), a stationary action (look/take {item}/inventory) or 'q' to quit: ";

/// How much the logger writes to stderr.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    /// Warnings and errors only.
    #[default]
    Quiet,
    /// Session start and end.
    Info,
    /// Every move and take.
    Debug,
}

impl Verbosity {
    /// Maps a count of `-v` flags to a verbosity.
    #[must_use]
    pub const fn from_occurrences(count: u8) -> Self {
        match count {
            0 => Self::Quiet,
            1 => Self::Info,
            _ => Self::Debug,
        }
    }

    /// Returns the default log level for this verbosity.
    #[must_use]
    pub const fn level_filter(self) -> LevelFilter {
        match self {
            Self::Quiet => LevelFilter::WARN,
            Self::Info => LevelFilter::INFO,
            Self::Debug => LevelFilter::DEBUG,
        }
    }
}

/// Settings for a [`Repl`](crate::Repl).
#[derive(Clone, Debug)]
pub struct ReplConfig {
    /// Printed before reading each command.
    pub prompt: String,

    /// Print the welcome banner before the game starts.
    pub show_banner: bool,

    /// Run the inventory walkthrough before the game starts.
    pub run_demo: bool,

    /// Read raw lines from stdin instead of using the line editor.
    pub plain_input: bool,

    /// Log level for stderr.
    pub verbosity: Verbosity,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            show_banner: true,
            run_demo: false,
            plain_input: false,
            verbosity: Verbosity::Quiet,
        }
    }
}

impl ReplConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set the prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Builder method to show or hide the banner.
    #[must_use]
    pub fn with_banner(mut self, show: bool) -> Self {
        self.show_banner = show;
        self
    }

    /// Builder method to enable the inventory walkthrough.
    #[must_use]
    pub fn with_demo(mut self, run: bool) -> Self {
        self.run_demo = run;
        self
    }

    /// Builder method to read plain lines from stdin.
    #[must_use]
    pub fn with_plain_input(mut self, plain: bool) -> Self {
        self.plain_input = plain;
        self
    }

    /// Builder method to set the log verbosity.
    #[must_use]
    pub fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }
}
