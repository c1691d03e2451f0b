//! Line editor abstraction for the REPL.
//!
//! The REPL reads through the [`LineEditor`] trait. [`RustylineEditor`] is
//! used at an interactive terminal; [`PlainEditor`] reads raw lines from any
//! `BufRead`, which covers piped stdin and scripted input.

use std::borrow::Cow;
use std::io::{self, BufRead, Stdin, StdinLock, Stdout, Write};

use cellar_foundation::{Error, Result};
use cellar_parser::CommandParser;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::{CmdKind, Highlighter};
use rustyline::hint::HistoryHinter;
use rustyline::history::DefaultHistory;
use rustyline::{Completer, Config, Context, Editor, Helper, Hinter, Validator};

use crate::highlight::CommandHighlighter;

/// Result of reading a line from the editor.
#[derive(Debug)]
pub enum ReadResult {
    /// A line was successfully read.
    Line(String),
    /// User pressed Ctrl+C.
    Interrupted,
    /// User pressed Ctrl+D, or input ran out.
    Eof,
}

/// Abstraction over line input.
pub trait LineEditor {
    /// Read a line with the given prompt.
    ///
    /// # Errors
    ///
    /// Returns an error if reading from the terminal fails.
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult>;

    /// Add a line to history.
    fn add_history(&mut self, line: &str);
}

/// Helper for rustyline that provides completion, hints, and highlighting.
#[derive(Helper, Completer, Hinter, Validator)]
struct CellarHelper {
    #[rustyline(Completer)]
    completer: CommandCompleter,
    #[rustyline(Hinter)]
    hinter: HistoryHinter,
    highlighter: CommandHighlighter,
}

impl Highlighter for CellarHelper {
    fn highlight<'l>(&self, line: &'l str, pos: usize) -> Cow<'l, str> {
        self.highlighter.highlight(line, pos)
    }

    fn highlight_prompt<'b, 's: 'b, 'p: 'b>(
        &'s self,
        prompt: &'p str,
        default: bool,
    ) -> Cow<'b, str> {
        if default {
            Cow::Owned(format!("\x1b[1m{prompt}\x1b[0m"))
        } else {
            Cow::Borrowed(prompt)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _kind: CmdKind) -> bool {
        true
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Cow::Owned(format!("\x1b[2m{hint}\x1b[0m"))
    }
}

/// Completes command words at the start of the line.
struct CommandCompleter {
    keywords: Vec<&'static str>,
}

impl CommandCompleter {
    fn new() -> Self {
        Self {
            keywords: CommandParser::KEYWORDS.to_vec(),
        }
    }
}

impl Completer for CommandCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let typed = &line[..pos];

        // Item names after `take ` are free text.
        if typed.contains(' ') {
            return Ok((pos, Vec::new()));
        }

        let candidates = self
            .keywords
            .iter()
            .filter(|kw| kw.starts_with(typed))
            .map(|kw| Pair {
                display: kw.trim_end().to_string(),
                replacement: (*kw).to_string(),
            })
            .collect();

        Ok((0, candidates))
    }
}

/// Line editor implementation using rustyline.
pub struct RustylineEditor {
    editor: Editor<CellarHelper, DefaultHistory>,
}

impl RustylineEditor {
    /// Creates a new rustyline-based editor.
    ///
    /// # Errors
    ///
    /// Returns an error if rustyline initialization fails.
    pub fn new() -> Result<Self> {
        let config = Config::builder()
            .auto_add_history(false)
            .max_history_size(1000)
            .map_err(|e| Error::editor(e.to_string()))?
            .build();

        let helper = CellarHelper {
            completer: CommandCompleter::new(),
            hinter: HistoryHinter::new(),
            highlighter: CommandHighlighter::new(),
        };

        let mut editor = Editor::with_config(config).map_err(|e| Error::editor(e.to_string()))?;
        editor.set_helper(Some(helper));

        Ok(Self { editor })
    }
}

impl LineEditor for RustylineEditor {
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(ReadResult::Line(line)),
            Err(ReadlineError::Interrupted) => Ok(ReadResult::Interrupted),
            Err(ReadlineError::Eof) => Ok(ReadResult::Eof),
            Err(e) => Err(Error::editor(e.to_string())),
        }
    }

    fn add_history(&mut self, line: &str) {
        let _ = self.editor.add_history_entry(line);
    }
}

/// Reads raw lines, writing the prompt to `output` first.
pub struct PlainEditor<R, W> {
    input: R,
    output: W,
}

impl PlainEditor<StdinLock<'static>, Stdout> {
    /// An editor over the process's stdin and stdout.
    #[must_use]
    pub fn stdio() -> Self {
        let stdin: Stdin = io::stdin();
        Self::new(stdin.lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> PlainEditor<R, W> {
    /// Creates an editor reading from `input` and prompting on `output`.
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Returns the prompt sink.
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> LineEditor for PlainEditor<R, W> {
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult> {
        self.output.write_all(prompt.as_bytes())?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(ReadResult::Eof);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(ReadResult::Line(line))
    }

    fn add_history(&mut self, _line: &str) {}
}
