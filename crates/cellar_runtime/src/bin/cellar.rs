//! Cellar CLI entry point.

use std::env;
use std::io::{self, IsTerminal};
use std::process::ExitCode;

use cellar_runtime::editor::LineEditor;
use cellar_runtime::{PlainEditor, Repl, ReplConfig, RustylineEditor, Session, Verbosity, logging};

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    show_help: bool,
    show_version: bool,
    plain: bool,
    no_banner: bool,
    demo: bool,
    verbose: u8,
}

impl CliConfig {
    fn repl_config(&self, plain_input: bool) -> ReplConfig {
        ReplConfig::new()
            .with_banner(!self.no_banner)
            .with_demo(self.demo)
            .with_plain_input(plain_input)
            .with_verbosity(Verbosity::from_occurrences(self.verbose))
    }
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();

    for arg in args.into_iter().skip(1) {
        match arg.as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "--plain" => config.plain = true,
            "--no-banner" => config.no_banner = true,
            "--demo" => config.demo = true,
            "-v" | "--verbose" => config.verbose = config.verbose.saturating_add(1),
            "-vv" => config.verbose = config.verbose.saturating_add(2),
            other => return Err(format!("unknown option: {other}").into()),
        }
    }

    Ok(config)
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let cli = parse_args(args)?;

    if cli.show_help {
        print_help();
        return Ok(());
    }

    if cli.show_version {
        println!("cellar {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // Piped input gets raw line reading; the line editor needs a terminal.
    let plain = cli.plain || !io::stdin().is_terminal();
    let config = cli.repl_config(plain);
    logging::init(config.verbosity)?;

    let session = Session::new()?;
    if config.plain_input {
        drive(Repl::with_editor(PlainEditor::stdio(), session), config)
    } else {
        drive(Repl::with_editor(RustylineEditor::new()?, session), config)
    }
}

fn drive<E: LineEditor>(repl: Repl<E>, config: ReplConfig) -> Result<(), Box<dyn std::error::Error>> {
    repl.with_config(config).run()?;
    Ok(())
}

fn print_help() {
    println!(
        "\x1b[1mCellar\x1b[0m - a four-room text adventure

\x1b[1mUSAGE:\x1b[0m
    cellar [OPTIONS]

\x1b[1mOPTIONS:\x1b[0m
    -h, --help         Print help information
    -V, --version      Print version information
        --plain        Read commands line by line from stdin (no line editor)
        --no-banner    Do not print the welcome banner
        --demo         Show the inventory walkthrough before playing
    -v, --verbose      Log more to stderr (repeat for debug output)

\x1b[1mCOMMANDS:\x1b[0m
    n, s, e, w         Walk north, south, east, or west
    look               Describe the room and list its items
    inventory          List what you carry
    take <item>        Pick up an item by its exact name
    q                  Quit

\x1b[1mENVIRONMENT:\x1b[0m
    RUST_LOG           Overrides the log filter, e.g. RUST_LOG=debug"
    );
}
