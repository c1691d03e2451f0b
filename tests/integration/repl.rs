//! The REPL over scripted input.

use cellar_runtime::{PlainEditor, Repl, ReplConfig, Session};

fn play(script: &str, config: ReplConfig) -> String {
    let editor = PlainEditor::new(script.as_bytes(), std::io::sink());
    let mut repl = Repl::with_editor(editor, Session::new().unwrap()).with_config(config);
    let mut out = Vec::new();
    repl.run_with_output(&mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn quiet_transcript() {
    let text = play("n\ns\nq\n", ReplConfig::new().with_banner(false));
    assert_eq!(
        text,
        "current room's description: the entrance to the dungeon\n\
         current room's description: a room filled with treasure\n\
         current room's description: the entrance to the dungeon\n\
         bye!\n"
    );
}

#[test]
fn blank_lines_print_nothing() {
    let text = play("\n\n\nq\n", ReplConfig::new().with_banner(false));
    assert_eq!(text.lines().count(), 2);
}

#[test]
fn whitespace_only_line_is_invalid() {
    let text = play("   \nq\n", ReplConfig::new().with_banner(false));
    assert_eq!(
        text,
        "current room's description: the entrance to the dungeon\n\
         invalid direction. try again.\n\
         bye!\n"
    );
}

#[test]
fn demo_precedes_game() {
    let config = ReplConfig::new().with_banner(false).with_demo(true);
    let text = play("q\n", config);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines[..9],
        [
            "Inventory:",
            "Rusty Key",
            "Shield",
            "Sword",
            "Removing Shield...",
            "",
            "Inventory:",
            "Rusty Key",
            "Sword",
        ]
    );
    assert_eq!(lines[9], "current room's description: the entrance to the dungeon");
}
