//! Command execution through a session.

use cellar_parser::CommandParser;
use cellar_runtime::Session;

fn run(session: &mut Session, line: &str) -> Vec<String> {
    session.execute(&CommandParser::parse(line)).unwrap().lines
}

#[test]
fn starting_description() {
    let session = Session::new().unwrap();
    assert_eq!(
        session.describe_location().unwrap(),
        "current room's description: the entrance to the dungeon"
    );
}

#[test]
fn move_and_look() {
    let mut session = Session::new().unwrap();
    assert_eq!(
        run(&mut session, "w"),
        ["current room's description: a room filled with weapons"]
    );
    assert_eq!(
        run(&mut session, "look"),
        [
            "current room's description: a room filled with weapons",
            "items in the room: ",
            "Shield",
            "Sword",
        ]
    );
}

#[test]
fn blocked_and_invalid() {
    let mut session = Session::new().unwrap();
    assert_eq!(run(&mut session, "s"), ["you can't go that way!"]);
    assert_eq!(run(&mut session, "jump"), ["invalid direction. try again."]);
}

#[test]
fn take_and_inventory() {
    let mut session = Session::new().unwrap();
    assert_eq!(run(&mut session, "take Anything"), ["there's no Anything in this room!"]);
    assert_eq!(run(&mut session, "inventory"), ["your inventory: ", "Anything"]);
}

#[test]
fn quit_response() {
    let mut session = Session::new().unwrap();
    let response = session.execute(&CommandParser::parse("q")).unwrap();
    assert!(response.quit);
    assert_eq!(response.lines, ["bye!"]);
}

#[test]
fn turns_count_executed_commands() {
    let mut session = Session::new().unwrap();
    run(&mut session, "n");
    run(&mut session, "nonsense");
    assert_eq!(session.turns(), 2);
}
