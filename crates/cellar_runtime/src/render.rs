//! Console text for game outcomes.

use cellar_engine::{Movement, RoomView, TakeOutcome};

/// Printed when a move finds no exit.
pub const BLOCKED: &str = "you can't go that way!";
/// Printed for any unrecognized command.
pub const INVALID: &str = "invalid direction. try again.";
/// Printed when the session ends.
pub const FAREWELL: &str = "bye!";
/// Header before the room's items.
pub const ROOM_ITEMS_HEADER: &str = "items in the room: ";
/// Header before the player's items.
pub const INVENTORY_HEADER: &str = "your inventory: ";

/// The line naming the room the player is in.
#[must_use]
pub fn description(description: &str) -> String {
    format!("current room's description: {description}")
}

/// Lines for a move attempt.
#[must_use]
pub fn movement(movement: &Movement) -> Vec<String> {
    match movement {
        Movement::Entered { description: d, .. } => vec![description(d)],
        Movement::Blocked => vec![BLOCKED.to_string()],
    }
}

/// Lines for `look`: description, header, one line per item.
#[must_use]
pub fn room_view(view: &RoomView) -> Vec<String> {
    let mut lines = Vec::with_capacity(view.items.len() + 2);
    lines.push(description(&view.description));
    lines.push(ROOM_ITEMS_HEADER.to_string());
    lines.extend(view.items.iter().cloned());
    lines
}

/// Lines for `inventory`: header, one line per item.
#[must_use]
pub fn inventory<'a>(names: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    std::iter::once(INVENTORY_HEADER.to_string())
        .chain(names.into_iter().map(String::from))
        .collect()
}

/// The line for a take attempt.
#[must_use]
pub fn take(outcome: &TakeOutcome) -> String {
    match outcome {
        TakeOutcome::Acquired(name) => format!("you took the {name}!"),
        TakeOutcome::NotPresent(name) => format!("there's no {name} in this room!"),
    }
}
