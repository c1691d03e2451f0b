//! Moving and looking around.

use cellar_engine::{Game, Movement};
use cellar_storage::dungeon::{ARMORY, ENTRANCE, LIBRARY, TREASURE_ROOM};
use cellar_storage::{Direction, World};

fn entered(description: &str, movement: &Movement) -> bool {
    matches!(movement, Movement::Entered { description: d, .. } if d == description)
}

#[test]
fn north_then_south_returns_to_entrance() {
    let (mut game, rooms) = Game::dungeon().unwrap();
    assert!(entered(TREASURE_ROOM, &game.go(Direction::North).unwrap()));
    assert!(entered(ENTRANCE, &game.go(Direction::South).unwrap()));
    assert_eq!(game.location(), rooms.entrance);
}

#[test]
fn south_from_entrance_is_blocked() {
    let (mut game, rooms) = Game::dungeon().unwrap();
    assert_eq!(game.go(Direction::South).unwrap(), Movement::Blocked);
    assert_eq!(game.location(), rooms.entrance);
}

#[test]
fn east_and_west_rooms() {
    let (mut game, rooms) = Game::dungeon().unwrap();
    assert!(entered(LIBRARY, &game.go(Direction::East).unwrap()));
    assert_eq!(game.location(), rooms.library);
    assert_eq!(game.go(Direction::East).unwrap(), Movement::Blocked);
    game.go(Direction::West).unwrap();
    assert!(entered(ARMORY, &game.go(Direction::West).unwrap()));
    assert_eq!(game.location(), rooms.armory);
}

#[test]
fn look_lists_room_items() {
    let (mut game, _) = Game::dungeon().unwrap();
    let view = game.look().unwrap();
    assert_eq!(view.description, ENTRANCE);
    assert!(view.items.is_empty());

    game.go(Direction::North).unwrap();
    assert_eq!(game.look().unwrap().items, ["Gold Crown"]);
}

#[test]
fn custom_world_starts_at_its_entrance() {
    let mut builder = World::builder();
    let yard = builder.room("a yard");
    let shed = builder.room("a shed");
    builder.link_both(yard, Direction::North, shed).unwrap();
    let mut game = Game::new(builder.build(shed).unwrap());

    assert_eq!(game.location(), shed);
    assert!(entered("a yard", &game.go(Direction::South).unwrap()));
}
