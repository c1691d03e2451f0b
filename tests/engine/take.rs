//! Picking items up.

use cellar_engine::{Game, TakeOutcome};
use cellar_storage::Direction;

#[test]
fn take_sword_in_armory() {
    let (mut game, _) = Game::dungeon().unwrap();
    game.go(Direction::West).unwrap();

    assert_eq!(
        game.take("Sword").unwrap(),
        TakeOutcome::Acquired("Sword".to_string())
    );
    assert_eq!(game.look().unwrap().items, ["Shield"]);
    assert_eq!(game.show_inventory(), ["Sword"]);
}

#[test]
fn take_anything_at_entrance() {
    let (mut game, _) = Game::dungeon().unwrap();
    assert_eq!(
        game.take("Anything").unwrap(),
        TakeOutcome::NotPresent("Anything".to_string())
    );
    assert_eq!(game.show_inventory(), ["Anything"]);
}

#[test]
fn take_is_case_sensitive() {
    let (mut game, _) = Game::dungeon().unwrap();
    game.go(Direction::North).unwrap();

    assert!(matches!(game.take("gold crown").unwrap(), TakeOutcome::NotPresent(_)));
    assert_eq!(game.look().unwrap().items, ["Gold Crown"]);
}

#[test]
fn taken_items_travel_with_player() {
    let (mut game, _) = Game::dungeon().unwrap();
    game.go(Direction::East).unwrap();
    game.take("Dusty Book").unwrap();
    game.go(Direction::West).unwrap();
    game.go(Direction::West).unwrap();
    game.take("Shield").unwrap();

    assert_eq!(game.show_inventory(), ["Shield", "Dusty Book"]);
    assert_eq!(game.look().unwrap().items, ["Sword"]);
}
