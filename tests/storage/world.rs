//! World building and lookup.

use cellar_foundation::{ErrorKind, RoomId};
use cellar_storage::{Direction, World};

#[test]
fn one_way_link() {
    let mut builder = World::builder();
    let cave = builder.room("a cave");
    let pit = builder.room("a pit");
    builder.link(cave, Direction::South, pit).unwrap();
    let world = builder.build(cave).unwrap();

    assert_eq!(world.exit(cave, Direction::South).unwrap(), Some(pit));
    assert_eq!(world.exit(pit, Direction::North).unwrap(), None);
}

#[test]
fn relinking_replaces_exit() {
    let mut builder = World::builder();
    let a = builder.room("a");
    let b = builder.room("b");
    let c = builder.room("c");
    builder
        .link(a, Direction::East, b)
        .unwrap()
        .link(a, Direction::East, c)
        .unwrap();
    let world = builder.build(a).unwrap();

    assert_eq!(world.exit(a, Direction::East).unwrap(), Some(c));
}

#[test]
fn unknown_room_is_an_error() {
    let mut builder = World::builder();
    let only = builder.room("alone");
    let ghost = RoomId::new(7);

    let err = builder.link(only, Direction::West, ghost).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::RoomNotFound(id) if id == ghost));
    assert!(builder.item(ghost, "Lamp").is_err());

    let world = builder.build(only).unwrap();
    assert!(world.room(ghost).is_err());
    assert!(world.exit(ghost, Direction::North).is_err());
}

#[test]
fn entrance_must_exist() {
    let builder = World::builder();
    assert!(builder.build(RoomId::new(0)).is_err());
}

#[test]
fn room_inventory_is_mutable_through_world() {
    let mut builder = World::builder();
    let hall = builder.room("a hall");
    builder.item(hall, "Lamp").unwrap();
    let mut world = builder.build(hall).unwrap();

    assert!(world.room_inventory_mut(hall).unwrap().remove("Lamp"));
    assert!(world.room(hall).unwrap().inventory.is_empty());
}

#[test]
fn directions_round_trip_through_opposite() {
    for dir in Direction::ALL {
        assert_eq!(dir.opposite().opposite(), dir);
        assert_ne!(dir.opposite(), dir);
        assert_eq!(Direction::from_short(dir.short()), Some(dir));
    }
}
