//! Error type tests.

use cellar_foundation::{Error, ErrorContext, ErrorKind, RoomId};

#[test]
fn room_not_found_message() {
    let err = Error::room_not_found(RoomId::new(4));
    assert_eq!(err.to_string(), "room not found: RoomId(4)");
}

#[test]
fn editor_and_internal_messages() {
    assert_eq!(Error::editor("no tty").to_string(), "line editor error: no tty");
    assert_eq!(Error::internal("oops").to_string(), "internal error: oops");
}

#[test]
fn context_is_kept_alongside_kind() {
    let err = Error::room_not_found(RoomId::new(1))
        .with_context(ErrorContext::new().with_operation("go").with_room(RoomId::new(2)));
    assert!(matches!(err.kind, ErrorKind::RoomNotFound(_)));
    assert_eq!(err.context.unwrap().to_string(), "during go in Room(2)");
}

#[test]
fn error_is_std_error() {
    fn assert_error<E: std::error::Error + Send + Sync + 'static>(_: &E) {}
    assert_error(&Error::internal("x"));
}
