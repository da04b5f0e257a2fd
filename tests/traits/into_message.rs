use railway::{IntoMessage, Message, MessageLevel, MessageOutcome, Outcome};

#[test]
fn str_converts_to_an_error_level_message() {
    let message = "access denied".into_message();

    assert_eq!(message.level(), MessageLevel::Error);
    assert_eq!(message.text(), "access denied");
}

#[test]
fn string_converts_to_an_error_level_message() {
    let message = String::from("access denied").into_message();

    assert_eq!(message.text(), "access denied");
}

#[test]
fn message_converts_to_itself_unchanged() {
    let original = Message::builder()
        .level(MessageLevel::Warning)
        .code(42)
        .source("kept")
        .text("unchanged")
        .build();

    assert_eq!(original.clone().into_message(), original);
}

#[test]
fn string_conversion_captures_the_call_site() {
    let message = "lost".into_message();

    assert!(message.source().contains(file!()));
}

#[test]
fn with_message_builds_a_failed_outcome() {
    let outcome: MessageOutcome<u32> = Outcome::with_message("no such user");

    assert!(outcome.is_failure());
    assert_eq!(outcome.try_error().unwrap().text(), "no such user");
}

#[test]
fn with_message_accepts_a_prebuilt_message() {
    let message = Message::builder().code(404).text("gone").build();
    let outcome: MessageOutcome<u32> = Outcome::with_message(message.clone());

    assert_eq!(outcome.try_error(), Ok(&message));
}
