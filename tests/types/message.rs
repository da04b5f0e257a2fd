use std::error::Error;
use std::fmt;
use std::hash::{DefaultHasher, Hash, Hasher};

use railway::{Message, MessageLevel};

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn builder_defaults_every_field() {
    let message = Message::builder().build();

    assert_eq!(message.level(), MessageLevel::Error);
    assert_eq!(message.code(), 1);
    assert_eq!(message.index(), 0);
    assert_eq!(message.text(), "No text");
    assert_eq!(message.details(), "No details");
}

#[test]
fn builder_sets_every_field() {
    let message = Message::builder()
        .level(MessageLevel::Info)
        .code(204)
        .source("cache")
        .index(2)
        .text("warmed")
        .details("prefetched on boot")
        .build();

    assert_eq!(message.level(), MessageLevel::Info);
    assert_eq!(message.code(), 204);
    assert_eq!(message.source(), "cache");
    assert_eq!(message.index(), 2);
    assert_eq!(message.text(), "warmed");
    assert_eq!(message.details(), "prefetched on boot");
}

#[test]
fn default_source_points_at_the_builder_call_site() {
    let message = Message::builder().build();

    // Best-effort provenance: file of the call plus a line number.
    assert!(message.source().contains(file!()));
    assert!(message.source().contains(':'));
}

#[test]
fn with_error_presets_level_and_text() {
    let message = Message::with_error("disk full");

    assert_eq!(message.level(), MessageLevel::Error);
    assert_eq!(message.text(), "disk full");
    assert_eq!(message.code(), 1);
}

#[test]
fn error_builder_is_error_level() {
    let message = Message::error().text("boom").build();
    assert_eq!(message.level(), MessageLevel::Error);
}

#[test]
fn display_is_bit_exact() {
    let message = Message::builder()
        .source("Test")
        .text("The error")
        .details("Inner error")
        .build();

    assert_eq!(
        message.to_string(),
        "ERROR (1, Test, 0): \"The error\" (details: \"Inner error\")"
    );
}

#[test]
fn level_display_is_upper_case() {
    assert_eq!(MessageLevel::Error.to_string(), "ERROR");
    assert_eq!(MessageLevel::Warning.to_string(), "WARNING");
    assert_eq!(MessageLevel::Info.to_string(), "INFO");
}

#[test]
fn equality_and_hash_cover_all_fields() {
    let build = || {
        Message::builder()
            .level(MessageLevel::Warning)
            .code(7)
            .source("same")
            .index(1)
            .text("text")
            .details("details")
            .build()
    };

    let a = build();
    let b = build();
    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&b));

    let different_code = Message::builder()
        .level(MessageLevel::Warning)
        .code(8)
        .source("same")
        .index(1)
        .text("text")
        .details("details")
        .build();
    assert_ne!(a, different_code);

    let different_source = Message::builder()
        .level(MessageLevel::Warning)
        .code(7)
        .source("other")
        .index(1)
        .text("text")
        .details("details")
        .build();
    assert_ne!(a, different_source);
}

#[test]
fn has_code_matches_only_the_exact_code() {
    let message = Message::builder().code(404).build();

    assert!(message.has_code(404));
    assert!(!message.has_code(405));
}

#[test]
fn default_message_uses_the_no_source_placeholder() {
    let message = Message::default();

    assert_eq!(message.source(), "No source");
    assert_eq!(message.text(), "No text");
}

#[derive(Debug)]
struct OuterError {
    inner: InnerError,
}

#[derive(Debug)]
struct InnerError;

impl fmt::Display for OuterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "request failed")
    }
}

impl fmt::Display for InnerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "connection reset")
    }
}

impl Error for OuterError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.inner)
    }
}

impl Error for InnerError {}

#[test]
fn details_from_error_renders_the_source_chain() {
    let error = OuterError { inner: InnerError };
    let message = Message::builder().details_from_error(&error).build();

    assert_eq!(message.details(), "request failed -> connection reset");
}

#[test]
fn message_is_a_std_error() {
    let message = Message::with_error("boxed");
    let boxed: Box<dyn Error> = Box::new(message);

    assert!(boxed.to_string().contains("\"boxed\""));
}

#[cfg(feature = "serde")]
#[test]
fn message_serializes_and_deserializes() {
    let message = Message::builder()
        .level(MessageLevel::Warning)
        .code(7)
        .source("roundtrip")
        .text("text")
        .build();

    let json = serde_json::to_string(&message).unwrap();
    let back: Message = serde_json::from_str(&json).unwrap();
    assert_eq!(back, message);
}
