use std::collections::HashSet;

use railway::prelude::*;

// combine!

#[test]
fn combine_accepts_heterogeneous_success_payloads() {
    let combined = combine!(
        Outcome::<_, &str>::with_value("alice"),
        Outcome::<_, &str>::with_value(42),
        Outcome::<(), &str>::without_value(),
    );

    assert_eq!(combined, Outcome::without_value());
}

#[test]
fn combine_returns_the_first_failure() {
    let combined = combine!(
        Outcome::<i32, _>::with_value(1),
        Outcome::<i32, _>::with_error("first"),
        Outcome::<i32, _>::with_error("second"),
    );

    assert_eq!(combined.try_error(), Ok(&"first"));
}

#[test]
fn combine_works_with_a_single_argument() {
    let combined = combine!(Outcome::<_, &str>::with_value(7));

    assert_eq!(combined, Outcome::without_value());
}

#[test]
fn combine_tolerates_a_trailing_comma() {
    let combined = combine!(
        Outcome::<_, &str>::with_value(1),
        Outcome::<_, &str>::with_value(2),
    );

    assert!(combined.is_success());
}

// msg!

#[test]
fn msg_formats_like_format() {
    let message = msg!("user {} not found in {}", 42, "cache");

    assert_eq!(message.text(), "user 42 not found in cache");
    assert_eq!(message.level(), MessageLevel::Error);
}

#[test]
fn msg_captures_the_invocation_site_as_source() {
    let message = msg!("lost");

    assert!(message.source().contains(file!()));
}

// value_object!

value_object! {
    /// A user's login name.
    pub struct UserName(String);
}

value_object! {
    struct Port(u16);
}

#[test]
fn value_object_new_accepts_anything_into_the_inner_type() {
    let name = UserName::new("alice");

    assert_eq!(name.value().as_str(), "alice");
    assert_eq!(name.clone().into_value(), "alice");
}

#[test]
fn value_objects_compare_by_value() {
    assert_eq!(UserName::new("alice"), UserName::new("alice"));
    assert_ne!(UserName::new("alice"), UserName::new("bob"));
}

#[test]
fn value_objects_hash_by_value() {
    let mut seen = HashSet::new();
    seen.insert(UserName::new("alice"));

    assert!(seen.contains(&UserName::new("alice")));
    assert!(!seen.contains(&UserName::new("bob")));
}

#[test]
fn value_object_display_names_the_type() {
    assert_eq!(UserName::new("alice").to_string(), "UserName (alice)");
    assert_eq!(Port::new(8080u16).to_string(), "Port (8080)");
}

#[test]
fn from_option_accepts_a_present_value() {
    let port = Port::from_option(Some(8080)).unwrap();

    assert_eq!(*port.value(), 8080);
}

#[test]
fn from_option_rejects_absence_naming_the_type() {
    let error = UserName::from_option(None).unwrap_err();

    assert_eq!(error.parameter(), "UserName");
    assert_eq!(error.to_string(), "value of UserName may not be absent");
}

#[test]
fn value_objects_ride_the_railway() {
    fn validated(raw: Option<String>) -> MessageOutcome<UserName> {
        UserName::from_option(raw)
            .map_err(|e| msg!("{}", e))
            .into_outcome()
    }

    assert!(validated(Some("alice".into())).is_success());

    let failed = validated(None);
    assert_eq!(
        failed.try_error().unwrap().text(),
        "value of UserName may not be absent"
    );
}
