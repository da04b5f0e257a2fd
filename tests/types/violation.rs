use std::error::Error;

use railway::{InvalidArgument, Outcome, Violation};

#[test]
fn failed_outcome_reports_its_error_through_the_violation() {
    let outcome: Outcome<i32, &str> = Outcome::with_error("nope");

    assert_eq!(outcome.try_value(), Err(Violation::FailedHasNoValue(&"nope")));
}

#[test]
fn empty_success_reports_a_value_free_violation() {
    let outcome: Outcome<i32, &str> = Outcome::without_value();

    assert_eq!(outcome.try_value(), Err(Violation::EmptyHasNoValue));
}

#[test]
fn successful_outcome_has_no_error_to_hand_out() {
    let outcome: Outcome<i32, &str> = Outcome::with_value(1);

    assert_eq!(outcome.try_error(), Err(Violation::SuccessfulHasNoError));
}

#[test]
fn into_inner_error_recovers_the_carried_error() {
    let violation: Violation<&str> = Violation::FailedHasNoValue("boom");
    assert_eq!(violation.into_inner_error(), Some("boom"));

    let violation: Violation<&str> = Violation::EmptyHasNoValue;
    assert_eq!(violation.into_inner_error(), None);

    let violation: Violation<&str> = Violation::SuccessfulHasNoError;
    assert_eq!(violation.into_inner_error(), None);
}

#[test]
fn violation_display_names_the_misuse() {
    let failed: Violation<&str> = Violation::FailedHasNoValue("boom");
    assert_eq!(failed.to_string(), "failed Outcome has no value (error: boom)");

    let empty: Violation<&str> = Violation::EmptyHasNoValue;
    assert_eq!(
        empty.to_string(),
        "successful Outcome without a value has no value"
    );

    let no_error: Violation<&str> = Violation::SuccessfulHasNoError;
    assert_eq!(no_error.to_string(), "successful Outcome has no error");
}

#[test]
fn violation_is_a_std_error() {
    let violation: Violation<&str> = Violation::EmptyHasNoValue;
    let boxed: Box<dyn Error> = Box::new(violation);

    assert!(boxed.to_string().contains("has no value"));
}

#[test]
fn invalid_argument_names_the_parameter() {
    let error = InvalidArgument::missing_value("password");

    assert_eq!(error.parameter(), "password");
    assert_eq!(error.to_string(), "value of password may not be absent");
}

#[test]
fn invalid_argument_is_a_std_error() {
    let boxed: Box<dyn Error> = Box::new(InvalidArgument::missing_value("name"));

    assert!(boxed.to_string().contains("name"));
}
