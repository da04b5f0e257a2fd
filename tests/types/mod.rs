use railway::prelude::*;

pub mod message;
pub mod violation;

// Cross-type coverage: the railway as it is meant to be ridden, with
// Message as the failure payload.

fn find_even(n: i32) -> MessageOutcome<i32> {
    if n % 2 == 0 {
        Outcome::with_value(n)
    } else {
        Outcome::with_message(msg!("{} is odd", n))
    }
}

#[test]
fn message_railway_short_circuits_on_first_failure() {
    let mut failures = Vec::new();

    let outcome = find_even(4)
        .flat_map(|n| find_even(n + 1))
        .map(|n| n * 10)
        .on_failure_with(|m| failures.push(m.text().to_string()));

    assert!(outcome.is_failure());
    assert_eq!(failures, ["5 is odd"]);
}

#[test]
fn message_railway_keeps_the_original_error_through_later_steps() {
    let outcome = find_even(3)
        .ensure(|n| *n > 100, msg!("too small"))
        .map(|n| n + 1);

    // ensure and map never ran; the first failure flowed through unchanged.
    assert_eq!(outcome.try_error().unwrap().text(), "3 is odd");
}

#[test]
fn combined_validations_report_the_leftmost_failure() {
    let combined = combine!(find_even(2), find_even(7), find_even(9));

    assert_eq!(combined.try_error().unwrap().text(), "7 is odd");
}

#[test]
fn outcome_display_includes_the_message_display() {
    let outcome: MessageOutcome<i32> =
        Outcome::with_error(Message::builder().source("here").text("boom").build());

    assert_eq!(
        outcome.to_string(),
        "Result (Failure: ERROR (1, here, 0): \"boom\" (details: \"No details\"))"
    );
}
