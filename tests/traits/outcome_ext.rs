use railway::{Outcome, OptionExt, ResultExt};

#[test]
fn ok_result_rides_the_success_rail() {
    let result: Result<i32, &str> = Ok(5);

    assert_eq!(result.into_outcome(), Outcome::with_value(5));
}

#[test]
fn err_result_rides_the_failure_rail() {
    let result: Result<i32, &str> = Err("broken");

    assert_eq!(result.into_outcome(), Outcome::with_error("broken"));
}

#[test]
fn into_outcome_chains_straight_into_combinators() {
    let doubled = "21"
        .parse::<i32>()
        .map_err(|_| "not a number")
        .into_outcome()
        .map(|n| n * 2);

    assert_eq!(doubled.try_value(), Ok(&42));
}

#[test]
fn some_becomes_a_success_with_the_value() {
    let option = Some(5);

    assert_eq!(option.outcome_or("missing"), Outcome::with_value(5));
}

#[test]
fn none_becomes_a_failure_with_the_given_error() {
    let option: Option<i32> = None;

    assert_eq!(option.outcome_or("missing"), Outcome::with_error("missing"));
}

#[test]
fn outcome_or_does_not_touch_the_error_on_some() {
    // The error is eagerly constructed but unused on the Some path.
    let outcome = Some("found").outcome_or(String::from("missing"));

    assert_eq!(outcome.try_value(), Ok(&"found"));
}
