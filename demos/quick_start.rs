//! Smallest useful railway: validate, transform, observe.
//!
//! Run with: cargo run --example quick_start

use railway::prelude::*;

fn parse_age(raw: &str) -> MessageOutcome<u8> {
    raw.parse::<u8>()
        .map_err(|e| {
            Message::builder()
                .code(400)
                .text("age is not a number")
                .details_from_error(&e)
                .build()
        })
        .into_outcome()
        .ensure(|age| *age >= 18, msg!("must be an adult"))
}

fn main() {
    let ok = parse_age("42").map(|age| age + 1);
    println!("{ok}");

    let underage = parse_age("12");
    println!("{underage}");

    let not_a_number = parse_age("forty-two")
        .on_failure_with(|message| eprintln!("rejected: {message}"));
    println!("{not_a_number}");

    // Combining independent validations: the first failure wins.
    let combined = combine!(
        parse_age("42"),
        parse_age("7"),
        parse_age("not-a-number"),
    );
    println!("{combined:?}");
}
