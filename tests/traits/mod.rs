pub mod into_message;
pub mod outcome_ext;
