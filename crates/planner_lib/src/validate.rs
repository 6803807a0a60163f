//! Validation of client-supplied fields, checked once at the route boundary.
//!
//! Each function is a pure check returning the corresponding logical error on
//! failure, so the handlers can short-circuit with `?` before touching the
//! database.

use crate::error::{PlannerError, PlannerResult};

/// The format of an event datetime, like `2024-01-01 10:00:00`.
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Checks that the provided string is a well-formed event datetime.
///
/// The accepted shape is exactly `YYYY-MM-DD HH:MM:SS`, with zero-padded
/// fields and a valid calendar date.
pub fn check_datetime(datetime: &str) -> PlannerResult<()> {
    // chrono accepts non-padded numbers, so the length check keeps the
    // zero-padding mandatory.
    if datetime.len() == "0000-00-00 00:00:00".len()
        && chrono::NaiveDateTime::parse_from_str(datetime, DATETIME_FORMAT).is_ok()
    {
        Ok(())
    } else {
        Err(PlannerError::InvalidDatetime(datetime.to_owned()))
    }
}

/// Checks that the provided guest name is non-empty and only made of
/// alphabetic characters.
pub fn check_guest_name(name: &str) -> PlannerResult<()> {
    if !name.is_empty() && name.chars().all(|c| c.is_ascii_alphabetic()) {
        Ok(())
    } else {
        Err(PlannerError::InvalidGuestName(name.to_owned()))
    }
}
