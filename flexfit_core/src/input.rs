//! Caller-side checks for scheduler input.
//!
//! The engine accepts any input and never calls these. Front ends run them
//! first so users get a clear message instead of a degenerate plan.

use crate::{Error, Result, SchedulerInput};
use std::collections::HashSet;

/// Weekday names accepted in `available_days`
pub const WEEKDAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Canonical spelling of a weekday name, matched case-insensitively
pub fn normalize_weekday(name: &str) -> Option<&'static str> {
    let wanted = name.trim();
    WEEKDAYS
        .iter()
        .copied()
        .find(|day| day.eq_ignore_ascii_case(wanted))
}

/// Reject input the application refuses to plan for.
///
/// - at least one day must be selected
/// - all seven days is refused so the week keeps a rest day
/// - every day must be a weekday name, each at most once
/// - sessions must be at least one minute long
pub fn check(input: &SchedulerInput) -> Result<()> {
    if input.available_days.is_empty() {
        return Err(Error::InvalidInput("Select at least one day".into()));
    }
    if input.available_days.len() >= WEEKDAYS.len() {
        return Err(Error::InvalidInput(
            "Leave at least one rest day in the week".into(),
        ));
    }

    let mut seen = HashSet::new();
    for day in &input.available_days {
        let canonical = normalize_weekday(day)
            .ok_or_else(|| Error::InvalidInput(format!("Not a weekday: {}", day)))?;
        if !seen.insert(canonical) {
            return Err(Error::InvalidInput(format!("{} selected twice", canonical)));
        }
    }

    if input.minutes_per_session == 0 {
        return Err(Error::InvalidInput(
            "Minutes per session must be positive".into(),
        ));
    }

    Ok(())
}
