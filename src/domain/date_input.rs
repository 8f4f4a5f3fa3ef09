//! User date input parsing
//!
//! Entry and birthday dates are typed by hand in scenario files and on the
//! command line, so besides explicit dates a few relative forms are accepted.

use crate::error::{MemoriesError, Result};
use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// A date as typed by the user, resolved against a base date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateInput {
    Today,
    Yesterday,
    Tomorrow,
    /// Most recent occurrence of a weekday, today included
    Weekday(Weekday),
    /// Occurrence strictly before today
    LastWeekday(Weekday),
    /// Occurrence strictly after today
    NextWeekday(Weekday),
    Exact(NaiveDate),
}

impl DateInput {
    /// Parse a date input string
    pub fn parse(input: &str) -> Result<Self> {
        let normalized = input.trim().to_lowercase();
        let invalid = || MemoriesError::InvalidDate(input.to_string());

        match normalized.as_str() {
            "today" | "now" => return Ok(DateInput::Today),
            "yesterday" => return Ok(DateInput::Yesterday),
            "tomorrow" => return Ok(DateInput::Tomorrow),
            _ => {}
        }

        if let Some(day) = normalized.strip_prefix("last ") {
            return parse_weekday(day)
                .map(DateInput::LastWeekday)
                .ok_or_else(invalid);
        }
        if let Some(day) = normalized.strip_prefix("next ") {
            return parse_weekday(day)
                .map(DateInput::NextWeekday)
                .ok_or_else(invalid);
        }
        if let Some(weekday) = parse_weekday(&normalized) {
            return Ok(DateInput::Weekday(weekday));
        }

        NaiveDate::parse_from_str(&normalized, "%Y-%m-%d")
            .or_else(|_| NaiveDate::parse_from_str(&normalized, "%d-%m-%Y"))
            .map(DateInput::Exact)
            .map_err(|_| invalid())
    }

    /// Resolve to a calendar date relative to `base`
    pub fn resolve(&self, base: NaiveDate) -> NaiveDate {
        match *self {
            DateInput::Today => base,
            DateInput::Yesterday => base - Duration::days(1),
            DateInput::Tomorrow => base + Duration::days(1),
            DateInput::Weekday(target) => base - Duration::days(days_since(base, target)),
            DateInput::LastWeekday(target) => {
                let back = match days_since(base, target) {
                    0 => 7,
                    n => n,
                };
                base - Duration::days(back)
            }
            DateInput::NextWeekday(target) => {
                let forward = match days_since(base, target) {
                    0 => 7,
                    n => 7 - n,
                };
                base + Duration::days(forward)
            }
            DateInput::Exact(date) => date,
        }
    }
}

/// Parse and resolve in one step
pub fn parse_date(input: &str, base: NaiveDate) -> Result<NaiveDate> {
    Ok(DateInput::parse(input)?.resolve(base))
}

/// Full weekday names only; abbreviations would clash with other words.
fn parse_weekday(name: &str) -> Option<Weekday> {
    match name.trim() {
        "monday" => Some(Weekday::Mon),
        "tuesday" => Some(Weekday::Tue),
        "wednesday" => Some(Weekday::Wed),
        "thursday" => Some(Weekday::Thu),
        "friday" => Some(Weekday::Fri),
        "saturday" => Some(Weekday::Sat),
        "sunday" => Some(Weekday::Sun),
        _ => None,
    }
}

/// Days elapsed since the most recent `target` weekday (0..=6)
fn days_since(base: NaiveDate, target: Weekday) -> i64 {
    let current = base.weekday().num_days_from_monday() as i64;
    let target = target.num_days_from_monday() as i64;
    (current - target).rem_euclid(7)
}
