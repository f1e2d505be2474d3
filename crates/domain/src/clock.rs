// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Evaluation-day helpers.
//!
//! Everything else in this crate takes the evaluation day as a parameter.
//! This module is the only place that reads the system clock, and it
//! normalizes the instant to a calendar day in a declared timezone.

use crate::error::DomainError;
use chrono::{Datelike, NaiveDate, Utc};
use chrono_tz::Tz;
use time::{Date, Month, format_description::BorrowedFormatItem, macros::format_description};

const ISO_DATE: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Returns today's calendar date in `tz`.
///
/// # Errors
///
/// Returns an error if the clock's date cannot be represented.
pub fn today_in(tz: Tz) -> Result<Date, DomainError> {
    date_from_naive(Utc::now().with_timezone(&tz).date_naive())
}

/// Converts a `chrono` calendar date into a `time` calendar date.
///
/// # Errors
///
/// Returns an error if the components do not form a valid date.
pub fn date_from_naive(naive: NaiveDate) -> Result<Date, DomainError> {
    let invalid = || DomainError::InvalidCalendarDate {
        year: naive.year(),
        month: naive.month(),
        day: naive.day(),
    };

    let month: Month = u8::try_from(naive.month())
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .ok_or_else(invalid)?;
    let day: u8 = u8::try_from(naive.day()).map_err(|_| invalid())?;

    Date::from_calendar_date(naive.year(), month, day).map_err(|_| invalid())
}

/// Parses an ISO 8601 calendar date (`YYYY-MM-DD`).
///
/// # Errors
///
/// Returns an error if the string is not a valid date.
pub fn parse_date(value: &str) -> Result<Date, DomainError> {
    Date::parse(value.trim(), ISO_DATE).map_err(|e| DomainError::DateParseError {
        date_string: value.to_string(),
        error: e.to_string(),
    })
}

/// Parses an IANA timezone name such as `Europe/Helsinki`.
///
/// # Errors
///
/// Returns an error if the name is unknown.
pub fn parse_timezone(name: &str) -> Result<Tz, DomainError> {
    name.trim()
        .parse::<Tz>()
        .map_err(|_| DomainError::InvalidTimezone(name.to_string()))
}
