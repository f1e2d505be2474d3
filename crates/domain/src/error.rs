// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur while deriving or parsing AIRAC cycles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Cycle number outside 1..=13.
    InvalidCycleNumber {
        /// The invalid cycle number.
        number: u8,
    },
    /// Year outside the supported catalog range.
    YearOutOfRange {
        /// The invalid year.
        year: u16,
        /// The first supported year.
        first: u16,
        /// The last supported year.
        last: u16,
    },
    /// A cycle identifier or composite key could not be parsed.
    InvalidIdentifier {
        /// The raw value that was supplied.
        value: String,
        /// Why the value was rejected.
        reason: &'static str,
    },
    /// Unknown cycle status string.
    InvalidStatus {
        /// The invalid status value.
        status: String,
    },
    /// Date arithmetic overflow.
    DateArithmeticOverflow {
        /// Description of the operation that failed.
        operation: String,
    },
    /// Failed to parse date from string.
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
    /// A date could not be rendered.
    DateFormatError {
        /// The date being formatted (ISO 8601).
        date: String,
        /// The formatting error message.
        error: String,
    },
    /// A calendar date produced by the clock could not be represented.
    InvalidCalendarDate {
        /// The year component.
        year: i32,
        /// The month component.
        month: u32,
        /// The day component.
        day: u32,
    },
    /// Unknown IANA timezone name.
    InvalidTimezone(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCycleNumber { number } => {
                write!(
                    f,
                    "Invalid cycle number: {number}. Must be between 1 and 13"
                )
            }
            Self::YearOutOfRange { year, first, last } => {
                write!(
                    f,
                    "Year {year} is out of range. Must be between {first} and {last}"
                )
            }
            Self::InvalidIdentifier { value, reason } => {
                write!(f, "Invalid cycle identifier '{value}': {reason}")
            }
            Self::InvalidStatus { status } => {
                write!(
                    f,
                    "Invalid cycle status '{status}'. Expected upcoming, active or past"
                )
            }
            Self::DateArithmeticOverflow { operation } => {
                write!(f, "Date arithmetic overflow while {operation}")
            }
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
            Self::DateFormatError { date, error } => {
                write!(f, "Failed to format date {date}: {error}")
            }
            Self::InvalidCalendarDate { year, month, day } => {
                write!(f, "Invalid calendar date {year:04}-{month:02}-{day:02}")
            }
            Self::InvalidTimezone(name) => write!(f, "Unknown timezone '{name}'"),
        }
    }
}

impl std::error::Error for DomainError {}
