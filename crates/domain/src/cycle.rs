// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! AIRAC cycle identity and date arithmetic.
//!
//! Every cycle is derived from a single anchor: cycle `2501` starts on
//! 2025-01-23. Cycle `n` of year `Y` starts
//! `((Y - 2025) * 13 + (n - 1)) * 28` days later and spans 28 calendar days
//! inclusive. All arithmetic is on calendar dates, never on instants.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::{
    Date, Duration,
    format_description::BorrowedFormatItem,
    macros::{date, format_description},
};

/// Start date of cycle `2501`.
pub const ANCHOR_DATE: Date = date!(2025 - 01 - 23);

/// First year covered by the catalog.
pub const FIRST_YEAR: u16 = 2025;

/// Last year covered by the catalog (inclusive).
pub const LAST_YEAR: u16 = 2099;

/// Number of cycles in every year.
pub const CYCLES_PER_YEAR: u8 = 13;

/// Length of a cycle in days.
pub const CYCLE_LENGTH_DAYS: i64 = 28;

/// Total number of cycles between `FIRST_YEAR` and `LAST_YEAR`.
pub const TOTAL_CYCLES: usize = (LAST_YEAR - FIRST_YEAR + 1) as usize * CYCLES_PER_YEAR as usize;

const DISPLAY_DATE: &[BorrowedFormatItem<'static>] =
    format_description!("[month repr:short] [day padding:none], [year]");

/// A validated `(year, cycle number)` pair.
///
/// Ordering is chronological: by year, then by cycle number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawCycleId")]
pub struct CycleId {
    /// The full year (e.g., 2025).
    year: u16,
    /// The 1-based cycle number within the year.
    number: u8,
}

impl CycleId {
    /// Creates a new `CycleId`.
    ///
    /// # Arguments
    ///
    /// * `year` - The full year, between `FIRST_YEAR` and `LAST_YEAR`
    /// * `number` - The cycle number, between 1 and 13
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The year is outside the catalog range
    /// - The cycle number is not between 1 and 13
    pub const fn new(year: u16, number: u8) -> Result<Self, DomainError> {
        if year < FIRST_YEAR || year > LAST_YEAR {
            return Err(DomainError::YearOutOfRange {
                year,
                first: FIRST_YEAR,
                last: LAST_YEAR,
            });
        }

        if number < 1 || number > CYCLES_PER_YEAR {
            return Err(DomainError::InvalidCycleNumber { number });
        }

        Ok(Self { year, number })
    }

    /// Returns the full year.
    #[must_use]
    pub const fn year(&self) -> u16 {
        self.year
    }

    /// Returns the 1-based cycle number within the year.
    #[must_use]
    pub const fn number(&self) -> u8 {
        self.number
    }

    /// Returns the `YYcc` identifier, e.g. `"2501"`.
    #[must_use]
    pub fn identifier(&self) -> String {
        format!("{:02}{:02}", self.year % 100, self.number)
    }

    /// Returns the `YYYY-cc` composite key, e.g. `"2025-01"`.
    #[must_use]
    pub fn composite_key(&self) -> String {
        format!("{}-{:02}", self.year, self.number)
    }

    /// Returns the 0-based position of this cycle counted from the anchor.
    #[must_use]
    pub const fn ordinal(&self) -> u32 {
        (self.year - FIRST_YEAR) as u32 * CYCLES_PER_YEAR as u32 + (self.number - 1) as u32
    }

    /// Builds the cycle at the given 0-based position from the anchor.
    ///
    /// Returns `None` when the position lies past the last supported year.
    #[must_use]
    pub fn from_ordinal(ordinal: u32) -> Option<Self> {
        let per_year: u32 = u32::from(CYCLES_PER_YEAR);
        let year: u16 = u16::try_from(ordinal / per_year)
            .ok()?
            .checked_add(FIRST_YEAR)?;
        let number: u8 = u8::try_from(ordinal % per_year).ok()? + 1;
        Self::new(year, number).ok()
    }

    /// Returns the following cycle, or `None` after `9913`.
    #[must_use]
    pub fn next(&self) -> Option<Self> {
        Self::from_ordinal(self.ordinal() + 1)
    }

    /// Returns the preceding cycle, or `None` before `2501`.
    #[must_use]
    pub fn previous(&self) -> Option<Self> {
        Self::from_ordinal(self.ordinal().checked_sub(1)?)
    }

    /// Finds the cycle whose 28-day window contains `date`.
    ///
    /// Returns `None` when the date precedes the anchor or follows the last
    /// cycle of `LAST_YEAR`.
    #[must_use]
    pub fn containing(date: Date) -> Option<Self> {
        let days: i64 = (date - ANCHOR_DATE).whole_days();
        if days < 0 {
            return None;
        }
        Self::from_ordinal(u32::try_from(days / CYCLE_LENGTH_DAYS).ok()?)
    }

    /// Derives the first day of this cycle.
    ///
    /// # Errors
    ///
    /// Returns an error if date arithmetic overflows.
    pub fn start_date(&self) -> Result<Date, DomainError> {
        let offset_days: i64 = i64::from(self.ordinal()) * CYCLE_LENGTH_DAYS;
        ANCHOR_DATE
            .checked_add(Duration::days(offset_days))
            .ok_or_else(|| DomainError::DateArithmeticOverflow {
                operation: format!("calculating cycle {} start date", self.identifier()),
            })
    }

    /// Derives the last day (inclusive) of this cycle.
    ///
    /// # Errors
    ///
    /// Returns an error if date arithmetic overflows.
    pub fn end_date(&self) -> Result<Date, DomainError> {
        end_date_for(self.start_date()?)
    }

    /// Parses a `YYcc` identifier such as `"2501"`.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is not four digits or names a cycle
    /// outside the catalog.
    pub fn parse_identifier(value: &str) -> Result<Self, DomainError> {
        let trimmed: &str = value.trim();
        if trimmed.len() != 4 || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DomainError::InvalidIdentifier {
                value: value.to_string(),
                reason: "expected four digits (YYcc)",
            });
        }

        let year: u16 = parse_digits(value, &trimmed[0..2])?;
        let number: u8 = parse_digits(value, &trimmed[2..4])?;
        Self::new(2000 + year, number)
    }

    /// Parses a `YYYY-cc` composite key such as `"2025-01"`.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is malformed or names a cycle outside
    /// the catalog.
    pub fn parse_composite_key(value: &str) -> Result<Self, DomainError> {
        let trimmed: &str = value.trim();
        let Some((year_part, number_part)) = trimmed.split_once('-') else {
            return Err(DomainError::InvalidIdentifier {
                value: value.to_string(),
                reason: "expected YYYY-cc",
            });
        };

        if year_part.len() != 4 || number_part.len() != 2 {
            return Err(DomainError::InvalidIdentifier {
                value: value.to_string(),
                reason: "expected YYYY-cc",
            });
        }

        let year: u16 = parse_digits(value, year_part)?;
        let number: u8 = parse_digits(value, number_part)?;
        Self::new(year, number)
    }
}

/// Unvalidated wire form of [`CycleId`].
#[derive(Deserialize)]
struct RawCycleId {
    year: u16,
    number: u8,
}

impl TryFrom<RawCycleId> for CycleId {
    type Error = DomainError;

    fn try_from(raw: RawCycleId) -> Result<Self, Self::Error> {
        Self::new(raw.year, raw.number)
    }
}

impl FromStr for CycleId {
    type Err = DomainError;

    /// Accepts either the `YYcc` identifier or the `YYYY-cc` composite key.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.contains('-') {
            Self::parse_composite_key(s)
        } else {
            Self::parse_identifier(s)
        }
    }
}

impl std::fmt::Display for CycleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}{:02}", self.year % 100, self.number)
    }
}

fn parse_digits<T: FromStr>(value: &str, digits: &str) -> Result<T, DomainError> {
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DomainError::InvalidIdentifier {
            value: value.to_string(),
            reason: "contains non-digit characters",
        });
    }
    digits.parse::<T>().map_err(|_| DomainError::InvalidIdentifier {
        value: value.to_string(),
        reason: "number out of range",
    })
}

/// Builds the `YYcc` identifier for a year and cycle number.
///
/// # Errors
///
/// Returns an error if the pair does not name a catalog cycle.
pub fn identifier_for(year: u16, number: u8) -> Result<String, DomainError> {
    Ok(CycleId::new(year, number)?.identifier())
}

/// Derives the start date for a year and cycle number.
///
/// # Errors
///
/// Returns an error if the pair does not name a catalog cycle.
pub fn start_date_for(year: u16, number: u8) -> Result<Date, DomainError> {
    CycleId::new(year, number)?.start_date()
}

/// Derives the inclusive end date of a cycle starting on `start_date`.
///
/// # Errors
///
/// Returns an error if date arithmetic overflows.
pub fn end_date_for(start_date: Date) -> Result<Date, DomainError> {
    start_date
        .checked_add(Duration::days(CYCLE_LENGTH_DAYS - 1))
        .ok_or_else(|| DomainError::DateArithmeticOverflow {
            operation: format!("calculating end date for cycle starting {start_date}"),
        })
}

/// Formats a date for display, e.g. `Jan 23, 2025`.
///
/// # Errors
///
/// Returns an error if the date cannot be formatted.
pub fn display_date(date: Date) -> Result<String, DomainError> {
    date.format(DISPLAY_DATE)
        .map_err(|e| DomainError::DateFormatError {
            date: date.to_string(),
            error: e.to_string(),
        })
}
