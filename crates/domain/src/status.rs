// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Cycle status relative to an evaluation day.
//!
//! Status is a pure function of a cycle's date range and the evaluation day.
//! The evaluation day is a calendar date, so a cycle never changes state
//! part-way through a day.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::Date;

/// The three mutually exclusive states of a cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CycleStatus {
    /// The cycle starts after the evaluation day.
    Upcoming,
    /// The evaluation day falls within the cycle.
    Active,
    /// The cycle ended before the evaluation day.
    Past,
}

impl CycleStatus {
    /// Returns the string representation of the status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Upcoming => "upcoming",
            Self::Active => "active",
            Self::Past => "past",
        }
    }
}

impl FromStr for CycleStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "upcoming" => Ok(Self::Upcoming),
            "active" | "current" => Ok(Self::Active),
            "past" => Ok(Self::Past),
            _ => Err(DomainError::InvalidStatus {
                status: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for CycleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Status of a cycle plus signed day offsets from the evaluation day.
///
/// Both offsets are negative outside the relevant side of the window; they
/// are mainly meaningful for the active cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Classification {
    status: CycleStatus,
    days_since_start: i64,
    days_until_end: i64,
}

impl Classification {
    /// Returns the status.
    #[must_use]
    pub const fn status(&self) -> CycleStatus {
        self.status
    }

    /// Days elapsed from the start date to the evaluation day.
    #[must_use]
    pub const fn days_since_start(&self) -> i64 {
        self.days_since_start
    }

    /// Days remaining from the evaluation day to the end date.
    #[must_use]
    pub const fn days_until_end(&self) -> i64 {
        self.days_until_end
    }

    /// True if the cycle has not started yet.
    #[must_use]
    pub const fn is_upcoming(&self) -> bool {
        matches!(self.status, CycleStatus::Upcoming)
    }

    /// True if the evaluation day falls within the cycle.
    #[must_use]
    pub const fn is_current(&self) -> bool {
        matches!(self.status, CycleStatus::Active)
    }

    /// True if the cycle has ended.
    #[must_use]
    pub const fn is_past(&self) -> bool {
        matches!(self.status, CycleStatus::Past)
    }
}

/// Classifies the inclusive range `start_date..=end_date` against `today`.
#[must_use]
pub fn classify(start_date: Date, end_date: Date, today: Date) -> Classification {
    let status: CycleStatus = if today < start_date {
        CycleStatus::Upcoming
    } else if today > end_date {
        CycleStatus::Past
    } else {
        CycleStatus::Active
    };

    Classification {
        status,
        days_since_start: (today - start_date).whole_days(),
        days_until_end: (end_date - today).whole_days(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn test_classify_upcoming() {
        let result: Classification =
            classify(date!(2025 - 03 - 20), date!(2025 - 04 - 16), date!(2025 - 02 - 15));
        assert!(result.is_upcoming());
        assert!(!result.is_current());
        assert!(!result.is_past());
        assert_eq!(result.days_since_start(), -33);
        assert_eq!(result.days_until_end(), 60);
    }

    #[test]
    fn test_classify_active() {
        let result: Classification =
            classify(date!(2025 - 01 - 23), date!(2025 - 02 - 19), date!(2025 - 02 - 15));
        assert_eq!(result.status(), CycleStatus::Active);
        assert_eq!(result.days_since_start(), 23);
        assert_eq!(result.days_until_end(), 4);
    }

    #[test]
    fn test_classify_past() {
        let result: Classification =
            classify(date!(2025 - 01 - 23), date!(2025 - 02 - 19), date!(2025 - 02 - 20));
        assert!(result.is_past());
        assert_eq!(result.days_until_end(), -1);
    }

    #[test]
    fn test_classify_boundaries_are_inclusive() {
        let start: Date = date!(2025 - 01 - 23);
        let end: Date = date!(2025 - 02 - 19);

        let first_day: Classification = classify(start, end, start);
        assert!(first_day.is_current());
        assert_eq!(first_day.days_since_start(), 0);

        let last_day: Classification = classify(start, end, end);
        assert!(last_day.is_current());
        assert_eq!(last_day.days_until_end(), 0);

        let day_before: Classification = classify(start, end, date!(2025 - 01 - 22));
        assert!(day_before.is_upcoming());
    }

    #[test]
    fn test_status_string_round_trip() {
        for status in [CycleStatus::Upcoming, CycleStatus::Active, CycleStatus::Past] {
            assert_eq!(status.as_str().parse::<CycleStatus>().unwrap(), status);
        }
        assert_eq!("CURRENT".parse::<CycleStatus>().unwrap(), CycleStatus::Active);
    }

    #[test]
    fn test_status_parse_rejects_unknown() {
        assert!(matches!(
            "later".parse::<CycleStatus>().unwrap_err(),
            DomainError::InvalidStatus { .. }
        ));
    }
}
