// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Search and filter predicates over cycles.
//!
//! Search, year and status filters are independent predicates and commute.
//! Each returns a new collection and leaves its input untouched.

use crate::error::CoreError;
use airac_domain::{Cycle, CycleStatus};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Year selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum YearFilter {
    /// Every year passes.
    #[default]
    All,
    /// Only cycles of this year pass.
    Year(u16),
}

impl YearFilter {
    /// Returns true if `cycle` passes this filter.
    #[must_use]
    pub const fn matches(&self, cycle: &Cycle) -> bool {
        match self {
            Self::All => true,
            Self::Year(year) => cycle.year() == *year,
        }
    }
}

impl FromStr for YearFilter {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed: &str = s.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        let invalid = || CoreError::InvalidQuery {
            field: "year",
            value: s.to_string(),
            expected: "'all' or a four-digit year",
        };
        if trimmed.len() != 4 || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        trimmed.parse::<u16>().map(Self::Year).map_err(|_| invalid())
    }
}

impl std::fmt::Display for YearFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Year(year) => write!(f, "{year}"),
        }
    }
}

/// Status selector. `Active` selects the current cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusFilter {
    /// Every status passes.
    #[default]
    All,
    /// Only the current cycle passes.
    Active,
    /// Only cycles that have not started pass.
    Upcoming,
    /// Only cycles that have ended pass.
    Past,
}

impl StatusFilter {
    /// Returns the string representation of the selector.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Active => "active",
            Self::Upcoming => "upcoming",
            Self::Past => "past",
        }
    }

    /// Returns true if `cycle` passes this filter.
    #[must_use]
    pub fn matches(&self, cycle: &Cycle) -> bool {
        match self {
            Self::All => true,
            Self::Active => cycle.status() == CycleStatus::Active,
            Self::Upcoming => cycle.status() == CycleStatus::Upcoming,
            Self::Past => cycle.status() == CycleStatus::Past,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "all" => Ok(Self::All),
            "active" | "current" => Ok(Self::Active),
            "upcoming" => Ok(Self::Upcoming),
            "past" => Ok(Self::Past),
            _ => Err(CoreError::InvalidQuery {
                field: "status",
                value: s.to_string(),
                expected: "all, active, upcoming or past",
            }),
        }
    }
}

impl std::fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Case-insensitive substring search.
///
/// A cycle matches when the term occurs in its identifier, its display start
/// or end date, or its year. A blank term returns the input unchanged.
#[must_use]
pub fn search(cycles: &[Cycle], term: &str) -> Vec<Cycle> {
    let needle: String = term.trim().to_lowercase();
    if needle.is_empty() {
        return cycles.to_vec();
    }

    cycles
        .iter()
        .filter(|cycle| matches_search(cycle, &needle))
        .copied()
        .collect()
}

fn matches_search(cycle: &Cycle, needle: &str) -> bool {
    [
        Some(cycle.identifier()),
        cycle.display_start_date().ok(),
        cycle.display_end_date().ok(),
        Some(cycle.year().to_string()),
    ]
    .iter()
    .flatten()
    .any(|field| field.to_lowercase().contains(needle))
}

/// Keeps only the cycles of the selected year.
#[must_use]
pub fn filter_by_year(cycles: &[Cycle], year: YearFilter) -> Vec<Cycle> {
    cycles
        .iter()
        .filter(|cycle| year.matches(cycle))
        .copied()
        .collect()
}

/// Keeps only the cycles with the selected status.
#[must_use]
pub fn filter_by_status(cycles: &[Cycle], status: StatusFilter) -> Vec<Cycle> {
    cycles
        .iter()
        .filter(|cycle| status.matches(cycle))
        .copied()
        .collect()
}
