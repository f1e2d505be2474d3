// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use airac_domain::Cycle;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::str::FromStr;

/// Result ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    /// Earliest start date first.
    #[default]
    DateAsc,
    /// Latest start date first.
    DateDesc,
    /// Lexicographic on the `YYcc` identifier.
    IdentifierAsc,
    /// Reverse lexicographic on the `YYcc` identifier.
    IdentifierDesc,
}

impl SortOrder {
    /// Returns the string representation of the order.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::DateAsc => "date-asc",
            Self::DateDesc => "date-desc",
            Self::IdentifierAsc => "identifier-asc",
            Self::IdentifierDesc => "identifier-desc",
        }
    }
}

impl FromStr for SortOrder {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "date-asc" => Ok(Self::DateAsc),
            "date-desc" => Ok(Self::DateDesc),
            "identifier-asc" => Ok(Self::IdentifierAsc),
            "identifier-desc" => Ok(Self::IdentifierDesc),
            _ => Err(CoreError::InvalidQuery {
                field: "sort",
                value: s.to_string(),
                expected: "date-asc, date-desc, identifier-asc or identifier-desc",
            }),
        }
    }
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Returns a sorted copy of `cycles`. The sort is stable.
#[must_use]
pub fn sort(cycles: &[Cycle], order: SortOrder) -> Vec<Cycle> {
    let mut sorted: Vec<Cycle> = cycles.to_vec();
    match order {
        SortOrder::DateAsc => sorted.sort_by_key(Cycle::start_date),
        SortOrder::DateDesc => sorted.sort_by_key(|cycle| Reverse(cycle.start_date())),
        SortOrder::IdentifierAsc => sorted.sort_by_cached_key(Cycle::identifier),
        SortOrder::IdentifierDesc => sorted.sort_by_cached_key(|cycle| Reverse(cycle.identifier())),
    }
    sorted
}
