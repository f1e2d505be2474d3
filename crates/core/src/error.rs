// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use airac_domain::DomainError;

/// Errors that can occur while building or evaluating queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A domain rule was violated.
    DomainViolation(DomainError),
    /// A query selector could not be parsed.
    InvalidQuery {
        /// The selector that was invalid.
        field: &'static str,
        /// The raw value supplied.
        value: String,
        /// What the selector accepts.
        expected: &'static str,
    },
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::InvalidQuery {
                field,
                value,
                expected,
            } => write!(f, "Invalid {field} '{value}': expected {expected}"),
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
