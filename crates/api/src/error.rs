// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use crate::export::ExportError;
use crate::preferences::PreferencesError;
use airac::CoreError;
use airac_domain::DomainError;

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// Rendering an export failed.
    ExportFailed {
        /// A description of the failure.
        message: String,
    },
    /// Reading or writing preferences failed.
    PreferencesFailed {
        /// A description of the failure.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::ExportFailed { message } => write!(f, "Export failed: {message}"),
            Self::PreferencesFailed { message } => write!(f, "Preferences error: {message}"),
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::InvalidCycleNumber { .. } | DomainError::InvalidIdentifier { .. } => {
            ApiError::InvalidInput {
                field: String::from("cycle"),
                message: err.to_string(),
            }
        }
        DomainError::YearOutOfRange { .. } => ApiError::InvalidInput {
            field: String::from("year"),
            message: err.to_string(),
        },
        DomainError::InvalidStatus { .. } => ApiError::InvalidInput {
            field: String::from("status"),
            message: err.to_string(),
        },
        DomainError::DateParseError { .. } => ApiError::InvalidInput {
            field: String::from("date"),
            message: err.to_string(),
        },
        DomainError::InvalidTimezone(_) => ApiError::InvalidInput {
            field: String::from("timezone"),
            message: err.to_string(),
        },
        DomainError::DateArithmeticOverflow { .. }
        | DomainError::InvalidCalendarDate { .. }
        | DomainError::DateFormatError { .. } => {
            ApiError::Internal {
                message: err.to_string(),
            }
        }
    }
}

/// Translates a core error into an API error.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain) => translate_domain_error(domain),
        CoreError::InvalidQuery {
            field,
            value,
            expected,
        } => ApiError::InvalidInput {
            field: field.to_string(),
            message: format!("'{value}' is not valid; expected {expected}"),
        },
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        translate_domain_error(err)
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        translate_core_error(err)
    }
}

impl From<ExportError> for ApiError {
    fn from(err: ExportError) -> Self {
        Self::ExportFailed {
            message: err.to_string(),
        }
    }
}

impl From<PreferencesError> for ApiError {
    fn from(err: PreferencesError) -> Self {
        match err {
            PreferencesError::InvalidBookmark(domain) => translate_domain_error(domain),
            other => Self::PreferencesFailed {
                message: other.to_string(),
            },
        }
    }
}
