// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{ApiError, translate_core_error, translate_domain_error};
use airac::CoreError;
use airac_domain::DomainError;

#[test]
fn test_api_error_display() {
    let err: ApiError = ApiError::InvalidInput {
        field: String::from("sort"),
        message: String::from("bad"),
    };
    assert_eq!(format!("{err}"), "Invalid input for field 'sort': bad");

    let err: ApiError = ApiError::ResourceNotFound {
        resource_type: String::from("Cycle"),
        message: String::from("no cycle is active on 2024-06-01"),
    };
    assert_eq!(
        format!("{err}"),
        "Cycle not found: no cycle is active on 2024-06-01"
    );

    let err: ApiError = ApiError::ExportFailed {
        message: String::from("boom"),
    };
    assert_eq!(format!("{err}"), "Export failed: boom");
}

#[test]
fn test_translate_domain_error_fields() {
    let err: ApiError = translate_domain_error(DomainError::InvalidCycleNumber { number: 20 });
    assert!(matches!(err, ApiError::InvalidInput { field, .. } if field == "cycle"));

    let err: ApiError = translate_domain_error(DomainError::InvalidTimezone(String::from("X")));
    assert!(matches!(err, ApiError::InvalidInput { field, .. } if field == "timezone"));

    let err: ApiError = translate_domain_error(DomainError::DateArithmeticOverflow {
        operation: String::from("testing"),
    });
    assert!(matches!(err, ApiError::Internal { .. }));

    let err: ApiError = translate_domain_error(DomainError::DateFormatError {
        date: String::from("2025-01-23"),
        error: String::from("bad"),
    });
    assert!(matches!(err, ApiError::Internal { .. }));
}

#[test]
fn test_translate_core_error() {
    let err: ApiError = translate_core_error(CoreError::InvalidQuery {
        field: "year",
        value: String::from("soon"),
        expected: "'all' or a four-digit year",
    });
    assert_eq!(
        err,
        ApiError::InvalidInput {
            field: String::from("year"),
            message: String::from("'soon' is not valid; expected 'all' or a four-digit year"),
        }
    );

    let err: ApiError = translate_core_error(CoreError::DomainViolation(
        DomainError::YearOutOfRange {
            year: 2200,
            first: 2025,
            last: 2099,
        },
    ));
    assert!(matches!(err, ApiError::InvalidInput { field, .. } if field == "year"));
}
