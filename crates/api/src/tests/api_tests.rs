// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{TEST_TODAY, create_test_cache};
use crate::{
    ApiError, CycleRecord, ExportFormat, ListCyclesRequest, ListCyclesResponse, Preferences,
    StatisticsResponse, bookmarked_cycles, current_cycle, export_cycles, get_cycle, list_cycles,
    list_cycles_with_preferences, statistics,
};
use airac::{CatalogCache, QueryState, SortOrder, StatusFilter, YearFilter};
use std::num::NonZeroUsize;
use time::macros::date;

#[test]
fn test_list_cycles_default_request() {
    let cache: CatalogCache = create_test_cache();
    let response: ListCyclesResponse =
        list_cycles(&cache, &ListCyclesRequest::default()).unwrap();

    assert_eq!(response.cycles.len(), 20);
    assert_eq!(response.page, 1);
    assert_eq!(response.page_size, 20);
    assert_eq!(response.total_pages, 49);
    assert_eq!(response.matched, 975);
    assert_eq!(response.total, 975);
    assert_eq!(response.evaluated_on, "2025-02-15");
    assert_eq!(response.cycles[0].identifier, "2501");
    assert_eq!(response.cycles[0].status, "active");
}

#[test]
fn test_list_cycles_with_filters() {
    let cache: CatalogCache = create_test_cache();
    let request: ListCyclesRequest = ListCyclesRequest {
        year: Some(String::from("2026")),
        status: Some(String::from("upcoming")),
        sort: Some(String::from("identifier-desc")),
        page_size: Some(10),
        page: Some(2),
        ..ListCyclesRequest::default()
    };
    let response: ListCyclesResponse = list_cycles(&cache, &request).unwrap();

    assert_eq!(response.matched, 13);
    assert_eq!(response.total_pages, 2);
    assert_eq!(response.page, 2);
    let ids: Vec<&str> = response
        .cycles
        .iter()
        .map(|c| c.identifier.as_str())
        .collect();
    assert_eq!(ids, vec!["2603", "2602", "2601"]);
}

#[test]
fn test_list_cycles_page_past_end() {
    let cache: CatalogCache = create_test_cache();
    let request: ListCyclesRequest = ListCyclesRequest {
        page: Some(50),
        ..ListCyclesRequest::default()
    };
    let response: ListCyclesResponse = list_cycles(&cache, &request).unwrap();

    assert!(response.cycles.is_empty());
    assert_eq!(response.total_pages, 49);
}

#[test]
fn test_list_cycles_rejects_invalid_selectors() {
    let cache: CatalogCache = create_test_cache();

    let bad_status: ListCyclesRequest = ListCyclesRequest {
        status: Some(String::from("soon")),
        ..ListCyclesRequest::default()
    };
    assert!(matches!(
        list_cycles(&cache, &bad_status).unwrap_err(),
        ApiError::InvalidInput { field, .. } if field == "status"
    ));

    let bad_sort: ListCyclesRequest = ListCyclesRequest {
        sort: Some(String::from("random")),
        ..ListCyclesRequest::default()
    };
    assert!(matches!(
        list_cycles(&cache, &bad_sort).unwrap_err(),
        ApiError::InvalidInput { field, .. } if field == "sort"
    ));

    let zero_page_size: ListCyclesRequest = ListCyclesRequest {
        page_size: Some(0),
        ..ListCyclesRequest::default()
    };
    assert!(matches!(
        list_cycles(&cache, &zero_page_size).unwrap_err(),
        ApiError::InvalidInput { field, .. } if field == "page_size"
    ));
}

#[test]
fn test_request_to_query_state() {
    let request: ListCyclesRequest = ListCyclesRequest {
        search: Some(String::from("feb")),
        year: Some(String::from("all")),
        status: Some(String::from("active")),
        sort: Some(String::from("date-desc")),
        page: Some(3),
        page_size: Some(50),
    };
    let state: QueryState = request.to_query_state().unwrap();

    assert_eq!(state.search(), "feb");
    assert_eq!(state.year(), YearFilter::All);
    assert_eq!(state.status(), StatusFilter::Active);
    assert_eq!(state.sort(), SortOrder::DateDesc);
    assert_eq!(state.page(), 3);
    assert_eq!(state.page_size().get(), 50);
}

#[test]
fn test_list_cycles_with_preferences_uses_saved_defaults() {
    let cache: CatalogCache = create_test_cache();
    let preferences: Preferences = Preferences {
        page_size: NonZeroUsize::new(5).unwrap(),
        sort: SortOrder::DateDesc,
        ..Preferences::default()
    };

    let response: ListCyclesResponse =
        list_cycles_with_preferences(&cache, &ListCyclesRequest::default(), &preferences)
            .unwrap();
    assert_eq!(response.page_size, 5);
    assert_eq!(response.cycles[0].identifier, "9913");

    let override_sort: ListCyclesRequest = ListCyclesRequest {
        sort: Some(String::from("date-asc")),
        ..ListCyclesRequest::default()
    };
    let response: ListCyclesResponse =
        list_cycles_with_preferences(&cache, &override_sort, &preferences).unwrap();
    assert_eq!(response.page_size, 5);
    assert_eq!(response.cycles[0].identifier, "2501");
}

#[test]
fn test_current_cycle() {
    let cache: CatalogCache = create_test_cache();
    let record: CycleRecord = current_cycle(&cache).unwrap();

    assert_eq!(record.identifier, "2501");
    assert_eq!(record.composite_key, "2025-01");
    assert_eq!(record.start_date, "2025-01-23");
    assert_eq!(record.end_date, "2025-02-19");
    assert_eq!(record.display_start_date, "Jan 23, 2025");
    assert_eq!(record.days_since_start, 23);
    assert_eq!(record.days_until_end, 4);
}

#[test]
fn test_current_cycle_outside_catalog() {
    let cache: CatalogCache = CatalogCache::new(date!(2024 - 06 - 01)).unwrap();
    assert!(matches!(
        current_cycle(&cache).unwrap_err(),
        ApiError::ResourceNotFound { .. }
    ));
}

#[test]
fn test_get_cycle_by_either_key() {
    let cache: CatalogCache = create_test_cache();
    let short: CycleRecord = get_cycle(&cache, "2503").unwrap();
    let long: CycleRecord = get_cycle(&cache, "2025-03").unwrap();

    assert_eq!(short, long);
    assert_eq!(short.start_date, "2025-03-20");
    assert_eq!(short.end_date, "2025-04-16");
    assert_eq!(short.status, "upcoming");
}

#[test]
fn test_get_cycle_invalid_key() {
    let cache: CatalogCache = create_test_cache();
    assert!(matches!(
        get_cycle(&cache, "2599").unwrap_err(),
        ApiError::InvalidInput { field, .. } if field == "cycle"
    ));
    assert!(matches!(
        get_cycle(&cache, "1901").unwrap_err(),
        ApiError::InvalidInput { field, .. } if field == "year"
    ));
}

#[test]
fn test_statistics_response() {
    let cache: CatalogCache = create_test_cache();
    let response: StatisticsResponse = statistics(&cache).unwrap();

    assert_eq!(response.total_cycles, 975);
    assert_eq!(response.cycles_by_year.len(), 75);
    assert_eq!(response.min_cycle_duration, 28);
    assert_eq!(response.max_cycle_duration, 28);
    assert_eq!(response.current_cycle.unwrap().identifier, "2501");
    assert_eq!(response.upcoming_cycles.len(), 5);
    assert_eq!(response.upcoming_cycles[0].identifier, "2502");
    assert_eq!(response.evaluated_on, "2025-02-15");
}

#[test]
fn test_statistics_ignore_request_filters() {
    let cache: CatalogCache = create_test_cache();
    let filtered: ListCyclesResponse = list_cycles(
        &cache,
        &ListCyclesRequest {
            year: Some(String::from("2030")),
            ..ListCyclesRequest::default()
        },
    )
    .unwrap();
    let response: StatisticsResponse = statistics(&cache).unwrap();

    assert_eq!(filtered.matched, 13);
    assert_eq!(response.total_cycles, filtered.total);
}

#[test]
fn test_export_cycles_ignores_pagination() {
    let cache: CatalogCache = create_test_cache();
    let request: ListCyclesRequest = ListCyclesRequest {
        year: Some(String::from("2025")),
        page_size: Some(2),
        ..ListCyclesRequest::default()
    };
    let json: String = export_cycles(&cache, &request, ExportFormat::Json).unwrap();
    let records: Vec<CycleRecord> = serde_json::from_str(&json).unwrap();

    assert_eq!(records.len(), 13);
}

#[test]
fn test_bookmarked_cycles_in_order() {
    let cache: CatalogCache = create_test_cache();
    let mut preferences: Preferences = Preferences::default();
    preferences.toggle_bookmark("2610").unwrap();
    preferences.toggle_bookmark("2025-05").unwrap();

    let records: Vec<CycleRecord> = bookmarked_cycles(&cache, &preferences).unwrap();
    let ids: Vec<&str> = records.iter().map(|r| r.identifier.as_str()).collect();
    assert_eq!(ids, vec!["2505", "2610"]);
    assert_eq!(cache.evaluated_on(), TEST_TODAY);
}
