// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::TEST_TODAY;
use crate::{CatalogCache, QueryCommand, QueryResult, QueryState, StatusFilter, apply};
use time::macros::date;

#[test]
fn test_cache_generates_catalog_and_statistics() {
    let cache: CatalogCache = CatalogCache::new(TEST_TODAY).unwrap();

    assert_eq!(cache.cycles().len(), 975);
    assert_eq!(cache.evaluated_on(), TEST_TODAY);
    assert_eq!(cache.statistics().total_cycles, 975);
    assert_eq!(cache.statistics().upcoming_cycles.len(), 5);
    assert_eq!(cache.current().unwrap().identifier(), "2501");
}

#[test]
fn test_refresh_same_day_is_noop() {
    let mut cache: CatalogCache = CatalogCache::new(TEST_TODAY).unwrap();
    assert!(!cache.refresh(TEST_TODAY));
    assert_eq!(cache.evaluated_on(), TEST_TODAY);
}

#[test]
fn test_refresh_new_day_recomputes_status() {
    let mut cache: CatalogCache = CatalogCache::new(TEST_TODAY).unwrap();
    let dates_before: Vec<_> = cache.cycles().iter().map(|c| c.start_date()).collect();

    assert!(cache.refresh(date!(2025 - 02 - 20)));

    let dates_after: Vec<_> = cache.cycles().iter().map(|c| c.start_date()).collect();
    assert_eq!(dates_before, dates_after);
    assert_eq!(cache.current().unwrap().identifier(), "2502");
    assert_eq!(
        cache.statistics().current_cycle.unwrap().identifier(),
        "2502"
    );
    assert_eq!(
        cache.statistics().upcoming_cycles[0].identifier(),
        "2503"
    );
}

#[test]
fn test_refresh_within_cycle_keeps_current() {
    let mut cache: CatalogCache = CatalogCache::new(TEST_TODAY).unwrap();
    assert!(cache.refresh(date!(2025 - 02 - 16)));
    assert_eq!(cache.current().unwrap().identifier(), "2501");
    assert_eq!(cache.current().unwrap().days_until_end(), 3);
}

#[test]
fn test_custom_upcoming_limit() {
    let cache: CatalogCache = CatalogCache::with_upcoming_limit(TEST_TODAY, 10).unwrap();
    assert_eq!(cache.statistics().upcoming_cycles.len(), 10);
}

#[test]
fn test_cache_query_uses_current_statuses() {
    let mut cache: CatalogCache = CatalogCache::new(TEST_TODAY).unwrap();
    let state: QueryState = apply(
        QueryState::new(),
        QueryCommand::FilterStatus(StatusFilter::Past),
    );

    let before: QueryResult = cache.query(&state);
    assert!(before.no_matches());

    cache.refresh(date!(2025 - 06 - 01));
    let after: QueryResult = cache.query(&state);
    assert!(after.matched > 0);
    assert!(after.page.items().iter().all(|c| c.is_past()));
}
