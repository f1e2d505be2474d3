// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read operations over a cached catalog.
//!
//! Handlers translate raw requests into typed query state, evaluate them
//! against the cache and shape the results for presentation. They never
//! read the clock; the cache carries the evaluation day.

use crate::error::ApiError;
use crate::export::{ExportFormat, export};
use crate::preferences::Preferences;
use crate::request_response::{
    CycleRecord, ListCyclesRequest, ListCyclesResponse, StatisticsResponse, to_records,
};
use airac::{CatalogCache, QueryResult, QueryState, select_all};
use airac_domain::{Cycle, CycleId};
use tracing::debug;

/// Lists one page of cycles.
///
/// # Errors
///
/// Returns an error if any selector in the request is invalid.
pub fn list_cycles(
    cache: &CatalogCache,
    request: &ListCyclesRequest,
) -> Result<ListCyclesResponse, ApiError> {
    let state: QueryState = request.to_query_state()?;
    run_list(cache, &state)
}

/// Lists one page of cycles starting from the consumer's preferences.
///
/// # Errors
///
/// Returns an error if any selector in the request is invalid.
pub fn list_cycles_with_preferences(
    cache: &CatalogCache,
    request: &ListCyclesRequest,
    preferences: &Preferences,
) -> Result<ListCyclesResponse, ApiError> {
    let state: QueryState = request.to_query_state_from(preferences.initial_query_state())?;
    run_list(cache, &state)
}

fn run_list(cache: &CatalogCache, state: &QueryState) -> Result<ListCyclesResponse, ApiError> {
    let result: QueryResult = cache.query(state);
    debug!(
        matched = result.matched,
        page = result.page.page(),
        total_pages = result.page.total_pages(),
        "listed cycles"
    );
    Ok(ListCyclesResponse::from_result(&result, cache.evaluated_on())?)
}

/// Returns the active cycle.
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` when the evaluation day lies
/// outside the catalog.
pub fn current_cycle(cache: &CatalogCache) -> Result<CycleRecord, ApiError> {
    let cycle: &Cycle = cache.current().ok_or_else(|| ApiError::ResourceNotFound {
        resource_type: String::from("Cycle"),
        message: format!("no cycle is active on {}", cache.evaluated_on()),
    })?;
    Ok(CycleRecord::try_from(cycle)?)
}

/// Looks up a cycle by `YYcc` identifier or `YYYY-cc` composite key.
///
/// # Errors
///
/// Returns an error if the key is malformed or names no catalog cycle.
pub fn get_cycle(cache: &CatalogCache, key: &str) -> Result<CycleRecord, ApiError> {
    let cycle: &Cycle =
        cache
            .catalog()
            .find_by_key(key)?
            .ok_or_else(|| ApiError::ResourceNotFound {
                resource_type: String::from("Cycle"),
                message: format!("cycle '{key}' is not in the catalog"),
            })?;
    Ok(CycleRecord::try_from(cycle)?)
}

/// Returns statistics over the full catalog.
///
/// # Errors
///
/// Returns an error if a reported cycle cannot be rendered.
pub fn statistics(cache: &CatalogCache) -> Result<StatisticsResponse, ApiError> {
    Ok(StatisticsResponse::from_statistics(
        cache.statistics(),
        cache.evaluated_on(),
    )?)
}

/// Exports every cycle matching the request, ignoring pagination.
///
/// # Errors
///
/// Returns an error if the request is invalid or rendering fails.
pub fn export_cycles(
    cache: &CatalogCache,
    request: &ListCyclesRequest,
    format: ExportFormat,
) -> Result<String, ApiError> {
    let state: QueryState = request.to_query_state()?;
    let cycles: Vec<Cycle> = select_all(cache.cycles(), &state);
    debug!(count = cycles.len(), %format, "exporting cycles");
    Ok(export(&cycles, format, cache.evaluated_on())?)
}

/// Returns the bookmarked cycles in chronological order.
///
/// # Errors
///
/// Returns an error if a bookmarked cycle cannot be rendered.
pub fn bookmarked_cycles(
    cache: &CatalogCache,
    preferences: &Preferences,
) -> Result<Vec<CycleRecord>, ApiError> {
    let cycles: Vec<Cycle> = preferences
        .bookmarked_ids()
        .iter()
        .filter_map(|id: &CycleId| cache.catalog().find(id))
        .cloned()
        .collect();
    Ok(to_records(&cycles)?)
}
