// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::filter::{filter_by_status, filter_by_year, search};
use crate::pagination::{Page, paginate};
use crate::sort::sort;
use crate::state::QueryState;
use airac_domain::Cycle;
use serde::Serialize;

/// The outcome of evaluating a query state against a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryResult {
    /// The requested page of matching cycles.
    pub page: Page,
    /// Number of cycles that passed search and filters.
    pub matched: usize,
    /// Number of cycles in the unfiltered input.
    pub total: usize,
}

impl QueryResult {
    /// True if nothing passed search and filters.
    #[must_use]
    pub const fn no_matches(&self) -> bool {
        self.matched == 0
    }
}

/// Applies every filter, sorts, then paginates.
///
/// Sorting happens after filtering and pagination after sorting. The input
/// is never modified.
#[must_use]
pub fn run_query(cycles: &[Cycle], state: &QueryState) -> QueryResult {
    let matched: Vec<Cycle> = filter_matching(cycles, state);
    let sorted: Vec<Cycle> = sort(&matched, state.sort());

    QueryResult {
        matched: sorted.len(),
        page: paginate(&sorted, state.page(), state.page_size()),
        total: cycles.len(),
    }
}

/// Applies search and filters, then sorts, without paginating.
///
/// Used by consumers that need every match, such as exports.
#[must_use]
pub fn select_all(cycles: &[Cycle], state: &QueryState) -> Vec<Cycle> {
    sort(&filter_matching(cycles, state), state.sort())
}

fn filter_matching(cycles: &[Cycle], state: &QueryState) -> Vec<Cycle> {
    let searched: Vec<Cycle> = search(cycles, state.search());
    let by_year: Vec<Cycle> = filter_by_year(&searched, state.year());
    filter_by_status(&by_year, state.status())
}
