// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::filter::{StatusFilter, YearFilter};
use crate::pagination::DEFAULT_PAGE_SIZE;
use crate::sort::SortOrder;
use std::num::NonZeroUsize;

/// The consumer's current view of the catalog.
///
/// Query state is an immutable value. Every interaction produces a new
/// state through [`crate::apply`]; nothing mutates a state in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryState {
    search: String,
    year: YearFilter,
    status: StatusFilter,
    sort: SortOrder,
    page: usize,
    page_size: NonZeroUsize,
}

impl QueryState {
    /// Creates the default state: no search, every year and status,
    /// ascending by date, first page of 20.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            search: String::new(),
            year: YearFilter::All,
            status: StatusFilter::All,
            sort: SortOrder::DateAsc,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Returns the free-text search term.
    #[must_use]
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Returns the year selector.
    #[must_use]
    pub const fn year(&self) -> YearFilter {
        self.year
    }

    /// Returns the status selector.
    #[must_use]
    pub const fn status(&self) -> StatusFilter {
        self.status
    }

    /// Returns the sort order.
    #[must_use]
    pub const fn sort(&self) -> SortOrder {
        self.sort
    }

    /// Returns the 1-based page number.
    #[must_use]
    pub const fn page(&self) -> usize {
        self.page
    }

    /// Returns the page size.
    #[must_use]
    pub const fn page_size(&self) -> NonZeroUsize {
        self.page_size
    }

    pub(crate) fn with_search(self, search: String) -> Self {
        Self {
            search,
            page: 1,
            ..self
        }
    }

    pub(crate) fn with_year(self, year: YearFilter) -> Self {
        Self {
            year,
            page: 1,
            ..self
        }
    }

    pub(crate) fn with_status(self, status: StatusFilter) -> Self {
        Self {
            status,
            page: 1,
            ..self
        }
    }

    pub(crate) fn with_sort(self, sort: SortOrder) -> Self {
        Self {
            sort,
            page: 1,
            ..self
        }
    }

    pub(crate) fn with_page(self, page: usize) -> Self {
        Self {
            page: page.max(1),
            ..self
        }
    }

    pub(crate) fn with_page_size(self, page_size: NonZeroUsize) -> Self {
        Self {
            page_size,
            page: 1,
            ..self
        }
    }
}

impl Default for QueryState {
    fn default() -> Self {
        Self::new()
    }
}
