// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use airac_domain::Cycle;
use serde::Serialize;
use std::num::NonZeroUsize;

/// Page size used when the consumer has not chosen one.
pub const DEFAULT_PAGE_SIZE: NonZeroUsize = match NonZeroUsize::new(20) {
    Some(size) => size,
    None => NonZeroUsize::MIN,
};

/// One page of results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page {
    items: Vec<Cycle>,
    page: usize,
    page_size: NonZeroUsize,
    total_items: usize,
    total_pages: usize,
}

impl Page {
    /// Returns the cycles on this page.
    #[must_use]
    pub fn items(&self) -> &[Cycle] {
        &self.items
    }

    /// Returns the requested 1-based page number.
    #[must_use]
    pub const fn page(&self) -> usize {
        self.page
    }

    /// Returns the page size.
    #[must_use]
    pub const fn page_size(&self) -> NonZeroUsize {
        self.page_size
    }

    /// Returns the number of items across all pages.
    #[must_use]
    pub const fn total_items(&self) -> usize {
        self.total_items
    }

    /// Returns the number of pages.
    #[must_use]
    pub const fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// True if this page holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// True if a later page has items.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// True if an earlier page has items.
    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.page > 1
    }

    /// Consumes the page, returning its cycles.
    #[must_use]
    pub fn into_items(self) -> Vec<Cycle> {
        self.items
    }
}

/// Number of pages needed for `total_items` at `page_size`.
#[must_use]
pub const fn total_pages(total_items: usize, page_size: NonZeroUsize) -> usize {
    total_items.div_ceil(page_size.get())
}

/// Slices out the 1-based `page`.
///
/// Page 0 and pages past the last one yield an empty page.
#[must_use]
pub fn paginate(cycles: &[Cycle], page: usize, page_size: NonZeroUsize) -> Page {
    let total_items: usize = cycles.len();
    let total_pages: usize = total_pages(total_items, page_size);

    let items: Vec<Cycle> = if page == 0 || page > total_pages {
        Vec::new()
    } else {
        let start: usize = (page - 1) * page_size.get();
        let end: usize = (start + page_size.get()).min(total_items);
        cycles[start..end].to_vec()
    };

    Page {
        items,
        page,
        page_size,
        total_items,
        total_pages,
    }
}
