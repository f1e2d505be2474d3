// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::filter::{StatusFilter, YearFilter};
use crate::sort::SortOrder;
use std::num::NonZeroUsize;

/// A command represents a consumer interaction as data only.
///
/// Commands are the only way to derive a new query state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryCommand {
    /// Replace the free-text search term.
    Search(String),
    /// Select a year.
    FilterYear(YearFilter),
    /// Select a status.
    FilterStatus(StatusFilter),
    /// Change the sort order.
    Sort(SortOrder),
    /// Jump to a 1-based page. Zero is treated as the first page.
    GoToPage(usize),
    /// Change the page size.
    SetPageSize(NonZeroUsize),
    /// Advance one page.
    NextPage,
    /// Go back one page, stopping at the first.
    PreviousPage,
    /// Restore the default state.
    Reset,
}
