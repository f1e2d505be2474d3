// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod apply;
mod cache;
mod command;
mod engine;
mod error;
mod filter;
mod pagination;
mod sort;
mod state;
mod statistics;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use apply::{apply, apply_all};
pub use cache::CatalogCache;
pub use command::QueryCommand;
pub use engine::{QueryResult, run_query, select_all};
pub use error::CoreError;
pub use filter::{StatusFilter, YearFilter, filter_by_status, filter_by_year, search};
pub use pagination::{DEFAULT_PAGE_SIZE, Page, paginate, total_pages};
pub use sort::{SortOrder, sort};
pub use state::QueryState;
pub use statistics::{DEFAULT_UPCOMING_LIMIT, Statistics, compute_statistics};
