// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Day-bucketed memo of the catalog and its statistics.
//!
//! Dates never change, so the catalog is generated once. Statuses and
//! statistics depend on the evaluation day and are recomputed only when the
//! day changes. Filtered views are cheap and are never cached.

use crate::engine::{QueryResult, run_query};
use crate::error::CoreError;
use crate::state::QueryState;
use crate::statistics::{DEFAULT_UPCOMING_LIMIT, Statistics, compute_statistics};
use airac_domain::{Catalog, Cycle};
use time::Date;
use tracing::debug;

/// Holds the catalog and the statistics for one evaluation day.
#[derive(Debug, Clone)]
pub struct CatalogCache {
    catalog: Catalog,
    statistics: Statistics,
    upcoming_limit: usize,
}

impl CatalogCache {
    /// Generates the catalog for `today` with the default upcoming limit.
    ///
    /// # Errors
    ///
    /// Returns an error if catalog generation fails.
    pub fn new(today: Date) -> Result<Self, CoreError> {
        Self::with_upcoming_limit(today, DEFAULT_UPCOMING_LIMIT)
    }

    /// Generates the catalog for `today`, reporting at most `upcoming_limit`
    /// upcoming cycles in the statistics.
    ///
    /// # Errors
    ///
    /// Returns an error if catalog generation fails.
    pub fn with_upcoming_limit(today: Date, upcoming_limit: usize) -> Result<Self, CoreError> {
        let catalog: Catalog = Catalog::generate(today)?;
        let statistics: Statistics = compute_statistics(catalog.cycles(), upcoming_limit);
        Ok(Self {
            catalog,
            statistics,
            upcoming_limit,
        })
    }

    /// Brings statuses and statistics up to date for `today`.
    ///
    /// Returns `true` if anything was recomputed. Calling this repeatedly
    /// within the same day is free.
    pub fn refresh(&mut self, today: Date) -> bool {
        if self.catalog.evaluated_on() == today {
            return false;
        }

        debug!(from = %self.catalog.evaluated_on(), to = %today, "refreshing catalog cache");
        self.catalog = self.catalog.reclassify(today);
        self.statistics = compute_statistics(self.catalog.cycles(), self.upcoming_limit);
        true
    }

    /// Returns the cached catalog.
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Returns every cycle in chronological order.
    #[must_use]
    pub fn cycles(&self) -> &[Cycle] {
        self.catalog.cycles()
    }

    /// Returns the cached full-catalog statistics.
    #[must_use]
    pub const fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    /// Returns the day the cache was evaluated against.
    #[must_use]
    pub const fn evaluated_on(&self) -> Date {
        self.catalog.evaluated_on()
    }

    /// Returns the active cycle, if any.
    #[must_use]
    pub fn current(&self) -> Option<&Cycle> {
        self.catalog.find_current()
    }

    /// Evaluates `state` against the cached catalog.
    #[must_use]
    pub fn query(&self, state: &QueryState) -> QueryResult {
        run_query(self.catalog.cycles(), state)
    }
}
