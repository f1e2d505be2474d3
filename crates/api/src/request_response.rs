// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

use crate::error::ApiError;
use airac::{
    QueryCommand, QueryResult, QueryState, SortOrder, StatusFilter, Statistics, YearFilter,
    apply_all,
};
use airac_domain::{Cycle, DomainError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::num::NonZeroUsize;
use time::Date;

/// API request to list cycles.
///
/// Every selector arrives as raw consumer input and is validated by
/// [`ListCyclesRequest::to_query_state`]. Missing selectors keep their
/// defaults.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ListCyclesRequest {
    /// Free-text search term.
    pub search: Option<String>,
    /// `all` or a four-digit year.
    pub year: Option<String>,
    /// `all`, `active`, `upcoming` or `past`.
    pub status: Option<String>,
    /// `date-asc`, `date-desc`, `identifier-asc` or `identifier-desc`.
    pub sort: Option<String>,
    /// 1-based page number.
    pub page: Option<usize>,
    /// Number of cycles per page.
    pub page_size: Option<usize>,
}

impl ListCyclesRequest {
    /// Validates the request into a query state, starting from `base`.
    ///
    /// # Errors
    ///
    /// Returns an error if any selector cannot be parsed or the page size is zero.
    pub fn to_query_state_from(&self, base: QueryState) -> Result<QueryState, ApiError> {
        let mut commands: Vec<QueryCommand> = Vec::new();

        if let Some(search) = &self.search {
            commands.push(QueryCommand::Search(search.clone()));
        }
        if let Some(year) = &self.year {
            commands.push(QueryCommand::FilterYear(year.parse::<YearFilter>()?));
        }
        if let Some(status) = &self.status {
            commands.push(QueryCommand::FilterStatus(status.parse::<StatusFilter>()?));
        }
        if let Some(sort) = &self.sort {
            commands.push(QueryCommand::Sort(sort.parse::<SortOrder>()?));
        }
        if let Some(page_size) = self.page_size {
            let size: NonZeroUsize =
                NonZeroUsize::new(page_size).ok_or_else(|| ApiError::InvalidInput {
                    field: String::from("page_size"),
                    message: String::from("page size must be at least 1"),
                })?;
            commands.push(QueryCommand::SetPageSize(size));
        }
        // Last: every other command returns to the first page.
        if let Some(page) = self.page {
            commands.push(QueryCommand::GoToPage(page));
        }

        Ok(apply_all(base, commands))
    }

    /// Validates the request into a query state, starting from the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if any selector cannot be parsed or the page size is zero.
    pub fn to_query_state(&self) -> Result<QueryState, ApiError> {
        self.to_query_state_from(QueryState::new())
    }
}

/// Flat, display-ready view of a cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CycleRecord {
    /// `YYcc` identifier.
    pub identifier: String,
    /// `YYYY-cc` composite key.
    pub composite_key: String,
    /// Full year.
    pub year: u16,
    /// Cycle number within the year.
    pub cycle_number: u8,
    /// ISO 8601 start date.
    pub start_date: String,
    /// ISO 8601 end date (inclusive).
    pub end_date: String,
    /// Start date for display.
    pub display_start_date: String,
    /// End date for display.
    pub display_end_date: String,
    /// `upcoming`, `active` or `past`.
    pub status: String,
    /// Days since the start date.
    pub days_since_start: i64,
    /// Days until the end date.
    pub days_until_end: i64,
}

impl TryFrom<&Cycle> for CycleRecord {
    type Error = DomainError;

    fn try_from(cycle: &Cycle) -> Result<Self, Self::Error> {
        Ok(Self {
            identifier: cycle.identifier(),
            composite_key: cycle.composite_key(),
            year: cycle.year(),
            cycle_number: cycle.cycle_number(),
            start_date: cycle.start_date().to_string(),
            end_date: cycle.end_date().to_string(),
            display_start_date: cycle.display_start_date()?,
            display_end_date: cycle.display_end_date()?,
            status: cycle.status().as_str().to_string(),
            days_since_start: cycle.days_since_start(),
            days_until_end: cycle.days_until_end(),
        })
    }
}

/// Converts a slice of cycles into records.
///
/// # Errors
///
/// Returns an error if a cycle's display dates cannot be formatted.
pub fn to_records(cycles: &[Cycle]) -> Result<Vec<CycleRecord>, DomainError> {
    cycles.iter().map(CycleRecord::try_from).collect()
}

/// API response for listing cycles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListCyclesResponse {
    /// The cycles on the requested page.
    pub cycles: Vec<CycleRecord>,
    /// The requested page number.
    pub page: usize,
    /// The page size.
    pub page_size: usize,
    /// Number of pages for the matching cycles.
    pub total_pages: usize,
    /// Number of cycles matching search and filters.
    pub matched: usize,
    /// Number of cycles in the catalog.
    pub total: usize,
    /// The day statuses were evaluated against (ISO 8601).
    pub evaluated_on: String,
}

impl ListCyclesResponse {
    /// Builds the response from a query result.
    ///
    /// # Errors
    ///
    /// Returns an error if a cycle on the page cannot be rendered.
    pub fn from_result(result: &QueryResult, evaluated_on: Date) -> Result<Self, DomainError> {
        Ok(Self {
            cycles: to_records(result.page.items())?,
            page: result.page.page(),
            page_size: result.page.page_size().get(),
            total_pages: result.page.total_pages(),
            matched: result.matched,
            total: result.total,
            evaluated_on: evaluated_on.to_string(),
        })
    }
}

/// API response for catalog statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatisticsResponse {
    /// Number of cycles in the catalog.
    pub total_cycles: usize,
    /// Number of cycles per year.
    pub cycles_by_year: BTreeMap<u16, usize>,
    /// Mean cycle length in days.
    pub average_cycle_duration: f64,
    /// Shortest cycle length in days.
    pub min_cycle_duration: i64,
    /// Longest cycle length in days.
    pub max_cycle_duration: i64,
    /// The active cycle, if any.
    pub current_cycle: Option<CycleRecord>,
    /// The next upcoming cycles.
    pub upcoming_cycles: Vec<CycleRecord>,
    /// The day statuses were evaluated against (ISO 8601).
    pub evaluated_on: String,
}

impl StatisticsResponse {
    /// Builds the response from computed statistics.
    ///
    /// # Errors
    ///
    /// Returns an error if the current or an upcoming cycle cannot be rendered.
    pub fn from_statistics(
        statistics: &Statistics,
        evaluated_on: Date,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            total_cycles: statistics.total_cycles,
            cycles_by_year: statistics.cycles_by_year.clone(),
            average_cycle_duration: statistics.average_cycle_duration,
            min_cycle_duration: statistics.min_cycle_duration,
            max_cycle_duration: statistics.max_cycle_duration,
            current_cycle: statistics
                .current_cycle
                .as_ref()
                .map(CycleRecord::try_from)
                .transpose()?,
            upcoming_cycles: to_records(&statistics.upcoming_cycles)?,
            evaluated_on: evaluated_on.to_string(),
        })
    }
}
