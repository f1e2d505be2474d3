// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Catalog generation.
//!
//! The catalog is the full, chronologically ordered sequence of cycles from
//! `2501` through `9913`. Dates never change between generations; only the
//! status of each cycle depends on the evaluation day.

use crate::cycle::{
    CYCLES_PER_YEAR, CycleId, FIRST_YEAR, LAST_YEAR, TOTAL_CYCLES, display_date, end_date_for,
};
use crate::error::DomainError;
use crate::status::{Classification, CycleStatus, classify};
use serde::Serialize;
use time::Date;
use tracing::debug;

/// A single AIRAC cycle evaluated against a specific day.
///
/// Cycles are immutable values. Re-evaluating against a later day produces a
/// new value with identical dates and a fresh classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Cycle {
    id: CycleId,
    start_date: Date,
    end_date: Date,
    classification: Classification,
}

impl Cycle {
    /// Derives the cycle for `id` and classifies it against `today`.
    ///
    /// # Errors
    ///
    /// Returns an error if date arithmetic overflows.
    pub fn derive(id: CycleId, today: Date) -> Result<Self, DomainError> {
        let start_date: Date = id.start_date()?;
        let end_date: Date = end_date_for(start_date)?;
        Ok(Self {
            id,
            start_date,
            end_date,
            classification: classify(start_date, end_date, today),
        })
    }

    /// Returns a copy of this cycle classified against a different day.
    #[must_use]
    pub fn reclassify(self, today: Date) -> Self {
        Self {
            classification: classify(self.start_date, self.end_date, today),
            ..self
        }
    }

    /// Returns the cycle id.
    #[must_use]
    pub const fn id(&self) -> CycleId {
        self.id
    }

    /// Returns the `YYcc` identifier.
    #[must_use]
    pub fn identifier(&self) -> String {
        self.id.identifier()
    }

    /// Returns the `YYYY-cc` composite key.
    #[must_use]
    pub fn composite_key(&self) -> String {
        self.id.composite_key()
    }

    /// Returns the full year.
    #[must_use]
    pub const fn year(&self) -> u16 {
        self.id.year()
    }

    /// Returns the cycle number within the year.
    #[must_use]
    pub const fn cycle_number(&self) -> u8 {
        self.id.number()
    }

    /// Returns the start date (inclusive).
    #[must_use]
    pub const fn start_date(&self) -> Date {
        self.start_date
    }

    /// Returns the end date (inclusive).
    #[must_use]
    pub const fn end_date(&self) -> Date {
        self.end_date
    }

    /// Start date formatted for display, e.g. `Jan 23, 2025`.
    ///
    /// # Errors
    ///
    /// Returns an error if the date cannot be formatted.
    pub fn display_start_date(&self) -> Result<String, DomainError> {
        display_date(self.start_date)
    }

    /// End date formatted for display, e.g. `Feb 19, 2025`.
    ///
    /// # Errors
    ///
    /// Returns an error if the date cannot be formatted.
    pub fn display_end_date(&self) -> Result<String, DomainError> {
        display_date(self.end_date)
    }

    /// Returns the classification against the evaluation day.
    #[must_use]
    pub const fn classification(&self) -> Classification {
        self.classification
    }

    /// Returns the status against the evaluation day.
    #[must_use]
    pub const fn status(&self) -> CycleStatus {
        self.classification.status()
    }

    /// True if the cycle starts after the evaluation day.
    #[must_use]
    pub const fn is_upcoming(&self) -> bool {
        self.classification.is_upcoming()
    }

    /// True if the evaluation day falls within the cycle.
    #[must_use]
    pub const fn is_current(&self) -> bool {
        self.classification.is_current()
    }

    /// True if the cycle ended before the evaluation day.
    #[must_use]
    pub const fn is_past(&self) -> bool {
        self.classification.is_past()
    }

    /// Days elapsed since the start date.
    #[must_use]
    pub const fn days_since_start(&self) -> i64 {
        self.classification.days_since_start()
    }

    /// Days remaining until the end date.
    #[must_use]
    pub const fn days_until_end(&self) -> i64 {
        self.classification.days_until_end()
    }

    /// Returns the number of days in this cycle.
    ///
    /// This is always 28.
    #[must_use]
    pub fn duration_days(&self) -> i64 {
        (self.end_date - self.start_date).whole_days() + 1
    }
}

/// Generates every cycle from `FIRST_YEAR` through `LAST_YEAR`, ordered
/// chronologically and classified against `today`.
///
/// # Errors
///
/// Returns an error if date arithmetic overflows. This indicates a broken
/// anchor constant and callers should abort rather than continue with a
/// partial catalog.
pub fn generate_catalog(today: Date) -> Result<Vec<Cycle>, DomainError> {
    let mut cycles: Vec<Cycle> = Vec::with_capacity(TOTAL_CYCLES);

    for year in FIRST_YEAR..=LAST_YEAR {
        for number in 1..=CYCLES_PER_YEAR {
            cycles.push(Cycle::derive(CycleId::new(year, number)?, today)?);
        }
    }

    debug!(count = cycles.len(), %today, "generated cycle catalog");
    Ok(cycles)
}

/// Returns the active cycle, if any.
///
/// No fallback is applied: when `today` lies outside the catalog range no
/// cycle is current.
#[must_use]
pub fn find_current(cycles: &[Cycle]) -> Option<&Cycle> {
    cycles.iter().find(|cycle| cycle.is_current())
}

/// The generated catalog together with the day it was evaluated against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Catalog {
    cycles: Vec<Cycle>,
    evaluated_on: Date,
}

impl Catalog {
    /// Generates the full catalog classified against `today`.
    ///
    /// # Errors
    ///
    /// Returns an error if date arithmetic overflows.
    pub fn generate(today: Date) -> Result<Self, DomainError> {
        Ok(Self {
            cycles: generate_catalog(today)?,
            evaluated_on: today,
        })
    }

    /// Returns a catalog with every status recomputed for `today`.
    ///
    /// Dates are carried over unchanged.
    #[must_use]
    pub fn reclassify(&self, today: Date) -> Self {
        debug!(from = %self.evaluated_on, to = %today, "reclassifying cycle catalog");
        Self {
            cycles: self
                .cycles
                .iter()
                .map(|cycle| cycle.reclassify(today))
                .collect(),
            evaluated_on: today,
        }
    }

    /// Returns all cycles in chronological order.
    #[must_use]
    pub fn cycles(&self) -> &[Cycle] {
        &self.cycles
    }

    /// Returns the day the statuses were evaluated against.
    #[must_use]
    pub const fn evaluated_on(&self) -> Date {
        self.evaluated_on
    }

    /// Returns the number of cycles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cycles.len()
    }

    /// True if the catalog holds no cycles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cycles.is_empty()
    }

    /// Returns the active cycle, if any.
    #[must_use]
    pub fn find_current(&self) -> Option<&Cycle> {
        find_current(&self.cycles)
    }

    /// Looks up a cycle by id.
    #[must_use]
    pub fn find(&self, id: &CycleId) -> Option<&Cycle> {
        self.cycles.get(usize::try_from(id.ordinal()).ok()?)
    }

    /// Looks up a cycle by `YYcc` identifier or `YYYY-cc` composite key.
    ///
    /// # Errors
    ///
    /// Returns an error if the key cannot be parsed.
    pub fn find_by_key(&self, key: &str) -> Result<Option<&Cycle>, DomainError> {
        let id: CycleId = key.parse()?;
        Ok(self.find(&id))
    }

    /// Returns the cycle whose window contains `date`, if any.
    #[must_use]
    pub fn cycle_containing(&self, date: Date) -> Option<&Cycle> {
        self.find(&CycleId::containing(date)?)
    }

    /// Consumes the catalog, returning its cycles.
    #[must_use]
    pub fn into_cycles(self) -> Vec<Cycle> {
        self.cycles
    }
}
