// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Aggregate statistics over the full catalog.
//!
//! Statistics are always computed over the unfiltered catalog so that
//! consumers can report "X of Y" regardless of the active filters.

use airac_domain::{Cycle, find_current};
use serde::Serialize;
use std::collections::BTreeMap;

/// Number of upcoming cycles reported when the consumer has not chosen a limit.
pub const DEFAULT_UPCOMING_LIMIT: usize = 5;

/// Aggregate figures for a collection of cycles.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statistics {
    /// Total number of cycles.
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
    pub current_cycle: Option<Cycle>,
    /// The next upcoming cycles in chronological order.
    pub upcoming_cycles: Vec<Cycle>,
}

/// Computes statistics over `cycles`.
///
/// An empty input yields zero counts and durations.
///
/// # Arguments
///
/// * `cycles` - The full catalog
/// * `upcoming_limit` - Maximum number of upcoming cycles to report
#[must_use]
pub fn compute_statistics(cycles: &[Cycle], upcoming_limit: usize) -> Statistics {
    let mut cycles_by_year: BTreeMap<u16, usize> = BTreeMap::new();
    for cycle in cycles {
        *cycles_by_year.entry(cycle.year()).or_insert(0) += 1;
    }

    let durations: Vec<i64> = cycles.iter().map(Cycle::duration_days).collect();
    let total_duration: i64 = durations.iter().sum();

    #[allow(clippy::cast_precision_loss)]
    let average_cycle_duration: f64 = if durations.is_empty() {
        0.0
    } else {
        total_duration as f64 / durations.len() as f64
    };

    let mut upcoming_cycles: Vec<Cycle> = cycles
        .iter()
        .filter(|cycle| cycle.is_upcoming())
        .copied()
        .collect();
    upcoming_cycles.sort_by_key(Cycle::start_date);
    upcoming_cycles.truncate(upcoming_limit);

    Statistics {
        total_cycles: cycles.len(),
        cycles_by_year,
        average_cycle_duration,
        min_cycle_duration: durations.iter().copied().min().unwrap_or(0),
        max_cycle_duration: durations.iter().copied().max().unwrap_or(0),
        current_cycle: find_current(cycles).copied(),
        upcoming_cycles,
    }
}
