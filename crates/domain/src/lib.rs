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

mod catalog;
mod clock;
mod cycle;
mod error;
mod status;

#[cfg(test)]
mod tests;

pub use catalog::{Catalog, Cycle, find_current, generate_catalog};
pub use clock::{date_from_naive, parse_date, parse_timezone, today_in};
pub use cycle::{
    ANCHOR_DATE, CYCLE_LENGTH_DAYS, CYCLES_PER_YEAR, CycleId, FIRST_YEAR, LAST_YEAR, TOTAL_CYCLES,
    display_date, end_date_for, identifier_for, start_date_for,
};
pub use error::DomainError;
pub use status::{Classification, CycleStatus, classify};
