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
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;
mod export;
mod handlers;
mod preferences;
mod request_response;

#[cfg(test)]
mod tests;

pub use error::{ApiError, translate_core_error, translate_domain_error};
pub use export::{ExportError, ExportFormat, export, to_csv, to_icalendar, to_json};
pub use handlers::{
    bookmarked_cycles, current_cycle, export_cycles, get_cycle, list_cycles,
    list_cycles_with_preferences, statistics,
};
pub use preferences::{Preferences, PreferencesError};
pub use request_response::{
    CycleRecord, ListCyclesRequest, ListCyclesResponse, StatisticsResponse, to_records,
};
