// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use airac_domain::{Cycle, generate_catalog};
use std::num::NonZeroUsize;
use time::{Date, macros::date};

/// Evaluation day used across tests; cycle 2501 is active.
pub const TEST_TODAY: Date = date!(2025 - 02 - 15);

pub fn create_test_catalog() -> Vec<Cycle> {
    generate_catalog(TEST_TODAY).unwrap()
}

pub fn page_size(size: usize) -> NonZeroUsize {
    NonZeroUsize::new(size).unwrap()
}

pub fn identifiers(cycles: &[Cycle]) -> Vec<String> {
    cycles.iter().map(Cycle::identifier).collect()
}
