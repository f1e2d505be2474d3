// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use airac::CatalogCache;
use airac_domain::{Cycle, generate_catalog};
use time::{Date, macros::date};

pub const TEST_TODAY: Date = date!(2025 - 02 - 15);

pub fn create_test_cache() -> CatalogCache {
    CatalogCache::new(TEST_TODAY).unwrap()
}

pub fn create_test_cycles(count: usize) -> Vec<Cycle> {
    generate_catalog(TEST_TODAY)
        .unwrap()
        .into_iter()
        .take(count)
        .collect()
}
