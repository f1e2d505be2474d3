// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persisted consumer preferences.
//!
//! Preferences are a small JSON key-value document holding the preferred
//! page size, sort order and the set of bookmarked cycles. Bookmarks are
//! stored by composite key (`YYYY-cc`).

use airac::{DEFAULT_PAGE_SIZE, QueryCommand, QueryState, SortOrder, apply_all};
use airac_domain::{CycleId, DomainError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::io::ErrorKind;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// Preference errors.
#[derive(Debug, Error)]
pub enum PreferencesError {
    /// The preferences file exists but could not be read.
    #[error("failed to read preferences from {}: {source}", .path.display())]
    Read {
        /// The file that was read.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The preferences file could not be written.
    #[error("failed to write preferences to {}: {source}", .path.display())]
    Write {
        /// The file that was written.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The preferences document is not valid JSON.
    #[error("preferences are not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// A bookmark does not name a catalog cycle.
    #[error("invalid bookmark: {0}")]
    InvalidBookmark(DomainError),
}

/// User preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    /// Preferred number of cycles per page.
    pub page_size: NonZeroUsize,
    /// Preferred sort order.
    pub sort: SortOrder,
    /// Bookmarked composite keys.
    pub bookmarks: BTreeSet<String>,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            sort: SortOrder::default(),
            bookmarks: BTreeSet::new(),
        }
    }
}

impl Preferences {
    /// Loads preferences from `path`. A missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid JSON.
    pub fn load(path: &Path) -> Result<Self, PreferencesError> {
        match std::fs::read_to_string(path) {
            Ok(contents) => Self::from_json(&contents),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "no preferences file, using defaults");
                Ok(Self::default())
            }
            Err(source) => Err(PreferencesError::Read {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Parses preferences from a JSON document. Absent keys take defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not valid JSON.
    pub fn from_json(contents: &str) -> Result<Self, PreferencesError> {
        Ok(serde_json::from_str(contents)?)
    }

    /// Writes preferences to `path`, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), PreferencesError> {
        let write_error = |source: std::io::Error| PreferencesError::Write {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(write_error)?;
        }

        let contents: String = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents).map_err(write_error)
    }

    /// Adds or removes a bookmark.
    ///
    /// Accepts either `YYcc` or `YYYY-cc` and stores the composite key.
    /// Returns `true` if the cycle is bookmarked afterwards.
    ///
    /// # Errors
    ///
    /// Returns an error if the key does not name a catalog cycle.
    pub fn toggle_bookmark(&mut self, key: &str) -> Result<bool, PreferencesError> {
        let id: CycleId = key.parse().map_err(PreferencesError::InvalidBookmark)?;
        let composite: String = id.composite_key();

        if self.bookmarks.remove(&composite) {
            Ok(false)
        } else {
            self.bookmarks.insert(composite);
            Ok(true)
        }
    }

    /// True if the cycle is bookmarked.
    #[must_use]
    pub fn is_bookmarked(&self, id: &CycleId) -> bool {
        self.bookmarks.contains(&id.composite_key())
    }

    /// Returns bookmarked cycle ids in chronological order.
    ///
    /// Entries that no longer parse are skipped with a warning.
    #[must_use]
    pub fn bookmarked_ids(&self) -> Vec<CycleId> {
        let mut ids: Vec<CycleId> = self
            .bookmarks
            .iter()
            .filter_map(|key| match CycleId::parse_composite_key(key) {
                Ok(id) => Some(id),
                Err(e) => {
                    warn!(bookmark = %key, error = %e, "ignoring invalid bookmark");
                    None
                }
            })
            .collect();
        ids.sort();
        ids
    }

    /// Returns the query state these preferences start from.
    #[must_use]
    pub fn initial_query_state(&self) -> QueryState {
        apply_all(
            QueryState::new(),
            [
                QueryCommand::Sort(self.sort),
                QueryCommand::SetPageSize(self.page_size),
            ],
        )
    }
}
