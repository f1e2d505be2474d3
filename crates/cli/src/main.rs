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
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use airac::{CatalogCache, DEFAULT_UPCOMING_LIMIT};
use airac_api::{
    ApiError, CycleRecord, ExportFormat, ListCyclesRequest, Preferences, bookmarked_cycles,
    current_cycle, export_cycles, get_cycle, list_cycles_with_preferences, statistics,
};
use airac_domain::{parse_date, parse_timezone, today_in};
use chrono_tz::Tz;
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;
use time::Date;
use tracing::info;

/// AIRAC cycle browser - query the AIRAC cycle catalog from the command line
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Evaluation day (`YYYY-MM-DD`). Defaults to today in `--timezone`.
    #[arg(short, long, global = true)]
    date: Option<String>,

    /// IANA timezone used to determine today's date
    #[arg(short, long, default_value = "UTC", global = true)]
    timezone: String,

    /// Path to the preferences file
    #[arg(long, default_value = "airac-preferences.json", global = true)]
    preferences: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the active cycle
    Current,

    /// Show a single cycle by `YYcc` or `YYYY-cc`
    Show {
        /// The cycle to show
        cycle: String,
    },

    /// List one page of cycles
    List {
        #[command(flatten)]
        filters: Filters,

        /// 1-based page number
        #[arg(long)]
        page: Option<usize>,

        /// Cycles per page. Defaults to the saved preference.
        #[arg(long)]
        page_size: Option<usize>,
    },

    /// Show catalog statistics
    Stats {
        /// Number of upcoming cycles to include
        #[arg(long, default_value_t = DEFAULT_UPCOMING_LIMIT)]
        upcoming: usize,
    },

    /// Export every matching cycle
    Export {
        #[command(flatten)]
        filters: Filters,

        /// Output format: csv, json or ics
        #[arg(short, long, default_value = "json")]
        format: String,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Add or remove a bookmark
    Bookmark {
        /// The cycle to toggle
        cycle: String,
    },

    /// List bookmarked cycles
    Bookmarks,
}

/// Search, filter and sort selectors shared by `list` and `export`.
#[derive(clap::Args, Debug, Default)]
struct Filters {
    /// Free-text search over identifiers, dates and years
    #[arg(long)]
    search: Option<String>,

    /// `all` or a four-digit year
    #[arg(long)]
    year: Option<String>,

    /// `all`, `active`, `upcoming` or `past`
    #[arg(long)]
    status: Option<String>,

    /// `date-asc`, `date-desc`, `identifier-asc` or `identifier-desc`
    #[arg(long)]
    sort: Option<String>,
}

impl Filters {
    fn to_request(&self, page: Option<usize>, page_size: Option<usize>) -> ListCyclesRequest {
        ListCyclesRequest {
            search: self.search.clone(),
            year: self.year.clone(),
            status: self.status.clone(),
            sort: self.sort.clone(),
            page,
            page_size,
        }
    }
}

/// Result of toggling a bookmark.
#[derive(Debug, Serialize)]
struct BookmarkResponse {
    cycle: CycleRecord,
    bookmarked: bool,
}

/// Resolves the evaluation day from `--date` or the clock in `--timezone`.
fn evaluation_day(args: &Args) -> Result<Date, ApiError> {
    let tz: Tz = parse_timezone(&args.timezone)?;
    match &args.date {
        Some(date) => Ok(parse_date(date)?),
        None => Ok(today_in(tz)?),
    }
}

fn write_json<W: Write, T: Serialize>(
    out: &mut W,
    value: &T,
) -> Result<(), Box<dyn std::error::Error>> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

fn run<W: Write>(args: &Args, out: &mut W) -> Result<(), Box<dyn std::error::Error>> {
    let today: Date = evaluation_day(args)?;
    let upcoming_limit: usize = match &args.command {
        Command::Stats { upcoming } => *upcoming,
        _ => DEFAULT_UPCOMING_LIMIT,
    };
    let cache: CatalogCache =
        CatalogCache::with_upcoming_limit(today, upcoming_limit).map_err(ApiError::from)?;

    info!(command = ?args.command, %today, "Handling command");

    match &args.command {
        Command::Current => write_json(out, &current_cycle(&cache)?),
        Command::Show { cycle } => write_json(out, &get_cycle(&cache, cycle)?),
        Command::List {
            filters,
            page,
            page_size,
        } => {
            let preferences: Preferences =
                Preferences::load(&args.preferences).map_err(ApiError::from)?;
            let request: ListCyclesRequest = filters.to_request(*page, *page_size);
            write_json(
                out,
                &list_cycles_with_preferences(&cache, &request, &preferences)?,
            )
        }
        Command::Stats { .. } => write_json(out, &statistics(&cache)?),
        Command::Export {
            filters,
            format,
            output,
        } => {
            let format: ExportFormat = format.parse()?;
            let rendered: String = export_cycles(&cache, &filters.to_request(None, None), format)?;
            match output {
                Some(path) => {
                    std::fs::write(path, rendered)?;
                    info!(path = %path.display(), %format, "Wrote export");
                }
                None => out.write_all(rendered.as_bytes())?,
            }
            Ok(())
        }
        Command::Bookmark { cycle } => {
            let record: CycleRecord = get_cycle(&cache, cycle)?;
            let mut preferences: Preferences =
                Preferences::load(&args.preferences).map_err(ApiError::from)?;
            let bookmarked: bool = preferences
                .toggle_bookmark(&record.composite_key)
                .map_err(ApiError::from)?;
            preferences.save(&args.preferences).map_err(ApiError::from)?;
            info!(cycle = %record.identifier, bookmarked, "Toggled bookmark");
            write_json(
                out,
                &BookmarkResponse {
                    cycle: record,
                    bookmarked,
                },
            )
        }
        Command::Bookmarks => {
            let preferences: Preferences =
                Preferences::load(&args.preferences).map_err(ApiError::from)?;
            write_json(out, &bookmarked_cycles(&cache, &preferences)?)
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing; stdout carries command output
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run(&args, &mut out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use tempfile::TempDir;

    /// Runs the CLI with `argv` and returns stdout.
    fn run_cli(argv: &[&str]) -> Result<String, Box<dyn std::error::Error>> {
        let args: Args =
            Args::try_parse_from(std::iter::once("airac-cli").chain(argv.iter().copied()))?;
        let mut out: Vec<u8> = Vec::new();
        run(&args, &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    fn run_json(argv: &[&str]) -> Value {
        let stdout: String = run_cli(argv).expect("command should succeed");
        serde_json::from_str(&stdout).expect("output should be JSON")
    }

    fn preferences_arg(dir: &TempDir) -> String {
        dir.path()
            .join("preferences.json")
            .to_string_lossy()
            .into_owned()
    }

    #[test]
    fn test_current_with_injected_date() {
        let value: Value = run_json(&["--date", "2025-02-15", "current"]);
        assert_eq!(value["identifier"], "2501");
        assert_eq!(value["status"], "active");
        assert_eq!(value["days_until_end"], 4);
    }

    #[test]
    fn test_current_outside_catalog_fails() {
        let err = run_cli(&["--date", "2024-12-31", "current"]).expect_err("no active cycle");
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_show_accepts_both_key_forms() {
        let short: Value = run_json(&["--date", "2025-02-15", "show", "2503"]);
        let long: Value = run_json(&["--date", "2025-02-15", "show", "2025-03"]);
        assert_eq!(short, long);
        assert_eq!(short["start_date"], "2025-03-20");
        assert_eq!(short["end_date"], "2025-04-16");
    }

    #[test]
    fn test_list_applies_filters() {
        let dir: TempDir = TempDir::new().expect("temp dir");
        let prefs: String = preferences_arg(&dir);
        let value: Value = run_json(&[
            "--date",
            "2025-02-15",
            "--preferences",
            &prefs,
            "list",
            "--year",
            "2026",
            "--page-size",
            "5",
        ]);
        assert_eq!(value["matched"], 13);
        assert_eq!(value["total_pages"], 3);
        assert_eq!(value["cycles"][0]["identifier"], "2601");
    }

    #[test]
    fn test_list_rejects_invalid_status() {
        let dir: TempDir = TempDir::new().expect("temp dir");
        let prefs: String = preferences_arg(&dir);
        let err = run_cli(&[
            "--date",
            "2025-02-15",
            "--preferences",
            &prefs,
            "list",
            "--status",
            "soon",
        ])
        .expect_err("invalid status");
        assert!(err.to_string().contains("status"));
    }

    #[test]
    fn test_stats_upcoming_limit() {
        let value: Value = run_json(&["--date", "2025-02-15", "stats", "--upcoming", "2"]);
        assert_eq!(value["total_cycles"], 975);
        assert_eq!(value["upcoming_cycles"].as_array().map(Vec::len), Some(2));
    }

    #[test]
    fn test_export_csv_to_stdout() {
        let stdout: String =
            run_cli(&["--date", "2025-02-15", "export", "--format", "csv"]).expect("export");
        assert_eq!(stdout.lines().count(), 976);
        assert!(stdout.starts_with("identifier,composite_key,"));
    }

    #[test]
    fn test_export_ics_to_file() {
        let dir: TempDir = TempDir::new().expect("temp dir");
        let path: PathBuf = dir.path().join("cycles.ics");
        let stdout: String = run_cli(&[
            "--date",
            "2025-02-15",
            "export",
            "--format",
            "ics",
            "--year",
            "2025",
            "--output",
            &path.to_string_lossy(),
        ])
        .expect("export");

        assert!(stdout.is_empty());
        let written: String = std::fs::read_to_string(&path).expect("export file");
        assert_eq!(written.matches("BEGIN:VEVENT").count(), 13);
    }

    #[test]
    fn test_export_rejects_unknown_format() {
        assert!(run_cli(&["--date", "2025-02-15", "export", "--format", "xml"]).is_err());
    }

    #[test]
    fn test_bookmark_toggle_persists() {
        let dir: TempDir = TempDir::new().expect("temp dir");
        let prefs: String = preferences_arg(&dir);

        let added: Value = run_json(&[
            "--date",
            "2025-02-15",
            "--preferences",
            &prefs,
            "bookmark",
            "2507",
        ]);
        assert_eq!(added["bookmarked"], true);
        assert_eq!(added["cycle"]["composite_key"], "2025-07");

        let listed: Value = run_json(&["--date", "2025-02-15", "--preferences", &prefs, "bookmarks"]);
        assert_eq!(listed[0]["identifier"], "2507");

        let removed: Value = run_json(&[
            "--date",
            "2025-02-15",
            "--preferences",
            &prefs,
            "bookmark",
            "2025-07",
        ]);
        assert_eq!(removed["bookmarked"], false);

        let listed: Value = run_json(&["--date", "2025-02-15", "--preferences", &prefs, "bookmarks"]);
        assert_eq!(listed.as_array().map(Vec::len), Some(0));
    }

    #[test]
    fn test_invalid_timezone_fails() {
        let err = run_cli(&["--timezone", "Mars/Olympus", "current"]).expect_err("bad timezone");
        assert!(err.to_string().contains("timezone"));
    }

    #[test]
    fn test_invalid_date_fails() {
        assert!(run_cli(&["--date", "2025-02-30", "current"]).is_err());
    }
}
