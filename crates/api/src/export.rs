// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Text exports of cycle records.
//!
//! Exports are pure string rendering over [`CycleRecord`] fields. The
//! iCalendar output follows RFC 5545: CRLF line endings, all-day events and
//! an exclusive `DTEND`.

use crate::error::ApiError;
use crate::request_response::{CycleRecord, to_records};
use airac_domain::{Cycle, DomainError};
use std::str::FromStr;
use thiserror::Error;
use time::{Date, format_description::BorrowedFormatItem, macros::format_description};

const ICS_DATE: &[BorrowedFormatItem<'static>] = format_description!("[year][month][day]");

const CSV_HEADERS: [&str; 11] = [
    "identifier",
    "composite_key",
    "year",
    "cycle_number",
    "start_date",
    "end_date",
    "display_start_date",
    "display_end_date",
    "status",
    "days_since_start",
    "days_until_end",
];

const ICS_PRODUCT_ID: &str = "-//airac//AIRAC cycle catalog//EN";

/// Supported export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    /// Comma-separated values with a header row.
    Csv,
    /// A JSON array of cycle records.
    Json,
    /// An iCalendar feed with one all-day event per cycle.
    ICalendar,
}

impl ExportFormat {
    /// Returns the conventional file extension.
    #[must_use]
    pub const fn file_extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
            Self::ICalendar => "ics",
        }
    }

    /// Returns the media type of the rendered text.
    #[must_use]
    pub const fn media_type(&self) -> &'static str {
        match self {
            Self::Csv => "text/csv",
            Self::Json => "application/json",
            Self::ICalendar => "text/calendar",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            "ics" | "ical" | "icalendar" => Ok(Self::ICalendar),
            _ => Err(ApiError::InvalidInput {
                field: String::from("format"),
                message: format!("'{s}' is not valid; expected csv, json or ics"),
            }),
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.file_extension())
    }
}

/// Export rendering errors.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The CSV writer rejected a record.
    #[error("CSV encoding failed: {0}")]
    Csv(#[from] csv::Error),

    /// The CSV buffer could not be flushed.
    #[error("CSV buffer could not be flushed: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failed.
    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),

    /// The rendered bytes were not UTF-8.
    #[error("export produced invalid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// A cycle could not be converted into a record.
    #[error("cycle could not be rendered: {0}")]
    Record(#[from] DomainError),

    /// A calendar date could not be formatted.
    #[error("date formatting failed: {0}")]
    Date(#[from] time::error::Format),
}

/// Renders `cycles` in `format`.
///
/// `generated_on` stamps iCalendar events and is ignored by other formats.
///
/// # Errors
///
/// Returns an error if encoding fails.
pub fn export(
    cycles: &[Cycle],
    format: ExportFormat,
    generated_on: Date,
) -> Result<String, ExportError> {
    match format {
        ExportFormat::Csv => to_csv(cycles),
        ExportFormat::Json => to_json(cycles),
        ExportFormat::ICalendar => to_icalendar(cycles, generated_on),
    }
}

/// Renders a CSV document with a header row.
///
/// # Errors
///
/// Returns an error if encoding fails.
pub fn to_csv(cycles: &[Cycle]) -> Result<String, ExportError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    writer.write_record(CSV_HEADERS)?;
    for record in to_records(cycles)? {
        writer.serialize(record)?;
    }

    let bytes: Vec<u8> = writer.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8(bytes)?)
}

/// Renders a pretty-printed JSON array.
///
/// # Errors
///
/// Returns an error if encoding fails.
pub fn to_json(cycles: &[Cycle]) -> Result<String, ExportError> {
    let records: Vec<CycleRecord> = to_records(cycles)?;
    Ok(serde_json::to_string_pretty(&records)?)
}

/// Renders an iCalendar feed.
///
/// # Errors
///
/// Returns an error if a date cannot be formatted.
pub fn to_icalendar(cycles: &[Cycle], generated_on: Date) -> Result<String, ExportError> {
    let stamp: String = format!("{}T000000Z", basic_date(generated_on)?);
    let mut out: String = String::new();

    push_line(&mut out, "BEGIN:VCALENDAR");
    push_line(&mut out, "VERSION:2.0");
    push_line(&mut out, &format!("PRODID:{ICS_PRODUCT_ID}"));
    push_line(&mut out, "CALSCALE:GREGORIAN");

    for cycle in cycles {
        let exclusive_end: Date = cycle.end_date().next_day().unwrap_or(cycle.end_date());
        push_line(&mut out, "BEGIN:VEVENT");
        push_line(&mut out, &format!("UID:airac-{}@airac", cycle.composite_key()));
        push_line(&mut out, &format!("DTSTAMP:{stamp}"));
        push_line(
            &mut out,
            &format!("DTSTART;VALUE=DATE:{}", basic_date(cycle.start_date())?),
        );
        push_line(
            &mut out,
            &format!("DTEND;VALUE=DATE:{}", basic_date(exclusive_end)?),
        );
        push_line(&mut out, &format!("SUMMARY:AIRAC {}", cycle.identifier()));
        push_line(
            &mut out,
            &format!(
                "DESCRIPTION:{}",
                escape_text(&format!(
                    "AIRAC cycle {} ({} to {})",
                    cycle.identifier(),
                    cycle.display_start_date()?,
                    cycle.display_end_date()?
                ))
            ),
        );
        push_line(&mut out, "END:VEVENT");
    }

    push_line(&mut out, "END:VCALENDAR");
    Ok(out)
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(line);
    out.push_str("\r\n");
}

/// Formats an RFC 5545 `DATE` value, e.g. `20250123`.
fn basic_date(date: Date) -> Result<String, time::error::Format> {
    date.format(ICS_DATE)
}

/// Escapes an RFC 5545 TEXT value.
fn escape_text(value: &str) -> String {
    let mut out: String = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            ';' => out.push_str("\\;"),
            ',' => out.push_str("\\,"),
            '\n' => out.push_str("\\n"),
            _ => out.push(ch),
        }
    }
    out
}
