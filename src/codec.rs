// ABOUTME: Row codec between backing-table rows and workout records
// ABOUTME: Tolerant timestamp parser chain covering native, ISO, and legacy slash formats
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Row Codec
//!
//! Converts between the backing table's ordered cell rows and
//! [`WorkoutRecord`]s. Encoding writes the timestamp as a fixed-pattern
//! text cell so rows round-trip textually; decoding accepts the formats
//! that accumulated over the log's lifetime (native date cells, ISO-like
//! strings, and slash-delimited locale strings) via a parser chain tried in
//! fixed priority order.
//!
//! A row whose timestamp cannot be resolved is a decode failure. Callers
//! skip such rows; they never abort a scan.

use chrono::{DateTime, NaiveDateTime, Utc};
use tracing::warn;

use crate::constants::{sheet, sheet::col, time_formats};
use crate::errors::{AppError, AppResult};
use crate::models::WorkoutRecord;
use crate::table::{Cell, Row};

/// Encode a record as an ordered cell row.
///
/// The timestamp is written as `%Y-%m-%d %H:%M` text rather than a native
/// date cell, guaranteeing stable textual round-tripping.
#[must_use]
pub fn encode(record: &WorkoutRecord) -> Row {
    vec![
        Cell::Text(record.timestamp.format(time_formats::STORAGE).to_string()),
        Cell::Text(record.body_part.clone()),
        Cell::Text(record.exercise.clone()),
        Cell::Number(record.weight),
        Cell::Number(f64::from(record.reps)),
        Cell::Number(record.sets),
        Cell::Number(record.estimated_one_rep_max),
        Cell::Text(record.note.clone()),
    ]
}

/// Decode an ordered cell row into a record.
///
/// Numeric fields tolerate missing or non-numeric cells by coercing to 0
/// (sets default to 1). An empty or unparseable timestamp is a decode
/// failure.
///
/// # Errors
/// Returns [`AppError::Decode`] when the row is too short or its timestamp
/// cannot be resolved.
pub fn decode(row: &Row) -> AppResult<WorkoutRecord> {
    if row.len() < sheet::COLUMN_COUNT {
        return Err(AppError::decode(format!(
            "expected {} columns, got {}",
            sheet::COLUMN_COUNT,
            row.len()
        )));
    }

    let timestamp = parse_timestamp(&row[col::DATE]).ok_or_else(|| {
        AppError::decode(format!(
            "unparseable timestamp cell: {:?}",
            row[col::DATE].as_text()
        ))
    })?;

    let weight = row[col::WEIGHT].as_number().unwrap_or(0.0).max(0.0);
    let reps = row[col::REPS].as_number().unwrap_or(0.0).max(0.0) as u32;
    let sets = row[col::SETS]
        .as_number()
        .filter(|s| *s > 0.0)
        .unwrap_or(1.0);

    Ok(WorkoutRecord {
        timestamp,
        body_part: row[col::BODY_PART].as_text(),
        exercise: row[col::EXERCISE].as_text(),
        weight,
        reps,
        sets,
        estimated_one_rep_max: row[col::ONE_REP_MAX].as_number().unwrap_or(0.0),
        note: row[col::NOTE].as_text(),
    })
}

/// Resolve a timestamp cell to a canonical instant.
///
/// Priority order: native date cell, RFC 3339 text, then the
/// [`time_formats::PARSE_CHAIN`] patterns. Stored strings carry no zone and
/// are interpreted as UTC so derived series are deterministic across hosts.
#[must_use]
pub fn parse_timestamp(cell: &Cell) -> Option<DateTime<Utc>> {
    match cell {
        Cell::Instant(t) => Some(*t),
        Cell::Text(s) => parse_timestamp_text(s),
        Cell::Number(_) | Cell::Empty => None,
    }
}

fn parse_timestamp_text(raw: &str) -> Option<DateTime<Utc>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(t) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(t.with_timezone(&Utc));
    }

    time_formats::PARSE_CHAIN.iter().find_map(|pattern| {
        NaiveDateTime::parse_from_str(trimmed, pattern)
            .ok()
            .map(|naive| naive.and_utc())
    })
}

/// Normalize a timestamp cell for time-series consumers.
///
/// Emits a strictly parseable RFC 3339 instant when the stored form can be
/// resolved. When it cannot, the raw text is returned unchanged and a
/// data-quality warning is logged; series consumers carry the raw value
/// rather than dropping the point silently.
#[must_use]
pub fn normalize_timestamp_for_series(cell: &Cell) -> String {
    parse_timestamp(cell).map_or_else(
        || {
            let raw = cell.as_text();
            warn!(raw = %raw, "timestamp fell through parser chain, keeping raw text");
            raw
        },
        |t| t.to_rfc3339(),
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn parser_chain_accepts_all_stored_forms() {
        let expected = Utc.with_ymd_and_hms(2024, 3, 5, 18, 30, 0).unwrap();
        assert_eq!(
            parse_timestamp(&Cell::from("2024-03-05 18:30")),
            Some(expected)
        );
        assert_eq!(
            parse_timestamp(&Cell::from("2024/03/05 18:30")),
            Some(expected)
        );
        assert_eq!(
            parse_timestamp(&Cell::from("2024-03-05T18:30:00")),
            Some(expected)
        );
        assert_eq!(
            parse_timestamp(&Cell::from("2024-03-05T18:30:00+00:00")),
            Some(expected)
        );
        assert_eq!(parse_timestamp(&Cell::Instant(expected)), Some(expected));
    }

    #[test]
    fn empty_and_garbage_timestamps_fail_to_parse() {
        assert_eq!(parse_timestamp(&Cell::Empty), None);
        assert_eq!(parse_timestamp(&Cell::from("")), None);
        assert_eq!(parse_timestamp(&Cell::from("last tuesday")), None);
        assert_eq!(parse_timestamp(&Cell::Number(42.0)), None);
    }

    #[test]
    fn series_normalization_falls_back_to_raw_text() {
        assert_eq!(
            normalize_timestamp_for_series(&Cell::from("2024-03-05 18:30")),
            "2024-03-05T18:30:00+00:00"
        );
        assert_eq!(
            normalize_timestamp_for_series(&Cell::from("not a date")),
            "not a date"
        );
    }
}
