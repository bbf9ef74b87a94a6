// ABOUTME: Shared constants for sheet layout, timestamp formats, and query limits
// ABOUTME: Single source of truth for the backing-table column order
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Named constants shared across the crate

/// Backing-table layout: row 1 is this header, data rows start at row 2.
pub mod sheet {
    /// Fixed header row of the backing table
    pub const HEADER: [&str; 8] = [
        "Date", "BodyPart", "Exercise", "Weight", "Reps", "Sets", "OneRepMax", "Note",
    ];

    /// Number of columns in a log row
    pub const COLUMN_COUNT: usize = 8;

    /// 1-based index of the first data row
    pub const FIRST_DATA_ROW: u64 = 2;

    /// Column positions within a row
    pub mod col {
        /// Timestamp column
        pub const DATE: usize = 0;
        /// Body-part label column
        pub const BODY_PART: usize = 1;
        /// Exercise name column
        pub const EXERCISE: usize = 2;
        /// Weight (kg) column
        pub const WEIGHT: usize = 3;
        /// Repetition count column
        pub const REPS: usize = 4;
        /// Set count column
        pub const SETS: usize = 5;
        /// Derived estimated-1RM column
        pub const ONE_REP_MAX: usize = 6;
        /// Free-text note column
        pub const NOTE: usize = 7;
    }
}

/// Timestamp encodings accepted and produced by the row codec
pub mod time_formats {
    /// Fixed pattern used when writing a record to the table
    pub const STORAGE: &str = "%Y-%m-%d %H:%M";

    /// Tolerant parser chain, tried in order, for legacy stored rows.
    /// Earlier iterations of the log stored slash-delimited locale strings.
    pub const PARSE_CHAIN: [&str; 6] = [
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y/%m/%d %H:%M:%S",
        "%Y/%m/%d %H:%M",
    ];
}

/// History entries returned when the caller gives no explicit limit
pub const DEFAULT_HISTORY_LIMIT: usize = 300;
