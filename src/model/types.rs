//! Normalized record structs.

use chrono::{NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

/// Fixed timestamp layout carried inside the bracketed token of every line.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Severity token marking a record as operator-relevant.
///
/// Levels are free-form strings (the parser enforces no closed set); only
/// this one has special meaning, for the critical-event view.
pub const CRITICAL_LEVEL: &str = "ERROR";

/// Column headers for the tabular view, in [`LogRecord::to_row`] order.
pub const RECORD_FIELDS: [&str; 4] = ["timestamp", "category", "level", "message"];

/// One parsed log line. Immutable once constructed; every field is
/// non-empty or the line was rejected at parse time — there is no partial
/// record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogRecord {
    /// Parsed from the bracketed `[YYYY-MM-DD HH:MM:SS]` token.
    pub timestamp: NaiveDateTime,
    /// Source grouping label, assigned by the loading context (directory
    /// name or URL segment), not parsed from the line itself.
    pub category: String,
    /// Free-form severity token, conventionally INFO/WARNING/ERROR.
    pub level: String,
    /// Free-text remainder of the line; may itself contain the field
    /// separator.
    pub message: String,
}

impl LogRecord {
    /// Calendar date of the record's timestamp.
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }

    /// Hour of day, 0-23.
    pub fn hour(&self) -> u32 {
        self.timestamp.hour()
    }

    pub fn is_critical(&self) -> bool {
        self.level == CRITICAL_LEVEL
    }

    /// Plain-field row for tabular/CSV consumers, in [`RECORD_FIELDS`]
    /// order. Serialization itself is the consumer's concern.
    pub fn to_row(&self) -> [String; 4] {
        [
            self.timestamp.format(TIMESTAMP_FORMAT).to_string(),
            self.category.clone(),
            self.level.clone(),
            self.message.clone(),
        ]
    }
}
