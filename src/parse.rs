//! Raw line parsing.
//!
//! One line of the wire format
//! `"[YYYY-MM-DD HH:MM:SS] - <ignored> - <LEVEL> - <message>"` becomes a
//! [`LogRecord`] or a [`LineRejection`]. Rejection is an explicit result
//! variant, never an exception path: callers decide whether to log, count,
//! or silently drop rejects (the loader counts and drops).
//!
//! Timestamp policy is strict for every source kind: a line whose timestamp
//! token does not parse is rejected whole, since a record with unknown time
//! is unusable for every downstream aggregation.

use chrono::NaiveDateTime;
use thiserror::Error;

use crate::model::types::{LogRecord, TIMESTAMP_FORMAT};

/// Literal separator between the four line fields.
pub const FIELD_SEPARATOR: &str = " - ";

/// Why a raw line was rejected. Kept for diagnostics; malformed lines are
/// never surfaced to the user individually.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineRejection {
    #[error("expected 4 ` - `-separated fields, found {0}")]
    FieldCount(usize),

    #[error("unparseable timestamp token `{0}`")]
    Timestamp(String),

    #[error("empty {0} field")]
    EmptyField(&'static str),
}

/// Parse one raw line under the category label of its source.
///
/// The line is split on [`FIELD_SEPARATOR`] into at most four parts:
/// timestamp token, an ignored second field, level, and the message
/// remainder (never re-split, so the message may contain the separator).
/// The timestamp token loses one leading `[` and one trailing `]` before
/// parsing with [`TIMESTAMP_FORMAT`].
pub fn parse_line(raw: &str, category: &str) -> Result<LogRecord, LineRejection> {
    if category.is_empty() {
        return Err(LineRejection::EmptyField("category"));
    }

    let line = raw.trim();
    let parts: Vec<&str> = line.splitn(4, FIELD_SEPARATOR).collect();
    if parts.len() < 4 {
        return Err(LineRejection::FieldCount(parts.len()));
    }

    let token = parts[0];
    let token = token.strip_prefix('[').unwrap_or(token);
    let token = token.strip_suffix(']').unwrap_or(token);
    let timestamp = NaiveDateTime::parse_from_str(token, TIMESTAMP_FORMAT)
        .map_err(|_| LineRejection::Timestamp(token.to_string()))?;

    let level = parts[2];
    if level.is_empty() {
        return Err(LineRejection::EmptyField("level"));
    }
    // parts[3] cannot be empty: a line ending in the separator loses the
    // trailing space to trim() and splits into three parts instead.
    let message = parts[3];

    Ok(LogRecord {
        timestamp,
        category: category.to_string(),
        level: level.to_string(),
        message: message.to_string(),
    })
}
