//! Normalized log entities.

pub mod types;

pub use types::{CRITICAL_LEVEL, LogRecord, RECORD_FIELDS, TIMESTAMP_FORMAT};
