//! Aggregation operations.

use std::cmp::Reverse;

use crate::corpus::LogCorpus;
use crate::model::types::LogRecord;

use super::types::{CategoryCounts, Dim, OccurrenceMatrix};

/// Count of records per source category label.
///
/// Distinct from [`message_topic_counts`]: the key here is the category the
/// loader assigned, never anything derived from the line text.
pub fn category_counts(corpus: &LogCorpus) -> CategoryCounts {
    let mut counts = CategoryCounts::new();
    for record in corpus.records() {
        *counts.entry(record.category.clone()).or_default() += 1;
    }
    counts
}

/// Count of records per message-derived pseudo-category.
///
/// The key is the first whitespace-delimited token of the message with one
/// trailing `:`, `,` or `.` stripped — a coarse grouping of what the
/// messages talk about, independent of which source they came from.
pub fn message_topic_counts(corpus: &LogCorpus) -> CategoryCounts {
    let mut counts = CategoryCounts::new();
    for record in corpus.records() {
        if let Some(topic) = message_topic(&record.message) {
            *counts.entry(topic.to_string()).or_default() += 1;
        }
    }
    counts
}

fn message_topic(message: &str) -> Option<&str> {
    let token = message.split_whitespace().next()?;
    let token = token.strip_suffix([':', ',', '.']).unwrap_or(token);
    (!token.is_empty()).then_some(token)
}

/// Occurrence matrix over hour of day and the chosen dimension. Hours with
/// no records are explicit zeros for every observed dimension value.
pub fn occurrence_matrix(corpus: &LogCorpus, dim: Dim) -> OccurrenceMatrix {
    let mut matrix = OccurrenceMatrix::new(dim);
    for entry in corpus.entries() {
        let value = match dim {
            Dim::Category => &entry.record.category,
            Dim::Level => &entry.record.level,
        };
        matrix.bump(entry.hour, value);
    }
    matrix
}

/// Records with the critical level, newest first, truncated to `limit`.
///
/// The sort is stable, so records sharing a timestamp keep their ingestion
/// order.
pub fn critical_events(corpus: &LogCorpus, limit: usize) -> Vec<LogRecord> {
    let mut events: Vec<LogRecord> = corpus
        .records()
        .filter(|record| record.is_critical())
        .cloned()
        .collect();
    events.sort_by_key(|record| Reverse(record.timestamp));
    events.truncate(limit);
    events
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
