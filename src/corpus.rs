//! The merged, normalized record collection.

use chrono::NaiveDate;
use serde::Serialize;

use crate::model::types::LogRecord;

/// One corpus record with its calendar keys derived once at construction,
/// so queries never recompute them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CorpusEntry {
    pub record: LogRecord,
    pub date: NaiveDate,
    /// Hour of day, 0-23.
    pub hour: u8,
}

/// Ordered record collection across all categories. Order is ingestion
/// order, not guaranteed chronological. Every entry has a valid timestamp:
/// the typed [`LogRecord::timestamp`] makes unresolved values
/// unrepresentable, so nothing needs re-checking here.
///
/// A corpus is immutable; reloading inputs or applying a filter builds a
/// new one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LogCorpus {
    entries: Vec<CorpusEntry>,
}

impl LogCorpus {
    /// Build a corpus from parsed records, deriving date and hour per
    /// record.
    pub fn build(records: Vec<LogRecord>) -> Self {
        let entries = records
            .into_iter()
            .map(|record| {
                let date = record.date();
                let hour = record.hour() as u8;
                CorpusEntry { record, date, hour }
            })
            .collect();
        Self { entries }
    }

    pub(crate) fn from_entries(entries: Vec<CorpusEntry>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[CorpusEntry] {
        &self.entries
    }

    /// Records in ingestion order.
    pub fn records(&self) -> impl Iterator<Item = &LogRecord> {
        self.entries.iter().map(|entry| &entry.record)
    }

    /// Records matching a predicate, in ingestion order.
    pub fn records_where<P>(&self, predicate: P) -> Vec<&LogRecord>
    where
        P: Fn(&LogRecord) -> bool,
    {
        self.records().filter(|record| predicate(record)).collect()
    }

    /// Minimum and maximum calendar date across all records; `None` for an
    /// empty corpus.
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        let mut dates = self.entries.iter().map(|entry| entry.date);
        let first = dates.next()?;
        let (min, max) = dates.fold((first, first), |(min, max), date| {
            (min.min(date), max.max(date))
        });
        Some((min, max))
    }

    /// Tabular view: each record as plain string fields in
    /// [`crate::model::types::RECORD_FIELDS`] order, ingestion order
    /// preserved. CSV or table formatting is the consumer's concern.
    pub fn rows(&self) -> Vec<[String; 4]> {
        self.records().map(LogRecord::to_row).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    use crate::model::types::TIMESTAMP_FORMAT;

    fn record(ts: &str, category: &str) -> LogRecord {
        LogRecord {
            timestamp: NaiveDateTime::parse_from_str(ts, TIMESTAMP_FORMAT).unwrap(),
            category: category.to_string(),
            level: "INFO".to_string(),
            message: "ok".to_string(),
        }
    }

    #[test]
    fn build_caches_calendar_keys() {
        let corpus = LogCorpus::build(vec![record("2024-03-05 23:59:59", "Performance")]);
        assert_eq!(corpus.len(), 1);
        let entry = &corpus.entries()[0];
        assert_eq!(entry.date.to_string(), "2024-03-05");
        assert_eq!(entry.hour, 23);
    }

    #[test]
    fn size_matches_input_count() {
        let records: Vec<LogRecord> = (1..=5)
            .map(|day| record(&format!("2024-01-0{day} 10:00:00"), "Memoria"))
            .collect();
        assert_eq!(LogCorpus::build(records).len(), 5);
    }

    #[test]
    fn date_range_spans_min_to_max() {
        let corpus = LogCorpus::build(vec![
            record("2024-01-03 10:00:00", "A"),
            record("2024-01-01 12:00:00", "A"),
            record("2024-01-02 08:00:00", "A"),
        ]);
        let (min, max) = corpus.date_range().unwrap();
        assert_eq!(min.to_string(), "2024-01-01");
        assert_eq!(max.to_string(), "2024-01-03");
    }

    #[test]
    fn empty_corpus_has_no_date_range() {
        assert_eq!(LogCorpus::default().date_range(), None);
        assert!(LogCorpus::default().is_empty());
    }

    #[test]
    fn records_where_filters_without_mutation() {
        let corpus = LogCorpus::build(vec![
            record("2024-01-01 10:00:00", "A"),
            record("2024-01-01 11:00:00", "B"),
        ]);
        let only_a = corpus.records_where(|r| r.category == "A");
        assert_eq!(only_a.len(), 1);
        assert_eq!(corpus.len(), 2);
    }

    #[test]
    fn rows_preserve_ingestion_order() {
        let corpus = LogCorpus::build(vec![
            record("2024-01-02 10:00:00", "B"),
            record("2024-01-01 10:00:00", "A"),
        ]);
        let rows = corpus.rows();
        assert_eq!(rows[0][1], "B");
        assert_eq!(rows[1][1], "A");
    }
}
