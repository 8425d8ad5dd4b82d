//! Corpus narrowing.
//!
//! A [`CorpusFilter`] produces a new, independent [`LogCorpus`] from an
//! existing one; the original is never mutated, so the unfiltered and
//! filtered views share no state.

use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::corpus::{CorpusEntry, LogCorpus};

/// A value set to match against: everything, or exactly the listed values.
///
/// `Only` with an empty set matches nothing — the vacuous filter — which
/// keeps "caller sent the full default set" and "caller deselected
/// everything" distinguishable.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    All,
    Only(BTreeSet<String>),
}

impl Selection {
    pub fn only<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Only(values.into_iter().map(Into::into).collect())
    }

    pub fn matches(&self, value: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(set) => set.contains(value),
        }
    }
}

/// Filter over category, level, and an inclusive calendar date range.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CorpusFilter {
    pub categories: Selection,
    pub levels: Selection,
    /// `(from, to)`, inclusive on both ends.
    pub dates: Option<(NaiveDate, NaiveDate)>,
}

impl CorpusFilter {
    pub fn passes(&self, entry: &CorpusEntry) -> bool {
        self.categories.matches(&entry.record.category)
            && self.levels.matches(&entry.record.level)
            && self
                .dates
                .is_none_or(|(from, to)| entry.date >= from && entry.date <= to)
    }

    /// Build a new corpus from the entries that pass; the input is left
    /// unchanged.
    pub fn apply(&self, corpus: &LogCorpus) -> LogCorpus {
        LogCorpus::from_entries(
            corpus
                .entries()
                .iter()
                .filter(|entry| self.passes(entry))
                .cloned()
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    use crate::model::types::{LogRecord, TIMESTAMP_FORMAT};

    fn corpus() -> LogCorpus {
        let mk = |ts: &str, category: &str, level: &str| LogRecord {
            timestamp: NaiveDateTime::parse_from_str(ts, TIMESTAMP_FORMAT).unwrap(),
            category: category.to_string(),
            level: level.to_string(),
            message: "m".to_string(),
        };
        LogCorpus::build(vec![
            mk("2024-01-01 10:00:00", "Performance", "INFO"),
            mk("2024-01-02 11:00:00", "Performance", "ERROR"),
            mk("2024-01-03 12:00:00", "Memoria", "WARNING"),
        ])
    }

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn default_filter_is_identity() {
        let input = corpus();
        let out = CorpusFilter::default().apply(&input);
        assert_eq!(out, input);
    }

    #[test]
    fn empty_selection_matches_nothing() {
        let filter = CorpusFilter {
            categories: Selection::only(Vec::<String>::new()),
            ..CorpusFilter::default()
        };
        assert!(filter.apply(&corpus()).is_empty());
    }

    #[test]
    fn filters_by_category_and_level() {
        let filter = CorpusFilter {
            categories: Selection::only(["Performance"]),
            levels: Selection::only(["ERROR"]),
            dates: None,
        };
        let out = filter.apply(&corpus());
        assert_eq!(out.len(), 1);
        assert_eq!(out.entries()[0].record.level, "ERROR");
    }

    #[test]
    fn date_range_is_inclusive_on_both_ends() {
        let filter = CorpusFilter {
            dates: Some((date("2024-01-01"), date("2024-01-02"))),
            ..CorpusFilter::default()
        };
        let out = filter.apply(&corpus());
        assert_eq!(out.len(), 2);

        let single_day = CorpusFilter {
            dates: Some((date("2024-01-03"), date("2024-01-03"))),
            ..CorpusFilter::default()
        };
        assert_eq!(single_day.apply(&corpus()).len(), 1);
    }

    #[test]
    fn apply_leaves_input_unchanged() {
        let input = corpus();
        let filter = CorpusFilter {
            levels: Selection::only(["ERROR"]),
            ..CorpusFilter::default()
        };
        let out = filter.apply(&input);
        assert_eq!(out.len(), 1);
        assert_eq!(input.len(), 3);
    }
}
