//! Multi-source log ingestion and aggregation core.
//!
//! The pipeline: a [`SourceLoader`] resolves source descriptors (a directory
//! of per-category log files, or a base URL plus category list) into raw
//! lines, hands each line to the parser, and merges the parsed records from
//! all sources into one [`LoadReport`]. A [`LogCorpus`] built from the
//! report caches calendar date and hour-of-day per record, a
//! [`CorpusFilter`] narrows it into a new independent corpus, and the
//! [`analytics`] functions compute the aggregate views a presentation layer
//! renders.
//!
//! ```rust,ignore
//! use logmon::{CorpusFilter, SourceDescriptor, SourceLoader, analytics};
//!
//! let loader = SourceLoader::new()?;
//! let (corpus, report) = logmon::load_corpus(&loader, &[SourceDescriptor::directory("logs")]);
//! if report.no_data() {
//!     // loading never succeeded — distinct from "zero logs occurred"
//! }
//! let counts = analytics::category_counts(&corpus);
//! let errors = analytics::critical_events(&corpus, analytics::DEFAULT_CRITICAL_LIMIT);
//! ```
//!
//! Malformed lines are dropped silently (reflected only in the report's
//! skipped-line tally); a failed source never blocks the others.

pub mod analytics;
pub mod config;
pub mod corpus;
pub mod filter;
pub mod loader;
pub mod model;
pub mod parse;

pub use analytics::{CategoryCounts, DEFAULT_CRITICAL_LIMIT, Dim, OccurrenceMatrix};
pub use config::{ConfigError, MonitorConfig, SourceDefinition, default_categories};
pub use corpus::{CorpusEntry, LogCorpus};
pub use filter::{CorpusFilter, Selection};
pub use loader::{
    Fetch, HttpFetch, LoadError, LoadReport, SourceDescriptor, SourceFailure, SourceLoader,
};
pub use model::types::{LogRecord, RECORD_FIELDS};
pub use parse::{LineRejection, parse_line};

/// Run one load cycle and build the corpus from its records.
///
/// Returns the corpus together with the remainder of the [`LoadReport`]
/// (per-source failures, skipped-line tally, no-data signal).
pub fn load_corpus(
    loader: &SourceLoader,
    descriptors: &[SourceDescriptor],
) -> (LogCorpus, LoadReport) {
    let mut report = loader.load_all(descriptors);
    let corpus = LogCorpus::build(std::mem::take(&mut report.records));
    (corpus, report)
}
