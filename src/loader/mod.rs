//! Multi-source loading.
//!
//! A [`SourceDescriptor`] names where a batch of category logs lives: a
//! directory whose immediate subdirectories each hold a `logs.txt`, or a
//! base URL serving `<base>/<category>/logs.txt` for a configured category
//! list. [`SourceLoader::load_all`] expands descriptors into independent
//! per-category fetch units, loads them in parallel, parses every non-empty
//! line under the unit's category, and merges the results into one
//! [`LoadReport`].
//!
//! Failure policy: a failed unit contributes one [`SourceFailure`] and never
//! blocks the others; malformed lines are dropped and only tallied. Merge is
//! plain concatenation, so loading order across sources cannot change any
//! aggregation result.

mod directory;
mod remote;

use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use rayon::prelude::*;
use thiserror::Error;
use tracing::{debug, trace, warn};

use crate::model::types::LogRecord;
use crate::parse::parse_line;

pub use remote::{DEFAULT_TIMEOUT, Fetch, HttpFetch};

/// File name expected inside every category subdirectory / URL path.
pub const LOG_FILE_NAME: &str = "logs.txt";

/// Where a batch of category log files comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceDescriptor {
    /// Local tree; log files matched at `root/<category>/logs.txt`, with
    /// the category taken from the matched file's parent directory name.
    Directory { root: PathBuf },
    /// One URL per configured category: `base_url/<category>/logs.txt`.
    Remote {
        base_url: String,
        categories: Vec<String>,
    },
}

impl SourceDescriptor {
    pub fn directory(root: impl Into<PathBuf>) -> Self {
        Self::Directory { root: root.into() }
    }

    pub fn remote(base_url: impl Into<String>, categories: Vec<String>) -> Self {
        Self::Remote {
            base_url: base_url.into(),
            categories,
        }
    }
}

/// Why a single source failed to yield lines.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("reading {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid glob pattern `{pattern}`: {source}")]
    Pattern {
        pattern: String,
        source: glob::PatternError,
    },

    #[error("no log files matched `{pattern}`")]
    NoMatches { pattern: String },

    #[error("fetching {url}: {source}")]
    Transport { url: String, source: reqwest::Error },

    #[error("{url} returned HTTP status {status}")]
    Status { url: String, status: u16 },
}

/// One failed source, reported with its identity so the presentation layer
/// can show it; other sources are unaffected.
#[derive(Debug)]
pub struct SourceFailure {
    /// File path, glob pattern, or URL that identifies the source.
    pub source: String,
    pub error: LoadError,
}

/// Outcome of one load cycle across all descriptors.
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Successfully parsed records from every source that loaded.
    pub records: Vec<LogRecord>,
    /// One entry per source that failed to yield lines.
    pub failures: Vec<SourceFailure>,
    /// Number of sources that yielded lines (even if all were malformed).
    pub sources_loaded: usize,
    /// Malformed lines dropped across all loaded sources.
    pub lines_skipped: usize,
}

impl LoadReport {
    /// True when loading never succeeded anywhere — the explicit
    /// "no data available" signal, distinct from an empty record set out of
    /// sources that did load.
    pub fn no_data(&self) -> bool {
        self.sources_loaded == 0
    }
}

/// A single category payload to fetch, produced by descriptor expansion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum FetchUnit {
    File { path: PathBuf, category: String },
    Url { url: String, category: String },
}

/// Records parsed out of one successfully fetched unit.
struct SourceBatch {
    source: String,
    category: String,
    records: Vec<LogRecord>,
    skipped: usize,
}

/// Loads and parses all configured sources for one refresh cycle.
///
/// Holds no state besides the fetch collaborator, so independent loader
/// instances (e.g. tests with an in-memory [`Fetch`]) cannot interfere.
pub struct SourceLoader {
    fetcher: Box<dyn Fetch>,
}

impl SourceLoader {
    /// Loader with the default blocking HTTP fetcher.
    pub fn new() -> Result<Self> {
        Ok(Self::with_fetcher(Box::new(HttpFetch::new(
            DEFAULT_TIMEOUT,
        )?)))
    }

    /// Loader with a caller-supplied fetch collaborator.
    pub fn with_fetcher(fetcher: Box<dyn Fetch>) -> Self {
        Self { fetcher }
    }

    /// Expand, fetch and parse every descriptor; merge into one report.
    ///
    /// Units are independent and fetched in parallel purely for latency;
    /// correctness does not depend on it.
    pub fn load_all(&self, descriptors: &[SourceDescriptor]) -> LoadReport {
        let mut units = Vec::new();
        let mut failures = Vec::new();
        for descriptor in descriptors {
            match descriptor {
                SourceDescriptor::Directory { root } => match directory::expand(root) {
                    Ok(mut found) => units.append(&mut found),
                    Err(failure) => failures.push(failure),
                },
                SourceDescriptor::Remote {
                    base_url,
                    categories,
                } => units.extend(remote::expand(base_url, categories)),
            }
        }

        let batches: Vec<Result<SourceBatch, SourceFailure>> =
            units.par_iter().map(|unit| self.load_unit(unit)).collect();

        let mut report = LoadReport {
            failures,
            ..LoadReport::default()
        };
        for batch in batches {
            match batch {
                Ok(batch) => {
                    debug!(
                        source = %batch.source,
                        category = %batch.category,
                        records = batch.records.len(),
                        skipped = batch.skipped,
                        "loaded source"
                    );
                    report.sources_loaded += 1;
                    report.lines_skipped += batch.skipped;
                    report.records.extend(batch.records);
                }
                Err(failure) => {
                    warn!(source = %failure.source, error = %failure.error, "source failed to load");
                    report.failures.push(failure);
                }
            }
        }
        report
    }

    fn load_unit(&self, unit: &FetchUnit) -> Result<SourceBatch, SourceFailure> {
        let (source, category, text) = match unit {
            FetchUnit::File { path, category } => {
                let text = fs::read_to_string(path).map_err(|source| SourceFailure {
                    source: path.display().to_string(),
                    error: LoadError::Io {
                        path: path.clone(),
                        source,
                    },
                })?;
                (path.display().to_string(), category, text)
            }
            FetchUnit::Url { url, category } => {
                let text = self
                    .fetcher
                    .fetch_text(url)
                    .map_err(|error| SourceFailure {
                        source: url.clone(),
                        error,
                    })?;
                (url.clone(), category, text)
            }
        };

        let mut records = Vec::new();
        let mut skipped = 0usize;
        for line in text.lines() {
            if line.trim().is_empty() {
                continue;
            }
            match parse_line(line, category) {
                Ok(record) => records.push(record),
                Err(rejection) => {
                    trace!(%rejection, "skipping malformed line");
                    skipped += 1;
                }
            }
        }

        Ok(SourceBatch {
            source,
            category: category.clone(),
            records,
            skipped,
        })
    }
}
