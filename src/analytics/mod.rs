//! Aggregate views over a log corpus.
//!
//! Pure functions only: every operation takes `&LogCorpus` (unfiltered or a
//! filtered view), is deterministic and side-effect-free, and returns
//! empty/zero-filled results on an empty corpus rather than failing. Safe to
//! call repeatedly or concurrently on the same corpus.

mod query;
mod types;

pub use query::{category_counts, critical_events, message_topic_counts, occurrence_matrix};
pub use types::{CategoryCounts, DEFAULT_CRITICAL_LIMIT, Dim, HOURS_PER_DAY, OccurrenceMatrix};
