//! Shared aggregation result types.

use std::collections::BTreeMap;

use serde::Serialize;

/// Rows of the occurrence matrix: one per hour of day.
pub const HOURS_PER_DAY: usize = 24;

/// How many critical events the ranked list keeps by default.
pub const DEFAULT_CRITICAL_LIMIT: usize = 10;

/// Dimension for the hour-of-day occurrence matrix — which record field
/// the columns come from.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Dim {
    Category,
    Level,
}

impl std::fmt::Display for Dim {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Category => write!(f, "category"),
            Self::Level => write!(f, "level"),
        }
    }
}

/// Count of records per distinct value. Values absent from the corpus are
/// absent here (no zero-fill); BTreeMap keeps the output deterministic
/// regardless of source load order.
pub type CategoryCounts = BTreeMap<String, u64>;

/// Counts bucketed jointly by hour of day and one dimension value.
///
/// Every observed dimension value carries a full 24-hour column: hours with
/// no records are explicit zeros, never absent cells. Values never observed
/// in the corpus have no column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OccurrenceMatrix {
    pub dim: Dim,
    columns: BTreeMap<String, [u64; HOURS_PER_DAY]>,
}

impl OccurrenceMatrix {
    pub(crate) fn new(dim: Dim) -> Self {
        Self {
            dim,
            columns: BTreeMap::new(),
        }
    }

    pub(crate) fn bump(&mut self, hour: u8, value: &str) {
        let column = self
            .columns
            .entry(value.to_string())
            .or_insert([0; HOURS_PER_DAY]);
        column[hour as usize] += 1;
    }

    /// Count at `(hour, value)`; zero for unobserved values as well, so
    /// callers can probe freely.
    pub fn get(&self, hour: u8, value: &str) -> u64 {
        self.columns
            .get(value)
            .map_or(0, |column| column[hour as usize])
    }

    /// Observed dimension values, in deterministic (sorted) order.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }

    /// Full 24-hour column for one observed value.
    pub fn column(&self, value: &str) -> Option<&[u64; HOURS_PER_DAY]> {
        self.columns.get(value)
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unobserved_cells_read_as_zero() {
        let mut matrix = OccurrenceMatrix::new(Dim::Level);
        matrix.bump(10, "ERROR");
        assert_eq!(matrix.get(10, "ERROR"), 1);
        assert_eq!(matrix.get(11, "ERROR"), 0);
        assert_eq!(matrix.get(10, "INFO"), 0);
    }

    #[test]
    fn columns_are_full_day_grids() {
        let mut matrix = OccurrenceMatrix::new(Dim::Category);
        matrix.bump(0, "Performance");
        let column = matrix.column("Performance").unwrap();
        assert_eq!(column.len(), HOURS_PER_DAY);
        assert_eq!(column.iter().sum::<u64>(), 1);
    }

    #[test]
    fn values_iterate_sorted() {
        let mut matrix = OccurrenceMatrix::new(Dim::Category);
        matrix.bump(1, "b");
        matrix.bump(1, "a");
        let values: Vec<&str> = matrix.values().collect();
        assert_eq!(values, ["a", "b"]);
    }

    #[test]
    fn matrix_serializes_with_dimension_tag() {
        let mut matrix = OccurrenceMatrix::new(Dim::Level);
        matrix.bump(2, "INFO");
        let json = serde_json::to_value(&matrix).unwrap();
        assert_eq!(json["dim"], "level");
        assert_eq!(json["columns"]["INFO"][2], 1);
    }
}
