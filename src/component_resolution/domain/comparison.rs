use serde::Serialize;

/// Placeholder shown for a specification a component does not report.
pub const MISSING_VALUE: &str = "—";

/// Column header: one per compared component, original first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparisonHeader {
    pub part_number: String,
    pub manufacturer: String,
}

/// A single cell of the comparison table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparisonCell {
    pub value: String,
    /// True when this cell's value differs from the original component's
    /// value for the same specification. Always false in column 0.
    pub differs: bool,
}

/// One specification row across all compared components.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparisonRow {
    pub name: String,
    pub cells: Vec<ComparisonCell>,
}

/// A derived, diff-annotated comparison across an original component and its
/// alternatives. Never persisted; recomputed whenever inputs change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparisonTable {
    pub headers: Vec<ComparisonHeader>,
    pub rows: Vec<ComparisonRow>,
}

impl ComparisonTable {
    /// Number of compared components, original included.
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}
