use crate::component_resolution::domain::{
    AlternativeRecord, ComparisonTable, ComponentRecord,
};

/// Result of the single-item find flow: the resolved component, its
/// best-effort alternatives and the derived comparison table.
#[derive(Debug, Clone, PartialEq)]
pub struct FindComponentResponse {
    pub component: ComponentRecord,
    pub alternatives: Vec<AlternativeRecord>,
    pub table: ComparisonTable,
}
