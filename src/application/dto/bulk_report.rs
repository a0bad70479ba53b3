use crate::component_resolution::domain::{AlternativeRecord, ComponentRecord};

/// Observable state of one item in a bulk resolution run.
#[derive(Debug, Clone, PartialEq)]
pub enum BulkItemState {
    Pending,
    Loading,
    Success {
        component: ComponentRecord,
        alternatives: Vec<AlternativeRecord>,
    },
    Error {
        /// User-facing message; internal diagnostics go to the log.
        message: String,
    },
}

/// One bulk item: the query it was created from plus its current state.
#[derive(Debug, Clone, PartialEq)]
pub struct BulkItem {
    pub query: String,
    pub state: BulkItemState,
}

/// Final report of a bulk resolution run.
#[derive(Debug, Clone, PartialEq)]
pub struct BulkResolutionReport {
    pub items: Vec<BulkItem>,
    /// Items processed, success or failure. Equals `items.len()` unless the
    /// run was cancelled between iterations.
    pub processed: usize,
}

impl BulkResolutionReport {
    pub fn succeeded(&self) -> usize {
        self.items
            .iter()
            .filter(|item| matches!(item.state, BulkItemState::Success { .. }))
            .count()
    }

    pub fn failed(&self) -> usize {
        self.items
            .iter()
            .filter(|item| matches!(item.state, BulkItemState::Error { .. }))
            .count()
    }
}
