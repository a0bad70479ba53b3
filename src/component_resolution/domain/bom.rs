use serde::{Deserialize, Serialize};

/// Status sentinel written into degraded BOM health records when a batch
/// lookup fails inside the oracle client.
pub const BOM_ERROR_SENTINEL: &str = "Error";

/// An input key for a BOM health lookup. Not a result.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BomPartQuery {
    pub part_number: String,
    pub manufacturer: String,
}

impl BomPartQuery {
    pub fn new(part_number: impl Into<String>, manufacturer: impl Into<String>) -> Self {
        Self {
            part_number: part_number.into(),
            manufacturer: manufacturer.into(),
        }
    }
}

/// Lifecycle and stock health for one BOM line.
///
/// One record is expected per input query, but the oracle does not guarantee
/// order or count on success; callers reconcile by
/// `(part_number, manufacturer)` rather than by position.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BomHealthRecord {
    pub part_number: String,
    pub manufacturer: String,
    pub lifecycle_status: String,
    pub stock_availability: String,
    pub lead_time: String,
}

impl BomHealthRecord {
    /// Builds a degraded record echoing the input key with all three status
    /// fields set to the given sentinel. Guarantees output length can match
    /// input length on failure paths.
    pub fn degraded(query: &BomPartQuery, sentinel: &str) -> Self {
        Self {
            part_number: query.part_number.clone(),
            manufacturer: query.manufacturer.clone(),
            lifecycle_status: sentinel.to_string(),
            stock_availability: sentinel.to_string(),
            lead_time: sentinel.to_string(),
        }
    }
}
