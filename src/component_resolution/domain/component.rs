use serde::{Deserialize, Serialize};

/// A resolved electronic component as reported by the oracle.
///
/// Every field is always present as a string; the oracle contract populates
/// unknown fields with `"N/A"` or `"Not Found"` sentinels rather than
/// omitting them. `#[serde(default)]` backstops responses that break that
/// contract so deserialization never fails on a missing field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ComponentRecord {
    pub part_number: String,
    pub manufacturer: String,
    pub description: String,
    /// Free-form display string, never parsed numerically.
    pub price: String,
    /// Raw string; normalized to a URL only at presentation time.
    pub datasheet_link: String,
    /// Free-form "Key: Value" entries.
    pub specs: Vec<String>,
    pub part_status: String,
    pub rohs_status: String,
    pub reach_status: String,
}

impl ComponentRecord {
    /// True when the part number signals "no match": empty or one of the
    /// oracle's not-found sentinels.
    pub fn is_missing(&self) -> bool {
        let trimmed = self.part_number.trim();
        trimmed.is_empty()
            || trimmed.eq_ignore_ascii_case("n/a")
            || trimmed.eq_ignore_ascii_case("not found")
    }
}

/// A drop-in alternative: a component plus the oracle's rationale for
/// suggesting it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AlternativeRecord {
    #[serde(flatten)]
    pub component: ComponentRecord,
    pub justification: String,
}
