//! Master ordering policy for comparison table rows.

/// Curated specification order: identity fields first, then common
/// electrical parameters, then physical and environmental ones. Names not
/// on this list sort after all listed names, alphabetically.
pub const MASTER_SPEC_ORDER: &[&str] = &[
    "Part Number",
    "Manufacturer",
    "Description",
    "Price",
    "Datasheet Link",
    "Part Status",
    "RoHS Status",
    "REACH Status",
    "Resistance",
    "Capacitance",
    "Inductance",
    "Tolerance",
    "Voltage Rating",
    "Voltage - Rated",
    "Current Rating",
    "Power Rating",
    "Power Dissipation",
    "Frequency",
    "Temperature Coefficient",
    "Operating Temperature",
    "Operating Temperature Range",
    "Package / Case",
    "Package",
    "Mounting Type",
    "Size / Dimension",
    "Height",
];

/// Position of a specification name in the master order, if listed.
/// Matching is case-insensitive because oracle casing varies.
pub fn rank(name: &str) -> Option<usize> {
    MASTER_SPEC_ORDER
        .iter()
        .position(|candidate| candidate.eq_ignore_ascii_case(name))
}
