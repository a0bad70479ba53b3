//! Merges heterogeneous attribute sets into one canonical comparison table.

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::component_resolution::domain::comparison::MISSING_VALUE;
use crate::component_resolution::domain::{
    AlternativeRecord, ComparisonCell, ComparisonHeader, ComparisonRow, ComparisonTable,
    ComponentRecord,
};
use crate::component_resolution::policies::spec_priority;

/// Builds the diff-annotated comparison table for an original component and
/// its alternatives.
///
/// The table always has `1 + alternatives.len()` columns (original first)
/// and one row per distinct specification name seen across all components.
/// Purely derived; caches nothing across calls.
pub fn build_comparison_table(
    original: &ComponentRecord,
    alternatives: &[AlternativeRecord],
) -> ComparisonTable {
    let mut headers = vec![header_for(original)];
    let mut attribute_maps = vec![attribute_map(original)];
    for alternative in alternatives {
        headers.push(header_for(&alternative.component));
        attribute_maps.push(attribute_map(&alternative.component));
    }

    let mut names: Vec<String> = Vec::new();
    for map in &attribute_maps {
        for name in map.keys() {
            if !names.iter().any(|seen| seen == name) {
                names.push(name.clone());
            }
        }
    }
    names.sort_by(|a, b| compare_spec_names(a, b));

    let rows = names
        .into_iter()
        .map(|name| {
            let baseline = attribute_maps[0]
                .get(&name)
                .map(String::as_str)
                .unwrap_or(MISSING_VALUE);
            let cells = attribute_maps
                .iter()
                .enumerate()
                .map(|(column, map)| {
                    let value = map.get(&name).map(String::as_str).unwrap_or(MISSING_VALUE);
                    ComparisonCell {
                        value: value.to_string(),
                        differs: column != 0 && value != baseline,
                    }
                })
                .collect();
            ComparisonRow { name, cells }
        })
        .collect();

    ComparisonTable { headers, rows }
}

fn header_for(component: &ComponentRecord) -> ComparisonHeader {
    ComparisonHeader {
        part_number: component.part_number.clone(),
        manufacturer: component.manufacturer.clone(),
    }
}

/// Per-component specification map: fixed identity keys seeded first, then
/// the free-form "Key: Value" entries split on the first colon. Entries
/// without a colon are skipped.
fn attribute_map(component: &ComponentRecord) -> HashMap<String, String> {
    let mut map = HashMap::new();
    map.insert("Part Number".to_string(), component.part_number.clone());
    map.insert("Manufacturer".to_string(), component.manufacturer.clone());
    map.insert("Price".to_string(), component.price.clone());
    map.insert("Datasheet Link".to_string(), component.datasheet_link.clone());
    map.insert("Part Status".to_string(), component.part_status.clone());
    map.insert("RoHS Status".to_string(), component.rohs_status.clone());
    map.insert("REACH Status".to_string(), component.reach_status.clone());

    for entry in &component.specs {
        if let Some((key, value)) = entry.split_once(':') {
            map.insert(key.trim().to_string(), value.trim().to_string());
        }
    }
    map
}

/// Master-list names sort by list position; unlisted names sort after all
/// listed ones, alphabetically among themselves.
fn compare_spec_names(a: &str, b: &str) -> Ordering {
    match (spec_priority::rank(a), spec_priority::rank(b)) {
        (Some(left), Some(right)) => left.cmp(&right),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}
