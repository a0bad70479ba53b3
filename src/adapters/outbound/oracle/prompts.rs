//! Prompt builders for the three oracle request shapes.
//!
//! Each prompt pins down the exact JSON field schema and the sentinel
//! population rules, so the extractor has a fighting chance even when the
//! model wraps the payload in prose.

use crate::component_resolution::domain::{BomPartQuery, ComponentRecord};

const COMPONENT_SCHEMA: &str = "a JSON object with exactly these string fields: \
\"partNumber\", \"manufacturer\", \"description\", \"price\", \"datasheetLink\", \
\"partStatus\", \"rohsStatus\", \"reachStatus\", and a \"specs\" array of \
\"Key: Value\" strings. Populate any unknown field with \"N/A\"; never omit a field.";

pub fn single_component(query: &str) -> String {
    format!(
        "You are an electronic component database assistant. Find the single \
         best matching component for this query:\n\n{query}\n\n\
         Respond with ONLY {COMPONENT_SCHEMA} \
         If no component matches, set \"partNumber\" to \"Not Found\". \
         Do not add prose or code fences."
    )
}

pub fn alternatives(original: &ComponentRecord) -> String {
    format!(
        "You are an electronic component cross-reference assistant. Suggest up \
         to 3 drop-in alternatives for the component below.\n\n\
         Part number: {part}\nManufacturer: {manufacturer}\n\
         Key specifications: {specs}\n\n\
         Respond with ONLY a JSON array of at most 3 objects. Each object is \
         {COMPONENT_SCHEMA} Each object additionally carries a string field \
         \"justification\" explaining why it is a suitable substitute. \
         Respond with an empty JSON array if there is no suitable alternative.",
        part = original.part_number,
        manufacturer = original.manufacturer,
        specs = original.specs.join("; "),
    )
}

pub fn bom_health(batch: &[BomPartQuery]) -> String {
    let lines: Vec<String> = batch
        .iter()
        .map(|q| format!("- manufacturer: {}, partNumber: {}", q.manufacturer, q.part_number))
        .collect();
    format!(
        "You are an electronic component supply-chain assistant. Report the \
         current lifecycle and stock health for each of these parts:\n\n{}\n\n\
         Respond with ONLY a JSON array containing one object per part, each \
         with exactly these string fields: \"partNumber\", \"manufacturer\", \
         \"lifecycleStatus\", \"stockAvailability\", \"leadTime\". Populate \
         any unknown field with \"N/A\"; never omit a field. Do not add prose \
         or code fences.",
        lines.join("\n"),
    )
}
