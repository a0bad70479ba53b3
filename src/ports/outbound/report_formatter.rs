use crate::component_resolution::domain::{BomHealthRecord, ComparisonTable};

/// ReportFormatter port for rendering core results into a textual surface
/// the caller (CLI, spreadsheet exporter) can present or serialize.
pub trait ReportFormatter {
    fn format_comparison(&self, table: &ComparisonTable) -> String;

    fn format_bom_health(&self, records: &[BomHealthRecord]) -> String;
}
