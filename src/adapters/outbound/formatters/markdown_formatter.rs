use crate::component_resolution::domain::{BomHealthRecord, ComparisonTable};
use crate::component_resolution::services::to_safe_url;
use crate::ports::outbound::ReportFormatter;

/// Markdown table header for BOM health reports.
const BOM_TABLE_HEADER: &str =
    "| Part Number | Manufacturer | Lifecycle Status | Stock Availability | Lead Time |\n";

/// Markdown table separator line for BOM health reports.
const BOM_TABLE_SEPARATOR: &str =
    "|-------------|--------------|------------------|--------------------|-----------|\n";

/// MarkdownFormatter adapter rendering comparison tables and BOM health
/// reports as Markdown. Cells that differ from the original component are
/// emphasized with bold.
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering.
    fn escape_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    /// Renders the datasheet row's value as a link when it can be made safe.
    fn linkify(value: &str) -> String {
        let url = to_safe_url(value);
        if url.is_empty() {
            Self::escape_cell(value)
        } else {
            format!("[{}]({})", Self::escape_cell(value), url)
        }
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for MarkdownFormatter {
    fn format_comparison(&self, table: &ComparisonTable) -> String {
        let mut output = String::from("| Specification |");
        for header in &table.headers {
            output.push_str(&format!(
                " {} ({}) |",
                Self::escape_cell(&header.part_number),
                Self::escape_cell(&header.manufacturer)
            ));
        }
        output.push('\n');

        output.push_str("|---|");
        for _ in &table.headers {
            output.push_str("---|");
        }
        output.push('\n');

        for row in &table.rows {
            output.push_str(&format!("| {} |", Self::escape_cell(&row.name)));
            for cell in &row.cells {
                let rendered = if row.name == "Datasheet Link" {
                    Self::linkify(&cell.value)
                } else {
                    Self::escape_cell(&cell.value)
                };
                if cell.differs {
                    output.push_str(&format!(" **{}** |", rendered));
                } else {
                    output.push_str(&format!(" {} |", rendered));
                }
            }
            output.push('\n');
        }

        output
    }

    fn format_bom_health(&self, records: &[BomHealthRecord]) -> String {
        let mut output = String::from(BOM_TABLE_HEADER);
        output.push_str(BOM_TABLE_SEPARATOR);
        for record in records {
            output.push_str(&format!(
                "| {} | {} | {} | {} | {} |\n",
                Self::escape_cell(&record.part_number),
                Self::escape_cell(&record.manufacturer),
                Self::escape_cell(&record.lifecycle_status),
                Self::escape_cell(&record.stock_availability),
                Self::escape_cell(&record.lead_time),
            ));
        }
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component_resolution::domain::{
        BomPartQuery, ComparisonCell, ComparisonHeader, ComparisonRow,
    };

    fn sample_table() -> ComparisonTable {
        ComparisonTable {
            headers: vec![
                ComparisonHeader {
                    part_number: "R1".to_string(),
                    manufacturer: "Yageo".to_string(),
                },
                ComparisonHeader {
                    part_number: "R2".to_string(),
                    manufacturer: "Vishay".to_string(),
                },
            ],
            rows: vec![ComparisonRow {
                name: "Resistance".to_string(),
                cells: vec![
                    ComparisonCell {
                        value: "10k".to_string(),
                        differs: false,
                    },
                    ComparisonCell {
                        value: "12k".to_string(),
                        differs: true,
                    },
                ],
            }],
        }
    }

    #[test]
    fn test_comparison_marks_differing_cells_bold() {
        let output = MarkdownFormatter::new().format_comparison(&sample_table());
        assert!(output.contains("| Resistance | 10k | **12k** |"));
        assert!(output.contains("R1 (Yageo)"));
        assert!(output.contains("R2 (Vishay)"));
    }

    #[test]
    fn test_comparison_escapes_pipes() {
        let mut table = sample_table();
        table.rows[0].cells[0].value = "10k|5%".to_string();
        let output = MarkdownFormatter::new().format_comparison(&table);
        assert!(output.contains("10k\\|5%"));
    }

    #[test]
    fn test_datasheet_row_is_linkified() {
        let table = ComparisonTable {
            headers: vec![ComparisonHeader {
                part_number: "R1".to_string(),
                manufacturer: "Yageo".to_string(),
            }],
            rows: vec![ComparisonRow {
                name: "Datasheet Link".to_string(),
                cells: vec![ComparisonCell {
                    value: "www.yageo.com/rc0603.pdf".to_string(),
                    differs: false,
                }],
            }],
        };
        let output = MarkdownFormatter::new().format_comparison(&table);
        assert!(output.contains("[www.yageo.com/rc0603.pdf](https://www.yageo.com/rc0603.pdf)"));
    }

    #[test]
    fn test_bom_health_renders_one_row_per_record() {
        let records = vec![
            BomHealthRecord {
                part_number: "P1".to_string(),
                manufacturer: "M1".to_string(),
                lifecycle_status: "Active".to_string(),
                stock_availability: "In Stock".to_string(),
                lead_time: "6 weeks".to_string(),
            },
            BomHealthRecord::degraded(&BomPartQuery::new("P2", "M2"), "Error"),
        ];
        let output = MarkdownFormatter::new().format_bom_health(&records);
        assert!(output.contains("| P1 | M1 | Active | In Stock | 6 weeks |"));
        assert!(output.contains("| P2 | M2 | Error | Error | Error |"));
    }
}
