//! Integration tests driving the full stack (use case → oracle client →
//! transport) against scripted oracle responses.

mod test_utilities;

use partscout::prelude::*;
use test_utilities::mocks::{RecordingProgress, ScriptedTransport, Step};

fn component_json(part: &str, resistance: &str) -> String {
    format!(
        r#"Sure, here is the component:
        {{"partNumber": "{part}", "manufacturer": "Yageo",
          "description": "Thick film resistor", "price": "$0.10",
          "datasheetLink": "www.yageo.com/{part}.pdf",
          "specs": ["Resistance: {resistance}", "Tolerance: 1%"],
          "partStatus": "Active", "rohsStatus": "Compliant",
          "reachStatus": "Compliant"}}"#
    )
}

fn alternatives_json() -> String {
    r#"```json
    [{"partNumber": "CRCW060312K0FKEA", "manufacturer": "Vishay",
      "description": "Thick film resistor", "price": "$0.12",
      "datasheetLink": "N/A",
      "specs": ["Resistance: 12k", "Tolerance: 1%"],
      "partStatus": "Active", "rohsStatus": "Compliant",
      "reachStatus": "Compliant",
      "justification": "Same footprint and tolerance class"}]
    ```"#
        .to_string()
}

#[tokio::test]
async fn test_find_flow_produces_diff_annotated_table() {
    let transport = ScriptedTransport::new(vec![
        Step::Text(component_json("RC0603FR-0710KL", "10k")),
        Step::Text(alternatives_json()),
    ]);
    let oracle = OracleClient::new(transport);
    let use_case = FindComponentUseCase::new(oracle);

    let response = use_case.execute("10k 0603 resistor").await.unwrap();

    assert_eq!(response.component.part_number, "RC0603FR-0710KL");
    assert_eq!(response.alternatives.len(), 1);
    assert_eq!(response.table.column_count(), 2);

    let resistance = response
        .table
        .rows
        .iter()
        .find(|row| row.name == "Resistance")
        .unwrap();
    assert_eq!(resistance.cells[0].value, "10k");
    assert!(!resistance.cells[0].differs);
    assert_eq!(resistance.cells[1].value, "12k");
    assert!(resistance.cells[1].differs);

    let tolerance = response
        .table
        .rows
        .iter()
        .find(|row| row.name == "Tolerance")
        .unwrap();
    assert!(!tolerance.cells[1].differs);
}

#[tokio::test(start_paused = true)]
async fn test_bulk_flow_isolates_failures_and_reports_progress() {
    let transport = ScriptedTransport::new(vec![
        Step::Text(component_json("R1", "10k")),
        Step::Text(alternatives_json()),
        Step::text(r#"{"partNumber": "Not Found"}"#),
        Step::failure("503 service unavailable"),
        Step::Text(component_json("R3", "47k")),
        Step::text("[]"),
    ]);
    let oracle = OracleClient::new(transport);
    let progress = RecordingProgress::new();
    let use_case = BulkResolutionUseCase::new(oracle, progress.clone());

    let queries = vec!["R1".to_string(), "bad".to_string(), "R3".to_string()];
    let report = use_case.run(&queries).await;

    assert_eq!(report.processed, 3);
    assert!(matches!(report.items[0].state, BulkItemState::Success { .. }));
    assert!(matches!(report.items[1].state, BulkItemState::Error { .. }));
    assert!(matches!(report.items[2].state, BulkItemState::Success { .. }));

    assert_eq!(progress.progress_updates(), vec![(1, 3), (2, 3), (3, 3)]);
    assert_eq!(progress.errors().len(), 1);
    assert_eq!(progress.completions().len(), 1);
}

#[tokio::test]
async fn test_bom_flow_mixes_healthy_and_degraded_batches() {
    let transport = ScriptedTransport::new(vec![
        Step::text(
            r#"[{"partNumber": "P1", "manufacturer": "M1",
                 "lifecycleStatus": "Active", "stockAvailability": "In Stock",
                 "leadTime": "4 weeks"},
                {"partNumber": "P2", "manufacturer": "M2",
                 "lifecycleStatus": "NRND", "stockAvailability": "Low",
                 "leadTime": "20 weeks"}]"#,
        ),
        Step::text("the model rambled and returned nothing structured"),
    ]);
    let oracle = OracleClient::new(transport);
    let use_case = BomHealthCheckUseCase::new(oracle, RecordingProgress::new()).with_batch_size(2);

    let queries = vec![
        BomPartQuery::new("P1", "M1"),
        BomPartQuery::new("P2", "M2"),
        BomPartQuery::new("P3", "M3"),
    ];
    let records = use_case.run(&queries).await;

    assert_eq!(records.len(), 3);
    assert_eq!(records[0].lifecycle_status, "Active");
    assert_eq!(records[1].lifecycle_status, "NRND");
    // Second batch degraded, echoing the query key.
    assert_eq!(records[2].part_number, "P3");
    assert_eq!(records[2].manufacturer, "M3");
    assert_eq!(records[2].lifecycle_status, "Error");
}

#[tokio::test]
async fn test_find_flow_survives_unusable_alternatives() {
    let transport = ScriptedTransport::new(vec![
        Step::Text(component_json("RC0603FR-0710KL", "10k")),
        Step::text("I could not come up with any alternatives, sorry."),
    ]);
    let oracle = OracleClient::new(transport);
    let use_case = FindComponentUseCase::new(oracle);

    let response = use_case.execute("10k 0603 resistor").await.unwrap();
    assert!(response.alternatives.is_empty());
    assert_eq!(response.table.column_count(), 1);
}
