//! partscout - component resolution and BOM health checks backed by a
//! generative oracle.
//!
//! The crate turns an unreliable free-text oracle into a dependable
//! structured-data pipeline: it extracts JSON payloads from noisy model
//! output, classifies failures into a fixed taxonomy with a retry/backoff
//! policy, repairs garbled text, aligns heterogeneous specification sets
//! into one diff-annotated comparison table, and drives sequential
//! bulk/BOM orchestrations with per-item isolation and observable
//! progress.
//!
//! # Architecture
//!
//! - **Domain layer** (`component_resolution`): records, comparison model
//!   and pure services (text repair, extraction, alignment).
//! - **Ports** (`ports`): trait interfaces for the oracle transport, the
//!   structured oracle capability, progress reporting and formatting.
//! - **Adapters** (`adapters`): reqwest transport, the retrying oracle
//!   client, stderr progress and the Markdown formatter.
//! - **Application layer** (`application`): use cases and DTOs.
//! - **Shared** (`shared`): `Result` alias and the classified error type.
//!
//! # Example
//!
//! ```no_run
//! use partscout::prelude::*;
//!
//! # async fn run() -> Result<()> {
//! let config = OracleConfig::resolve(None)?;
//! let transport = GenerativeTransport::new(&config)?;
//! let oracle = OracleClient::new(transport);
//!
//! let use_case = FindComponentUseCase::new(oracle);
//! let response = use_case.execute("LM317 adjustable regulator").await?;
//!
//! let formatter = MarkdownFormatter::new();
//! println!("{}", formatter.format_comparison(&response.table));
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod component_resolution;
pub mod config;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::formatters::MarkdownFormatter;
    pub use crate::adapters::outbound::network::GenerativeTransport;
    pub use crate::adapters::outbound::oracle::OracleClient;
    pub use crate::application::dto::{
        BulkItem, BulkItemState, BulkResolutionReport, FindComponentResponse,
    };
    pub use crate::application::use_cases::{
        BomHealthCheckUseCase, BulkResolutionUseCase, FindComponentUseCase, DEFAULT_BATCH_SIZE,
    };
    pub use crate::component_resolution::domain::{
        AlternativeRecord, BomHealthRecord, BomPartQuery, ComparisonTable, ComponentRecord,
    };
    pub use crate::component_resolution::services::{
        build_comparison_table, clean_alternative, clean_component, clean_text, extract_json,
        to_safe_url, ExtractError,
    };
    pub use crate::config::OracleConfig;
    pub use crate::ports::outbound::{
        ComponentOracle, OracleTransport, ProgressReporter, ReportFormatter,
    };
    pub use crate::shared::{ClassifiedError, ErrorKind, Result};
}
