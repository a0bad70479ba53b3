/// Outbound ports (driven ports) - interfaces the application core uses to
/// reach external systems (generative oracle, console, formatters).
pub mod component_oracle;
pub mod oracle_transport;
pub mod progress_reporter;
pub mod report_formatter;

pub use component_oracle::ComponentOracle;
pub use oracle_transport::OracleTransport;
pub use progress_reporter::ProgressReporter;
pub use report_formatter::ReportFormatter;
