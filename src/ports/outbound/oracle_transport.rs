use crate::shared::Result;
use async_trait::async_trait;

/// OracleTransport port: the raw generative text boundary.
///
/// One prompt in, free text out. The text is expected (but not guaranteed)
/// to contain a JSON payload; extraction and classification happen above
/// this seam, which keeps the retry policy testable against scripted stubs.
///
/// # Errors
/// Implementations fail on network problems, non-success status codes and
/// responses with no usable text. All such failures are treated as
/// transient by the oracle client.
#[async_trait]
pub trait OracleTransport: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String>;
}
