use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::adapters::outbound::oracle::prompts;
use crate::component_resolution::domain::{
    AlternativeRecord, BomHealthRecord, BomPartQuery, ComponentRecord, BOM_ERROR_SENTINEL,
};
use crate::component_resolution::services::{clean_alternative, clean_component, extract_json};
use crate::ports::outbound::{ComponentOracle, OracleTransport};
use crate::shared::ClassifiedError;

/// Attempts per operation, first try included.
const MAX_ATTEMPTS: u32 = 3;
/// Backoff between attempts grows linearly: `unit × attempt`.
const BACKOFF_UNIT: Duration = Duration::from_millis(1000);
/// Upper bound on returned alternatives.
const MAX_ALTERNATIVES: usize = 3;

/// OracleClient adapter: turns a raw [`OracleTransport`] into the
/// [`ComponentOracle`] capability.
///
/// Owns the retry/backoff schedule, payload extraction, error
/// classification and text repair, so callers above this adapter never see
/// free oracle text.
pub struct OracleClient<T: OracleTransport> {
    transport: T,
}

/// How a response failed after the transport succeeded. Terminal issues
/// stop the retry loop; transient ones consume an attempt.
enum ResponseIssue {
    Terminal(String),
    Transient(String),
}

impl<T: OracleTransport> OracleClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Extracts and deserializes the structured payload of a raw response.
    ///
    /// Empty text and extraction failures are terminal (the oracle did not
    /// embed usable data); a payload of unexpected shape is transient, like
    /// any other flaky response.
    fn parse_payload<P: DeserializeOwned>(raw: &str) -> Result<P, ResponseIssue> {
        if raw.trim().is_empty() {
            return Err(ResponseIssue::Terminal(
                "oracle returned an empty response".to_string(),
            ));
        }
        let value = extract_json(raw).map_err(|e| ResponseIssue::Terminal(e.to_string()))?;
        serde_json::from_value(value)
            .map_err(|e| ResponseIssue::Transient(format!("payload had an unexpected shape: {e}")))
    }

    async fn backoff(attempt: u32) {
        tokio::time::sleep(BACKOFF_UNIT * attempt).await;
    }
}

#[async_trait]
impl<T: OracleTransport> ComponentOracle for OracleClient<T> {
    async fn resolve_component(&self, query: &str) -> Result<ComponentRecord, ClassifiedError> {
        let prompt = prompts::single_component(query);
        let mut last_error = String::new();

        for attempt in 1..=MAX_ATTEMPTS {
            match self.transport.generate(&prompt).await {
                Ok(raw) => match Self::parse_payload::<ComponentRecord>(&raw) {
                    Ok(record) => {
                        if record.is_missing() {
                            return Err(ClassifiedError::NotFound {
                                query: query.to_string(),
                            });
                        }
                        return Ok(clean_component(record));
                    }
                    Err(ResponseIssue::Terminal(details)) => {
                        return Err(ClassifiedError::Parsing { details });
                    }
                    Err(ResponseIssue::Transient(details)) => last_error = details,
                },
                Err(e) => last_error = format!("{e:#}"),
            }
            if attempt < MAX_ATTEMPTS {
                debug!(attempt, error = %last_error, "component lookup failed, retrying");
                Self::backoff(attempt).await;
            }
        }

        Err(ClassifiedError::Api {
            attempts: MAX_ATTEMPTS,
            details: last_error,
        })
    }

    async fn resolve_alternatives(&self, original: &ComponentRecord) -> Vec<AlternativeRecord> {
        let prompt = prompts::alternatives(original);
        let mut last_error = String::new();

        for attempt in 1..=MAX_ATTEMPTS {
            match self.transport.generate(&prompt).await {
                Ok(raw) => match Self::parse_payload::<Vec<AlternativeRecord>>(&raw) {
                    Ok(list) => {
                        return list
                            .into_iter()
                            .take(MAX_ALTERNATIVES)
                            .map(clean_alternative)
                            .collect();
                    }
                    // Unusable alternatives must never block the original
                    // component, so a parsing failure degrades right away.
                    Err(ResponseIssue::Terminal(details)) => {
                        debug!(part = %original.part_number, details, "alternatives response unusable, returning none");
                        return Vec::new();
                    }
                    Err(ResponseIssue::Transient(details)) => last_error = details,
                },
                Err(e) => last_error = format!("{e:#}"),
            }
            if attempt < MAX_ATTEMPTS {
                Self::backoff(attempt).await;
            }
        }

        warn!(part = %original.part_number, error = %last_error, "alternatives lookup exhausted retries, returning none");
        Vec::new()
    }

    async fn resolve_bom_health(
        &self,
        batch: &[BomPartQuery],
    ) -> Result<Vec<BomHealthRecord>, ClassifiedError> {
        let prompt = prompts::bom_health(batch);
        let mut last_error = String::new();

        for attempt in 1..=MAX_ATTEMPTS {
            match self.transport.generate(&prompt).await {
                Ok(raw) => match Self::parse_payload::<Vec<BomHealthRecord>>(&raw) {
                    // Success passes the oracle's records through without
                    // reconciling order or count against the batch; callers
                    // match by (partNumber, manufacturer).
                    Ok(records) => return Ok(records),
                    Err(ResponseIssue::Terminal(details)) => {
                        last_error = details;
                        break;
                    }
                    Err(ResponseIssue::Transient(details)) => last_error = details,
                },
                Err(e) => last_error = format!("{e:#}"),
            }
            if attempt < MAX_ATTEMPTS {
                Self::backoff(attempt).await;
            }
        }

        warn!(batch_len = batch.len(), error = %last_error, "BOM health batch degraded to sentinel records");
        Ok(batch
            .iter()
            .map(|query| BomHealthRecord::degraded(query, BOM_ERROR_SENTINEL))
            .collect())
    }
}
