use crate::component_resolution::domain::{
    AlternativeRecord, BomHealthRecord, BomPartQuery, ComponentRecord,
};
use crate::shared::ClassifiedError;
use async_trait::async_trait;

/// ComponentOracle port: the structured component-data capability consumed
/// by the use cases.
///
/// Implementations own retry, backoff and error classification; callers see
/// typed records or a [`ClassifiedError`], never raw oracle text.
#[async_trait]
pub trait ComponentOracle: Send + Sync {
    /// Resolves a single component for a free-text query.
    ///
    /// # Errors
    /// - `NotFound` when the oracle reports no match (terminal).
    /// - `Parsing` when the response carried no usable payload (terminal).
    /// - `Api` when transient failures exhausted all retries.
    async fn resolve_component(&self, query: &str) -> Result<ComponentRecord, ClassifiedError>;

    /// Finds up to three drop-in alternatives for a resolved component.
    ///
    /// Best-effort by contract: every failure mode degrades to an empty
    /// sequence (logged, not raised) so alternatives can never block
    /// display of the original component.
    async fn resolve_alternatives(&self, original: &ComponentRecord) -> Vec<AlternativeRecord>;

    /// Looks up lifecycle and stock health for one batch of BOM lines.
    ///
    /// On any failure the implementation degrades to one sentinel record
    /// per input query, so `Err` is reserved for implementations without
    /// their own degradation path; the BOM orchestrator catches it as a
    /// last resort.
    async fn resolve_bom_health(
        &self,
        batch: &[BomPartQuery],
    ) -> Result<Vec<BomHealthRecord>, ClassifiedError>;
}
