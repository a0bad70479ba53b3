use crate::component_resolution::domain::{BomHealthRecord, BomPartQuery};
use crate::ports::outbound::{ComponentOracle, ProgressReporter};

/// Reference batch size for BOM health lookups.
pub const DEFAULT_BATCH_SIZE: usize = 5;

/// Status sentinel for the orchestrator-level safety net: written when a
/// batch error escapes the oracle's own degradation path.
pub const BOM_API_ERROR_SENTINEL: &str = "API Error";

/// Callback invoked after every batch with the accumulated results so far.
/// Snapshots grow monotonically.
pub type BomSnapshotCallback = Box<dyn Fn(&[BomHealthRecord], usize, usize) + Send + Sync>;

/// BomHealthCheckUseCase - batched lifecycle/stock lookups over a BOM.
///
/// Partitions the queries into fixed-size batches and processes them
/// strictly sequentially, publishing accumulated results after every batch.
pub struct BomHealthCheckUseCase<O: ComponentOracle, P: ProgressReporter> {
    oracle: O,
    progress: P,
    batch_size: usize,
}

impl<O: ComponentOracle, P: ProgressReporter> BomHealthCheckUseCase<O, P> {
    pub fn new(oracle: O, progress: P) -> Self {
        Self {
            oracle,
            progress,
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }

    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size.max(1);
        self
    }

    pub async fn run(&self, queries: &[BomPartQuery]) -> Vec<BomHealthRecord> {
        self.run_with_snapshots(queries, Box::new(|_, _, _| {}))
            .await
    }

    /// Runs the health check, invoking `on_snapshot` with the accumulated
    /// results, the clamped progress counter and the total after each batch.
    pub async fn run_with_snapshots(
        &self,
        queries: &[BomPartQuery],
        on_snapshot: BomSnapshotCallback,
    ) -> Vec<BomHealthRecord> {
        let total = queries.len();
        let mut results: Vec<BomHealthRecord> = Vec::with_capacity(total);
        let mut progressed = 0;

        for batch in queries.chunks(self.batch_size) {
            match self.oracle.resolve_bom_health(batch).await {
                // Success records or the oracle's own length-matched
                // degraded records.
                Ok(records) => results.extend(records),
                // Last-resort safety net: keep the length guarantee even
                // when the oracle implementation raised instead of
                // degrading.
                Err(error) => {
                    tracing::warn!(batch_len = batch.len(), error = %error, "BOM batch escaped oracle degradation");
                    results.extend(
                        batch
                            .iter()
                            .map(|query| BomHealthRecord::degraded(query, BOM_API_ERROR_SENTINEL)),
                    );
                }
            }

            progressed = (progressed + self.batch_size).min(total);
            on_snapshot(&results, progressed, total);
            self.progress
                .report_progress(progressed, total, Some("Checking BOM health"));
        }

        self.progress
            .report_completion(&format!("Checked {} parts", total));
        results
    }
}
