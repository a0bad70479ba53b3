use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::application::dto::{BulkItem, BulkItemState, BulkResolutionReport};
use crate::ports::outbound::{ComponentOracle, ProgressReporter};

/// Callback invoked after every per-item state transition.
pub type BulkUpdateCallback = Box<dyn Fn(usize, &BulkItemState) + Send + Sync>;

/// BulkResolutionUseCase - sequential resolution of many part queries.
///
/// Items are processed strictly one at a time: the oracle is a shared,
/// rate-sensitive dependency, so sequential processing bounds load and
/// keeps retry backoff attributable to a single item. One item's failure
/// never halts the remaining items.
pub struct BulkResolutionUseCase<O: ComponentOracle, P: ProgressReporter> {
    oracle: O,
    progress: P,
    cancel_flag: Option<Arc<AtomicBool>>,
}

impl<O: ComponentOracle, P: ProgressReporter> BulkResolutionUseCase<O, P> {
    pub fn new(oracle: O, progress: P) -> Self {
        Self {
            oracle,
            progress,
            cancel_flag: None,
        }
    }

    /// Installs a cooperative cancellation flag, checked between items
    /// (never mid-call). Remaining items stay `Pending` after cancellation.
    pub fn with_cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel_flag = Some(flag);
        self
    }

    pub async fn run(&self, queries: &[String]) -> BulkResolutionReport {
        self.run_with_updates(queries, Box::new(|_, _| {})).await
    }

    /// Runs the bulk resolution, invoking `on_update` after every item
    /// state transition so a caller can observe progress in flight.
    pub async fn run_with_updates(
        &self,
        queries: &[String],
        on_update: BulkUpdateCallback,
    ) -> BulkResolutionReport {
        let total = queries.len();
        let mut items: Vec<BulkItem> = queries
            .iter()
            .map(|query| BulkItem {
                query: query.clone(),
                state: BulkItemState::Pending,
            })
            .collect();
        let mut processed = 0;

        for index in 0..items.len() {
            if self.is_cancelled() {
                tracing::info!(processed, total, "bulk resolution cancelled");
                break;
            }

            items[index].state = BulkItemState::Loading;
            on_update(index, &items[index].state);

            let query = items[index].query.clone();
            items[index].state = match self.oracle.resolve_component(&query).await {
                Ok(component) => {
                    // Alternatives are best-effort and already absorbed to
                    // an empty list on failure.
                    let alternatives = self.oracle.resolve_alternatives(&component).await;
                    BulkItemState::Success {
                        component,
                        alternatives,
                    }
                }
                Err(error) => {
                    tracing::warn!(query = %query, error = %error, "bulk item failed");
                    self.progress.report_error(error.user_message());
                    BulkItemState::Error {
                        message: error.user_message().to_string(),
                    }
                }
            };
            on_update(index, &items[index].state);

            processed += 1;
            self.progress
                .report_progress(processed, total, Some(query.as_str()));
        }

        self.progress
            .report_completion(&format!("Processed {} of {} parts", processed, total));
        BulkResolutionReport { items, processed }
    }

    fn is_cancelled(&self) -> bool {
        self.cancel_flag
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Relaxed))
    }
}
