use crate::application::dto::FindComponentResponse;
use crate::component_resolution::services::build_comparison_table;
use crate::ports::outbound::ComponentOracle;
use crate::shared::ClassifiedError;

/// FindComponentUseCase - the single-item flow.
///
/// Resolves the component, fetches best-effort alternatives (which can
/// never fail the flow) and derives the comparison table.
pub struct FindComponentUseCase<O: ComponentOracle> {
    oracle: O,
}

impl<O: ComponentOracle> FindComponentUseCase<O> {
    pub fn new(oracle: O) -> Self {
        Self { oracle }
    }

    /// # Errors
    /// Propagates the classified failure of the component resolution.
    /// Alternatives failures are absorbed by the oracle and surface as an
    /// empty list.
    pub async fn execute(&self, query: &str) -> Result<FindComponentResponse, ClassifiedError> {
        let component = self.oracle.resolve_component(query).await?;
        let alternatives = self.oracle.resolve_alternatives(&component).await;
        let table = build_comparison_table(&component, &alternatives);
        Ok(FindComponentResponse {
            component,
            alternatives,
            table,
        })
    }
}
