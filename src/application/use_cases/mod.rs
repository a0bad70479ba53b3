pub mod bom_health_check;
pub mod bulk_resolution;
pub mod find_component;

pub use bom_health_check::{
    BomHealthCheckUseCase, BomSnapshotCallback, BOM_API_ERROR_SENTINEL, DEFAULT_BATCH_SIZE,
};
pub use bulk_resolution::{BulkResolutionUseCase, BulkUpdateCallback};
pub use find_component::FindComponentUseCase;
