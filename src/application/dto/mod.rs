pub mod bulk_report;
pub mod find_response;

pub use bulk_report::{BulkItem, BulkItemState, BulkResolutionReport};
pub use find_response::FindComponentResponse;
