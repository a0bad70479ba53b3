pub mod bom;
pub mod comparison;
pub mod component;

pub use bom::{BomHealthRecord, BomPartQuery, BOM_ERROR_SENTINEL};
pub use comparison::{ComparisonCell, ComparisonHeader, ComparisonRow, ComparisonTable};
pub use component::{AlternativeRecord, ComponentRecord};
