//! Domain layer: component records, comparison model and the pure services
//! that operate on them.

pub mod domain;
pub mod policies;
pub mod services;
