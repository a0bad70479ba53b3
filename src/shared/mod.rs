pub mod error;
pub mod result;

pub use error::{ClassifiedError, ErrorKind};
pub use result::Result;
