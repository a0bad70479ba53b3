/// Type alias for Result with anyhow::Error as the error type.
/// Used at adapter and configuration seams where errors are not yet classified.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
