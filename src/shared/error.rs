use thiserror::Error;

/// Fixed error taxonomy for oracle-backed resolution.
///
/// The kind is decided at the point the failure is classified, never inferred
/// later from message content. Each variant carries an internal diagnostic
/// (the `Display` output, intended for operators and logs); the separate
/// user-facing message comes from [`ClassifiedError::user_message`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Transient failures exhausted all retries.
    Api,
    /// The query had no resolvable match. Terminal, no retry.
    NotFound,
    /// The oracle responded but the content was unusable. Terminal, no retry.
    Parsing,
    /// Upstream file handling problem, passed through unchanged.
    File,
    /// Fallback for unclassified failures.
    Unknown,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ErrorKind::Api => "API_ERROR",
            ErrorKind::NotFound => "NOT_FOUND",
            ErrorKind::Parsing => "PARSING_ERROR",
            ErrorKind::File => "FILE_ERROR",
            ErrorKind::Unknown => "UNKNOWN_ERROR",
        };
        write!(f, "{}", label)
    }
}

/// A classified resolution failure.
#[derive(Debug, Error)]
pub enum ClassifiedError {
    #[error("oracle request failed after {attempts} attempts: {details}")]
    Api { attempts: u32, details: String },

    #[error("no component matched the query \"{query}\"")]
    NotFound { query: String },

    #[error("oracle response could not be used: {details}")]
    Parsing { details: String },

    #[error("file handling failed: {details}")]
    File { details: String },

    #[error("unexpected failure: {details}")]
    Unknown { details: String },
}

impl ClassifiedError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ClassifiedError::Api { .. } => ErrorKind::Api,
            ClassifiedError::NotFound { .. } => ErrorKind::NotFound,
            ClassifiedError::Parsing { .. } => ErrorKind::Parsing,
            ClassifiedError::File { .. } => ErrorKind::File,
            ClassifiedError::Unknown { .. } => ErrorKind::Unknown,
        }
    }

    /// The message suitable for end-user display. Never exposes internal
    /// diagnostics.
    pub fn user_message(&self) -> &'static str {
        match self {
            ClassifiedError::Api { .. } => {
                "The component service is temporarily unavailable. Please try again later."
            }
            ClassifiedError::NotFound { .. } => {
                "No component matched your query. Try refining the part number."
            }
            ClassifiedError::Parsing { .. } => {
                "The service returned an unusable answer. Please retry or rephrase your query."
            }
            ClassifiedError::File { .. } => "The uploaded file could not be processed.",
            ClassifiedError::Unknown { .. } => "Something went wrong. Please try again.",
        }
    }
}
