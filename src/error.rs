use thiserror::Error;

/// Errors raised by the dynamic conversion entry points.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CaseError {
    /// The value handed to a converter was not a string (or was null).
    #[error("Input must be a non-null string")]
    InvalidInput,
}
