use thiserror::Error;

/// Convenience result type for fallible transformations and option loading.
pub type TransformResult<T> = Result<T, TransformError>;

/// Error type returned by the strict transformation variants and by option loading.
///
/// The lenient operations ([`crate::processing::strings_to_integers`] and friends) never return
/// this type; they substitute `0` instead.
#[derive(Debug, Error)]
pub enum TransformError {
    /// A value was not a complete base-10 integer (strict mode only).
    #[error("failed to parse integer at index {index}: {message} (raw='{raw}')")]
    Parse {
        index: usize,
        raw: String,
        message: String,
    },

    /// Options JSON could not be deserialized.
    #[error("invalid transform options: {0}")]
    Options(#[from] serde_json::Error),

    /// Options deserialized but are not usable.
    #[error("invalid transform options: {message}")]
    InvalidOptions { message: String },
}
