use thiserror::Error;

/// Convenience result type used across the crate.
pub type ListingResult<T> = Result<T, ListingError>;

/// Error type returned by loading, parameter parsing and configuration.
///
/// Malformed numeric fields inside an already-loaded record are never reported through this type:
/// the transformation and report layers skip them and emit a `log` warning instead.
#[derive(Debug, Error)]
pub enum ListingError {
    /// Underlying I/O error (e.g. file not found, permission denied).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV decoding error.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON decoding or encoding error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// The input does not have the expected overall shape.
    #[error("schema mismatch: {message}")]
    SchemaMismatch { message: String },

    /// A loaded record violates the record invariants (e.g. an empty city).
    #[error("invalid record at row {row} column '{column}': {message} (raw='{raw}')")]
    InvalidRecord {
        row: usize,
        column: String,
        raw: String,
        message: String,
    },

    /// A caller-supplied parameter (menu input, configuration value) was rejected.
    #[error("invalid parameter '{name}': {message} (raw='{raw}')")]
    InvalidParameter {
        name: String,
        raw: String,
        message: String,
    },
}

impl ListingError {
    pub(crate) fn invalid_parameter(
        name: impl Into<String>,
        raw: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            raw: raw.into(),
            message: message.into(),
        }
    }
}
