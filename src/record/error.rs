use crate::codec::DecodeError;

/// Errors that can occur while assigning or reading cross-section data
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    /// Malformed caller input (missing arrays, length mismatch, missing bounds)
    #[error("Validation error: {0}")]
    Validation(String),

    /// A stored blob could not be unpacked
    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),

    /// Packing the arrays failed
    #[error("Compression error: {0}")]
    Compression(#[from] std::io::Error),

    /// The query window holds no stored points
    #[error("No data points in range [{numin}, {numax}]")]
    NotFound {
        /// Lower bound of the query window
        numin: f64,
        /// Upper bound of the query window
        numax: f64,
    },

    /// JSON serialization/deserialization error
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
