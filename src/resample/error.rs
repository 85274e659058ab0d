use crate::record::RecordError;

/// Errors that can occur while resampling or integrating a spectrum
#[derive(Debug, thiserror::Error)]
pub enum ResampleError {
    /// Input unsuitable for the requested operation
    #[error("Validation error: {0}")]
    Validation(String),

    /// Reading the underlying record failed
    #[error("Record error: {0}")]
    Record(#[from] RecordError),
}
