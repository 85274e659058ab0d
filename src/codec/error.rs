/// Errors that can occur while unpacking a spectral blob
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The compressed buffer holds no bytes at all
    #[error("Cannot decode an empty buffer")]
    EmptyBuffer,

    /// The buffer is not a valid zlib stream
    #[error("Decompression error: {0}")]
    Decompression(#[from] std::io::Error),

    /// The decompressed payload does not match the declared shape
    #[error("Invalid data length: expected {expected}, got {actual}")]
    InvalidLength {
        /// Expected count (bytes when misaligned, elements otherwise)
        expected: usize,
        /// Actual count found in the payload
        actual: usize,
    },
}
