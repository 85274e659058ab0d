//! Spectral blob packing and unpacking
//!
//! Cross-section arrays are stored as compressed binary blobs. The pipeline is:
//!
//! 1. Serialize every value as a native-endian IEEE-754 float of the declared
//!    width (64-bit for wavenumbers, 32-bit for absorption)
//! 2. Compress the concatenated bytes with zlib
//!
//! Decoding reverses both steps. Wavenumbers need the full 64-bit precision
//! because offsets and resolutions span many orders of magnitude; absorption
//! values are narrowed to 32-bit, which halves the storage size at a relative
//! error below 5e-6.
//!
//! The codec keeps no state between calls. Every [`BlobCodec::decode`]
//! decompresses again.

mod error;

use std::io::{Cursor, Read, Write};

use byteorder::{NativeEndian, ReadBytesExt, WriteBytesExt};
use flate2::read::ZlibDecoder;
use flate2::write::ZlibEncoder;
use flate2::Compression;
use serde::{Deserialize, Serialize};

pub use error::DecodeError;

/// Width of the IEEE-754 values packed into a blob
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementWidth {
    /// 32-bit floating point (absorption arrays)
    Float32,
    /// 64-bit floating point (wavenumber arrays)
    Float64,
}

impl ElementWidth {
    /// Get the byte size per value
    pub fn byte_size(&self) -> usize {
        match self {
            ElementWidth::Float32 => 4,
            ElementWidth::Float64 => 8,
        }
    }
}

/// Codec configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    /// zlib compression level (0-9)
    pub compression_level: u32,
}

impl Default for CodecConfig {
    fn default() -> Self {
        // Level 6 is the zlib default, so blobs match what other zlib writers emit
        Self {
            compression_level: 6,
        }
    }
}

impl CodecConfig {
    /// Maximum compression (slower packing, smallest blobs)
    pub fn max_compression() -> Self {
        Self {
            compression_level: 9,
        }
    }

    /// Fast packing (larger blobs)
    pub fn fast() -> Self {
        Self {
            compression_level: 1,
        }
    }
}

/// An immutable compressed numeric array
///
/// A blob remembers the width it was packed with and how many elements it
/// holds, so decoding can verify the payload shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpectralBlob {
    bytes: Vec<u8>,
    width: ElementWidth,
    len: usize,
}

impl SpectralBlob {
    /// Rebuild a blob from bytes previously produced by [`BlobCodec::encode`]
    ///
    /// `len` is the declared element count; it is checked on every decode.
    pub fn from_compressed(bytes: Vec<u8>, width: ElementWidth, len: usize) -> Self {
        Self { bytes, width, len }
    }

    /// The compressed bytes, as persisted
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consume the blob and return the compressed bytes
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Declared element width
    pub fn width(&self) -> ElementWidth {
        self.width
    }

    /// Declared element count
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the blob declares no elements
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Size of the compressed payload in bytes
    pub fn compressed_size(&self) -> usize {
        self.bytes.len()
    }

    /// Ratio of raw to compressed size
    pub fn compression_ratio(&self) -> f64 {
        if self.bytes.is_empty() {
            return 0.0;
        }
        (self.len * self.width.byte_size()) as f64 / self.bytes.len() as f64
    }
}

/// Packs and unpacks numeric arrays to and from [`SpectralBlob`]s
#[derive(Debug, Clone, Copy, Default)]
pub struct BlobCodec {
    config: CodecConfig,
}

impl BlobCodec {
    /// Create a codec with the given configuration
    pub fn new(config: CodecConfig) -> Self {
        Self { config }
    }

    /// The configuration this codec was built with
    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Pack `values` at the given width and compress them
    ///
    /// With [`ElementWidth::Float32`] every value is narrowed to `f32` first.
    pub fn encode(&self, values: &[f64], width: ElementWidth) -> std::io::Result<SpectralBlob> {
        let mut raw = Vec::with_capacity(values.len() * width.byte_size());
        match width {
            ElementWidth::Float32 => {
                for &v in values {
                    raw.write_f32::<NativeEndian>(v as f32)?;
                }
            }
            ElementWidth::Float64 => {
                for &v in values {
                    raw.write_f64::<NativeEndian>(v)?;
                }
            }
        }

        let level = Compression::new(self.config.compression_level.min(9));
        let mut encoder = ZlibEncoder::new(Vec::new(), level);
        encoder.write_all(&raw)?;
        let bytes = encoder.finish()?;

        log::debug!(
            "Packed {} values as {:?}: {} -> {} bytes",
            values.len(),
            width,
            raw.len(),
            bytes.len()
        );

        Ok(SpectralBlob::from_compressed(bytes, width, values.len()))
    }

    /// Decompress a blob and widen its values to `f64`
    pub fn decode(&self, blob: &SpectralBlob) -> Result<Vec<f64>, DecodeError> {
        Self::decode_bytes(blob.as_bytes(), blob.width(), Some(blob.len()))
    }

    /// Decompress raw blob bytes
    ///
    /// # Arguments
    /// * `bytes` - The zlib-compressed payload
    /// * `width` - The width the values were packed with
    /// * `expected_length` - Expected number of values, if known
    pub fn decode_bytes(
        bytes: &[u8],
        width: ElementWidth,
        expected_length: Option<usize>,
    ) -> Result<Vec<f64>, DecodeError> {
        if bytes.is_empty() {
            return Err(DecodeError::EmptyBuffer);
        }

        let mut decoder = ZlibDecoder::new(bytes);
        let mut uncompressed = Vec::new();
        decoder.read_to_end(&mut uncompressed)?;

        let values = Self::bytes_to_floats(&uncompressed, width)?;

        if let Some(expected) = expected_length {
            if values.len() != expected {
                return Err(DecodeError::InvalidLength {
                    expected,
                    actual: values.len(),
                });
            }
        }

        Ok(values)
    }

    /// Convert raw bytes to f64 values based on width
    fn bytes_to_floats(bytes: &[u8], width: ElementWidth) -> Result<Vec<f64>, DecodeError> {
        let byte_size = width.byte_size();

        if bytes.len() % byte_size != 0 {
            return Err(DecodeError::InvalidLength {
                expected: bytes.len() / byte_size * byte_size,
                actual: bytes.len(),
            });
        }

        let count = bytes.len() / byte_size;
        let mut values = Vec::with_capacity(count);
        let mut cursor = Cursor::new(bytes);

        match width {
            ElementWidth::Float32 => {
                for _ in 0..count {
                    values.push(cursor.read_f32::<NativeEndian>()? as f64);
                }
            }
            ElementWidth::Float64 => {
                for _ in 0..count {
                    values.push(cursor.read_f64::<NativeEndian>()?);
                }
            }
        }

        Ok(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_decode_float64_exact() {
        let codec = BlobCodec::default();
        let values = vec![1000.123456789012, 1000.2, 2500.000000001, 1e-3];

        let blob = codec.encode(&values, ElementWidth::Float64).unwrap();
        assert_eq!(blob.len(), 4);
        assert_eq!(blob.width(), ElementWidth::Float64);

        let decoded = codec.decode(&blob).unwrap();
        assert_eq!(decoded, values);
    }

    #[test]
    fn test_encode_decode_float32_precision() {
        let codec = BlobCodec::default();
        let values = vec![1.234567e-19, 3.3e-20, 7.77e-18, 0.0];

        let blob = codec.encode(&values, ElementWidth::Float32).unwrap();
        let decoded = codec.decode(&blob).unwrap();

        assert_eq!(decoded.len(), values.len());
        for (orig, dec) in values.iter().zip(&decoded) {
            if *orig == 0.0 {
                assert_eq!(*dec, 0.0);
            } else {
                assert!(((orig - dec) / orig).abs() <= 5e-6);
            }
        }
    }

    #[test]
    fn test_blob_bytes_are_zlib_of_native_floats() {
        let values = [100.0f64, 200.0];
        let blob = BlobCodec::default()
            .encode(&values, ElementWidth::Float64)
            .unwrap();

        let mut decoder = ZlibDecoder::new(blob.as_bytes());
        let mut raw = Vec::new();
        decoder.read_to_end(&mut raw).unwrap();

        let mut expected = Vec::new();
        expected.extend_from_slice(&100.0f64.to_ne_bytes());
        expected.extend_from_slice(&200.0f64.to_ne_bytes());
        assert_eq!(raw, expected);
    }

    #[test]
    fn test_decode_empty_buffer_is_error() {
        let result = BlobCodec::decode_bytes(&[], ElementWidth::Float64, None);
        assert!(matches!(result, Err(DecodeError::EmptyBuffer)));
    }

    #[test]
    fn test_decode_garbage_is_error() {
        let result = BlobCodec::decode_bytes(&[1, 2, 3, 4, 5], ElementWidth::Float32, None);
        assert!(matches!(result, Err(DecodeError::Decompression(_))));
    }

    #[test]
    fn test_decode_misaligned_payload() {
        let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(&[0u8; 7]).unwrap();
        let compressed = encoder.finish().unwrap();

        let result = BlobCodec::decode_bytes(&compressed, ElementWidth::Float64, None);
        assert!(matches!(
            result,
            Err(DecodeError::InvalidLength {
                expected: 0,
                actual: 7
            })
        ));
    }

    #[test]
    fn test_decode_declared_length_mismatch() {
        let codec = BlobCodec::default();
        let blob = codec.encode(&[1.0, 2.0, 3.0], ElementWidth::Float64).unwrap();
        let wrong = SpectralBlob::from_compressed(blob.into_bytes(), ElementWidth::Float64, 5);

        let result = codec.decode(&wrong);
        assert!(matches!(
            result,
            Err(DecodeError::InvalidLength {
                expected: 5,
                actual: 3
            })
        ));
    }

    #[test]
    fn test_float32_halves_raw_size() {
        let codec = BlobCodec::new(CodecConfig { compression_level: 0 });
        let values: Vec<f64> = (0..1000).map(|i| (i as f64 * 0.37).sin()).collect();

        let wide = codec.encode(&values, ElementWidth::Float64).unwrap();
        let narrow = codec.encode(&values, ElementWidth::Float32).unwrap();
        assert!(narrow.compressed_size() < wide.compressed_size());
    }

    #[test]
    fn test_compression_ratio_on_repetitive_data() {
        let codec = BlobCodec::new(CodecConfig::max_compression());
        let values = vec![0.0; 4096];
        let blob = codec.encode(&values, ElementWidth::Float64).unwrap();
        assert!(blob.compression_ratio() > 10.0);
    }
}
