use std::sync::OnceLock;

use crate::codec::{BlobCodec, DecodeError, ElementWidth, SpectralBlob};

use super::{RecordError, SpectralArrays};

/// The owned blob pair behind a cross-section record
///
/// The wavenumber blob is optional: when it is absent the grid is implicit and
/// rebuilt from the record's `numin`, `numax` and `npnts`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpectralData {
    nu: Option<SpectralBlob>,
    xsc: SpectralBlob,
}

impl SpectralData {
    /// Pack wavenumbers as 64-bit and absorption as 32-bit blobs
    pub fn pack(codec: &BlobCodec, nu: Option<&[f64]>, xsc: &[f64]) -> std::io::Result<Self> {
        let nu = nu
            .map(|values| codec.encode(values, ElementWidth::Float64))
            .transpose()?;
        let xsc = codec.encode(xsc, ElementWidth::Float32)?;
        Ok(Self { nu, xsc })
    }

    /// Rebuild from persisted blob columns
    ///
    /// An empty byte slice means the column is absent. Returns `None` when the
    /// absorption column is empty, since there is then no data at all.
    pub fn from_columns(nu_bytes: &[u8], xsc_bytes: &[u8], npnts: usize) -> Option<Self> {
        if xsc_bytes.is_empty() {
            return None;
        }
        let nu = (!nu_bytes.is_empty()).then(|| {
            SpectralBlob::from_compressed(nu_bytes.to_vec(), ElementWidth::Float64, npnts)
        });
        let xsc = SpectralBlob::from_compressed(xsc_bytes.to_vec(), ElementWidth::Float32, npnts);
        Some(Self { nu, xsc })
    }

    /// The wavenumber blob, if the grid is explicit
    pub fn nu_blob(&self) -> Option<&SpectralBlob> {
        self.nu.as_ref()
    }

    /// The absorption blob
    pub fn xsc_blob(&self) -> &SpectralBlob {
        &self.xsc
    }

    /// Number of stored points
    pub fn len(&self) -> usize {
        self.xsc.len()
    }

    /// Returns true if no points are stored
    pub fn is_empty(&self) -> bool {
        self.xsc.is_empty()
    }

    /// Decompress the wavenumber blob; `None` for an implicit grid
    pub fn unpack_nu(&self) -> Result<Option<Vec<f64>>, DecodeError> {
        self.nu
            .as_ref()
            .map(|blob| BlobCodec::default().decode(blob))
            .transpose()
    }

    /// Decompress the absorption blob
    pub fn unpack_xsc(&self) -> Result<Vec<f64>, DecodeError> {
        BlobCodec::default().decode(&self.xsc)
    }

    /// Bytes to persist, with an empty slice for an absent column
    pub fn columns(&self) -> (&[u8], &[u8]) {
        let nu = self.nu.as_ref().map(SpectralBlob::as_bytes).unwrap_or(&[]);
        (nu, self.xsc.as_bytes())
    }
}

/// Anything that can hand out decompressed spectral arrays
///
/// Every call decompresses again. Wrap a source in [`CachedSpectrum`] when the
/// same arrays are read repeatedly.
pub trait SpectrumSource {
    /// Decompress the stored arrays, in stored order
    ///
    /// Returns `Ok(None)` when no data has been assigned.
    fn get_data(&self) -> Result<Option<SpectralArrays>, RecordError>;
}

impl<S: SpectrumSource + ?Sized> SpectrumSource for &S {
    fn get_data(&self) -> Result<Option<SpectralArrays>, RecordError> {
        (**self).get_data()
    }
}

/// Decodes a source at most once and serves clones afterwards
///
/// Failed decodes are not cached. The wrapper borrows the source, so the
/// source cannot be reassigned while the cache is alive.
pub struct CachedSpectrum<'a, S: SpectrumSource + ?Sized> {
    source: &'a S,
    cache: OnceLock<Option<SpectralArrays>>,
}

impl<'a, S: SpectrumSource + ?Sized> CachedSpectrum<'a, S> {
    /// Wrap a source
    pub fn new(source: &'a S) -> Self {
        Self {
            source,
            cache: OnceLock::new(),
        }
    }

    /// Returns true once a decode has succeeded
    pub fn is_cached(&self) -> bool {
        self.cache.get().is_some()
    }
}

impl<S: SpectrumSource + ?Sized> SpectrumSource for CachedSpectrum<'_, S> {
    fn get_data(&self) -> Result<Option<SpectralArrays>, RecordError> {
        if let Some(cached) = self.cache.get() {
            return Ok(cached.clone());
        }
        let data = self.source.get_data()?;
        Ok(self.cache.get_or_init(|| data).clone())
    }
}
