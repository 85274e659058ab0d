use std::fmt;
use std::sync::Arc;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::codec::BlobCodec;
use crate::metadata::{AliasResolver, Molecule, Source};
use crate::query::RangeQuery;
use crate::resample::{BinningKernel, ResampleError, Resampler};

use super::types::linspace;
use super::{RecordError, SpectralArrays, SpectralData, SpectrumSource};

/// A measured absorption cross-section and its descriptors
///
/// The scalar fields mirror the persisted row. Spectral data lives in an
/// owned [`SpectralData`] pair that is only ever replaced as a whole through
/// [`CrossSection::set_data`] or [`CrossSection::load_blobs`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CrossSection {
    /// Record identity
    pub id: Option<i64>,
    /// Foreign key of the molecule alias
    pub molecule_alias_id: Option<i64>,
    /// Foreign key of the source alias
    pub source_alias_id: Option<i64>,
    /// Lower wavenumber bound (cm-1)
    pub numin: Option<f64>,
    /// Upper wavenumber bound (cm-1)
    pub numax: Option<f64>,
    /// Number of stored points
    pub npnts: Option<usize>,
    /// Peak absorption cross-section
    pub sigma_max: Option<f64>,
    /// Temperature (K)
    pub temperature: Option<f64>,
    /// Pressure (Torr)
    pub pressure: Option<f64>,
    /// Instrument resolution
    pub resolution: Option<f64>,
    /// Units of `resolution`
    pub resolution_units: Option<String>,
    /// Broadening gas
    pub broadener: Option<String>,
    /// Free-text description
    pub description: Option<String>,
    /// Apodization function
    pub apodization: Option<String>,
    /// Arbitrary JSON payload, kept verbatim
    pub json: Option<String>,
    /// Original file name
    pub filename: Option<String>,
    /// Original file format
    pub format: Option<String>,

    /// Natural key of the molecule alias (not persisted)
    #[serde(skip)]
    pub molecule_alias: Option<String>,
    /// Natural key of the source alias (not persisted)
    #[serde(skip)]
    pub source_alias: Option<String>,

    #[serde(skip)]
    data: Option<SpectralData>,
}

impl CrossSection {
    /// Create an empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a record referencing a molecule and a source by alias
    pub fn with_aliases(molecule_alias: &str, source_alias: &str) -> Self {
        Self {
            molecule_alias: Some(molecule_alias.to_string()),
            source_alias: Some(source_alias.to_string()),
            ..Default::default()
        }
    }

    /// Set the implicit grid bounds before assigning absorption-only data
    pub fn with_bounds(mut self, numin: f64, numax: f64) -> Self {
        self.numin = Some(numin);
        self.numax = Some(numax);
        self
    }

    /// Assign spectral data using the default codec
    pub fn set_data(&mut self, nu: Option<&[f64]>, xsc: &[f64]) -> Result<(), RecordError> {
        self.set_data_with(&BlobCodec::default(), nu, xsc)
    }

    /// Validate, pack and store a full spectrum
    ///
    /// Without `nu` the grid is implicit and `numin`/`numax` must already be
    /// set. With `nu`, `numin`/`numax` are recomputed from the array and any
    /// previous bounds are overwritten. The record is untouched on error.
    pub fn set_data_with(
        &mut self,
        codec: &BlobCodec,
        nu: Option<&[f64]>,
        xsc: &[f64],
    ) -> Result<(), RecordError> {
        if xsc.is_empty() {
            return Err(RecordError::Validation(
                "xsc must be non-empty".to_string(),
            ));
        }

        let bounds = match nu {
            None => {
                if self.numin.is_none() || self.numax.is_none() {
                    return Err(RecordError::Validation(
                        "numin and numax must be set for an implicit grid".to_string(),
                    ));
                }
                None
            }
            Some(nu) => {
                if nu.len() != xsc.len() {
                    return Err(RecordError::Validation(format!(
                        "nu and xsc must have the same length ({} != {})",
                        nu.len(),
                        xsc.len()
                    )));
                }
                if nu.iter().any(|v| !v.is_finite()) {
                    return Err(RecordError::Validation(
                        "nu must contain only finite values".to_string(),
                    ));
                }
                let min = nu.iter().copied().fold(f64::INFINITY, f64::min);
                let max = nu.iter().copied().fold(f64::NEG_INFINITY, f64::max);
                Some((min, max))
            }
        };

        let data = SpectralData::pack(codec, nu, xsc)?;

        if let Some((min, max)) = bounds {
            self.numin = Some(min);
            self.numax = Some(max);
        }
        self.npnts = Some(xsc.len());
        self.data = Some(data);

        debug!(
            "Assigned {} points to cross-section {:?} ({} grid)",
            xsc.len(),
            self.id,
            if bounds.is_some() { "explicit" } else { "implicit" }
        );
        Ok(())
    }

    /// Attach blob columns read back from storage
    ///
    /// Empty slices mean absent columns. `npnts` must be set whenever
    /// `xsc_bytes` is non-empty, since it declares the element count.
    pub fn load_blobs(&mut self, nu_bytes: &[u8], xsc_bytes: &[u8]) -> Result<(), RecordError> {
        if xsc_bytes.is_empty() {
            if !nu_bytes.is_empty() {
                return Err(RecordError::Validation(
                    "nu blob present without an xsc blob".to_string(),
                ));
            }
            self.data = None;
            return Ok(());
        }

        let npnts = self.npnts.ok_or_else(|| {
            RecordError::Validation("npnts must be set to load stored blobs".to_string())
        })?;
        if nu_bytes.is_empty() && (self.numin.is_none() || self.numax.is_none()) {
            return Err(RecordError::Validation(
                "numin and numax must be set for an implicit grid".to_string(),
            ));
        }

        self.data = SpectralData::from_columns(nu_bytes, xsc_bytes, npnts);
        Ok(())
    }

    /// Blob columns to persist, with an empty slice for an absent column
    pub fn blob_columns(&self) -> (&[u8], &[u8]) {
        const ABSENT: &[u8] = &[];
        match &self.data {
            Some(data) => data.columns(),
            None => (ABSENT, ABSENT),
        }
    }

    /// The stored blob pair, if any
    pub fn data(&self) -> Option<&SpectralData> {
        self.data.as_ref()
    }

    /// Returns true if spectral data is stored
    pub fn has_data(&self) -> bool {
        self.data.is_some()
    }

    /// Drop the stored spectral data
    pub fn clear_data(&mut self) {
        self.data = None;
    }

    /// Derive `sigma_max` from the stored absorption values
    pub fn compute_sigma_max(&mut self) -> Result<Option<f64>, RecordError> {
        let Some(data) = &self.data else {
            return Ok(None);
        };
        let xsc = data.unpack_xsc()?;
        self.sigma_max = xsc.into_iter().reduce(f64::max);
        Ok(self.sigma_max)
    }

    /// Resolve the associated molecule
    pub fn molecule<R: AliasResolver<Molecule>>(&self, resolver: &R) -> Option<Arc<Molecule>> {
        self.molecule_alias
            .as_deref()
            .and_then(|name| resolver.resolve(name))
    }

    /// Resolve the associated literature source
    pub fn source<R: AliasResolver<Source>>(&self, resolver: &R) -> Option<Arc<Source>> {
        self.source_alias
            .as_deref()
            .and_then(|name| resolver.resolve(name))
    }

    /// Points within the closed window `[numin, numax]`, sorted by wavenumber
    ///
    /// Stored points lying exactly on either bound are included. An omitted
    /// bound defaults to the data extent widened by the default padding.
    pub fn range(
        &self,
        numin: Option<f64>,
        numax: Option<f64>,
    ) -> Result<SpectralArrays, RecordError> {
        RangeQuery::default().range(self, numin, numax)
    }

    /// Evaluate an Akima interpolant of the stored spectrum on `grid`
    pub fn interpolate(&self, grid: &[f64], clean: bool) -> Result<Vec<f64>, ResampleError> {
        Resampler::default().interpolate(self, grid, clean)
    }

    /// Bin the spectrum into windows of width `delta`
    pub fn downsample(
        &self,
        delta: f64,
        numin: Option<f64>,
        numax: Option<f64>,
        kind: BinningKernel,
    ) -> Result<SpectralArrays, ResampleError> {
        Resampler::default().downsample(self, delta, numin, numax, kind)
    }

    /// Integrated band intensity over `[numin, numax]`
    pub fn integrate(&self, numin: f64, numax: f64) -> Result<f64, ResampleError> {
        Resampler::default().integrate(self, numin, numax)
    }

    /// Serialize the persisted scalar fields to JSON
    pub fn to_json(&self) -> Result<String, RecordError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Deserialize the persisted scalar fields from JSON
    pub fn from_json(json: &str) -> Result<Self, RecordError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl SpectrumSource for CrossSection {
    fn get_data(&self) -> Result<Option<SpectralArrays>, RecordError> {
        let Some(data) = &self.data else {
            return Ok(None);
        };

        let nu = match data.unpack_nu()? {
            Some(nu) => nu,
            None => match (self.numin, self.numax, self.npnts) {
                (Some(numin), Some(numax), Some(npnts)) => linspace(numin, numax, npnts),
                _ => {
                    return Err(RecordError::Validation(
                        "implicit grid requires numin, numax and npnts".to_string(),
                    ))
                }
            },
        };
        let xsc = data.unpack_xsc()?;

        if nu.len() != xsc.len() {
            return Err(RecordError::Validation(format!(
                "stored nu and xsc differ in length ({} != {})",
                nu.len(),
                xsc.len()
            )));
        }

        Ok(Some(SpectralArrays::new(nu, xsc)))
    }
}

impl fmt::Display for CrossSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} : {}",
            self.source_alias.as_deref().unwrap_or("None"),
            self.molecule_alias.as_deref().unwrap_or("None")
        )
    }
}
