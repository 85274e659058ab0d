//! # xscdb - Compressed Cross-Section Storage
//!
//! `xscdb` is the data-access core of a molecular spectroscopy reference
//! database. It stores measured absorption cross-sections as compact
//! compressed blobs and answers range, resampling and integration queries
//! over them.
//!
//! ## Key Features
//!
//! - **Compact Blobs**: Wavenumbers are packed as 64-bit floats, absorption
//!   values as 32-bit floats, and both are zlib-compressed.
//!
//! - **Implicit Grids**: Uniformly sampled spectra can omit the wavenumber
//!   array entirely; it is rebuilt exactly from `numin`, `numax` and `npnts`.
//!
//! - **Range Queries**: Any wavenumber window can be cut out of a spectrum,
//!   regardless of the order the points were stored in.
//!
//! - **Resampling**: Akima interpolation onto arbitrary grids, fixed-width
//!   binning and trapezoidal band intensities.
//!
//! - **Explicit Errors**: Corrupt blobs surface as [`codec::DecodeError`],
//!   distinct from records that simply hold no data.
//!
//! ## Quick Start
//!
//! ```rust
//! use xscdb::record::CrossSection;
//! use xscdb::resample::BinningKernel;
//!
//! let mut xs = CrossSection::with_aliases("CFC-11", "Harrison-2015");
//! xs.temperature = Some(296.0);
//! xs.set_data(Some(&[0.0, 1.0, 2.0]), &[0.0, 1.0, 0.0])?;
//!
//! // Band intensity
//! assert_eq!(xs.integrate(0.0, 2.0)?, 1.0);
//!
//! // Points within a window, sorted by wavenumber
//! let window = xs.range(Some(0.5), Some(2.0))?;
//! assert_eq!(window.nu, vec![1.0, 2.0]);
//!
//! // Interpolation and binning
//! let values = xs.interpolate(&[0.0, 0.5, 1.0], false)?;
//! assert_eq!(values[2], 1.0);
//! let binned = xs.downsample(1.0, Some(0.0), Some(2.0), BinningKernel::Triangular)?;
//! assert_eq!(binned.len(), 2);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Persisting Records
//!
//! The scalar descriptors serialize to JSON; the two blob columns are handed
//! out as raw bytes, with an empty slice standing for an absent column:
//!
//! ```rust
//! use xscdb::record::{CrossSection, SpectrumSource};
//!
//! let mut xs = CrossSection::new();
//! xs.set_data(Some(&[1000.0, 1000.5]), &[1e-19, 2e-19])?;
//!
//! let row = xs.to_json()?;
//! let (nu_blob, xsc_blob) = xs.blob_columns();
//!
//! let mut restored = CrossSection::from_json(&row)?;
//! restored.load_blobs(nu_blob, xsc_blob)?;
//! assert_eq!(restored.get_data()?, xs.get_data()?);
//! # Ok::<(), xscdb::record::RecordError>(())
//! ```
//!
//! ## Blob Format
//!
//! | Column | Element | Layout |
//! |--------|---------|--------|
//! | nu | Float64 | native-endian, concatenated, zlib |
//! | xsc | Float32 | native-endian, concatenated, zlib |
//!
//! An empty buffer means the column is absent.
//!
//! ## Architecture
//!
//! - [`codec`]: blob packing and unpacking
//! - [`record`]: cross-section records, data assignment and retrieval
//! - [`query`]: wavenumber range extraction
//! - [`resample`]: interpolation, binning and integration
//! - [`metadata`]: molecules, sources, isotopologues and the alias registry
//! - [`config`]: TOML configuration

// Documentation lints - enforce complete documentation for publication
#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]

pub mod codec;
pub mod config;
pub mod metadata;
pub mod query;
pub mod record;
pub mod resample;

/// Re-export commonly used types for convenience
pub mod prelude {
    pub use crate::codec::{BlobCodec, CodecConfig, DecodeError, ElementWidth, SpectralBlob};
    pub use crate::config::{ConfigError, XscConfig};
    pub use crate::metadata::{
        Alias, AliasKind, AliasRegistry, AliasResolver, Aliased, Isotopologue, Molecule, Source,
    };
    pub use crate::query::{QueryConfig, RangeQuery};
    pub use crate::record::{
        CachedSpectrum, CrossSection, RecordError, SpectralArrays, SpectralData, SpectrumSource,
    };
    pub use crate::resample::{AkimaInterpolator, BinningKernel, ResampleError, Resampler};
}
