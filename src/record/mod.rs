//! # Cross-Section Records
//!
//! A [`CrossSection`] carries the descriptors of one measured absorption
//! spectrum and owns at most one compressed blob pair:
//!
//! - wavenumbers, packed as 64-bit floats (optional; an implicit uniform grid
//!   is rebuilt from `numin`, `numax` and `npnts` when absent)
//! - absorption values, packed as 32-bit floats
//!
//! Data is assigned once through [`CrossSection::set_data`] and read back
//! lazily through [`SpectrumSource::get_data`], which decompresses on every
//! call. [`CachedSpectrum`] layers a decode-once cache on top of any source.
//!
//! ```rust
//! use xscdb::record::{CrossSection, SpectrumSource};
//!
//! let mut xs = CrossSection::new().with_bounds(0.0, 10.0);
//! xs.set_data(None, &[0.0; 11])?;
//!
//! let arrays = xs.get_data()?.expect("data was assigned");
//! assert_eq!(arrays.nu[10], 10.0);
//! # Ok::<(), xscdb::record::RecordError>(())
//! ```

mod cross_section;
mod data;
mod error;
mod types;


pub use cross_section::CrossSection;
pub use data::{CachedSpectrum, SpectralData, SpectrumSource};
pub use error::RecordError;
pub use types::{linspace, SpectralArrays};
