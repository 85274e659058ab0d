//! # Resampling and Integration
//!
//! Derived representations of a queried spectrum:
//!
//! - [`Resampler::interpolate`]: Akima interpolation onto an arbitrary grid
//! - [`Resampler::downsample`]: fixed-width binning with a weighting kernel
//! - [`Resampler::integrate`]: trapezoidal band intensity
//!
//! All three go through [`RangeQuery`], so they see jointly sorted arrays.

mod akima;
mod binning;
mod clean;
mod error;
mod integrate;

pub use akima::AkimaInterpolator;
pub use binning::{bin_sorted, window_count, BinningKernel};
pub use clean::merge_close_points;
pub use error::ResampleError;
pub use integrate::trapezoid;

use log::debug;

use crate::query::{QueryConfig, RangeQuery};
use crate::record::{SpectralArrays, SpectrumSource};

/// Interpolation, binning and integration over a spectrum source
#[derive(Debug, Clone, Copy, Default)]
pub struct Resampler {
    query: RangeQuery,
}

impl Resampler {
    /// Create a resampler with the given query configuration
    pub fn new(config: QueryConfig) -> Self {
        Self {
            query: RangeQuery::new(config),
        }
    }

    /// Evaluate the spectrum on `grid`
    ///
    /// The fit uses the stored points within the grid extent widened by the
    /// configured padding. With `clean`, near-coincident wavenumbers are merged
    /// first; without it, duplicates make the fit fail. Grid points outside the
    /// stored data evaluate to NaN.
    pub fn interpolate<S: SpectrumSource + ?Sized>(
        &self,
        source: &S,
        grid: &[f64],
        clean: bool,
    ) -> Result<Vec<f64>, ResampleError> {
        let (Some(&first), Some(&last)) = (grid.first(), grid.last()) else {
            return Ok(Vec::new());
        };
        if grid.windows(2).any(|w| w[1] < w[0]) {
            return Err(ResampleError::Validation(
                "interpolation grid must be ascending".to_string(),
            ));
        }

        let pad = self.query.config().range_padding;
        let mut arrays = self.query.range(source, Some(first - pad), Some(last + pad))?;
        if clean {
            arrays = merge_close_points(&arrays, self.query.config().merge_tolerance);
        }

        debug!(
            "Interpolating {} points onto a grid of {}",
            arrays.len(),
            grid.len()
        );
        let interp = AkimaInterpolator::new(&arrays.nu, &arrays.xsc)?;
        Ok(interp.eval_many(grid))
    }

    /// Bin the spectrum into windows of width `delta`
    ///
    /// Window bounds are `numin`/`numax` when given, otherwise the extent of
    /// the stored points. Bounds must be finite, and the window count may not
    /// exceed [`QueryConfig::max_bins`]. See [`bin_sorted`] for the window
    /// layout.
    pub fn downsample<S: SpectrumSource + ?Sized>(
        &self,
        source: &S,
        delta: f64,
        numin: Option<f64>,
        numax: Option<f64>,
        kind: BinningKernel,
    ) -> Result<SpectralArrays, ResampleError> {
        if !delta.is_finite() || delta <= 0.0 {
            return Err(ResampleError::Validation(format!(
                "bin width must be positive and finite, got {}",
                delta
            )));
        }
        if numin.is_some_and(|v| !v.is_finite()) || numax.is_some_and(|v| !v.is_finite()) {
            return Err(ResampleError::Validation(format!(
                "binning bounds must be finite, got [{:?}, {:?}]",
                numin, numax
            )));
        }

        let arrays = self.query.range(source, numin, numax)?;
        let Some((lo, hi)) = arrays.nu_bounds() else {
            return Ok(SpectralArrays::empty());
        };
        let lo = numin.unwrap_or(lo);
        let hi = numax.unwrap_or(hi);

        bin_sorted(&arrays, lo, hi, delta, kind, self.query.config().max_bins)
    }

    /// Integrated intensity over `[numin, numax]` by the trapezoidal rule
    pub fn integrate<S: SpectrumSource + ?Sized>(
        &self,
        source: &S,
        numin: f64,
        numax: f64,
    ) -> Result<f64, ResampleError> {
        let arrays = self.query.range(source, Some(numin), Some(numax))?;
        Ok(trapezoid(&arrays.nu, &arrays.xsc))
    }
}
