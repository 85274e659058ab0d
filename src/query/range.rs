use log::{debug, warn};

use crate::record::{RecordError, SpectralArrays, SpectrumSource};

use super::QueryConfig;

/// Extracts the part of a spectrum lying within a wavenumber window
#[derive(Debug, Clone, Copy, Default)]
pub struct RangeQuery {
    config: QueryConfig,
}

impl RangeQuery {
    /// Create a query engine with the given configuration
    pub fn new(config: QueryConfig) -> Self {
        Self { config }
    }

    /// The configuration in use
    pub fn config(&self) -> &QueryConfig {
        &self.config
    }

    /// Points with `numin <= nu <= numax` (both bounds inclusive), jointly
    /// sorted by wavenumber
    ///
    /// An omitted bound defaults to the data extent widened by
    /// [`QueryConfig::range_padding`]. Storage order is not assumed sorted.
    /// A source without data or a window without overlap yields empty arrays.
    pub fn range<S: SpectrumSource + ?Sized>(
        &self,
        source: &S,
        numin: Option<f64>,
        numax: Option<f64>,
    ) -> Result<SpectralArrays, RecordError> {
        let Some(mut arrays) = source.get_data()? else {
            debug!("Range query on a record without data");
            return Ok(SpectralArrays::empty());
        };
        let Some((lo, hi)) = arrays.nu_bounds() else {
            return Ok(SpectralArrays::empty());
        };

        let numin = numin.unwrap_or(lo - self.config.range_padding);
        let numax = numax.unwrap_or(hi + self.config.range_padding);

        arrays.sort_by_wavenumber();
        let (start, end) = window_indices(&arrays.nu, numin, numax);

        debug!(
            "Range [{}, {}] selects {} of {} points",
            numin,
            numax,
            end - start,
            arrays.len()
        );
        Ok(arrays.slice(start, end))
    }

    /// Like [`RangeQuery::range`], but an empty window is an error
    pub fn range_non_empty<S: SpectrumSource + ?Sized>(
        &self,
        source: &S,
        numin: Option<f64>,
        numax: Option<f64>,
    ) -> Result<SpectralArrays, RecordError> {
        let arrays = self.range(source, numin, numax)?;
        if arrays.is_empty() {
            warn!("No data points in range [{:?}, {:?}]", numin, numax);
            return Err(RecordError::NotFound {
                numin: numin.unwrap_or(f64::NEG_INFINITY),
                numax: numax.unwrap_or(f64::INFINITY),
            });
        }
        Ok(arrays)
    }
}

/// Insertion points bounding the closed window `[numin, numax]` in sorted `nu`
///
/// The start is the leftmost insertion point of `numin` and the end the
/// rightmost insertion point of `numax`, so stored values equal to either
/// bound are included.
pub(crate) fn window_indices(nu: &[f64], numin: f64, numax: f64) -> (usize, usize) {
    let start = nu.partition_point(|&v| v < numin);
    let end = nu.partition_point(|&v| v <= numax);
    (start, end.max(start))
}
