use log::warn;
use serde::{Deserialize, Serialize};

use crate::record::SpectralArrays;

use super::ResampleError;

/// Weighting used to combine the points falling into one window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BinningKernel {
    /// Weight falls linearly from 1 at the window centre to 0 at its edges
    #[default]
    Triangular,
    /// Plain mean of the window
    Boxcar,
    /// Largest value in the window
    Max,
}

/// Number of windows of width `delta` needed to cover `[lo, hi]`
///
/// Fails when a bound or the width is not finite, or when more than
/// `max_bins` windows would be needed. Degenerate bounds (`hi <= lo`) need none.
pub fn window_count(
    lo: f64,
    hi: f64,
    delta: f64,
    max_bins: usize,
) -> Result<usize, ResampleError> {
    if !lo.is_finite() || !hi.is_finite() {
        return Err(ResampleError::Validation(format!(
            "binning bounds must be finite, got [{}, {}]",
            lo, hi
        )));
    }
    if !delta.is_finite() || delta <= 0.0 {
        return Err(ResampleError::Validation(format!(
            "bin width must be positive and finite, got {}",
            delta
        )));
    }
    if hi <= lo {
        return Ok(0);
    }

    let windows = ((hi - lo) / delta).ceil();
    if !windows.is_finite() || windows > max_bins as f64 {
        return Err(ResampleError::Validation(format!(
            "binning [{}, {}] by {} needs {} windows, more than the limit of {}",
            lo, hi, delta, windows, max_bins
        )));
    }
    Ok(windows as usize)
}

/// Bin sorted arrays into contiguous windows of width `delta` over `[lo, hi]`
///
/// Window `k` covers `[lo + k*delta, lo + (k+1)*delta)`, clipped to `hi`; the
/// last window is closed on `hi`. Each output point sits at the midpoint of its
/// clipped window. Empty windows contribute `0.0`. See [`window_count`] for the
/// accepted bounds.
pub fn bin_sorted(
    arrays: &SpectralArrays,
    lo: f64,
    hi: f64,
    delta: f64,
    kind: BinningKernel,
    max_bins: usize,
) -> Result<SpectralArrays, ResampleError> {
    let count = window_count(lo, hi, delta, max_bins)?;
    if count == 0 {
        return Ok(SpectralArrays::empty());
    }

    let mut out = SpectralArrays::new(Vec::with_capacity(count), Vec::with_capacity(count));
    let mut cursor = arrays.nu.partition_point(|&v| v < lo);

    for k in 0..count {
        let last = k + 1 == count;
        let start = lo + k as f64 * delta;
        let end = if last {
            hi
        } else {
            (lo + (k + 1) as f64 * delta).min(hi)
        };

        let first = cursor;
        while cursor < arrays.len() {
            let v = arrays.nu[cursor];
            if v > end || (v == end && !last) {
                break;
            }
            cursor += 1;
        }

        let center = 0.5 * (start + end);
        let value = combine(
            &arrays.nu[first..cursor],
            &arrays.xsc[first..cursor],
            center,
            0.5 * (end - start),
            kind,
        );
        out.nu.push(center);
        out.xsc.push(value);
    }

    Ok(out)
}

fn combine(nu: &[f64], xsc: &[f64], center: f64, half_width: f64, kind: BinningKernel) -> f64 {
    if xsc.is_empty() {
        return 0.0;
    }
    let mean = || xsc.iter().sum::<f64>() / xsc.len() as f64;

    match kind {
        BinningKernel::Boxcar => mean(),
        BinningKernel::Max => xsc.iter().copied().fold(f64::NEG_INFINITY, f64::max),
        BinningKernel::Triangular => {
            let mut weighted = 0.0;
            let mut total = 0.0;
            for (&n, &x) in nu.iter().zip(xsc) {
                let w = if half_width > 0.0 {
                    (1.0 - (n - center).abs() / half_width).max(0.0)
                } else {
                    1.0
                };
                weighted += w * x;
                total += w;
            }
            if total > 0.0 {
                weighted / total
            } else {
                warn!(
                    "All triangular weights vanish in window centred at {}; using the mean",
                    center
                );
                mean()
            }
        }
    }
}
