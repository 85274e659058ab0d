use crate::record::SpectralArrays;

/// Merge runs of points whose wavenumbers lie within `tolerance` of each other
///
/// Input must be sorted by wavenumber. A run grows while each next point is
/// within `tolerance` of the previous one; it collapses to a single point at
/// the mean wavenumber carrying the mean absorption.
pub fn merge_close_points(arrays: &SpectralArrays, tolerance: f64) -> SpectralArrays {
    let mut out = SpectralArrays::new(Vec::with_capacity(arrays.len()), Vec::with_capacity(arrays.len()));

    let mut i = 0;
    while i < arrays.len() {
        let mut j = i + 1;
        while j < arrays.len() && arrays.nu[j] - arrays.nu[j - 1] <= tolerance {
            j += 1;
        }

        let n = (j - i) as f64;
        out.nu.push(arrays.nu[i..j].iter().sum::<f64>() / n);
        out.xsc.push(arrays.xsc[i..j].iter().sum::<f64>() / n);
        i = j;
    }

    out
}
