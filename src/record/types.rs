/// Paired wavenumber / absorption arrays
///
/// Both vectors always have the same length. Absorption values are widened to
/// `f64` after decoding even though they are stored as `f32`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpectralArrays {
    /// Wavenumbers (cm-1)
    pub nu: Vec<f64>,
    /// Absorption cross-sections (cm2/molecule)
    pub xsc: Vec<f64>,
}

impl SpectralArrays {
    /// Create arrays from matching vectors
    pub fn new(nu: Vec<f64>, xsc: Vec<f64>) -> Self {
        debug_assert_eq!(nu.len(), xsc.len());
        Self { nu, xsc }
    }

    /// Empty arrays
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of points
    pub fn len(&self) -> usize {
        self.nu.len()
    }

    /// Returns true if there are no points
    pub fn is_empty(&self) -> bool {
        self.nu.is_empty()
    }

    /// Smallest and largest wavenumber, ignoring order
    pub fn nu_bounds(&self) -> Option<(f64, f64)> {
        if self.nu.is_empty() {
            return None;
        }
        let min = self.nu.iter().copied().fold(f64::INFINITY, f64::min);
        let max = self.nu.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        Some((min, max))
    }

    /// Sort both arrays jointly by ascending wavenumber
    ///
    /// The sort is stable, so points sharing a wavenumber keep their stored order.
    pub fn sort_by_wavenumber(&mut self) {
        if self.nu.windows(2).all(|w| w[0] <= w[1]) {
            return;
        }

        let mut order: Vec<usize> = (0..self.nu.len()).collect();
        order.sort_by(|&a, &b| self.nu[a].total_cmp(&self.nu[b]));

        self.nu = order.iter().map(|&i| self.nu[i]).collect();
        self.xsc = order.iter().map(|&i| self.xsc[i]).collect();
    }

    /// Copy out the half-open index range `[start, end)`
    pub fn slice(&self, start: usize, end: usize) -> Self {
        Self {
            nu: self.nu[start..end].to_vec(),
            xsc: self.xsc[start..end].to_vec(),
        }
    }

    /// Split into `(nu, xsc)`
    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>) {
        (self.nu, self.xsc)
    }
}

/// Build a uniform grid of `npnts` points from `numin` to `numax` inclusive
///
/// The first element is exactly `numin` and the last exactly `numax`.
pub fn linspace(numin: f64, numax: f64, npnts: usize) -> Vec<f64> {
    match npnts {
        0 => Vec::new(),
        1 => vec![numin],
        _ => {
            let step = (numax - numin) / (npnts - 1) as f64;
            let mut grid: Vec<f64> = (0..npnts).map(|i| numin + i as f64 * step).collect();
            grid[npnts - 1] = numax;
            grid
        }
    }
}
