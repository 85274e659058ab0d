//! Akima piecewise-cubic interpolation
//!
//! Knot derivatives are weighted averages of the neighbouring secant slopes,
//! which keeps the curve from overshooting next to sharp peaks. Two extra
//! slopes are extrapolated linearly past each end so the first and last knots
//! get derivatives too.

use super::ResampleError;

/// A fitted Akima interpolant over strictly increasing knots
#[derive(Debug, Clone)]
pub struct AkimaInterpolator {
    x: Vec<f64>,
    y: Vec<f64>,
    /// Derivative at each knot
    t: Vec<f64>,
}

impl AkimaInterpolator {
    /// Fit the interpolant
    ///
    /// Needs at least two knots with strictly increasing, finite `x`.
    pub fn new(x: &[f64], y: &[f64]) -> Result<Self, ResampleError> {
        if x.len() != y.len() {
            return Err(ResampleError::Validation(format!(
                "x and y must have the same length ({} != {})",
                x.len(),
                y.len()
            )));
        }
        if x.len() < 2 {
            return Err(ResampleError::Validation(format!(
                "at least 2 distinct points are needed to interpolate, got {}",
                x.len()
            )));
        }
        if x.iter().any(|v| !v.is_finite()) {
            return Err(ResampleError::Validation(
                "interpolation knots must be finite".to_string(),
            ));
        }
        if x.windows(2).any(|w| w[1] <= w[0]) {
            return Err(ResampleError::Validation(
                "interpolation knots must be strictly increasing; clean duplicates first"
                    .to_string(),
            ));
        }

        let t = knot_slopes(x, y);
        Ok(Self {
            x: x.to_vec(),
            y: y.to_vec(),
            t,
        })
    }

    /// Smallest and largest knot
    pub fn domain(&self) -> (f64, f64) {
        (self.x[0], self.x[self.x.len() - 1])
    }

    /// Evaluate at `xi`
    ///
    /// Knots return their value exactly. Points outside the knot range are NaN.
    pub fn eval(&self, xi: f64) -> f64 {
        // Fold -0.0 into 0.0; total_cmp orders it below every 0.0 knot
        let xi = xi + 0.0;
        let i = match self.x.binary_search_by(|v| v.total_cmp(&xi)) {
            Ok(i) => return self.y[i],
            Err(i) => i,
        };
        if i == 0 || i == self.x.len() {
            return f64::NAN;
        }

        // xi lies strictly inside [x[k], x[k + 1]]
        let k = i - 1;
        let h = self.x[k + 1] - self.x[k];
        let m = (self.y[k + 1] - self.y[k]) / h;
        let (t0, t1) = (self.t[k], self.t[k + 1]);

        let c2 = (3.0 * m - 2.0 * t0 - t1) / h;
        let c3 = (t0 + t1 - 2.0 * m) / (h * h);
        let d = xi - self.x[k];
        self.y[k] + d * (t0 + d * (c2 + d * c3))
    }

    /// Evaluate at every point of `grid`
    pub fn eval_many(&self, grid: &[f64]) -> Vec<f64> {
        grid.iter().map(|&xi| self.eval(xi)).collect()
    }
}

fn knot_slopes(x: &[f64], y: &[f64]) -> Vec<f64> {
    let n = x.len();

    // Secant slopes live at m[2..n+1]; two extrapolated slopes pad each end.
    let mut m = vec![0.0; n + 3];
    for i in 0..n - 1 {
        m[i + 2] = (y[i + 1] - y[i]) / (x[i + 1] - x[i]);
    }
    if n == 2 {
        let s = m[2];
        m.iter_mut().for_each(|v| *v = s);
    } else {
        m[1] = 2.0 * m[2] - m[3];
        m[0] = 2.0 * m[1] - m[2];
        m[n + 1] = 2.0 * m[n] - m[n - 1];
        m[n + 2] = 2.0 * m[n + 1] - m[n];
    }

    let dm: Vec<f64> = m.windows(2).map(|w| (w[1] - w[0]).abs()).collect();
    let f12: Vec<f64> = (0..n).map(|i| dm[i + 2] + dm[i]).collect();
    let threshold = 1e-9 * f12.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    (0..n)
        .map(|i| {
            if f12[i] > threshold {
                (dm[i + 2] * m[i + 1] + dm[i] * m[i + 2]) / f12[i]
            } else {
                0.5 * (m[i + 3] + m[i])
            }
        })
        .collect()
}
