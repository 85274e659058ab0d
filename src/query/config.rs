use serde::{Deserialize, Serialize};

/// Configuration for range queries and the resampling built on them
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryConfig {
    /// Padding (cm-1) added around the data when a bound is omitted, and
    /// around the target grid when interpolating
    pub range_padding: f64,

    /// Wavenumbers closer than this (cm-1) are merged when cleaning
    pub merge_tolerance: f64,

    /// Most windows a single downsample may produce
    pub max_bins: usize,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            range_padding: 10.0,
            merge_tolerance: 1e-9,
            max_bins: 1_000_000,
        }
    }
}
