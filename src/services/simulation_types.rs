use serde::Serialize;

/// Parallel sample sequences from one Monte Carlo run. Index `i` of each
/// vector belongs to the same draw.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct SimulationResult {
    pub performances: Vec<f64>,
    pub revenues: Vec<f64>,
    pub rois: Vec<f64>,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct PercentileSet {
    pub p10: f64,
    pub p25: f64,
    pub p50: f64,
    pub p75: f64,
    pub p90: f64,
}

impl PercentileSet {
    pub fn as_array(&self) -> [f64; 5] {
        [self.p10, self.p25, self.p50, self.p75, self.p90]
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct SimulationSummary {
    pub samples: usize,
    pub seed: u64,
    pub mean_roi: f64,
    pub median_roi: f64,
    /// Fraction of draws with a positive ROI.
    pub roi_above_zero: f64,
    /// Fraction of draws with ROI above 50 percent.
    pub roi_above_fifty: f64,
    pub roi_percentiles: PercentileSet,
    pub revenue_percentiles: PercentileSet,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct SimulationOutput {
    pub summary: SimulationSummary,
    pub result: SimulationResult,
}
