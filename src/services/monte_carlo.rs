use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};
use thiserror::Error;

use crate::domain::roi::RoiModel;
use crate::services::percentiles::value_sorted_or_zero;
use crate::services::simulation_types::{
    PercentileSet, SimulationOutput, SimulationResult, SimulationSummary,
};

#[derive(Error, Debug, PartialEq)]
pub enum MonteCarloError {
    #[error("sample count must be greater than zero")]
    InvalidSampleCount,
    #[error("invalid performance distribution: {0}")]
    Distribution(String),
}

#[derive(Debug, Clone, Copy)]
pub struct MonteCarloParams {
    pub samples: usize,
    pub mean_performance: f64,
    pub std_performance: f64,
}

/// Runs the ROI simulation with a freshly seeded generator. The generator is
/// local to this call, so simulations with different seeds can run in
/// parallel without sharing state.
pub fn run_simulation(
    model: &RoiModel,
    params: &MonteCarloParams,
    seed: u64,
) -> Result<SimulationOutput, MonteCarloError> {
    let mut rng = StdRng::seed_from_u64(seed);
    run_simulation_with_rng(model, params, seed, &mut rng)
}

pub fn run_simulation_with_rng<R: Rng + ?Sized>(
    model: &RoiModel,
    params: &MonteCarloParams,
    seed: u64,
    rng: &mut R,
) -> Result<SimulationOutput, MonteCarloError> {
    if params.samples == 0 {
        return Err(MonteCarloError::InvalidSampleCount);
    }
    let normal = Normal::new(params.mean_performance, params.std_performance)
        .map_err(|e| MonteCarloError::Distribution(e.to_string()))?;

    let mut performances = Vec::with_capacity(params.samples);
    let mut revenues = Vec::with_capacity(params.samples);
    let mut rois = Vec::with_capacity(params.samples);

    for _ in 0..params.samples {
        // Performance is a revenue fraction; draws outside [0, 1] are
        // clamped, not resampled.
        let performance: f64 = normal.sample(rng).clamp(0.0, 1.0);
        let revenue = performance * model.expected_revenue();
        let roi = model.compute_roi(Some(revenue));

        performances.push(performance);
        revenues.push(revenue);
        rois.push(roi);
    }

    let summary = summarize(seed, &revenues, &rois);

    Ok(SimulationOutput {
        summary,
        result: SimulationResult {
            performances,
            revenues,
            rois,
        },
    })
}

fn summarize(seed: u64, revenues: &[f64], rois: &[f64]) -> SimulationSummary {
    let mut sorted_rois = rois.to_vec();
    sorted_rois.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let mut sorted_revenues = revenues.to_vec();
    sorted_revenues.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let samples = rois.len();
    let mean_roi = rois.iter().sum::<f64>() / samples as f64;
    let above_zero = rois.iter().filter(|roi| **roi > 0.0).count();
    let above_fifty = rois.iter().filter(|roi| **roi > 50.0).count();

    SimulationSummary {
        samples,
        seed,
        mean_roi,
        median_roi: value_sorted_or_zero(&sorted_rois, 50.0),
        roi_above_zero: above_zero as f64 / samples as f64,
        roi_above_fifty: above_fifty as f64 / samples as f64,
        roi_percentiles: percentile_set(&sorted_rois),
        revenue_percentiles: percentile_set(&sorted_revenues),
    }
}

fn percentile_set(sorted_values: &[f64]) -> PercentileSet {
    PercentileSet {
        p10: value_sorted_or_zero(sorted_values, 10.0),
        p25: value_sorted_or_zero(sorted_values, 25.0),
        p50: value_sorted_or_zero(sorted_values, 50.0),
        p75: value_sorted_or_zero(sorted_values, 75.0),
        p90: value_sorted_or_zero(sorted_values, 90.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::roi_model;

    fn params(samples: usize, mean: f64, std: f64) -> MonteCarloParams {
        MonteCarloParams {
            samples,
            mean_performance: mean,
            std_performance: std,
        }
    }

    #[test]
    fn rejects_zero_samples() {
        let model = roi_model();
        assert_eq!(
            run_simulation(&model, &params(0, 0.75, 0.15), 42),
            Err(MonteCarloError::InvalidSampleCount)
        );
    }

    #[test]
    fn rejects_negative_standard_deviation() {
        let model = roi_model();
        assert!(matches!(
            run_simulation(&model, &params(10, 0.75, -0.5), 42),
            Err(MonteCarloError::Distribution(_))
        ));
    }

    #[test]
    fn sequences_share_the_sample_count() {
        let model = roi_model();
        let output = run_simulation(&model, &params(500, 0.75, 0.15), 42).unwrap();

        assert_eq!(output.result.performances.len(), 500);
        assert_eq!(output.result.revenues.len(), 500);
        assert_eq!(output.result.rois.len(), 500);
        assert_eq!(output.summary.samples, 500);
    }

    #[test]
    fn same_seed_reproduces_identical_sequences() {
        let model = roi_model();
        let first = run_simulation(&model, &params(200, 0.75, 0.15), 42).unwrap();
        let second = run_simulation(&model, &params(200, 0.75, 0.15), 42).unwrap();

        assert_eq!(first.result, second.result);
        assert_eq!(first.summary, second.summary);
    }

    #[test]
    fn different_seeds_diverge() {
        let model = roi_model();
        let first = run_simulation(&model, &params(200, 0.75, 0.15), 1).unwrap();
        let second = run_simulation(&model, &params(200, 0.75, 0.15), 2).unwrap();

        assert_ne!(first.result.performances, second.result.performances);
    }

    #[test]
    fn performances_stay_clamped_for_extreme_spread() {
        let model = roi_model();
        let output = run_simulation(&model, &params(1000, 0.5, 25.0), 7).unwrap();

        assert!(output
            .result
            .performances
            .iter()
            .all(|p| (0.0..=1.0).contains(p)));
    }

    #[test]
    fn derived_sequences_follow_the_roi_formula() {
        let model = roi_model();
        let output = run_simulation(&model, &params(50, 0.75, 0.15), 42).unwrap();

        for i in 0..50 {
            let performance = output.result.performances[i];
            let revenue = output.result.revenues[i];
            let roi = output.result.rois[i];
            assert!((revenue - performance * model.expected_revenue()).abs() < 1e-9);
            assert!((roi - model.compute_roi(Some(revenue))).abs() < 1e-9);
        }
    }

    #[test]
    fn percentiles_are_monotone() {
        let model = roi_model();
        let output = run_simulation(&model, &params(1000, 0.75, 0.15), 42).unwrap();

        for set in [
            output.summary.roi_percentiles,
            output.summary.revenue_percentiles,
        ] {
            let values = set.as_array();
            for pair in values.windows(2) {
                assert!(pair[0] <= pair[1], "percentiles not monotone: {values:?}");
            }
        }
        assert_eq!(output.summary.median_roi, output.summary.roi_percentiles.p50);
    }

    #[test]
    fn fractions_stay_within_the_unit_interval() {
        let model = roi_model();
        let output = run_simulation(&model, &params(1000, 0.75, 0.15), 42).unwrap();

        assert!((0.0..=1.0).contains(&output.summary.roi_above_zero));
        assert!((0.0..=1.0).contains(&output.summary.roi_above_fifty));
        assert!(output.summary.roi_above_fifty <= output.summary.roi_above_zero);
    }
}
