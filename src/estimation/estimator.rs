use serde::Serialize;

use crate::core::Sample;
use crate::estimation::EstimateError;
use crate::models::Model;

/// Point estimates of one family's parameters for one sample.
///
/// `scale_ml` divides by N, `scale_mml` by N-1. The split matters: the
/// maximum-likelihood value scores the likelihood criterion while the
/// adjusted value is what the message-length encoder consumes, and the two
/// must never be swapped.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FamilyEstimate {
    pub location: f64,
    pub scale_ml: f64,
    pub scale_mml: f64,
}

/// Estimates mean and standard deviation of a Normal fit.
///
/// Reports [`EstimateError::DegenerateScale`] when every value equals the
/// mean, since a zero sigma has no finite code length.
pub fn estimate_normal(sample: &Sample) -> Result<FamilyEstimate, EstimateError> {
    let n = sample.len() as f64;
    let mean = sample.mean();
    let mut sum_sq = 0.0;
    for &x in sample.values() {
        let dev = x - mean;
        sum_sq += dev * dev;
    }
    let scale_ml = (sum_sq / n).sqrt();
    let scale_mml = (sum_sq / (n - 1.0)).sqrt();
    if !(scale_ml > 0.0) || !(scale_mml > 0.0) {
        return Err(EstimateError::DegenerateScale {
            model: Model::Normal,
        });
    }
    Ok(FamilyEstimate {
        location: mean,
        scale_ml,
        scale_mml,
    })
}

/// Estimates median and mean absolute deviation of a Laplace fit.
///
/// The median comes from the sample's sorted values; the same degeneracy
/// rule as the Normal case applies when all values coincide.
pub fn estimate_laplace(sample: &Sample) -> Result<FamilyEstimate, EstimateError> {
    let n = sample.len() as f64;
    let median = sample.median();
    let mut sum_abs = 0.0;
    for &x in sample.values() {
        sum_abs += (x - median).abs();
    }
    let scale_ml = sum_abs / n;
    let scale_mml = sum_abs / (n - 1.0);
    if !(scale_ml > 0.0) || !(scale_mml > 0.0) {
        return Err(EstimateError::DegenerateScale {
            model: Model::Laplace,
        });
    }
    Ok(FamilyEstimate {
        location: median,
        scale_ml,
        scale_mml,
    })
}

/// Dispatches to the family-specific estimator.
pub fn estimate_family(model: Model, sample: &Sample) -> Result<FamilyEstimate, EstimateError> {
    match model {
        Model::Normal => estimate_normal(sample),
        Model::Laplace => estimate_laplace(sample),
    }
}
