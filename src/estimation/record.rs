use serde::Serialize;

use crate::core::Sample;
use crate::estimation::estimator::{FamilyEstimate, estimate_laplace, estimate_normal};
use crate::estimation::message::{laplace_message_length, log_likelihood, normal_message_length};
use crate::estimation::selector::{higher_likelihood, shorter_message};
use crate::estimation::EstimateError;
use crate::models::{Family, Laplace, Normal, Winner};

/// One family's complete fit for one sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ModelFit {
    pub estimate: FamilyEstimate,
    /// Log-likelihood of the sample under the maximum-likelihood fit.
    pub log_likelihood: f64,
    /// Encoded length in bits under the adjusted fit.
    pub message_length: f64,
}

/// Immutable outcome of one estimation run: both families' fits plus the
/// winner under each criterion. The criteria are computed independently
/// and may disagree; a disagreement is a result, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EstimatesRecord {
    pub n: usize,
    pub aom: f64,
    pub normal: ModelFit,
    pub laplace: ModelFit,
    pub winner_likelihood: Winner,
    pub winner_message_length: Winner,
}

impl EstimatesRecord {
    /// Message-length gap in bits, laplace minus normal. Positive values
    /// favor the Normal model.
    pub fn message_length_gap(&self) -> f64 {
        self.laplace.message_length - self.normal.message_length
    }
}

/// Runs the full pipeline on raw values measured to accuracy `aom`:
/// validate and sort, estimate both families, score both likelihoods,
/// encode both message lengths, and select the winners.
///
/// Values are expected to already lie on the accuracy-of-measurement grid;
/// apply [`crate::core::Quantizer`] first when they do not.
pub fn estimate(raw: &[f64], aom: f64) -> Result<EstimatesRecord, EstimateError> {
    let sample = Sample::prepare(raw, aom)?;
    estimate_sample(&sample)
}

/// Same as [`estimate`] for a sample that is already validated and sorted.
pub fn estimate_sample(sample: &Sample) -> Result<EstimatesRecord, EstimateError> {
    let normal_est = estimate_normal(sample)?;
    let laplace_est = estimate_laplace(sample)?;

    let normal_ml = Normal::new(normal_est.location, normal_est.scale_ml);
    let laplace_ml = Laplace::new(laplace_est.location, laplace_est.scale_ml);
    let normal_ll = log_likelihood(&normal_ml.density_profile(sample.values()))?;
    let laplace_ll = log_likelihood(&laplace_ml.density_profile(sample.values()))?;

    let normal_bits = normal_message_length(sample.len(), normal_est.scale_mml, sample.aom())?;
    let laplace_bits = laplace_message_length(sample.len(), laplace_est.scale_mml, sample.aom())?;

    Ok(EstimatesRecord {
        n: sample.len(),
        aom: sample.aom(),
        normal: ModelFit {
            estimate: normal_est,
            log_likelihood: normal_ll,
            message_length: normal_bits,
        },
        laplace: ModelFit {
            estimate: laplace_est,
            log_likelihood: laplace_ll,
            message_length: laplace_bits,
        },
        winner_likelihood: higher_likelihood(normal_ll, laplace_ll),
        winner_message_length: shorter_message(normal_bits, laplace_bits),
    })
}
