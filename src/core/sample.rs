use crate::core::sorting;
use crate::estimation::EstimateError;
use crate::utils::math;

/// A validated batch of measurements, sorted ascending.
///
/// Invariants held after construction: at least two values, every value
/// finite, `aom > 0`. Values are assumed to already lie on the
/// accuracy-of-measurement grid; see [`crate::core::Quantizer`] for the
/// boundary tool that puts raw data there. The estimation pipeline consumes
/// samples read-only.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    values: Vec<f64>,
    aom: f64,
}

impl Sample {
    /// Validates and sorts `raw`. The caller's slice is untouched.
    pub fn prepare(raw: &[f64], aom: f64) -> Result<Self, EstimateError> {
        if !aom.is_finite() || aom <= 0.0 {
            return Err(EstimateError::InvalidAom(aom));
        }
        if raw.len() < 2 {
            return Err(EstimateError::TooFewSamples(raw.len()));
        }
        if let Some(i) = raw.iter().position(|v| !v.is_finite()) {
            return Err(EstimateError::NonFiniteSample(i));
        }
        Ok(Self {
            values: sorting::sorted_copy(raw),
            aom,
        })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn aom(&self) -> f64 {
        self.aom
    }

    /// Values in ascending order.
    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn mean(&self) -> f64 {
        math::mean(&self.values)
    }

    pub fn median(&self) -> f64 {
        math::median_of_sorted(&self.values)
    }
}
