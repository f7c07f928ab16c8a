use serde::Serialize;

/// Online accumulator for one estimator against a known ground truth.
///
/// Tracks count, running mean, min, max, and the mean squared error
/// relative to `true_value`, updated incrementally so memory stays bounded
/// regardless of how many trials an experiment runs. After `n` updates the
/// mean equals the batch mean of the observed values exactly (up to
/// floating-point accumulation), which the tests verify by recomputation.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RunningStats {
    true_value: f64,
    n: u64,
    mean: f64,
    min: f64,
    max: f64,
    mse: f64,
}

impl RunningStats {
    pub fn new(true_value: f64) -> Self {
        Self {
            true_value,
            n: 0,
            mean: 0.0,
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
            mse: 0.0,
        }
    }

    /// Incorporates one observation.
    ///
    /// The first update initializes mean, min, and max to the value and the
    /// squared-error accumulator to `(value - true_value)^2`; later updates
    /// apply the incremental rule `mean' = ((n-1) mean + v) / n` and its
    /// squared-error counterpart.
    pub fn update(&mut self, value: f64) {
        self.n += 1;
        let n = self.n as f64;
        let error = value - self.true_value;
        self.mean = ((n - 1.0) * self.mean + value) / n;
        self.mse = ((n - 1.0) * self.mse + error * error) / n;
        if value < self.min {
            self.min = value;
        }
        if value > self.max {
            self.max = value;
        }
    }

    #[inline]
    pub fn count(&self) -> u64 {
        self.n
    }

    #[inline]
    pub fn true_value(&self) -> f64 {
        self.true_value
    }

    pub fn mean(&self) -> f64 {
        if self.n > 0 { self.mean } else { f64::NAN }
    }

    pub fn min(&self) -> f64 {
        if self.n > 0 { self.min } else { f64::NAN }
    }

    pub fn max(&self) -> f64 {
        if self.n > 0 { self.max } else { f64::NAN }
    }

    /// Mean squared error against the ground truth.
    pub fn mse(&self) -> f64 {
        if self.n > 0 { self.mse } else { f64::NAN }
    }

    /// Bias of the estimator: running mean minus ground truth.
    pub fn bias(&self) -> f64 {
        self.mean() - self.true_value
    }
}
