use std::f64::consts::TAU;

use crate::models::{Family, Model};
use crate::utils::math;

/// Normal distribution with mean `mu` and standard deviation `sigma`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Normal {
    mu: f64,
    sigma: f64,
}

impl Normal {
    /// `sigma` must be strictly positive; fitted values come from the
    /// estimator, which guarantees it.
    pub fn new(mu: f64, sigma: f64) -> Self {
        debug_assert!(sigma > 0.0, "sigma must be positive, got {sigma}");
        Self { mu, sigma }
    }
}

impl Family for Normal {
    fn model(&self) -> Model {
        Model::Normal
    }

    fn location(&self) -> f64 {
        self.mu
    }

    fn scale(&self) -> f64 {
        self.sigma
    }

    fn density(&self, x: f64) -> f64 {
        let z = (x - self.mu) / self.sigma;
        (-0.5 * z * z).exp() / (TAU.sqrt() * self.sigma)
    }

    fn log_density(&self, x: f64) -> f64 {
        let z = (x - self.mu) / self.sigma;
        -0.5 * z * z - 0.5 * TAU.ln() - self.sigma.ln()
    }

    fn cdf(&self, x: f64) -> f64 {
        math::normal_probability((x - self.mu) / self.sigma)
    }
}
