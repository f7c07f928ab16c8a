use crate::models::{Family, Model};

/// Laplace distribution with location `mu` and scale `b`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Laplace {
    mu: f64,
    b: f64,
}

impl Laplace {
    /// `b` must be strictly positive; fitted values come from the
    /// estimator, which guarantees it.
    pub fn new(mu: f64, b: f64) -> Self {
        debug_assert!(b > 0.0, "scale must be positive, got {b}");
        Self { mu, b }
    }
}

impl Family for Laplace {
    fn model(&self) -> Model {
        Model::Laplace
    }

    fn location(&self) -> f64 {
        self.mu
    }

    fn scale(&self) -> f64 {
        self.b
    }

    fn density(&self, x: f64) -> f64 {
        (-(x - self.mu).abs() / self.b).exp() / (2.0 * self.b)
    }

    fn log_density(&self, x: f64) -> f64 {
        -(x - self.mu).abs() / self.b - (2.0 * self.b).ln()
    }

    fn cdf(&self, x: f64) -> f64 {
        let z = (x - self.mu) / self.b;
        if z < 0.0 {
            0.5 * z.exp()
        } else {
            1.0 - 0.5 * (-z).exp()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() <= eps
    }

    #[test]
    fn density_peaks_at_the_location() {
        let d = Laplace::new(3.0, 1.2);
        assert!(approx_eq(d.density(3.0), 1.0 / 2.4, EPS));
        assert!(d.density(3.0) > d.density(2.0));
        assert!(approx_eq(d.density(2.0), d.density(4.0), EPS));
    }

    #[test]
    fn log_density_matches_density_logarithm() {
        let d = Laplace::new(-1.0, 0.7);
        for x in [-4.0, -1.0, 0.0, 3.0] {
            assert!(approx_eq(d.log_density(x), d.density(x).ln(), 1e-12));
        }
    }

    #[test]
    fn log_density_survives_extreme_deviations() {
        let d = Laplace::new(0.0, 1.0);
        assert_eq!(d.density(1000.0), 0.0);
        assert!(d.log_density(1000.0).is_finite());
    }

    #[test]
    fn cdf_has_half_mass_at_the_location() {
        let d = Laplace::new(1.0, 2.0);
        assert!(approx_eq(d.cdf(1.0), 0.5, EPS));
        assert!(d.cdf(0.0) < 0.5);
        assert!(d.cdf(2.0) > 0.5);
        assert!(approx_eq(d.cdf(0.0) + (1.0 - d.cdf(2.0)), 2.0 * d.cdf(0.0), EPS));
    }

    #[test]
    fn cdf_tails_approach_zero_and_one() {
        let d = Laplace::new(0.0, 0.5);
        assert!(d.cdf(-20.0) < 1e-15);
        assert!(d.cdf(20.0) > 1.0 - 1e-15);
    }
}
