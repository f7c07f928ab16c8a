use crate::models::Model;

/// Capability interface of a fitted distribution.
///
/// Both candidate families expose their probability density, its logarithm,
/// and the cumulative distribution function. The trait is deliberately
/// small: estimation and encoding live elsewhere and dispatch on
/// [`Model`], so a `Family` value is only ever a (location, scale) pair
/// with the mathematics attached.
pub trait Family {
    fn model(&self) -> Model;

    fn location(&self) -> f64;

    fn scale(&self) -> f64;

    /// Probability density at `x`. Strictly positive for finite `x` when
    /// the scale is positive.
    fn density(&self, x: f64) -> f64;

    /// Natural log of the density, computed in closed form rather than by
    /// taking `density(x).ln()`, so extreme deviations do not underflow.
    fn log_density(&self, x: f64) -> f64;

    /// Cumulative distribution function at `x`.
    fn cdf(&self, x: f64) -> f64;

    /// Density evaluated over a sequence of points.
    fn density_profile(&self, xs: &[f64]) -> Vec<f64> {
        xs.iter().map(|&x| self.density(x)).collect()
    }
}
