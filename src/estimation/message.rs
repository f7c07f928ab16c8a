//! Wallace-Freeman two-part code lengths for the two candidate families.
//!
//! The first part names the fitted model inside a fixed prior box; the
//! second part pays for the data given the model, with the sample treated
//! as measured to a finite accuracy. Lengths are returned in bits.
//!
//! The prior box is a versioned convention shared by both encoders and by
//! the randomized experiment driver: the location lives in
//! `[-RANGE_MU/2, RANGE_MU/2]` and the scale in `[SCALE_MIN, SCALE_MAX]`
//! with a log-uniform prior. Changing any of these constants changes every
//! message length, so they are defined once here.

use std::f64::consts::{LN_2, TAU};

use crate::estimation::EstimateError;
use crate::models::Model;

/// Width of the location prior (support `[-5, 5]`).
pub const RANGE_MU: f64 = 10.0;

/// Lower bound of the scale prior.
pub const SCALE_MIN: f64 = 0.1;

/// Upper bound of the scale prior.
pub const SCALE_MAX: f64 = 10.0;

/// Width of the log-scale prior, `ln(SCALE_MAX) - ln(SCALE_MIN)`.
pub fn scale_log_range() -> f64 {
    SCALE_MAX.ln() - SCALE_MIN.ln()
}

/// Two-parameter optimal quantizing lattice constant, `5 / (36 sqrt(3))`.
fn lattice_constant() -> f64 {
    5.0 / (36.0 * 3.0f64.sqrt())
}

fn check_inputs(n: usize, scale_mml: f64, aom: f64, model: Model) -> Result<(), EstimateError> {
    if n < 2 {
        return Err(EstimateError::TooFewSamples(n));
    }
    if !aom.is_finite() || aom <= 0.0 {
        return Err(EstimateError::InvalidAom(aom));
    }
    if !scale_mml.is_finite() || scale_mml <= 0.0 {
        return Err(EstimateError::DegenerateScale { model });
    }
    Ok(())
}

/// Message length in bits of `n` values encoded with a Normal model whose
/// adjusted scale estimate is `sigma_mml`, measured to accuracy `aom`.
pub fn normal_message_length(n: usize, sigma_mml: f64, aom: f64) -> Result<f64, EstimateError> {
    check_inputs(n, sigma_mml, aom, Model::Normal)?;
    let nf = n as f64;
    let part1 = lattice_constant().ln()
        + RANGE_MU.ln()
        + scale_log_range().ln()
        + 0.5 * LN_2
        + nf.ln()
        - sigma_mml.ln();
    let part2 = 0.5 * nf * TAU.ln() - nf * aom.ln() + 0.5 * (nf + 1.0) + nf * sigma_mml.ln();
    Ok((part1 + part2) / LN_2)
}

/// Message length in bits of `n` values encoded with a Laplace model whose
/// adjusted scale estimate is `b_mml`, measured to accuracy `aom`.
pub fn laplace_message_length(n: usize, b_mml: f64, aom: f64) -> Result<f64, EstimateError> {
    check_inputs(n, b_mml, aom, Model::Laplace)?;
    let nf = n as f64;
    let part1 =
        lattice_constant().ln() + RANGE_MU.ln() + scale_log_range().ln() + nf.ln() - b_mml.ln();
    let part2 = nf * (2.0 / aom).ln() + nf * b_mml.ln() + nf;
    Ok((part1 + part2) / LN_2)
}

/// Dispatches to the family-specific encoder.
pub fn message_length(
    model: Model,
    n: usize,
    scale_mml: f64,
    aom: f64,
) -> Result<f64, EstimateError> {
    match model {
        Model::Normal => normal_message_length(n, scale_mml, aom),
        Model::Laplace => laplace_message_length(n, scale_mml, aom),
    }
}

/// Sum of log densities over a predicted-density profile.
///
/// A non-positive density indicates a modeling bug upstream and is
/// reported as [`EstimateError::InvalidDensity`] rather than silently
/// producing `-inf`.
pub fn log_likelihood(densities: &[f64]) -> Result<f64, EstimateError> {
    let mut sum = 0.0;
    for (index, &value) in densities.iter().enumerate() {
        if !(value > 0.0) || !value.is_finite() {
            return Err(EstimateError::InvalidDensity { index, value });
        }
        sum += value.ln();
    }
    Ok(sum)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() <= eps
    }

    #[test]
    fn five_point_fixture_lengths_are_pinned() {
        // n=5, sigma_mml=sqrt(2.5), b_mml=1.5, aom=0.001.
        let normal = normal_message_length(5, 2.5f64.sqrt(), 0.001).unwrap();
        let laplace = laplace_message_length(5, 1.5, 0.001).unwrap();
        assert!(approx_eq(normal, 68.13624, 1e-3), "normal={normal}");
        assert!(approx_eq(laplace, 68.58888, 1e-3), "laplace={laplace}");
        assert!(normal < laplace);
    }

    #[test]
    fn lengths_are_positive_and_finite() {
        for (n, scale, aom) in [(2, 0.5, 0.01), (10, 1.0, 0.001), (5000, 9.9, 0.001)] {
            let normal = normal_message_length(n, scale, aom).unwrap();
            assert!(normal.is_finite() && normal > 0.0, "normal n={n}");
            let laplace = laplace_message_length(n, scale, aom).unwrap();
            assert!(laplace.is_finite() && laplace > 0.0, "laplace n={n}");
        }
    }

    #[test]
    fn data_cost_grows_with_sample_size() {
        let small = normal_message_length(10, 1.0, 0.001).unwrap();
        let large = normal_message_length(1000, 1.0, 0.001).unwrap();
        assert!(large > small);
    }

    #[test]
    fn zero_scale_is_rejected() {
        assert_eq!(
            normal_message_length(5, 0.0, 0.001),
            Err(EstimateError::DegenerateScale {
                model: Model::Normal
            })
        );
        assert_eq!(
            laplace_message_length(5, 0.0, 0.001),
            Err(EstimateError::DegenerateScale {
                model: Model::Laplace
            })
        );
    }

    #[test]
    fn invalid_aom_and_tiny_samples_are_rejected() {
        assert_eq!(
            normal_message_length(5, 1.0, 0.0),
            Err(EstimateError::InvalidAom(0.0))
        );
        assert_eq!(
            laplace_message_length(1, 1.0, 0.001),
            Err(EstimateError::TooFewSamples(1))
        );
    }

    #[test]
    fn log_likelihood_sums_log_densities() {
        let ll = log_likelihood(&[1.0, 0.5, 0.25]).unwrap();
        assert!(approx_eq(ll, 0.5f64.ln() + 0.25f64.ln(), 1e-12));
        assert_eq!(log_likelihood(&[]).unwrap(), 0.0);
    }

    #[test]
    fn log_likelihood_rejects_non_positive_density() {
        assert_eq!(
            log_likelihood(&[0.5, 0.0, 0.1]),
            Err(EstimateError::InvalidDensity {
                index: 1,
                value: 0.0
            })
        );
        assert!(matches!(
            log_likelihood(&[0.5, -0.2]),
            Err(EstimateError::InvalidDensity { index: 1, .. })
        ));
        assert!(matches!(
            log_likelihood(&[f64::NAN]),
            Err(EstimateError::InvalidDensity { index: 0, .. })
        ));
    }

    #[test]
    fn dispatch_matches_direct_encoders() {
        assert_eq!(
            message_length(Model::Normal, 5, 1.5, 0.001),
            normal_message_length(5, 1.5, 0.001)
        );
        assert_eq!(
            message_length(Model::Laplace, 5, 1.5, 0.001),
            laplace_message_length(5, 1.5, 0.001)
        );
    }

    #[test]
    fn scale_log_range_matches_prior_bounds() {
        assert!(approx_eq(scale_log_range(), 100.0f64.ln(), 1e-12));
    }
}
