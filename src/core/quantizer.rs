use crate::estimation::EstimateError;

/// Accuracy-of-measurement grid.
///
/// Real instruments report values to a finite precision; the message-length
/// formulas treat each datum as an interval of width `aom`. This type snaps
/// raw values onto that grid by truncating `value / aom` toward zero and
/// rescaling, matching how synthetic data is produced and how externally
/// supplied measurements are normalized before estimation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quantizer {
    aom: f64,
}

impl Quantizer {
    /// Grid width must be strictly positive and finite.
    pub fn new(aom: f64) -> Result<Self, EstimateError> {
        if !aom.is_finite() || aom <= 0.0 {
            return Err(EstimateError::InvalidAom(aom));
        }
        Ok(Self { aom })
    }

    #[inline]
    pub fn aom(&self) -> f64 {
        self.aom
    }

    /// Snaps a single value onto the grid.
    #[inline]
    pub fn apply(&self, value: f64) -> f64 {
        (value / self.aom).trunc() * self.aom
    }

    /// Snaps every value in `values`, returning a new vector.
    pub fn apply_all(&self, values: &[f64]) -> Vec<f64> {
        values.iter().map(|&v| self.apply(v)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_positive_or_non_finite_width() {
        assert!(matches!(
            Quantizer::new(0.0),
            Err(EstimateError::InvalidAom(_))
        ));
        assert!(matches!(
            Quantizer::new(-0.001),
            Err(EstimateError::InvalidAom(_))
        ));
        assert!(matches!(
            Quantizer::new(f64::NAN),
            Err(EstimateError::InvalidAom(_))
        ));
        assert!(matches!(
            Quantizer::new(f64::INFINITY),
            Err(EstimateError::InvalidAom(_))
        ));
    }

    #[test]
    fn truncates_toward_zero() {
        let q = Quantizer::new(0.5).unwrap();
        assert_eq!(q.apply(2.7), 2.5);
        assert_eq!(q.apply(2.499), 2.0);
        assert_eq!(q.apply(-2.7), -2.5);
        assert_eq!(q.apply(0.3), 0.0);
        assert_eq!(q.apply(-0.3), 0.0);
    }

    #[test]
    fn exact_multiples_are_fixed_points() {
        let q = Quantizer::new(0.25).unwrap();
        for v in [-3.0, -0.75, 0.0, 0.25, 1.5, 10.0] {
            assert_eq!(q.apply(v), v);
        }
    }

    #[test]
    fn requantizing_is_idempotent() {
        let q = Quantizer::new(0.25).unwrap();
        for v in [1.37, -2.61, 0.124, 9.99, -0.001] {
            let once = q.apply(v);
            assert_eq!(q.apply(once), once, "v={v}");
        }
    }

    #[test]
    fn apply_all_preserves_length_and_order() {
        let q = Quantizer::new(1.0).unwrap();
        let got = q.apply_all(&[1.9, -1.9, 3.2]);
        assert_eq!(got, vec![1.0, -1.0, 3.0]);
    }
}
