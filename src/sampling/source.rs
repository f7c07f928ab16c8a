use std::io::Error;

use crate::models::Model;

/// Pull-based producer of synthetic samples from one parametric family.
///
/// Implementations own their random generator, seeded once at
/// construction and never reseeded between draws, so consecutive batches
/// are independent. [`restart`] rewinds the stream to its initial state;
/// after a restart the same sequence of calls yields the same batches.
///
/// [`restart`]: SampleSource::restart
pub trait SampleSource {
    /// Family this source draws from.
    fn model(&self) -> Model;

    /// Draws `n` values from the family at the given location and scale.
    ///
    /// Returns an `InvalidInput` error when the scale is not strictly
    /// positive or the location is not finite; `n` is the caller's
    /// responsibility (experiment configs validate it up front).
    fn draw(&mut self, n: usize, location: f64, scale: f64) -> Result<Vec<f64>, Error>;

    /// Rewinds the generator to its initial seed.
    fn restart(&mut self);
}

pub(crate) fn check_draw_parameters(location: f64, scale: f64) -> Result<(), Error> {
    use std::io::ErrorKind;

    if !location.is_finite() {
        return Err(Error::new(
            ErrorKind::InvalidInput,
            "location must be finite",
        ));
    }
    if !scale.is_finite() || scale <= 0.0 {
        return Err(Error::new(
            ErrorKind::InvalidInput,
            "scale must be strictly positive",
        ));
    }
    Ok(())
}
