use thiserror::Error;

use crate::models::Model;

/// Failures of the estimation and encoding pipeline.
///
/// Each variant is unrecoverable for the trial that raised it. Drivers
/// catch them per trial, count the trial as failed, and continue the run.
#[derive(Debug, Error, PartialEq)]
pub enum EstimateError {
    #[error("sample must contain at least two values, got {0}")]
    TooFewSamples(usize),

    #[error("sample value at index {0} is not finite")]
    NonFiniteSample(usize),

    #[error("accuracy of measurement must be positive and finite, got {0}")]
    InvalidAom(f64),

    #[error("degenerate {model} fit: scale estimate is not strictly positive")]
    DegenerateScale { model: Model },

    #[error("predicted density at index {index} is not positive ({value})")]
    InvalidDensity { index: usize, value: f64 },
}
