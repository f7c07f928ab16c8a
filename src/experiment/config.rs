use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::estimation::message::{RANGE_MU, SCALE_MAX, SCALE_MIN};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("at least one sample size is required")]
    NoSampleSizes,

    #[error("sample size must be at least 2, got {0}")]
    SampleSizeTooSmall(usize),

    #[error("at least one scale value is required")]
    NoScales,

    #[error("scale {value} lies outside the coder prior [{min}, {max}]")]
    ScaleOutsidePrior { value: f64, min: f64, max: f64 },

    #[error("location {value} lies outside the coder prior [{min}, {max}]")]
    LocationOutsidePrior { value: f64, min: f64, max: f64 },

    #[error("iteration count must be at least 1")]
    ZeroIterations,

    #[error("accuracy of measurement must be positive and finite, got {0}")]
    InvalidAom(f64),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Parse(#[from] serde_json::Error),
}

/// Parameters of one Monte Carlo experiment.
///
/// The sweep runs every sample size against every scale value for
/// `iterations` trials each. Locations and scales must sit inside the
/// coder's prior box, otherwise the model-naming cost of the message
/// lengths would not be coherent with the data; validation rejects such
/// configurations up front instead of letting the run produce numbers
/// that look plausible and mean nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentConfig {
    pub sample_sizes: Vec<usize>,
    pub location: f64,
    pub scales: Vec<f64>,
    pub iterations: u64,
    pub aom: f64,
    pub seed: u64,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            sample_sizes: vec![100],
            location: 0.0,
            scales: vec![1.0],
            iterations: 1,
            aom: 0.001,
            seed: 1000,
        }
    }
}

impl ExperimentConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sample_sizes.is_empty() {
            return Err(ConfigError::NoSampleSizes);
        }
        if let Some(&n) = self.sample_sizes.iter().find(|&&n| n < 2) {
            return Err(ConfigError::SampleSizeTooSmall(n));
        }
        if self.scales.is_empty() {
            return Err(ConfigError::NoScales);
        }
        if let Some(&s) = self
            .scales
            .iter()
            .find(|&&s| !s.is_finite() || s < SCALE_MIN || s > SCALE_MAX)
        {
            return Err(ConfigError::ScaleOutsidePrior {
                value: s,
                min: SCALE_MIN,
                max: SCALE_MAX,
            });
        }
        let half_range = RANGE_MU / 2.0;
        if !self.location.is_finite() || self.location.abs() > half_range {
            return Err(ConfigError::LocationOutsidePrior {
                value: self.location,
                min: -half_range,
                max: half_range,
            });
        }
        if self.iterations == 0 {
            return Err(ConfigError::ZeroIterations);
        }
        if !self.aom.is_finite() || self.aom <= 0.0 {
            return Err(ConfigError::InvalidAom(self.aom));
        }
        Ok(())
    }

    /// Loads and validates a configuration from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let text = serde_json::to_string_pretty(self)?;
        fs::write(path, text)?;
        Ok(())
    }
}
