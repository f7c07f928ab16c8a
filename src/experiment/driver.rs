use std::io::Error;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::core::Quantizer;
use crate::estimation::message::{RANGE_MU, SCALE_MAX, SCALE_MIN};
use crate::estimation::estimate;
use crate::evaluation::{SelectionEvaluator, SweepStatistics};
use crate::experiment::config::{ConfigError, ExperimentConfig};
use crate::experiment::trial_log::{TrialLog, TrialSummary};
use crate::models::Model;
use crate::sampling::{LaplaceSource, NormalSource, SampleSource};

/// Results of one experiment cell: one sample size, one true scale.
#[derive(Debug)]
pub struct SweepReport {
    pub n: usize,
    pub true_scale: f64,
    pub statistics: SweepStatistics,
    pub log: TrialLog,
}

/// Monte Carlo sweep with a fixed generating family.
///
/// For every sample size and scale value in the configuration, runs the
/// configured number of iterations: draw a sample, snap it to the
/// measurement grid, run the estimation pipeline, and feed the outcome to
/// the cell's statistics and log. A trial whose estimation fails (for
/// example when quantization collapses a tight sample onto a single grid
/// point) is counted as failed and excluded; it does not abort the run.
pub struct SweepDriver {
    config: ExperimentConfig,
    source: Box<dyn SampleSource>,
    quantizer: Quantizer,
}

impl SweepDriver {
    pub fn new(config: ExperimentConfig, source: Box<dyn SampleSource>) -> Result<Self, ConfigError> {
        config.validate()?;
        let quantizer =
            Quantizer::new(config.aom).map_err(|_| ConfigError::InvalidAom(config.aom))?;
        Ok(Self {
            config,
            source,
            quantizer,
        })
    }

    /// Family the samples are drawn from.
    pub fn model(&self) -> Model {
        self.source.model()
    }

    pub fn run(&mut self) -> Result<Vec<SweepReport>, Error> {
        self.source.restart();
        let mut reports = Vec::new();
        for &n in &self.config.sample_sizes {
            for &scale in &self.config.scales {
                let mut statistics = SweepStatistics::new(self.config.location, scale);
                let mut log = TrialLog::default();
                for iteration in 1..=self.config.iterations {
                    let raw = self.source.draw(n, self.config.location, scale)?;
                    let gridded = self.quantizer.apply_all(&raw);
                    match estimate(&gridded, self.config.aom) {
                        Ok(record) => {
                            statistics.update(&record);
                            log.push(TrialSummary::from_record(
                                iteration,
                                Some(self.source.model()),
                                self.config.location,
                                scale,
                                &record,
                            ));
                        }
                        Err(_) => statistics.record_failure(),
                    }
                }
                reports.push(SweepReport {
                    n,
                    true_scale: scale,
                    statistics,
                    log,
                });
            }
        }
        Ok(reports)
    }
}

/// Results of a randomized-truth experiment.
#[derive(Debug)]
pub struct SelectionReport {
    pub evaluator: SelectionEvaluator,
    pub log: TrialLog,
}

/// Monte Carlo experiment where the generating family itself is random.
///
/// Each trial flips a fair coin between the two families, draws the
/// location uniformly over the coder's location prior and the scale
/// log-uniformly over its scale prior, then checks whether each criterion
/// recovers the family that actually produced the data. All randomness
/// flows from one owned generator seeded at construction.
pub struct RandomizedDriver {
    trials: u64,
    sample_size: usize,
    aom: f64,
    seed: u64,
    rng: StdRng,
    normal: NormalSource,
    laplace: LaplaceSource,
    quantizer: Quantizer,
}

impl RandomizedDriver {
    pub fn new(trials: u64, sample_size: usize, aom: f64, seed: u64) -> Result<Self, ConfigError> {
        if trials == 0 {
            return Err(ConfigError::ZeroIterations);
        }
        if sample_size < 2 {
            return Err(ConfigError::SampleSizeTooSmall(sample_size));
        }
        let quantizer = Quantizer::new(aom).map_err(|_| ConfigError::InvalidAom(aom))?;
        Ok(Self {
            trials,
            sample_size,
            aom,
            seed,
            rng: StdRng::seed_from_u64(seed),
            // Distinct derived seeds keep the three streams independent.
            normal: NormalSource::new(seed.wrapping_add(1)),
            laplace: LaplaceSource::new(seed.wrapping_add(2)),
            quantizer,
        })
    }

    pub fn restart(&mut self) {
        self.rng = StdRng::seed_from_u64(self.seed);
        self.normal.restart();
        self.laplace.restart();
    }

    pub fn run(&mut self) -> Result<SelectionReport, Error> {
        let mut evaluator = SelectionEvaluator::new();
        let mut log = TrialLog::default();
        for iteration in 1..=self.trials {
            let truth = if self.rng.random_bool(0.5) {
                Model::Normal
            } else {
                Model::Laplace
            };
            let location = self.rng.random_range(-RANGE_MU / 2.0..RANGE_MU / 2.0);
            let scale = self
                .rng
                .random_range(SCALE_MIN.ln()..SCALE_MAX.ln())
                .exp();

            let source: &mut dyn SampleSource = match truth {
                Model::Normal => &mut self.normal,
                Model::Laplace => &mut self.laplace,
            };
            let raw = source.draw(self.sample_size, location, scale)?;
            let gridded = self.quantizer.apply_all(&raw);
            match estimate(&gridded, self.aom) {
                Ok(record) => {
                    evaluator.add_trial(truth, &record);
                    log.push(TrialSummary::from_record(
                        iteration,
                        Some(truth),
                        location,
                        scale,
                        &record,
                    ));
                }
                Err(_) => evaluator.record_failure(),
            }
        }
        Ok(SelectionReport { evaluator, log })
    }
}
