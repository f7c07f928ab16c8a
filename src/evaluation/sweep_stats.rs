use serde::Serialize;

use crate::estimation::EstimatesRecord;
use crate::evaluation::{RunningStats, StreamingMean};
use crate::models::Winner;

/// Per-criterion tally of which model won across trials.
#[derive(Debug, Default, Clone, Copy, Serialize)]
pub struct WinnerTally {
    pub normal: u64,
    pub laplace: u64,
    pub draw: u64,
}

impl WinnerTally {
    pub fn record(&mut self, winner: Winner) {
        match winner {
            Winner::Normal => self.normal += 1,
            Winner::Laplace => self.laplace += 1,
            Winner::Draw => self.draw += 1,
        }
    }

    pub fn total(&self) -> u64 {
        self.normal + self.laplace + self.draw
    }
}

/// Accumulated estimator behavior for one experiment cell (one sample size
/// and one true scale, many iterations).
///
/// Location and scale accumulators measure bias and squared error against
/// the parameters used to synthesize the data; message-length means and
/// winner tallies summarize the model comparison itself. Updated strictly
/// sequentially within a cell's trial loop; cells are independent, so a
/// parallel run owns one instance per cell.
#[derive(Debug, Clone, Serialize)]
pub struct SweepStatistics {
    pub normal_location: RunningStats,
    pub laplace_location: RunningStats,
    pub normal_scale_ml: RunningStats,
    pub normal_scale_mml: RunningStats,
    pub laplace_scale_ml: RunningStats,
    pub laplace_scale_mml: RunningStats,
    pub normal_message_length: StreamingMean,
    pub laplace_message_length: StreamingMean,
    pub likelihood_wins: WinnerTally,
    pub message_length_wins: WinnerTally,
    pub trials: u64,
    pub failed_trials: u64,
}

impl SweepStatistics {
    pub fn new(true_location: f64, true_scale: f64) -> Self {
        Self {
            normal_location: RunningStats::new(true_location),
            laplace_location: RunningStats::new(true_location),
            normal_scale_ml: RunningStats::new(true_scale),
            normal_scale_mml: RunningStats::new(true_scale),
            laplace_scale_ml: RunningStats::new(true_scale),
            laplace_scale_mml: RunningStats::new(true_scale),
            normal_message_length: StreamingMean::default(),
            laplace_message_length: StreamingMean::default(),
            likelihood_wins: WinnerTally::default(),
            message_length_wins: WinnerTally::default(),
            trials: 0,
            failed_trials: 0,
        }
    }

    /// Feeds one completed trial's record.
    pub fn update(&mut self, record: &EstimatesRecord) {
        self.trials += 1;

        self.normal_location.update(record.normal.estimate.location);
        self.laplace_location
            .update(record.laplace.estimate.location);
        self.normal_scale_ml.update(record.normal.estimate.scale_ml);
        self.normal_scale_mml
            .update(record.normal.estimate.scale_mml);
        self.laplace_scale_ml
            .update(record.laplace.estimate.scale_ml);
        self.laplace_scale_mml
            .update(record.laplace.estimate.scale_mml);

        self.normal_message_length.add(record.normal.message_length);
        self.laplace_message_length
            .add(record.laplace.message_length);

        self.likelihood_wins.record(record.winner_likelihood);
        self.message_length_wins.record(record.winner_message_length);
    }

    /// Counts a trial whose estimation failed; it contributes to no
    /// accumulator.
    pub fn record_failure(&mut self) {
        self.trials += 1;
        self.failed_trials += 1;
    }

    pub fn completed_trials(&self) -> u64 {
        self.trials - self.failed_trials
    }
}
