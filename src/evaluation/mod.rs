mod measurement;
mod running_stats;
mod selection_evaluator;
mod streaming_mean;
mod sweep_stats;

pub use measurement::Measurement;
pub use running_stats::RunningStats;
pub use selection_evaluator::SelectionEvaluator;
pub use streaming_mean::StreamingMean;
pub use sweep_stats::{SweepStatistics, WinnerTally};
