mod config;
mod driver;
mod trial_log;

pub use config::{ConfigError, ExperimentConfig};
pub use driver::{RandomizedDriver, SelectionReport, SweepDriver, SweepReport};
pub use trial_log::{LogFormat, TrialLog, TrialSummary};
