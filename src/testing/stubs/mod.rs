mod replay_source;

pub use replay_source::ReplaySource;
