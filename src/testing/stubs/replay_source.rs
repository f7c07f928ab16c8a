use std::io::Error;

use crate::models::Model;
use crate::sampling::SampleSource;

/// Deterministic sample source that replays canned batches in order,
/// cycling when exhausted. Draw parameters are ignored, which lets tests
/// pin the exact values a driver sees.
#[derive(Debug, Clone)]
pub struct ReplaySource {
    model: Model,
    batches: Vec<Vec<f64>>,
    cursor: usize,
}

impl ReplaySource {
    /// `batches` must be non-empty.
    pub fn new(model: Model, batches: Vec<Vec<f64>>) -> Self {
        assert!(!batches.is_empty(), "ReplaySource needs at least one batch");
        Self {
            model,
            batches,
            cursor: 0,
        }
    }
}

impl SampleSource for ReplaySource {
    fn model(&self) -> Model {
        self.model
    }

    fn draw(&mut self, _n: usize, _location: f64, _scale: f64) -> Result<Vec<f64>, Error> {
        let batch = self.batches[self.cursor % self.batches.len()].clone();
        self.cursor += 1;
        Ok(batch)
    }

    fn restart(&mut self) {
        self.cursor = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replays_batches_in_order_and_cycles() {
        let mut s = ReplaySource::new(Model::Laplace, vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
        assert_eq!(s.model(), Model::Laplace);
        assert_eq!(s.draw(2, 0.0, 1.0).unwrap(), vec![1.0, 2.0]);
        assert_eq!(s.draw(2, 0.0, 1.0).unwrap(), vec![3.0, 4.0]);
        assert_eq!(s.draw(2, 0.0, 1.0).unwrap(), vec![1.0, 2.0]);
    }

    #[test]
    fn restart_rewinds_to_the_first_batch() {
        let mut s = ReplaySource::new(Model::Normal, vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
        s.draw(2, 0.0, 1.0).unwrap();
        s.restart();
        assert_eq!(s.draw(2, 0.0, 1.0).unwrap(), vec![1.0, 2.0]);
    }
}
