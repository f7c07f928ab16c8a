use std::io::{Error, ErrorKind};

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand_distr::Distribution;

use crate::models::Model;
use crate::sampling::source::{SampleSource, check_draw_parameters};

/// Seeded source of Gaussian samples.
#[derive(Debug)]
pub struct NormalSource {
    seed: u64,
    rng: StdRng,
}

impl NormalSource {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl SampleSource for NormalSource {
    fn model(&self) -> Model {
        Model::Normal
    }

    fn draw(&mut self, n: usize, location: f64, scale: f64) -> Result<Vec<f64>, Error> {
        check_draw_parameters(location, scale)?;
        let dist = rand_distr::Normal::new(location, scale)
            .map_err(|e| Error::new(ErrorKind::InvalidInput, e))?;
        Ok((0..n).map(|_| dist.sample(&mut self.rng)).collect())
    }

    fn restart(&mut self) {
        self.rng = StdRng::seed_from_u64(self.seed);
    }
}
