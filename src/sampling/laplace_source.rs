use std::io::Error;

use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;

use crate::models::Model;
use crate::sampling::source::{SampleSource, check_draw_parameters};

/// Seeded source of Laplace samples.
///
/// Uses the inverse-cdf transform: with `u` uniform on `(-1/2, 1/2)`,
/// `mu - b * sign(u) * ln(1 - 2|u|)` is Laplace(mu, b).
#[derive(Debug)]
pub struct LaplaceSource {
    seed: u64,
    rng: StdRng,
}

impl LaplaceSource {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl SampleSource for LaplaceSource {
    fn model(&self) -> Model {
        Model::Laplace
    }

    fn draw(&mut self, n: usize, location: f64, scale: f64) -> Result<Vec<f64>, Error> {
        check_draw_parameters(location, scale)?;
        let mut values = Vec::with_capacity(n);
        for _ in 0..n {
            // Open interval: u = -1/2 would send the log argument to zero.
            let u: f64 = loop {
                let r: f64 = self.rng.random();
                if r > 0.0 {
                    break r - 0.5;
                }
            };
            values.push(location - scale * u.signum() * (1.0 - 2.0 * u.abs()).ln());
        }
        Ok(values)
    }

    fn restart(&mut self) {
        self.rng = StdRng::seed_from_u64(self.seed);
    }
}
