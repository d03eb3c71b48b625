// src/io/demand.rs

use crate::error::{SimResult, SimulationError};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Poisson};

/// Mean daily demand of the reference configuration.
pub const DEFAULT_DEMAND_MEAN: f64 = 20.0;

/// Draws daily demand from a Poisson distribution.
///
/// The generator owns its RNG, so two generators built from the same seed
/// produce identical sequences no matter what else runs in the process.
#[derive(Debug, Clone)]
pub struct DemandGenerator {
    rng: ChaCha8Rng,
    distribution: Poisson<f64>,
}

impl DemandGenerator {
    /// # Arguments
    /// * `seed` - Seed for the internal RNG.
    /// * `mean` - Poisson rate (expected units per day), must be > 0.
    pub fn new(seed: u64, mean: f64) -> SimResult<Self> {
        let distribution =
            Poisson::new(mean).map_err(|e| SimulationError::Distribution(e.to_string()))?;
        Ok(Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            distribution,
        })
    }

    /// Generates a demand schedule of `days` independent draws.
    pub fn generate(&mut self, days: usize) -> SimResult<Vec<u32>> {
        if days < 1 {
            return Err(SimulationError::invalid("days", "must be at least 1"));
        }

        let schedule = (0..days)
            .map(|_| {
                // Poisson samples are whole, non-negative numbers stored as f64.
                let draw: f64 = self.distribution.sample(&mut self.rng);
                draw as u32
            })
            .collect();

        Ok(schedule)
    }
}

/// Generates a seeded Poisson demand schedule in one call.
pub fn generate_poisson_demand(days: usize, seed: u64, mean: f64) -> SimResult<Vec<u32>> {
    DemandGenerator::new(seed, mean)?.generate(days)
}

/// Generates a demand schedule where every day has the exact same demand.
/// Useful for scenario tests where the reorder days must be known up front.
pub fn generate_constant_demand(days: usize, value: u32) -> Vec<u32> {
    vec![value; days]
}
