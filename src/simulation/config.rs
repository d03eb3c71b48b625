// src/simulation/config.rs

use crate::error::{SimResult, SimulationError};
use crate::io::demand::DEFAULT_DEMAND_MEAN;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Parameters for one simulation run.
///
/// The struct is immutable for the duration of a run: the engine takes a
/// copy when it starts and never writes back into it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationParameters {
    /// Simulation horizon in days.
    pub days: usize,
    /// Exponential smoothing factor (0 = ignore new demand, 1 = pure lag).
    pub alpha: f64,
    /// Service-level multiplier applied to the demand standard deviation.
    pub z: f64,
    /// Days between placing an order and receiving it.
    pub lead_time: usize,
    /// Fixed cost per order placed. Only used for EOQ sizing.
    pub order_cost: f64,
    /// Cost of holding one unit for one day. Only used for EOQ sizing.
    pub holding_cost: f64,
    pub initial_inventory: u32,
    /// Seed for the demand generator.
    pub seed: u64,
    /// Mean of the Poisson daily demand.
    pub demand_mean: f64,
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            days: 30,
            alpha: 0.3,
            z: 1.645,
            lead_time: 3,
            order_cost: 50.0,
            holding_cost: 2.0,
            initial_inventory: 100,
            seed: 42,
            demand_mean: DEFAULT_DEMAND_MEAN,
        }
    }
}

impl SimulationParameters {
    /// Loads parameters from a JSON file. Missing keys fall back to the defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> SimResult<Self> {
        let reader = BufReader::new(File::open(path)?);
        let params: Self = serde_json::from_reader(reader)?;
        Ok(params)
    }

    /// Checks every field against its domain.
    ///
    /// This is the only gate between user input and the simulation core; NaN
    /// and infinities fail every range check below.
    pub fn validate(&self) -> SimResult<()> {
        if self.days < 1 {
            return Err(SimulationError::invalid("days", "must be at least 1"));
        }
        if !(0.0..=1.0).contains(&self.alpha) {
            return Err(SimulationError::invalid(
                "alpha",
                format!("must be within [0, 1], got {}", self.alpha),
            ));
        }
        if !(self.z.is_finite() && self.z >= 0.0) {
            return Err(SimulationError::invalid(
                "z",
                format!("must be a finite value >= 0, got {}", self.z),
            ));
        }
        if self.lead_time < 1 {
            return Err(SimulationError::invalid("lead_time", "must be at least 1 day"));
        }
        check_positive("order_cost", self.order_cost)?;
        check_positive("holding_cost", self.holding_cost)?;
        check_positive("demand_mean", self.demand_mean)?;
        Ok(())
    }
}

fn check_positive(name: &'static str, value: f64) -> SimResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SimulationError::invalid(
            name,
            format!("must be a finite value > 0, got {value}"),
        ))
    }
}
