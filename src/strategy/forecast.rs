// src/strategy/forecast.rs

use crate::error::{SimResult, SimulationError};

/// Single exponential smoothing forecaster.
///
/// The first forecast is the first observed demand (no warm-up period).
/// After that each forecast blends the previous day's demand with the
/// previous forecast:
///
/// `forecast[t] = alpha * demand[t-1] + (1 - alpha) * forecast[t-1]`
#[derive(Debug, Clone, Copy)]
pub struct ExponentialSmoothing {
    alpha: f64, // 0.0 = frozen at demand[0], 1.0 = yesterday's demand
}

impl ExponentialSmoothing {
    pub fn new(alpha: f64) -> SimResult<Self> {
        if !(0.0..=1.0).contains(&alpha) {
            return Err(SimulationError::invalid(
                "alpha",
                format!("must be within [0, 1], got {alpha}"),
            ));
        }
        Ok(Self { alpha })
    }

    /// Produces one forecast per demand observation.
    pub fn forecast(&self, demand: &[u32]) -> Vec<f64> {
        let mut forecast = Vec::with_capacity(demand.len());
        let Some(&first) = demand.first() else {
            return forecast;
        };

        let mut level = first as f64;
        forecast.push(level);
        for &previous in &demand[..demand.len() - 1] {
            level = self.alpha * previous as f64 + (1.0 - self.alpha) * level;
            forecast.push(level);
        }

        forecast
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forecast_matches_demand_length() {
        let smoothing = ExponentialSmoothing::new(0.3).unwrap();
        assert_eq!(smoothing.forecast(&[20, 18, 25, 22]).len(), 4);
        assert!(smoothing.forecast(&[]).is_empty());
    }

    #[test]
    fn first_forecast_is_first_demand() {
        let smoothing = ExponentialSmoothing::new(0.7).unwrap();
        assert_eq!(smoothing.forecast(&[17, 30, 5])[0], 17.0);
    }

    #[test]
    fn alpha_zero_is_constant() {
        let smoothing = ExponentialSmoothing::new(0.0).unwrap();
        let forecast = smoothing.forecast(&[12, 40, 3, 25, 19]);
        assert!(forecast.iter().all(|&f| f == 12.0));
    }

    #[test]
    fn alpha_one_is_pure_lag() {
        let demand = [12, 40, 3, 25, 19];
        let smoothing = ExponentialSmoothing::new(1.0).unwrap();
        let forecast = smoothing.forecast(&demand);
        assert_eq!(forecast[0], 12.0);
        for t in 1..demand.len() {
            assert_eq!(forecast[t], demand[t - 1] as f64);
        }
    }

    #[test]
    fn blends_previous_demand_and_forecast() {
        let smoothing = ExponentialSmoothing::new(0.5).unwrap();
        let forecast = smoothing.forecast(&[10, 20, 30]);
        // 10 -> 0.5*10 + 0.5*10 = 10 -> 0.5*20 + 0.5*10 = 15
        assert_eq!(forecast, vec![10.0, 10.0, 15.0]);
    }

    #[test]
    fn rejects_alpha_out_of_range() {
        assert!(ExponentialSmoothing::new(1.2).is_err());
        assert!(ExponentialSmoothing::new(-0.1).is_err());
    }
}
