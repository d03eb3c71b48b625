// src/strategy/optimization.rs

//! Inventory parameter calculations.
//!
//! Safety stock and reorder points for the reorder-point policy, the
//! Economic Order Quantity used as the fixed lot size, and a z-score lookup
//! for callers that think in service levels instead of multipliers.

use crate::error::{SimResult, SimulationError};

/// Number of leading demand observations used to estimate variability.
///
/// The window stays fixed at 10 days regardless of the horizon; shorter runs
/// use whatever they have.
pub const CALIBRATION_WINDOW: usize = 10;

/// Days per year used to annualize demand and holding cost.
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Population standard deviation (divides by `n`, not `n - 1`).
pub fn population_std_dev(values: &[u32]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let n = values.len() as f64;
    let mean = values.iter().map(|&v| v as f64).sum::<f64>() / n;
    let variance = values
        .iter()
        .map(|&v| (v as f64 - mean).powi(2))
        .sum::<f64>()
        / n;
    variance.sqrt()
}

/// Calculates the safety stock buffer.
///
/// # Formula
/// SafetyStock = Z * StdDev(demand[0..10]) * sqrt(LeadTime)
///
/// # Arguments
/// * `demand` - Full demand series; only the calibration window is read.
/// * `z` - Service-level multiplier.
/// * `lead_time` - Replenishment lead time in days.
pub fn safety_stock(demand: &[u32], z: f64, lead_time: usize) -> f64 {
    let window = &demand[..demand.len().min(CALIBRATION_WINDOW)];
    z * population_std_dev(window) * (lead_time as f64).sqrt()
}

/// Per-day reorder points.
///
/// Lead-time demand is taken as the day's forecast scaled linearly by the
/// lead time, so multi-day demand correlation is not modelled.
///
/// # Formula
/// ROP[t] = Forecast[t] * LeadTime + SafetyStock
pub fn reorder_points(forecast: &[f64], lead_time: usize, safety_stock: f64) -> Vec<f64> {
    let lead_time = lead_time as f64;
    forecast
        .iter()
        .map(|&f| f * lead_time + safety_stock)
        .collect()
}

/// Scales observed total demand to a full year.
pub fn annualized_demand(demand: &[u32]) -> f64 {
    if demand.is_empty() {
        return 0.0;
    }
    let total: f64 = demand.iter().map(|&d| d as f64).sum();
    total * (DAYS_PER_YEAR / demand.len() as f64)
}

/// Calculates the Economic Order Quantity.
///
/// `holding_cost` is per unit per day, so it is annualized before entering the
/// classical square-root lot-size law.
///
/// # Formula
/// EOQ = floor(sqrt(2 * AnnualDemand * OrderCost / (HoldingCost * 365)))
///
/// The result is truncated, never rounded.
pub fn economic_order_quantity(demand: &[u32], order_cost: f64, holding_cost: f64) -> u32 {
    let annual_demand = annualized_demand(demand);
    let eoq = ((2.0 * annual_demand * order_cost) / (holding_cost * DAYS_PER_YEAR)).sqrt();
    // `as` truncates toward zero and saturates, which is the floor for eoq >= 0.
    eoq as u32
}

/// Converts a target service level (probability of not stocking out during
/// the lead time) into the matching z multiplier.
pub fn service_level_z(service_level: f64) -> SimResult<f64> {
    if !(service_level > 0.0 && service_level < 1.0) {
        return Err(SimulationError::invalid(
            "service_level",
            format!("must be strictly between 0 and 1, got {service_level}"),
        ));
    }
    Ok(inverse_normal_cdf(service_level))
}

/// Approximate Inverse Cumulative Distribution Function (Quantile function) for Standard Normal Distribution.
///
/// Based on Abramowitz and Stegun formula 26.2.23.
/// The absolute error is less than 4.5e-4.
fn inverse_normal_cdf(p: f64) -> f64 {
    if p == 0.5 {
        return 0.0;
    }

    // Valid for 0 < q <= 0.5; the upper half is mirrored.
    let q = if p < 0.5 { p } else { 1.0 - p };
    let t = (-2.0 * q.ln()).sqrt();

    let c0 = 2.515517;
    let c1 = 0.802853;
    let c2 = 0.010328;

    let d1 = 1.432788;
    let d2 = 0.189269;
    let d3 = 0.001308;

    let numerator = c0 + c1 * t + c2 * t * t;
    let denominator = 1.0 + d1 * t + d2 * t * t + d3 * t * t * t;
    let x = t - (numerator / denominator);

    if p < 0.5 {
        -x
    } else {
        x
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn std_dev_uses_population_formula() {
        // mean 5, squared deviations sum to 32 over 8 values
        let values = [2, 4, 4, 4, 5, 5, 7, 9];
        assert!((population_std_dev(&values) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn std_dev_of_constant_series_is_zero() {
        assert_eq!(population_std_dev(&[20; 10]), 0.0);
        assert_eq!(population_std_dev(&[]), 0.0);
    }

    #[test]
    fn safety_stock_only_reads_first_ten_days() {
        let mut demand = vec![2, 4, 4, 4, 5, 5, 7, 9, 5, 5];
        let base = safety_stock(&demand, 1.0, 1);
        demand.extend([1_000, 0, 500]);
        assert_eq!(safety_stock(&demand, 1.0, 1), base);
    }

    #[test]
    fn safety_stock_uses_all_days_when_short() {
        let demand = [2, 4, 4, 4, 5, 5, 7, 9];
        let expected = 1.645 * 2.0 * 4.0_f64.sqrt();
        assert!((safety_stock(&demand, 1.645, 4) - expected).abs() < 1e-12);
    }

    #[test]
    fn safety_stock_is_zero_without_service_factor() {
        assert_eq!(safety_stock(&[3, 30, 12, 1], 0.0, 5), 0.0);
    }

    #[test]
    fn reorder_point_scales_forecast_by_lead_time() {
        let rop = reorder_points(&[10.0, 12.5], 3, 4.0);
        assert_eq!(rop, vec![34.0, 41.5]);
    }

    #[test]
    fn annualizes_by_horizon_length() {
        // 10 days totalling 200 units -> 20/day -> 7300/year
        assert!((annualized_demand(&[20; 10]) - 7300.0).abs() < 1e-9);
    }

    #[test]
    fn eoq_truncates() {
        // annual 7300, S=50, H=2/day -> sqrt(730000 / 730) = sqrt(1000) = 31.62
        assert_eq!(economic_order_quantity(&[20; 10], 50.0, 2.0), 31);
    }

    #[test]
    fn eoq_is_zero_without_demand() {
        assert_eq!(economic_order_quantity(&[0; 5], 50.0, 2.0), 0);
    }

    #[test]
    fn service_level_z_matches_tables() {
        assert!((service_level_z(0.95).unwrap() - 1.645).abs() < 1e-3);
        assert!((service_level_z(0.5).unwrap()).abs() < 1e-12);
        assert!((service_level_z(0.05).unwrap() + 1.645).abs() < 1e-3);
    }

    #[test]
    fn service_level_z_rejects_bounds() {
        assert!(service_level_z(0.0).is_err());
        assert!(service_level_z(1.0).is_err());
    }

    proptest! {
        #[test]
        fn eoq_is_floor_of_formula(
            demand in proptest::collection::vec(0u32..60, 1..200),
            order_cost in 1.0f64..500.0,
            holding_cost in 0.1f64..20.0,
        ) {
            let eoq = economic_order_quantity(&demand, order_cost, holding_cost);
            let exact = ((2.0 * annualized_demand(&demand) * order_cost) / (holding_cost * DAYS_PER_YEAR)).sqrt();
            prop_assert_eq!(eoq as f64, exact.floor());
        }

        #[test]
        fn safety_stock_is_non_negative(
            demand in proptest::collection::vec(0u32..60, 1..40),
            z in 0.0f64..3.0,
            lead_time in 1usize..30,
        ) {
            prop_assert!(safety_stock(&demand, z, lead_time) >= 0.0);
        }
    }
}
