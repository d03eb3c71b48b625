//! Reorder-point inventory simulation for a single stock-keeping item.
//!
//! Daily demand is drawn from a seeded Poisson distribution, smoothed into a
//! forecast, and turned into per-day reorder points. A day-by-day simulation
//! then replenishes stock in fixed Economic Order Quantity lots whenever
//! inventory falls to the reorder point.
//!
//! ```
//! use jit_inventory::{simulate, SimulationParameters};
//!
//! let report = simulate(&SimulationParameters::default()).unwrap();
//! assert_eq!(report.inventory.len(), 30);
//! assert!(report.orders.iter().all(|&q| q == 0 || q == report.eoq));
//! ```

pub mod error;
pub mod io;
pub mod model;
pub mod simulation;
pub mod strategy;

pub use error::{SimResult, SimulationError};
pub use simulation::config::SimulationParameters;
pub use simulation::engine::{
    simulate, simulate_with_demand, DayRecord, RunSummary, SimulationReport,
};
