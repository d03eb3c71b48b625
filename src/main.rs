use anyhow::{Context, Result};
use clap::Parser;
use jit_inventory::io::reporting::{self, DailyTable};
use jit_inventory::strategy::optimization::service_level_z;
use jit_inventory::{simulate, SimResult, SimulationError, SimulationParameters};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "jit-inventory")]
#[command(about = "Just-in-time inventory simulator: reorder point policy with EOQ lot sizing")]
#[command(version)]
struct Args {
    /// JSON file with base parameters; flags override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Simulation horizon in days (7-180)
    #[arg(long)]
    days: Option<usize>,

    /// Exponential smoothing factor (0-1)
    #[arg(long)]
    alpha: Option<f64>,

    /// Service-level multiplier for safety stock (0-3)
    #[arg(short, long)]
    z: Option<f64>,

    /// Target service level (0-1), converted to a z multiplier
    #[arg(long, conflicts_with = "z")]
    service_level: Option<f64>,

    /// Days between placing and receiving an order
    #[arg(long)]
    lead_time: Option<usize>,

    /// Fixed cost per order (>= 1)
    #[arg(long)]
    order_cost: Option<f64>,

    /// Holding cost per unit per day (>= 0.1)
    #[arg(long)]
    holding_cost: Option<f64>,

    /// Starting stock
    #[arg(long)]
    initial_inventory: Option<u32>,

    /// Seed for the demand generator
    #[arg(long)]
    seed: Option<u64>,

    /// Mean daily demand
    #[arg(long)]
    demand_mean: Option<f64>,

    /// Write the daily table to this CSV file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    /// Resolves the final parameters: defaults, then config file, then flags.
    fn parameters(&self) -> SimResult<SimulationParameters> {
        let mut params = match &self.config {
            Some(path) => SimulationParameters::from_json_file(path)?,
            None => SimulationParameters::default(),
        };

        if let Some(days) = self.days {
            params.days = days;
        }
        if let Some(alpha) = self.alpha {
            params.alpha = alpha;
        }
        if let Some(z) = self.z {
            params.z = z;
        }
        if let Some(level) = self.service_level {
            params.z = service_level_z(level)?;
        }
        if let Some(lead_time) = self.lead_time {
            params.lead_time = lead_time;
        }
        if let Some(order_cost) = self.order_cost {
            params.order_cost = order_cost;
        }
        if let Some(holding_cost) = self.holding_cost {
            params.holding_cost = holding_cost;
        }
        if let Some(initial_inventory) = self.initial_inventory {
            params.initial_inventory = initial_inventory;
        }
        if let Some(seed) = self.seed {
            params.seed = seed;
        }
        if let Some(mean) = self.demand_mean {
            params.demand_mean = mean;
        }

        check_input_bounds(&params)?;
        params.validate()?;
        Ok(params)
    }
}

/// Input ranges offered to users. The simulation core accepts a wider domain.
fn check_input_bounds(params: &SimulationParameters) -> SimResult<()> {
    if !(7..=180).contains(&params.days) {
        return Err(SimulationError::invalid(
            "days",
            format!("must be within [7, 180], got {}", params.days),
        ));
    }
    if !(0.0..=3.0).contains(&params.z) {
        return Err(SimulationError::invalid(
            "z",
            format!("must be within [0, 3], got {}", params.z),
        ));
    }
    if params.order_cost.is_nan() || params.order_cost < 1.0 {
        return Err(SimulationError::invalid(
            "order_cost",
            format!("must be at least 1, got {}", params.order_cost),
        ));
    }
    if params.holding_cost.is_nan() || params.holding_cost < 0.1 {
        return Err(SimulationError::invalid(
            "holding_cost",
            format!("must be at least 0.1, got {}", params.holding_cost),
        ));
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    // 1. LOGGING
    let default_level = if args.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    // 2. PARAMETERS
    let params = args.parameters().context("invalid simulation parameters")?;
    info!(?params, "resolved parameters");

    // 3. RUN
    let report = simulate(&params)?;
    let records = report.records();

    // 4. REPORT
    print!("{}", DailyTable(&records));
    println!();
    print!("{}", report.summary());

    if let Some(path) = &args.output {
        reporting::write_simulation_log(path, &records)
            .with_context(|| format!("failed to write {}", path.display()))?;
    }

    Ok(())
}
