// src/simulation/engine.rs

use crate::error::{SimResult, SimulationError};
use crate::io::demand::DemandGenerator;
use crate::io::reporting::serialize_rounded;
use crate::model::inventory::StockPoint;
use crate::model::pending::{PendingOrder, PendingOrders};
use crate::simulation::config::SimulationParameters;
use crate::strategy::forecast::ExponentialSmoothing;
use crate::strategy::implementations::ReorderPointPolicy;
use crate::strategy::optimization::{economic_order_quantity, reorder_points, safety_stock};
use crate::strategy::traits::OrderPolicy;
use serde::Serialize;
use tracing::{debug, info, trace};

/// What happened at the stock point on one day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayLog {
    pub day: usize,
    pub demand: u32,
    pub arrivals: u32,
    pub lost_demand: u32,
    pub inventory: u32,
    pub order_placed: u32,
    pub reorder_triggered: bool,
}

/// Day-by-day replenishment state machine.
///
/// Day 0 only records the opening stock. From day 1 on, each step runs
/// arrivals, then demand, then the reorder check, in that order.
#[derive(Debug)]
pub struct ReplenishmentSimulation {
    lead_time: usize,
    days: usize,

    stock: StockPoint,
    pending: PendingOrders,
    policy: Box<dyn OrderPolicy>,

    demand_schedule: Vec<u32>,
    pub current_day: usize,
    pub history: Vec<DayLog>,
}

impl ReplenishmentSimulation {
    pub fn new(
        config: &SimulationParameters,
        demand_schedule: Vec<u32>,
        policy: Box<dyn OrderPolicy>,
    ) -> SimResult<Self> {
        config.validate()?;
        if demand_schedule.len() != config.days {
            return Err(SimulationError::invalid(
                "demand",
                format!(
                    "schedule has {} days, horizon is {}",
                    demand_schedule.len(),
                    config.days
                ),
            ));
        }

        let mut sim = Self {
            lead_time: config.lead_time,
            days: config.days,
            stock: StockPoint::new(config.initial_inventory),
            pending: PendingOrders::new(),
            policy,
            demand_schedule,
            current_day: 0,
            history: Vec::with_capacity(config.days),
        };

        // Day 0: opening stock only, demand is observed but not drawn down.
        sim.stock.last_demand = sim.demand_schedule[0];
        sim.record_history(0, false);
        sim.current_day = 1;
        Ok(sim)
    }

    pub fn run(&mut self) {
        while self.current_day < self.days {
            self.step();
        }
    }

    fn step(&mut self) {
        let day = self.current_day;

        // 1. Arrivals due today
        let arrivals = self.pending.take_arrivals(day);
        if arrivals > 0 {
            debug!(day, arrivals, "replenishment arrived");
        }
        self.stock.receive_shipment(arrivals);

        // 2. Demand, unmet units are lost
        let demand = self.demand_schedule.get(day).copied().unwrap_or(0);
        self.stock.fulfil_demand(demand);

        // 3. Reorder check
        let decision = self.policy.calculate_order(day, self.stock.inventory);
        let order_placed = match decision {
            Some(quantity) => {
                // Saturated days lie past any horizon, so such orders never arrive.
                let arrival_day = day.saturating_add(self.lead_time);
                debug!(
                    day,
                    quantity,
                    arrival_day,
                    inventory = self.stock.inventory,
                    "order placed"
                );
                self.pending.schedule(PendingOrder {
                    arrival_day,
                    quantity,
                });
                quantity
            }
            None => 0,
        };

        // 4. Record & advance
        self.record_history(order_placed, decision.is_some());
        self.current_day += 1;
    }

    fn record_history(&mut self, order_placed: u32, reorder_triggered: bool) {
        let log = DayLog {
            day: self.current_day,
            demand: self.stock.last_demand,
            arrivals: self.stock.last_arrival,
            lost_demand: self.stock.last_lost_demand,
            inventory: self.stock.inventory,
            order_placed,
            reorder_triggered,
        };
        trace!(?log, "day complete");
        self.history.push(log);
    }

    /// Orders still in transit.
    pub fn pending_orders(&self) -> &PendingOrders {
        &self.pending
    }

    /// Ends the run, returning the day logs and the orders that would have
    /// arrived after the horizon.
    pub fn finish(self) -> (Vec<DayLog>, Vec<PendingOrder>) {
        (self.history, self.pending.into_orders())
    }
}

// =========================================================================
// Full run: demand -> forecast -> ROP/EOQ -> replenishment
// =========================================================================

/// One row of the output table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayRecord {
    #[serde(rename = "Day")]
    pub day: usize,
    #[serde(rename = "Demand")]
    pub demand: u32,
    #[serde(rename = "Forecast", serialize_with = "serialize_rounded")]
    pub forecast: f64,
    #[serde(rename = "ROP", serialize_with = "serialize_rounded")]
    pub reorder_point: f64,
    #[serde(rename = "Inventory")]
    pub inventory: u32,
    #[serde(rename = "Order")]
    pub order: u32,
}

/// Aggregate figures for one run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunSummary {
    pub days: usize,
    pub lead_time: usize,
    pub seed: u64,
    pub eoq: u32,
    pub safety_stock: f64,
    pub orders_placed: usize,
    pub units_ordered: u64,
    pub units_received: u64,
    pub undelivered_orders: usize,
    pub stockout_days: usize,
    pub lost_demand: u64,
}

/// Every series produced by a run. All per-day vectors have length `days`.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationReport {
    pub parameters: SimulationParameters,
    pub demand: Vec<u32>,
    pub forecast: Vec<f64>,
    pub reorder_points: Vec<f64>,
    pub safety_stock: f64,
    pub eoq: u32,
    pub inventory: Vec<u32>,
    pub orders: Vec<u32>,
    pub arrivals: Vec<u32>,
    pub lost_demand: Vec<u32>,
    pub reorder_days: Vec<usize>,
    /// Orders due on or after the horizon; they are never delivered.
    pub undelivered: Vec<PendingOrder>,
}

impl SimulationReport {
    pub fn days(&self) -> usize {
        self.demand.len()
    }

    pub fn records(&self) -> Vec<DayRecord> {
        (0..self.days())
            .map(|t| DayRecord {
                day: t,
                demand: self.demand[t],
                forecast: self.forecast[t],
                reorder_point: self.reorder_points[t],
                inventory: self.inventory[t],
                order: self.orders[t],
            })
            .collect()
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary {
            days: self.parameters.days,
            lead_time: self.parameters.lead_time,
            seed: self.parameters.seed,
            eoq: self.eoq,
            safety_stock: self.safety_stock,
            orders_placed: self.reorder_days.len(),
            units_ordered: self.orders.iter().map(|&q| q as u64).sum(),
            units_received: self.arrivals.iter().map(|&q| q as u64).sum(),
            undelivered_orders: self.undelivered.len(),
            stockout_days: self.inventory.iter().filter(|&&inv| inv == 0).count(),
            lost_demand: self.lost_demand.iter().map(|&q| q as u64).sum(),
        }
    }
}

/// Runs the full pipeline with Poisson demand drawn from `params.seed`.
pub fn simulate(params: &SimulationParameters) -> SimResult<SimulationReport> {
    params.validate()?;
    let demand = DemandGenerator::new(params.seed, params.demand_mean)?.generate(params.days)?;
    simulate_with_demand(params, demand)
}

/// Runs the pipeline over a caller-supplied demand schedule.
///
/// `demand.len()` must equal `params.days`. The seed and demand mean are not
/// used.
pub fn simulate_with_demand(
    params: &SimulationParameters,
    demand: Vec<u32>,
) -> SimResult<SimulationReport> {
    params.validate()?;

    let forecast = ExponentialSmoothing::new(params.alpha)?.forecast(&demand);
    let safety_stock = safety_stock(&demand, params.z, params.lead_time);
    let rop = reorder_points(&forecast, params.lead_time, safety_stock);
    let eoq = economic_order_quantity(&demand, params.order_cost, params.holding_cost);

    info!(
        days = params.days,
        lead_time = params.lead_time,
        safety_stock,
        eoq,
        "starting replenishment simulation"
    );

    let policy = ReorderPointPolicy::new(rop.clone(), eoq);
    let mut sim = ReplenishmentSimulation::new(params, demand.clone(), Box::new(policy))?;
    sim.run();
    let (history, undelivered) = sim.finish();

    let report = SimulationReport {
        parameters: params.clone(),
        demand,
        forecast,
        reorder_points: rop,
        safety_stock,
        eoq,
        inventory: history.iter().map(|log| log.inventory).collect(),
        orders: history.iter().map(|log| log.order_placed).collect(),
        arrivals: history.iter().map(|log| log.arrivals).collect(),
        lost_demand: history.iter().map(|log| log.lost_demand).collect(),
        reorder_days: history
            .iter()
            .filter(|log| log.reorder_triggered)
            .map(|log| log.day)
            .collect(),
        undelivered,
    };

    info!(
        orders_placed = report.reorder_days.len(),
        undelivered = report.undelivered.len(),
        "simulation complete"
    );
    Ok(report)
}
