// src/strategy/traits.rs

use std::fmt::Debug;

/// Defines the replenishment decision for the stock point.
///
/// We require `Debug` so the simulation can be printed, and `Send` + `Sync`
/// so independent runs can be moved across threads.
pub trait OrderPolicy: Debug + Send + Sync {
    /// Decides whether to order on `day`, given the inventory left after that
    /// day's arrivals and demand.
    ///
    /// Returns `Some(quantity)` when an order is placed and `None` otherwise.
    fn calculate_order(&mut self, day: usize, inventory: u32) -> Option<u32>;
}
