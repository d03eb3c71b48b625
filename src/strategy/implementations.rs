// src/strategy/implementations.rs

use crate::strategy::traits::OrderPolicy;

// =========================================================================
// Reorder Point Policy (fixed lot size)
// =========================================================================

/// Orders a fixed lot whenever inventory falls to or below the day's
/// reorder point.
///
/// The lot is always the same quantity (typically the EOQ), never an
/// order-up-to amount, and outstanding orders are not netted against the
/// threshold. Several orders can therefore be in flight at once.
#[derive(Debug, Clone)]
pub struct ReorderPointPolicy {
    reorder_points: Vec<f64>,
    order_quantity: u32,
}

impl ReorderPointPolicy {
    pub fn new(reorder_points: Vec<f64>, order_quantity: u32) -> Self {
        Self {
            reorder_points,
            order_quantity,
        }
    }

    pub fn reorder_point(&self, day: usize) -> Option<f64> {
        self.reorder_points.get(day).copied()
    }
}

impl OrderPolicy for ReorderPointPolicy {
    fn calculate_order(&mut self, day: usize, inventory: u32) -> Option<u32> {
        // Days past the end of the ROP series never trigger.
        let rop = self.reorder_point(day)?;
        if inventory as f64 <= rop {
            Some(self.order_quantity)
        } else {
            None
        }
    }
}
