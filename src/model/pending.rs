// src/model/pending.rs

use serde::Serialize;
use std::collections::BTreeMap;

/// A replenishment order that has been placed but has not arrived yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PendingOrder {
    pub arrival_day: usize,
    pub quantity: u32,
}

/// Orders in transit, keyed by the day they arrive.
#[derive(Debug, Clone, Default)]
pub struct PendingOrders {
    by_arrival: BTreeMap<usize, Vec<PendingOrder>>,
}

impl PendingOrders {
    pub fn new() -> Self {
        Self::default()
    }

    /// Puts an order into the pipeline.
    pub fn schedule(&mut self, order: PendingOrder) {
        self.by_arrival
            .entry(order.arrival_day)
            .or_default()
            .push(order);
    }

    /// Removes every order due on exactly `day` and returns their summed quantity.
    ///
    /// Orders due on other days are left untouched, including overdue ones.
    pub fn take_arrivals(&mut self, day: usize) -> u32 {
        self.by_arrival
            .remove(&day)
            .map(|orders| {
                orders
                    .iter()
                    .fold(0u32, |total, order| total.saturating_add(order.quantity))
            })
            .unwrap_or(0)
    }

    /// Number of orders still in transit.
    pub fn len(&self) -> usize {
        self.by_arrival.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.by_arrival.is_empty()
    }

    /// Total units still in transit.
    pub fn outstanding_quantity(&self) -> u64 {
        self.orders().map(|order| order.quantity as u64).sum()
    }

    /// Orders in arrival order.
    pub fn orders(&self) -> impl Iterator<Item = &PendingOrder> {
        self.by_arrival.values().flatten()
    }

    /// Consumes the book, returning the orders still in transit.
    pub fn into_orders(self) -> Vec<PendingOrder> {
        self.by_arrival.into_values().flatten().collect()
    }
}
