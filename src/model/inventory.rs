// src/model/inventory.rs

/// On-hand stock of the single item being simulated.
///
/// Unmet demand is lost: inventory is floored at zero and nothing is
/// backlogged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockPoint {
    pub inventory: u32,

    // Tracking for the current day
    pub last_arrival: u32,
    pub last_demand: u32,
    pub last_lost_demand: u32,
}

impl StockPoint {
    pub fn new(initial_inventory: u32) -> Self {
        Self {
            inventory: initial_inventory,
            last_arrival: 0,
            last_demand: 0,
            last_lost_demand: 0,
        }
    }

    /// Step 1: Receive goods that arrived today.
    pub fn receive_shipment(&mut self, quantity: u32) {
        self.inventory = self.inventory.saturating_add(quantity);
        self.last_arrival = quantity;
    }

    /// Step 2: Serve today's demand from stock.
    ///
    /// Returns the quantity actually served.
    pub fn fulfil_demand(&mut self, demand: u32) -> u32 {
        self.last_demand = demand;

        let served = demand.min(self.inventory);
        self.inventory -= served;
        self.last_lost_demand = demand - served;
        served
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serves_from_stock() {
        let mut stock = StockPoint::new(50);
        assert_eq!(stock.fulfil_demand(20), 20);
        assert_eq!(stock.inventory, 30);
        assert_eq!(stock.last_lost_demand, 0);
    }

    #[test]
    fn shortfall_is_lost_not_backlogged() {
        let mut stock = StockPoint::new(5);
        assert_eq!(stock.fulfil_demand(20), 5);
        assert_eq!(stock.inventory, 0);
        assert_eq!(stock.last_lost_demand, 15);

        stock.receive_shipment(10);
        assert_eq!(stock.inventory, 10);
        assert_eq!(stock.last_arrival, 10);
    }
}
