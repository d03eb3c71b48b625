pub mod inventory;
pub mod pending;
