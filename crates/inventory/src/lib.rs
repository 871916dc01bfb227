//! Inventory domain module.
//!
//! This crate contains the stock keeping rules, implemented purely as
//! deterministic domain logic (no IO, no terminal, no files). Export is
//! modelled as text rendering; writing that text somewhere is the caller's job.

pub mod export;
pub mod inventory;
pub mod policy;
pub mod shared;

pub use inventory::{
    AddItem, Inventory, InventoryCommand, InventoryEvent, ItemRemoved, ItemStocked, LowStock,
    QuantityUpdated, RemoveItem, StockEntry, UpdateQuantity,
};
pub use policy::{AddMode, DEFAULT_LOW_STOCK_THRESHOLD, InventoryPolicy};
pub use shared::SharedInventory;
