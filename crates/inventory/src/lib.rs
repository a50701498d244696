//! Inventory domain module.
//!
//! This crate contains the business rules for stock items, orders and
//! transactions, implemented purely as deterministic domain logic (no IO, no
//! parsing of command text, no presentation).

pub mod descriptor;
pub mod inventory;
pub mod item;
pub mod order;
pub mod resolve;
pub mod sample;
pub mod transaction;

pub use descriptor::ItemDescriptor;
pub use inventory::{Inventory, InventoryCommand, InventoryEvent, StockLine};
pub use item::{Item, ItemId, ItemKey, Name, Tag};
pub use order::{Order, OrderCommand, OrderEvent, OrderLine};
pub use resolve::{Scope, matching, resolve};
pub use transaction::{TransactionLog, TransactionRecord};
