//! `larder-model`: the in-process model behind the command language.
//!
//! Owns the inventory, the current order and the transaction history, and the
//! live filtered views a presentation layer renders. All mutation goes through
//! the [`Model`] trait.

pub mod display;
pub mod model;
pub mod prefs;
pub mod storage;
pub mod view;

pub use display::{
    DisplayEntry, DisplayItem, DisplayList, DisplayMode, DisplayPredicate, DisplaySources, items_where,
    show_everything, transactions_where,
};
pub use model::{Model, ModelManager};
pub use prefs::{GuiSettings, UserPrefs};
pub use storage::{InventorySnapshot, JsonStorage, Storage, StorageError};
pub use view::{FilteredList, Predicate, show_all};
