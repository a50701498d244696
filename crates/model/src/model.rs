use std::path::{Path, PathBuf};
use std::rc::Rc;

use chrono::Utc;

use larder_core::{DomainError, DomainResult, Entity};
use larder_events::execute;
use larder_inventory::{
    Inventory, InventoryCommand, Item, Order, OrderCommand, StockLine, TransactionLog, TransactionRecord,
};

use crate::display::{DisplayItem, DisplayList, DisplayMode, DisplayPredicate, DisplaySources, items_where};
use crate::prefs::{GuiSettings, UserPrefs};
use crate::view::{FilteredList, Predicate};

/// Everything a command can read or change.
///
/// Every mutation is all-or-nothing: an `Err` leaves the model exactly as it
/// was. Views are up to date by the time a mutation returns.
pub trait Model {
    /// Current user preferences.
    fn user_prefs(&self) -> &UserPrefs;

    /// Replaces the user preferences.
    fn set_user_prefs(&mut self, prefs: UserPrefs);

    fn gui_settings(&self) -> &GuiSettings;

    fn set_gui_settings(&mut self, settings: GuiSettings);

    /// Where the inventory snapshot is loaded from and saved to.
    fn inventory_file_path(&self) -> &Path;

    fn set_inventory_file_path(&mut self, path: PathBuf);

    /// Read-only snapshot of the inventory.
    fn inventory(&self) -> &Inventory;

    /// Replaces the whole inventory with `items`.
    fn set_inventory(&mut self, items: Vec<Item>) -> DomainResult<()>;

    /// True if a record with the same identity exists, whatever its count.
    fn has_item(&self, item: &Item) -> bool;

    /// Adds `item`, merging its count into an existing record of the same identity.
    fn add_item(&mut self, item: Item) -> DomainResult<()>;

    /// Deletes the record with `target`'s identity. It must exist.
    fn delete_item(&mut self, target: &Item) -> DomainResult<()>;

    /// Replaces the record with `target`'s identity by `edited`. It must exist.
    fn set_item(&mut self, target: &Item, edited: Item) -> DomainResult<()>;

    /// Takes `count` units of `target` out of stock.
    fn remove_stock(&mut self, target: &Item, count: u32) -> DomainResult<()>;

    /// The current, uncommitted order.
    fn order(&self) -> &Order;

    /// Replaces the current order.
    fn set_order(&mut self, order: Order);

    /// Requests `count` more units of `item` on the current order.
    fn add_to_order(&mut self, item: &Item, count: u32) -> DomainResult<()>;

    /// Discards the current order.
    fn clear_order(&mut self);

    /// Commits the current order: deducts its stock, records the
    /// transaction and clears the order.
    fn checkout(&mut self) -> DomainResult<TransactionRecord>;

    fn transactions(&self) -> &TransactionLog;

    fn set_transactions(&mut self, records: Vec<TransactionRecord>);

    /// Inventory items passing the current item filter.
    fn filtered_item_view(&self) -> &[Item];

    /// Filters the item view, and shows the same filter on the display.
    fn update_filtered_item_list(&mut self, predicate: Predicate<Item>);

    fn display_mode(&self) -> DisplayMode;

    /// What the display currently shows.
    fn filtered_display_view(&self) -> Vec<DisplayItem>;

    /// Switches the display to `mode`, filtered by `predicate`.
    fn update_filtered_display_list(&mut self, mode: DisplayMode, predicate: DisplayPredicate);
}

/// The in-memory [`Model`].
pub struct ModelManager {
    inventory: Inventory,
    order: Order,
    transactions: TransactionLog,
    user_prefs: UserPrefs,
    item_view: FilteredList<Item>,
    display: DisplayList,
}

fn sources<'a>(inventory: &'a Inventory, order: &'a Order, transactions: &'a TransactionLog) -> DisplaySources<'a> {
    DisplaySources {
        items: inventory.item_list(),
        order: order.line_list(),
        transactions: transactions.record_list(),
    }
}

impl ModelManager {
    pub fn new(inventory: Inventory, transactions: TransactionLog, user_prefs: UserPrefs) -> Self {
        let order = Order::new();
        let item_view = FilteredList::new(inventory.item_list());
        let display = DisplayList::new(&sources(&inventory, &order, &transactions));
        tracing::debug!(items = inventory.len(), transactions = transactions.len(), "model initialised");
        Self {
            inventory,
            order,
            transactions,
            user_prefs,
            item_view,
            display,
        }
    }

    fn sync_views(&mut self) {
        self.item_view.sync();
        self.display
            .sync(&sources(&self.inventory, &self.order, &self.transactions));
    }

    fn inventory_command(&mut self, command: InventoryCommand) -> DomainResult<()> {
        let result = execute(&mut self.inventory, &command).map(|_| ());
        self.sync_views();
        result
    }

    fn require_present(&self, target: &Item) -> DomainResult<()> {
        if self.has_item(target) {
            Ok(())
        } else {
            Err(DomainError::invariant(format!("{} is not in the inventory", target.identity())))
        }
    }
}

impl Default for ModelManager {
    fn default() -> Self {
        Self::new(Inventory::new(), TransactionLog::new(), UserPrefs::default())
    }
}

impl Model for ModelManager {
    fn user_prefs(&self) -> &UserPrefs {
        &self.user_prefs
    }

    fn set_user_prefs(&mut self, prefs: UserPrefs) {
        self.user_prefs = prefs;
    }

    fn gui_settings(&self) -> &GuiSettings {
        self.user_prefs.gui_settings()
    }

    fn set_gui_settings(&mut self, settings: GuiSettings) {
        self.user_prefs.set_gui_settings(settings);
    }

    fn inventory_file_path(&self) -> &Path {
        self.user_prefs.inventory_file_path()
    }

    fn set_inventory_file_path(&mut self, path: PathBuf) {
        self.user_prefs.set_inventory_file_path(path);
    }

    fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    fn set_inventory(&mut self, items: Vec<Item>) -> DomainResult<()> {
        self.inventory_command(InventoryCommand::Reset(items))
    }

    fn has_item(&self, item: &Item) -> bool {
        self.inventory.has_item(item)
    }

    fn add_item(&mut self, item: Item) -> DomainResult<()> {
        self.inventory_command(InventoryCommand::AddItem(item))
    }

    fn delete_item(&mut self, target: &Item) -> DomainResult<()> {
        self.require_present(target)?;
        self.inventory_command(InventoryCommand::DeleteItem(target.identity()))
    }

    fn set_item(&mut self, target: &Item, edited: Item) -> DomainResult<()> {
        self.require_present(target)?;
        self.inventory_command(InventoryCommand::SetItem {
            target: target.identity(),
            edited,
        })
    }

    fn remove_stock(&mut self, target: &Item, count: u32) -> DomainResult<()> {
        self.inventory_command(InventoryCommand::RemoveStock(vec![StockLine {
            item: target.identity(),
            count,
        }]))
    }

    fn order(&self) -> &Order {
        &self.order
    }

    fn set_order(&mut self, order: Order) {
        self.order = order;
        self.sync_views();
    }

    fn add_to_order(&mut self, item: &Item, count: u32) -> DomainResult<()> {
        let command = OrderCommand::AddItem {
            item: item.identity(),
            count,
        };
        let result = execute(&mut self.order, &command).map(|_| ());
        self.sync_views();
        result
    }

    fn clear_order(&mut self) {
        // Clearing cannot fail.
        let _ = execute(&mut self.order, &OrderCommand::Clear);
        self.sync_views();
    }

    fn checkout(&mut self) -> DomainResult<TransactionRecord> {
        if self.order.is_empty() {
            return Err(DomainError::invariant("the order is empty"));
        }

        execute(&mut self.inventory, &InventoryCommand::RemoveStock(self.order.stock_lines()))?;
        let record = TransactionRecord::new(self.order.lines().to_vec(), Utc::now());
        self.transactions.append(record.clone());
        let _ = execute(&mut self.order, &OrderCommand::Clear);
        self.sync_views();

        tracing::info!(transaction = %record.id, units = record.total_units(), "order checked out");
        Ok(record)
    }

    fn transactions(&self) -> &TransactionLog {
        &self.transactions
    }

    fn set_transactions(&mut self, records: Vec<TransactionRecord>) {
        self.transactions.replace_all(records);
        self.sync_views();
    }

    fn filtered_item_view(&self) -> &[Item] {
        self.item_view.items()
    }

    fn update_filtered_item_list(&mut self, predicate: Predicate<Item>) {
        self.item_view.set_predicate(Rc::clone(&predicate));
        self.display.update(
            DisplayMode::Inventory,
            items_where(predicate),
            &sources(&self.inventory, &self.order, &self.transactions),
        );
    }

    fn display_mode(&self) -> DisplayMode {
        self.display.mode()
    }

    fn filtered_display_view(&self) -> Vec<DisplayItem> {
        self.display.items()
    }

    fn update_filtered_display_list(&mut self, mode: DisplayMode, predicate: DisplayPredicate) {
        self.display
            .update(mode, predicate, &sources(&self.inventory, &self.order, &self.transactions));
    }
}

/// Two models are equal when they hold the same data and show the same views.
impl PartialEq for ModelManager {
    fn eq(&self, other: &Self) -> bool {
        self.inventory.items() == other.inventory.items()
            && self.order.lines() == other.order.lines()
            && self.transactions.records() == other.transactions.records()
            && self.user_prefs == other.user_prefs
            && self.item_view.items() == other.item_view.items()
            && self.display.mode() == other.display.mode()
            && self.display.items() == other.display.items()
    }
}

impl core::fmt::Debug for ModelManager {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ModelManager")
            .field("inventory", &self.inventory.items())
            .field("order", &self.order.lines())
            .field("transactions", &self.transactions.len())
            .field("item_view", &self.item_view)
            .field("display", &self.display)
            .finish()
    }
}
