//! Display coordinator: one live, filtered view over whichever collection the
//! user is currently looking at.

use std::rc::Rc;

use larder_events::ObservableList;
use larder_inventory::{Item, OrderLine, TransactionRecord};

use crate::view::{FilteredList, Predicate};

/// Which collection the display is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DisplayMode {
    #[default]
    Inventory,
    Order,
    TransactionList,
}

impl core::fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            DisplayMode::Inventory => "inventory",
            DisplayMode::Order => "order",
            DisplayMode::TransactionList => "transactions",
        })
    }
}

/// A borrowed element of any displayable collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayEntry<'a> {
    Item(&'a Item),
    OrderLine(&'a OrderLine),
    Transaction(&'a TransactionRecord),
}

/// An owned element of the display, as handed to a presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayItem {
    Item(Item),
    OrderLine(OrderLine),
    Transaction(TransactionRecord),
}

impl DisplayItem {
    pub fn as_entry(&self) -> DisplayEntry<'_> {
        match self {
            DisplayItem::Item(item) => DisplayEntry::Item(item),
            DisplayItem::OrderLine(line) => DisplayEntry::OrderLine(line),
            DisplayItem::Transaction(record) => DisplayEntry::Transaction(record),
        }
    }
}

impl core::fmt::Display for DisplayItem {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            DisplayItem::Item(item) => core::fmt::Display::fmt(item, f),
            DisplayItem::OrderLine(line) => core::fmt::Display::fmt(line, f),
            DisplayItem::Transaction(record) => core::fmt::Display::fmt(record, f),
        }
    }
}

/// Predicate over any display entry.
pub type DisplayPredicate = Rc<dyn Fn(DisplayEntry<'_>) -> bool>;

pub fn show_everything() -> DisplayPredicate {
    Rc::new(|_: DisplayEntry<'_>| true)
}

/// Display predicate accepting the inventory items `predicate` accepts.
pub fn items_where(predicate: Predicate<Item>) -> DisplayPredicate {
    Rc::new(move |entry: DisplayEntry<'_>| matches!(entry, DisplayEntry::Item(item) if predicate(item)))
}

/// Display predicate accepting the transactions `predicate` accepts.
pub fn transactions_where(predicate: Predicate<TransactionRecord>) -> DisplayPredicate {
    Rc::new(move |entry: DisplayEntry<'_>| matches!(entry, DisplayEntry::Transaction(record) if predicate(record)))
}

/// The collections a display can be bound to.
#[derive(Clone, Copy)]
pub struct DisplaySources<'a> {
    pub items: &'a ObservableList<Item>,
    pub order: &'a ObservableList<OrderLine>,
    pub transactions: &'a ObservableList<TransactionRecord>,
}

enum DisplayState {
    Inventory(FilteredList<Item>),
    Order(FilteredList<OrderLine>),
    TransactionList(FilteredList<TransactionRecord>),
}

impl DisplayState {
    fn bind(mode: DisplayMode, predicate: DisplayPredicate, sources: &DisplaySources<'_>) -> Self {
        match mode {
            DisplayMode::Inventory => {
                DisplayState::Inventory(FilteredList::with_predicate(sources.items, lift_items(predicate)))
            }
            DisplayMode::Order => {
                DisplayState::Order(FilteredList::with_predicate(sources.order, lift_lines(predicate)))
            }
            DisplayMode::TransactionList => DisplayState::TransactionList(FilteredList::with_predicate(
                sources.transactions,
                lift_transactions(predicate),
            )),
        }
    }

    fn mode(&self) -> DisplayMode {
        match self {
            DisplayState::Inventory(_) => DisplayMode::Inventory,
            DisplayState::Order(_) => DisplayMode::Order,
            DisplayState::TransactionList(_) => DisplayMode::TransactionList,
        }
    }

    fn set_predicate(&mut self, predicate: DisplayPredicate) {
        match self {
            DisplayState::Inventory(view) => view.set_predicate(lift_items(predicate)),
            DisplayState::Order(view) => view.set_predicate(lift_lines(predicate)),
            DisplayState::TransactionList(view) => view.set_predicate(lift_transactions(predicate)),
        }
    }

    fn sync(&mut self) -> bool {
        match self {
            DisplayState::Inventory(view) => view.sync(),
            DisplayState::Order(view) => view.sync(),
            DisplayState::TransactionList(view) => view.sync(),
        }
    }

    /// Rebinds the active view if its mode's source has been replaced.
    fn follow_sources(&mut self, sources: &DisplaySources<'_>) -> bool {
        match self {
            DisplayState::Inventory(view) if !view.is_bound_to(sources.items) => view.set_source(sources.items),
            DisplayState::Order(view) if !view.is_bound_to(sources.order) => view.set_source(sources.order),
            DisplayState::TransactionList(view) if !view.is_bound_to(sources.transactions) => {
                view.set_source(sources.transactions)
            }
            _ => return false,
        }
        true
    }

    fn len(&self) -> usize {
        match self {
            DisplayState::Inventory(view) => view.len(),
            DisplayState::Order(view) => view.len(),
            DisplayState::TransactionList(view) => view.len(),
        }
    }

    fn items(&self) -> Vec<DisplayItem> {
        match self {
            DisplayState::Inventory(view) => view.items().iter().cloned().map(DisplayItem::Item).collect(),
            DisplayState::Order(view) => view.items().iter().cloned().map(DisplayItem::OrderLine).collect(),
            DisplayState::TransactionList(view) => {
                view.items().iter().cloned().map(DisplayItem::Transaction).collect()
            }
        }
    }
}

fn lift_items(predicate: DisplayPredicate) -> Predicate<Item> {
    Rc::new(move |item: &Item| predicate(DisplayEntry::Item(item)))
}

fn lift_lines(predicate: DisplayPredicate) -> Predicate<OrderLine> {
    Rc::new(move |line: &OrderLine| predicate(DisplayEntry::OrderLine(line)))
}

fn lift_transactions(predicate: DisplayPredicate) -> Predicate<TransactionRecord> {
    Rc::new(move |record: &TransactionRecord| predicate(DisplayEntry::Transaction(record)))
}

/// Coordinates the single live display.
///
/// Switching mode rebinds the view to the target mode's source and discards
/// the previous predicate before the new one is applied. Updating within the
/// same mode only swaps the predicate, so applying the same update twice is
/// the same as applying it once.
pub struct DisplayList {
    state: DisplayState,
}

impl DisplayList {
    /// Starts on the inventory, showing everything.
    pub fn new(sources: &DisplaySources<'_>) -> Self {
        Self {
            state: DisplayState::bind(DisplayMode::Inventory, show_everything(), sources),
        }
    }

    pub fn mode(&self) -> DisplayMode {
        self.state.mode()
    }

    pub fn update(&mut self, mode: DisplayMode, predicate: DisplayPredicate, sources: &DisplaySources<'_>) {
        let from = self.state.mode();
        if from == mode {
            self.state.follow_sources(sources);
            self.state.set_predicate(predicate);
        } else {
            // Dropping the old state drops its subscription.
            self.state = DisplayState::bind(mode, predicate, sources);
        }
        tracing::debug!(%from, to = %mode, shown = self.state.len(), "display updated");
    }

    /// Folds pending source changes into the view, rebinding first if the
    /// active mode's source was replaced.
    pub fn sync(&mut self, sources: &DisplaySources<'_>) -> bool {
        let rebound = self.state.follow_sources(sources);
        self.state.sync() || rebound
    }

    pub fn len(&self) -> usize {
        self.state.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn items(&self) -> Vec<DisplayItem> {
        self.state.items()
    }
}

impl core::fmt::Debug for DisplayList {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DisplayList")
            .field("mode", &self.mode())
            .field("items", &self.items())
            .finish()
    }
}
