use std::collections::BTreeSet;

use larder_core::{Aggregate, DomainError, Entity};
use larder_events::{Event, ObservableList};

use crate::item::{Item, ItemKey, Tag};

/// Aggregate root: Inventory.
///
/// Ordered item records, insertion order preserved. Invariants:
/// - no two records share an identity (name + id);
/// - no two records with a positive count share an id.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Inventory {
    items: ObservableList<Item>,
    version: u64,
}

/// One stock deduction: `count` units of `item`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockLine {
    pub item: ItemKey,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InventoryCommand {
    /// Restock an existing identity or append a new record.
    AddItem(Item),
    /// Deduct stock; every line must be covered or nothing is deducted.
    RemoveStock(Vec<StockLine>),
    /// Replace the record of `target` with `edited`.
    SetItem { target: ItemKey, edited: Item },
    /// Drop the record entirely.
    DeleteItem(ItemKey),
    /// Replace every record (loading a snapshot).
    Reset(Vec<Item>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InventoryEvent {
    ItemAdded(Item),
    StockAdded {
        item: ItemKey,
        added: u32,
        tags: BTreeSet<Tag>,
    },
    StockRemoved {
        item: ItemKey,
        removed: u32,
    },
    ItemReplaced {
        target: ItemKey,
        item: Item,
    },
    ItemDeleted(ItemKey),
    InventoryReset(Vec<Item>),
}

impl Event for InventoryEvent {
    fn event_type(&self) -> &'static str {
        match self {
            InventoryEvent::ItemAdded(_) => "inventory.item.added",
            InventoryEvent::StockAdded { .. } => "inventory.item.stock_added",
            InventoryEvent::StockRemoved { .. } => "inventory.item.stock_removed",
            InventoryEvent::ItemReplaced { .. } => "inventory.item.replaced",
            InventoryEvent::ItemDeleted(_) => "inventory.item.deleted",
            InventoryEvent::InventoryReset(_) => "inventory.reset",
        }
    }
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an inventory from loaded records, checking the invariants.
    pub fn from_items(items: Vec<Item>) -> Result<Self, DomainError> {
        let mut inventory = Self::new();
        larder_events::execute(&mut inventory, &InventoryCommand::Reset(items))?;
        Ok(inventory)
    }

    pub fn items(&self) -> &[Item] {
        self.items.items()
    }

    /// The observable source backing this inventory, for live views.
    pub fn item_list(&self) -> &ObservableList<Item> {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns true if a record with the same identity exists (any count).
    pub fn has_item(&self, item: &Item) -> bool {
        self.find(&item.identity()).is_some()
    }

    pub fn get(&self, key: &ItemKey) -> Option<&Item> {
        self.find(key).map(|(_, item)| item)
    }

    fn find(&self, key: &ItemKey) -> Option<(usize, &Item)> {
        self.items
            .iter()
            .enumerate()
            .find(|(_, item)| item.name() == &key.name && item.id() == key.id)
    }

    /// A live record other than `except` already holding the id of `item`.
    fn live_id_holder(&self, item: &Item, except: Option<&ItemKey>) -> Option<&Item> {
        self.items.iter().find(|other| {
            other.is_in_stock()
                && other.id() == item.id()
                && except.is_none_or(|key| &other.identity() != key)
                && !other.is_same_entity(item)
        })
    }

    fn ensure_id_free(&self, item: &Item, except: Option<&ItemKey>) -> Result<(), DomainError> {
        if !item.is_in_stock() {
            return Ok(());
        }
        match self.live_id_holder(item, except) {
            Some(holder) => Err(DomainError::conflict(format!(
                "id {} is already used by {}",
                item.id(),
                holder.name()
            ))),
            None => Ok(()),
        }
    }

    fn handle_add(&self, item: &Item) -> Result<Vec<InventoryEvent>, DomainError> {
        let key = item.identity();
        let Some((_, existing)) = self.find(&key) else {
            self.ensure_id_free(item, None)?;
            return Ok(vec![InventoryEvent::ItemAdded(item.clone())]);
        };

        let tags_differ = !item.tags().is_empty()
            && !existing.tags().is_empty()
            && item.tags() != existing.tags();
        if tags_differ {
            return Err(DomainError::conflict(format!(
                "{key} already exists with different tags"
            )));
        }

        let total = existing
            .count()
            .checked_add(item.count())
            .ok_or(DomainError::CountOverflow)?;
        self.ensure_id_free(&existing.with_count(total), Some(&key))?;

        let tags = if existing.tags().is_empty() {
            item.tags().clone()
        } else {
            existing.tags().clone()
        };

        Ok(vec![InventoryEvent::StockAdded {
            item: key,
            added: item.count(),
            tags,
        }])
    }

    fn handle_remove(&self, lines: &[StockLine]) -> Result<Vec<InventoryEvent>, DomainError> {
        let mut events = Vec::with_capacity(lines.len());
        for (index, line) in lines.iter().enumerate() {
            let (_, item) = self.find(&line.item).ok_or_else(DomainError::not_found)?;

            // The same identity may appear on several lines.
            let already_requested = lines[..index]
                .iter()
                .filter(|other| other.item == line.item)
                .fold(0u32, |acc, other| acc.saturating_add(other.count));
            let available = item.count().saturating_sub(already_requested);

            if line.count > available {
                return Err(DomainError::insufficient_stock(
                    item.name().as_str(),
                    available,
                    line.count,
                ));
            }

            events.push(InventoryEvent::StockRemoved {
                item: line.item.clone(),
                removed: line.count,
            });
        }
        Ok(events)
    }

    fn handle_set(&self, target: &ItemKey, edited: &Item) -> Result<Vec<InventoryEvent>, DomainError> {
        if self.find(target).is_none() {
            return Err(DomainError::not_found());
        }

        let edited_key = edited.identity();
        if &edited_key != target && self.find(&edited_key).is_some() {
            return Err(DomainError::conflict(format!("{edited_key} already exists")));
        }
        self.ensure_id_free(edited, Some(target))?;

        Ok(vec![InventoryEvent::ItemReplaced {
            target: target.clone(),
            item: edited.clone(),
        }])
    }

    fn handle_delete(&self, key: &ItemKey) -> Result<Vec<InventoryEvent>, DomainError> {
        if self.find(key).is_none() {
            return Err(DomainError::not_found());
        }
        Ok(vec![InventoryEvent::ItemDeleted(key.clone())])
    }

    fn handle_reset(&self, items: &[Item]) -> Result<Vec<InventoryEvent>, DomainError> {
        for (index, item) in items.iter().enumerate() {
            let earlier = &items[..index];
            if earlier.iter().any(|other| other.is_same_entity(item)) {
                return Err(DomainError::conflict(format!(
                    "{} appears more than once",
                    item.identity()
                )));
            }
            let id_clash = item.is_in_stock()
                && earlier
                    .iter()
                    .any(|other| other.is_in_stock() && other.id() == item.id());
            if id_clash {
                return Err(DomainError::conflict(format!(
                    "id {} is held by more than one item in stock",
                    item.id()
                )));
            }
        }
        Ok(vec![InventoryEvent::InventoryReset(items.to_vec())])
    }
}

impl Aggregate for Inventory {
    type Command = InventoryCommand;
    type Event = InventoryEvent;
    type Error = DomainError;

    fn version(&self) -> u64 {
        self.version
    }

    fn apply(&mut self, event: &Self::Event) {
        match event {
            InventoryEvent::ItemAdded(item) => self.items.push(item.clone()),
            InventoryEvent::StockAdded { item, added, tags } => {
                if let Some((index, existing)) = self.find(item) {
                    let updated = existing
                        .with_count(existing.count().saturating_add(*added))
                        .with_tags(tags.clone());
                    self.items.set(index, updated);
                }
            }
            InventoryEvent::StockRemoved { item, removed } => {
                if let Some((index, existing)) = self.find(item) {
                    let updated = existing.with_count(existing.count().saturating_sub(*removed));
                    self.items.set(index, updated);
                }
            }
            InventoryEvent::ItemReplaced { target, item } => {
                if let Some((index, _)) = self.find(target) {
                    self.items.set(index, item.clone());
                }
            }
            InventoryEvent::ItemDeleted(key) => {
                if let Some((index, _)) = self.find(key) {
                    self.items.remove(index);
                }
            }
            InventoryEvent::InventoryReset(items) => self.items.replace_all(items.clone()),
        }

        tracing::debug!(event = event.event_type(), version = self.version + 1, "applied inventory event");

        // Deterministic version tracking: +1 per applied event.
        self.version += 1;
    }

    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        match command {
            InventoryCommand::AddItem(item) => self.handle_add(item),
            InventoryCommand::RemoveStock(lines) => self.handle_remove(lines),
            InventoryCommand::SetItem { target, edited } => self.handle_set(target, edited),
            InventoryCommand::DeleteItem(key) => self.handle_delete(key),
            InventoryCommand::Reset(items) => self.handle_reset(items),
        }
    }
}
