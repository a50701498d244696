//! Fixtures shared by the command tests.

use larder_core::ValueObject;
use larder_inventory::{Inventory, Item, ItemDescriptor, ItemId, Name, Tag, TransactionLog};
use larder_model::{ModelManager, UserPrefs};

pub fn item(name: &str, id: u32, count: u32) -> Item {
    Item::new(Name::parse(name).unwrap(), ItemId::new(id).unwrap(), count, [])
}

pub fn tagged(name: &str, id: u32, count: u32, tags: &[&str]) -> Item {
    Item::new(
        Name::parse(name).unwrap(),
        ItemId::new(id).unwrap(),
        count,
        tags.iter().map(|tag| Tag::parse(tag).unwrap()),
    )
}

pub fn bagel() -> Item {
    item("Bagel", 100, 5)
}

pub fn donut() -> Item {
    item("Donut", 200, 3)
}

pub fn model_with(items: Vec<Item>) -> ModelManager {
    ModelManager::new(
        Inventory::from_items(items).unwrap(),
        TransactionLog::new(),
        UserPrefs::default(),
    )
}

pub fn bakery() -> ModelManager {
    model_with(vec![bagel(), donut()])
}

pub fn named(name: &str) -> ItemDescriptor {
    ItemDescriptor::new().with_name(Name::parse(name).unwrap())
}

pub fn with_id(descriptor: ItemDescriptor, id: u32) -> ItemDescriptor {
    descriptor.with_id(ItemId::new(id).unwrap())
}
