//! Starter stock for a first run with no saved inventory.

use larder_core::ValueObject;

use crate::inventory::Inventory;
use crate::item::{Item, ItemId, Name, Tag};

const SAMPLE_ITEMS: &[(&str, u32, u32, &[&str])] = &[
    ("Oatmeal Cookie", 140121, 24, &["baked"]),
    ("Banana Muffin", 201928, 12, &["baked"]),
    ("Pecan Pie", 178522, 4, &["baked"]),
    ("Oreo Cheesecake", 109128, 6, &["dessert"]),
    ("Strawberry Shortcake", 91287, 6, &["dessert"]),
    ("Cold Brew Coffee", 1858, 30, &["beverage"]),
];

pub fn sample_items() -> Vec<Item> {
    SAMPLE_ITEMS
        .iter()
        .filter_map(|(name, id, count, tags)| {
            let name = Name::parse(name).ok()?;
            let id = ItemId::new(*id).ok()?;
            let tags = tags.iter().filter_map(|tag| Tag::parse(tag).ok());
            Some(Item::new(name, id, *count, tags))
        })
        .collect()
}

pub fn sample_inventory() -> Inventory {
    // The sample table has unique names and ids, so this cannot conflict.
    Inventory::from_items(sample_items()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_sample_row_is_valid() {
        assert_eq!(sample_items().len(), SAMPLE_ITEMS.len());
    }

    #[test]
    fn sample_inventory_holds_every_item() {
        assert_eq!(sample_inventory().items(), sample_items().as_slice());
    }
}
