use larder_core::Entity;
use larder_inventory::Item;
use larder_model::Model;

use super::{CommandError, CommandResult, Execute};

pub const COMMAND_WORD: &str = "add";

pub const USAGE: &str = "add: Adds an item to the inventory, or adds to its stock if it already exists. \
Parameters: n/NAME i/ID c/COUNT [t/TAG]...\n\
Example: add n/Bagel i/100 c/5 t/baked";

/// Adds a new item or merges stock into the record with the same identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddCommand {
    item: Item,
}

impl AddCommand {
    pub fn new(item: Item) -> Self {
        Self { item }
    }

    pub fn item(&self) -> &Item {
        &self.item
    }
}

impl Execute for AddCommand {
    fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        let merging = model.has_item(&self.item);
        model.add_item(self.item.clone())?;

        let feedback = if merging {
            let key = self.item.identity();
            let total = model.inventory().get(&key).map_or(0, Item::count);
            format!("Added {} to {key}, {total} in stock now", self.item.count())
        } else {
            format!("New item added: {}", self.item)
        };
        Ok(CommandResult::new(feedback))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::test_support::{bagel, bakery, item, model_with, tagged};

    #[test]
    fn new_item_is_appended() {
        let mut model = bakery();
        let croissant = item("Croissant", 300, 4);

        let result = AddCommand::new(croissant.clone()).execute(&mut model).unwrap();

        assert_eq!(result.feedback(), format!("New item added: {croissant}"));
        assert_eq!(model.inventory().items().last(), Some(&croissant));
        assert_eq!(model.filtered_item_view().len(), 3);
    }

    #[test]
    fn same_identity_merges_count() {
        let mut model = bakery();

        let result = AddCommand::new(item("Bagel", 100, 2)).execute(&mut model).unwrap();

        assert_eq!(result.feedback(), "Added 2 to Bagel (#000100), 7 in stock now");
        assert_eq!(model.inventory().items()[0].count(), 7);
        assert_eq!(model.inventory().len(), 2);
    }

    #[test]
    fn zero_count_record_is_revived() {
        let mut model = model_with(vec![item("Bagel", 100, 0)]);
        AddCommand::new(bagel()).execute(&mut model).unwrap();
        assert_eq!(model.inventory().items(), &[bagel()]);
    }

    #[test]
    fn id_held_by_another_item_conflicts() {
        let mut model = bakery();
        let before = bakery();

        let err = AddCommand::new(item("Pretzel", 100, 1)).execute(&mut model).unwrap_err();

        assert!(matches!(err, CommandError::DuplicateIdentityConflict(_)));
        assert_eq!(model, before);
    }

    #[test]
    fn differing_tags_on_same_identity_conflict() {
        let mut model = model_with(vec![tagged("Bagel", 100, 5, &["baked"])]);
        let err = AddCommand::new(tagged("Bagel", 100, 1, &["frozen"]))
            .execute(&mut model)
            .unwrap_err();
        assert!(matches!(err, CommandError::DuplicateIdentityConflict(_)));
        assert_eq!(model.inventory().items()[0].count(), 5);
    }

    #[test]
    fn overflowing_count_is_rejected() {
        let mut model = model_with(vec![item("Bagel", 100, u32::MAX)]);
        let err = AddCommand::new(item("Bagel", 100, 1)).execute(&mut model).unwrap_err();
        assert_eq!(err, CommandError::CountOverflow);
    }

    #[test]
    fn equality_follows_the_item() {
        assert_eq!(AddCommand::new(bagel()), AddCommand::new(bagel()));
        assert_ne!(AddCommand::new(bagel()), AddCommand::new(item("Bagel", 100, 6)));
    }
}
