use larder_inventory::{ItemDescriptor, Scope};
use larder_model::Model;

use super::{CommandError, CommandResult, Execute, resolve_item};

pub const COMMAND_WORD: &str = "remove";

pub const USAGE: &str = "remove: Removes stock of an item, identified by name and/or id. \
Parameters: [NAME] [n/NAME] [i/ID] [c/COUNT] [t/TAG]...\n\
Example: remove Bagel c/2";

/// Takes stock of one item out of the inventory.
///
/// A record brought down to zero stays in the inventory as an empty record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoveCommand {
    descriptor: ItemDescriptor,
}

impl RemoveCommand {
    pub fn new(descriptor: ItemDescriptor) -> Self {
        Self { descriptor }
    }

    pub fn descriptor(&self) -> &ItemDescriptor {
        &self.descriptor
    }
}

impl Execute for RemoveCommand {
    fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        let item = resolve_item(model, &self.descriptor, Scope::InStock)?;
        let count = self.descriptor.count_or_default();
        model.remove_stock(&item, count)?;
        Ok(CommandResult::new(format!("Removed {count} {} from the inventory", item.name())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::test_support::{bagel, bakery, donut, item, model_with, named, with_id};
    use larder_inventory::Item;

    #[test]
    fn removes_requested_count() {
        let mut model = model_with(vec![bagel()]);

        let result = RemoveCommand::new(with_id(named("Bagel"), 100).with_count(1))
            .execute(&mut model)
            .unwrap();

        assert_eq!(result.feedback(), "Removed 1 Bagel from the inventory");
        assert_eq!(model.inventory().items(), &[item("Bagel", 100, 4)]);
    }

    #[test]
    fn count_defaults_to_one() {
        let mut model = model_with(vec![bagel()]);
        RemoveCommand::new(named("Bagel")).execute(&mut model).unwrap();
        assert_eq!(model.inventory().items()[0].count(), 4);
    }

    #[test]
    fn removing_everything_keeps_an_empty_record() {
        let mut model = model_with(vec![bagel()]);
        RemoveCommand::new(named("Bagel").with_count(5)).execute(&mut model).unwrap();
        assert_eq!(model.inventory().items(), &[item("Bagel", 100, 0)]);

        let err = RemoveCommand::new(named("Bagel")).execute(&mut model).unwrap_err();
        assert_eq!(err, CommandError::ItemNotFound);
    }

    #[test]
    fn too_much_fails_without_mutation() {
        let mut model = model_with(vec![bagel()]);
        let err = RemoveCommand::new(named("Bagel").with_count(6))
            .execute(&mut model)
            .unwrap_err();
        assert_eq!(
            err,
            CommandError::InsufficientStock {
                name: "Bagel".to_string(),
                available: 5,
                requested: 6
            }
        );
        assert_eq!(model.inventory().items(), &[bagel()]);
    }

    #[test]
    fn unknown_item_is_not_found() {
        let mut model = bakery();
        let err = RemoveCommand::new(named("Scone")).execute(&mut model).unwrap_err();
        assert_eq!(err, CommandError::ItemNotFound);
    }

    #[test]
    fn ambiguous_description_lists_candidates() {
        let second_batch = item("Bagel", 300, 2);
        let mut model = model_with(vec![bagel(), donut(), second_batch.clone()]);

        let err = RemoveCommand::new(named("Bagel")).execute(&mut model).unwrap_err();

        assert_eq!(err, CommandError::MultipleMatches(2));
        let shown: Vec<Item> = model.filtered_item_view().to_vec();
        assert_eq!(shown, vec![bagel(), second_batch]);
    }

    #[test]
    fn name_of_one_item_and_id_of_another_is_ambiguous() {
        let mut model = bakery();

        let err = RemoveCommand::new(with_id(named("Bagel"), 200).with_count(1))
            .execute(&mut model)
            .unwrap_err();

        assert_eq!(err, CommandError::MultipleMatches(2));
        assert_eq!(model.filtered_item_view(), &[bagel(), donut()]);
        assert_eq!(model.inventory().items(), &[bagel(), donut()]);
    }

    #[test]
    fn equality_follows_the_descriptor() {
        let bagel = RemoveCommand::new(named("Bagel").with_count(1));
        assert_eq!(bagel, RemoveCommand::new(named("Bagel").with_count(1)));
        assert_ne!(bagel, RemoveCommand::new(named("Donut").with_count(1)));
    }
}
