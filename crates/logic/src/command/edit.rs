use larder_inventory::{Item, ItemDescriptor};
use larder_model::{Model, show_all};

use super::{CommandError, CommandResult, Execute};
use crate::parser::Index;

pub const COMMAND_WORD: &str = "edit";

pub const USAGE: &str = "edit: Edits the item at INDEX in the displayed item list. \
Existing values are overwritten; an empty t/ removes all tags. \
Parameters: INDEX [n/NAME] [i/ID] [c/COUNT] [t/TAG]...\n\
Example: edit 1 c/12 t/";

/// Replaces fields of the item at a position in the item view.
///
/// The edits are carried in an [`ItemDescriptor`]: every present field
/// overwrites the item's, absent fields are kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditCommand {
    index: Index,
    edits: ItemDescriptor,
}

impl EditCommand {
    pub fn new(index: Index, edits: ItemDescriptor) -> Self {
        Self { index, edits }
    }

    fn edited(&self, target: &Item) -> Item {
        let name = self.edits.name().unwrap_or(target.name()).clone();
        let id = self.edits.id().unwrap_or(target.id());
        let count = self.edits.count().unwrap_or(target.count());
        let tags = self.edits.tags().unwrap_or(target.tags()).clone();
        Item::new(name, id, count, tags)
    }
}

impl Execute for EditCommand {
    fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        let target = model
            .filtered_item_view()
            .get(self.index.zero_based())
            .cloned()
            .ok_or(CommandError::InvalidIndex)?;

        let edited = self.edited(&target);
        model.set_item(&target, edited.clone())?;
        model.update_filtered_item_list(show_all());

        Ok(CommandResult::new(format!("Edited item: {edited}")))
    }
}
