use larder_inventory::{ItemDescriptor, Scope};
use larder_model::Model;

use super::{CommandError, CommandResult, Execute, resolve_item};

pub const COMMAND_WORD: &str = "delete";

pub const USAGE: &str = "delete: Deletes an item record entirely, including empty records. \
Parameters: [NAME] [n/NAME] [i/ID]\n\
Example: delete i/100";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteCommand {
    descriptor: ItemDescriptor,
}

impl DeleteCommand {
    pub fn new(descriptor: ItemDescriptor) -> Self {
        Self { descriptor }
    }
}

impl Execute for DeleteCommand {
    fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        let item = resolve_item(model, &self.descriptor, Scope::IncludeEmpty)?;
        model.delete_item(&item)?;
        Ok(CommandResult::new(format!("Deleted item: {item}")))
    }
}
