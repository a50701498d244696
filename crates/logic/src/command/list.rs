use larder_model::{Model, show_all};

use super::{CommandError, CommandResult, Execute};

pub const COMMAND_WORD: &str = "list";

pub const USAGE: &str = "list: Lists all items in the inventory.";

pub const MESSAGE_SUCCESS: &str = "Listed all items";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ListCommand;

impl Execute for ListCommand {
    fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        model.update_filtered_item_list(show_all());
        Ok(CommandResult::new(MESSAGE_SUCCESS))
    }
}
