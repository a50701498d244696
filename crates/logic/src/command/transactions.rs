use std::rc::Rc;

use larder_inventory::TransactionRecord;
use larder_model::{DisplayMode, Model, show_everything, transactions_where};

use super::{CommandError, CommandResult, Execute};

pub const COMMAND_WORD: &str = "list-transactions";

pub const USAGE: &str = "list-transactions: Shows past transactions, optionally only those containing an item. \
Parameters: [ITEM_NAME]\n\
Example: list-transactions Bagel";

pub const MESSAGE_SUCCESS_ALL: &str = "Listed all transactions";

pub const MESSAGE_SUCCESS_ITEM: &str = "Listed transactions containing the given item";

/// Shows the transaction history on the display, always succeeding.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListTransactionsCommand {
    item_name: Option<String>,
}

impl ListTransactionsCommand {
    pub fn all() -> Self {
        Self::default()
    }

    /// Only transactions with a line for `item_name` (case-insensitive).
    /// A blank name lists everything.
    pub fn containing(item_name: impl Into<String>) -> Self {
        let item_name = item_name.into();
        let item_name = item_name.trim();
        Self {
            item_name: (!item_name.is_empty()).then(|| item_name.to_string()),
        }
    }
}

impl Execute for ListTransactionsCommand {
    fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        match &self.item_name {
            None => {
                model.update_filtered_display_list(DisplayMode::TransactionList, show_everything());
                Ok(CommandResult::new(MESSAGE_SUCCESS_ALL))
            }
            Some(name) => {
                let name = name.clone();
                let mentions = Rc::new(move |record: &TransactionRecord| record.mentions_item(&name));
                model.update_filtered_display_list(DisplayMode::TransactionList, transactions_where(mentions));
                Ok(CommandResult::new(MESSAGE_SUCCESS_ITEM))
            }
        }
    }
}
