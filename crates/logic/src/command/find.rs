use std::rc::Rc;

use larder_inventory::Item;
use larder_model::Model;

use super::{CommandError, CommandResult, Execute};

pub const COMMAND_WORD: &str = "find";

pub const USAGE: &str = "find: Lists items whose names contain any of the keywords (case-insensitive). \
Parameters: KEYWORD [MORE_KEYWORDS]...\n\
Example: find bagel donut";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindCommand {
    keywords: Vec<String>,
}

impl FindCommand {
    pub fn new(keywords: Vec<String>) -> Self {
        Self { keywords }
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }
}

/// True if one of the words of the item's name equals a keyword, ignoring case.
fn name_has_any_word(item: &Item, keywords: &[String]) -> bool {
    item.name()
        .as_str()
        .split_whitespace()
        .any(|word| keywords.iter().any(|keyword| keyword.eq_ignore_ascii_case(word)))
}

impl Execute for FindCommand {
    fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        let keywords = self.keywords.clone();
        model.update_filtered_item_list(Rc::new(move |item: &Item| name_has_any_word(item, &keywords)));
        let shown = model.filtered_item_view().len();
        Ok(CommandResult::new(format!("{shown} items listed!")))
    }
}
