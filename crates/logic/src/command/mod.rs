//! Command objects: one per verb of the command language.
//!
//! Every command validates first and mutates last, through the
//! all-or-nothing entry points of [`Model`]. A failed command leaves the
//! inventory, the order and the transaction log untouched.

pub mod add;
pub mod delete;
pub mod edit;
pub mod find;
pub mod list;
pub mod order;
pub mod remove;
pub mod session;
pub mod transactions;

#[cfg(test)]
pub(crate) mod test_support;

use std::rc::Rc;

use thiserror::Error;

use larder_core::DomainError;
use larder_inventory::{Item, ItemDescriptor, Scope};
use larder_model::Model;

use crate::parser::ParseError;

pub use add::AddCommand;
pub use delete::DeleteCommand;
pub use edit::EditCommand;
pub use find::FindCommand;
pub use list::ListCommand;
pub use order::{AddToOrderCommand, CancelOrderCommand, CheckoutCommand, ListOrderCommand};
pub use remove::RemoveCommand;
pub use session::{ExitCommand, HelpCommand};
pub use transactions::ListTransactionsCommand;

/// Outcome of a successful command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    feedback: String,
    show_help: bool,
    exit: bool,
}

impl CommandResult {
    pub fn new(feedback: impl Into<String>) -> Self {
        Self {
            feedback: feedback.into(),
            show_help: false,
            exit: false,
        }
    }

    pub fn help(feedback: impl Into<String>) -> Self {
        Self {
            show_help: true,
            ..Self::new(feedback)
        }
    }

    pub fn exit(feedback: impl Into<String>) -> Self {
        Self {
            exit: true,
            ..Self::new(feedback)
        }
    }

    pub fn feedback(&self) -> &str {
        &self.feedback
    }

    pub fn is_show_help(&self) -> bool {
        self.show_help
    }

    pub fn is_exit(&self) -> bool {
        self.exit
    }
}

/// Why a command was rejected. Each variant renders as one fixed message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("No item in the inventory matches the given description")]
    ItemNotFound,

    #[error("{0} items match the given description, please identify the item further (matching items are listed)")]
    MultipleMatches(usize),

    #[error("Only {available} {name} in stock, but {requested} requested")]
    InsufficientStock {
        name: String,
        available: u32,
        requested: u32,
    },

    #[error("{0}")]
    DuplicateIdentityConflict(String),

    #[error("The item index provided is invalid")]
    InvalidIndex,

    #[error("The order is empty")]
    EmptyOrder,

    #[error("The resulting count is too large to be stored")]
    CountOverflow,

    /// A rule of the inventory rejected the request.
    #[error("{0}")]
    Rejected(String),
}

impl From<DomainError> for CommandError {
    fn from(value: DomainError) -> Self {
        match value {
            DomainError::NotFound => CommandError::ItemNotFound,
            DomainError::MultipleMatches(count) => CommandError::MultipleMatches(count),
            DomainError::InsufficientStock {
                name,
                available,
                requested,
            } => CommandError::InsufficientStock {
                name,
                available,
                requested,
            },
            DomainError::Conflict(msg) => CommandError::DuplicateIdentityConflict(msg),
            DomainError::CountOverflow => CommandError::CountOverflow,
            DomainError::Validation(msg) | DomainError::InvariantViolation(msg) => CommandError::Rejected(msg),
        }
    }
}

/// A parsed command, ready to run against a model.
pub trait Execute {
    fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError>;
}

/// Every verb of the command language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(AddCommand),
    Remove(RemoveCommand),
    Edit(EditCommand),
    Delete(DeleteCommand),
    Find(FindCommand),
    List(ListCommand),
    AddToOrder(AddToOrderCommand),
    ListOrder(ListOrderCommand),
    Checkout(CheckoutCommand),
    CancelOrder(CancelOrderCommand),
    ListTransactions(ListTransactionsCommand),
    Help(HelpCommand),
    Exit(ExitCommand),
}

impl Command {
    /// The word the command is invoked with.
    pub fn word(&self) -> &'static str {
        match self {
            Command::Add(_) => add::COMMAND_WORD,
            Command::Remove(_) => remove::COMMAND_WORD,
            Command::Edit(_) => edit::COMMAND_WORD,
            Command::Delete(_) => delete::COMMAND_WORD,
            Command::Find(_) => find::COMMAND_WORD,
            Command::List(_) => list::COMMAND_WORD,
            Command::AddToOrder(_) => order::ADD_TO_ORDER_WORD,
            Command::ListOrder(_) => order::LIST_ORDER_WORD,
            Command::Checkout(_) => order::CHECKOUT_WORD,
            Command::CancelOrder(_) => order::CANCEL_ORDER_WORD,
            Command::ListTransactions(_) => transactions::COMMAND_WORD,
            Command::Help(_) => session::HELP_WORD,
            Command::Exit(_) => session::EXIT_WORD,
        }
    }
}

impl Execute for Command {
    fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        match self {
            Command::Add(command) => command.execute(model),
            Command::Remove(command) => command.execute(model),
            Command::Edit(command) => command.execute(model),
            Command::Delete(command) => command.execute(model),
            Command::Find(command) => command.execute(model),
            Command::List(command) => command.execute(model),
            Command::AddToOrder(command) => command.execute(model),
            Command::ListOrder(command) => command.execute(model),
            Command::Checkout(command) => command.execute(model),
            Command::CancelOrder(command) => command.execute(model),
            Command::ListTransactions(command) => command.execute(model),
            Command::Help(command) => command.execute(model),
            Command::Exit(command) => command.execute(model),
        }
    }
}

/// Usage of every command, shown by `help`.
pub const USAGES: &[&str] = &[
    add::USAGE,
    remove::USAGE,
    edit::USAGE,
    delete::USAGE,
    find::USAGE,
    list::USAGE,
    order::ADD_TO_ORDER_USAGE,
    order::LIST_ORDER_USAGE,
    order::CHECKOUT_USAGE,
    order::CANCEL_ORDER_USAGE,
    transactions::USAGE,
    session::HELP_USAGE,
    session::EXIT_USAGE,
];

/// Resolves `descriptor` to exactly one inventory item.
///
/// On an ambiguous description the item view is narrowed to the candidates
/// before the error is returned, so the user can see what matched.
pub(crate) fn resolve_item(
    model: &mut dyn Model,
    descriptor: &ItemDescriptor,
    scope: Scope,
) -> Result<Item, CommandError> {
    let found = larder_inventory::resolve(descriptor, model.inventory().items(), scope).cloned();
    match found {
        Ok(item) => Ok(item),
        Err(DomainError::MultipleMatches(count)) => {
            let candidates = larder_inventory::resolve::predicate(descriptor, scope);
            model.update_filtered_item_list(Rc::new(candidates));
            Err(CommandError::MultipleMatches(count))
        }
        Err(err) => Err(err.into()),
    }
}
