//! Turns a raw command line into a [`Command`].

mod error;
mod field;
mod grammar;
mod tokenizer;

pub use error::{ParseError, ParseErrorKind};
pub use field::Index;
pub use tokenizer::{ArgumentMap, Prefix};

use crate::command::order::{ADD_TO_ORDER_WORD, CANCEL_ORDER_WORD, CHECKOUT_WORD, LIST_ORDER_WORD};
use crate::command::{
    CancelOrderCommand, CheckoutCommand, Command, ExitCommand, HelpCommand, ListCommand, ListOrderCommand, add,
    delete, edit, find, list, remove, session, transactions,
};

/// Parses one line of user input.
///
/// The first word selects the command; the rest is handed to that command's
/// grammar. Commands without arguments ignore anything after their word.
pub fn parse_command(input: &str) -> Result<Command, ParseError> {
    let input = input.trim();
    let (word, args) = match input.split_once(char::is_whitespace) {
        Some((word, args)) => (word, args),
        None => (input, ""),
    };

    match word {
        "" => Err(ParseError::invalid_format(session::HELP_USAGE)),
        add::COMMAND_WORD => grammar::parse_add(args),
        remove::COMMAND_WORD => grammar::parse_remove(args),
        edit::COMMAND_WORD => grammar::parse_edit(args),
        delete::COMMAND_WORD => grammar::parse_delete(args),
        find::COMMAND_WORD => grammar::parse_find(args),
        list::COMMAND_WORD => Ok(Command::List(ListCommand)),
        ADD_TO_ORDER_WORD => grammar::parse_add_to_order(args),
        LIST_ORDER_WORD => Ok(Command::ListOrder(ListOrderCommand)),
        CHECKOUT_WORD => Ok(Command::Checkout(CheckoutCommand)),
        CANCEL_ORDER_WORD => Ok(Command::CancelOrder(CancelOrderCommand)),
        transactions::COMMAND_WORD => grammar::parse_list_transactions(args),
        session::HELP_WORD => Ok(Command::Help(HelpCommand)),
        session::EXIT_WORD => Ok(Command::Exit(ExitCommand)),
        _ => Err(ParseError::new(ParseErrorKind::UnknownCommand, session::HELP_USAGE)),
    }
}
