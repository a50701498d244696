//! Command language of the inventory: parsing, command objects and the
//! manager that runs one raw line against a [`larder_model::Model`].

pub mod command;
pub mod manager;
pub mod parser;

pub use command::{Command, CommandError, CommandResult, Execute, USAGES};
pub use manager::LogicManager;
pub use parser::{ParseError, ParseErrorKind, parse_command};
