use larder_model::Model;

use super::{CommandError, CommandResult, Execute, USAGES};

pub const HELP_WORD: &str = "help";

pub const HELP_USAGE: &str = "help: Shows how to use every command.";

pub const EXIT_WORD: &str = "exit";

pub const EXIT_USAGE: &str = "exit: Saves and quits.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HelpCommand;

impl Execute for HelpCommand {
    fn execute(&self, _model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        Ok(CommandResult::help(USAGES.join("\n\n")))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExitCommand;

impl Execute for ExitCommand {
    fn execute(&self, _model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        Ok(CommandResult::exit("Exiting as requested ..."))
    }
}
