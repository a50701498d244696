use larder_inventory::Item;
use larder_model::{DisplayItem, DisplayMode, Model, ModelManager};

use crate::command::{CommandError, CommandResult, Execute};
use crate::parser::parse_command;

/// Parses and runs user input against a model, one line at a time.
#[derive(Debug, Default)]
pub struct LogicManager<M: Model = ModelManager> {
    model: M,
}

impl<M: Model> LogicManager<M> {
    pub fn new(model: M) -> Self {
        Self { model }
    }

    /// Runs one raw command line.
    ///
    /// A failed parse or a rejected command leaves the model as it was, apart
    /// from the item view narrowing to the candidates of an ambiguous match.
    pub fn execute(&mut self, raw: &str) -> Result<CommandResult, CommandError> {
        let command = parse_command(raw).inspect_err(|err| {
            tracing::debug!(input = raw, kind = ?err.kind(), "parse failed");
        })?;

        let word = command.word();
        match command.execute(&mut self.model) {
            Ok(result) => {
                tracing::info!(command = word, feedback = result.feedback(), "command executed");
                Ok(result)
            }
            Err(err) => {
                tracing::warn!(command = word, error = %err, "command rejected");
                Err(err)
            }
        }
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn model_mut(&mut self) -> &mut M {
        &mut self.model
    }

    pub fn into_model(self) -> M {
        self.model
    }

    pub fn filtered_item_view(&self) -> &[Item] {
        self.model.filtered_item_view()
    }

    pub fn display_mode(&self) -> DisplayMode {
        self.model.display_mode()
    }

    pub fn filtered_display_view(&self) -> Vec<DisplayItem> {
        self.model.filtered_display_view()
    }
}
