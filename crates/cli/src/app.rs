//! The session: loads state, runs command lines and saves on the way out.

use std::io::{BufRead, Write};

use anyhow::Context;

use larder_inventory::{Inventory, TransactionLog, sample};
use larder_logic::{CommandError, LogicManager};
use larder_model::{InventorySnapshot, Model, ModelManager, Storage, UserPrefs};

use crate::editor::{LineEditor, ReadResult};

pub const PROMPT: &str = "larder> ";

/// Whether the loop should keep reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub struct App<S: Storage> {
    logic: LogicManager,
    storage: S,
    save_on_exit: bool,
}

impl<S: Storage> App<S> {
    /// Loads preferences and the inventory they point at.
    ///
    /// A missing preferences file gives the defaults and a missing inventory
    /// file gives the sample data. An inventory file that cannot be read or
    /// holds conflicting records gives an empty inventory.
    pub fn load(storage: S, save_on_exit: bool) -> anyhow::Result<Self> {
        let prefs = storage
            .read_prefs()
            .context("failed to read preferences")?
            .unwrap_or_else(|| {
                tracing::warn!("preferences file not found; using defaults");
                UserPrefs::default()
            });

        let (inventory, transactions) = match storage.read_inventory(prefs.inventory_file_path()) {
            Ok(Some(snapshot)) => restore(snapshot),
            Ok(None) => {
                tracing::warn!(
                    path = %prefs.inventory_file_path().display(),
                    "inventory file not found; starting with sample data"
                );
                (sample::sample_inventory(), TransactionLog::new())
            }
            Err(err) => {
                tracing::warn!(error = %err, "inventory file unreadable; starting with an empty inventory");
                (Inventory::new(), TransactionLog::new())
            }
        };

        Ok(Self {
            logic: LogicManager::new(ModelManager::new(inventory, transactions, prefs)),
            storage,
            save_on_exit,
        })
    }

    pub fn logic(&self) -> &LogicManager {
        &self.logic
    }

    /// Runs one line, writing its feedback and the display to `out`.
    pub fn handle_line(&mut self, line: &str, out: &mut impl Write) -> anyhow::Result<Flow> {
        if line.trim().is_empty() {
            return Ok(Flow::Continue);
        }

        match self.logic.execute(line) {
            Ok(result) => {
                writeln!(out, "{}", result.feedback())?;
                if result.is_exit() {
                    return Ok(Flow::Exit);
                }
                if !result.is_show_help() {
                    self.print_display(out)?;
                }
            }
            Err(err) => {
                writeln!(out, "{err}")?;
                if matches!(err, CommandError::MultipleMatches(_)) {
                    self.print_display(out)?;
                }
            }
        }
        Ok(Flow::Continue)
    }

    fn print_display(&self, out: &mut impl Write) -> anyhow::Result<()> {
        writeln!(out, "[{}]", self.logic.display_mode())?;
        for (position, entry) in self.logic.filtered_display_view().iter().enumerate() {
            writeln!(out, "{:>3}. {entry}", position + 1)?;
        }
        Ok(())
    }

    /// Interactive loop over a line editor, until `exit` or end of input.
    pub fn run_interactive(&mut self, editor: &mut impl LineEditor, out: &mut impl Write) -> anyhow::Result<()> {
        writeln!(out, "Type `help` for the list of commands.")?;
        self.print_display(out)?;

        loop {
            let line = match editor.read_line(PROMPT)? {
                ReadResult::Line(line) => line,
                ReadResult::Interrupted => continue,
                ReadResult::Eof => break,
            };
            editor.add_history(&line);
            if self.handle_line(&line, out)? == Flow::Exit {
                break;
            }
        }
        Ok(())
    }

    /// Reads commands from `input` one per line, without prompting.
    pub fn run_batch(&mut self, input: impl BufRead, out: &mut impl Write) -> anyhow::Result<()> {
        for line in input.lines() {
            let line = line.context("failed to read command input")?;
            if self.handle_line(&line, out)? == Flow::Exit {
                break;
            }
        }
        Ok(())
    }

    /// Writes preferences and the inventory snapshot, unless saving is off.
    pub fn save(&self) -> anyhow::Result<()> {
        if !self.save_on_exit {
            tracing::info!("saving disabled; leaving files untouched");
            return Ok(());
        }

        let model = self.logic.model();
        self.storage
            .save_prefs(model.user_prefs())
            .context("failed to save preferences")?;

        let snapshot = InventorySnapshot {
            items: model.inventory().items().to_vec(),
            transactions: model.transactions().records().to_vec(),
        };
        let path = model.inventory_file_path();
        self.storage
            .save_inventory(path, &snapshot)
            .with_context(|| format!("failed to save inventory to {}", path.display()))
    }
}

fn restore(snapshot: InventorySnapshot) -> (Inventory, TransactionLog) {
    let transactions = TransactionLog::from_records(snapshot.transactions);
    match Inventory::from_items(snapshot.items) {
        Ok(inventory) => (inventory, transactions),
        Err(err) => {
            tracing::warn!(error = %err, "saved inventory is inconsistent; starting with an empty inventory");
            (Inventory::new(), transactions)
        }
    }
}
