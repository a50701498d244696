use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use larder_core::TransactionId;
use larder_events::ObservableList;

use crate::order::OrderLine;

/// A committed order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub id: TransactionId,
    pub occurred_at: DateTime<Utc>,
    pub lines: Vec<OrderLine>,
}

impl TransactionRecord {
    pub fn new(lines: Vec<OrderLine>, occurred_at: DateTime<Utc>) -> Self {
        Self {
            id: TransactionId::new(),
            occurred_at,
            lines,
        }
    }

    pub fn total_units(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.count)).sum()
    }

    /// True if any line is for an item with this name (case-insensitive).
    pub fn mentions_item(&self, name: &str) -> bool {
        self.lines
            .iter()
            .any(|line| line.item.name.as_str().eq_ignore_ascii_case(name.trim()))
    }
}

impl core::fmt::Display for TransactionRecord {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{} {} ({} units)",
            self.id,
            self.occurred_at.format("%Y-%m-%d %H:%M:%S"),
            self.total_units()
        )?;
        for line in &self.lines {
            write!(f, "\n  {line}")?;
        }
        Ok(())
    }
}

/// Append-only history of committed transactions, oldest first.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TransactionLog {
    records: ObservableList<TransactionRecord>,
}

impl TransactionLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<TransactionRecord>) -> Self {
        Self {
            records: ObservableList::from_vec(records),
        }
    }

    pub fn records(&self) -> &[TransactionRecord] {
        self.records.items()
    }

    /// The observable source backing this log, for live views.
    pub fn record_list(&self) -> &ObservableList<TransactionRecord> {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn append(&mut self, record: TransactionRecord) {
        self.records.push(record);
    }

    pub fn replace_all(&mut self, records: Vec<TransactionRecord>) {
        self.records.replace_all(records);
    }
}
