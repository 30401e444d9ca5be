use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

pub const DEFAULT_HISTORY_CAPACITY: usize = 10;

/// One completed calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub expression: String,
    pub result: String,
}

impl HistoryEntry {
    #[must_use]
    pub fn new(expression: impl Into<String>, result: impl Into<String>) -> Self {
        Self {
            expression: expression.into(),
            result: result.into(),
        }
    }

    /// `"<expression> = <result>"`, the form shown in the history panel.
    #[must_use]
    pub fn line(&self) -> String {
        format!("{} = {}", self.expression, self.result)
    }
}

/// What `record` does once the log is full.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum HistoryOverflow {
    /// New entries are discarded; recorded entries are never touched.
    #[default]
    DropNewest,
    /// The oldest entry is evicted to make room.
    OverwriteOldest,
}

/// Bounded, append-only calculation log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryLog {
    entries: VecDeque<HistoryEntry>,
    capacity: usize,
    overflow: HistoryOverflow,
}

impl Default for HistoryLog {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY, HistoryOverflow::default())
    }
}

impl HistoryLog {
    #[must_use]
    pub fn new(capacity: usize, overflow: HistoryOverflow) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
            overflow,
        }
    }

    /// Appends an entry. Returns `false` when the entry was dropped.
    pub fn record(&mut self, expression: impl Into<String>, result: impl Into<String>) -> bool {
        if self.capacity == 0 {
            return false;
        }
        if self.entries.len() >= self.capacity {
            match self.overflow {
                HistoryOverflow::DropNewest => {
                    debug!(capacity = self.capacity, "history full, entry dropped");
                    return false;
                }
                HistoryOverflow::OverwriteOldest => {
                    self.entries.pop_front();
                }
            }
        }
        self.entries.push_back(HistoryEntry::new(expression, result));
        trace!(count = self.entries.len(), "history entry recorded");
        true
    }

    /// Up to `n` entries, most recent first.
    #[must_use]
    pub fn most_recent(&self, n: usize) -> Vec<&HistoryEntry> {
        self.entries.iter().rev().take(n).collect()
    }

    /// All entries, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.capacity
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[must_use]
    pub fn overflow(&self) -> HistoryOverflow {
        self.overflow
    }
}
