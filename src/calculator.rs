// calculator.rs

use tracing::debug;

use crate::history::{History, HistoryEntry};
use crate::parser::Operation;

/// Two-operand add/subtract engine with an in-memory operation log.
#[derive(Debug, Default)]
pub struct Calculator {
    history: History,
}

impl Calculator {
    pub fn new() -> Self {
        Self { history: History::new() }
    }

    pub fn add(&mut self, a: f64, b: f64) -> f64 {
        self.apply(Operation::Add, a, b)
    }

    pub fn subtract(&mut self, a: f64, b: f64) -> f64 {
        self.apply(Operation::Subtract, a, b)
    }

    /// Runs `op` and records it. Inputs are assumed already validated.
    pub fn apply(&mut self, op: Operation, a: f64, b: f64) -> f64 {
        let result = op.apply(a, b);
        let entry = HistoryEntry::new(a, op, b, result);
        debug!(%entry, "recorded");
        self.history.add(entry);
        result
    }

    /// Snapshot of the log, oldest first. Changing it does not touch the engine.
    pub fn get_history(&self) -> Vec<String> {
        self.history.lines()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn has_history(&self) -> bool {
        !self.history.is_empty()
    }

    pub fn clear_history(&mut self) {
        if !self.has_history() {
            return;
        }
        debug!(dropped = self.history.len(), "history cleared");
        self.history.clear();
    }
}
