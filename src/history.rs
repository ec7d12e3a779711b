// history.rs

use std::fmt;

use crate::parser::Operation;

/// One completed operation, rendered as `<a> <op> <b> = <result>`.
#[derive(Clone, Debug, PartialEq)]
pub struct HistoryEntry {
    lhs: f64,
    op: Operation,
    rhs: f64,
    result: f64,
}

impl HistoryEntry {
    pub fn new(lhs: f64, op: Operation, rhs: f64, result: f64) -> Self {
        Self { lhs, op, rhs, result }
    }
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} = {}", self.lhs, self.op.symbol(), self.rhs, self.result)
    }
}

/// Append-only log of entries; only a full clear removes anything.
#[derive(Debug, Default)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }
    pub fn add(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }
    pub fn len(&self) -> usize {
        self.entries.len()
    }
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
    pub fn clear(&mut self) {
        self.entries.clear();
    }
    pub fn lines(&self) -> Vec<String> {
        self.entries.iter().map(ToString::to_string).collect()
    }
}
