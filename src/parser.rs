// parser.rs

use std::fmt;

use crate::error::CalcError;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Operation {
    Add,
    Subtract,
}

/// Accepted spellings for each operation, matched case-insensitively.
const ALIASES: &[(&str, Operation)] = &[
    ("add", Operation::Add),
    ("+", Operation::Add),
    ("subtract", Operation::Subtract),
    ("sub", Operation::Subtract),
    ("-", Operation::Subtract),
];

impl Operation {
    pub const ALL: [Operation; 2] = [Operation::Add, Operation::Subtract];

    pub fn name(self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Operation::Add => '+',
            Operation::Subtract => '-',
        }
    }

    pub fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            Operation::Add => a + b,
            Operation::Subtract => a - b,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub fn parse_operation(word: &str) -> Result<Operation, CalcError> {
    let lowered = word.to_lowercase();
    ALIASES
        .iter()
        .find(|(alias, _)| *alias == lowered)
        .map(|&(_, op)| op)
        .ok_or_else(|| CalcError::UnknownOperation(word.to_string()))
}

/// Parses a trimmed `f64`. A single `_` between two digits is a separator
/// (`1_000`); any other underscore rejects the input.
pub fn parse_number(text: &str) -> Result<f64, CalcError> {
    let invalid = || CalcError::InvalidNumber(text.to_string());
    let trimmed = text.trim();
    let digits = strip_digit_separators(trimmed).ok_or_else(invalid)?;
    digits.parse::<f64>().map_err(|_| invalid())
}

fn strip_digit_separators(text: &str) -> Option<String> {
    let bytes = text.as_bytes();
    let mut out = String::with_capacity(text.len());
    for (i, ch) in text.char_indices() {
        if ch != '_' {
            out.push(ch);
            continue;
        }
        let before = i.checked_sub(1).map(|j| bytes[j]);
        let after = bytes.get(i + 1).copied();
        match (before, after) {
            (Some(b), Some(a)) if b.is_ascii_digit() && a.is_ascii_digit() => {}
            _ => return None,
        }
    }
    Some(out)
}
