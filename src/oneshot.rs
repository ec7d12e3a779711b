// oneshot.rs

use itertools::Itertools;
use std::io::Write;
use tracing::debug;

use crate::calculator::Calculator;
use crate::error::CalcError;
use crate::parser::{parse_number, parse_operation, Operation};
use crate::util::writeln_ignore_broken_pipe as say;

pub const BIN_NAME: &str = env!("CARGO_PKG_NAME");

/// Resolves `<operation> <num1> <num2>` and applies it. The operation is
/// checked before the operand count.
pub fn execute(args: &[String], calc: &mut Calculator) -> Result<f64, CalcError> {
    let Some((word, operands)) = args.split_first() else {
        return Err(CalcError::UnknownOperation(String::new()));
    };
    let op = parse_operation(word)?;
    match operands {
        [a, b] => {
            let a = parse_number(a)?;
            let b = parse_number(b)?;
            Ok(calc.apply(op, a, b))
        }
        _ => Err(CalcError::WrongArity { op, got: operands.len() }),
    }
}

pub fn usage(op: Option<Operation>) -> String {
    match op {
        Some(op) => format!("Usage: {BIN_NAME} {} <num1> <num2>", op.name()),
        None => format!("Usage: {BIN_NAME} <operation> <num1> <num2>"),
    }
}

/// Runs one operation and prints the outcome. Bad input is reported on
/// `out` and is not an error; only a failed write escapes.
pub fn run_oneshot<W: Write + ?Sized>(args: &[String], calc: &mut Calculator, out: &mut W) -> anyhow::Result<()> {
    match execute(args, calc) {
        Ok(result) => say(out, format!("Result: {result}"))?,
        Err(CalcError::UnknownOperation(word)) => {
            debug!(%word, "unsupported operation");
            let names = Operation::ALL.iter().map(|op| op.name()).join(", ");
            say(out, format!("Available operations: {names}"))?;
            say(out, usage(None))?;
        }
        Err(CalcError::WrongArity { op, got }) => {
            debug!(%op, got, "wrong operand count");
            say(out, usage(Some(op)))?;
        }
        Err(CalcError::InvalidNumber(text)) => {
            debug!(%text, "operand is not a number");
            say(out, "Error: Please provide valid numbers")?;
        }
        Err(err) => return Err(err.into()),
    }
    out.flush()?;
    Ok(())
}
