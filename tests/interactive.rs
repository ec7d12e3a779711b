use std::io::{self, BufReader, Cursor, Read, Write};

use basic_calc::repl::{run_session, ReaderSource};
use basic_calc::Calculator;

/// Collects output but fails the first write of a `Result:` line.
struct FailOnResult {
    buf: Vec<u8>,
    failed: bool,
}

impl Write for FailOnResult {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        if !self.failed && String::from_utf8_lossy(data).contains("Result:") {
            self.failed = true;
            return Err(io::Error::new(io::ErrorKind::Other, "disk full"));
        }
        self.buf.write(data)
    }
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

struct DeadTty;

impl Read for DeadTty {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::Other, "tty gone"))
    }
}

/// Feeds `lines` to a fresh session and returns everything it printed.
fn drive(lines: &[&str]) -> (String, Calculator) {
    let script: String = lines.iter().map(|l| format!("{l}\n")).collect();
    let mut input = ReaderSource::new(Cursor::new(script.into_bytes()));
    let mut out = Vec::new();
    let mut calc = Calculator::new();
    run_session(&mut input, &mut out, &mut calc).expect("session ends cleanly");
    (String::from_utf8(out).unwrap(), calc)
}

#[test]
fn add_then_subtract_then_view_history() {
    let (out, calc) = drive(&["1", "2", "3", "", "2", "10", "4", "", "3", "", "0"]);
    assert!(out.contains("Result: 2 + 3 = 5"));
    assert!(out.contains("Result: 10 - 4 = 6"));
    assert!(out.contains("Calculation History:"));
    assert!(out.contains("1. 2 + 3 = 5\n2. 10 - 4 = 6"));
    assert!(out.contains("HARVIR'S BASIC CALCULATOR"));
    assert!(out.contains("Thank you for using Harvir's Basic Calculator!"));
    assert_eq!(calc.get_history(), vec!["2 + 3 = 5", "10 - 4 = 6"]);
}

#[test]
fn invalid_operands_are_reprompted() {
    let (out, calc) = drive(&["1", "abc", "1.5", "", "x", "2", "", "0"]);
    assert_eq!(out.matches("Please enter a valid number!").count(), 3);
    assert!(out.contains("Result: 1.5 + 2 = 3.5"));
    assert_eq!(calc.history_len(), 1);
}

#[test]
fn unknown_choice_keeps_looping() {
    let (out, calc) = drive(&["9", "", "  1 ", "4", "4", "", "0"]);
    assert!(out.contains("Invalid choice! Please select 0-4."));
    assert!(out.contains("Result: 4 + 4 = 8"));
    assert_eq!(calc.history_len(), 1);
    // Menu is shown again after the rejected choice.
    assert_eq!(out.matches("0. Exit").count(), 3);
}

#[test]
fn clear_history_empties_view() {
    let (out, calc) = drive(&["1", "1", "1", "", "4", "", "3", "", "0"]);
    assert!(out.contains("History cleared!"));
    assert!(out.contains("No calculations in history."));
    assert_eq!(calc.history_len(), 0);
}

#[test]
fn empty_history_view() {
    let (out, _) = drive(&["3", "", "0"]);
    assert!(out.contains("No calculations in history."));
    assert!(!out.contains("Calculation History:"));
}

#[test]
fn end_of_input_at_pause_ends_session() {
    let (out, calc) = drive(&["2", "5", "7"]);
    assert!(out.contains("Result: 5 - 7 = -2"));
    assert!(!out.contains("Thank you"));
    assert_eq!(calc.history_len(), 1);
}

#[test]
fn failed_action_is_reported_and_loop_continues() {
    let script = "1\n2\n3\n\n3\n\n0\n";
    let mut input = ReaderSource::new(Cursor::new(script.as_bytes().to_vec()));
    let mut out = FailOnResult { buf: Vec::new(), failed: false };
    let mut calc = Calculator::new();

    run_session(&mut input, &mut out, &mut calc).expect("write failures stay inside the loop");

    let out = String::from_utf8(out.buf).unwrap();
    assert!(out.contains("An unexpected error occurred: disk full"));
    assert!(out.contains("1. 2 + 3 = 5"));
    assert!(out.contains("Thank you for using Harvir's Basic Calculator!"));
    assert_eq!(calc.history_len(), 1);
}

#[test]
fn broken_input_stream_escapes_the_session() {
    let mut input = ReaderSource::new(BufReader::new(DeadTty));
    let mut out = Vec::new();
    let mut calc = Calculator::new();

    let err = run_session(&mut input, &mut out, &mut calc).unwrap_err();
    assert_eq!(err.to_string(), "input error: tty gone");
    assert!(String::from_utf8(out).unwrap().contains("0. Exit"));
}
