// app.rs

use std::io::Write;
use tracing::error;

use crate::calculator::Calculator;
use crate::error::CalcError;
use crate::oneshot::run_oneshot;
use crate::repl::{run_session, LineSource};
use crate::util::writeln_ignore_broken_pipe as say;

/// Picks the mode from `args` (program name already stripped): none means
/// interactive, anything else is a one-shot operation. `open_input` is only
/// called for interactive mode. Failures are reported on `out` and never
/// returned.
pub fn run<S, F, W>(args: &[String], open_input: F, out: &mut W)
where
    S: LineSource,
    F: FnOnce() -> Result<S, CalcError>,
    W: Write + ?Sized,
{
    let mut calc = Calculator::new();
    let outcome = match args {
        [] => match open_input() {
            Ok(mut input) => run_session(&mut input, out, &mut calc),
            Err(err) => Err(err.into()),
        },
        _ => run_oneshot(args, &mut calc, out),
    };

    if let Err(err) = outcome {
        error!(error = %err, "calculator failed");
        let _ = say(out, format!("An unexpected error occurred: {err}"));
        let _ = out.flush();
    }
}
