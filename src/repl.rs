// repl.rs

use rustyline::config::BellStyle;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::{CompletionType, Config, Editor};
use std::io::{BufRead, Write};
use tracing::{debug, error};

use crate::calculator::Calculator;
use crate::error::CalcError;
use crate::hints::MenuHelper;
use crate::menu::{self, MenuChoice};
use crate::parser::parse_number;
use crate::util::writeln_ignore_broken_pipe as say;

pub const CHOICE_PROMPT: &str = "\nEnter your choice (0-4): ";
pub const PAUSE_PROMPT: &str = "\nPress Enter to continue...";

/// Where the interactive loop reads its lines from.
pub trait LineSource {
    /// `Ok(None)` means the user closed input (Ctrl-D / Ctrl-C).
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, CalcError>;

    fn read_choice(&mut self, prompt: &str) -> Result<Option<String>, CalcError> {
        self.read_line(prompt)
    }
}

/// Terminal input through rustyline.
pub struct LineEditor {
    rl: Editor<MenuHelper, DefaultHistory>,
}

impl LineEditor {
    pub fn new() -> Result<Self, CalcError> {
        let config = Config::builder()
            .completion_type(CompletionType::List)
            .auto_add_history(false)
            .bell_style(BellStyle::None)
            .build();
        let mut rl = Editor::with_config(config)?;
        rl.set_helper(Some(MenuHelper::new()));
        Ok(Self { rl })
    }
}

impl LineSource for LineEditor {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, CalcError> {
        match self.rl.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = self.rl.add_history_entry(line.as_str());
                }
                Ok(Some(line))
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn read_choice(&mut self, prompt: &str) -> Result<Option<String>, CalcError> {
        if let Some(helper) = self.rl.helper() {
            helper.menu_active.set(true);
        }
        let line = self.read_line(prompt);
        if let Some(helper) = self.rl.helper() {
            helper.menu_active.set(false);
        }
        line
    }
}

/// Plain buffered input, one line per read. Prompts are not echoed.
pub struct ReaderSource<R> {
    reader: R,
}

impl<R: BufRead> ReaderSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> LineSource for ReaderSource<R> {
    fn read_line(&mut self, _prompt: &str) -> Result<Option<String>, CalcError> {
        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) => Ok(None),
            Ok(_) => Ok(Some(line.trim_end_matches(['\r', '\n']).to_string())),
            Err(err) => Err(ReadlineError::Io(err).into()),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Menu loop. Returns when the user exits or input ends; a broken input
/// stream is the only error that escapes.
pub fn run_session<S, W>(input: &mut S, out: &mut W, calc: &mut Calculator) -> anyhow::Result<()>
where
    S: LineSource + ?Sized,
    W: Write + ?Sized,
{
    say(out, "Welcome to Harvir's Basic Calculator!")?;
    say(out, "This calculator supports addition and subtraction only.")?;

    loop {
        say(out, menu::render_menu())?;
        out.flush()?;
        let Some(line) = input.read_choice(CHOICE_PROMPT)? else {
            break;
        };

        let flow = match MenuChoice::parse(line.trim()) {
            Some(choice) => {
                debug!(?choice, "menu choice");
                run_choice(choice, input, out, calc)
            }
            None => {
                debug!(input = line.trim(), "rejected menu choice");
                say(out, "\nInvalid choice! Please select 0-4.")
                    .map(|_| Flow::Continue)
                    .map_err(CalcError::from)
            }
        };

        match flow {
            Ok(Flow::Continue) => {}
            Ok(Flow::Quit) => break,
            Err(err) if err.is_input() => return Err(err.into()),
            Err(err) => {
                error!(%err, "menu action failed");
                say(out, format!("\nAn unexpected error occurred: {err}"))?;
            }
        }

        out.flush()?;
        if input.read_line(PAUSE_PROMPT)?.is_none() {
            break;
        }
    }
    out.flush()?;
    Ok(())
}

fn run_choice<S, W>(choice: MenuChoice, input: &mut S, out: &mut W, calc: &mut Calculator) -> Result<Flow, CalcError>
where
    S: LineSource + ?Sized,
    W: Write + ?Sized,
{
    match choice {
        MenuChoice::Calculate(op) => {
            let Some(a) = read_number(input, out, "Enter first number: ")? else {
                return Ok(Flow::Quit);
            };
            let Some(b) = read_number(input, out, "Enter second number: ")? else {
                return Ok(Flow::Quit);
            };
            let result = calc.apply(op, a, b);
            say(out, format!("\nResult: {} {} {} = {}", a, op.symbol(), b, result))?;
        }
        MenuChoice::ViewHistory => {
            if calc.has_history() {
                say(out, "\nCalculation History:")?;
                say(out, "-".repeat(25))?;
                say(out, menu::render_history(&calc.get_history()))?;
            } else {
                say(out, "\nNo calculations in history.")?;
            }
        }
        MenuChoice::ClearHistory => {
            calc.clear_history();
            say(out, "\nHistory cleared!")?;
        }
        MenuChoice::Exit => {
            say(out, "\nThank you for using Harvir's Basic Calculator!")?;
            return Ok(Flow::Quit);
        }
    }
    Ok(Flow::Continue)
}

/// Prompts until the line parses as a number. `None` if input ends first.
fn read_number<S, W>(input: &mut S, out: &mut W, prompt: &str) -> Result<Option<f64>, CalcError>
where
    S: LineSource + ?Sized,
    W: Write + ?Sized,
{
    loop {
        out.flush()?;
        let Some(line) = input.read_line(prompt)? else {
            return Ok(None);
        };
        match parse_number(&line) {
            Ok(n) => return Ok(Some(n)),
            Err(err) => {
                debug!(%err, "re-prompting");
                say(out, "Please enter a valid number!")?;
            }
        }
    }
}
