// hints.rs

use rustyline::completion::Completer;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};
use std::cell::Cell;

use crate::menu::MenuChoice;

/// Editor helper that shows the label of the menu entry being typed.
/// Hints are only shown while `menu_active` is set, so operand prompts
/// stay clean.
pub struct MenuHelper {
    pub menu_active: Cell<bool>,
}

impl MenuHelper {
    pub fn new() -> Self {
        Self { menu_active: Cell::new(false) }
    }

    pub fn hint_for(line: &str, pos: usize) -> Option<String> {
        if pos < line.len() {
            return None;
        }
        MenuChoice::parse(line.trim()).map(|choice| format!("  {}", choice.label()))
    }
}

impl Default for MenuHelper {
    fn default() -> Self {
        Self::new()
    }
}

impl Completer for MenuHelper {
    type Candidate = String;
}

impl Hinter for MenuHelper {
    type Hint = String;
    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        if !self.menu_active.get() {
            return None;
        }
        Self::hint_for(line, pos)
    }
}

impl Highlighter for MenuHelper {}

impl Validator for MenuHelper {}

impl Helper for MenuHelper {}
