// lib.rs

pub mod app;
pub mod calculator;
pub mod error;
pub mod hints;
pub mod history;
pub mod logging;
pub mod menu;
pub mod oneshot;
pub mod parser;
pub mod repl;
pub mod util;

pub use calculator::Calculator;
pub use error::CalcError;
pub use parser::Operation;
