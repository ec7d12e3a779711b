// menu.rs

use itertools::Itertools;

use crate::parser::Operation;

pub const TITLE: &str = "HARVIR'S BASIC CALCULATOR";
const WIDTH: usize = 40;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuChoice {
    Calculate(Operation),
    ViewHistory,
    ClearHistory,
    Exit,
}

impl MenuChoice {
    /// Display order of the menu.
    pub const ALL: [MenuChoice; 5] = [
        MenuChoice::Calculate(Operation::Add),
        MenuChoice::Calculate(Operation::Subtract),
        MenuChoice::ViewHistory,
        MenuChoice::ClearHistory,
        MenuChoice::Exit,
    ];

    pub fn key(self) -> char {
        match self {
            MenuChoice::Calculate(Operation::Add) => '1',
            MenuChoice::Calculate(Operation::Subtract) => '2',
            MenuChoice::ViewHistory => '3',
            MenuChoice::ClearHistory => '4',
            MenuChoice::Exit => '0',
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::Calculate(Operation::Add) => "Addition (+)",
            MenuChoice::Calculate(Operation::Subtract) => "Subtraction (-)",
            MenuChoice::ViewHistory => "View History",
            MenuChoice::ClearHistory => "Clear History",
            MenuChoice::Exit => "Exit",
        }
    }

    /// Expects already-trimmed input; only a single key character matches.
    pub fn parse(input: &str) -> Option<Self> {
        let mut chars = input.chars();
        match (chars.next(), chars.next()) {
            (Some(key), None) => Self::ALL.into_iter().find(|choice| choice.key() == key),
            _ => None,
        }
    }
}

pub fn render_menu() -> String {
    let rule = "=".repeat(WIDTH);
    let items = MenuChoice::ALL
        .iter()
        .map(|choice| format!("{}. {}", choice.key(), choice.label()))
        .join("\n");
    format!("\n{rule}\n{TITLE:^WIDTH$}\n{rule}\n{items}\n{rule}")
}

/// Numbers entries from 1.
pub fn render_history(entries: &[String]) -> String {
    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| format!("{}. {}", i + 1, entry))
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_map_to_choices() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::Calculate(Operation::Add)));
        assert_eq!(MenuChoice::parse("2"), Some(MenuChoice::Calculate(Operation::Subtract)));
        assert_eq!(MenuChoice::parse("3"), Some(MenuChoice::ViewHistory));
        assert_eq!(MenuChoice::parse("4"), Some(MenuChoice::ClearHistory));
        assert_eq!(MenuChoice::parse("0"), Some(MenuChoice::Exit));
    }

    #[test]
    fn anything_else_is_rejected() {
        for input in ["", "5", "9", "01", "10", "add", "exit"] {
            assert_eq!(MenuChoice::parse(input), None, "{input:?}");
        }
    }

    #[test]
    fn menu_lists_every_choice_in_order() {
        let menu = render_menu();
        let positions: Vec<usize> = MenuChoice::ALL
            .iter()
            .map(|c| menu.find(&format!("{}. {}", c.key(), c.label())).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(menu.contains(TITLE));
    }

    #[test]
    fn history_lines_are_numbered_from_one() {
        let entries = vec!["2 + 3 = 5".to_string(), "10 - 4 = 6".to_string()];
        assert_eq!(render_history(&entries), "1. 2 + 3 = 5\n2. 10 - 4 = 6");
        assert_eq!(render_history(&[]), "");
    }
}
