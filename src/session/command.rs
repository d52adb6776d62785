//! Classification of prompt input into commands and operators.

use std::str::FromStr;

use crate::calculator::{CalcError, Operator};

/// What a line typed at the main prompt asks for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Collect operands and evaluate this operator.
    Evaluate(Operator),
    Help,
    History,
    Degrees,
    Radians,
    Mode,
    /// Set precision; the argument is prompted for when absent.
    Precision(Option<String>),
    Stats,
    Ops,
    Clear,
    /// Export history; the path is prompted for when absent.
    Export(Option<String>),
    Exit,
}

impl FromStr for Command {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let line = s.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, Some(rest.trim().to_string())),
            None => (line, None),
        };

        let command = match (word.to_ascii_lowercase().as_str(), rest) {
            ("precision", arg) => Self::Precision(arg),
            ("export", arg) => Self::Export(arg),
            ("help", None) => Self::Help,
            ("history", None) => Self::History,
            ("degrees", None) => Self::Degrees,
            ("radians", None) => Self::Radians,
            ("mode", None) => Self::Mode,
            ("stats", None) => Self::Stats,
            ("ops", None) => Self::Ops,
            ("clear", None) => Self::Clear,
            ("exit" | "quit", None) => Self::Exit,
            _ => Self::Evaluate(line.parse()?),
        };
        Ok(command)
    }
}
