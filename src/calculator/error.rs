//! Errors raised while parsing, collecting, evaluating or exporting.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use super::operator::Operator;

/// Every recoverable failure of a calculation round or session command.
///
/// None of these are fatal: the session displays them and returns to the prompt.
#[derive(Debug, Error)]
pub enum CalcError {
    #[error("invalid number '{0}'")]
    InvalidNumber(String),

    #[error("no previous result")]
    NoPriorResult,

    #[error("{operator} expects {expected}, got {got}")]
    Arity {
        operator: Operator,
        expected: &'static str,
        got: usize,
    },

    #[error("{operator}: {reason}")]
    Domain {
        operator: Operator,
        reason: &'static str,
    },

    #[error("division by zero")]
    DivisionByZero,

    #[error("unknown operator '{0}'")]
    UnknownOperator(String),

    #[error("precision must be 'auto' or an integer from 0 to 10, got '{0}'")]
    InvalidPrecision(String),

    #[error("no history to export")]
    NoHistory,

    #[error("failed to write {}: {source}", .path.display())]
    Export {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl CalcError {
    /// Short prefix shown in front of the message.
    pub fn category(&self) -> &'static str {
        match self {
            Self::InvalidNumber(_)
            | Self::NoPriorResult
            | Self::Arity { .. }
            | Self::UnknownOperator(_)
            | Self::InvalidPrecision(_) => "Input error",
            Self::Domain { .. } | Self::DivisionByZero => "Calculation error",
            Self::NoHistory | Self::Export { .. } => "Export error",
        }
    }
}
