//! Interactive session.
//!
//! This module provides functionality to:
//! - Read trimmed lines from the user
//! - Collect operands for an operator
//! - Track history, results, angle mode and precision
//! - Dispatch commands and export history

mod collector;
mod command;
mod export;
mod input;
mod repl;
mod state;

pub use collector::{CollectError, collect_operands};
pub use command::Command;
pub use export::{DEFAULT_EXPORT_PATH, Exporter, FileExporter};
pub use input::{LineInput, LineReader, prompt};
pub use repl::Repl;
pub use state::{EvaluationRecord, SessionState, Stats};
