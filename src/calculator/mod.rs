//! Calculator engine.
//!
//! This module provides functionality to:
//! - Resolve operators and their aliases
//! - Parse operands, including constants and the previous result
//! - Evaluate an operator over a flat list of operands
//! - Format results and expressions

mod angle;
mod error;
mod evaluation;
mod format;
mod number;
mod operator;

pub use angle::AngleMode;
pub use error::CalcError;
pub use evaluation::evaluate;
pub use format::{MAX_PRECISION, Precision, format_auto, format_expression};
pub use number::{parse_line, parse_number, split_operands};
pub use operator::{Arity, Operator};
