//! Operand parsing.
//!
//! Turns user tokens into numbers, resolving the symbolic constants `pi` and `e`
//! and the `ans`/`last` alias for the previous result.

use std::f64::consts::{E, PI};

use lazy_static::lazy_static;
use regex::Regex;

use super::error::CalcError;

lazy_static! {
    /// Operand separators: any run of whitespace and commas.
    static ref SEPARATORS: Regex = Regex::new(r"[\s,]+").unwrap();
}

/// Parse a single token into a number.
///
/// `last` is the most recent successful result, if any.
pub fn parse_number(token: &str, last: Option<f64>) -> Result<f64, CalcError> {
    let token = token.trim();

    if token.eq_ignore_ascii_case("ans") || token.eq_ignore_ascii_case("last") {
        return last.ok_or(CalcError::NoPriorResult);
    }
    if token.eq_ignore_ascii_case("pi") {
        return Ok(PI);
    }
    if token.eq_ignore_ascii_case("e") {
        return Ok(E);
    }

    token
        .parse::<f64>()
        .map_err(|_| CalcError::InvalidNumber(token.to_string()))
}

/// Split a line into operand tokens.
pub fn split_operands(line: &str) -> impl Iterator<Item = &str> {
    SEPARATORS.split(line).filter(|t| !t.is_empty())
}

/// Parse every token on a line, stopping at the first failure.
pub fn parse_line(line: &str, last: Option<f64>) -> Result<Vec<f64>, CalcError> {
    split_operands(line)
        .map(|token| parse_number(token, last))
        .collect()
}
