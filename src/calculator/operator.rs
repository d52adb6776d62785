//! Supported operators, their aliases and arity rules.

use std::fmt;
use std::str::FromStr;

use super::error::CalcError;

/// How many operands an operator accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Arity {
    /// Exactly one operand.
    Unary,
    /// Exactly two operands.
    Pair,
    /// Two or more operands, reduced left to right.
    Variadic,
}

impl Arity {
    /// Check an operand count against this rule.
    pub fn accepts(self, count: usize) -> bool {
        match self {
            Self::Unary => count == 1,
            Self::Pair => count == 2,
            Self::Variadic => count >= 2,
        }
    }

    /// Human readable description used in error messages.
    pub fn describe(self) -> &'static str {
        match self {
            Self::Unary => "exactly 1 operand",
            Self::Pair => "exactly 2 operands",
            Self::Variadic => "at least 2 operands",
        }
    }
}

/// A calculator operator, either binary or unary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
    Modulo,
    Sin,
    Cos,
    Tan,
    Sqrt,
    Log,
}

impl Operator {
    /// All operators in the order they are listed to the user.
    pub const ALL: [Operator; 11] = [
        Self::Add,
        Self::Subtract,
        Self::Multiply,
        Self::Divide,
        Self::Power,
        Self::Modulo,
        Self::Sin,
        Self::Cos,
        Self::Tan,
        Self::Sqrt,
        Self::Log,
    ];

    /// Canonical symbol or function name.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Power => "^",
            Self::Modulo => "%",
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Sqrt => "sqrt",
            Self::Log => "log",
        }
    }

    /// Alternative spellings accepted at the prompt.
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::Power => &["pow"],
            Self::Modulo => &["mod"],
            Self::Log => &["ln"],
            _ => &[],
        }
    }

    pub fn arity(self) -> Arity {
        match self {
            Self::Add | Self::Multiply => Arity::Variadic,
            Self::Subtract | Self::Divide | Self::Power | Self::Modulo => Arity::Pair,
            Self::Sin | Self::Cos | Self::Tan | Self::Sqrt | Self::Log => Arity::Unary,
        }
    }

    pub fn is_unary(self) -> bool {
        self.arity() == Arity::Unary
    }

    /// Whether the operator interprets its operand as an angle.
    pub fn uses_angle(self) -> bool {
        matches!(self, Self::Sin | Self::Cos | Self::Tan)
    }

    /// Validate an operand count, producing an arity error on mismatch.
    pub fn check_arity(self, count: usize) -> Result<(), CalcError> {
        let arity = self.arity();
        if arity.accepts(count) {
            Ok(())
        } else {
            Err(CalcError::Arity {
                operator: self,
                expected: arity.describe(),
                got: count,
            })
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Operator {
    type Err = CalcError;

    /// Resolve a symbol, function name or alias. Names match case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|op| op.symbol() == lower || op.aliases().contains(&lower.as_str()))
            .ok_or_else(|| CalcError::UnknownOperator(s.trim().to_string()))
    }
}
