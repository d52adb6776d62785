//! Number formatting and precision control.

use std::fmt;
use std::str::FromStr;

use super::error::CalcError;
use super::operator::Operator;

/// Largest number of fixed decimal places accepted.
pub const MAX_PRECISION: u8 = 10;

/// Output precision for results.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Precision {
    /// Shortest representation that round-trips, `%g` style.
    #[default]
    Auto,
    /// Fixed number of decimal places.
    Fixed(u8),
}

impl Precision {
    /// Build a fixed precision, rejecting values above [`MAX_PRECISION`].
    pub fn fixed(digits: i64) -> Result<Self, CalcError> {
        match u8::try_from(digits) {
            Ok(d) if d <= MAX_PRECISION => Ok(Self::Fixed(d)),
            _ => Err(CalcError::InvalidPrecision(digits.to_string())),
        }
    }

    /// Format a value according to this precision.
    pub fn format(self, value: f64) -> String {
        match self {
            Self::Fixed(digits) if value.is_finite() => {
                format!("{:.*}", usize::from(digits), value)
            }
            _ => format_auto(value),
        }
    }
}

impl FromStr for Precision {
    type Err = CalcError;

    /// Accepts `auto` (or an empty string) and integers from 0 to 10.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case("auto") {
            return Ok(Self::Auto);
        }
        let digits: i64 = s
            .parse()
            .map_err(|_| CalcError::InvalidPrecision(s.to_string()))?;
        Self::fixed(digits)
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auto => f.write_str("auto"),
            Self::Fixed(digits) => write!(f, "{} decimal places", digits),
        }
    }
}

/// Format a number the way C's `%g` does with the shortest round-trip digits.
///
/// Scientific notation is used when the decimal exponent is below -4 or at
/// least 6, with a sign and at least two exponent digits (`1e+06`).
pub fn format_auto(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "+Inf" } else { "-Inf" }.to_string();
    }
    if value == 0.0 {
        return format!("{}", value);
    }

    let scientific = format!("{:e}", value);
    if let Some((mantissa, exponent)) = scientific.split_once('e')
        && let Ok(exponent) = exponent.parse::<i32>()
        && !(-4..6).contains(&exponent)
    {
        let sign = if exponent < 0 { '-' } else { '+' };
        return format!("{}e{}{:02}", mantissa, sign, exponent.abs());
    }

    format!("{}", value)
}

/// Render an evaluated expression, e.g. `2 + 3 + 5` or `sqrt(4)`.
///
/// Operands always use [`format_auto`].
pub fn format_expression(op: Operator, operands: &[f64]) -> String {
    let rendered: Vec<String> = operands.iter().map(|&v| format_auto(v)).collect();
    if op.is_unary() {
        format!("{}({})", op.symbol(), rendered.join(", "))
    } else {
        rendered.join(&format!(" {} ", op.symbol()))
    }
}
