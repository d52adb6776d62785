//! Operator evaluation.
//!
//! Unary operators take a single operand. Binary operators reduce the operand
//! list left to right, stopping at the first error.

use super::angle::AngleMode;
use super::error::CalcError;
use super::operator::Operator;

/// Threshold below which `cos(x)` is treated as zero and `tan(x)` is undefined.
const TAN_POLE_EPSILON: f64 = 1e-12;

/// Evaluate an operator over its operands.
///
/// The operand count is checked against the operator's arity before anything
/// is computed.
pub fn evaluate(op: Operator, operands: &[f64], mode: AngleMode) -> Result<f64, CalcError> {
    op.check_arity(operands.len())?;

    if op.is_unary() {
        return apply_unary(op, operands[0], mode);
    }

    let (first, rest) = operands
        .split_first()
        .ok_or(CalcError::Arity {
            operator: op,
            expected: op.arity().describe(),
            got: 0,
        })?;

    rest.iter()
        .try_fold(*first, |acc, &value| apply_binary(op, acc, value))
}

/// Apply a unary operator. Trigonometric operands are converted from `mode` first.
fn apply_unary(op: Operator, value: f64, mode: AngleMode) -> Result<f64, CalcError> {
    let x = if op.uses_angle() {
        mode.to_radians(value)
    } else {
        value
    };

    match op {
        Operator::Sin => Ok(x.sin()),
        Operator::Cos => Ok(x.cos()),
        Operator::Tan => {
            if x.cos().abs() < TAN_POLE_EPSILON {
                Err(CalcError::Domain {
                    operator: op,
                    reason: "undefined",
                })
            } else {
                Ok(x.tan())
            }
        }
        Operator::Sqrt => {
            if x < 0.0 {
                Err(CalcError::Domain {
                    operator: op,
                    reason: "negative operand",
                })
            } else {
                Ok(x.sqrt())
            }
        }
        Operator::Log => {
            if x <= 0.0 {
                Err(CalcError::Domain {
                    operator: op,
                    reason: "operand must be positive",
                })
            } else {
                Ok(x.ln())
            }
        }
        _ => Err(CalcError::Arity {
            operator: op,
            expected: op.arity().describe(),
            got: 1,
        }),
    }
}

/// Apply a binary operator to two values.
///
/// `%` is the truncated remainder: the result takes the sign of the dividend,
/// so `-7 % 3 == -1`.
fn apply_binary(op: Operator, a: f64, b: f64) -> Result<f64, CalcError> {
    match op {
        Operator::Add => Ok(a + b),
        Operator::Subtract => Ok(a - b),
        Operator::Multiply => Ok(a * b),
        Operator::Divide => {
            if b == 0.0 {
                Err(CalcError::DivisionByZero)
            } else {
                Ok(a / b)
            }
        }
        Operator::Modulo => {
            if b == 0.0 {
                Err(CalcError::DivisionByZero)
            } else {
                Ok(a % b)
            }
        }
        Operator::Power => Ok(a.powf(b)),
        _ => Err(CalcError::Arity {
            operator: op,
            expected: op.arity().describe(),
            got: 2,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    fn eval(op: Operator, operands: &[f64]) -> Result<f64, CalcError> {
        evaluate(op, operands, AngleMode::Radians)
    }

    #[test]
    fn test_variadic_reduction() {
        assert_eq!(eval(Operator::Add, &[2.0, 3.0, 5.0]).unwrap(), 10.0);
        assert_eq!(eval(Operator::Multiply, &[2.0, 3.0, 4.0]).unwrap(), 24.0);
    }

    #[test]
    fn test_reduction_matches_iteration() {
        let values = [1.5, -2.0, 8.0, 0.25, 3.0];
        let expected = values[1..].iter().fold(values[0], |acc, v| acc + v);
        assert_eq!(eval(Operator::Add, &values).unwrap(), expected);
        let expected = values[1..].iter().fold(values[0], |acc, v| acc * v);
        assert_eq!(eval(Operator::Multiply, &values).unwrap(), expected);
    }

    #[test]
    fn test_pair_operators() {
        assert_eq!(eval(Operator::Subtract, &[10.0, 4.0]).unwrap(), 6.0);
        assert_eq!(eval(Operator::Divide, &[9.0, 2.0]).unwrap(), 4.5);
        assert_eq!(eval(Operator::Power, &[2.0, 10.0]).unwrap(), 1024.0);
        assert_eq!(eval(Operator::Modulo, &[10.0, 3.0]).unwrap(), 1.0);
    }

    #[test]
    fn test_modulo_sign_follows_dividend() {
        assert_eq!(eval(Operator::Modulo, &[-7.0, 3.0]).unwrap(), -1.0);
        assert_eq!(eval(Operator::Modulo, &[7.0, -3.0]).unwrap(), 1.0);
        assert_eq!(eval(Operator::Modulo, &[5.5, 2.0]).unwrap(), 1.5);
    }

    #[test]
    fn test_division_by_zero() {
        for a in [0.0, 1.0, -5.0, 1e300] {
            assert!(matches!(
                eval(Operator::Divide, &[a, 0.0]),
                Err(CalcError::DivisionByZero)
            ));
            assert!(matches!(
                eval(Operator::Modulo, &[a, 0.0]),
                Err(CalcError::DivisionByZero)
            ));
        }
        assert!(matches!(
            eval(Operator::Divide, &[1.0, -0.0]),
            Err(CalcError::DivisionByZero)
        ));
    }

    #[test]
    fn test_power_not_validated() {
        assert!(eval(Operator::Power, &[-8.0, 0.5]).unwrap().is_nan());
        assert_eq!(eval(Operator::Power, &[0.0, -1.0]).unwrap(), f64::INFINITY);
        assert_eq!(eval(Operator::Power, &[4.0, -0.5]).unwrap(), 0.5);
    }

    #[test]
    fn test_sqrt_and_log_domains() {
        assert_eq!(eval(Operator::Sqrt, &[4.0]).unwrap(), 2.0);
        assert_eq!(eval(Operator::Sqrt, &[0.0]).unwrap(), 0.0);
        assert!(matches!(
            eval(Operator::Sqrt, &[-1.0]),
            Err(CalcError::Domain { .. })
        ));
        assert!(matches!(
            eval(Operator::Log, &[0.0]),
            Err(CalcError::Domain { .. })
        ));
        assert!(matches!(
            eval(Operator::Log, &[-3.0]),
            Err(CalcError::Domain { .. })
        ));
        assert!((eval(Operator::Log, &[std::f64::consts::E]).unwrap() - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_trig_in_degrees() {
        let sin = evaluate(Operator::Sin, &[90.0], AngleMode::Degrees).unwrap();
        assert!((sin - 1.0).abs() < TOLERANCE);
        let cos = evaluate(Operator::Cos, &[180.0], AngleMode::Degrees).unwrap();
        assert!((cos + 1.0).abs() < TOLERANCE);
        let tan = evaluate(Operator::Tan, &[45.0], AngleMode::Degrees).unwrap();
        assert!((tan - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_trig_of_huge_degree_operand() {
        let sin = evaluate(Operator::Sin, &[1e308], AngleMode::Degrees).unwrap();
        assert!(!sin.is_nan());
        assert_eq!(sin, (1e308 * (std::f64::consts::PI / 180.0)).sin());
    }

    #[test]
    fn test_mode_ignored_for_sqrt_and_log() {
        assert_eq!(
            evaluate(Operator::Sqrt, &[16.0], AngleMode::Degrees).unwrap(),
            4.0
        );
        assert_eq!(
            evaluate(Operator::Log, &[1.0], AngleMode::Degrees).unwrap(),
            0.0
        );
    }

    #[test]
    fn test_tan_undefined_at_pole() {
        assert!(matches!(
            evaluate(Operator::Tan, &[90.0], AngleMode::Degrees),
            Err(CalcError::Domain { reason: "undefined", .. })
        ));
        assert!(matches!(
            evaluate(Operator::Tan, &[std::f64::consts::FRAC_PI_2], AngleMode::Radians),
            Err(CalcError::Domain { .. })
        ));
    }

    #[test]
    fn test_arity_enforced() {
        assert!(matches!(
            eval(Operator::Add, &[1.0]),
            Err(CalcError::Arity { got: 1, .. })
        ));
        assert!(matches!(
            eval(Operator::Subtract, &[1.0, 2.0, 3.0]),
            Err(CalcError::Arity { got: 3, .. })
        ));
        assert!(matches!(
            eval(Operator::Sin, &[]),
            Err(CalcError::Arity { got: 0, .. })
        ));
    }
}
