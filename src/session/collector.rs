//! Operand collection for a single calculation round.

use std::io::{self, Write};

use thiserror::Error;
use tracing::debug;

use super::input::LineReader;
use crate::calculator::{CalcError, Operator, parse_line};

/// Why operand collection stopped without producing operands.
#[derive(Debug, Error)]
pub enum CollectError {
    /// The round is abandoned; the session continues.
    #[error(transparent)]
    Calc(#[from] CalcError),
    /// Reading input failed; the session cannot continue.
    #[error("failed to read operands")]
    Read(#[source] io::Error),
    /// Writing a prompt failed; the session cannot continue.
    #[error("failed to write operand prompt")]
    Write(#[source] io::Error),
}

/// Read operands for `op` until a blank line.
///
/// Each line may hold several operands separated by whitespace or commas.
/// Returns `Ok(None)` if input ends before the blank line. A token that fails
/// to parse aborts collection immediately.
pub fn collect_operands<R: LineReader, W: Write>(
    op: Operator,
    reader: &mut R,
    out: &mut W,
    last: Option<f64>,
) -> Result<Option<Vec<f64>>, CollectError> {
    writeln!(
        out,
        "Enter operands for {} ({}), blank line to finish:",
        op,
        op.arity().describe()
    )
    .map_err(CollectError::Write)?;

    let mut operands = Vec::new();
    loop {
        write!(out, "> ")
            .and_then(|()| out.flush())
            .map_err(CollectError::Write)?;
        let Some(line) = reader.read_line().map_err(CollectError::Read)? else {
            return Ok(None);
        };
        if line.is_empty() {
            break;
        }
        operands.extend(parse_line(&line, last)?);
    }

    debug!(operator = %op, count = operands.len(), "Collected operands");
    op.check_arity(operands.len())?;
    Ok(Some(operands))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::input::LineInput;
    use std::io::Cursor;

    fn collect(
        op: Operator,
        script: &str,
        last: Option<f64>,
    ) -> Result<Option<Vec<f64>>, CollectError> {
        let mut reader = LineInput::new(Cursor::new(script.to_string()));
        let mut out = Vec::new();
        collect_operands(op, &mut reader, &mut out, last)
    }

    struct ClosedOutput;

    impl Write for ClosedOutput {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    struct BrokenReader;

    impl LineReader for BrokenReader {
        fn read_line(&mut self) -> io::Result<Option<String>> {
            Err(io::Error::other("device gone"))
        }
    }

    #[test]
    fn test_collects_across_lines() {
        let operands = collect(Operator::Add, "2 3\n5\n\n", None).unwrap();
        assert_eq!(operands, Some(vec![2.0, 3.0, 5.0]));
    }

    #[test]
    fn test_comma_separated() {
        let operands = collect(Operator::Multiply, "1,2, 3\n\n", None).unwrap();
        assert_eq!(operands, Some(vec![1.0, 2.0, 3.0]));
    }

    #[test]
    fn test_end_of_input() {
        assert!(matches!(collect(Operator::Add, "1\n2\n", None), Ok(None)));
        assert!(matches!(collect(Operator::Sqrt, "", None), Ok(None)));
    }

    #[test]
    fn test_parse_failure_stops_collection() {
        let result = collect(Operator::Add, "1 two\n3\n\n", None);
        assert!(matches!(
            result,
            Err(CollectError::Calc(CalcError::InvalidNumber(_)))
        ));
    }

    #[test]
    fn test_ans_uses_last_result() {
        let operands = collect(Operator::Subtract, "ans 1\n\n", Some(9.0)).unwrap();
        assert_eq!(operands, Some(vec![9.0, 1.0]));
        assert!(matches!(
            collect(Operator::Subtract, "ans 1\n\n", None),
            Err(CollectError::Calc(CalcError::NoPriorResult))
        ));
    }

    #[test]
    fn test_arity_checked_after_collection() {
        assert!(matches!(
            collect(Operator::Sqrt, "4 9\n\n", None),
            Err(CollectError::Calc(CalcError::Arity { got: 2, .. }))
        ));
        assert!(matches!(
            collect(Operator::Divide, "4\n\n", None),
            Err(CollectError::Calc(CalcError::Arity { got: 1, .. }))
        ));
        assert!(matches!(
            collect(Operator::Add, "\n", None),
            Err(CollectError::Calc(CalcError::Arity { got: 0, .. }))
        ));
    }

    #[test]
    fn test_read_and_write_failures_are_distinct() {
        let mut reader = LineInput::new(Cursor::new("1 2\n\n".to_string()));
        assert!(matches!(
            collect_operands(Operator::Add, &mut reader, &mut ClosedOutput, None),
            Err(CollectError::Write(_))
        ));

        let mut out = Vec::new();
        assert!(matches!(
            collect_operands(Operator::Add, &mut BrokenReader, &mut out, None),
            Err(CollectError::Read(_))
        ));
    }
}
