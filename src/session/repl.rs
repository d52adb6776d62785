//! The interactive read-evaluate-print loop.
//!
//! Reads one line at a time, classifies it as a command or an operator, and
//! either runs the command against the session state or collects operands and
//! evaluates them. Failed rounds are reported and never touch the state.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use super::collector::{CollectError, collect_operands};
use super::command::Command;
use super::export::{DEFAULT_EXPORT_PATH, Exporter, FileExporter};
use super::input::{LineReader, prompt};
use super::state::SessionState;
use crate::calculator::{
    AngleMode, CalcError, Operator, Precision, evaluate, format_expression,
};

const MAIN_PROMPT: &str = "Operator or command (type 'help' for a list): ";

/// Whether the loop keeps going after a line was handled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// An interactive calculator session.
pub struct Repl<R, W> {
    reader: R,
    out: W,
    exporter: Box<dyn Exporter>,
    state: SessionState,
    export_path: PathBuf,
    banner: bool,
}

impl<R: LineReader, W: Write> Repl<R, W> {
    pub fn new(reader: R, out: W, state: SessionState) -> Self {
        Self {
            reader,
            out,
            exporter: Box::new(FileExporter),
            state,
            export_path: PathBuf::from(DEFAULT_EXPORT_PATH),
            banner: true,
        }
    }

    pub fn with_exporter(mut self, exporter: impl Exporter + 'static) -> Self {
        self.exporter = Box::new(exporter);
        self
    }

    /// Path offered when the user leaves the export prompt blank.
    pub fn with_export_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.export_path = path.into();
        self
    }

    pub fn with_banner(mut self, banner: bool) -> Self {
        self.banner = banner;
        self
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Run until `exit` or end of input.
    ///
    /// Only a failure to read input or write output ends the loop with an error.
    pub fn run(&mut self) -> Result<()> {
        if self.banner {
            writeln!(self.out, "Calculator")?;
            writeln!(
                self.out,
                "Enter an operator such as +, -, *, /, ^, % or sqrt, or type 'help' for commands."
            )?;
        }

        loop {
            let Some(line) = prompt(&mut self.reader, &mut self.out, MAIN_PROMPT)
                .context("failed to read command")?
            else {
                debug!("End of input");
                break;
            };
            if self.dispatch(&line)? == Flow::Exit {
                break;
            }
        }

        writeln!(self.out, "Goodbye.")?;
        self.out.flush()?;
        Ok(())
    }

    /// Handle one line typed at the main prompt.
    fn dispatch(&mut self, line: &str) -> Result<Flow> {
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(err) => {
                debug!(%err, "Rejected input");
                writeln!(
                    self.out,
                    "Invalid operator or command. Type 'help' for a list."
                )?;
                return Ok(Flow::Continue);
            }
        };
        debug!(?command, "Dispatching");

        match command {
            Command::Evaluate(op) => return self.evaluate_round(op),
            Command::Help => self.print_help()?,
            Command::History => self.print_history()?,
            Command::Degrees => self.set_angle_mode(AngleMode::Degrees)?,
            Command::Radians => self.set_angle_mode(AngleMode::Radians)?,
            Command::Mode => {
                let last = self
                    .state
                    .last_result()
                    .map(|v| self.state.precision.format(v))
                    .unwrap_or_else(|| "none".to_string());
                writeln!(
                    self.out,
                    "Angle mode: {}, precision: {}, last result: {}",
                    self.state.angle_mode, self.state.precision, last
                )?;
            }
            Command::Precision(arg) => return self.set_precision(arg),
            Command::Stats => self.print_stats()?,
            Command::Ops => self.print_ops()?,
            Command::Clear => {
                self.state.clear();
                info!("Session cleared");
                writeln!(self.out, "History and last result cleared.")?;
            }
            Command::Export(arg) => return self.export(arg),
            Command::Exit => return Ok(Flow::Exit),
        }
        Ok(Flow::Continue)
    }

    fn evaluate_round(&mut self, op: Operator) -> Result<Flow> {
        let last = self.state.last_result();
        let operands = match collect_operands(op, &mut self.reader, &mut self.out, last) {
            Ok(Some(operands)) => operands,
            Ok(None) => return Ok(Flow::Exit),
            Err(CollectError::Calc(err)) => {
                self.report(&err)?;
                return Ok(Flow::Continue);
            }
            Err(err) => return Err(err.into()),
        };

        match evaluate(op, &operands, self.state.angle_mode) {
            Ok(value) => {
                let expression = format_expression(op, &operands);
                let record = self.state.record(expression, value);
                info!(expression = %record.expression, result = %record.result, "Evaluated");
                writeln!(self.out, "Result: {}", record.result)?;
            }
            Err(err) => self.report(&err)?,
        }
        Ok(Flow::Continue)
    }

    fn set_angle_mode(&mut self, mode: AngleMode) -> Result<()> {
        self.state.angle_mode = mode;
        writeln!(self.out, "Angle mode set to {}.", mode)?;
        Ok(())
    }

    fn set_precision(&mut self, arg: Option<String>) -> Result<Flow> {
        let value = match arg {
            Some(value) => value,
            None => {
                let line = prompt(
                    &mut self.reader,
                    &mut self.out,
                    "Precision (auto or 0-10, blank for auto): ",
                )
                .context("failed to read precision")?;
                match line {
                    Some(line) => line,
                    None => return Ok(Flow::Exit),
                }
            }
        };

        match value.parse::<Precision>() {
            Ok(precision) => {
                self.state.precision = precision;
                writeln!(self.out, "Precision set to {}.", precision)?;
            }
            Err(err) => self.report(&err)?,
        }
        Ok(Flow::Continue)
    }

    fn export(&mut self, arg: Option<String>) -> Result<Flow> {
        if self.state.history().is_empty() {
            self.report(&CalcError::NoHistory)?;
            return Ok(Flow::Continue);
        }

        let requested = match arg {
            Some(path) => path,
            None => {
                let text = format!("Export path [{}]: ", self.export_path.display());
                let line = prompt(&mut self.reader, &mut self.out, &text)
                    .context("failed to read export path")?;
                match line {
                    Some(line) => line,
                    None => return Ok(Flow::Exit),
                }
            }
        };
        let path = if requested.is_empty() {
            self.export_path.clone()
        } else {
            PathBuf::from(requested)
        };

        let content = self.state.history_text();
        match self.exporter.write(&path, &content) {
            Ok(()) => {
                let entries = self.state.history().len();
                info!(path = %path.display(), entries, "Exported history");
                writeln!(self.out, "Exported {} entries to {}", entries, path.display())?;
            }
            Err(source) => self.report(&CalcError::Export { path, source })?,
        }
        Ok(Flow::Continue)
    }

    fn report(&mut self, err: &CalcError) -> Result<()> {
        warn!(%err, "Round failed");
        writeln!(self.out, "{}: {}", err.category(), err)?;
        Ok(())
    }

    fn print_help(&mut self) -> Result<()> {
        let help = format!(
            "\
Commands:
  help          Show this help
  history       Show previous calculations
  degrees       Use degrees for sin, cos and tan
  radians       Use radians for sin, cos and tan
  mode          Show angle mode, precision and last result
  precision [N] Set output precision (auto or 0-10)
  stats         Show count, min, max and average of results
  ops           List supported operators
  clear         Clear history and last result
  export [PATH] Write history to a file
  exit          Quit the calculator
Notes:
  After choosing an operator, enter operands separated by spaces or commas,
  over as many lines as needed, then a blank line to evaluate.
  Use ans or last to reuse the previous result, pi and e for constants.
  Angle mode is currently {}.",
            self.state.angle_mode
        );
        writeln!(self.out, "{}", help)?;
        Ok(())
    }

    fn print_history(&mut self) -> Result<()> {
        if self.state.history().is_empty() {
            writeln!(self.out, "No history yet.")?;
            return Ok(());
        }
        writeln!(self.out, "History:")?;
        for (i, record) in self.state.history().iter().enumerate() {
            writeln!(self.out, "  {}) {}", i + 1, record.line())?;
        }
        Ok(())
    }

    fn print_stats(&mut self) -> Result<()> {
        let Some(stats) = self.state.stats() else {
            writeln!(self.out, "No results yet.")?;
            return Ok(());
        };
        let precision = self.state.precision;
        writeln!(self.out, "Count: {}", stats.count)?;
        writeln!(self.out, "Min: {}", precision.format(stats.min))?;
        writeln!(self.out, "Max: {}", precision.format(stats.max))?;
        writeln!(self.out, "Average: {}", precision.format(stats.mean))?;
        Ok(())
    }

    fn print_ops(&mut self) -> Result<()> {
        writeln!(self.out, "Operators:")?;
        for op in Operator::ALL {
            let aliases = op.aliases();
            if aliases.is_empty() {
                writeln!(self.out, "  {:<5} {}", op.symbol(), op.arity().describe())?;
            } else {
                writeln!(
                    self.out,
                    "  {:<5} {} (alias: {})",
                    op.symbol(),
                    op.arity().describe(),
                    aliases.join(", ")
                )?;
            }
        }
        Ok(())
    }
}
