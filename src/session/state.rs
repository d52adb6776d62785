//! Session state: angle mode, precision, last result and history.

use crate::calculator::{AngleMode, Precision};

/// A single evaluated expression as shown in the history.
#[derive(Clone, Debug, PartialEq)]
pub struct EvaluationRecord {
    pub expression: String,
    pub result: String,
}

impl EvaluationRecord {
    /// `expression = result`
    pub fn line(&self) -> String {
        format!("{} = {}", self.expression, self.result)
    }
}

/// Summary over every recorded result.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stats {
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}

/// Mutable state owned by the interactive loop.
///
/// `history` and `results` always have the same length, and `last_result`
/// is set exactly when at least one evaluation succeeded since the last clear.
#[derive(Clone, Debug, Default)]
pub struct SessionState {
    pub angle_mode: AngleMode,
    pub precision: Precision,
    last_result: Option<f64>,
    history: Vec<EvaluationRecord>,
    results: Vec<f64>,
}

impl SessionState {
    pub fn new(angle_mode: AngleMode, precision: Precision) -> Self {
        Self {
            angle_mode,
            precision,
            ..Self::default()
        }
    }

    pub fn last_result(&self) -> Option<f64> {
        self.last_result
    }

    pub fn history(&self) -> &[EvaluationRecord] {
        &self.history
    }

    #[cfg(test)]
    pub(crate) fn results(&self) -> &[f64] {
        &self.results
    }

    /// Record a successful evaluation and return the stored record.
    ///
    /// The result is formatted with the precision currently in force.
    pub fn record(&mut self, expression: String, value: f64) -> &EvaluationRecord {
        let record = EvaluationRecord {
            expression,
            result: self.precision.format(value),
        };
        self.history.push(record);
        self.results.push(value);
        self.last_result = Some(value);
        &self.history[self.history.len() - 1]
    }

    /// Forget history and the last result. Angle mode and precision persist.
    pub fn clear(&mut self) {
        self.history.clear();
        self.results.clear();
        self.last_result = None;
    }

    pub fn stats(&self) -> Option<Stats> {
        let (&first, rest) = self.results.split_first()?;
        let (min, max, sum) = rest
            .iter()
            .fold((first, first, first), |(min, max, sum), &v| {
                (min.min(v), max.max(v), sum + v)
            });
        let count = self.results.len();
        Some(Stats {
            count,
            min,
            max,
            mean: sum / count as f64,
        })
    }

    /// History rendered one record per line, newline terminated.
    pub fn history_text(&self) -> String {
        self.history
            .iter()
            .map(|r| format!("{}\n", r.line()))
            .collect()
    }
}
