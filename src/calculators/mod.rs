//! Pure, single-shot calculations over already-validated input.
//!
//! Every calculator re-validates its own output: a technically computable
//! but physically impossible value is reported as an error, never returned.

pub mod bmi;
pub mod body_fat;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    #[error("calculation failed: {0}")]
    DegenerateArithmetic(String),
    #[error("implausible result {value:.1} (expected between {low:.0} and {high:.0})")]
    ImplausibleResult { value: f64, low: f64, high: f64 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct CalcOutcome {
    pub value: f64,
    pub category: &'static str,
}

/// Ascending `(upper_bound, label)` pairs; the last entry carries
/// `f64::INFINITY` as its bound.
pub type CategoryTable = &'static [(f64, &'static str)];

/// First bound the value does not exceed wins.
pub fn categorize(value: f64, table: CategoryTable) -> &'static str {
    table
        .iter()
        .find(|(bound, _)| value <= *bound)
        .map(|(_, label)| *label)
        .unwrap_or(table[table.len() - 1].1)
}

fn ensure_plausible(value: f64, low: f64, high: f64) -> Result<f64, CalcError> {
    if !value.is_finite() {
        return Err(CalcError::DegenerateArithmetic(
            "result is not a finite number".into(),
        ));
    }
    if value < low || value > high {
        return Err(CalcError::ImplausibleResult { value, low, high });
    }
    Ok(value)
}

/// Fire-and-forget usage tracking; must never block or fail a calculation.
fn note_usage(calculator: &str) {
    log::debug!("calculator used: {calculator}");
}
