//! Declarative per-field validation producing a field-keyed error set.
//!
//! Range messages always name the violated bound so they can be shown
//! inline next to the offending field. Cross-field rules run only after
//! every per-field rule has passed and attach their message to the most
//! relevant field.

use std::collections::BTreeMap;
use std::fmt;

/// Field-keyed validation failures. At most one message per field; the
/// first recorded message wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    fields: BTreeMap<String, String>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.add(field, message);
        errors
    }

    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.fields.entry(field.into()).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for message in self.fields.values() {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{message}")?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Accumulates per-field constraint checks, then yields either success or
/// the collected field errors. Pure; no side effects.
#[derive(Debug, Default)]
pub struct Validator {
    errors: ValidationErrors,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn range(&mut self, field: &str, label: &str, value: f64, min: f64, max: f64) {
        if !value.is_finite() {
            self.errors.add(field, format!("{label} must be a number"));
        } else if value < min {
            self.errors
                .add(field, format!("{label} must be at least {}", fmt_bound(min)));
        } else if value > max {
            self.errors
                .add(field, format!("{label} must be at most {}", fmt_bound(max)));
        }
    }

    pub fn integer_range(&mut self, field: &str, label: &str, value: i64, min: i64, max: i64) {
        if value < min {
            self.errors.add(field, format!("{label} must be at least {min}"));
        } else if value > max {
            self.errors.add(field, format!("{label} must be at most {max}"));
        }
    }

    pub fn required_text(&mut self, field: &str, label: &str, value: &str, max_len: usize) {
        if value.trim().is_empty() {
            self.errors.add(field, format!("{label} is required"));
        } else if value.chars().count() > max_len {
            self.errors
                .add(field, format!("{label} must be at most {max_len} characters"));
        }
    }

    pub fn optional_text(&mut self, field: &str, label: &str, value: Option<&str>, max_len: usize) {
        if let Some(text) = value {
            if text.chars().count() > max_len {
                self.errors
                    .add(field, format!("{label} must be at most {max_len} characters"));
            }
        }
    }

    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.errors.add(field, message);
    }

    pub fn finish(self) -> Result<(), ValidationErrors> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }
}

fn fmt_bound(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value}")
    }
}
