//! Generic typed form state and the parsing rules shared by every form.
//!
//! A form is identified by an enum of its fields. [`FormState`] holds the raw
//! text values, the current validation errors, and the touched set that gates
//! when an error is rendered: a field's error is shown only after the field
//! has been interacted with or a submit attempt touched it.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use chrono::NaiveDate;

pub mod auth;
pub mod user;
pub mod wizard;

#[cfg(test)]
mod tests;

#[derive(Debug, Clone, PartialEq)]
pub struct FormState<F: Copy + Eq + Hash> {
    values: HashMap<F, String>,
    errors: HashMap<F, String>,
    touched: HashSet<F>,
}

impl<F: Copy + Eq + Hash> Default for FormState<F> {
    fn default() -> Self {
        Self {
            values: HashMap::new(),
            errors: HashMap::new(),
            touched: HashSet::new(),
        }
    }
}

impl<F: Copy + Eq + Hash> FormState<F> {
    pub fn value(&self, field: F) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }

    /// Sets a value from user input and marks the field touched.
    pub fn set(&mut self, field: F, value: impl Into<String>) {
        self.values.insert(field, value.into());
        self.touched.insert(field);
    }

    /// Sets a value without touching it, for programmatic fills.
    pub fn fill(&mut self, field: F, value: impl Into<String>) {
        self.values.insert(field, value.into());
    }

    /// Replaces the error map after a validation pass.
    pub fn set_errors(&mut self, errors: Vec<(F, String)>) {
        self.errors = errors.into_iter().collect();
    }

    /// Marks fields touched so a submit attempt reveals every error.
    pub fn touch_all(&mut self, fields: impl IntoIterator<Item = F>) {
        self.touched.extend(fields);
    }

    pub fn error(&self, field: F) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// The error for a field, once the field has been interacted with.
    pub fn visible_error(&self, field: F) -> Option<String> {
        if self.touched.contains(&field) {
            self.errors.get(&field).cloned()
        } else {
            None
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn clear(&mut self) {
        self.values.clear();
        self.errors.clear();
        self.touched.clear();
    }

    /// Clears the given fields' values, errors and touched marks, leaving
    /// the rest of the form alone.
    pub fn clear_fields(&mut self, fields: impl IntoIterator<Item = F>) {
        for field in fields {
            self.values.remove(&field);
            self.errors.remove(&field);
            self.touched.remove(&field);
        }
    }
}

/// A required string; the trimmed value on success.
pub fn require(value: &str, label: &str) -> Result<String, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(format!("{label} is required"))
    } else {
        Ok(trimmed.to_string())
    }
}

/// A required decimal that must be strictly positive.
pub fn parse_positive(value: &str, label: &str) -> Result<f64, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(format!("{label} is required"));
    }
    let number: f64 = trimmed
        .parse()
        .map_err(|_| format!("{label} must be a number"))?;
    if number > 0.0 {
        Ok(number)
    } else {
        Err(format!("{label} must be greater than zero"))
    }
}

/// A percentage in [0, 100]; `required` decides how an empty value reads.
pub fn parse_percent(value: &str, label: &str, required: bool) -> Result<Option<f64>, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return if required {
            Err(format!("{label} is required"))
        } else {
            Ok(None)
        };
    }
    let number: f64 = trimmed
        .parse()
        .map_err(|_| format!("{label} must be a number"))?;
    if (0.0..=100.0).contains(&number) {
        Ok(Some(number))
    } else {
        Err(format!("{label} must be between 0 and 100"))
    }
}

/// A required whole count of at least `min`.
pub fn parse_count(value: &str, label: &str, min: i64) -> Result<i64, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(format!("{label} is required"));
    }
    let number: i64 = trimmed
        .parse()
        .map_err(|_| format!("{label} must be a whole number"))?;
    if number >= min {
        Ok(number)
    } else {
        Err(format!("{label} must be at least {min}"))
    }
}

/// A required calendar date in the ISO form a date input produces.
pub fn parse_date(value: &str, label: &str) -> Result<NaiveDate, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(format!("{label} is required"));
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map_err(|_| format!("{label} is not a valid date"))
}

/// Lightweight mailbox check: something before the @, a dotted domain after.
pub fn valid_email(value: &str) -> bool {
    if value.contains(' ') {
        return false;
    }
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}
