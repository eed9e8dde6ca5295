//! Form Schemas
//!
//! Each form keeps its raw input strings and validates them into a typed
//! request. Failures are collected per field and shown inline.

mod apartment;
mod fee;
mod resident;
mod user;

use std::collections::BTreeMap;

pub use apartment::ApartmentForm;
pub use fee::FeeForm;
pub use resident::ResidentForm;
pub use user::{LoginForm, UserForm};

/// Validation messages keyed by field name; the first failure per field wins
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<&'static str, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.entry(field).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn has(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `Ok(build())` when nothing failed
    pub fn finish<T>(self, build: impl FnOnce() -> T) -> Result<T, FieldErrors> {
        if self.is_empty() {
            Ok(build())
        } else {
            Err(self)
        }
    }
}

/// At least `min` characters after trimming
pub(crate) fn min_len(errors: &mut FieldErrors, field: &'static str, value: &str, min: usize, message: &str) {
    if value.trim().chars().count() < min {
        errors.add(field, message);
    }
}

/// Parse a whole number, tolerating `.`/`,`/space digit grouping
pub(crate) fn parse_grouped_int(value: &str) -> Option<i64> {
    let digits: String = value
        .trim()
        .chars()
        .filter(|c| !matches!(c, '.' | ',' | ' ' | '\u{a0}'))
        .collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_error_per_field_wins() {
        let mut errors = FieldErrors::new();
        errors.add("name", "first");
        errors.add("name", "second");
        assert_eq!(errors.get("name"), Some("first"));
        assert_eq!(errors.len(), 1);
        assert!(errors.finish(|| ()).is_err());
    }

    #[test]
    fn test_min_len_counts_chars() {
        let mut errors = FieldErrors::new();
        min_len(&mut errors, "a", "Hà", 2, "too short");
        min_len(&mut errors, "b", "  x ", 2, "too short");
        assert!(!errors.has("a"));
        assert!(errors.has("b"));
    }

    #[test]
    fn test_parse_grouped_int() {
        assert_eq!(parse_grouped_int("1.250.000"), Some(1_250_000));
        assert_eq!(parse_grouped_int(" 6,000 "), Some(6000));
        assert_eq!(parse_grouped_int("-50"), Some(-50));
        assert_eq!(parse_grouped_int("12a"), None);
        assert_eq!(parse_grouped_int(""), None);
    }
}
