//! Domain-level errors.
//!
//! These errors represent business rule violations and domain logic failures.
//! They are independent of infrastructure concerns (database, transport).

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Field-keyed validation failures, reported all at once.
///
/// Keys are wire field names (`firstName`, `email`, ...), values are
/// human-readable messages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<String, String>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failure for `field`. A later message for the same field wins.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.insert(field.into(), message.into());
    }

    /// Single-field shorthand.
    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.add(field, message);
        errors
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Collect derive-based field failures, renaming each field with
    /// `wire_name`. The first message per field is kept.
    pub fn from_field_errors(
        errors: &validator::ValidationErrors,
        wire_name: impl Fn(&str) -> &str,
    ) -> Self {
        let mut collected = Self::new();
        for (field, failures) in errors.field_errors() {
            let Some(failure) = failures.first() else {
                continue;
            };
            let field: &str = &field;
            let name = wire_name(field);
            let message = failure
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| format!("{} is invalid", name));
            collected.add(name, message);
        }
        collected
    }

    /// `Ok(())` when nothing was recorded, otherwise `Err(self)`.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in &self.0 {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", field, message)?;
            first = false;
        }
        Ok(())
    }
}

/// Domain-specific errors for business rule violations.
#[derive(Error, Debug, Clone)]
pub enum DomainError {
    /// One or more input fields failed validation
    #[error("Validation error: {0}")]
    Validation(ValidationErrors),

    /// Credential derivation could not complete
    #[error("Hashing error: {0}")]
    Hashing(String),
}

impl DomainError {
    /// Create a validation error for a single field
    pub fn field(field: impl Into<String>, msg: impl Into<String>) -> Self {
        DomainError::Validation(ValidationErrors::single(field, msg))
    }

    /// Create a hashing error
    pub fn hashing(msg: impl Into<String>) -> Self {
        DomainError::Hashing(msg.into())
    }
}

impl From<ValidationErrors> for DomainError {
    fn from(errors: ValidationErrors) -> Self {
        DomainError::Validation(errors)
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
