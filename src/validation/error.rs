//! Field-local validation errors and the per-field error map.

use std::collections::BTreeMap;

use thiserror::Error;

use crate::models::FieldName;

/// A single failed rule for one field.
///
/// The `Display` rendering is the message shown next to the field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    MissingField(FieldName),

    #[error("{0} {1}")]
    InvalidFormat(FieldName, &'static str),

    #[error("{0} must be a number")]
    InvalidType(FieldName),

    #[error("{0}")]
    OutOfRange(String),

    #[error("{0}")]
    PolicyViolation(String),

    #[error("Passwords must match")]
    Mismatch,
}

/// Field-name-to-message mapping for the current validation failures.
///
/// Holds at most one error per field: the first failing rule wins.
/// Iteration follows form order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorMap {
    errors: BTreeMap<FieldName, ValidationError>,
}

impl ErrorMap {
    pub(crate) fn insert(&mut self, field: FieldName, error: ValidationError) {
        self.errors.entry(field).or_insert(error);
    }

    pub fn get(&self, field: FieldName) -> Option<&ValidationError> {
        self.errors.get(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &ValidationError)> + '_ {
        self.errors.iter().map(|(field, error)| (*field, error))
    }
}
