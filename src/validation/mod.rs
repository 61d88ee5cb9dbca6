//! Root module for the validation system.
//! Exposes the ruleset, its evaluator, and the error types.

mod constants;
mod error;
mod rules;

// Re-export commonly used types and functions
pub use constants::*;
pub use error::{ErrorMap, ValidationError};
pub use rules::{validate, Check, FieldRules, RULESET};
