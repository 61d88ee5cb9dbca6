//! The form controller: owned form state, the submit path, and the
//! delivery seam for accepted submissions.

use log::{info, warn};
use serde_json::json;

use crate::models::{FieldName, FormValues, ValidForm};
use crate::validation::{validate, ErrorMap, ValidationError};

/// Lifecycle of the form, re-entered on every submit attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    Pristine,
    Validating,
    Valid,
    Invalid,
}

/// Collaborator that receives accepted submissions.
pub trait SubmitSink {
    fn deliver(&mut self, form: &ValidForm);
}

/// Diagnostic sink: writes the accepted values to the log.
pub struct LogSink;

impl SubmitSink for LogSink {
    fn deliver(&mut self, form: &ValidForm) {
        info!("Submission accepted: {}", json!(form));
    }
}

/// Owns the form state and runs the validation pass on submit.
pub struct FormController<S> {
    values: FormValues,
    errors: ErrorMap,
    state: FormState,
    sink: S,
}

impl<S: SubmitSink> FormController<S> {
    pub fn new(sink: S) -> Self {
        Self {
            values: FormValues::default(),
            errors: ErrorMap::default(),
            state: FormState::Pristine,
            sink,
        }
    }

    /// Records an edit to one field.
    pub fn set_value(&mut self, field: FieldName, value: impl Into<String>) {
        self.values.set(field, value);
    }

    pub fn value(&self, field: FieldName) -> &str {
        self.values.get(field)
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    /// The error currently published for a field, if any.
    pub fn error(&self, field: FieldName) -> Option<&ValidationError> {
        self.errors.get(field)
    }

    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    /// Runs a validation pass over the current values.
    ///
    /// On success the error map is cleared, the accepted values are
    /// delivered to the sink, and nothing else happens. On failure the
    /// error map is replaced for display and nothing is delivered.
    pub fn submit(&mut self) -> bool {
        self.state = FormState::Validating;

        match validate(&self.values) {
            Ok(form) => {
                self.errors = ErrorMap::default();
                self.state = FormState::Valid;
                self.sink.deliver(&form);
                true
            }
            Err(errors) => {
                warn!(
                    "Submission rejected: {} field(s) failed validation",
                    errors.len()
                );
                self.errors = errors;
                self.state = FormState::Invalid;
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Test double that records every delivered submission.
    #[derive(Default, Clone)]
    struct RecordingSink {
        delivered: Rc<RefCell<Vec<ValidForm>>>,
    }

    impl SubmitSink for RecordingSink {
        fn deliver(&mut self, form: &ValidForm) {
            self.delivered.borrow_mut().push(form.clone());
        }
    }

    fn fill_valid(controller: &mut FormController<RecordingSink>) {
        controller.set_value(FieldName::Name, "Ada Lovelace");
        controller.set_value(FieldName::Email, "ada@example.com");
        controller.set_value(FieldName::Age, "36");
        controller.set_value(FieldName::Phone, "0215551234");
        controller.set_value(FieldName::Address, "12 North Street");
        controller.set_value(FieldName::Password, "Abc123!@");
        controller.set_value(FieldName::ConfirmPassword, "Abc123!@");
    }

    #[test]
    fn test_new_controller_is_pristine() {
        let controller = FormController::new(RecordingSink::default());
        assert_eq!(controller.state(), FormState::Pristine);
        assert!(controller.errors().is_empty());
    }

    #[test]
    fn test_failed_submit_publishes_errors_and_delivers_nothing() {
        let sink = RecordingSink::default();
        let mut controller = FormController::new(sink.clone());

        assert!(!controller.submit());

        assert_eq!(controller.state(), FormState::Invalid);
        assert!(!controller.errors().is_empty());
        assert!(sink.delivered.borrow().is_empty());
    }

    #[test]
    fn test_successful_submit_delivers_once_and_clears_errors() {
        let sink = RecordingSink::default();
        let mut controller = FormController::new(sink.clone());

        // A failed pass first, so there are errors to clear
        assert!(!controller.submit());
        assert!(controller.error(FieldName::Name).is_some());

        fill_valid(&mut controller);
        assert!(controller.submit());

        assert_eq!(controller.state(), FormState::Valid);
        assert!(controller.errors().is_empty());

        let delivered = sink.delivered.borrow();
        assert_eq!(delivered.len(), 1);
        assert_eq!(delivered[0].name.as_str(), "Ada Lovelace");
        assert_eq!(delivered[0].age.years(), 36);
    }

    #[test]
    fn test_resubmitting_unchanged_values_delivers_again() {
        let sink = RecordingSink::default();
        let mut controller = FormController::new(sink.clone());

        fill_valid(&mut controller);
        assert!(controller.submit());
        assert!(controller.submit());

        let delivered = sink.delivered.borrow();
        assert_eq!(delivered.len(), 2);
        assert_eq!(delivered[0], delivered[1]);
    }

    #[test]
    fn test_correcting_one_field_narrows_the_error_map() {
        let mut controller = FormController::new(RecordingSink::default());

        fill_valid(&mut controller);
        controller.set_value(FieldName::Email, "not-an-email");
        controller.set_value(FieldName::Phone, "12345");

        assert!(!controller.submit());
        assert_eq!(controller.errors().len(), 2);

        controller.set_value(FieldName::Email, "ada@example.com");
        assert!(!controller.submit());
        assert_eq!(controller.errors().len(), 1);
        assert!(controller.error(FieldName::Email).is_none());
        assert!(controller.error(FieldName::Phone).is_some());
    }
}
