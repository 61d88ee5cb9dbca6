//! The declarative rule table and its evaluator.

use once_cell::sync::Lazy;
use regex::Regex;
use validator::ValidateEmail;

use crate::models::{
    Age, EmailAddress, FieldName, FormValues, FullName, Password, PhoneNumber, StreetAddress,
    ValidForm,
};

use super::constants::{
    MAX_AGE, MAX_PHONE_DIGITS, MIN_AGE, MIN_PASSWORD_LENGTH, MIN_PHONE_DIGITS, PASSWORD_SYMBOLS,
};
use super::error::{ErrorMap, ValidationError};

// Regex for digits-only values (ASCII, so digit count == char count)
static DIGITS_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+$").expect("Failed to compile digits regex"));

/// A single validation predicate, applied to one field's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check {
    /// The value must be non-empty.
    Required,
    /// The value must be a syntactically valid email address.
    Email,
    /// The value must parse as a whole number.
    Numeric,
    /// The parsed number must lie in `[min, max]`.
    Range { min: i64, max: i64 },
    /// The value must contain only digits.
    Digits,
    /// The number of digits must lie in `[min, max]`.
    DigitCount { min: usize, max: usize },
    /// The value must satisfy the password policy.
    PasswordPolicy,
    /// The value must equal the named field's value exactly.
    Matches(FieldName),
}

/// The ordered checks for one field.
pub struct FieldRules {
    pub field: FieldName,
    pub checks: &'static [Check],
}

/// The form's rule table. One entry per field, in form order; within a
/// field, checks run in order and the first failure wins.
pub const RULESET: &[FieldRules] = &[
    FieldRules {
        field: FieldName::Name,
        checks: &[Check::Required],
    },
    FieldRules {
        field: FieldName::Email,
        checks: &[Check::Required, Check::Email],
    },
    FieldRules {
        field: FieldName::Age,
        checks: &[
            Check::Required,
            Check::Numeric,
            Check::Range {
                min: MIN_AGE,
                max: MAX_AGE,
            },
        ],
    },
    FieldRules {
        field: FieldName::Phone,
        checks: &[
            Check::Required,
            Check::Digits,
            Check::DigitCount {
                min: MIN_PHONE_DIGITS,
                max: MAX_PHONE_DIGITS,
            },
        ],
    },
    FieldRules {
        field: FieldName::Address,
        checks: &[Check::Required],
    },
    FieldRules {
        field: FieldName::Password,
        checks: &[Check::Required, Check::PasswordPolicy],
    },
    FieldRules {
        field: FieldName::ConfirmPassword,
        checks: &[Check::Matches(FieldName::Password)],
    },
];

/// Validates a full set of form values against the rule table.
///
/// Fields are checked independently of each other: one field failing
/// never stops another field's checks. At most one error is recorded
/// per field. On success the accepted values are returned unchanged,
/// wrapped in their validated types.
pub fn validate(values: &FormValues) -> Result<ValidForm, ErrorMap> {
    let mut errors = ErrorMap::default();

    for rules in RULESET {
        for &check in rules.checks {
            if let Err(error) = apply(check, rules.field, values) {
                errors.insert(rules.field, error);
                break;
            }
        }
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    let age = values
        .get(FieldName::Age)
        .parse::<i64>()
        .expect("age was checked as numeric");

    Ok(ValidForm {
        name: FullName::new(values.get(FieldName::Name)),
        email: EmailAddress::new(values.get(FieldName::Email)),
        age: Age::new(age),
        phone: PhoneNumber::new(values.get(FieldName::Phone)),
        address: StreetAddress::new(values.get(FieldName::Address)),
        password: Password::new(values.get(FieldName::Password)),
    })
}

/// Applies one check to one field of the current values.
fn apply(check: Check, field: FieldName, values: &FormValues) -> Result<(), ValidationError> {
    let value = values.get(field);

    match check {
        Check::Required => {
            if value.is_empty() {
                return Err(ValidationError::MissingField(field));
            }
        }

        Check::Email => {
            if !value.validate_email() {
                return Err(ValidationError::InvalidFormat(
                    field,
                    "must be a valid email address",
                ));
            }
        }

        Check::Numeric => {
            if value.parse::<i64>().is_err() {
                return Err(ValidationError::InvalidType(field));
            }
        }

        Check::Range { min, max } => {
            let Ok(number) = value.parse::<i64>() else {
                return Err(ValidationError::InvalidType(field));
            };
            if number < min {
                return Err(ValidationError::OutOfRange(format!(
                    "{field} must be at least {min}"
                )));
            }
            if number > max {
                return Err(ValidationError::OutOfRange(format!(
                    "{field} must be at most {max}"
                )));
            }
        }

        Check::Digits => {
            if !DIGITS_REGEX.is_match(value) {
                return Err(ValidationError::InvalidFormat(
                    field,
                    "must contain only digits",
                ));
            }
        }

        Check::DigitCount { min, max } => {
            let count = value.chars().count();
            if count < min {
                return Err(ValidationError::OutOfRange(format!(
                    "{field} must be at least {min} digits"
                )));
            }
            if count > max {
                return Err(ValidationError::OutOfRange(format!(
                    "{field} can only be up to {max} digits"
                )));
            }
        }

        Check::PasswordPolicy => check_password_policy(value)?,

        Check::Matches(other) => {
            if value != values.get(other) {
                return Err(ValidationError::Mismatch);
            }
        }
    }

    Ok(())
}

/// Checks the password policy criteria in order and reports the first
/// unmet one.
fn check_password_policy(password: &str) -> Result<(), ValidationError> {
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        return Err(ValidationError::PolicyViolation(
            "Password must contain at least one lowercase letter".to_string(),
        ));
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return Err(ValidationError::PolicyViolation(
            "Password must contain at least one uppercase letter".to_string(),
        ));
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err(ValidationError::PolicyViolation(
            "Password must contain at least one number".to_string(),
        ));
    }
    if !password.chars().any(|c| PASSWORD_SYMBOLS.contains(c)) {
        return Err(ValidationError::PolicyViolation(format!(
            "Password must contain at least one special character ({PASSWORD_SYMBOLS})"
        )));
    }
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(ValidationError::PolicyViolation(format!(
            "Password must be at least {MIN_PASSWORD_LENGTH} characters long"
        )));
    }
    Ok(())
}
