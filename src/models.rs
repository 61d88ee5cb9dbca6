//! Data model: raw form state and validated output types.

use std::collections::BTreeMap;

use derive_more::Display;
use serde::{Deserialize, Serialize};
use strum_macros::EnumIter;

use crate::validation::{self, ErrorMap};

/// One named input of the form.
///
/// Variant order is form order, so ordered collections of fields
/// iterate the way the form reads.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, PartialOrd, Ord, EnumIter, Display)]
pub enum FieldName {
    #[display("Full name")]
    Name,
    #[display("Email")]
    Email,
    #[display("Age")]
    Age,
    #[display("Phone number")]
    Phone,
    #[display("Address")]
    Address,
    #[display("Password")]
    Password,
    #[display("Confirm password")]
    ConfirmPassword,
}

/// Raw input state of the form, keyed by field name.
///
/// Unset fields read as the empty string. Both address-line inputs
/// write the `Address` key, so the last write wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    entries: BTreeMap<FieldName, String>,
}

impl FormValues {
    pub fn set(&mut self, field: FieldName, value: impl Into<String>) {
        self.entries.insert(field, value.into());
    }

    pub fn get(&self, field: FieldName) -> &str {
        self.entries
            .get(&field)
            .map(String::as_str)
            .unwrap_or_default()
    }
}

/// Wrapper type for a person's name that has passed validation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Display)]
pub struct FullName(String);

impl FullName {
    pub(crate) fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for FullName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Wrapper type for an email address that has passed validation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Display)]
pub struct EmailAddress(String);

impl EmailAddress {
    pub(crate) fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// An age in whole years, within the accepted range
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Display)]
pub struct Age(i64);

impl Age {
    pub(crate) fn new(years: i64) -> Self {
        Self(years)
    }

    pub fn years(&self) -> i64 {
        self.0
    }
}

/// Wrapper type for a phone number that has passed validation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Display)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    pub(crate) fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for PhoneNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Wrapper type for a postal address that has passed validation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Display)]
pub struct StreetAddress(String);

impl StreetAddress {
    pub(crate) fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for StreetAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Wrapper type for a password that has passed the policy checks
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Display)]
pub struct Password(String);

impl Password {
    pub(crate) fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Password {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// The accepted values of a submitted form.
///
/// Can only be produced by a full validation pass. The password
/// confirmation is consumed by validation and not carried here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidForm {
    pub name: FullName,
    pub email: EmailAddress,
    pub age: Age,
    pub phone: PhoneNumber,
    pub address: StreetAddress,
    pub password: Password,
}

impl TryFrom<&FormValues> for ValidForm {
    type Error = ErrorMap;

    fn try_from(values: &FormValues) -> Result<Self, Self::Error> {
        validation::validate(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_fields_read_empty() {
        let values = FormValues::default();
        assert_eq!(values.get(FieldName::Name), "");
        assert_eq!(values.get(FieldName::ConfirmPassword), "");
    }

    #[test]
    fn test_last_write_wins() {
        let mut values = FormValues::default();
        values.set(FieldName::Address, "12 North Street");
        values.set(FieldName::Address, "Apt 4B");
        assert_eq!(values.get(FieldName::Address), "Apt 4B");
    }

    #[test]
    fn test_field_display_labels() {
        assert_eq!(FieldName::Name.to_string(), "Full name");
        assert_eq!(FieldName::Phone.to_string(), "Phone number");
        assert_eq!(FieldName::ConfirmPassword.to_string(), "Confirm password");
    }

    #[test]
    fn test_newtype_display_and_asref() {
        let email = EmailAddress::new("user@example.com");
        assert_eq!(email.to_string(), "user@example.com");
        assert_eq!(email.as_ref(), "user@example.com");

        let age = Age::new(42);
        assert_eq!(age.years(), 42);
        assert_eq!(age.to_string(), "42");
    }
}
