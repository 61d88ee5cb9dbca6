//! Interactive registration form: data model, declarative validation
//! ruleset, and the form controller binding errors to fields.

pub mod form;
pub mod models;
pub mod validation;
