//! Constants used throughout the validation system

/// Minimum accepted age, in whole years
pub const MIN_AGE: i64 = 18;
/// Maximum accepted age, in whole years
pub const MAX_AGE: i64 = 100;
/// Minimum number of digits in a phone number
pub const MIN_PHONE_DIGITS: usize = 10;
/// Maximum number of digits in a phone number
pub const MAX_PHONE_DIGITS: usize = 12;
/// Minimum password length
pub const MIN_PASSWORD_LENGTH: usize = 8;
/// The symbols a password may draw its required special character from
pub const PASSWORD_SYMBOLS: &str = "@$!%*#?&";
