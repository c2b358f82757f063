//! Domain validation errors.

use thiserror::Error;

/// Errors reported by contact field validation.
///
/// Each variant carries one fixed, human-readable message. Phone number
/// variants are ordered by the priority in which the rules are checked.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationError {
    /// First name is absent, empty, or whitespace only.
    #[error("First Name Cannot be Null or empty")]
    FirstNameBlank,

    /// Last name is absent, empty, or whitespace only.
    #[error("Last Name Cannot be Null or Empty")]
    LastNameBlank,

    /// Phone number is absent, empty, or whitespace only.
    #[error("Phone Number Cannot be Null or Empty")]
    PhoneNumberBlank,

    /// Phone number is not exactly ten characters long.
    #[error("Phone Number Should be 10 Digits Long")]
    PhoneNumberLength,

    /// Phone number contains a character other than `0-9`.
    #[error("Phone Number Contain only digits")]
    PhoneNumberNotDigits,

    /// Phone number does not begin with `3`.
    #[error("Phone Number Should Start with 3")]
    PhoneNumberPrefix,
}
