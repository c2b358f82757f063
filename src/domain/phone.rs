//! PhoneNumber value object.

use super::blank::is_blank;
use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Required length of a phone number, in UTF-16 code units.
pub const PHONE_NUMBER_LENGTH: usize = 10;

/// Required leading digit of a phone number.
pub const PHONE_NUMBER_PREFIX: char = '3';

static DIGITS_ONLY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+$").expect("Failed to compile digits regex"));

/// A validated phone number.
///
/// A `PhoneNumber` can only be obtained through [`PhoneNumber::parse`], so
/// holding one means the value is ten ASCII digits starting with `3`.
///
/// # Example
///
/// ```
/// use contact_manager::domain::PhoneNumber;
///
/// let phone = PhoneNumber::parse(Some("3131234567")).unwrap();
/// assert_eq!(phone.as_str(), "3131234567");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Validate a raw phone number.
    ///
    /// # Validation Rules
    ///
    /// Checked in this order; the first rule that fails is reported:
    ///
    /// 1. Must not be blank
    /// 2. Must be exactly 10 UTF-16 code units long
    /// 3. Must contain only digits `0-9`
    /// 4. Must start with `3`
    ///
    /// # Errors
    ///
    /// Returns the [`ValidationError`] of the first failing rule.
    pub fn parse(phone: Option<&str>) -> Result<Self, ValidationError> {
        Self::check(phone)?;
        // check() rejects None as blank
        Ok(Self(phone.unwrap_or_default().to_string()))
    }

    /// Run the phone rules without taking ownership of the value.
    pub fn check(phone: Option<&str>) -> Result<(), ValidationError> {
        let phone = match phone {
            Some(p) if !is_blank(Some(p)) => p,
            _ => return Err(ValidationError::PhoneNumberBlank),
        };

        if phone.encode_utf16().count() != PHONE_NUMBER_LENGTH {
            return Err(ValidationError::PhoneNumberLength);
        }

        if !DIGITS_ONLY.is_match(phone) {
            return Err(ValidationError::PhoneNumberNotDigits);
        }

        if !phone.starts_with(PHONE_NUMBER_PREFIX) {
            return Err(ValidationError::PhoneNumberPrefix);
        }

        Ok(())
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for PhoneNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Deserialize re-runs validation
impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PhoneNumber::parse(Some(&s)).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
