//! Contact model representing a person in the contact list.

use crate::domain::{is_blank, PhoneNumber, ValidationError};
use serde::{Deserialize, Serialize};

/// A contact: first name, last name and phone number.
///
/// Construction never fails. Any field may be absent (`None`) or blank;
/// the `validate_*` methods are a separate, explicit step.
///
/// # Example
///
/// ```
/// use contact_manager::Contact;
///
/// let contact = Contact::new(Some("Diego"), None, Some("3131234567"));
/// assert!(contact.validate_first_name().is_ok());
/// assert!(contact.validate_last_name().is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(default)]
pub struct Contact {
    /// First name
    first_name: Option<String>,

    /// Last name
    last_name: Option<String>,

    /// Phone number, as entered
    phone_number: Option<String>,
}

impl Contact {
    /// Create a contact from raw, unvalidated field values.
    pub fn new(
        first_name: Option<&str>,
        last_name: Option<&str>,
        phone_number: Option<&str>,
    ) -> Self {
        Self {
            first_name: first_name.map(str::to_string),
            last_name: last_name.map(str::to_string),
            phone_number: phone_number.map(str::to_string),
        }
    }

    pub fn first_name(&self) -> Option<&str> {
        self.first_name.as_deref()
    }

    pub fn set_first_name(&mut self, first_name: Option<&str>) {
        self.first_name = first_name.map(str::to_string);
    }

    pub fn last_name(&self) -> Option<&str> {
        self.last_name.as_deref()
    }

    pub fn set_last_name(&mut self, last_name: Option<&str>) {
        self.last_name = last_name.map(str::to_string);
    }

    pub fn phone_number(&self) -> Option<&str> {
        self.phone_number.as_deref()
    }

    pub fn set_phone_number(&mut self, phone_number: Option<&str>) {
        self.phone_number = phone_number.map(str::to_string);
    }

    /// Check that the first name is not blank.
    pub fn validate_first_name(&self) -> Result<(), ValidationError> {
        if is_blank(self.first_name()) {
            return Err(ValidationError::FirstNameBlank);
        }
        Ok(())
    }

    /// Check that the last name is not blank.
    pub fn validate_last_name(&self) -> Result<(), ValidationError> {
        if is_blank(self.last_name()) {
            return Err(ValidationError::LastNameBlank);
        }
        Ok(())
    }

    /// Check the phone number format. See [`PhoneNumber::parse`] for the rules.
    pub fn validate_phone_number(&self) -> Result<(), ValidationError> {
        PhoneNumber::check(self.phone_number())
    }

    /// Run all field validations: first name, last name, then phone number.
    ///
    /// # Errors
    ///
    /// Returns the error of the first failing validation.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.validate_first_name()?;
        self.validate_last_name()?;
        self.validate_phone_number()
    }

    /// Whether the contact holds exactly these field values.
    pub fn matches(&self, first_name: &str, last_name: &str, phone_number: &str) -> bool {
        self.first_name() == Some(first_name)
            && self.last_name() == Some(last_name)
            && self.phone_number() == Some(phone_number)
    }
}
