//! Domain rules and value objects.
//!
//! This module holds the validation rules applied to contact fields: the
//! blank-text predicate, the phone number format, and the error type every
//! rule reports.

pub mod blank;
pub mod errors;
pub mod phone;

pub use blank::{is_blank, is_blank_char};
pub use errors::ValidationError;
pub use phone::{PhoneNumber, PHONE_NUMBER_LENGTH, PHONE_NUMBER_PREFIX};
