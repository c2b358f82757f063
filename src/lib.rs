//! Contact Manager - an in-memory contact list with field-level validation.
//!
//! Contacts hold a first name, a last name and a phone number. Construction
//! always succeeds; validation is an explicit step that reports exactly one
//! reason per invalid field. [`ContactManager`] only stores contacts that pass
//! every check.
//!
//! # Architecture
//!
//! - **domain**: Validation rules, the phone number value object, and `ValidationError`
//! - **models**: The `Contact` record
//! - **repositories**: Storage seam and the in-memory store
//! - **services**: `ContactManager`, the add/list facade
//! - **seed**: CSV import of contacts
//! - **config**: Configuration from environment variables
//! - **error**: Crate-level error types

pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repositories;
pub mod seed;
pub mod services;

pub use config::Config;
pub use domain::{PhoneNumber, ValidationError};
pub use error::{ConfigError, ContactError, ContactResult};
pub use models::Contact;
pub use repositories::{ContactRepository, InMemoryContactRepository};
pub use seed::{import_contacts, load_contacts_file, parse_contacts_csv, ImportMode, ImportReport};
pub use services::ContactManager;
