//! Data models.
//!
//! This module contains the data structures the contact manager stores.

pub mod contact;

pub use contact::Contact;
