//! Contact manager service.
//!
//! Validates new contacts and appends them to the backing repository.

use crate::error::ContactResult;
use crate::models::Contact;
use crate::repositories::{ContactRepository, InMemoryContactRepository};
use std::sync::Arc;

/// Ordered, append-only collection of validated contacts.
///
/// # Example
///
/// ```
/// use contact_manager::ContactManager;
///
/// let manager = ContactManager::new();
/// manager.add_contact(Some("Diego"), Some("Castro"), Some("3131234567")).unwrap();
/// assert_eq!(manager.get_all_contacts().len(), 1);
/// ```
#[derive(Clone)]
pub struct ContactManager {
    repository: Arc<dyn ContactRepository>,
}

impl ContactManager {
    /// Create a manager backed by an empty in-memory repository.
    pub fn new() -> Self {
        Self::with_repository(Arc::new(InMemoryContactRepository::new()))
    }

    /// Create a manager backed by the given repository.
    pub fn with_repository(repository: Arc<dyn ContactRepository>) -> Self {
        Self { repository }
    }

    /// Construct, validate and store a contact.
    ///
    /// Validation runs first name, last name, then phone number. Nothing is
    /// stored unless all three pass.
    ///
    /// # Errors
    ///
    /// Returns `ContactError::Validation` with the first failing rule.
    pub fn add_contact(
        &self,
        first_name: Option<&str>,
        last_name: Option<&str>,
        phone_number: Option<&str>,
    ) -> ContactResult<Contact> {
        tracing::debug!(?first_name, ?last_name, ?phone_number, "Adding contact");

        let contact = Contact::new(first_name, last_name, phone_number);
        if let Err(e) = contact.validate() {
            tracing::warn!(error = %e, "Contact rejected");
            return Err(e.into());
        }

        self.repository.append(contact.clone());
        tracing::info!(total = self.repository.len(), "Contact added");
        Ok(contact)
    }

    /// All stored contacts in insertion order.
    pub fn get_all_contacts(&self) -> Vec<Contact> {
        self.repository.list()
    }

    /// All stored contacts as a pretty-printed JSON array.
    pub fn export_json(&self) -> ContactResult<String> {
        Ok(serde_json::to_string_pretty(&self.get_all_contacts())?)
    }

    pub fn len(&self) -> usize {
        self.repository.len()
    }

    pub fn is_empty(&self) -> bool {
        self.repository.is_empty()
    }
}

impl Default for ContactManager {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ContactManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContactManager")
            .field("contacts", &self.repository.len())
            .finish()
    }
}
