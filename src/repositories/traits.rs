use crate::models::Contact;

/// Storage for validated contacts.
///
/// Provides abstraction over contact storage, enabling different
/// implementations (in-memory, mock). Implementations keep insertion order
/// and do not deduplicate.
pub trait ContactRepository: Send + Sync {
    /// Append a contact to the end of the collection.
    fn append(&self, contact: Contact);

    /// Snapshot of all contacts in insertion order.
    fn list(&self) -> Vec<Contact>;

    /// Number of stored contacts.
    fn len(&self) -> usize;

    /// Whether no contact has been stored.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
