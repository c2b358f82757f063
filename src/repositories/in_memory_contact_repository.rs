use super::traits::ContactRepository;
use crate::models::Contact;
use std::sync::{Mutex, MutexGuard};

/// In-memory, append-only contact store.
///
/// A single mutex guards the vector. No operation blocks while holding it.
#[derive(Debug, Default)]
pub struct InMemoryContactRepository {
    contacts: Mutex<Vec<Contact>>,
}

impl InMemoryContactRepository {
    pub fn new() -> Self {
        Self::default()
    }

    // A push either completes or never starts, so a poisoned lock still
    // guards a consistent vector.
    fn lock(&self) -> MutexGuard<'_, Vec<Contact>> {
        self.contacts
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl ContactRepository for InMemoryContactRepository {
    fn append(&self, contact: Contact) {
        self.lock().push(contact);
    }

    fn list(&self) -> Vec<Contact> {
        self.lock().clone()
    }

    fn len(&self) -> usize {
        self.lock().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact(first: &str) -> Contact {
        Contact::new(Some(first), Some("Castro"), Some("3131234567"))
    }

    #[test]
    fn test_new_repository_is_empty() {
        let repo = InMemoryContactRepository::new();
        assert!(repo.is_empty());
        assert!(repo.list().is_empty());
    }

    #[test]
    fn test_append_preserves_order_and_duplicates() {
        let repo = InMemoryContactRepository::new();
        repo.append(contact("A"));
        repo.append(contact("B"));
        repo.append(contact("A"));

        let names: Vec<_> = repo
            .list()
            .iter()
            .map(|c| c.first_name().unwrap_or_default().to_string())
            .collect();
        assert_eq!(names, vec!["A", "B", "A"]);
        assert_eq!(repo.len(), 3);
    }

    #[test]
    fn test_list_is_a_snapshot() {
        let repo = InMemoryContactRepository::new();
        repo.append(contact("A"));
        let before = repo.list();
        repo.append(contact("B"));
        assert_eq!(before.len(), 1);
        assert_eq!(repo.len(), 2);
    }
}
