//! Bulk contact import from CSV files.
//!
//! A contacts file holds one `first,last,phone` row per line. Each row is
//! fed through [`ContactManager::add_contact`](crate::ContactManager::add_contact),
//! so imported contacts obey the same validation rules as any other.

mod csv;
mod import;

pub use csv::{load_contacts_file, parse_contacts_csv, ContactRow};
pub use import::{import_contacts, ImportMode, ImportReport, RejectedRow};
