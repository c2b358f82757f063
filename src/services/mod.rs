//! Application service layer.
//!
//! Services contain the business logic that sits between callers and the
//! repositories.

mod contact_manager;

pub use contact_manager::ContactManager;
