// # Contact Store Trait
//
// Defines the interface for the in-process contact collection.
//
// ## Purpose
//
// The store owns the contact list for the process lifetime. It enforces the
// single invariant of the data model: no two contacts share a `name`. The
// invariant is checked on insert only; seed data is trusted.
//
// ## Not-found is not an error
//
// Lookup and edit misses return `Ok(None)`. Only a duplicate name on insert
// is an error. This asymmetry is part of the observable API contract and
// must be preserved by every implementation.

use async_trait::async_trait;

use crate::model::{Contact, NewContact};

/// Trait for contact store implementations
///
/// Implementations must be thread-safe: resolvers for concurrent requests
/// call these methods from multiple tasks, and each operation must observe
/// a consistent snapshot of the collection.
#[async_trait]
pub trait ContactStore: Send + Sync {
    /// Number of contacts currently held
    async fn count(&self) -> Result<usize, crate::Error>;

    /// Find the first contact whose name exactly equals `name`
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Contact))`: The matching record
    /// - `Ok(None)`: No contact with that name
    /// - `Err(Error)`: Storage error
    async fn find_by_name(&self, name: &str) -> Result<Option<Contact>, crate::Error>;

    /// Insert a new contact, assigning it a fresh unique id
    ///
    /// Appends to the collection, preserving insertion order.
    ///
    /// # Returns
    ///
    /// - `Ok(Contact)`: The stored record, including its generated id
    /// - `Err(Error::DuplicateName)`: A contact with that name already exists;
    ///   the collection is unchanged
    async fn insert(&self, candidate: NewContact) -> Result<Contact, crate::Error>;

    /// Replace the phone number of the contact with the given name
    ///
    /// `phone: None` clears the field. All other fields, including `id`,
    /// are unchanged.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Contact))`: The updated record
    /// - `Ok(None)`: No contact with that name; the collection is unchanged
    /// - `Err(Error)`: Storage error
    async fn update_phone(
        &self,
        name: &str,
        phone: Option<String>,
    ) -> Result<Option<Contact>, crate::Error>;
}
