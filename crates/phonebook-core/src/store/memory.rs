// # Memory Contact Store
//
// In-memory implementation of ContactStore.
//
// ## Purpose
//
// Holds the contact list in process memory for the process lifetime. Nothing
// persists across restarts; a restart returns the store to its seed state.
//
// ## Concurrency
//
// The list lives behind a single RwLock. Each operation holds one guard for
// its whole read-modify-write, so concurrent adds for the same name cannot
// both pass the duplicate check.
//
// ## Ordering
//
// A Vec rather than a map, because insertion order is observable: lookups
// scan linearly and the first match wins.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::Error;
use crate::model::{Contact, NewContact};
use crate::traits::ContactStore;

/// In-memory contact store
///
/// # Example
///
/// ```rust,no_run
/// use phonebook_core::store::MemoryContactStore;
/// use phonebook_core::traits::ContactStore;
/// use phonebook_core::model::NewContact;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let store = MemoryContactStore::with_demo_contacts();
///
///     let stored = store
///         .insert(NewContact {
///             name: "Marie".to_string(),
///             phone: Some("555-0186".to_string()),
///             street: "Rue Cuvier".to_string(),
///             city: "Paris".to_string(),
///         })
///         .await?;
///
///     assert_eq!(store.find_by_name("Marie").await?, Some(stored));
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct MemoryContactStore {
    inner: Arc<RwLock<Vec<Contact>>>,
}

impl MemoryContactStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Create a store seeded with the given contacts
    ///
    /// Seed data is trusted: the unique-name invariant is not re-checked.
    pub fn with_contacts(contacts: Vec<Contact>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(contacts)),
        }
    }

    /// Create a store seeded with the fixed demo contact set
    pub fn with_demo_contacts() -> Self {
        Self::with_contacts(demo_contacts())
    }

    /// Check if the store is empty
    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }

    /// Remove all contacts from the store
    pub async fn clear(&self) {
        self.inner.write().await.clear();
    }
}

impl Default for MemoryContactStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContactStore for MemoryContactStore {
    async fn count(&self) -> Result<usize, Error> {
        Ok(self.inner.read().await.len())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Contact>, Error> {
        let guard = self.inner.read().await;
        Ok(guard.iter().find(|contact| contact.name == name).cloned())
    }

    async fn insert(&self, candidate: NewContact) -> Result<Contact, Error> {
        let mut guard = self.inner.write().await;

        if guard.iter().any(|contact| contact.name == candidate.name) {
            return Err(Error::duplicate_name(candidate.name));
        }

        let contact = Contact {
            name: candidate.name,
            phone: candidate.phone,
            street: candidate.street,
            city: candidate.city,
            id: Uuid::new_v4().to_string(),
        };

        guard.push(contact.clone());
        tracing::debug!(name = %contact.name, id = %contact.id, "contact inserted");

        Ok(contact)
    }

    async fn update_phone(&self, name: &str, phone: Option<String>) -> Result<Option<Contact>, Error> {
        let mut guard = self.inner.write().await;

        let Some(contact) = guard.iter_mut().find(|contact| contact.name == name) else {
            return Ok(None);
        };

        contact.phone = phone;
        tracing::debug!(name = %contact.name, id = %contact.id, "phone updated");

        Ok(Some(contact.clone()))
    }
}

/// The fixed demo contact set the service is seeded with at startup
pub fn demo_contacts() -> Vec<Contact> {
    vec![
        Contact {
            name: "Brahian".to_string(),
            phone: Some("123456".to_string()),
            street: "Baker Street".to_string(),
            city: "London".to_string(),
            id: "1".to_string(),
        },
        Contact {
            name: "Toby".to_string(),
            phone: Some("123456".to_string()),
            street: "Baker Street".to_string(),
            city: "London".to_string(),
            id: "2".to_string(),
        },
        Contact {
            name: "Andrea".to_string(),
            phone: None,
            street: "Baker Street".to_string(),
            city: "London".to_string(),
            id: "3".to_string(),
        },
    ]
}
