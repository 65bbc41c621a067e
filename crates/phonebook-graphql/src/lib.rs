//! GraphQL API for the phonebook service
//!
//! Provides the schema contract and resolvers over the contact store and the
//! remote directory:
//! - [`QueryRoot`]: `contactCount`, `allContacts`, `findContact`
//! - [`MutationRoot`]: `addContact`, `editNumber`
//!
//! # Two data sets
//!
//! `allContacts` reads from the remote directory on every call, while the
//! mutations and the other queries operate on the local store. The two sets
//! are not reconciled; this mirrors the reference behavior and is part of
//! the observable contract.
//!
//! # Example Queries
//!
//! ```graphql
//! # Count contacts in the local store
//! query {
//!   contactCount
//! }
//!
//! # List directory contacts that have a phone number
//! query {
//!   allContacts(phone: YES) {
//!     name
//!     phone
//!     address { street city }
//!   }
//! }
//!
//! # Look up one contact by name
//! query {
//!   findContact(name: "Andrea") {
//!     name
//!     phone
//!     id
//!   }
//! }
//!
//! # Add a contact
//! mutation {
//!   addContact(name: "Marie", phone: "555-0186", street: "Rue Cuvier", city: "Paris") {
//!     id
//!   }
//! }
//!
//! # Replace (or clear, by omitting `phone`) a contact's number
//! mutation {
//!   editNumber(name: "Andrea", phone: "999") {
//!     name
//!     phone
//!   }
//! }
//! ```

pub mod mutation;
pub mod query;
pub mod types;

use std::sync::Arc;

use async_graphql::{EmptySubscription, Schema};

use phonebook_core::traits::{ContactStore, DirectorySource};

pub use mutation::MutationRoot;
pub use query::QueryRoot;
pub use types::{AddressObject, ContactObject, PhoneFilter};

/// The full GraphQL schema type for the phonebook service
pub type ContactSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the GraphQL schema with required shared state.
///
/// The schema is injected with:
/// - `Arc<dyn ContactStore>` for the local contact collection
/// - `Arc<dyn DirectorySource>` for the remote directory fetch
pub fn build_schema(
    store: Arc<dyn ContactStore>,
    directory: Arc<dyn DirectorySource>,
) -> ContactSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(store)
        .data(directory)
        .finish()
}

/// Execute a GraphQL query and return pretty-printed JSON
///
/// Convenience for embedders and tests that don't go through HTTP.
pub async fn execute(schema: &ContactSchema, query: &str) -> String {
    let result = schema.execute(query).await;
    serde_json::to_string_pretty(&result).unwrap_or_else(|_| "{}".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use phonebook_core::MemoryContactStore;
    use phonebook_core::model::Contact;

    struct EmptyDirectory;

    #[async_trait::async_trait]
    impl DirectorySource for EmptyDirectory {
        async fn fetch_all(&self) -> phonebook_core::Result<Vec<Contact>> {
            Ok(Vec::new())
        }
    }

    #[test]
    fn sdl_exposes_contract() {
        let schema = build_schema(
            Arc::new(MemoryContactStore::new()),
            Arc::new(EmptyDirectory),
        );

        let sdl = schema.sdl();
        assert!(sdl.contains("contactCount: Int!"));
        assert!(sdl.contains("allContacts(phone: PhoneFilter): [Contact!]!"));
        assert!(sdl.contains("findContact(name: String!): Contact"));
        assert!(sdl.contains("addContact("));
        assert!(sdl.contains("editNumber(name: String!, phone: String): Contact"));
        assert!(sdl.contains("address: Address!"));
    }
}
