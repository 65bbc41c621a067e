//! Query resolvers
//!
//! `contactCount` and `findContact` read the local store; `allContacts`
//! ignores the store entirely and fetches from the remote directory on every
//! call. Lookup misses resolve to null, never to an error.

use std::sync::Arc;

use async_graphql::{Context, Object, Result};

use phonebook_core::traits::{ContactStore, DirectorySource};

use crate::types::{ContactObject, PhoneFilter};

/// Root type for all queries
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Number of contacts currently held in the local store
    async fn contact_count(&self, ctx: &Context<'_>) -> Result<usize> {
        let store = ctx.data_unchecked::<Arc<dyn ContactStore>>();
        Ok(store.count().await?)
    }

    /// All contacts from the remote directory, optionally filtered by
    /// phone presence
    ///
    /// Directory failures propagate to the caller as request-level errors.
    async fn all_contacts(
        &self,
        ctx: &Context<'_>,
        phone: Option<PhoneFilter>,
    ) -> Result<Vec<ContactObject>> {
        let directory = ctx.data_unchecked::<Arc<dyn DirectorySource>>();
        let contacts = directory.fetch_all().await?;

        let contacts: Vec<_> = match phone {
            Some(filter) => contacts
                .into_iter()
                .filter(|contact| filter.matches(contact))
                .collect(),
            None => contacts,
        };

        Ok(contacts.into_iter().map(ContactObject).collect())
    }

    /// The contact with exactly this name, or null if none exists
    async fn find_contact(&self, ctx: &Context<'_>, name: String) -> Result<Option<ContactObject>> {
        let store = ctx.data_unchecked::<Arc<dyn ContactStore>>();
        Ok(store.find_by_name(&name).await?.map(ContactObject))
    }
}
