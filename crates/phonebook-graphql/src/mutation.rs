//! Mutation resolvers
//!
//! Both mutations operate on the local store only. A duplicate name on
//! `addContact` is a structured user-input error; a name miss on
//! `editNumber` is a null result, not an error. That asymmetry is part of
//! the API contract.

use std::sync::Arc;

use async_graphql::{Context, Error as FieldError, ErrorExtensions, Object, Result};

use phonebook_core::Error;
use phonebook_core::model::NewContact;
use phonebook_core::traits::ContactStore;

use crate::types::ContactObject;

/// Root type for all mutations
pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Add a contact to the local store
    ///
    /// Fails with a `BAD_USER_INPUT` error carrying the offending name if a
    /// contact with that name already exists; the store is left untouched.
    async fn add_contact(
        &self,
        ctx: &Context<'_>,
        name: String,
        phone: Option<String>,
        street: String,
        city: String,
    ) -> Result<ContactObject> {
        let store = ctx.data_unchecked::<Arc<dyn ContactStore>>();

        let candidate = NewContact {
            name,
            phone,
            street,
            city,
        };

        match store.insert(candidate).await {
            Ok(contact) => {
                tracing::info!(name = %contact.name, id = %contact.id, "contact added");
                Ok(ContactObject(contact))
            }
            Err(Error::DuplicateName { name }) => {
                tracing::info!(name = %name, "rejected duplicate contact name");
                Err(duplicate_name_error(name))
            }
            Err(other) => Err(other.into()),
        }
    }

    /// Replace the phone number of the named contact
    ///
    /// Omitting `phone` clears the field. Returns null if no contact with
    /// that name exists.
    async fn edit_number(
        &self,
        ctx: &Context<'_>,
        name: String,
        phone: Option<String>,
    ) -> Result<Option<ContactObject>> {
        let store = ctx.data_unchecked::<Arc<dyn ContactStore>>();
        Ok(store.update_phone(&name, phone).await?.map(ContactObject))
    }
}

/// Build the user-input error shape for a duplicate name
///
/// Extensions carry the rejected name under `invalidArgs`, which is how
/// clients distinguish this validation failure from internal errors.
fn duplicate_name_error(name: String) -> FieldError {
    FieldError::new("Name must be unique").extend_with(move |_, ext| {
        ext.set("code", "BAD_USER_INPUT");
        ext.set("invalidArgs", name.clone());
    })
}
