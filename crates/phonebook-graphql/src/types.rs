//! GraphQL object types for the phonebook schema
//!
//! Thin wrappers around the domain model. The wrappers exist because the
//! schema exposes `address` as a nested object and hides the flat
//! street/city fields of the stored record.

use async_graphql::{Enum, ID, Object, SimpleObject};

use phonebook_core::model::{Address, Contact};

/// Filter for the `allContacts` query
///
/// `YES` selects contacts with a usable phone number, `NO` the complement.
/// An empty-string phone counts as "no phone".
#[derive(Enum, Copy, Clone, Eq, PartialEq, Debug)]
pub enum PhoneFilter {
    /// Contacts that have a phone number
    Yes,
    /// Contacts without a phone number
    No,
}

impl PhoneFilter {
    /// Whether the given contact passes this filter
    pub fn matches(self, contact: &Contact) -> bool {
        match self {
            PhoneFilter::Yes => contact.has_phone(),
            PhoneFilter::No => !contact.has_phone(),
        }
    }
}

/// GraphQL view of a contact record
pub struct ContactObject(pub Contact);

#[Object(name = "Contact")]
impl ContactObject {
    /// Unique name of the contact
    async fn name(&self) -> &str {
        &self.0.name
    }

    /// Phone number, if known
    async fn phone(&self) -> Option<&str> {
        self.0.phone.as_deref()
    }

    /// Address projection, derived from the record at read time
    async fn address(&self) -> AddressObject {
        AddressObject::from(self.0.address())
    }

    /// Opaque store-assigned identifier
    async fn id(&self) -> ID {
        ID(self.0.id.clone())
    }
}

/// GraphQL view of an address projection
#[derive(SimpleObject)]
#[graphql(name = "Address")]
pub struct AddressObject {
    /// Street name
    pub street: String,
    /// City name
    pub city: String,
}

impl From<Address> for AddressObject {
    fn from(address: Address) -> Self {
        Self {
            street: address.street,
            city: address.city,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact(phone: Option<&str>) -> Contact {
        Contact {
            name: "Toby".to_string(),
            phone: phone.map(str::to_string),
            street: "Baker Street".to_string(),
            city: "London".to_string(),
            id: "2".to_string(),
        }
    }

    #[test]
    fn filter_is_truthiness_not_presence() {
        assert!(PhoneFilter::Yes.matches(&contact(Some("123456"))));
        assert!(!PhoneFilter::Yes.matches(&contact(None)));

        // Empty string is "no phone" for filtering purposes
        assert!(!PhoneFilter::Yes.matches(&contact(Some(""))));
        assert!(PhoneFilter::No.matches(&contact(Some(""))));
        assert!(PhoneFilter::No.matches(&contact(None)));
    }
}
