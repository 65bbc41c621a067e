//! Domain model for the phonebook service
//!
//! A [`Contact`] is the record exposed by the API and exchanged with the
//! remote directory. An [`Address`] is a read-time projection of a contact's
//! street and city; it is never stored on its own.

use serde::{Deserialize, Serialize};

/// A contact record
///
/// `name` acts as the unique key within the local store. `phone` is
/// optional; an absent phone is observably distinct from an empty string.
/// `id` is an opaque identifier assigned by the store, never by clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// Unique name within the store
    pub name: String,
    /// Phone number, if known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Street part of the address
    pub street: String,
    /// City part of the address
    pub city: String,
    /// Opaque store-assigned identifier
    pub id: String,
}

impl Contact {
    /// Project the contact's address fields
    pub fn address(&self) -> Address {
        Address {
            street: self.street.clone(),
            city: self.city.clone(),
        }
    }

    /// Whether the contact has a usable phone number
    ///
    /// An empty string counts as "no phone". The `allContacts` filter is
    /// defined over this truthiness, not over field presence.
    pub fn has_phone(&self) -> bool {
        self.phone.as_deref().is_some_and(|phone| !phone.is_empty())
    }
}

/// A candidate contact supplied by a client
///
/// Identical to [`Contact`] minus the `id`, which the store assigns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewContact {
    /// Unique name within the store
    pub name: String,
    /// Phone number, if known
    pub phone: Option<String>,
    /// Street part of the address
    pub street: String,
    /// City part of the address
    pub city: String,
}

/// Address projection of a contact
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// Street name
    pub street: String,
    /// City name
    pub city: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn address_projection_matches_contact_fields() {
        let contact = Contact {
            name: "Andrea".to_string(),
            phone: None,
            street: "Baker Street".to_string(),
            city: "London".to_string(),
            id: "3".to_string(),
        };

        let address = contact.address();
        assert_eq!(address.street, contact.street);
        assert_eq!(address.city, contact.city);
    }

    #[test]
    fn empty_phone_counts_as_no_phone() {
        let mut contact = Contact {
            name: "Toby".to_string(),
            phone: Some("123456".to_string()),
            street: "Baker Street".to_string(),
            city: "London".to_string(),
            id: "2".to_string(),
        };
        assert!(contact.has_phone());

        contact.phone = Some(String::new());
        assert!(!contact.has_phone());

        contact.phone = None;
        assert!(!contact.has_phone());
    }

    #[test]
    fn missing_phone_key_decodes_as_none() {
        let json = r#"{
            "name": "Andrea",
            "street": "Baker Street",
            "city": "London",
            "id": "3"
        }"#;

        let contact: Contact = serde_json::from_str(json).unwrap();
        assert_eq!(contact.phone, None);
        assert_eq!(contact.name, "Andrea");
    }

    #[test]
    fn absent_phone_is_omitted_when_encoding() {
        let contact = Contact {
            name: "Andrea".to_string(),
            phone: None,
            street: "Baker Street".to_string(),
            city: "London".to_string(),
            id: "3".to_string(),
        };

        let json = serde_json::to_string(&contact).unwrap();
        assert!(!json.contains("phone"));
    }
}
