//! Test doubles and common utilities for resolver contract tests
//!
//! Provides a controlled directory source and schema builders so the tests
//! exercise the resolver layer without real HTTP.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use phonebook_core::model::Contact;
use phonebook_core::traits::{ContactStore, DirectorySource};
use phonebook_core::{Error, MemoryContactStore, Result};
use phonebook_graphql::{ContactSchema, build_schema};

/// A controlled DirectorySource that serves a fixed list or a fixed failure
pub struct MockDirectorySource {
    contacts: Vec<Contact>,
    fail: bool,
    /// Call counter for fetch_all()
    fetch_call_count: Arc<AtomicUsize>,
}

impl MockDirectorySource {
    /// Create a source that returns the given contacts
    pub fn serving(contacts: Vec<Contact>) -> Self {
        Self {
            contacts,
            fail: false,
            fetch_call_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Create a source that fails every fetch
    pub fn failing() -> Self {
        Self {
            contacts: Vec::new(),
            fail: true,
            fetch_call_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Handle to the fetch call counter
    pub fn call_counter(&self) -> Arc<AtomicUsize> {
        self.fetch_call_count.clone()
    }
}

#[async_trait]
impl DirectorySource for MockDirectorySource {
    async fn fetch_all(&self) -> Result<Vec<Contact>> {
        self.fetch_call_count.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(Error::directory("mock directory unavailable"));
        }
        Ok(self.contacts.clone())
    }
}

/// A directory entry for fixture lists
pub fn directory_contact(name: &str, phone: Option<&str>, id: &str) -> Contact {
    Contact {
        name: name.to_string(),
        phone: phone.map(str::to_string),
        street: "Baker Street".to_string(),
        city: "London".to_string(),
        id: id.to_string(),
    }
}

/// Schema over the demo seed and the given directory source
pub fn demo_schema(directory: MockDirectorySource) -> ContactSchema {
    let store: Arc<dyn ContactStore> = Arc::new(MemoryContactStore::with_demo_contacts());
    let directory: Arc<dyn DirectorySource> = Arc::new(directory);
    build_schema(store, directory)
}

/// Schema over the demo seed with an empty directory
pub fn seeded_schema() -> ContactSchema {
    demo_schema(MockDirectorySource::serving(Vec::new()))
}

/// Execute a query that must succeed and return its data as JSON
pub async fn run_ok(schema: &ContactSchema, query: &str) -> serde_json::Value {
    let resp = schema.execute(query).await;
    assert!(
        resp.errors.is_empty(),
        "unexpected errors for {query}: {:?}",
        resp.errors
    );
    resp.data.into_json().expect("data serializes to JSON")
}

/// Current contactCount as reported through the API
pub async fn contact_count(schema: &ContactSchema) -> u64 {
    let data = run_ok(schema, "{ contactCount }").await;
    data["contactCount"].as_u64().expect("contactCount is an integer")
}
