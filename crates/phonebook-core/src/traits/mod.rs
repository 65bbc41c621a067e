//! Core traits for the phonebook service
//!
//! This module defines the abstract interfaces that all implementations must follow.
//!
//! - [`ContactStore`]: The in-process, mutable contact collection
//! - [`DirectorySource`]: On-demand fetch of contacts from a remote directory

pub mod contact_store;
pub mod directory_source;

pub use contact_store::ContactStore;
pub use directory_source::DirectorySource;
