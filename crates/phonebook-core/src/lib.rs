// # phonebook-core
//
// Core library for the phonebook GraphQL service.
//
// ## Architecture Overview
//
// This library provides the domain model and storage contracts for the
// contact directory:
// - **ContactStore**: Trait for the in-process, mutable contact collection
// - **DirectorySource**: Trait for fetching contacts from a remote directory
// - **MemoryContactStore**: Seedable in-memory ContactStore implementation
// - **ServiceConfig**: Validated runtime configuration
//
// ## Design Principles
//
// 1. **Separation of Concerns**: Domain logic is separate from transport
// 2. **Library-First**: All core functionality can be used without the daemon
// 3. **Explicit Ownership**: The store is the only component that mutates
//    the contact list; callers go through the ContactStore trait
// 4. **Two Data Sets**: The remote directory and the local store are
//    deliberately independent and never reconciled

pub mod config;
pub mod error;
pub mod model;
pub mod store;
pub mod traits;

// Re-export core types for convenience
pub use config::ServiceConfig;
pub use error::{Error, Result};
pub use model::{Address, Contact, NewContact};
pub use store::MemoryContactStore;
pub use traits::{ContactStore, DirectorySource};
