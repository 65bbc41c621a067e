// # Directory Source Trait
//
// Defines the interface for the remote contact directory.
//
// ## Purpose
//
// The `allContacts` query reads from an external directory rather than the
// local store; the two data sets are deliberately independent. This trait
// keeps the resolver layer free of HTTP details and lets tests substitute a
// controlled double.
//
// ## Failure propagation
//
// Implementations must not retry, cache, or swallow failures. Any request,
// status, or decode failure is returned as-is and surfaces at the API
// boundary as a request-level error.

use async_trait::async_trait;

use crate::model::Contact;

/// Trait for remote directory implementations
#[async_trait]
pub trait DirectorySource: Send + Sync {
    /// Fetch the full contact list from the directory
    ///
    /// Every invocation re-fetches; there is no caching between calls.
    ///
    /// # Returns
    ///
    /// - `Ok(Vec<Contact>)`: The decoded contact list
    /// - `Err(Error)`: Request, status, or decode failure
    async fn fetch_all(&self) -> Result<Vec<Contact>, crate::Error>;
}
