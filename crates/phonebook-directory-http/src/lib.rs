// # HTTP Directory Source
//
// This crate provides the HTTP-based remote directory for the phonebook
// service.
//
// ## Purpose
//
// The `allContacts` query reads its data from an external directory rather
// than the local store. This crate implements that fetch: a single GET
// against `{base_url}/persons` returning a JSON array of contact records.
//
// ## Deliberately dumb
//
// - One request per call, no caching between calls
// - No retry; any request, status, or decode failure propagates to the
//   caller unchanged
// - No timeout beyond the client default configured at construction

use std::time::Duration;

use phonebook_core::model::Contact;
use phonebook_core::traits::DirectorySource;
use phonebook_core::{Error, Result};

/// Default HTTP timeout for directory requests
const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(10);

/// Path of the contact list on the directory host
const PERSONS_PATH: &str = "/persons";

/// HTTP-based remote directory source
pub struct HttpDirectorySource {
    /// Base URL of the directory (the `/persons` path is appended)
    base_url: String,

    /// HTTP client
    client: reqwest::Client,
}

impl HttpDirectorySource {
    /// Create a new directory source with the default timeout
    ///
    /// # Parameters
    ///
    /// - `base_url`: Directory base URL (e.g., "http://localhost:3000")
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_timeout(base_url, DEFAULT_HTTP_TIMEOUT)
    }

    /// Create with a custom request timeout
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::builder()
                .timeout(timeout)
                .build()
                .unwrap_or_default(),
        }
    }

    /// Full URL of the contact list endpoint
    fn persons_url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), PERSONS_PATH)
    }
}

#[async_trait::async_trait]
impl DirectorySource for HttpDirectorySource {
    async fn fetch_all(&self) -> Result<Vec<Contact>> {
        let url = self.persons_url();

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::directory(format!("request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(Error::directory(format!(
                "HTTP error from {}: {}",
                url,
                response.status()
            )));
        }

        let contacts: Vec<Contact> = response
            .json()
            .await
            .map_err(|e| Error::directory(format!("failed to decode response: {e}")))?;

        tracing::debug!(count = contacts.len(), url = %url, "fetched directory contacts");

        Ok(contacts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_persons_url_join() {
        let source = HttpDirectorySource::new("http://localhost:3000");
        assert_eq!(source.persons_url(), "http://localhost:3000/persons");
    }

    #[test]
    fn test_persons_url_trailing_slash() {
        let source = HttpDirectorySource::new("http://localhost:3000/");
        assert_eq!(source.persons_url(), "http://localhost:3000/persons");
    }

    #[test]
    fn test_payload_decodes_mixed_phone_presence() {
        let body = r#"[
            {"name": "Brahian", "phone": "123456", "street": "Baker Street", "city": "London", "id": "1"},
            {"name": "Andrea", "street": "Baker Street", "city": "London", "id": "3"}
        ]"#;

        let contacts: Vec<Contact> = serde_json::from_str(body).unwrap();
        assert_eq!(contacts.len(), 2);
        assert!(contacts[0].has_phone());
        assert!(!contacts[1].has_phone());
    }
}
