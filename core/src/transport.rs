//! The HTTP transport seam.
//!
//! # Design
//! The client performs no network I/O itself: every request goes through the
//! injected [`Transport`] trait, keeping the core deterministic and easy to
//! test. Implementations own the whole round-trip — connection handling,
//! status interpretation, body collection — and hand back plain owned data.

use async_trait::async_trait;

use crate::error::TransportError;

/// Executes HTTP requests on behalf of the client.
///
/// Each call resolves exactly once, either to the raw response body or to a
/// [`TransportError`]. A non-2xx status is a failure: implementations map it
/// to [`TransportError::http`] rather than handing an error page back as a
/// body. Headers travel as owned name/value pairs with lowercase names.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Issue a GET and resolve to the response body.
    async fn get(&self, url: &str) -> Result<String, TransportError>;

    /// Issue a POST carrying `body` and resolve to the response body.
    async fn post(
        &self,
        url: &str,
        body: String,
        headers: &[(String, String)],
    ) -> Result<String, TransportError>;

    /// Issue a PUT carrying `body` and resolve to the response body.
    async fn put(
        &self,
        url: &str,
        body: String,
        headers: &[(String, String)],
    ) -> Result<String, TransportError>;

    /// Issue a DELETE and resolve to the response body.
    async fn delete(&self, url: &str, headers: &[(String, String)])
        -> Result<String, TransportError>;
}
