//! Immutable client configuration shared by every call.

use std::time::Duration;

use url::Url;

use super::PageLimit;
use crate::{Error, Result};

/// Per-call timeout applied unless the client or the call overrides it.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration of a [`Client`](crate::Client).
///
/// Built once by [`ClientBuilder`](crate::ClientBuilder) and never mutated
/// afterwards, so it is shared read-only across concurrent calls.
#[derive(Clone)]
pub struct ClientConfig {
    base_url: Url,
    application: String,
    timeout: Duration,
    page_limit: PageLimit,
    http_client: Option<reqwest::Client>,
}

impl ClientConfig {
    pub(crate) fn new(
        base_url: Url,
        application: String,
        timeout: Duration,
        page_limit: PageLimit,
        http_client: Option<reqwest::Client>,
    ) -> Self {
        Self {
            base_url,
            application,
            timeout,
            page_limit,
            http_client,
        }
    }

    /// Returns the base URL every endpoint path is joined onto.
    ///
    /// Always ends with `/`.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Returns the application name sent to the access endpoint.
    pub fn application(&self) -> &str {
        &self.application
    }

    /// Returns the default per-call timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the page size sent on list requests.
    pub fn page_limit(&self) -> PageLimit {
        self.page_limit
    }

    /// Returns `true` if an HTTP transport is configured.
    pub fn has_http_client(&self) -> bool {
        self.http_client.is_some()
    }

    /// Returns the HTTP client, or an error if not available.
    pub(crate) fn http_client(&self) -> Result<&reqwest::Client> {
        self.http_client
            .as_ref()
            .ok_or_else(|| Error::configuration("HTTP client not available"))
    }

    /// Builds the URL for an endpoint path relative to the base URL.
    pub(crate) fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path.trim_start_matches('/'))?)
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url.as_str())
            .field("application", &self.application)
            .field("timeout", &self.timeout)
            .field("page_limit", &self.page_limit)
            .field("http_client", &self.http_client.is_some())
            .finish()
    }
}

/// Parses and normalises a base URL.
///
/// The path gains a trailing `/` so that joining `roles/` keeps any prefix
/// such as `/api/rbac/v1`.
pub(crate) fn parse_base_url(raw: &str) -> Result<Url> {
    let mut url = Url::parse(raw).map_err(|e| {
        Error::configuration(format!("Invalid base URL {:?}: {}", raw, e)).with_source(e)
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(Error::configuration(format!(
            "Unsupported base URL scheme: {}",
            url.scheme()
        )));
    }

    if url.query().is_some() || url.fragment().is_some() {
        return Err(Error::configuration(
            "Base URL must not carry a query or fragment",
        ));
    }

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }

    Ok(url)
}
