//! Client builder with typestate pattern.

use std::{marker::PhantomData, sync::Arc, time::Duration};

use crate::{
    Client, Error,
    config::{ClientConfig, DEFAULT_TIMEOUT, PageLimit, parse_base_url},
    user_agent::user_agent,
};

/// Marker type: URL not yet provided.
pub struct NoUrl;

/// Marker type: URL has been provided.
pub struct HasUrl;

/// Marker type: application name not yet provided.
pub struct NoApplication;

/// Marker type: application name has been provided.
pub struct HasApplication;

enum HttpClientChoice {
    Default,
    Custom(reqwest::Client),
    Disabled,
}

/// Builder for creating [`Client`] instances.
///
/// Uses the typestate pattern to ensure the required configuration
/// (base URL and application name) is provided at compile time.
///
/// ## Required Configuration
///
/// - `url()`: The RBAC service base URL, including any path prefix
/// - `application()`: The application name sent to the access endpoint
///
/// ## Optional Configuration
///
/// - `timeout()`: Default per-call timeout (30 seconds)
/// - `page_limit()`: Page size sent on list requests (100)
/// - `http_client()`: A preconfigured `reqwest::Client`
///
/// ## Example
///
/// ```rust
/// use std::time::Duration;
/// use rbac_client::{Client, PageLimit};
///
/// let client = Client::builder()
///     .url("http://localhost:8000/api/rbac/v1")
///     .application("chipotle")
///     .timeout(Duration::from_secs(10))
///     .page_limit(PageLimit::new(50).unwrap_or_default())
///     .build()?;
///
/// assert_eq!(client.config().application(), "chipotle");
/// # Ok::<(), rbac_client::Error>(())
/// ```
pub struct ClientBuilder<UrlState, ApplicationState> {
    url: Option<String>,
    application: Option<String>,
    timeout: Option<Duration>,
    page_limit: PageLimit,
    http_client: HttpClientChoice,
    _url_state: PhantomData<UrlState>,
    _application_state: PhantomData<ApplicationState>,
}

impl ClientBuilder<NoUrl, NoApplication> {
    /// Creates a new client builder.
    pub fn new() -> Self {
        Self {
            url: None,
            application: None,
            timeout: None,
            page_limit: PageLimit::default(),
            http_client: HttpClientChoice::Default,
            _url_state: PhantomData,
            _application_state: PhantomData,
        }
    }
}

impl Default for ClientBuilder<NoUrl, NoApplication> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> ClientBuilder<NoUrl, A> {
    /// Sets the RBAC service base URL.
    ///
    /// Endpoint paths are joined onto it, so a prefix such as
    /// `/api/rbac/v1` is kept. A trailing `/` is optional.
    pub fn url(self, url: impl Into<String>) -> ClientBuilder<HasUrl, A> {
        ClientBuilder {
            url: Some(url.into()),
            application: self.application,
            timeout: self.timeout,
            page_limit: self.page_limit,
            http_client: self.http_client,
            _url_state: PhantomData,
            _application_state: PhantomData,
        }
    }
}

impl<U> ClientBuilder<U, NoApplication> {
    /// Sets the application name used to filter access queries.
    pub fn application(self, application: impl Into<String>) -> ClientBuilder<U, HasApplication> {
        ClientBuilder {
            url: self.url,
            application: Some(application.into()),
            timeout: self.timeout,
            page_limit: self.page_limit,
            http_client: self.http_client,
            _url_state: PhantomData,
            _application_state: PhantomData,
        }
    }
}

impl<U, A> ClientBuilder<U, A> {
    /// Sets the default per-call timeout.
    ///
    /// The timeout covers sending the request and reading the whole
    /// response body. A [`RequestContext`](crate::RequestContext) can
    /// override it for a single call.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the page size sent as `limit` on list requests.
    #[must_use]
    pub fn page_limit(mut self, limit: PageLimit) -> Self {
        self.page_limit = limit;
        self
    }

    /// Uses a preconfigured HTTP client instead of building one.
    ///
    /// Useful to share a connection pool or to set proxies and TLS roots.
    /// The client's own timeouts still apply alongside the per-call timeout.
    #[must_use]
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = HttpClientChoice::Custom(client);
        self
    }

    /// Builds the client without an HTTP transport.
    ///
    /// Every call on such a client fails with a
    /// [`Configuration`](crate::ErrorKind::Configuration) error before
    /// any I/O.
    #[must_use]
    pub fn without_http_client(mut self) -> Self {
        self.http_client = HttpClientChoice::Disabled;
        self
    }
}

impl ClientBuilder<HasUrl, HasApplication> {
    /// Builds the client.
    ///
    /// # Errors
    ///
    /// Returns a [`Configuration`](crate::ErrorKind::Configuration) error if:
    /// - The URL does not parse, is not `http`/`https`, or carries a query
    /// - The HTTP client cannot be created
    pub fn build(self) -> Result<Client, Error> {
        let url = self.url.ok_or_else(|| Error::configuration("URL is required"))?;
        let application =
            self.application.ok_or_else(|| Error::configuration("application is required"))?;

        let base_url = parse_base_url(&url)?;
        let timeout = self.timeout.unwrap_or(DEFAULT_TIMEOUT);

        let http_client = match self.http_client {
            HttpClientChoice::Default => Some(
                reqwest::Client::builder()
                    .user_agent(user_agent())
                    .connect_timeout(timeout)
                    .build()
                    .map_err(|e| {
                        Error::configuration(format!("Failed to create HTTP client: {}", e))
                            .with_source(e)
                    })?,
            ),
            HttpClientChoice::Custom(client) => Some(client),
            HttpClientChoice::Disabled => None,
        };

        let config = ClientConfig::new(base_url, application, timeout, self.page_limit, http_client);
        Ok(Client::from_config(Arc::new(config)))
    }
}
