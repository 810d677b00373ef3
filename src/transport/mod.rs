//! Request execution and response classification.
//!
//! Every call goes through the same pipeline: build the outgoing request,
//! send it through the configured HTTP client, read the whole body, check the
//! status against the set accepted for the [`CallKind`], then decode. The
//! transport holds no knowledge of endpoints or payload types.
//!
//! | CallKind | Accepted status | Body decoded |
//! |----------|-----------------|--------------|
//! | `Read`   | 200             | direct       |
//! | `List`   | 200             | paginated    |
//! | `Create` | 201, 200        | chosen by caller |
//! | `Delete` | 204             | never read   |
//!
//! A failed call never yields partial data. Nothing is retried.

mod decode;

pub use decode::PaginatedEnvelope;
pub(crate) use decode::{decode_direct, decode_paginated};

use bytes::Bytes;
use reqwest::Method;
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderName, HeaderValue, USER_AGENT};
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::config::ClientConfig;
use crate::context::{IDENTITY_HEADER, RequestContext};
use crate::error::TransportCause;
use crate::user_agent;
use crate::{Error, Result};

/// The class of call, which fixes the set of accepted status codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallKind {
    /// Fetch a single resource.
    Read,
    /// Fetch one page of a collection.
    List,
    /// Create a resource or attach to one.
    ///
    /// Some create-like endpoints (adding principals to a group) answer 200
    /// rather than 201, so both are accepted.
    Create,
    /// Delete a resource.
    Delete,
}

impl CallKind {
    /// Returns `true` if `status` counts as success for this kind of call.
    ///
    /// ```rust
    /// use rbac_client::transport::CallKind;
    ///
    /// assert!(CallKind::Create.accepts(200));
    /// assert!(!CallKind::Read.accepts(201));
    /// assert!(CallKind::Delete.accepts(204));
    /// ```
    pub fn accepts(self, status: u16) -> bool {
        match self {
            CallKind::Read | CallKind::List => status == 200,
            CallKind::Create => status == 201 || status == 200,
            CallKind::Delete => status == 204,
        }
    }

    /// Returns `true` if the response body is read for this kind of call.
    pub fn reads_body(self) -> bool {
        !matches!(self, CallKind::Delete)
    }
}

/// An outgoing request before per-call headers are applied.
#[derive(Debug)]
pub(crate) struct OutboundRequest {
    method: Method,
    url: Url,
    body: Option<Vec<u8>>,
}

impl OutboundRequest {
    pub(crate) fn get(url: Url) -> Self {
        Self {
            method: Method::GET,
            url,
            body: None,
        }
    }

    pub(crate) fn delete(url: Url) -> Self {
        Self {
            method: Method::DELETE,
            url,
            body: None,
        }
    }

    /// Creates a POST request with a JSON body.
    ///
    /// Serialization failures are reported before any I/O.
    pub(crate) fn post_json<B>(url: Url, body: &B) -> Result<Self>
    where
        B: Serialize + ?Sized,
    {
        let body = serde_json::to_vec(body).map_err(|e| {
            Error::encoding(format!("failed to encode request body: {}", e)).with_source(e)
        })?;

        Ok(Self {
            method: Method::POST,
            url,
            body: Some(body),
        })
    }

    /// Appends a query parameter.
    pub(crate) fn query(mut self, key: &str, value: &str) -> Self {
        self.url.query_pairs_mut().append_pair(key, value);
        self
    }

    /// Appends a query parameter unless `value` is empty.
    pub(crate) fn query_if_present(self, key: &str, value: &str) -> Self {
        if value.is_empty() {
            self
        } else {
            self.query(key, value)
        }
    }

    /// Builds the wire request, adding identity and content headers.
    fn into_request(self, ctx: &RequestContext) -> Result<reqwest::Request> {
        let identity = HeaderValue::from_str(ctx.identity()).map_err(|e| {
            Error::request_build("identity token is not a valid header value").with_source(e)
        })?;
        let agent = HeaderValue::from_str(user_agent::user_agent()).map_err(|e| {
            Error::request_build("user agent is not a valid header value").with_source(e)
        })?;

        let mut request = reqwest::Request::new(self.method, self.url);
        let headers = request.headers_mut();
        headers.insert(HeaderName::from_static(IDENTITY_HEADER), identity);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, agent);

        if let Some(body) = self.body {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
            *request.body_mut() = Some(body.into());
        }

        Ok(request)
    }
}

/// Executes requests for one client configuration.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Transport<'a> {
    config: &'a ClientConfig,
}

impl<'a> Transport<'a> {
    pub(crate) fn new(config: &'a ClientConfig) -> Self {
        Self { config }
    }

    /// Executes a read; success is 200 and the body is decoded directly.
    pub(crate) async fn read<T>(&self, ctx: &RequestContext, request: OutboundRequest) -> Result<T>
    where
        T: DeserializeOwned,
    {
        self.classify(ctx, request, CallKind::Read, decode_direct)
            .await
    }

    /// Executes a list read; success is 200 and the body is a paginated envelope.
    pub(crate) async fn list<T>(
        &self,
        ctx: &RequestContext,
        request: OutboundRequest,
    ) -> Result<Vec<T>>
    where
        T: DeserializeOwned,
    {
        self.classify(ctx, request, CallKind::List, decode_paginated)
            .await
    }

    /// Executes a create; success is 201 or 200 and the body is decoded directly.
    pub(crate) async fn create<T>(&self, ctx: &RequestContext, request: OutboundRequest) -> Result<T>
    where
        T: DeserializeOwned,
    {
        self.classify(ctx, request, CallKind::Create, decode_direct)
            .await
    }

    /// Executes a create whose response is a paginated envelope.
    pub(crate) async fn create_paginated<T>(
        &self,
        ctx: &RequestContext,
        request: OutboundRequest,
    ) -> Result<Vec<T>>
    where
        T: DeserializeOwned,
    {
        self.classify(ctx, request, CallKind::Create, decode_paginated)
            .await
    }

    /// Executes a delete; success is 204 and the body is never read.
    pub(crate) async fn delete(&self, ctx: &RequestContext, request: OutboundRequest) -> Result<()> {
        let (status, _) = self.exchange(ctx, request, CallKind::Delete).await?;
        if !CallKind::Delete.accepts(status) {
            return Err(Error::unexpected_status(status, None));
        }
        Ok(())
    }

    async fn classify<T>(
        &self,
        ctx: &RequestContext,
        request: OutboundRequest,
        kind: CallKind,
        decode: fn(&[u8]) -> std::result::Result<T, serde_json::Error>,
    ) -> Result<T> {
        let (status, body) = self.exchange(ctx, request, kind).await?;

        if !kind.accepts(status) {
            return Err(Error::unexpected_status(status, Some(&body)));
        }

        decode(&body).map_err(|e| Error::decode(status, &body, e))
    }

    /// Sends the request and reads the response, honouring the context's
    /// cancellation token and deadline.
    async fn exchange(
        &self,
        ctx: &RequestContext,
        request: OutboundRequest,
        kind: CallKind,
    ) -> Result<(u16, Bytes)> {
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!(
            "rbac.request",
            otel.kind = "client",
            http.method = %request.method,
            http.url = %request.url,
            http.status_code = tracing::field::Empty,
        );

        let guarded = async move {
            let http = self.config.http_client()?;
            let request = request.into_request(ctx)?;

            if ctx.is_cancelled() {
                return Err(Error::cancelled());
            }

            let timeout = ctx.timeout().unwrap_or(self.config.timeout());
            let bounded = async move {
                tokio::time::timeout(timeout, send(http, request, kind))
                    .await
                    .map_err(|_| Error::timed_out(format!("no response within {:?}", timeout)))?
            };

            match ctx.cancellation() {
                Some(token) => tokio::select! {
                    biased;
                    _ = token.cancelled() => Err(Error::cancelled()),
                    result = bounded => result,
                },
                None => bounded.await,
            }
        };

        #[cfg(feature = "tracing")]
        let result = {
            use tracing::Instrument;

            let result = guarded.instrument(span.clone()).await;
            if let Err(ref e) = result {
                tracing::debug!(parent: &span, error = %e, "RBAC request failed");
            }
            result
        };

        #[cfg(not(feature = "tracing"))]
        let result = guarded.await;

        result.map_err(|e| e.context("request to RBAC service failed"))
    }
}

/// Performs the HTTP round trip and reads the body when the call needs it.
async fn send(
    http: &reqwest::Client,
    request: reqwest::Request,
    kind: CallKind,
) -> Result<(u16, Bytes)> {
    let response = http.execute(request).await.map_err(map_reqwest_error)?;
    let status = response.status().as_u16();

    #[cfg(feature = "tracing")]
    tracing::Span::current().record("http.status_code", status);

    let body = if kind.reads_body() {
        response
            .bytes()
            .await
            .map_err(|e| map_reqwest_error(e).context("failed to read response body"))?
    } else {
        Bytes::new()
    };

    Ok((status, body))
}

/// Maps reqwest errors to client errors.
fn map_reqwest_error(e: reqwest::Error) -> Error {
    if e.is_timeout() {
        Error::timed_out(format!("Request timed out: {}", e)).with_source(e)
    } else if e.is_connect() {
        Error::transport(TransportCause::Connect, format!("Connection failed: {}", e))
            .with_source(e)
    } else if e.is_builder() {
        Error::request_build(format!("Invalid request: {}", e)).with_source(e)
    } else {
        Error::transport(TransportCause::Other, format!("HTTP error: {}", e)).with_source(e)
    }
}
