//! Main error type for the RBAC client.

use std::borrow::Cow;
use std::error::Error as StdError;
use std::fmt;

use super::{ErrorKind, TransportCause};

/// Maximum number of response body bytes kept on an error for diagnostics.
const BODY_EXCERPT_LIMIT: usize = 512;

/// The error type for RBAC client operations.
///
/// `Error` carries a machine-inspectable [`kind()`](Error::kind) plus a
/// human-readable message. Each layer of the call stack adds a short
/// call-site prefix with [`context()`](Error::context), so the rendered
/// message traces back to the failing operation:
///
/// ```text
/// failed to list groups: unexpected status: received status 500
/// ```
///
/// ## Error Hierarchy
///
/// ```text
/// Error
/// ├── kind: ErrorKind              (category for matching)
/// ├── message: String              (human-readable description)
/// ├── context: Vec<String>         (call-site prefixes, innermost first)
/// ├── status: Option<u16>          (HTTP status, when a response arrived)
/// ├── body: Option<String>         (response body excerpt)
/// ├── transport_cause: Option      (why the exchange failed)
/// └── source: Option               (underlying cause)
/// ```
///
/// ## Example
///
/// ```rust
/// use rbac_client::{Error, ErrorKind};
///
/// fn handle_error(err: &Error) {
///     match err.kind() {
///         ErrorKind::UnexpectedStatus => {
///             eprintln!("service answered {:?}", err.status());
///         }
///         ErrorKind::Transport if err.is_cancelled() => {
///             eprintln!("caller gave up");
///         }
///         _ => eprintln!("{}", err),
///     }
/// }
/// ```
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    message: Cow<'static, str>,
    context: Vec<Cow<'static, str>>,
    status: Option<u16>,
    body: Option<String>,
    transport_cause: Option<TransportCause>,
    source: Option<Box<dyn StdError + Send + Sync + 'static>>,
}

impl Error {
    /// Creates a new error with the given kind and message.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rbac_client::{Error, ErrorKind};
    ///
    /// let err = Error::new(ErrorKind::Configuration, "HTTP client is not configured");
    /// assert_eq!(err.kind(), ErrorKind::Configuration);
    /// ```
    pub fn new(kind: ErrorKind, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind,
            message: message.into(),
            context: Vec::new(),
            status: None,
            body: None,
            transport_cause: None,
            source: None,
        }
    }

    /// Returns the error kind for categorization.
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the message without the call-site prefixes.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the HTTP status of the response that caused this error.
    ///
    /// Set for [`ErrorKind::UnexpectedStatus`] and [`ErrorKind::Decode`].
    #[inline]
    pub fn status(&self) -> Option<u16> {
        self.status
    }

    /// Returns an excerpt of the response body, if one was captured.
    ///
    /// Delete calls never capture a body.
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    /// Returns the transport failure reason for [`ErrorKind::Transport`].
    #[inline]
    pub fn transport_cause(&self) -> Option<TransportCause> {
        self.transport_cause
    }

    /// Returns `true` if the call was aborted by its cancellation token.
    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.transport_cause == Some(TransportCause::Cancelled)
    }

    /// Returns `true` if the call exceeded its deadline.
    #[inline]
    pub fn is_timeout(&self) -> bool {
        self.transport_cause == Some(TransportCause::Timeout)
    }

    /// Returns the call-site prefixes, outermost first.
    pub fn context_chain(&self) -> impl Iterator<Item = &str> {
        self.context.iter().rev().map(|c| c.as_ref())
    }

    /// Prefixes the error with a call-site description.
    ///
    /// The kind and all diagnostic fields are preserved.
    ///
    /// ```rust
    /// use rbac_client::{Error, ErrorKind};
    ///
    /// let err = Error::new(ErrorKind::Decode, "expected value")
    ///     .context("failed to list roles");
    /// assert_eq!(err.kind(), ErrorKind::Decode);
    /// assert!(err.to_string().starts_with("failed to list roles: "));
    /// ```
    #[must_use]
    pub fn context(mut self, context: impl Into<Cow<'static, str>>) -> Self {
        self.context.push(context.into());
        self
    }

    /// Sets the source error for this error.
    #[must_use]
    pub fn with_source<E>(mut self, source: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        self.source = Some(Box::new(source));
        self
    }

    /// Sets the HTTP status for this error.
    #[must_use]
    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    /// Attaches a response body excerpt, truncated to a bounded size.
    #[must_use]
    pub fn with_body(mut self, body: &[u8]) -> Self {
        self.body = Some(excerpt(body));
        self
    }

    // Convenience constructors for common error types

    /// Creates a configuration error.
    pub fn configuration(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::Configuration, message)
    }

    /// Creates a request build error.
    pub fn request_build(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::RequestBuild, message)
    }

    /// Creates an encoding error.
    pub fn encoding(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::Encoding, message)
    }

    /// Creates a transport error with the given cause.
    pub fn transport(cause: TransportCause, message: impl Into<Cow<'static, str>>) -> Self {
        let mut err = Self::new(ErrorKind::Transport, message);
        err.transport_cause = Some(cause);
        err
    }

    /// Creates a transport error for a cancelled call.
    pub fn cancelled() -> Self {
        Self::transport(TransportCause::Cancelled, "request cancelled")
    }

    /// Creates a transport error for a call that exceeded its deadline.
    pub fn timed_out(message: impl Into<Cow<'static, str>>) -> Self {
        Self::transport(TransportCause::Timeout, message)
    }

    /// Creates an unexpected status error.
    ///
    /// `body` is `None` for delete calls, which never read the response body.
    pub fn unexpected_status(status: u16, body: Option<&[u8]>) -> Self {
        let err = Self::new(
            ErrorKind::UnexpectedStatus,
            format!("received status {}", status),
        )
        .with_status(status);
        match body {
            Some(body) => err.with_body(body),
            None => err,
        }
    }

    /// Creates a decode error carrying a sample of the offending body.
    pub fn decode(status: u16, body: &[u8], source: serde_json::Error) -> Self {
        Self::new(
            ErrorKind::Decode,
            format!("failed to parse response body: {}", source),
        )
        .with_status(status)
        .with_body(body)
        .with_source(source)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for context in self.context.iter().rev() {
            write!(f, "{}: ", context)?;
        }

        write!(f, "{}: {}", self.kind, self.message)?;

        if let Some(ref body) = self.body
            && !body.is_empty()
        {
            write!(f, ", body: {}", body)?;
        }

        Ok(())
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn StdError + 'static))
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Error::request_build(format!("invalid URL: {}", err)).with_source(err)
    }
}

/// Lossily decodes at most [`BODY_EXCERPT_LIMIT`] bytes of a body.
fn excerpt(body: &[u8]) -> String {
    let text = String::from_utf8_lossy(body);
    if text.len() <= BODY_EXCERPT_LIMIT {
        return text.into_owned();
    }

    let mut end = BODY_EXCERPT_LIMIT;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &text[..end])
}
