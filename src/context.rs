//! Per-call request context: identity, cancellation and deadline.

use std::time::Duration;

use tokio_util::sync::CancellationToken;

/// Header carrying the caller's identity token on every request.
pub const IDENTITY_HEADER: &str = "x-rh-identity";

/// Context for a single call to the RBAC service.
///
/// Carries the opaque identity token of the end user the call is made on
/// behalf of. The token is forwarded verbatim in the [`IDENTITY_HEADER`]
/// header; an empty token is sent as an empty header and left to the service
/// to reject.
///
/// A context can also carry a [`CancellationToken`] and a per-call timeout.
/// Cancelling the token aborts the in-flight request and the call returns a
/// [`Transport`](crate::ErrorKind::Transport) error whose
/// [`is_cancelled()`](crate::Error::is_cancelled) is `true`.
///
/// ## Example
///
/// ```rust
/// use std::time::Duration;
/// use rbac_client::RequestContext;
/// use tokio_util::sync::CancellationToken;
///
/// let token = CancellationToken::new();
/// let ctx = RequestContext::new("eyJpZGVudGl0eSI6e319")
///     .with_cancellation(token.clone())
///     .with_timeout(Duration::from_secs(5));
///
/// assert_eq!(ctx.identity(), "eyJpZGVudGl0eSI6e319");
/// assert!(!ctx.is_cancelled());
/// token.cancel();
/// assert!(ctx.is_cancelled());
/// ```
#[derive(Clone, Default)]
pub struct RequestContext {
    identity: String,
    cancellation: Option<CancellationToken>,
    timeout: Option<Duration>,
}

impl RequestContext {
    /// Creates a context for the given identity token.
    pub fn new(identity: impl Into<String>) -> Self {
        Self {
            identity: identity.into(),
            cancellation: None,
            timeout: None,
        }
    }

    /// Attaches a cancellation token.
    #[must_use]
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }

    /// Overrides the client's default timeout for this call.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Returns the identity token.
    pub fn identity(&self) -> &str {
        &self.identity
    }

    /// Returns the cancellation token, if any.
    pub fn cancellation(&self) -> Option<&CancellationToken> {
        self.cancellation.as_ref()
    }

    /// Returns the per-call timeout override, if any.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Returns `true` if the attached token has been cancelled.
    pub fn is_cancelled(&self) -> bool {
        self.cancellation
            .as_ref()
            .is_some_and(CancellationToken::is_cancelled)
    }
}

impl std::fmt::Debug for RequestContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // The identity token is a credential.
        f.debug_struct("RequestContext")
            .field("identity", &"<redacted>")
            .field("cancellable", &self.cancellation.is_some())
            .field("timeout", &self.timeout)
            .finish()
    }
}
