//! Error kind enumeration for categorizing client errors.

/// Categorization of client errors.
///
/// This enum provides a stable interface for matching on error types. Every
/// failed call produces exactly one [`Error`](crate::Error) whose kind is one
/// of these variants.
///
/// ## Where in the Pipeline
///
/// | ErrorKind          | I/O attempted | Typical cause                          |
/// |--------------------|---------------|----------------------------------------|
/// | `Configuration`    | No            | No HTTP transport, bad base URL        |
/// | `RequestBuild`     | No            | Path parameter breaks the URL          |
/// | `Encoding`         | No            | Request body failed to serialize       |
/// | `Transport`        | Yes           | Network failure, timeout, cancellation |
/// | `UnexpectedStatus` | Yes           | Status outside the accepted set        |
/// | `Decode`           | Yes           | 2xx body is not the expected JSON      |
///
/// The client never retries. Recovery policy belongs to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The client is misconfigured (e.g. no HTTP transport, invalid base URL).
    #[error("configuration error")]
    Configuration,

    /// The outbound request could not be constructed from the inputs.
    #[error("request build error")]
    RequestBuild,

    /// The request body could not be serialized to JSON.
    #[error("encoding error")]
    Encoding,

    /// The request was sent but no response was obtained.
    ///
    /// Covers connection failures, deadline expiry and cancellation. See
    /// [`TransportCause`] for the specific reason.
    #[error("transport error")]
    Transport,

    /// A response arrived with a status outside the accepted set for the call.
    #[error("unexpected status")]
    UnexpectedStatus,

    /// A successful response body could not be parsed into the expected shape.
    #[error("decode error")]
    Decode,
}

impl ErrorKind {
    /// Returns `true` if the failure happened before any network I/O.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rbac_client::ErrorKind;
    ///
    /// assert!(ErrorKind::Encoding.is_local());
    /// assert!(!ErrorKind::UnexpectedStatus.is_local());
    /// ```
    #[inline]
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            ErrorKind::Configuration | ErrorKind::RequestBuild | ErrorKind::Encoding
        )
    }

    /// Returns `true` if the remote service produced a response.
    #[inline]
    pub fn has_response(&self) -> bool {
        matches!(self, ErrorKind::UnexpectedStatus | ErrorKind::Decode)
    }
}

/// Why a [`ErrorKind::Transport`] failure happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[non_exhaustive]
pub enum TransportCause {
    /// The connection could not be established (DNS, TLS, refused).
    #[error("connection failed")]
    Connect,

    /// The per-call deadline elapsed before the exchange completed.
    #[error("timed out")]
    Timeout,

    /// The caller cancelled the request.
    #[error("cancelled")]
    Cancelled,

    /// Any other failure while sending or reading the response body.
    #[error("i/o failure")]
    Other,
}
