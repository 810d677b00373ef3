//! Error types for the RBAC client.
//!
//! Every operation returns [`Result<T>`]. A failed call yields exactly one
//! [`Error`]; a successful call never does. Match on [`Error::kind`] to tell
//! apart the failure classes:
//!
//! - [`ErrorKind::Configuration`], [`ErrorKind::RequestBuild`] and
//!   [`ErrorKind::Encoding`] happen before any network I/O.
//! - [`ErrorKind::Transport`] means no response was obtained. See
//!   [`TransportCause`] for timeouts and cancellation.
//! - [`ErrorKind::UnexpectedStatus`] and [`ErrorKind::Decode`] mean the
//!   service answered, but with a rejected status or an unreadable body.
//!
//! ```rust,ignore
//! match client.groups().list(&ctx, "").await {
//!     Ok(groups) => println!("{} groups", groups.len()),
//!     Err(e) if e.kind() == ErrorKind::UnexpectedStatus => {
//!         eprintln!("RBAC answered {:?}: {:?}", e.status(), e.body());
//!     }
//!     Err(e) => return Err(e.into()),
//! }
//! ```

mod core;
mod kind;

pub use core::Error;
pub use kind::{ErrorKind, TransportCause};

/// A specialized `Result` type for RBAC client operations.
pub type Result<T> = std::result::Result<T, Error>;
