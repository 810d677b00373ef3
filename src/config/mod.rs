//! Configuration types for the RBAC client.
//!
//! This module provides:
//! - [`ClientConfig`]: base URL, application name, timeout and HTTP transport
//! - [`PageLimit`]: the page size sent on list requests

mod client;
mod pagination;

pub use client::{ClientConfig, DEFAULT_TIMEOUT};
pub(crate) use client::parse_base_url;
pub use pagination::{DEFAULT_PAGE_LIMIT, PageLimit};
