//! Response body decoding.
//!
//! The shape of a response is fixed per endpoint and chosen by the calling
//! operation, never sniffed at runtime:
//!
//! - direct: the body is the value itself, object or array.
//! - paginated: the body is a [`PaginatedEnvelope`], `{"data": [...]}`, and
//!   only `data` is kept. Other envelope fields (`meta`, `links`) are ignored.
//!
//! Unknown fields are ignored everywhere for forward compatibility.

use serde::Deserialize;
use serde::de::DeserializeOwned;

/// One page of a list response.
///
/// A missing or `null` `data` decodes as an empty page.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PaginatedEnvelope<T> {
    /// The page's elements, in service order.
    data: Option<Vec<T>>,
}

impl<T> PaginatedEnvelope<T> {
    /// Unwraps the page into its elements.
    pub fn into_data(self) -> Vec<T> {
        self.data.unwrap_or_default()
    }
}

/// Decodes a body holding the value directly.
pub(crate) fn decode_direct<T>(body: &[u8]) -> Result<T, serde_json::Error>
where
    T: DeserializeOwned,
{
    serde_json::from_slice(body)
}

/// Decodes a paginated envelope and returns its `data` sequence.
pub(crate) fn decode_paginated<T>(body: &[u8]) -> Result<Vec<T>, serde_json::Error>
where
    T: DeserializeOwned,
{
    serde_json::from_slice::<PaginatedEnvelope<T>>(body).map(PaginatedEnvelope::into_data)
}
