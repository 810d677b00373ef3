//! Lenient field decoding.

use serde::{Deserialize, Deserializer};

/// Decodes an explicit `null` as the field's default value.
///
/// Pair with `#[serde(default)]` so absent fields default as well.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
