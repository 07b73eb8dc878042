//! Serde helpers for the vendor's JSON quirks.

use serde::{Deserialize, Deserializer};

/// Deserializes `null` as `T::default()`.
///
/// The API emits `null` for numbers and strings it has no value for
/// (e.g. `total_supply` of an untracked coin). Pair with `#[serde(default)]`
/// so a missing key behaves the same way.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
