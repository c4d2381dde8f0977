use serde::{Deserialize, Deserializer};

pub mod job;
pub mod preferences;
pub mod swipe;

/// Reads an explicit `null` as the field type's default. Upstream job feeds
/// and stored swipes carry nullable columns.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
