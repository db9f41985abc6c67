use serde::{Deserialize, Deserializer};

/// Deserialize a field, reading an explicit JSON `null` as the type's default.
///
/// Container-level `#[serde(default)]` only covers absent keys.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
