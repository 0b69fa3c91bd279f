/// Serde defaults shared by the map data types
///
/// Optional fields may be missing entirely or present but blank (an empty
/// CSV cell, a JSON `null`); both fall back to the same default.

use serde::{Deserialize, Deserializer};

pub(crate) fn default_true() -> bool {
    true
}

pub(crate) fn default_path_type() -> String {
    "walkway".to_string()
}

pub(crate) fn blank_as_true<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or_else(default_true))
}

pub(crate) fn blank_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

pub(crate) fn blank_as_path_type<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(default_path_type))
}
