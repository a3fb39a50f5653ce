//! Query-string deserializers
//!
//! Query parameters always arrive as strings, and an empty value means the
//! parameter is absent: `?category=` behaves like no category filter at
//! all, and `?user_id=` falls back to the default user.

use serde::{Deserialize, Deserializer};

/// Deserialize an optional string field where empty means absent.
pub fn empty_as_none<'de, D>(de: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(de)?;
    Ok(value.filter(|s| !s.is_empty()))
}

/// Deserialize an optional integer from a query value where the empty
/// string means absent. Non-empty values must parse.
pub fn empty_as_none_i64<'de, D>(de: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(de)?.as_deref() {
        None | Some("") => Ok(None),
        Some(s) => s.parse().map(Some).map_err(serde::de::Error::custom),
    }
}
