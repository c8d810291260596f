use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::de::Error;
use serde::{Deserialize, Deserializer};

/// Release dates are ISO calendar dates (`YYYY-MM-DD`); kept as strings because
/// they double as release identifiers
pub fn deserialize_release_date<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    NaiveDate::parse_from_str(&s, "%Y-%m-%d")
        .map_err(|e| Error::custom(format!("release_date must be YYYY-MM-DD ({}): {}", s, e)))?;
    Ok(s)
}

/// Report maps may be written as `null` when a run scored nothing; read that as empty
pub fn deserialize_null_as_empty<'de, D, T>(deserializer: D) -> Result<IndexMap<String, T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<IndexMap<String, T>>::deserialize(deserializer)?.unwrap_or_default())
}
