//! Serde helpers for CoinGecko's loosely-typed JSON.
//!
//! CoinGecko freely returns `null` for collections and individual values and
//! `""` for absent strings. These helpers apply one decode policy everywhere:
//! `null` collections become empty, `null` entries become their zero value,
//! and empty strings become `None`.

use serde::{Deserialize, Deserializer};
use serde_with::{DefaultOnNull, Same};
use std::collections::HashMap;

/// `serde_as` adapter for `HashMap<String, V>` fields that may be `null` or
/// contain `null` values.
///
/// # Example
///
/// ```rust
/// use std::collections::HashMap;
/// use serde::Deserialize;
/// use serde_with::serde_as;
/// use coingecko_api_client::types::serde_helpers::LenientMap;
///
/// #[serde_as]
/// #[derive(Deserialize, Debug)]
/// struct Response {
///     #[serde_as(deserialize_as = "LenientMap")]
///     #[serde(default)]
///     current_price: HashMap<String, f64>,
/// }
///
/// let response: Response = serde_json::from_str(r#"{"current_price":{"usd":1.5,"eur":null}}"#).unwrap();
/// assert_eq!(response.current_price["eur"], 0.0);
///
/// let response: Response = serde_json::from_str(r#"{"current_price":null}"#).unwrap();
/// assert!(response.current_price.is_empty());
/// ```
pub type LenientMap = DefaultOnNull<HashMap<Same, DefaultOnNull>>;

/// `serde_as` adapter for `Vec<T>` fields that may be `null` or contain
/// `null` entries.
pub type LenientVec = DefaultOnNull<Vec<DefaultOnNull>>;

/// Deserialize an optional string, mapping `""` to `None`.
///
/// # Example
///
/// ```rust
/// use serde::Deserialize;
/// use coingecko_api_client::types::serde_helpers::empty_string_as_none;
///
/// #[derive(Deserialize, Debug)]
/// struct Response {
///     #[serde(deserialize_with = "empty_string_as_none::deserialize", default)]
///     country_origin: Option<String>,
/// }
///
/// let response: Response = serde_json::from_str(r#"{"country_origin":""}"#).unwrap();
/// assert!(response.country_origin.is_none());
/// ```
pub mod empty_string_as_none {
    use super::*;

    /// Deserialize a string, returning None if empty.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = Option::<String>::deserialize(deserializer)?;
        Ok(s.filter(|s| !s.is_empty()))
    }
}
