//! Types for the status, events, exchange rate, platform and global endpoints.

use std::collections::HashMap;

use serde::Deserialize;
use serde_with::serde_as;

use crate::types::serde_helpers::{LenientMap, empty_string_as_none};

/// Response of `/ping`.
#[derive(Debug, Clone, Deserialize)]
pub struct Ping {
    /// Status message, e.g. `(V3) To the Moon!`.
    pub gecko_says: String,
}

/// Envelope of the endpoints that wrap their payload in `data`.
#[derive(Debug, Deserialize)]
pub(crate) struct Data<T> {
    pub(crate) data: T,
}

/// Country code usable as an event filter.
#[derive(Debug, Clone, Deserialize)]
pub struct EventCountry {
    /// Country name; `None` for the catch-all entry.
    #[serde(deserialize_with = "empty_string_as_none::deserialize", default)]
    pub country: Option<String>,
    /// ISO country code; empty for the catch-all entry.
    #[serde(default)]
    pub code: String,
}

/// Response of `/events/types`.
#[serde_as]
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventTypes {
    /// Event type names.
    #[serde_as(deserialize_as = "serde_with::DefaultOnNull")]
    #[serde(default)]
    pub data: Vec<String>,
    /// Number of event types.
    #[serde(default)]
    pub count: u32,
}

/// Category of an exchange rate's unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExchangeRateKind {
    Crypto,
    Fiat,
    Commodity,
    #[serde(other)]
    Other,
}

/// Value of one BTC in another unit.
#[derive(Debug, Clone, Deserialize)]
pub struct ExchangeRate {
    /// Unit name.
    pub name: String,
    /// Unit symbol.
    pub unit: String,
    /// Units per BTC.
    pub value: f64,
    /// Category of the unit.
    #[serde(rename = "type")]
    pub kind: ExchangeRateKind,
}

/// Exchange rates keyed by unit code (`btc`, `usd`, `xau`, ...).
pub type ExchangeRates = HashMap<String, ExchangeRate>;

#[derive(Debug, Deserialize)]
pub(crate) struct Rates {
    pub(crate) rates: ExchangeRates,
}

/// Blockchain network CoinGecko tracks tokens on.
#[derive(Debug, Clone, Deserialize)]
pub struct AssetPlatform {
    /// Platform id, as used in `CoinListItem::platforms`.
    pub id: String,
    /// EVM chain id, for EVM networks.
    pub chain_identifier: Option<i64>,
    /// Display name.
    pub name: String,
    #[serde(deserialize_with = "empty_string_as_none::deserialize", default)]
    pub shortname: Option<String>,
    /// Id of the platform's native coin.
    pub native_coin_id: Option<String>,
}

/// Global cryptocurrency market statistics.
#[serde_as]
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Global {
    pub active_cryptocurrencies: Option<u64>,
    pub upcoming_icos: Option<u64>,
    pub ongoing_icos: Option<u64>,
    pub ended_icos: Option<u64>,
    pub markets: Option<u64>,
    /// Total market cap keyed by currency.
    #[serde_as(deserialize_as = "LenientMap")]
    #[serde(default)]
    pub total_market_cap: HashMap<String, f64>,
    /// 24-hour volume keyed by currency.
    #[serde_as(deserialize_as = "LenientMap")]
    #[serde(default)]
    pub total_volume: HashMap<String, f64>,
    /// Market dominance in percent keyed by coin symbol.
    #[serde_as(deserialize_as = "LenientMap")]
    #[serde(default)]
    pub market_cap_percentage: HashMap<String, f64>,
    pub market_cap_change_percentage_24h_usd: Option<f64>,
    /// Unix time in seconds.
    pub updated_at: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_countries_envelope() {
        let countries: Data<Vec<EventCountry>> = serde_json::from_str(
            r#"{"data":[{"country":"","code":""},{"country":"Singapore","code":"SG"}],"count":2}"#,
        )
        .unwrap();
        assert_eq!(countries.data.len(), 2);
        assert!(countries.data[0].country.is_none());
        assert_eq!(countries.data[1].country.as_deref(), Some("Singapore"));
        assert_eq!(countries.data[1].code, "SG");
    }

    #[test]
    fn test_exchange_rate_kinds() {
        let rates: Rates = serde_json::from_str(
            r#"{"rates":{
                "btc":{"name":"Bitcoin","unit":"BTC","value":1.0,"type":"crypto"},
                "usd":{"name":"US Dollar","unit":"$","value":67187.3,"type":"fiat"},
                "xau":{"name":"Gold - Troy Ounce","unit":"XAU","value":28.9,"type":"commodity"},
                "bits":{"name":"Bits","unit":"μBTC","value":1000000.0,"type":"unit"}
            }}"#,
        )
        .unwrap();
        assert_eq!(rates.rates["btc"].kind, ExchangeRateKind::Crypto);
        assert_eq!(rates.rates["usd"].kind, ExchangeRateKind::Fiat);
        assert_eq!(rates.rates["xau"].kind, ExchangeRateKind::Commodity);
        assert_eq!(rates.rates["bits"].kind, ExchangeRateKind::Other);
        assert_eq!(rates.rates["usd"].value, 67187.3);
    }

    #[test]
    fn test_asset_platform_nullable_fields() {
        let platforms: Vec<AssetPlatform> = serde_json::from_str(
            r#"[
                {"id":"ethereum","chain_identifier":1,"name":"Ethereum","shortname":"","native_coin_id":"ethereum"},
                {"id":"tron","chain_identifier":null,"name":"TRON","shortname":"tron","native_coin_id":null}
            ]"#,
        )
        .unwrap();
        assert_eq!(platforms[0].chain_identifier, Some(1));
        assert!(platforms[0].shortname.is_none());
        assert!(platforms[1].chain_identifier.is_none());
        assert_eq!(platforms[1].shortname.as_deref(), Some("tron"));
        assert!(platforms[1].native_coin_id.is_none());
    }

    #[test]
    fn test_global_envelope() {
        let global: Data<Global> = serde_json::from_str(
            r#"{"data":{"active_cryptocurrencies":13690,"markets":1046,
                "total_market_cap":{"btc":39003738.0,"usd":null},
                "market_cap_percentage":{"btc":51.2},
                "total_volume":null,
                "market_cap_change_percentage_24h_usd":1.72,
                "updated_at":1711843200}}"#,
        )
        .unwrap();
        let global = global.data;
        assert_eq!(global.active_cryptocurrencies, Some(13690));
        assert_eq!(global.total_market_cap["usd"], 0.0);
        assert!(global.total_volume.is_empty());
        assert_eq!(global.market_cap_percentage["btc"], 51.2);
        assert!(global.upcoming_icos.is_none());
        assert_eq!(global.updated_at, Some(1_711_843_200));
    }

    #[test]
    fn test_ping_requires_message() {
        assert!(serde_json::from_str::<Ping>("{}").is_err());
    }
}
