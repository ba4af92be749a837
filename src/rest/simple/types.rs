//! Types for the `/simple` endpoints.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Prices keyed by coin id, then by target currency.
///
/// A coin CoinGecko does not know maps to an empty inner map; a currency
/// without a price is absent from the inner map.
pub type SimplePrices = HashMap<String, HashMap<String, f64>>;

/// Raw `/simple/price` body, where individual prices may be `null`.
pub(crate) type RawSimplePrices = HashMap<String, HashMap<String, Option<f64>>>;

/// Drop `null` prices so that a missing price is always an absent key.
pub(crate) fn drop_null_prices(raw: RawSimplePrices) -> SimplePrices {
    raw.into_iter()
        .map(|(id, prices)| {
            let prices = prices
                .into_iter()
                .filter_map(|(currency, price)| price.map(|p| (currency, p)))
                .collect();
            (id, prices)
        })
        .collect()
}

/// Price of one coin in one currency.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SimpleSinglePrice {
    /// Coin id, lower-cased.
    pub id: String,
    /// Target currency, lower-cased.
    pub currency: String,
    /// Price of one unit of the coin in `currency`.
    pub market_price: f64,
}

/// Query parameters for `/simple/price`.
#[derive(Debug, Serialize)]
pub(crate) struct SimplePriceParams {
    pub ids: String,
    pub vs_currencies: String,
}
