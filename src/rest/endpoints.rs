//! CoinGecko REST API endpoint constants.
//!
//! Paths are expressed as segments appended to the base URL, so coin ids
//! are percent-encoded as single path segments.

/// Base URL for the public CoinGecko API.
pub const COINGECKO_BASE_URL: &str = "https://api.coingecko.com/api/v3";

/// Base URL for the key-authenticated CoinGecko Pro API.
pub const COINGECKO_PRO_URL: &str = "https://pro-api.coingecko.com/api/v3";

/// Check API server status.
pub const PING: &[&str] = &["ping"];

/// `/simple` endpoints.
pub mod simple {
    /// Prices for one or more coins in one or more currencies.
    pub const PRICE: &[&str] = &["simple", "price"];
    /// List of supported target currencies.
    pub const SUPPORTED_VS_CURRENCIES: &[&str] = &["simple", "supported_vs_currencies"];
}

/// `/coins` endpoints.
pub mod coins {
    /// Root segment; a coin id follows it for per-coin endpoints.
    pub const COINS: &str = "coins";
    /// All supported coins with id, name and symbol.
    pub const LIST: &[&str] = &["coins", "list"];
    /// Market snapshot for a page of coins.
    pub const MARKETS: &[&str] = &["coins", "markets"];
    /// Suffix for exchange tickers of a coin.
    pub const TICKERS: &str = "tickers";
    /// Suffix for a historical snapshot of a coin.
    pub const HISTORY: &str = "history";
    /// Suffix for the price/market cap/volume chart of a coin.
    pub const MARKET_CHART: &str = "market_chart";
}

/// Event country codes.
pub const EVENTS_COUNTRIES: &[&str] = &["events", "countries"];
/// Event types.
pub const EVENTS_TYPES: &[&str] = &["events", "types"];
/// BTC-to-currency exchange rates.
pub const EXCHANGE_RATES: &[&str] = &["exchange_rates"];
/// Blockchain networks supported by CoinGecko.
pub const ASSET_PLATFORMS: &[&str] = &["asset_platforms"];
/// Global cryptocurrency market data.
pub const GLOBAL: &[&str] = &["global"];
