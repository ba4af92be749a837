//! Trait definition for the CoinGecko REST API client.
//!
//! The `CoinGeckoClient` trait abstracts all REST API operations so that
//! code depending on market data can be tested against a mock, or wrapped in
//! a decorator (e.g. a caching layer).
//!
//! # Example
//!
//! ```rust,ignore
//! use coingecko_api_client::rest::{CoinGeckoClient, CoinGeckoRestClient};
//!
//! async fn btc_in_usd<C: CoinGeckoClient>(client: &C) -> Result<f64, coingecko_api_client::CoinGeckoError> {
//!     let price = client.simple_single_price("bitcoin", "usd").await?;
//!     Ok(price.market_price)
//! }
//! ```

use std::future::Future;

use crate::error::CoinGeckoError;
use crate::rest::coins::{
    CoinDetail, CoinHistory, CoinHistoryRequest, CoinListItem, CoinMarket, CoinRequest,
    CoinTickers, CoinTickersRequest, CoinsMarketsRequest, MarketChart, MarketChartRequest,
};
use crate::rest::general::{AssetPlatform, EventCountry, EventTypes, ExchangeRates, Global, Ping};
use crate::rest::simple::{SimplePrices, SimpleSinglePrice};

/// Trait defining all CoinGecko REST API operations.
///
/// All methods are async and return `Result<T, CoinGeckoError>`.
pub trait CoinGeckoClient: Send + Sync {
    /// Check API server status.
    fn ping(&self) -> impl Future<Output = Result<Ping, CoinGeckoError>> + Send;

    /// Get prices of coins in the given currencies.
    fn simple_price(
        &self,
        ids: &[&str],
        vs_currencies: &[&str],
    ) -> impl Future<Output = Result<SimplePrices, CoinGeckoError>> + Send;

    /// Get the price of one coin in one currency.
    fn simple_single_price(
        &self,
        id: &str,
        vs_currency: &str,
    ) -> impl Future<Output = Result<SimpleSinglePrice, CoinGeckoError>> + Send;

    /// Get the list of supported target currencies.
    fn supported_vs_currencies(
        &self,
    ) -> impl Future<Output = Result<Vec<String>, CoinGeckoError>> + Send;

    /// Get all supported coins.
    fn coins_list(
        &self,
        include_platform: bool,
    ) -> impl Future<Output = Result<Vec<CoinListItem>, CoinGeckoError>> + Send;

    /// Get market data for a page of coins.
    fn coins_markets(
        &self,
        request: &CoinsMarketsRequest,
    ) -> impl Future<Output = Result<Vec<CoinMarket>, CoinGeckoError>> + Send;

    /// Get current data for a coin.
    fn coin(
        &self,
        request: &CoinRequest,
    ) -> impl Future<Output = Result<CoinDetail, CoinGeckoError>> + Send;

    /// Get exchange tickers for a coin.
    fn coin_tickers(
        &self,
        request: &CoinTickersRequest,
    ) -> impl Future<Output = Result<CoinTickers, CoinGeckoError>> + Send;

    /// Get a historical snapshot of a coin at a date.
    fn coin_history(
        &self,
        request: &CoinHistoryRequest,
    ) -> impl Future<Output = Result<CoinHistory, CoinGeckoError>> + Send;

    /// Get price, market cap and volume history of a coin.
    fn coin_market_chart(
        &self,
        request: &MarketChartRequest,
    ) -> impl Future<Output = Result<MarketChart, CoinGeckoError>> + Send;

    /// Get event country codes.
    fn events_countries(
        &self,
    ) -> impl Future<Output = Result<Vec<EventCountry>, CoinGeckoError>> + Send;

    /// Get event types.
    fn events_types(&self) -> impl Future<Output = Result<EventTypes, CoinGeckoError>> + Send;

    /// Get BTC-to-currency exchange rates.
    fn exchange_rates(
        &self,
    ) -> impl Future<Output = Result<ExchangeRates, CoinGeckoError>> + Send;

    /// Get all asset platforms.
    fn asset_platforms(
        &self,
    ) -> impl Future<Output = Result<Vec<AssetPlatform>, CoinGeckoError>> + Send;

    /// Get global cryptocurrency market data.
    fn global(&self) -> impl Future<Output = Result<Global, CoinGeckoError>> + Send;
}
