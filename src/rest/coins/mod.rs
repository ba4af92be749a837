//! `/coins` endpoints: coin lists, market snapshots and per-coin data.

mod types;

pub use types::*;

use crate::error::CoinGeckoError;
use crate::rest::CoinGeckoRestClient;
use crate::rest::endpoints::coins;

impl CoinGeckoRestClient {
    /// Get every coin CoinGecko tracks, with id, symbol and name.
    ///
    /// With `include_platform` each entry also carries its contract address
    /// per asset platform.
    pub async fn coins_list(&self, include_platform: bool) -> Result<Vec<CoinListItem>, CoinGeckoError> {
        let params = CoinsListParams { include_platform };
        self.get_json(coins::LIST, &params).await
    }

    /// Get a market snapshot for a page of coins.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use coingecko_api_client::rest::CoinGeckoRestClient;
    /// use coingecko_api_client::rest::coins::CoinsMarketsRequest;
    /// use coingecko_api_client::types::{MarketOrder, PriceChangeWindow};
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = CoinGeckoRestClient::new();
    ///     let request = CoinsMarketsRequest::new("usd")
    ///         .order(MarketOrder::VolumeDesc)
    ///         .page(10, 1)
    ///         .price_change_percentage([PriceChangeWindow::Hour1]);
    ///
    ///     for coin in client.coins_markets(&request).await? {
    ///         println!("{}: {:?}", coin.name, coin.current_price);
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub async fn coins_markets(
        &self,
        request: &CoinsMarketsRequest,
    ) -> Result<Vec<CoinMarket>, CoinGeckoError> {
        let params = request.params()?;
        self.get_json(coins::MARKETS, &params).await
    }

    /// Get current data for a coin.
    ///
    /// The sections included in the response follow the request flags.
    pub async fn coin(&self, request: &CoinRequest) -> Result<CoinDetail, CoinGeckoError> {
        if request.id.is_empty() {
            return Err(CoinGeckoError::validation("id is required"));
        }
        self.get_json(&[coins::COINS, request.id.as_str()], request)
            .await
    }

    /// Get a page of exchange tickers for a coin.
    pub async fn coin_tickers(&self, request: &CoinTickersRequest) -> Result<CoinTickers, CoinGeckoError> {
        if request.id.is_empty() {
            return Err(CoinGeckoError::validation("id is required"));
        }
        self.get_json(&[coins::COINS, request.id.as_str(), coins::TICKERS], request)
            .await
    }

    /// Get a snapshot of a coin at a past date.
    pub async fn coin_history(&self, request: &CoinHistoryRequest) -> Result<CoinHistory, CoinGeckoError> {
        if request.id.is_empty() || request.date.is_empty() {
            return Err(CoinGeckoError::validation("id and date are required"));
        }
        self.get_json(&[coins::COINS, request.id.as_str(), coins::HISTORY], request)
            .await
    }

    /// Get price, market cap and volume history of a coin.
    ///
    /// CoinGecko picks the granularity from the day range.
    pub async fn coin_market_chart(
        &self,
        request: &MarketChartRequest,
    ) -> Result<MarketChart, CoinGeckoError> {
        if request.id.is_empty() || request.vs_currency.is_empty() || request.days.is_empty() {
            return Err(CoinGeckoError::validation(
                "id, vs_currency and days are required",
            ));
        }
        self.get_json(
            &[coins::COINS, request.id.as_str(), coins::MARKET_CHART],
            request,
        )
        .await
    }
}
