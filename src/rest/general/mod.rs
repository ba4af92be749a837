//! Service status, events, exchange rates, asset platforms and global
//! market data.

mod types;

pub use types::*;

use crate::error::CoinGeckoError;
use crate::rest::CoinGeckoRestClient;
use crate::rest::endpoints;

impl CoinGeckoRestClient {
    /// Check API server status.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use coingecko_api_client::rest::CoinGeckoRestClient;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = CoinGeckoRestClient::new();
    ///     println!("{}", client.ping().await?.gecko_says);
    ///     Ok(())
    /// }
    /// ```
    pub async fn ping(&self) -> Result<Ping, CoinGeckoError> {
        self.get_json_plain(endpoints::PING).await
    }

    /// Get the country codes events can be filtered by.
    pub async fn events_countries(&self) -> Result<Vec<EventCountry>, CoinGeckoError> {
        let response: Data<Vec<EventCountry>> =
            self.get_json_plain(endpoints::EVENTS_COUNTRIES).await?;
        Ok(response.data)
    }

    /// Get the event types.
    pub async fn events_types(&self) -> Result<EventTypes, CoinGeckoError> {
        self.get_json_plain(endpoints::EVENTS_TYPES).await
    }

    /// Get the value of one BTC in every supported unit.
    pub async fn exchange_rates(&self) -> Result<ExchangeRates, CoinGeckoError> {
        let response: Rates = self.get_json_plain(endpoints::EXCHANGE_RATES).await?;
        Ok(response.rates)
    }

    /// Get every blockchain network CoinGecko tracks tokens on.
    pub async fn asset_platforms(&self) -> Result<Vec<AssetPlatform>, CoinGeckoError> {
        self.get_json_plain(endpoints::ASSET_PLATFORMS).await
    }

    /// Get global cryptocurrency market statistics.
    pub async fn global(&self) -> Result<Global, CoinGeckoError> {
        let response: Data<Global> = self.get_json_plain(endpoints::GLOBAL).await?;
        Ok(response.data)
    }
}
