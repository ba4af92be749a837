//! `/simple` endpoints: lightweight price lookups.

mod types;

pub use types::*;

use crate::error::CoinGeckoError;
use crate::rest::CoinGeckoRestClient;
use crate::rest::endpoints::simple;
use crate::types::common::{comma_list, has_blank};

impl CoinGeckoRestClient {
    /// Get the prices of one or more coins in one or more currencies.
    ///
    /// Both lists are required, must not contain blank entries, and are sent
    /// as comma-separated values.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use coingecko_api_client::rest::CoinGeckoRestClient;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = CoinGeckoRestClient::new();
    ///     let prices = client.simple_price(&["bitcoin", "ethereum"], &["usd", "eur"]).await?;
    ///     println!("BTC/EUR: {}", prices["bitcoin"]["eur"]);
    ///     Ok(())
    /// }
    /// ```
    pub async fn simple_price(
        &self,
        ids: &[&str],
        vs_currencies: &[&str],
    ) -> Result<SimplePrices, CoinGeckoError> {
        if has_blank(ids) || has_blank(vs_currencies) {
            return Err(CoinGeckoError::validation(
                "ids and vs_currencies must not contain blank entries",
            ));
        }
        let (Some(ids), Some(vs_currencies)) = (comma_list(ids), comma_list(vs_currencies)) else {
            return Err(CoinGeckoError::validation("ids and vs_currencies are required"));
        };

        let params = SimplePriceParams { ids, vs_currencies };
        let raw: RawSimplePrices = self.get_json(simple::PRICE, &params).await?;
        Ok(drop_null_prices(raw))
    }

    /// Get the price of a single coin in a single currency.
    ///
    /// The id and currency are lower-cased before the request. Fails with
    /// [`CoinGeckoError::NotFound`] when CoinGecko returns no price for the
    /// pair.
    pub async fn simple_single_price(
        &self,
        id: &str,
        vs_currency: &str,
    ) -> Result<SimpleSinglePrice, CoinGeckoError> {
        if id.is_empty() || vs_currency.is_empty() {
            return Err(CoinGeckoError::validation("id and vs_currency are required"));
        }
        let id = id.to_lowercase();
        let vs_currency = vs_currency.to_lowercase();

        let prices = self.simple_price(&[id.as_str()], &[vs_currency.as_str()]).await?;
        let market_price = prices
            .get(&id)
            .and_then(|by_currency| by_currency.get(&vs_currency))
            .copied();

        match market_price {
            Some(market_price) => Ok(SimpleSinglePrice {
                id,
                currency: vs_currency,
                market_price,
            }),
            None => Err(CoinGeckoError::NotFound { id, vs_currency }),
        }
    }

    /// Get the list of currencies prices can be quoted in.
    pub async fn supported_vs_currencies(&self) -> Result<Vec<String>, CoinGeckoError> {
        self.get_json_plain(simple::SUPPORTED_VS_CURRENCIES).await
    }
}
