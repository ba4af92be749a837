//! CoinGecko REST API client implementation.

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_tracing::TracingMiddleware;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio_util::sync::CancellationToken;
use url::Url;

use crate::auth::{API_KEY_HEADER, ApiKey};
use crate::error::{ApiError, CoinGeckoError};
use crate::rest::coins::{
    CoinDetail, CoinHistory, CoinHistoryRequest, CoinListItem, CoinMarket, CoinRequest,
    CoinTickers, CoinTickersRequest, CoinsMarketsRequest, MarketChart, MarketChartRequest,
};
use crate::rest::endpoints::{COINGECKO_BASE_URL, COINGECKO_PRO_URL};
use crate::rest::general::{AssetPlatform, EventCountry, EventTypes, ExchangeRates, Global, Ping};
use crate::rest::simple::{SimplePrices, SimpleSinglePrice};
use crate::rest::traits::CoinGeckoClient;

/// Query parameters for endpoints that take none.
pub(crate) const NO_PARAMS: &[(&str, &str)] = &[];

/// The CoinGecko REST API client.
///
/// The client is immutable once built and cheap to clone, so one instance
/// can be shared by any number of concurrent tasks.
///
/// # Example
///
/// ```rust,no_run
/// use coingecko_api_client::rest::CoinGeckoRestClient;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     // Public API
///     let client = CoinGeckoRestClient::new();
///
///     let ping = client.ping().await?;
///     println!("{}", ping.gecko_says);
///
///     Ok(())
/// }
/// ```
///
/// With an API key the client talks to the Pro host:
///
/// ```rust,no_run
/// use coingecko_api_client::rest::CoinGeckoRestClient;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = CoinGeckoRestClient::with_api_key("CG-xxxxxxxx");
///
///     let price = client.simple_single_price("bitcoin", "usd").await?;
///     println!("BTC: {} USD", price.market_price);
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct CoinGeckoRestClient {
    http_client: ClientWithMiddleware,
    base_url: String,
    api_key: Option<ApiKey>,
    cancellation: Option<CancellationToken>,
}

impl CoinGeckoRestClient {
    /// Create a client for the public API with default settings.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Create a client authenticated with an API key.
    ///
    /// A non-empty key selects the Pro host; an empty key behaves like
    /// [`CoinGeckoRestClient::new()`].
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self::builder().api_key(api_key).build()
    }

    /// Create a new client builder.
    pub fn builder() -> CoinGeckoRestClientBuilder {
        CoinGeckoRestClientBuilder::new()
    }

    /// The base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Whether requests carry the Pro API key header.
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Return a client whose requests abort once `token` is cancelled.
    ///
    /// The returned client shares the transport with `self`. Requests that
    /// are in flight when the token fires fail with
    /// [`CoinGeckoError::Cancelled`].
    pub fn with_cancellation(&self, token: CancellationToken) -> Self {
        Self {
            cancellation: Some(token),
            ..self.clone()
        }
    }

    /// Issue a GET request and return the raw body of a `200 OK` response.
    ///
    /// `path` is appended to the base URL segment by segment and `params` is
    /// encoded as the query string, in field order.
    pub async fn perform_get<Q>(&self, path: &[&str], params: &Q) -> Result<Vec<u8>, CoinGeckoError>
    where
        Q: Serialize + ?Sized,
    {
        let url = self.endpoint_url(path, params)?;

        match &self.cancellation {
            Some(token) => {
                tokio::select! {
                    biased;
                    _ = token.cancelled() => {
                        tracing::debug!(path = ?path, "request cancelled");
                        Err(CoinGeckoError::Cancelled)
                    }
                    result = self.execute(url) => result,
                }
            }
            None => self.execute(url).await,
        }
    }

    /// Make a GET request and decode the JSON body.
    pub(crate) async fn get_json<T, Q>(&self, path: &[&str], params: &Q) -> Result<T, CoinGeckoError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let body = self.perform_get(path, params).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Make a GET request without query parameters and decode the JSON body.
    pub(crate) async fn get_json_plain<T>(&self, path: &[&str]) -> Result<T, CoinGeckoError>
    where
        T: DeserializeOwned,
    {
        self.get_json(path, NO_PARAMS).await
    }

    fn endpoint_url<Q>(&self, path: &[&str], params: &Q) -> Result<Url, CoinGeckoError>
    where
        Q: Serialize + ?Sized,
    {
        let mut url = Url::parse(&self.base_url)?;
        url.path_segments_mut()
            .map_err(|_| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
            .pop_if_empty()
            .extend(path);

        let query = serde_urlencoded::to_string(params)?;
        if !query.is_empty() {
            url.set_query(Some(&query));
        }
        Ok(url)
    }

    async fn execute(&self, url: Url) -> Result<Vec<u8>, CoinGeckoError> {
        let mut request = self.http_client.get(url);
        if let Some(api_key) = &self.api_key {
            request = request.header(API_KEY_HEADER, api_key.expose_secret());
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        if status != StatusCode::OK {
            tracing::debug!(status = status.as_u16(), "CoinGecko returned an error status");
            return Err(CoinGeckoError::Api(ApiError::from_response(
                status.as_u16(),
                &body,
            )));
        }

        Ok(body.to_vec())
    }
}

impl Default for CoinGeckoRestClient {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for CoinGeckoRestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CoinGeckoRestClient")
            .field("base_url", &self.base_url)
            .field("has_api_key", &self.api_key.is_some())
            .field("cancellable", &self.cancellation.is_some())
            .finish()
    }
}

/// Builder for [`CoinGeckoRestClient`].
pub struct CoinGeckoRestClientBuilder {
    base_url: Option<String>,
    api_key: Option<ApiKey>,
    http_client: Option<reqwest::Client>,
    middleware_client: Option<ClientWithMiddleware>,
    user_agent: Option<String>,
    timeout: Option<Duration>,
}

impl CoinGeckoRestClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            base_url: None,
            api_key: None,
            http_client: None,
            middleware_client: None,
            user_agent: None,
            timeout: None,
        }
    }

    /// Set the base URL (useful for testing with a mock server).
    ///
    /// Without an explicit base URL the builder picks the Pro host when an
    /// API key is set and the public host otherwise.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the Pro API key. An empty key clears it.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = ApiKey::new(api_key);
        self
    }

    /// Use the API key from `COINGECKO_API_KEY`, if it is set.
    pub fn api_key_from_env(mut self) -> Self {
        self.api_key = ApiKey::from_env();
        self
    }

    /// Use a caller-supplied `reqwest` client as the transport.
    ///
    /// The client is still wrapped in tracing middleware. `user_agent` and
    /// `timeout` are not applied to it.
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Use a fully configured middleware client as the transport.
    ///
    /// This is where retry or caching middleware belongs. Takes precedence
    /// over [`http_client`](Self::http_client).
    pub fn middleware_client(mut self, client: ClientWithMiddleware) -> Self {
        self.middleware_client = Some(client);
        self
    }

    /// Set a custom user agent.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Bound every request by a timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the client.
    pub fn build(self) -> CoinGeckoRestClient {
        let base_url = self.base_url.unwrap_or_else(|| {
            if self.api_key.is_some() {
                COINGECKO_PRO_URL.to_string()
            } else {
                COINGECKO_BASE_URL.to_string()
            }
        });

        let http_client = match self.middleware_client {
            Some(client) => client,
            None => {
                let reqwest_client = match self.http_client {
                    Some(client) => client,
                    None => default_reqwest_client(self.user_agent, self.timeout),
                };
                ClientBuilder::new(reqwest_client)
                    .with(TracingMiddleware::default())
                    .build()
            }
        };

        CoinGeckoRestClient {
            http_client,
            base_url,
            api_key: self.api_key,
            cancellation: None,
        }
    }
}

impl Default for CoinGeckoRestClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn default_reqwest_client(user_agent: Option<String>, timeout: Option<Duration>) -> reqwest::Client {
    let mut headers = HeaderMap::new();
    let user_agent =
        user_agent.unwrap_or_else(|| format!("coingecko-api-client/{}", env!("CARGO_PKG_VERSION")));
    let header_value = HeaderValue::from_str(&user_agent)
        .unwrap_or_else(|_| HeaderValue::from_static("coingecko-api-client"));
    headers.insert(USER_AGENT, header_value);

    let mut builder = reqwest::Client::builder().default_headers(headers);
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    builder.build().unwrap_or_else(|_| reqwest::Client::new())
}

// CoinGeckoClient trait implementation.

impl CoinGeckoClient for CoinGeckoRestClient {
    async fn ping(&self) -> Result<Ping, CoinGeckoError> {
        CoinGeckoRestClient::ping(self).await
    }

    async fn simple_price(
        &self,
        ids: &[&str],
        vs_currencies: &[&str],
    ) -> Result<SimplePrices, CoinGeckoError> {
        CoinGeckoRestClient::simple_price(self, ids, vs_currencies).await
    }

    async fn simple_single_price(
        &self,
        id: &str,
        vs_currency: &str,
    ) -> Result<SimpleSinglePrice, CoinGeckoError> {
        CoinGeckoRestClient::simple_single_price(self, id, vs_currency).await
    }

    async fn supported_vs_currencies(&self) -> Result<Vec<String>, CoinGeckoError> {
        CoinGeckoRestClient::supported_vs_currencies(self).await
    }

    async fn coins_list(&self, include_platform: bool) -> Result<Vec<CoinListItem>, CoinGeckoError> {
        CoinGeckoRestClient::coins_list(self, include_platform).await
    }

    async fn coins_markets(
        &self,
        request: &CoinsMarketsRequest,
    ) -> Result<Vec<CoinMarket>, CoinGeckoError> {
        CoinGeckoRestClient::coins_markets(self, request).await
    }

    async fn coin(&self, request: &CoinRequest) -> Result<CoinDetail, CoinGeckoError> {
        CoinGeckoRestClient::coin(self, request).await
    }

    async fn coin_tickers(&self, request: &CoinTickersRequest) -> Result<CoinTickers, CoinGeckoError> {
        CoinGeckoRestClient::coin_tickers(self, request).await
    }

    async fn coin_history(&self, request: &CoinHistoryRequest) -> Result<CoinHistory, CoinGeckoError> {
        CoinGeckoRestClient::coin_history(self, request).await
    }

    async fn coin_market_chart(
        &self,
        request: &MarketChartRequest,
    ) -> Result<MarketChart, CoinGeckoError> {
        CoinGeckoRestClient::coin_market_chart(self, request).await
    }

    async fn events_countries(&self) -> Result<Vec<EventCountry>, CoinGeckoError> {
        CoinGeckoRestClient::events_countries(self).await
    }

    async fn events_types(&self) -> Result<EventTypes, CoinGeckoError> {
        CoinGeckoRestClient::events_types(self).await
    }

    async fn exchange_rates(&self) -> Result<ExchangeRates, CoinGeckoError> {
        CoinGeckoRestClient::exchange_rates(self).await
    }

    async fn asset_platforms(&self) -> Result<Vec<AssetPlatform>, CoinGeckoError> {
        CoinGeckoRestClient::asset_platforms(self).await
    }

    async fn global(&self) -> Result<Global, CoinGeckoError> {
        CoinGeckoRestClient::global(self).await
    }
}
