//! Types for the `/coins` endpoints.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use time::Date;

use crate::error::CoinGeckoError;
use crate::types::serde_helpers::{LenientMap, LenientVec, empty_string_as_none};
use crate::types::common::has_blank;
use crate::types::{MarketOrder, PriceChangeWindow, comma_list, history_date};

/// Largest page size `/coins/markets` accepts.
pub const MAX_PER_PAGE: u32 = 250;

// ========== Requests ==========

/// Query string for `/coins/list`.
#[derive(Debug, Serialize)]
pub(crate) struct CoinsListParams {
    pub(crate) include_platform: bool,
}

/// Request parameters for `/coins/markets`.
#[derive(Debug, Clone, Default)]
pub struct CoinsMarketsRequest {
    /// Target currency of the market data (required).
    pub vs_currency: String,
    /// Restrict the snapshot to these coin ids.
    pub ids: Vec<String>,
    /// Sort order (default: market cap descending).
    pub order: Option<MarketOrder>,
    /// Results per page. Only sent, together with `page`, when in `1..=250`.
    pub per_page: u32,
    /// Page number.
    pub page: u32,
    /// Include 7-day sparkline data.
    pub sparkline: bool,
    /// Extra price change windows to include.
    pub price_change_percentage: Vec<PriceChangeWindow>,
}

impl CoinsMarketsRequest {
    /// Create a request for market data in the given currency.
    pub fn new(vs_currency: impl Into<String>) -> Self {
        Self {
            vs_currency: vs_currency.into(),
            ..Default::default()
        }
    }

    /// Restrict the snapshot to these coin ids.
    pub fn ids<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ids = ids.into_iter().map(Into::into).collect();
        self
    }

    /// Set the sort order.
    pub fn order(mut self, order: MarketOrder) -> Self {
        self.order = Some(order);
        self
    }

    /// Set the page size and page number.
    pub fn page(mut self, per_page: u32, page: u32) -> Self {
        self.per_page = per_page;
        self.page = page;
        self
    }

    /// Include 7-day sparkline data.
    pub fn sparkline(mut self, sparkline: bool) -> Self {
        self.sparkline = sparkline;
        self
    }

    /// Include price change percentages for these windows.
    pub fn price_change_percentage(mut self, windows: impl IntoIterator<Item = PriceChangeWindow>) -> Self {
        self.price_change_percentage = windows.into_iter().collect();
        self
    }

    pub(crate) fn params(&self) -> Result<CoinsMarketsParams<'_>, CoinGeckoError> {
        if self.vs_currency.is_empty() {
            return Err(CoinGeckoError::validation("vs_currency is required"));
        }
        if has_blank(&self.ids) {
            return Err(CoinGeckoError::validation("ids must not contain blank entries"));
        }
        let paged = self.per_page > 0 && self.per_page <= MAX_PER_PAGE;

        Ok(CoinsMarketsParams {
            vs_currency: &self.vs_currency,
            order: self.order.unwrap_or_default(),
            ids: comma_list(&self.ids),
            per_page: paged.then_some(self.per_page),
            page: paged.then_some(self.page),
            sparkline: self.sparkline,
            price_change_percentage: comma_list(&self.price_change_percentage),
        })
    }
}

/// Query string for `/coins/markets`.
#[derive(Debug, Serialize)]
pub(crate) struct CoinsMarketsParams<'a> {
    vs_currency: &'a str,
    order: MarketOrder,
    #[serde(skip_serializing_if = "Option::is_none")]
    ids: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    per_page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    page: Option<u32>,
    sparkline: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    price_change_percentage: Option<String>,
}

/// Request parameters for `/coins/{id}`.
///
/// Every section flag is always sent. Defaults match CoinGecko's: all
/// sections on, sparkline off.
#[derive(Debug, Clone, Serialize)]
pub struct CoinRequest {
    /// Coin id (required).
    #[serde(skip)]
    pub id: String,
    /// Include localized names and descriptions.
    pub localization: bool,
    /// Include exchange tickers.
    pub tickers: bool,
    /// Include market data.
    pub market_data: bool,
    /// Include community statistics.
    pub community_data: bool,
    /// Include developer statistics.
    pub developer_data: bool,
    /// Include 7-day sparkline data.
    pub sparkline: bool,
}

impl CoinRequest {
    /// Create a request for a coin with the default sections.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            localization: true,
            tickers: true,
            market_data: true,
            community_data: true,
            developer_data: true,
            sparkline: false,
        }
    }

    /// Include localized names and descriptions.
    pub fn localization(mut self, localization: bool) -> Self {
        self.localization = localization;
        self
    }

    /// Include exchange tickers.
    pub fn tickers(mut self, tickers: bool) -> Self {
        self.tickers = tickers;
        self
    }

    /// Include market data.
    pub fn market_data(mut self, market_data: bool) -> Self {
        self.market_data = market_data;
        self
    }

    /// Include community statistics.
    pub fn community_data(mut self, community_data: bool) -> Self {
        self.community_data = community_data;
        self
    }

    /// Include developer statistics.
    pub fn developer_data(mut self, developer_data: bool) -> Self {
        self.developer_data = developer_data;
        self
    }

    /// Include 7-day sparkline data.
    pub fn sparkline(mut self, sparkline: bool) -> Self {
        self.sparkline = sparkline;
        self
    }
}

/// Request parameters for `/coins/{id}/tickers`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CoinTickersRequest {
    /// Coin id (required).
    #[serde(skip)]
    pub id: String,
    /// Page number. Only sent when positive.
    #[serde(skip_serializing_if = "is_zero")]
    pub page: u32,
}

fn is_zero(page: &u32) -> bool {
    *page == 0
}

impl CoinTickersRequest {
    /// Create a request for the first page of a coin's tickers.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            page: 0,
        }
    }

    /// Request a specific page.
    pub fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }
}

/// Request parameters for `/coins/{id}/history`.
#[derive(Debug, Clone, Serialize)]
pub struct CoinHistoryRequest {
    /// Coin id (required).
    #[serde(skip)]
    pub id: String,
    /// Snapshot date as `dd-mm-yyyy` (required).
    pub date: String,
    /// Include localized names.
    pub localization: bool,
}

impl CoinHistoryRequest {
    /// Create a request with a date already formatted as `dd-mm-yyyy`.
    pub fn new(id: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            date: date.into(),
            localization: false,
        }
    }

    /// Create a request for a calendar date.
    pub fn on(id: impl Into<String>, date: Date) -> Self {
        Self::new(id, history_date(date))
    }

    /// Include localized names.
    pub fn localization(mut self, localization: bool) -> Self {
        self.localization = localization;
        self
    }
}

/// Request parameters for `/coins/{id}/market_chart`.
#[derive(Debug, Clone, Serialize)]
pub struct MarketChartRequest {
    /// Coin id (required).
    #[serde(skip)]
    pub id: String,
    /// Target currency (required).
    pub vs_currency: String,
    /// Day-range token: a number of days or `max` (required).
    pub days: String,
}

impl MarketChartRequest {
    /// Create a chart request.
    ///
    /// `days` accepts anything displayable: `30`, `"max"` or a
    /// [`ChartDays`](crate::types::ChartDays).
    pub fn new(id: impl Into<String>, vs_currency: impl Into<String>, days: impl ToString) -> Self {
        Self {
            id: id.into(),
            vs_currency: vs_currency.into(),
            days: days.to_string(),
        }
    }
}

// ========== Responses ==========

/// Entry of `/coins/list`.
#[serde_as]
#[derive(Debug, Clone, Deserialize)]
pub struct CoinListItem {
    /// Coin id.
    pub id: String,
    /// Ticker symbol.
    pub symbol: String,
    /// Display name.
    pub name: String,
    /// Contract address per platform (only with `include_platform`).
    #[serde_as(deserialize_as = "LenientMap")]
    #[serde(default)]
    pub platforms: HashMap<String, String>,
}

/// Return on investment since the ICO.
#[derive(Debug, Clone, Deserialize)]
pub struct Roi {
    /// Multiple of the ICO price.
    pub times: f64,
    /// Currency of the ICO price.
    pub currency: String,
    /// Percentage gain.
    pub percentage: f64,
}

/// 7-day price sparkline.
#[serde_as]
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Sparkline {
    /// Price samples, oldest first.
    #[serde_as(deserialize_as = "LenientVec")]
    #[serde(default)]
    pub price: Vec<f64>,
}

/// Entry of `/coins/markets`.
#[derive(Debug, Clone, Deserialize)]
pub struct CoinMarket {
    /// Coin id.
    pub id: String,
    /// Ticker symbol.
    pub symbol: String,
    /// Display name.
    pub name: String,
    /// Logo URL.
    pub image: Option<String>,
    /// Current price.
    pub current_price: Option<f64>,
    /// Market capitalisation.
    pub market_cap: Option<f64>,
    /// Rank by market capitalisation.
    pub market_cap_rank: Option<u32>,
    /// Fully diluted valuation.
    pub fully_diluted_valuation: Option<f64>,
    /// 24-hour trading volume.
    pub total_volume: Option<f64>,
    /// 24-hour high.
    pub high_24h: Option<f64>,
    /// 24-hour low.
    pub low_24h: Option<f64>,
    /// Absolute 24-hour price change.
    pub price_change_24h: Option<f64>,
    /// 24-hour price change in percent.
    pub price_change_percentage_24h: Option<f64>,
    /// Absolute 24-hour market cap change.
    pub market_cap_change_24h: Option<f64>,
    /// 24-hour market cap change in percent.
    pub market_cap_change_percentage_24h: Option<f64>,
    /// Circulating supply.
    pub circulating_supply: Option<f64>,
    /// Total supply.
    pub total_supply: Option<f64>,
    /// Maximum supply.
    pub max_supply: Option<f64>,
    /// All-time high.
    pub ath: Option<f64>,
    /// Distance from the all-time high in percent.
    pub ath_change_percentage: Option<f64>,
    /// Date of the all-time high.
    pub ath_date: Option<String>,
    /// All-time low.
    pub atl: Option<f64>,
    /// Distance from the all-time low in percent.
    pub atl_change_percentage: Option<f64>,
    /// Date of the all-time low.
    pub atl_date: Option<String>,
    /// Return on investment, for coins that had an ICO.
    pub roi: Option<Roi>,
    /// Last update time.
    pub last_updated: Option<String>,
    /// 7-day sparkline (only with `sparkline=true`).
    pub sparkline_in_7d: Option<Sparkline>,
    /// 1-hour price change in percent (on request).
    pub price_change_percentage_1h_in_currency: Option<f64>,
    /// 24-hour price change in percent (on request).
    pub price_change_percentage_24h_in_currency: Option<f64>,
    /// 7-day price change in percent (on request).
    pub price_change_percentage_7d_in_currency: Option<f64>,
    /// 14-day price change in percent (on request).
    pub price_change_percentage_14d_in_currency: Option<f64>,
    /// 30-day price change in percent (on request).
    pub price_change_percentage_30d_in_currency: Option<f64>,
    /// 200-day price change in percent (on request).
    pub price_change_percentage_200d_in_currency: Option<f64>,
    /// 1-year price change in percent (on request).
    pub price_change_percentage_1y_in_currency: Option<f64>,
}

impl CoinMarket {
    /// Price change in percent over `window`, if it was requested.
    pub fn price_change_percentage(&self, window: PriceChangeWindow) -> Option<f64> {
        match window {
            PriceChangeWindow::Hour1 => self.price_change_percentage_1h_in_currency,
            PriceChangeWindow::Hour24 => self.price_change_percentage_24h_in_currency,
            PriceChangeWindow::Day7 => self.price_change_percentage_7d_in_currency,
            PriceChangeWindow::Day14 => self.price_change_percentage_14d_in_currency,
            PriceChangeWindow::Day30 => self.price_change_percentage_30d_in_currency,
            PriceChangeWindow::Day200 => self.price_change_percentage_200d_in_currency,
            PriceChangeWindow::Year1 => self.price_change_percentage_1y_in_currency,
        }
    }
}

/// Logo URLs in three sizes.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Image {
    /// Thumbnail.
    pub thumb: Option<String>,
    /// Small.
    pub small: Option<String>,
    /// Large.
    pub large: Option<String>,
}

/// Project links.
#[serde_as]
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Links {
    #[serde_as(deserialize_as = "LenientVec")]
    #[serde(default)]
    pub homepage: Vec<String>,
    #[serde_as(deserialize_as = "LenientVec")]
    #[serde(default)]
    pub blockchain_site: Vec<String>,
    #[serde_as(deserialize_as = "LenientVec")]
    #[serde(default)]
    pub official_forum_url: Vec<String>,
    #[serde_as(deserialize_as = "LenientVec")]
    #[serde(default)]
    pub chat_url: Vec<String>,
    #[serde_as(deserialize_as = "LenientVec")]
    #[serde(default)]
    pub announcement_url: Vec<String>,
    #[serde(deserialize_with = "empty_string_as_none::deserialize", default)]
    pub twitter_screen_name: Option<String>,
    #[serde(deserialize_with = "empty_string_as_none::deserialize", default)]
    pub facebook_username: Option<String>,
    #[serde(deserialize_with = "empty_string_as_none::deserialize", default)]
    pub telegram_channel_identifier: Option<String>,
    #[serde(deserialize_with = "empty_string_as_none::deserialize", default)]
    pub subreddit_url: Option<String>,
    /// Source repositories keyed by host (`github`, `bitbucket`).
    #[serde_as(deserialize_as = "ReposMap")]
    #[serde(default)]
    pub repos_url: HashMap<String, Vec<String>>,
}

type ReposMap = serde_with::DefaultOnNull<HashMap<serde_with::Same, LenientVec>>;

/// Market data of a coin, with per-currency values keyed by currency code.
#[serde_as]
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MarketData {
    #[serde_as(deserialize_as = "LenientMap")]
    #[serde(default)]
    pub current_price: HashMap<String, f64>,
    #[serde_as(deserialize_as = "LenientMap")]
    #[serde(default)]
    pub market_cap: HashMap<String, f64>,
    pub market_cap_rank: Option<u32>,
    #[serde_as(deserialize_as = "LenientMap")]
    #[serde(default)]
    pub fully_diluted_valuation: HashMap<String, f64>,
    #[serde_as(deserialize_as = "LenientMap")]
    #[serde(default)]
    pub total_volume: HashMap<String, f64>,
    #[serde_as(deserialize_as = "LenientMap")]
    #[serde(default)]
    pub high_24h: HashMap<String, f64>,
    #[serde_as(deserialize_as = "LenientMap")]
    #[serde(default)]
    pub low_24h: HashMap<String, f64>,
    #[serde_as(deserialize_as = "LenientMap")]
    #[serde(default)]
    pub ath: HashMap<String, f64>,
    #[serde_as(deserialize_as = "LenientMap")]
    #[serde(default)]
    pub ath_change_percentage: HashMap<String, f64>,
    #[serde_as(deserialize_as = "LenientMap")]
    #[serde(default)]
    pub ath_date: HashMap<String, String>,
    #[serde_as(deserialize_as = "LenientMap")]
    #[serde(default)]
    pub atl: HashMap<String, f64>,
    #[serde_as(deserialize_as = "LenientMap")]
    #[serde(default)]
    pub atl_change_percentage: HashMap<String, f64>,
    #[serde_as(deserialize_as = "LenientMap")]
    #[serde(default)]
    pub atl_date: HashMap<String, String>,
    pub price_change_24h: Option<f64>,
    pub price_change_percentage_24h: Option<f64>,
    pub price_change_percentage_7d: Option<f64>,
    pub price_change_percentage_14d: Option<f64>,
    pub price_change_percentage_30d: Option<f64>,
    pub price_change_percentage_60d: Option<f64>,
    pub price_change_percentage_200d: Option<f64>,
    pub price_change_percentage_1y: Option<f64>,
    pub market_cap_change_24h: Option<f64>,
    pub market_cap_change_percentage_24h: Option<f64>,
    #[serde_as(deserialize_as = "LenientMap")]
    #[serde(default)]
    pub price_change_24h_in_currency: HashMap<String, f64>,
    #[serde_as(deserialize_as = "LenientMap")]
    #[serde(default)]
    pub price_change_percentage_1h_in_currency: HashMap<String, f64>,
    #[serde_as(deserialize_as = "LenientMap")]
    #[serde(default)]
    pub price_change_percentage_24h_in_currency: HashMap<String, f64>,
    #[serde_as(deserialize_as = "LenientMap")]
    #[serde(default)]
    pub price_change_percentage_7d_in_currency: HashMap<String, f64>,
    #[serde_as(deserialize_as = "LenientMap")]
    #[serde(default)]
    pub price_change_percentage_14d_in_currency: HashMap<String, f64>,
    #[serde_as(deserialize_as = "LenientMap")]
    #[serde(default)]
    pub price_change_percentage_30d_in_currency: HashMap<String, f64>,
    #[serde_as(deserialize_as = "LenientMap")]
    #[serde(default)]
    pub price_change_percentage_60d_in_currency: HashMap<String, f64>,
    #[serde_as(deserialize_as = "LenientMap")]
    #[serde(default)]
    pub price_change_percentage_200d_in_currency: HashMap<String, f64>,
    #[serde_as(deserialize_as = "LenientMap")]
    #[serde(default)]
    pub price_change_percentage_1y_in_currency: HashMap<String, f64>,
    #[serde_as(deserialize_as = "LenientMap")]
    #[serde(default)]
    pub market_cap_change_24h_in_currency: HashMap<String, f64>,
    #[serde_as(deserialize_as = "LenientMap")]
    #[serde(default)]
    pub market_cap_change_percentage_24h_in_currency: HashMap<String, f64>,
    pub total_supply: Option<f64>,
    pub max_supply: Option<f64>,
    pub circulating_supply: Option<f64>,
    /// 7-day sparkline (only with `sparkline=true`).
    pub sparkline_7d: Option<Sparkline>,
    pub last_updated: Option<String>,
}

/// Community statistics of a coin.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CommunityData {
    pub facebook_likes: Option<u64>,
    pub twitter_followers: Option<u64>,
    pub reddit_average_posts_48h: Option<f64>,
    pub reddit_average_comments_48h: Option<f64>,
    pub reddit_subscribers: Option<u64>,
    pub reddit_accounts_active_48h: Option<f64>,
    pub telegram_channel_user_count: Option<u64>,
}

/// Lines added and removed over the last four weeks.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CodeChanges {
    pub additions: Option<i64>,
    pub deletions: Option<i64>,
}

/// Developer statistics of a coin's main repository.
#[serde_as]
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeveloperData {
    pub forks: Option<u64>,
    pub stars: Option<u64>,
    pub subscribers: Option<u64>,
    pub total_issues: Option<u64>,
    pub closed_issues: Option<u64>,
    pub pull_requests_merged: Option<u64>,
    pub pull_request_contributors: Option<u64>,
    pub code_additions_deletions_4_weeks: Option<CodeChanges>,
    pub commit_count_4_weeks: Option<u64>,
    #[serde_as(deserialize_as = "LenientVec")]
    #[serde(default)]
    pub last_4_weeks_commit_activity_series: Vec<u64>,
}

/// Search and web ranking statistics of a coin.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PublicInterestStats {
    pub alexa_rank: Option<u64>,
    pub bing_matches: Option<u64>,
}

/// Exchange a ticker is listed on.
#[derive(Debug, Clone, Deserialize)]
pub struct TickerMarket {
    /// Exchange name.
    pub name: String,
    /// Exchange id.
    pub identifier: String,
    /// Whether the exchange pays trading incentives.
    #[serde(default)]
    pub has_trading_incentive: bool,
}

/// One trading pair of a coin on an exchange.
#[serde_as]
#[derive(Debug, Clone, Deserialize)]
pub struct Ticker {
    /// Base symbol.
    pub base: String,
    /// Quote symbol.
    pub target: String,
    /// Exchange.
    pub market: TickerMarket,
    /// Last price in `target`.
    pub last: Option<f64>,
    /// 24-hour volume in `base`.
    pub volume: Option<f64>,
    /// Last price converted to `btc`, `eth` and `usd`.
    #[serde_as(deserialize_as = "LenientMap")]
    #[serde(default)]
    pub converted_last: HashMap<String, f64>,
    /// Volume converted to `btc`, `eth` and `usd`.
    #[serde_as(deserialize_as = "LenientMap")]
    #[serde(default)]
    pub converted_volume: HashMap<String, f64>,
    /// Trust score colour (`green`, `yellow`, `red`).
    pub trust_score: Option<String>,
    /// Bid/ask spread in percent.
    pub bid_ask_spread_percentage: Option<f64>,
    pub timestamp: Option<String>,
    pub last_traded_at: Option<String>,
    pub last_fetch_at: Option<String>,
    #[serde(default)]
    pub is_anomaly: bool,
    #[serde(default)]
    pub is_stale: bool,
    pub trade_url: Option<String>,
    /// CoinGecko id of the base coin.
    pub coin_id: Option<String>,
    /// CoinGecko id of the quote coin, if it is a coin.
    pub target_coin_id: Option<String>,
}

/// Current data of a coin from `/coins/{id}`.
#[serde_as]
#[derive(Debug, Clone, Deserialize)]
pub struct CoinDetail {
    /// Coin id.
    pub id: String,
    /// Ticker symbol.
    pub symbol: String,
    /// Display name.
    pub name: String,
    /// Platform the coin is a token on, if any.
    pub asset_platform_id: Option<String>,
    pub block_time_in_minutes: Option<u32>,
    pub hashing_algorithm: Option<String>,
    #[serde_as(deserialize_as = "LenientVec")]
    #[serde(default)]
    pub categories: Vec<String>,
    /// Localized names keyed by language code (only with `localization=true`).
    #[serde_as(deserialize_as = "LenientMap")]
    #[serde(default)]
    pub localization: HashMap<String, String>,
    /// Descriptions keyed by language code.
    #[serde_as(deserialize_as = "LenientMap")]
    #[serde(default)]
    pub description: HashMap<String, String>,
    pub links: Option<Links>,
    pub image: Option<Image>,
    #[serde(deserialize_with = "empty_string_as_none::deserialize", default)]
    pub country_origin: Option<String>,
    pub genesis_date: Option<String>,
    pub sentiment_votes_up_percentage: Option<f64>,
    pub sentiment_votes_down_percentage: Option<f64>,
    pub market_cap_rank: Option<u32>,
    pub coingecko_rank: Option<u32>,
    pub coingecko_score: Option<f64>,
    pub developer_score: Option<f64>,
    pub community_score: Option<f64>,
    pub liquidity_score: Option<f64>,
    pub public_interest_score: Option<f64>,
    /// Only with `market_data=true`.
    pub market_data: Option<MarketData>,
    /// Only with `community_data=true`.
    pub community_data: Option<CommunityData>,
    /// Only with `developer_data=true`.
    pub developer_data: Option<DeveloperData>,
    pub public_interest_stats: Option<PublicInterestStats>,
    pub last_updated: Option<String>,
    /// Only with `tickers=true`.
    #[serde_as(deserialize_as = "serde_with::DefaultOnNull")]
    #[serde(default)]
    pub tickers: Vec<Ticker>,
}

/// Exchange tickers of a coin from `/coins/{id}/tickers`.
#[serde_as]
#[derive(Debug, Clone, Deserialize)]
pub struct CoinTickers {
    /// Coin name.
    pub name: String,
    /// Tickers on this page (up to 100).
    #[serde_as(deserialize_as = "serde_with::DefaultOnNull")]
    #[serde(default)]
    pub tickers: Vec<Ticker>,
}

/// Market data of a historical snapshot.
#[serde_as]
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HistoricalMarketData {
    #[serde_as(deserialize_as = "LenientMap")]
    #[serde(default)]
    pub current_price: HashMap<String, f64>,
    #[serde_as(deserialize_as = "LenientMap")]
    #[serde(default)]
    pub market_cap: HashMap<String, f64>,
    #[serde_as(deserialize_as = "LenientMap")]
    #[serde(default)]
    pub total_volume: HashMap<String, f64>,
}

/// Snapshot of a coin at a past date from `/coins/{id}/history`.
///
/// Dates before the coin was listed yield a snapshot without `market_data`.
#[serde_as]
#[derive(Debug, Clone, Deserialize)]
pub struct CoinHistory {
    /// Coin id.
    pub id: String,
    /// Ticker symbol.
    pub symbol: String,
    /// Display name.
    pub name: String,
    #[serde_as(deserialize_as = "LenientMap")]
    #[serde(default)]
    pub localization: HashMap<String, String>,
    pub image: Option<Image>,
    pub market_data: Option<HistoricalMarketData>,
    pub community_data: Option<CommunityData>,
    pub developer_data: Option<DeveloperData>,
    pub public_interest_stats: Option<PublicInterestStats>,
}

/// A `[timestamp_ms, value]` sample of a market chart.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(from = "(f64, Option<f64>)")]
pub struct ChartPoint {
    /// Unix time in milliseconds.
    pub timestamp_ms: i64,
    /// Value at that time; `0.0` where CoinGecko has no value.
    pub value: f64,
}

impl From<(f64, Option<f64>)> for ChartPoint {
    fn from((timestamp_ms, value): (f64, Option<f64>)) -> Self {
        Self {
            timestamp_ms: timestamp_ms as i64,
            value: value.unwrap_or_default(),
        }
    }
}

/// Price, market cap and volume history from `/coins/{id}/market_chart`.
#[serde_as]
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MarketChart {
    #[serde_as(deserialize_as = "serde_with::DefaultOnNull")]
    #[serde(default)]
    pub prices: Vec<ChartPoint>,
    #[serde_as(deserialize_as = "serde_with::DefaultOnNull")]
    #[serde(default)]
    pub market_caps: Vec<ChartPoint>,
    #[serde_as(deserialize_as = "serde_with::DefaultOnNull")]
    #[serde(default)]
    pub total_volumes: Vec<ChartPoint>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    fn encode<T: Serialize>(params: &T) -> String {
        serde_urlencoded::to_string(params).unwrap()
    }

    #[test]
    fn test_markets_params_defaults() {
        let request = CoinsMarketsRequest::new("usd");
        assert_eq!(
            encode(&request.params().unwrap()),
            "vs_currency=usd&order=market_cap_desc&sparkline=false"
        );
    }

    #[test]
    fn test_markets_params_full() {
        let request = CoinsMarketsRequest::new("eur")
            .ids(["bitcoin", "ethereum"])
            .order(MarketOrder::VolumeDesc)
            .page(100, 2)
            .sparkline(true)
            .price_change_percentage([PriceChangeWindow::Hour1, PriceChangeWindow::Day7]);
        assert_eq!(
            encode(&request.params().unwrap()),
            "vs_currency=eur&order=volume_desc&ids=bitcoin%2Cethereum&per_page=100&page=2\
             &sparkline=true&price_change_percentage=1h%2C7d"
        );
    }

    #[test]
    fn test_markets_page_size_bounds() {
        for (per_page, paged) in [(0, false), (1, true), (250, true), (251, false)] {
            let request = CoinsMarketsRequest::new("usd").page(per_page, 3);
            let query = encode(&request.params().unwrap());
            assert_eq!(query.contains("per_page="), paged, "per_page={per_page}");
            assert_eq!(query.contains("&page=3"), paged, "per_page={per_page}");
        }
    }

    #[test]
    fn test_markets_requires_vs_currency() {
        let err = CoinsMarketsRequest::default().params().unwrap_err();
        assert!(matches!(err, CoinGeckoError::Validation(_)));
    }

    #[test]
    fn test_markets_rejects_blank_ids() {
        let err = CoinsMarketsRequest::new("usd")
            .ids(["bitcoin", ""])
            .params()
            .unwrap_err();
        assert!(matches!(err, CoinGeckoError::Validation(_)));
    }

    #[test]
    fn test_coin_request_sends_every_flag() {
        let request = CoinRequest::new("bitcoin")
            .localization(false)
            .tickers(true)
            .market_data(false)
            .community_data(true)
            .developer_data(false)
            .sparkline(true);
        assert_eq!(
            encode(&request),
            "localization=false&tickers=true&market_data=false&community_data=true\
             &developer_data=false&sparkline=true"
        );
    }

    #[test]
    fn test_coin_request_localization_independent_of_sparkline() {
        let request = CoinRequest::new("bitcoin").localization(true).sparkline(false);
        let query = encode(&request);
        assert!(query.starts_with("localization=true&"));
        assert!(query.ends_with("&sparkline=false"));
    }

    #[test]
    fn test_tickers_page_only_when_positive() {
        assert_eq!(encode(&CoinTickersRequest::new("bitcoin")), "");
        assert_eq!(encode(&CoinTickersRequest::new("bitcoin").page(2)), "page=2");
    }

    #[test]
    fn test_history_request() {
        let request = CoinHistoryRequest::on("bitcoin", date!(2017 - 12 - 30));
        assert_eq!(encode(&request), "date=30-12-2017&localization=false");
    }

    #[test]
    fn test_market_chart_request() {
        let request = MarketChartRequest::new("bitcoin", "usd", crate::types::ChartDays::Max);
        assert_eq!(encode(&request), "vs_currency=usd&days=max");
        let request = MarketChartRequest::new("bitcoin", "usd", 14);
        assert_eq!(request.days, "14");
    }

    #[test]
    fn test_chart_point_decoding() {
        let chart: MarketChart = serde_json::from_str(
            r#"{"prices":[[1711843200000,69702.3],[1711929600000,null]],"market_caps":null}"#,
        )
        .unwrap();
        assert_eq!(chart.prices.len(), 2);
        assert_eq!(chart.prices[0].timestamp_ms, 1_711_843_200_000);
        assert_eq!(chart.prices[0].value, 69702.3);
        assert_eq!(chart.prices[1].value, 0.0);
        assert!(chart.market_caps.is_empty());
        assert!(chart.total_volumes.is_empty());
    }

    #[test]
    fn test_coin_market_window_accessor() {
        let market: CoinMarket = serde_json::from_str(
            r#"{"id":"bitcoin","symbol":"btc","name":"Bitcoin","current_price":67000,
                "price_change_percentage_7d_in_currency":-2.5,"roi":null}"#,
        )
        .unwrap();
        assert_eq!(market.current_price, Some(67000.0));
        assert_eq!(market.price_change_percentage(PriceChangeWindow::Day7), Some(-2.5));
        assert_eq!(market.price_change_percentage(PriceChangeWindow::Hour1), None);
        assert!(market.roi.is_none());
    }

    #[test]
    fn test_coin_detail_requires_identity() {
        let result = serde_json::from_str::<CoinDetail>(r#"{"symbol":"btc","name":"Bitcoin"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_coin_detail_lenient_sections() {
        let detail: CoinDetail = serde_json::from_str(
            r#"{
                "id": "bitcoin",
                "symbol": "btc",
                "name": "Bitcoin",
                "categories": ["Cryptocurrency", null],
                "country_origin": "",
                "links": {"homepage": ["http://www.bitcoin.org", "", ""], "repos_url": {"github": ["https://github.com/bitcoin/bitcoin"], "bitbucket": []}},
                "market_data": {"current_price": {"usd": 67000.0, "xdr": null}, "market_cap_rank": 1},
                "tickers": null,
                "unknown_field": {"ignored": true}
            }"#,
        )
        .unwrap();
        assert_eq!(detail.categories, vec!["Cryptocurrency".to_string(), String::new()]);
        assert!(detail.country_origin.is_none());
        let links = detail.links.unwrap();
        assert_eq!(links.homepage[0], "http://www.bitcoin.org");
        assert_eq!(links.repos_url["github"].len(), 1);
        let market_data = detail.market_data.unwrap();
        assert_eq!(market_data.current_price["usd"], 67000.0);
        assert_eq!(market_data.current_price["xdr"], 0.0);
        assert_eq!(market_data.market_cap_rank, Some(1));
        assert!(detail.tickers.is_empty());
        assert!(detail.community_data.is_none());
    }
}
