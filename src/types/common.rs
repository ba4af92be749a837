//! Common request types for the CoinGecko API.

use serde::{Deserialize, Serialize};
use time::Date;
use time::macros::format_description;

/// Sort order for `/coins/markets`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarketOrder {
    /// Largest market cap first
    #[default]
    MarketCapDesc,
    /// Smallest market cap first
    MarketCapAsc,
    /// Highest CoinGecko score first
    GeckoDesc,
    /// Lowest CoinGecko score first
    GeckoAsc,
    /// Highest volume first
    VolumeDesc,
    /// Lowest volume first
    VolumeAsc,
    /// Coin id, descending
    IdDesc,
    /// Coin id, ascending
    IdAsc,
}

impl std::fmt::Display for MarketOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            MarketOrder::MarketCapDesc => "market_cap_desc",
            MarketOrder::MarketCapAsc => "market_cap_asc",
            MarketOrder::GeckoDesc => "gecko_desc",
            MarketOrder::GeckoAsc => "gecko_asc",
            MarketOrder::VolumeDesc => "volume_desc",
            MarketOrder::VolumeAsc => "volume_asc",
            MarketOrder::IdDesc => "id_desc",
            MarketOrder::IdAsc => "id_asc",
        };
        write!(f, "{}", s)
    }
}

/// Price change window for the `price_change_percentage` market parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PriceChangeWindow {
    /// 1 hour
    #[serde(rename = "1h")]
    Hour1,
    /// 24 hours
    #[serde(rename = "24h")]
    Hour24,
    /// 7 days
    #[serde(rename = "7d")]
    Day7,
    /// 14 days
    #[serde(rename = "14d")]
    Day14,
    /// 30 days
    #[serde(rename = "30d")]
    Day30,
    /// 200 days
    #[serde(rename = "200d")]
    Day200,
    /// 1 year
    #[serde(rename = "1y")]
    Year1,
}

impl PriceChangeWindow {
    /// All windows, shortest first.
    pub const ALL: [PriceChangeWindow; 7] = [
        PriceChangeWindow::Hour1,
        PriceChangeWindow::Hour24,
        PriceChangeWindow::Day7,
        PriceChangeWindow::Day14,
        PriceChangeWindow::Day30,
        PriceChangeWindow::Day200,
        PriceChangeWindow::Year1,
    ];

    /// The token CoinGecko uses for this window.
    pub fn as_str(&self) -> &'static str {
        match self {
            PriceChangeWindow::Hour1 => "1h",
            PriceChangeWindow::Hour24 => "24h",
            PriceChangeWindow::Day7 => "7d",
            PriceChangeWindow::Day14 => "14d",
            PriceChangeWindow::Day30 => "30d",
            PriceChangeWindow::Day200 => "200d",
            PriceChangeWindow::Year1 => "1y",
        }
    }
}

impl std::fmt::Display for PriceChangeWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Day-range token for `/coins/{id}/market_chart`.
///
/// CoinGecko picks the chart granularity from the range: minutely data for
/// one day, hourly up to 90 days, daily beyond that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartDays {
    /// A number of days back from now
    Days(u32),
    /// The full history of the coin
    Max,
}

impl std::fmt::Display for ChartDays {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChartDays::Days(days) => write!(f, "{}", days),
            ChartDays::Max => f.write_str("max"),
        }
    }
}

impl From<u32> for ChartDays {
    fn from(days: u32) -> Self {
        ChartDays::Days(days)
    }
}

/// Format a date the way `/coins/{id}/history` expects it (`dd-mm-yyyy`).
pub fn history_date(date: Date) -> String {
    let format = format_description!("[day]-[month]-[year]");
    // The description only uses calendar components, which every `Date` has.
    date.format(format).unwrap_or_default()
}

/// Join list parameters into the single comma-separated value CoinGecko expects.
///
/// Returns `None` for an empty list so the parameter can be left out.
pub(crate) fn comma_list<T: std::fmt::Display>(items: &[T]) -> Option<String> {
    if items.is_empty() {
        return None;
    }
    let joined = items
        .iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(",");
    Some(joined)
}

/// Whether any entry of a list parameter is empty or whitespace.
pub(crate) fn has_blank<S: AsRef<str>>(items: &[S]) -> bool {
    items.iter().any(|item| item.as_ref().trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn test_market_order_serde() {
        assert_eq!(
            serde_json::to_string(&MarketOrder::MarketCapDesc).unwrap(),
            r#""market_cap_desc""#
        );
        assert_eq!(
            serde_json::from_str::<MarketOrder>(r#""volume_asc""#).unwrap(),
            MarketOrder::VolumeAsc
        );
        assert_eq!(MarketOrder::default(), MarketOrder::MarketCapDesc);
        assert_eq!(MarketOrder::IdAsc.to_string(), "id_asc");
    }

    #[test]
    fn test_price_change_window_tokens() {
        let tokens: Vec<String> = PriceChangeWindow::ALL.iter().map(|w| w.to_string()).collect();
        assert_eq!(tokens, ["1h", "24h", "7d", "14d", "30d", "200d", "1y"]);
        assert_eq!(
            serde_json::to_string(&PriceChangeWindow::Day200).unwrap(),
            r#""200d""#
        );
    }

    #[test]
    fn test_chart_days_display() {
        assert_eq!(ChartDays::from(14).to_string(), "14");
        assert_eq!(ChartDays::Max.to_string(), "max");
    }

    #[test]
    fn test_comma_list() {
        assert_eq!(comma_list(&["bitcoin", "ethereum"]).as_deref(), Some("bitcoin,ethereum"));
        assert_eq!(
            comma_list(&[PriceChangeWindow::Hour1, PriceChangeWindow::Day7]).as_deref(),
            Some("1h,7d")
        );
        assert_eq!(comma_list::<String>(&[]), None);
    }

    #[test]
    fn test_has_blank() {
        assert!(!has_blank(&["bitcoin", "ethereum"]));
        assert!(has_blank(&["bitcoin", ""]));
        assert!(has_blank(&[" "]));
        assert!(!has_blank::<&str>(&[]));
    }

    #[test]
    fn test_history_date_format() {
        assert_eq!(history_date(date!(2019 - 01 - 30)), "30-01-2019");
        assert_eq!(history_date(date!(2021 - 12 - 05)), "05-12-2021");
    }
}
