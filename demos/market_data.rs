//! Example: Fetching market data from CoinGecko.
//!
//! Uses the Pro host when `COINGECKO_API_KEY` is set, the public host
//! otherwise. Set `RUST_LOG=debug` to see request spans.
//!
//! Run with: cargo run --example market_data

use coingecko_api_client::rest::CoinGeckoRestClient;
use coingecko_api_client::rest::coins::{CoinHistoryRequest, CoinsMarketsRequest, MarketChartRequest};
use coingecko_api_client::{ChartDays, MarketOrder, PriceChangeWindow};
use time::macros::date;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenv::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let client = CoinGeckoRestClient::builder().api_key_from_env().build();
    println!("Using {}", client.base_url());

    println!("=== Ping ===");
    println!("{}", client.ping().await?.gecko_says);

    println!("\n=== Prices ===");
    let prices = client
        .simple_price(&["bitcoin", "ethereum"], &["usd", "eur"])
        .await?;
    for (coin, by_currency) in &prices {
        for (currency, price) in by_currency {
            println!("{coin}/{currency}: {price}");
        }
    }

    println!("\n=== Top 5 by volume ===");
    let request = CoinsMarketsRequest::new("usd")
        .order(MarketOrder::VolumeDesc)
        .page(5, 1)
        .price_change_percentage([PriceChangeWindow::Hour1, PriceChangeWindow::Day7]);
    for coin in client.coins_markets(&request).await? {
        println!(
            "{:>12}: {:?} USD (1h {:?}%, 7d {:?}%)",
            coin.name,
            coin.current_price,
            coin.price_change_percentage(PriceChangeWindow::Hour1),
            coin.price_change_percentage(PriceChangeWindow::Day7),
        );
    }

    println!("\n=== Bitcoin on 30-12-2017 ===");
    let history = client
        .coin_history(&CoinHistoryRequest::on("bitcoin", date!(2017 - 12 - 30)))
        .await?;
    if let Some(market_data) = history.market_data {
        println!("USD: {:?}", market_data.current_price.get("usd"));
    }

    println!("\n=== Bitcoin, last 7 days ===");
    let chart = client
        .coin_market_chart(&MarketChartRequest::new("bitcoin", "usd", ChartDays::Days(7)))
        .await?;
    if let (Some(first), Some(last)) = (chart.prices.first(), chart.prices.last()) {
        println!(
            "{} samples, {} -> {}",
            chart.prices.len(),
            first.value,
            last.value
        );
    }

    println!("\n=== Global ===");
    let global = client.global().await?;
    println!("Active coins: {:?}", global.active_cryptocurrencies);
    println!("BTC dominance: {:?}%", global.market_cap_percentage.get("btc"));

    Ok(())
}
