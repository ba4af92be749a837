//! Example: Using the CoinGeckoClient trait.
//!
//! Run with: cargo run --example trait_usage

use coingecko_api_client::rest::{CoinGeckoClient, CoinGeckoRestClient};

async fn print_btc<C: CoinGeckoClient>(client: &C) -> Result<(), coingecko_api_client::CoinGeckoError> {
    let price = client.simple_single_price("bitcoin", "usd").await?;
    println!("BTC: {} USD", price.market_price);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = CoinGeckoRestClient::new();
    print_btc(&client).await?;
    Ok(())
}
