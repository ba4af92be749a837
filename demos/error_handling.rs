//! Example: Working with CoinGeckoError and ApiError.
//!
//! Run with: cargo run --example error_handling

use coingecko_api_client::rest::CoinGeckoRestClient;
use coingecko_api_client::rest::coins::CoinRequest;
use coingecko_api_client::{ApiError, CoinGeckoError};

#[tokio::main]
async fn main() {
    let api_error = ApiError::from_response(
        429,
        br#"{"status":{"error_code":429,"error_message":"You've exceeded the Rate Limit."}}"#,
    );
    println!("API error: {}", api_error);
    println!("Server message: {:?}", api_error.error_message());
    println!("Is rate limit: {}", api_error.is_rate_limit());

    let client = CoinGeckoRestClient::new();

    match client.coin(&CoinRequest::new("not-a-real-coin")).await {
        Ok(coin) => println!("Unexpectedly found {}", coin.name),
        Err(CoinGeckoError::Api(inner)) if inner.is_not_found() => {
            println!("Unknown coin: {:?}", inner.error_message());
        }
        Err(CoinGeckoError::Api(inner)) if inner.is_rate_limit() => {
            println!("Rate limited, try again later");
        }
        Err(err) if err.is_transport() => println!("Network problem: {err}"),
        Err(err) => println!("Other error: {err}"),
    }

    match client.simple_single_price("bitcoin", "not-a-currency").await {
        Ok(price) => println!("Price: {}", price.market_price),
        Err(CoinGeckoError::NotFound { id, vs_currency }) => {
            println!("No {id} price in {vs_currency}");
        }
        Err(err) => println!("Other error: {err}"),
    }
}
