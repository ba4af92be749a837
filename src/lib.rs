//! # CoinGecko Client
//!
//! An async Rust client library for the CoinGecko v3 market-data REST API.
//!
//! ## Features
//!
//! - One typed async method per endpoint: prices, coin lists, market
//!   snapshots, coin details, tickers, history, charts, events, exchange
//!   rates, asset platforms and global statistics
//! - Public and Pro hosts, with the Pro API key kept in a redacting secret
//! - Request tracing through `reqwest-tracing`
//! - Pluggable transport for retry or caching middleware
//! - Per-request cancellation and timeouts
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use coingecko_api_client::rest::CoinGeckoRestClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = CoinGeckoRestClient::new();
//!     let prices = client.simple_price(&["bitcoin"], &["usd"]).await?;
//!     println!("BTC: {} USD", prices["bitcoin"]["usd"]);
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod error;
pub mod rest;
pub mod types;

// Re-export commonly used types at crate root
pub use error::{ApiError, CoinGeckoError};
pub use types::common::{ChartDays, MarketOrder, PriceChangeWindow};

/// Result type alias using CoinGeckoError
pub type Result<T> = std::result::Result<T, CoinGeckoError>;
