//! CoinGecko REST API client.
//!
//! One async method per endpoint, grouped by area:
//! - [`simple`]: price lookups
//! - [`coins`]: coin lists, market snapshots and per-coin data
//! - [`general`]: status, events, exchange rates, asset platforms and global data
//!
//! # Trait-based API
//!
//! The [`CoinGeckoClient`] trait abstracts all REST API operations, enabling:
//! - Mock implementations for testing
//! - Decorators (e.g. a caching wrapper)
//!
//! ```rust,ignore
//! use coingecko_api_client::rest::{CoinGeckoClient, CoinGeckoRestClient};
//!
//! async fn use_client<C: CoinGeckoClient>(client: &C) -> Result<(), coingecko_api_client::CoinGeckoError> {
//!     let ping = client.ping().await?;
//!     println!("{}", ping.gecko_says);
//!     Ok(())
//! }
//! ```

mod client;
pub mod coins;
mod endpoints;
pub mod general;
pub mod simple;
mod traits;

pub use client::{CoinGeckoRestClient, CoinGeckoRestClientBuilder};
pub use endpoints::{COINGECKO_BASE_URL, COINGECKO_PRO_URL};
pub use traits::CoinGeckoClient;
