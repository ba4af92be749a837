//! Common types used across the CoinGecko client library.

pub mod common;
pub mod serde_helpers;

pub use common::*;
