//! Authentication for the CoinGecko Pro API.
//!
//! Pro requests carry a static API key in the `X-Cg-Pro-Api-Key` header.
//! This module provides the key type with secure secret storage.

mod api_key;

pub use api_key::{ApiKey, API_KEY_ENV_VAR, API_KEY_HEADER};
