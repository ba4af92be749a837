//! API key handling for CoinGecko Pro.

use secrecy::{ExposeSecret, SecretString};

/// Header carrying the Pro API key.
pub const API_KEY_HEADER: &str = "X-Cg-Pro-Api-Key";

/// Default environment variable read by [`ApiKey::from_env`].
pub const API_KEY_ENV_VAR: &str = "COINGECKO_API_KEY";

/// A CoinGecko Pro API key.
///
/// The key is kept in a [`SecretString`] and never printed by `Debug`.
#[derive(Clone)]
pub struct ApiKey {
    key: SecretString,
}

impl ApiKey {
    /// Wrap an API key.
    ///
    /// Returns `None` for an empty key, which the client treats as "no key".
    pub fn new(key: impl Into<String>) -> Option<Self> {
        let key = key.into();
        if key.is_empty() {
            return None;
        }
        Some(Self {
            key: SecretString::from(key),
        })
    }

    /// Read the key from `COINGECKO_API_KEY`.
    ///
    /// Returns `None` if the variable is unset or empty.
    pub fn from_env() -> Option<Self> {
        Self::from_env_var(API_KEY_ENV_VAR)
    }

    /// Read the key from a custom environment variable.
    ///
    /// Returns `None` if the variable is unset or empty.
    pub fn from_env_var(var: &str) -> Option<Self> {
        std::env::var(var).ok().and_then(Self::new)
    }

    /// Get the raw key for the request header.
    ///
    /// This method exposes the secret - use carefully.
    pub fn expose_secret(&self) -> &str {
        self.key.expose_secret()
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ApiKey").field(&"[REDACTED]").finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_key_debug_redacted() {
        let key = ApiKey::new("CG-super-secret").unwrap();
        let debug_str = format!("{:?}", key);
        assert!(!debug_str.contains("CG-super-secret"));
        assert!(debug_str.contains("[REDACTED]"));
        assert_eq!(key.expose_secret(), "CG-super-secret");
    }

    #[test]
    fn test_empty_key_is_no_key() {
        assert!(ApiKey::new("").is_none());
    }

    #[test]
    fn test_from_env_var() {
        let var = "COINGECKO_API_CLIENT_TEST_KEY";
        // SAFETY: the variable name is unique to this test.
        unsafe { std::env::set_var(var, "CG-from-env") };
        let key = ApiKey::from_env_var(var).unwrap();
        assert_eq!(key.expose_secret(), "CG-from-env");

        unsafe { std::env::set_var(var, "") };
        assert!(ApiKey::from_env_var(var).is_none());

        unsafe { std::env::remove_var(var) };
        assert!(ApiKey::from_env_var(var).is_none());
    }
}
