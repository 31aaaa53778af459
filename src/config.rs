//! Runtime configuration sourced from the process environment.

use std::env;

use eyre::{bail, Result};

/// Settings needed for a single price lookup.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTPS JSON-RPC endpoint of an Ethereum mainnet node
    pub rpc_url: String,
}

impl Config {
    /// Reads the configuration from the process environment.
    ///
    /// # Errors
    /// Returns an error if `ETHEREUM_URL` is unset or empty. This is checked
    /// before any provider is built, so a misconfigured process never makes
    /// a network call.
    pub fn from_env() -> Result<Self> {
        Self::from_rpc_url(env::var("ETHEREUM_URL").ok())
    }

    /// Builds the configuration from an optional endpoint value.
    fn from_rpc_url(rpc_url: Option<String>) -> Result<Self> {
        match rpc_url {
            Some(url) if !url.is_empty() => Ok(Self { rpc_url: url }),
            _ => bail!("ETHEREUM_URL is not set"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rpc_url_present() {
        let config = Config::from_rpc_url(Some("https://example.invalid/rpc".into())).unwrap();
        assert_eq!(config.rpc_url, "https://example.invalid/rpc");
    }

    #[test]
    fn test_from_rpc_url_missing() {
        let err = Config::from_rpc_url(None).err().unwrap();
        assert_eq!(err.to_string(), "ETHEREUM_URL is not set");
    }

    #[test]
    fn test_from_rpc_url_empty() {
        let err = Config::from_rpc_url(Some(String::new())).err().unwrap();
        assert_eq!(err.to_string(), "ETHEREUM_URL is not set");
    }
}
