use alloy::network::Ethereum;
use alloy::providers::{Provider, ProviderBuilder, RootProvider};
use eyre::Result;
use url::Url;

use crate::config::Config;

/// Creates an HTTP provider for the JSON-RPC endpoint named in `config`.
///
/// The returned root provider is what the contract bindings in
/// [`crate::exchange`] issue their read-only `eth_call`s through.
///
/// # Errors
/// * If the configured endpoint is not a valid URL
pub fn create_http_provider(config: &Config) -> Result<RootProvider<Ethereum>> {
    let url = Url::parse(&config.rpc_url)?;
    let provider = ProviderBuilder::new().on_http(url);
    Ok((*provider.root()).clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_invalid_url() {
        let config = Config {
            rpc_url: "not a url".into(),
        };
        assert!(create_http_provider(&config).is_err());
    }
}
