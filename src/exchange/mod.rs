/// Pool discovery through the Uniswap V2 factory
pub mod factory;
/// Reserve queries against a Uniswap V2 pair
pub mod pair;
/// Reserve-ratio spot pricing
pub mod price;

use alloy::network::Ethereum;
use alloy::primitives::Address;
use alloy::providers::RootProvider;
use eyre::Result;

use self::pair::Reserves;

/// Locates the pool for the ordered pair and reads its current reserves.
///
/// The two remote reads are strictly sequential: when the factory reports
/// the zero-address sentinel, [`factory::find_pair`] fails and no reserve
/// query is ever issued.
///
/// # Errors
/// * If either `eth_call` fails at the transport or ABI level
/// * If no pool exists for the pair
pub async fn pool_reserves(
    provider: &RootProvider<Ethereum>,
    factory_address: Address,
    token0: Address,
    token1: Address,
) -> Result<(Address, Reserves)> {
    let pool = factory::find_pair(provider, factory_address, token0, token1).await?;
    let reserves = pair::fetch_reserves(provider, pool).await?;
    Ok((pool, reserves))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::constants::UNISWAP_V2_FACTORY;
    use alloy::primitives::aliases::U112;
    use alloy::primitives::{Bytes, U256};
    use alloy::providers::mock::Asserter;
    use alloy::providers::{Provider, ProviderBuilder};
    use alloy::sol_types::SolValue;

    /// Builds a provider whose transport answers from a canned queue.
    fn mocked_provider(asserter: Asserter) -> RootProvider<Ethereum> {
        let provider = ProviderBuilder::new().on_mocked_client(asserter);
        (*provider.root()).clone()
    }

    /// Address literal helper for the tests below.
    fn addr(value: &str) -> Address {
        value.parse().unwrap()
    }

    #[tokio::test]
    async fn test_zero_pool_address_stops_before_reserve_query() {
        let asserter = Asserter::new();
        // Exactly one eth_call response is queued: the factory's zero-address
        // sentinel. If a reserve query were still issued it would hit an
        // empty queue and fail with a transport error, not the pool-not-found
        // error asserted below.
        asserter.push_success(&Bytes::from(Address::ZERO.abi_encode()));
        let provider = mocked_provider(asserter);

        let token0 = addr("0x2260FAC5E5542a773Aa44fBCfeDf7C193bc2C599");
        let token1 = addr("0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2");
        let err = pool_reserves(&provider, UNISWAP_V2_FACTORY, token0, token1)
            .await
            .err()
            .unwrap();
        assert_eq!(
            err.to_string(),
            format!("no Uniswap V2 pool exists for {token0}/{token1}")
        );
    }

    #[tokio::test]
    async fn test_found_pool_consumes_both_responses() {
        let asserter = Asserter::new();
        let pool = addr("0xBb2b8038a1640196FbE3e38816F3e67Cba72D940");
        asserter.push_success(&Bytes::from(pool.abi_encode()));
        asserter.push_success(&Bytes::from(
            (U112::from(500u64), U112::from(1_000u64), 0u32).abi_encode(),
        ));
        let provider = mocked_provider(asserter);

        let token0 = addr("0x2260FAC5E5542a773Aa44fBCfeDf7C193bc2C599");
        let token1 = addr("0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2");
        let (found, reserves) = pool_reserves(&provider, UNISWAP_V2_FACTORY, token0, token1)
            .await
            .unwrap();
        assert_eq!(found, pool);
        assert_eq!(reserves.reserve0, U256::from(500u64));
        assert_eq!(reserves.reserve1, U256::from(1_000u64));
    }
}
