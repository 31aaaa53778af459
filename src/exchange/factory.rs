//! Pool discovery through the Uniswap V2 factory.

use alloy::network::Ethereum;
use alloy::primitives::Address;
use alloy::providers::RootProvider;
use alloy::sol;
use eyre::{bail, Result, WrapErr};
use log::info;

// UniswapV2Factory interface. `getPair` maps an ordered token pair to its
// pool contract, or to the zero address when no pool has been deployed.
sol! {
    #[sol(rpc)]
    interface IUniswapV2Factory {
        function getPair(address tokenA, address tokenB) external view returns (address pair);
    }
}

/// Asks `factory` for the pool holding the ordered pair `(token0, token1)`.
///
/// One network round trip. The caller is expected to have ordered the
/// addresses already; the factory answers for both orderings but the rest of
/// this program relies on the canonical one.
///
/// # Errors
/// * If the `eth_call` fails at the transport or ABI level
/// * If the factory returns the zero address, meaning no pool exists for
///   this pair
pub async fn find_pair(
    provider: &RootProvider<Ethereum>,
    factory: Address,
    token0: Address,
    token1: Address,
) -> Result<Address> {
    let contract = IUniswapV2Factory::new(factory, provider);
    let pair = contract
        .getPair(token0, token1)
        .call()
        .await
        .wrap_err_with(|| format!("getPair({token0}, {token1}) call on factory {factory} failed"))?
        .pair;

    info!("exchange::factory: getPair({token0}, {token1}) -> {pair}");
    checked_pair_address(pair, token0, token1)
}

/// Rejects the factory's all-zero sentinel for "no pool deployed".
fn checked_pair_address(pair: Address, token0: Address, token1: Address) -> Result<Address> {
    if pair == Address::ZERO {
        bail!("no Uniswap V2 pool exists for {token0}/{token1}");
    }
    Ok(pair)
}
