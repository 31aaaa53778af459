//! Reserve queries against a Uniswap V2 pair contract.

use alloy::network::Ethereum;
use alloy::primitives::{Address, U256};
use alloy::providers::RootProvider;
use alloy::sol;
use eyre::{Result, WrapErr};
use log::info;

// UniswapV2Pair interface, reduced to the single read this program needs.
sol! {
    #[sol(rpc)]
    interface IUniswapV2Pair {
        function getReserves() external view returns (uint112 reserve0, uint112 reserve1, uint32 blockTimestampLast);
    }
}

/// Reserve balances of a pool, one slot per token of the ordered pair.
#[derive(Debug, Clone, Copy)]
pub struct Reserves {
    /// Reserve of token0, in its smallest unit
    pub reserve0: U256,
    /// Reserve of token1, in its smallest unit
    pub reserve1: U256,
    /// Timestamp of the last reserve update; carried through but unused
    #[allow(dead_code)]
    pub block_timestamp_last: u32,
}

/// Reads the current reserves of the pool at `pair`.
///
/// One network round trip; reserves are read fresh on every invocation and
/// never cached. The pair contract stores them as `uint112`, widened here to
/// [`U256`] for the pricing arithmetic.
///
/// # Errors
/// * If the `eth_call` fails at the transport or ABI level
pub async fn fetch_reserves(
    provider: &RootProvider<Ethereum>,
    pair: Address,
) -> Result<Reserves> {
    let contract = IUniswapV2Pair::new(pair, provider);
    let reserves = contract
        .getReserves()
        .call()
        .await
        .wrap_err_with(|| format!("getReserves call on pool {pair} failed"))?;

    info!(
        "exchange::pair: pool {pair} reserves {} / {}",
        reserves.reserve0, reserves.reserve1
    );

    Ok(Reserves {
        reserve0: reserves.reserve0.to::<U256>(),
        reserve1: reserves.reserve1.to::<U256>(),
        block_timestamp_last: reserves.blockTimestampLast,
    })
}
