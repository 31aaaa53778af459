use alloy::primitives::{address, Address};

/// Uniswap V2 factory on Ethereum mainnet
pub const UNISWAP_V2_FACTORY: Address = address!("0x5C69bEE701ef814a2B6a3EDD4B1652CB9cc5aA6f");

/// Chain id of Ethereum mainnet, the only chain covered by the embedded
/// token dataset
pub const CHAIN_ID: u64 = 1;

/// Fractional decimal digits carried through the fixed-point division before
/// the rate is lowered to a display value
pub const PRICE_PRECISION: u32 = 15;
