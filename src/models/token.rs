//! The embedded token dataset and symbol resolution.
//!
//! The dataset is a compile-time JSON file of well-known mainnet ERC-20
//! listings. It is parsed once at startup and never mutated; every lookup
//! the program performs runs against this read-only table.

use alloy::primitives::Address;
use eyre::{bail, Result, WrapErr};
use serde::Deserialize;

/// Static token dataset, embedded at compile time.
const TOKEN_DATASET: &str = include_str!("../../data/tokens.json");

/// One entry of the token dataset.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    /// Chain the token contract is deployed on
    pub chain_id: u64,
    /// Exchange-listing ticker, unique per chain within the dataset
    pub symbol: String,
    /// 20-byte contract address
    pub address: Address,
    /// Power-of-ten scale between the token's smallest unit and its
    /// human-denominated unit
    pub decimals: u8,
}

/// Parses the embedded token dataset.
///
/// # Errors
/// Returns an error if the embedded JSON is malformed, which would be a
/// build defect rather than a runtime condition.
pub fn load_tokens() -> Result<Vec<Token>> {
    serde_json::from_str(TOKEN_DATASET).wrap_err("embedded token dataset is malformed")
}

/// Finds the unique dataset entry matching `symbol` on `chain_id`.
///
/// Matching is exact and case-sensitive.
///
/// # Errors
/// * If no entry matches, the symbol is unknown for that chain
/// * If more than one entry matches, the dataset itself is broken and the
///   ambiguity is reported instead of silently picking the first record
pub fn resolve_token<'a>(tokens: &'a [Token], chain_id: u64, symbol: &str) -> Result<&'a Token> {
    let mut matches = tokens
        .iter()
        .filter(|token| token.chain_id == chain_id && token.symbol == symbol);

    let Some(token) = matches.next() else {
        bail!("unknown token symbol \"{symbol}\" for chain {chain_id}");
    };
    if matches.next().is_some() {
        bail!("token dataset lists symbol \"{symbol}\" more than once for chain {chain_id}");
    }
    Ok(token)
}

/// Orders two resolved tokens into the canonical (token0, token1) pool key.
///
/// Uniswap V2 keys every pool by ascending token address, so the ordering
/// here must match the factory's or the wrong pool (or none) is found.
/// Comparing the 20 address bytes is equivalent to comparing the lowercase
/// hex renderings lexicographically.
pub fn order_pair<'a>(a: &'a Token, b: &'a Token) -> (&'a Token, &'a Token) {
    if a.address < b.address {
        (a, b)
    } else {
        (b, a)
    }
}
