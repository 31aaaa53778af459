/*!
 * # Pairspot - Uniswap V2 Spot Price Lookup
 *
 * Pairspot is a one-shot command-line tool that derives the spot exchange
 * rate of an ERC-20 token pair from the on-chain reserves of its Uniswap V2
 * pool on Ethereum mainnet.
 *
 * ## How a lookup works
 *
 * - **Token resolution**: Both ticker symbols are resolved against an
 *   embedded token dataset and ordered into the canonical (token0, token1)
 *   pool key
 * - **Pool discovery**: The Uniswap V2 factory is asked for the pool address
 *   via a read-only `getPair` call
 * - **Reserve query**: The pool's `getReserves` call returns the two reserve
 *   balances
 * - **Pricing**: The reserve ratio is scaled by both tokens' decimals and
 *   printed in both directions
 *
 * ## Module Structure
 *
 * - `config`: Configuration sourced from the process environment
 * - `exchange`: Uniswap V2 contract bindings and reserve-ratio pricing
 * - `models`: The embedded token dataset and symbol resolution
 * - `utils`: Utility functions and helpers
 */

/// Configuration sourced from the process environment
pub mod config;
/// Uniswap V2 contract bindings and reserve-ratio pricing
pub mod exchange;
/// The embedded token dataset and symbol resolution
pub mod models;
/// Utility functions and helpers
pub mod utils;
