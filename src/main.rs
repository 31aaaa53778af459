//! One-shot CLI printing the Uniswap V2 spot rate for a token pair.

use clap::Parser;
use dotenv::dotenv;
use eyre::Result;
use log::info;

use pairspot::config::Config;
use pairspot::exchange::{self, price};
use pairspot::models::token;
use pairspot::utils::constants::{CHAIN_ID, UNISWAP_V2_FACTORY};
use pairspot::utils::logger::setup_logger;
use pairspot::utils::providers::create_http_provider;

/// Command-line arguments, mirroring the two mandatory ticker flags.
#[derive(Parser)]
#[command(author, version, about = "Prints the Uniswap V2 spot rate for a token pair", long_about = None)]
struct Cli {
    /// Symbol of an ERC20 token (e.g. WBTC)
    #[arg(short = 'A', long = "tokenSymbolA")]
    token_symbol_a: String,

    /// Symbol of an ERC20 token (e.g. WETH)
    #[arg(short = 'B', long = "tokenSymbolB")]
    token_symbol_b: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    let cli = Cli::parse();
    setup_logger()?;

    // Configuration is validated before any provider exists, so a missing
    // ETHEREUM_URL never triggers network traffic.
    let config = Config::from_env()?;

    let tokens = token::load_tokens()?;
    let token_a = token::resolve_token(&tokens, CHAIN_ID, &cli.token_symbol_a)?;
    let token_b = token::resolve_token(&tokens, CHAIN_ID, &cli.token_symbol_b)?;
    let (token0, token1) = token::order_pair(token_a, token_b);
    info!(
        "main: resolved {} -> {} and {} -> {}",
        token0.symbol, token0.address, token1.symbol, token1.address
    );

    let provider = create_http_provider(&config)?;

    let (pool, reserves) =
        exchange::pool_reserves(&provider, UNISWAP_V2_FACTORY, token0.address, token1.address)
            .await?;
    println!(
        "{}-{} pair pool address: {pool}",
        token0.symbol, token1.symbol
    );

    let rate = price::spot_price(
        reserves.reserve0,
        reserves.reserve1,
        token0.decimals,
        token1.decimals,
    )?;
    println!("1 {} = {} {}", token0.symbol, rate, token1.symbol);
    println!("1 {} = {} {}", token1.symbol, 1.0 / rate, token0.symbol);

    Ok(())
}
