//! Axelar chain configuration trait
//!
//! Implemented on `alloy_chains::NamedChain` to map EVM networks onto the
//! chain names understood by the Axelar network and its gas-estimation API.

use alloy_chains::NamedChain;

use crate::{ItsError, Result};

/// Axelarscan API, mainnet
pub const AXELARSCAN_API: &str = "https://api.axelarscan.io";
/// Axelarscan API, testnet
pub const AXELARSCAN_API_TESTNET: &str = "https://testnet.api.axelarscan.io";

/// Axelar chain configuration trait
///
/// # Example
///
/// ```rust
/// use its_orchestrator::AxelarChain;
/// use alloy_chains::NamedChain;
///
/// assert_eq!(NamedChain::FantomTestnet.axelar_chain_name().unwrap(), "Fantom");
/// assert_eq!(NamedChain::AvalancheFuji.axelar_api_id().unwrap(), "avalanche");
/// ```
pub trait AxelarChain {
    /// Returns true if the chain is connected to the Axelar network
    fn is_axelar_supported(&self) -> bool;

    /// Chain name as passed to the ITS contract (`destinationChain`)
    fn axelar_chain_name(&self) -> Result<&'static str>;

    /// Chain identifier used by the Axelarscan API
    fn axelar_api_id(&self) -> Result<String>;

    /// Public RPC endpoint used when none is configured
    fn default_rpc_url(&self) -> Option<&'static str>;

    /// Axelarscan base URL for the environment this chain belongs to
    fn axelarscan_api_url(&self) -> &'static str;
}

impl AxelarChain for NamedChain {
    fn is_axelar_supported(&self) -> bool {
        self.axelar_chain_name().is_ok()
    }

    fn axelar_chain_name(&self) -> Result<&'static str> {
        use NamedChain::*;

        Ok(match self {
            Mainnet => "Ethereum",
            Sepolia => "ethereum-sepolia",
            Avalanche | AvalancheFuji => "Avalanche",
            Fantom | FantomTestnet => "Fantom",
            Polygon => "Polygon",
            PolygonAmoy => "polygon-sepolia",
            Arbitrum => "arbitrum",
            ArbitrumSepolia => "arbitrum-sepolia",
            Optimism => "optimism",
            OptimismSepolia => "optimism-sepolia",
            Base => "base",
            BaseSepolia => "base-sepolia",
            BinanceSmartChain | BinanceSmartChainTestnet => "binance",
            _ => {
                return Err(ItsError::ChainNotSupported {
                    chain: self.to_string(),
                })
            }
        })
    }

    fn axelar_api_id(&self) -> Result<String> {
        self.axelar_chain_name().map(str::to_ascii_lowercase)
    }

    fn default_rpc_url(&self) -> Option<&'static str> {
        match self {
            NamedChain::AvalancheFuji => Some("https://avalanche-fuji-c-chain.publicnode.com"),
            NamedChain::FantomTestnet => Some("https://rpc.ankr.com/fantom_testnet"),
            NamedChain::Sepolia => Some("https://ethereum-sepolia-rpc.publicnode.com"),
            _ => None,
        }
    }

    fn axelarscan_api_url(&self) -> &'static str {
        if self.is_testnet() {
            AXELARSCAN_API_TESTNET
        } else {
            AXELARSCAN_API
        }
    }
}
