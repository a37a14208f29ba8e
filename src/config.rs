//! Orchestrator configuration
//!
//! [`OrchestratorConfig`] holds the signer, chains and numeric constants a
//! workflow uses; it is passed to the orchestrator at construction and never
//! read from global state. Contract addresses belong to the injected
//! collaborators. [`Settings`] resolves a full run configuration from
//! environment variables (after `.env` is loaded by the binary).

use alloy_chains::NamedChain;
use alloy_primitives::{uint, Address, U256};
use alloy_signer_local::PrivateKeySigner;
use bon::Builder;
use std::str::FromStr;
use url::Url;

use crate::chain::addresses::{
    AVALANCHE_FUJI_TOKEN_ADDRESS, DEFAULT_TRANSFER_RECEIVER, FANTOM_TESTNET_TOKEN_ADDRESS,
    INTERCHAIN_TOKEN_SERVICE_ADDRESS,
};
use crate::chain::AxelarChain;
use crate::error::{ItsError, Result};
use crate::protocol::GasToken;
use crate::workflow::{WorkflowInputs, WorkflowKind};

/// 1000 tokens with 18 decimals
pub const DEFAULT_MINT_AMOUNT: U256 = uint!(1000000000000000000000_U256);
/// 500 tokens with 18 decimals
pub const DEFAULT_TRANSFER_AMOUNT: U256 = uint!(500000000000000000000_U256);
/// 0.01 native token, passed as `gasValue` to `deployTokenManager`
pub const DEFAULT_DEPLOY_GAS_VALUE: U256 = uint!(10000000000000000_U256);
/// 0.01 native token, passed as `gasValue` to `interchainTransfer`
pub const DEFAULT_TRANSFER_FEE: U256 = uint!(10000000000000000_U256);
/// Destination execution gas limit used for relayer fee quotes
pub const DEFAULT_GAS_LIMIT: u64 = 700_000;
/// Safety multiplier applied by the gas-estimation service
pub const DEFAULT_GAS_MULTIPLIER: f64 = 1.1;

/// Signer, chains and amounts shared by all workflows
///
/// # Examples
///
/// ```rust
/// use its_orchestrator::{OrchestratorConfig, DEFAULT_GAS_LIMIT};
/// use alloy_primitives::Address;
///
/// let config = OrchestratorConfig::builder().signer(Address::ZERO).build();
/// assert_eq!(config.gas_limit(), DEFAULT_GAS_LIMIT);
/// ```
#[derive(Builder, Debug, Clone, PartialEq)]
pub struct OrchestratorConfig {
    /// Address of the account signing every transaction
    signer: Address,
    #[builder(default = NamedChain::AvalancheFuji)]
    home_chain: NamedChain,
    #[builder(default = NamedChain::FantomTestnet)]
    remote_chain: NamedChain,
    #[builder(default = DEFAULT_MINT_AMOUNT)]
    mint_amount: U256,
    #[builder(default = DEFAULT_TRANSFER_AMOUNT)]
    transfer_amount: U256,
    #[builder(default = DEFAULT_TRANSFER_RECEIVER)]
    transfer_receiver: Address,
    #[builder(default = DEFAULT_DEPLOY_GAS_VALUE)]
    deploy_gas_value: U256,
    #[builder(default = DEFAULT_TRANSFER_FEE)]
    transfer_fee: U256,
    #[builder(default = DEFAULT_GAS_LIMIT)]
    gas_limit: u64,
    #[builder(default = DEFAULT_GAS_MULTIPLIER)]
    gas_multiplier: f64,
    #[builder(default = GasToken::Eth)]
    gas_token: GasToken,
}

impl OrchestratorConfig {
    pub fn signer(&self) -> Address {
        self.signer
    }

    pub fn home_chain(&self) -> NamedChain {
        self.home_chain
    }

    pub fn remote_chain(&self) -> NamedChain {
        self.remote_chain
    }

    pub fn mint_amount(&self) -> U256 {
        self.mint_amount
    }

    pub fn transfer_amount(&self) -> U256 {
        self.transfer_amount
    }

    pub fn transfer_receiver(&self) -> Address {
        self.transfer_receiver
    }

    pub fn deploy_gas_value(&self) -> U256 {
        self.deploy_gas_value
    }

    pub fn transfer_fee(&self) -> U256 {
        self.transfer_fee
    }

    pub fn gas_limit(&self) -> u64 {
        self.gas_limit
    }

    pub fn gas_multiplier(&self) -> f64 {
        self.gas_multiplier
    }

    pub fn gas_token(&self) -> GasToken {
        self.gas_token
    }
}

/// Retry policy for relayer fee quotes.
///
/// The default makes a single attempt, so quotes fail fast unless retries
/// are configured explicitly.
///
/// # Examples
///
/// ```rust
/// use its_orchestrator::RetryConfig;
///
/// let config = RetryConfig::default()
///     .with_max_attempts(3)
///     .with_backoff_secs(5);
/// assert_eq!(config.max_attempts, 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryConfig {
    /// Maximum number of attempts, including the first one.
    pub max_attempts: u32,
    /// Seconds to wait between attempts.
    pub backoff_secs: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 1,
            backoff_secs: 2,
        }
    }
}

impl RetryConfig {
    pub fn with_max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = attempts.max(1);
        self
    }

    pub fn with_backoff_secs(mut self, secs: u64) -> Self {
        self.backoff_secs = secs;
        self
    }
}

/// Everything one process run needs, resolved before any remote call
#[derive(Debug, Clone)]
pub struct Settings {
    pub workflow: WorkflowKind,
    pub signer: PrivateKeySigner,
    pub home_chain: NamedChain,
    pub remote_chain: NamedChain,
    pub home_rpc_url: Url,
    pub remote_rpc_url: Url,
    pub its_address: Address,
    pub home_token: Address,
    pub remote_token: Address,
    pub gas_token: GasToken,
    pub inputs: WorkflowInputs,
    pub retry: RetryConfig,
}

impl Settings {
    /// Reads the settings from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the settings through `lookup`, which maps a variable name to its value.
    ///
    /// The selector is resolved first, then the signer credential; nothing
    /// here touches the network.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let workflow: WorkflowKind = var("FUNCTION_NAME")
            .ok_or_else(|| ItsError::InvalidConfig("FUNCTION_NAME must be set".to_string()))?
            .parse()?;

        let signer: PrivateKeySigner = var("PRIVATE_KEY")
            .ok_or_else(|| ItsError::InvalidConfig("PRIVATE_KEY must be set".to_string()))?
            .trim()
            .parse()
            .map_err(|e| ItsError::InvalidConfig(format!("invalid PRIVATE_KEY: {e}")))?;

        let home_chain = parse_chain(var("HOME_CHAIN_ID"), NamedChain::AvalancheFuji)?;
        let remote_chain = parse_chain(var("REMOTE_CHAIN_ID"), NamedChain::FantomTestnet)?;

        let home_rpc_url = parse_rpc_url("HOME_RPC_URL", var("HOME_RPC_URL"), home_chain)?;
        let remote_rpc_url = parse_rpc_url("REMOTE_RPC_URL", var("REMOTE_RPC_URL"), remote_chain)?;

        let inputs = WorkflowInputs {
            salt: parse_optional("SALT", var("SALT"))?,
            token_id: parse_optional("TOKEN_ID", var("TOKEN_ID"))?,
            receiver: parse_optional("RECEIVER", var("RECEIVER"))?,
        };

        let mut retry = RetryConfig::default();
        if let Some(attempts) =
            parse_optional::<u32>("GAS_QUOTE_MAX_ATTEMPTS", var("GAS_QUOTE_MAX_ATTEMPTS"))?
        {
            retry = retry.with_max_attempts(attempts);
        }
        if let Some(secs) =
            parse_optional::<u64>("GAS_QUOTE_BACKOFF_SECS", var("GAS_QUOTE_BACKOFF_SECS"))?
        {
            retry = retry.with_backoff_secs(secs);
        }

        Ok(Self {
            workflow,
            signer,
            home_chain,
            remote_chain,
            home_rpc_url,
            remote_rpc_url,
            its_address: parse_optional("ITS_ADDRESS", var("ITS_ADDRESS"))?
                .unwrap_or(INTERCHAIN_TOKEN_SERVICE_ADDRESS),
            home_token: parse_optional("HOME_TOKEN_ADDRESS", var("HOME_TOKEN_ADDRESS"))?
                .unwrap_or(AVALANCHE_FUJI_TOKEN_ADDRESS),
            remote_token: parse_optional("REMOTE_TOKEN_ADDRESS", var("REMOTE_TOKEN_ADDRESS"))?
                .unwrap_or(FANTOM_TESTNET_TOKEN_ADDRESS),
            gas_token: var("GAS_TOKEN")
                .map(|token| token.parse::<GasToken>())
                .transpose()?
                .unwrap_or(GasToken::Eth),
            inputs,
            retry,
        })
    }

    /// Builds the orchestrator configuration for these settings.
    pub fn orchestrator_config(&self) -> OrchestratorConfig {
        OrchestratorConfig::builder()
            .signer(self.signer.address())
            .home_chain(self.home_chain)
            .remote_chain(self.remote_chain)
            .gas_token(self.gas_token)
            .build()
    }
}

fn parse_chain(value: Option<String>, default: NamedChain) -> Result<NamedChain> {
    let Some(value) = value else {
        return Ok(default);
    };
    let id: u64 = value
        .trim()
        .parse()
        .map_err(|e| ItsError::InvalidConfig(format!("invalid chain id {value}: {e}")))?;
    let chain = NamedChain::try_from(id)
        .map_err(|_| ItsError::InvalidConfig(format!("unknown chain id {id}")))?;
    if !chain.is_axelar_supported() {
        return Err(ItsError::ChainNotSupported {
            chain: chain.to_string(),
        });
    }
    Ok(chain)
}

fn parse_rpc_url(key: &str, value: Option<String>, chain: NamedChain) -> Result<Url> {
    let raw = match value {
        Some(url) => url,
        None => chain
            .default_rpc_url()
            .ok_or_else(|| ItsError::InvalidConfig(format!("{key} must be set for {chain}")))?
            .to_string(),
    };
    Url::parse(raw.trim())
        .map_err(|e| ItsError::InvalidConfig(format!("invalid RPC URL {raw}: {e}")))
}

fn parse_optional<T>(key: &str, value: Option<String>) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .map(|raw| {
            raw.trim()
                .parse()
                .map_err(|e| ItsError::InvalidConfig(format!("invalid {key}: {e}")))
        })
        .transpose()
}
