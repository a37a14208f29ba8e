//! # its-orchestrator
//!
//! Drives Axelar Interchain Token Service (ITS) registration and transfers for
//! a pre-existing token pair on two EVM chains.
//!
//! Four workflows, each run on its own and selected by name:
//!
//! - `deployTokenManagerAndAddAMinter`: deploy a LOCK_UNLOCK_FEE token manager
//!   for the home token and make it a minter of that token
//! - `mintAndApproveITS`: mint home tokens to the signer and approve the registry
//! - `deployTokenManagerRemotely`: deploy a MINT_BURN token manager for the
//!   remote token under the same salt, paying the relayer fee
//! - `transferTokens`: send an interchain transfer to the remote chain
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use its_orchestrator::providers::{
//!     AlloyInterchainToken, AlloyInterchainTokenService, AxelarscanGasEstimator, OsRandomSalt,
//! };
//! use its_orchestrator::{ItsError, Orchestrator, OrchestratorConfig, Workflow};
//! use its_orchestrator::{
//!     AVALANCHE_FUJI_TOKEN_ADDRESS, FANTOM_TESTNET_TOKEN_ADDRESS, INTERCHAIN_TOKEN_SERVICE_ADDRESS,
//! };
//! use alloy_chains::NamedChain;
//!
//! # async fn example() -> Result<(), ItsError> {
//! # use alloy_provider::ProviderBuilder;
//! # let signer = alloy_primitives::Address::ZERO;
//! let fuji = ProviderBuilder::new().connect("https://avalanche-fuji-c-chain.publicnode.com").await?;
//! let fantom = ProviderBuilder::new().connect("https://rpc.ankr.com/fantom_testnet").await?;
//!
//! let orchestrator = Orchestrator::builder()
//!     .config(OrchestratorConfig::builder().signer(signer).build())
//!     .token_service(AlloyInterchainTokenService::new(
//!         INTERCHAIN_TOKEN_SERVICE_ADDRESS, fuji.clone(), NamedChain::AvalancheFuji, signer,
//!     ))
//!     .home_token(AlloyInterchainToken::new(
//!         AVALANCHE_FUJI_TOKEN_ADDRESS, fuji, NamedChain::AvalancheFuji, signer,
//!     ))
//!     .remote_token(AlloyInterchainToken::new(
//!         FANTOM_TESTNET_TOKEN_ADDRESS, fantom, NamedChain::FantomTestnet, signer,
//!     ))
//!     .gas_estimator(AxelarscanGasEstimator::testnet())
//!     .salt_source(OsRandomSalt)
//!     .build();
//!
//! let outcome = orchestrator.run(Workflow::RegisterHomeManager).await?;
//! println!("{outcome}");
//! # Ok(())
//! # }
//! ```
//!
//! ## Public API
//!
//! - [`Orchestrator`] - runs the workflows against injected collaborators
//! - [`Workflow`], [`WorkflowKind`] and the outcome types
//! - [`InterchainTokenService`], [`InterchainToken`], [`GasEstimator`],
//!   [`SaltSource`] and [`Clock`] - seams for the remote collaborators
//! - [`providers`] - Alloy, Axelarscan and system implementations of those seams
//! - [`testing`] - in-memory fakes recording every remote call
//! - [`Settings`] - environment-driven configuration for the binary
//! - [`ItsError`] and [`Result`]

mod chain;
mod config;
mod contracts;
mod error;
mod protocol;
mod workflow;

pub use chain::addresses::{
    AVALANCHE_FUJI_TOKEN_ADDRESS, DEFAULT_TRANSFER_RECEIVER, FANTOM_TESTNET_TOKEN_ADDRESS,
    INTERCHAIN_TOKEN_SERVICE_ADDRESS,
};
pub use chain::{AxelarChain, AXELARSCAN_API, AXELARSCAN_API_TESTNET};
pub use config::{
    OrchestratorConfig, RetryConfig, Settings, DEFAULT_DEPLOY_GAS_VALUE, DEFAULT_GAS_LIMIT,
    DEFAULT_GAS_MULTIPLIER, DEFAULT_MINT_AMOUNT, DEFAULT_TRANSFER_AMOUNT, DEFAULT_TRANSFER_FEE,
};
pub use contracts::{
    interchain_token::InterchainTokenContract,
    interchain_token_service::InterchainTokenServiceContract,
};
pub use error::{ItsError, Result};
pub use protocol::{
    token_manager_params, GasFeeRequest, GasToken, InvalidTokenManagerType, Salt, TokenId,
    TokenManagerType,
};
pub use traits::{Clock, GasEstimator, InterchainToken, InterchainTokenService, SaltSource};
pub use workflow::{
    HomeManagerRegistration, MintAndApproval, Orchestrator, RemoteManagerRegistration,
    TransferParams, TransferReceipt, Workflow, WorkflowInputs, WorkflowKind, WorkflowOutcome,
};

pub mod providers;
pub mod spans;
pub mod testing;
pub mod traits;
