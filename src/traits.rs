//! Core trait abstractions for ITS orchestration.
//!
//! Every remote collaborator of a workflow sits behind one of these traits so
//! workflows can run against fakes: the ITS registry, the token contracts, the
//! gas-estimation service, the salt randomness and time.
//!
//! # Example: Implementing a Test Fake
//!
//! ```rust,ignore
//! use its_orchestrator::{GasEstimator, GasFeeRequest, Result};
//! use alloy_primitives::U256;
//!
//! struct FixedQuote(U256);
//!
//! #[async_trait::async_trait]
//! impl GasEstimator for FixedQuote {
//!     async fn estimate_gas_fee(&self, _request: &GasFeeRequest) -> Result<U256> {
//!         Ok(self.0)
//!     }
//! }
//! ```

use alloy_primitives::{Address, Bytes, TxHash, U256};
use async_trait::async_trait;
use std::time::Duration;

use crate::error::Result;
use crate::protocol::{GasFeeRequest, Salt, TokenId, TokenManagerType};

/// The ITS registry contract.
///
/// State-changing methods return once the transaction is included and
/// successful; a reverted transaction is an error.
#[async_trait]
pub trait InterchainTokenService: Send + Sync {
    /// Address of the registry, used as spender in token approvals
    fn address(&self) -> Address;

    /// Submits `deployTokenManager` and waits for inclusion.
    ///
    /// `destination_chain` is empty for a deployment on the registry's own chain.
    #[allow(clippy::too_many_arguments)]
    async fn deploy_token_manager(
        &self,
        salt: Salt,
        destination_chain: &str,
        manager_type: TokenManagerType,
        params: Bytes,
        gas_value: U256,
        attached_value: U256,
    ) -> Result<TxHash>;

    /// Derives the token id for `(sender, salt)`.
    async fn interchain_token_id(&self, sender: Address, salt: Salt) -> Result<TokenId>;

    /// Derives the token manager address for `token_id`.
    async fn token_manager_address(&self, token_id: TokenId) -> Result<Address>;

    /// Submits `interchainTransfer` with empty metadata and waits for inclusion.
    ///
    /// Inclusion only means the home chain accepted the transfer; delivery on
    /// the destination chain happens later through the Axelar relayer.
    #[allow(clippy::too_many_arguments)]
    async fn interchain_transfer(
        &self,
        token_id: TokenId,
        destination_chain: &str,
        receiver: Address,
        amount: U256,
        gas_value: U256,
        attached_value: U256,
    ) -> Result<TxHash>;
}

/// A mintable token with an owner-managed minter set.
#[async_trait]
pub trait InterchainToken: Send + Sync {
    /// Address of the token contract
    fn address(&self) -> Address;

    async fn mint(&self, to: Address, amount: U256) -> Result<TxHash>;

    async fn approve(&self, spender: Address, amount: U256) -> Result<TxHash>;

    async fn add_minter(&self, minter: Address) -> Result<TxHash>;
}

/// Relayer fee quotes for cross-chain calls.
///
/// Quotes carry no freshness or confidence guarantee; a quote that turns out
/// too low stalls the relay after the source transaction succeeded.
#[async_trait]
pub trait GasEstimator: Send + Sync {
    /// Returns the native amount, in wei, to attach to the cross-chain call.
    ///
    /// # Errors
    ///
    /// Returns an error if the service is unreachable or answers with
    /// something that is not an amount.
    async fn estimate_gas_fee(&self, request: &GasFeeRequest) -> Result<U256>;
}

/// Source of fresh deployment salts.
pub trait SaltSource: Send + Sync {
    fn next_salt(&self) -> Salt;
}

/// Trait for time-based operations.
///
/// Lets retry backoff run instantly under test.
#[async_trait]
pub trait Clock: Send + Sync {
    /// Asynchronously sleeps for the given duration.
    async fn sleep(&self, duration: Duration);
}
