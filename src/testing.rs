//! Test utilities and fake implementations for ITS orchestration
//!
//! Fakes for every remote collaborator of the orchestrator. They share a
//! [`CallLog`] so tests can assert the exact order of remote calls across
//! the registry, both tokens and the gas-estimation service, and inject
//! failures at any step.

use alloy_primitives::{keccak256, Address, Bytes, TxHash, U256};
use alloy_sol_types::SolValue;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::protocol::{GasFeeRequest, Salt, TokenId, TokenManagerType};
use crate::traits::{Clock, GasEstimator, InterchainToken, InterchainTokenService, SaltSource};
use crate::{ItsError, Result};

// ============================================================================
// Call Log
// ============================================================================

/// One remote call observed by a fake
#[derive(Clone, Debug, PartialEq)]
pub enum RemoteCall {
    DeployTokenManager {
        salt: Salt,
        destination_chain: String,
        manager_type: TokenManagerType,
        params: Bytes,
        gas_value: U256,
        attached_value: U256,
    },
    InterchainTokenId {
        sender: Address,
        salt: Salt,
    },
    TokenManagerAddress {
        token_id: TokenId,
    },
    InterchainTransfer {
        token_id: TokenId,
        destination_chain: String,
        receiver: Address,
        amount: U256,
        gas_value: U256,
        attached_value: U256,
    },
    Mint {
        token: Address,
        to: Address,
        amount: U256,
    },
    Approve {
        token: Address,
        spender: Address,
        amount: U256,
    },
    AddMinter {
        token: Address,
        minter: Address,
    },
    EstimateGasFee(GasFeeRequest),
}

impl RemoteCall {
    /// Short operation name, matching the contract function or API route
    pub fn name(&self) -> &'static str {
        match self {
            Self::DeployTokenManager { .. } => "deployTokenManager",
            Self::InterchainTokenId { .. } => "interchainTokenId",
            Self::TokenManagerAddress { .. } => "tokenManagerAddress",
            Self::InterchainTransfer { .. } => "interchainTransfer",
            Self::Mint { .. } => "mint",
            Self::Approve { .. } => "approve",
            Self::AddMinter { .. } => "addMinter",
            Self::EstimateGasFee(_) => "estimateGasFee",
        }
    }
}

/// Ordered record of remote calls, shared between fakes
#[derive(Clone, Debug, Default)]
pub struct CallLog {
    calls: Arc<Mutex<Vec<RemoteCall>>>,
}

impl CallLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a call and returns a transaction hash unique within this log
    fn record(&self, call: RemoteCall) -> TxHash {
        let mut calls = self.calls.lock().unwrap();
        calls.push(call);
        TxHash::from(U256::from(calls.len()))
    }

    pub fn calls(&self) -> Vec<RemoteCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Operation names in call order
    pub fn names(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().iter().map(RemoteCall::name).collect()
    }

    pub fn len(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ============================================================================
// Fake Interchain Token Service
// ============================================================================

/// Token id derivation of the ITS registry:
/// `keccak256(abi.encode(keccak256("its-interchain-token-id"), sender, salt))`
pub fn derive_token_id(sender: Address, salt: Salt) -> TokenId {
    let prefix = keccak256(b"its-interchain-token-id");
    TokenId::new(keccak256((prefix, sender, salt.as_b256()).abi_encode()))
}

/// Deterministic stand-in for the registry's token manager address derivation
pub fn derive_token_manager(token_id: TokenId) -> Address {
    Address::from_word(keccak256(token_id.as_b256()))
}

/// A fake ITS registry with deterministic id and address derivation.
///
/// Two instances agree on every derived value, like the registry deployed at
/// the same address on two chains.
#[derive(Clone, Debug)]
pub struct FakeInterchainTokenService {
    address: Address,
    log: CallLog,
    fail_on: Arc<Mutex<Option<&'static str>>>,
}

impl FakeInterchainTokenService {
    pub fn new(address: Address, log: CallLog) -> Self {
        Self {
            address,
            log,
            fail_on: Arc::default(),
        }
    }

    /// Make the named operation fail from now on
    pub fn fail_on(&self, operation: &'static str) {
        *self.fail_on.lock().unwrap() = Some(operation);
    }

    fn check(&self, operation: &'static str) -> Result<()> {
        if *self.fail_on.lock().unwrap() == Some(operation) {
            return Err(ItsError::TransactionFailed {
                reason: format!("simulated {operation} failure"),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl InterchainTokenService for FakeInterchainTokenService {
    fn address(&self) -> Address {
        self.address
    }

    async fn deploy_token_manager(
        &self,
        salt: Salt,
        destination_chain: &str,
        manager_type: TokenManagerType,
        params: Bytes,
        gas_value: U256,
        attached_value: U256,
    ) -> Result<TxHash> {
        let tx_hash = self.log.record(RemoteCall::DeployTokenManager {
            salt,
            destination_chain: destination_chain.to_string(),
            manager_type,
            params,
            gas_value,
            attached_value,
        });
        self.check("deployTokenManager")?;
        Ok(tx_hash)
    }

    async fn interchain_token_id(&self, sender: Address, salt: Salt) -> Result<TokenId> {
        self.log.record(RemoteCall::InterchainTokenId { sender, salt });
        self.check("interchainTokenId")?;
        Ok(derive_token_id(sender, salt))
    }

    async fn token_manager_address(&self, token_id: TokenId) -> Result<Address> {
        self.log.record(RemoteCall::TokenManagerAddress { token_id });
        self.check("tokenManagerAddress")?;
        Ok(derive_token_manager(token_id))
    }

    async fn interchain_transfer(
        &self,
        token_id: TokenId,
        destination_chain: &str,
        receiver: Address,
        amount: U256,
        gas_value: U256,
        attached_value: U256,
    ) -> Result<TxHash> {
        let tx_hash = self.log.record(RemoteCall::InterchainTransfer {
            token_id,
            destination_chain: destination_chain.to_string(),
            receiver,
            amount,
            gas_value,
            attached_value,
        });
        self.check("interchainTransfer")?;
        Ok(tx_hash)
    }
}

// ============================================================================
// Fake Interchain Token
// ============================================================================

/// A fake token recording mint, approve and addMinter calls.
#[derive(Clone, Debug)]
pub struct FakeInterchainToken {
    address: Address,
    log: CallLog,
    fail_on: Arc<Mutex<Option<&'static str>>>,
}

impl FakeInterchainToken {
    pub fn new(address: Address, log: CallLog) -> Self {
        Self {
            address,
            log,
            fail_on: Arc::default(),
        }
    }

    /// Make the named operation revert from now on
    pub fn fail_on(&self, operation: &'static str) {
        *self.fail_on.lock().unwrap() = Some(operation);
    }

    fn check(&self, operation: &'static str) -> Result<()> {
        if *self.fail_on.lock().unwrap() == Some(operation) {
            return Err(ItsError::TransactionFailed {
                reason: format!("{operation} transaction reverted"),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl InterchainToken for FakeInterchainToken {
    fn address(&self) -> Address {
        self.address
    }

    async fn mint(&self, to: Address, amount: U256) -> Result<TxHash> {
        let tx_hash = self.log.record(RemoteCall::Mint {
            token: self.address,
            to,
            amount,
        });
        self.check("mint")?;
        Ok(tx_hash)
    }

    async fn approve(&self, spender: Address, amount: U256) -> Result<TxHash> {
        let tx_hash = self.log.record(RemoteCall::Approve {
            token: self.address,
            spender,
            amount,
        });
        self.check("approve")?;
        Ok(tx_hash)
    }

    async fn add_minter(&self, minter: Address) -> Result<TxHash> {
        let tx_hash = self.log.record(RemoteCall::AddMinter {
            token: self.address,
            minter,
        });
        self.check("addMinter")?;
        Ok(tx_hash)
    }
}

// ============================================================================
// Fake Gas Estimator
// ============================================================================

/// A fake gas estimator returning a fixed quote.
///
/// Can be told to fail a number of times before answering, for retry tests.
#[derive(Clone, Debug)]
pub struct FakeGasEstimator {
    quote: U256,
    log: CallLog,
    failures_remaining: Arc<Mutex<u32>>,
}

impl FakeGasEstimator {
    pub fn new(quote: U256, log: CallLog) -> Self {
        Self {
            quote,
            log,
            failures_remaining: Arc::default(),
        }
    }

    /// Fail the next `count` requests
    pub fn fail_times(&self, count: u32) {
        *self.failures_remaining.lock().unwrap() = count;
    }
}

#[async_trait]
impl GasEstimator for FakeGasEstimator {
    async fn estimate_gas_fee(&self, request: &GasFeeRequest) -> Result<U256> {
        self.log.record(RemoteCall::EstimateGasFee(request.clone()));

        let mut remaining = self.failures_remaining.lock().unwrap();
        if *remaining > 0 {
            *remaining -= 1;
            return Err(ItsError::GasEstimation {
                reason: "simulated service outage".to_string(),
            });
        }

        Ok(self.quote)
    }
}

// ============================================================================
// Fixed Salt Source
// ============================================================================

/// Salt source that always hands out the same salt.
#[derive(Clone, Copy, Debug)]
pub struct FixedSaltSource(pub Salt);

impl SaltSource for FixedSaltSource {
    fn next_salt(&self) -> Salt {
        self.0
    }
}

// ============================================================================
// Fake Clock
// ============================================================================

/// A fake clock that records sleeps and returns immediately.
#[derive(Clone, Debug, Default)]
pub struct FakeClock {
    sleep_log: Arc<Mutex<Vec<Duration>>>,
}

impl FakeClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the total time "slept" by this clock
    pub fn total_sleep_time(&self) -> Duration {
        self.sleep_log.lock().unwrap().iter().sum()
    }

    /// Get the number of times sleep was called
    pub fn sleep_count(&self) -> usize {
        self.sleep_log.lock().unwrap().len()
    }
}

#[async_trait]
impl Clock for FakeClock {
    async fn sleep(&self, duration: Duration) {
        self.sleep_log.lock().unwrap().push(duration);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GasToken;
    use alloy_primitives::{address, b256, B256};

    const SENDER: Address = address!("0x70997970C51812dc3A010C7d01b50e0d17dc79C8");
    const B256_ONE: B256 =
        b256!("0x0000000000000000000000000000000000000000000000000000000000000001");

    #[tokio::test]
    async fn test_fake_clock_tracks_sleep_calls() {
        let clock = FakeClock::new();

        clock.sleep(Duration::from_secs(60)).await;
        clock.sleep(Duration::from_secs(120)).await;

        assert_eq!(clock.sleep_count(), 2);
        assert_eq!(clock.total_sleep_time(), Duration::from_secs(180));
    }

    #[test]
    fn test_token_id_derivation_is_deterministic() {
        let salt = Salt::new(b256!(
            "0x8bfe80fc2d5d11189f70516a0630de94ebd059fbeeb704f8b2a4d7be006f5733"
        ));
        let other = Salt::new(B256_ONE);

        assert_eq!(derive_token_id(SENDER, salt), derive_token_id(SENDER, salt));
        assert_ne!(derive_token_id(SENDER, salt), derive_token_id(SENDER, other));
        assert_ne!(
            derive_token_id(SENDER, salt),
            derive_token_id(Address::ZERO, salt)
        );
    }

    #[tokio::test]
    async fn test_fakes_share_call_order() {
        let log = CallLog::new();
        let its = FakeInterchainTokenService::new(Address::repeat_byte(0x11), log.clone());
        let token = FakeInterchainToken::new(Address::repeat_byte(0x22), log.clone());

        let first = token.mint(SENDER, U256::from(1)).await.unwrap();
        let id = its.interchain_token_id(SENDER, Salt::new(B256_ONE)).await.unwrap();
        let second = token.add_minter(derive_token_manager(id)).await.unwrap();

        assert_eq!(log.names(), ["mint", "interchainTokenId", "addMinter"]);
        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn test_injected_failure_is_still_recorded() {
        let log = CallLog::new();
        let token = FakeInterchainToken::new(Address::repeat_byte(0x22), log.clone());
        token.fail_on("approve");

        let result = token.approve(SENDER, U256::from(1)).await;

        assert!(matches!(result, Err(ItsError::TransactionFailed { .. })));
        assert_eq!(log.names(), ["approve"]);
    }

    #[tokio::test]
    async fn test_gas_estimator_fails_then_answers() {
        let log = CallLog::new();
        let estimator = FakeGasEstimator::new(U256::from(42), log.clone());
        estimator.fail_times(1);
        let request = GasFeeRequest::builder()
            .source_chain("avalanche")
            .destination_chain("fantom")
            .gas_token(GasToken::Eth)
            .gas_limit(700_000)
            .gas_multiplier(1.1)
            .build();

        assert!(estimator.estimate_gas_fee(&request).await.is_err());
        assert_eq!(
            estimator.estimate_gas_fee(&request).await.unwrap(),
            U256::from(42)
        );
        assert_eq!(log.len(), 2);
    }
}
