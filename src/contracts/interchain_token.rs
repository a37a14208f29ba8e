// SPDX-License-Identifier: Apache-2.0
//! Interchain token bindings for minting, approval and minter registration
//!
//! The token is a plain ERC20 with an owner-managed minter set. Its token
//! manager must be added as a minter before mint/burn transfers can settle.

use alloy_network::Ethereum;
use alloy_primitives::{Address, U256};
use alloy_provider::Provider;
use alloy_rpc_types::TransactionRequest;
use alloy_sol_types::sol;
use tracing::{debug, info};

use InterchainToken::InterchainTokenInstance;

/// Interchain token contract wrapper
///
/// Builds the transaction requests for `mint`, `approve` and `addMinter`.
/// Sending and confirming them is left to the caller.
///
/// # Example
///
/// ```rust,no_run
/// use its_orchestrator::InterchainTokenContract;
/// use alloy_primitives::{address, U256};
/// use alloy_provider::ProviderBuilder;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let provider = ProviderBuilder::new().connect("http://localhost:8545").await?;
/// let token = address!("255bDEBE3E43F3A20A164b25b257Fe2f8b259f91");
///
/// let contract = InterchainTokenContract::new(token, provider);
///
/// let from = address!("1234567890123456789012345678901234567890");
/// let tx = contract.mint_transaction(from, from, U256::from(1_000u64));
/// // Send transaction...
/// # Ok(())
/// # }
/// ```
pub struct InterchainTokenContract<P: Provider<Ethereum>> {
    instance: InterchainTokenInstance<P>,
}

impl<P: Provider<Ethereum>> InterchainTokenContract<P> {
    /// Create a new interchain token wrapper
    pub fn new(address: Address, provider: P) -> Self {
        debug!(
            contract_address = %address,
            event = "interchain_token_contract_initialized"
        );
        Self {
            instance: InterchainTokenInstance::new(address, provider),
        }
    }

    /// Create a transaction request minting `amount` to `to`
    pub fn mint_transaction(&self, from: Address, to: Address, amount: U256) -> TransactionRequest {
        info!(
            from = %from,
            to = %to,
            amount = %amount,
            contract_address = %self.instance.address(),
            event = "mint_transaction_created"
        );

        self.instance
            .mint(to, amount)
            .from(from)
            .into_transaction_request()
    }

    /// Create a transaction request approving `spender` for `amount`
    ///
    /// # Arguments
    ///
    /// * `from` - The token owner signing the approval
    /// * `spender` - The address allowed to pull the tokens (the ITS registry)
    /// * `amount` - The allowance to grant
    pub fn approve_transaction(
        &self,
        from: Address,
        spender: Address,
        amount: U256,
    ) -> TransactionRequest {
        info!(
            from = %from,
            spender = %spender,
            amount = %amount,
            contract_address = %self.instance.address(),
            event = "approve_transaction_created"
        );

        self.instance
            .approve(spender, amount)
            .from(from)
            .into_transaction_request()
    }

    /// Create a transaction request registering `minter`
    pub fn add_minter_transaction(&self, from: Address, minter: Address) -> TransactionRequest {
        info!(
            from = %from,
            minter = %minter,
            contract_address = %self.instance.address(),
            event = "add_minter_transaction_created"
        );

        self.instance
            .addMinter(minter)
            .from(from)
            .into_transaction_request()
    }

    /// Returns the contract address
    pub fn address(&self) -> Address {
        *self.instance.address()
    }

    /// Returns the provider the contract was bound to
    pub fn provider(&self) -> &P {
        self.instance.provider()
    }
}

sol!(
    #[allow(missing_docs)]
    #[sol(rpc)]
    contract InterchainToken {
        function mint(address to, uint256 amount) external;
        function approve(address spender, uint256 amount) external returns (bool);
        function addMinter(address minter) external;
    }
);
