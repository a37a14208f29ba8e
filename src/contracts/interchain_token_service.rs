//! Interchain Token Service contract bindings and wrapper
//!
//! The ITS registry deploys token managers (locally or, through Axelar, on a
//! remote chain), derives token ids and manager addresses, and initiates
//! interchain transfers.

use alloy_network::Ethereum;
use alloy_primitives::{Address, Bytes, U256};
use alloy_provider::Provider;
use alloy_rpc_types::TransactionRequest;
use alloy_sol_types::sol;
use tracing::{debug, info};

use InterchainTokenService::InterchainTokenServiceInstance;

use crate::error::{ItsError, Result};
use crate::protocol::{Salt, TokenId, TokenManagerType};
use crate::spans;

/// Interchain Token Service contract wrapper
pub struct InterchainTokenServiceContract<P: Provider<Ethereum>> {
    instance: InterchainTokenServiceInstance<P>,
}

impl<P: Provider<Ethereum>> InterchainTokenServiceContract<P> {
    pub fn new(address: Address, provider: P) -> Self {
        debug!(
            contract_address = %address,
            event = "interchain_token_service_contract_initialized"
        );
        Self {
            instance: InterchainTokenServiceInstance::new(address, provider),
        }
    }

    /// Create the transaction request for `deployTokenManager`.
    ///
    /// An empty `destination_chain` deploys on the chain the registry lives
    /// on; any other value relays the deployment through Axelar, in which
    /// case `attached_value` must cover the relayer gas.
    #[allow(clippy::too_many_arguments)]
    pub fn deploy_token_manager_transaction(
        &self,
        from: Address,
        salt: Salt,
        destination_chain: &str,
        manager_type: TokenManagerType,
        params: Bytes,
        gas_value: U256,
        attached_value: U256,
    ) -> TransactionRequest {
        let span = spans::deploy_token_manager(&salt, destination_chain, manager_type);
        let _guard = span.enter();

        info!(
            from = %from,
            salt = %salt,
            destination_chain = destination_chain,
            manager_type = %manager_type,
            gas_value = %gas_value,
            attached_value = %attached_value,
            contract_address = %self.instance.address(),
            event = "deploy_token_manager_transaction_created"
        );

        self.instance
            .deployTokenManager(
                salt.as_b256(),
                destination_chain.to_string(),
                manager_type.as_u8(),
                params,
                gas_value,
            )
            .value(attached_value)
            .from(from)
            .into_transaction_request()
    }

    /// Create the transaction request for `interchainTransfer`.
    #[allow(clippy::too_many_arguments)]
    pub fn interchain_transfer_transaction(
        &self,
        from: Address,
        token_id: TokenId,
        destination_chain: &str,
        receiver: Address,
        amount: U256,
        gas_value: U256,
        attached_value: U256,
    ) -> TransactionRequest {
        let span = spans::interchain_transfer(&token_id, destination_chain, &receiver, &amount);
        let _guard = span.enter();

        info!(
            from = %from,
            token_id = %token_id,
            destination_chain = destination_chain,
            receiver = %receiver,
            amount = %amount,
            gas_value = %gas_value,
            attached_value = %attached_value,
            contract_address = %self.instance.address(),
            event = "interchain_transfer_transaction_created"
        );

        self.instance
            .interchainTransfer(
                token_id.as_b256(),
                destination_chain.to_string(),
                Bytes::copy_from_slice(receiver.as_slice()),
                amount,
                Bytes::new(),
                gas_value,
            )
            .value(attached_value)
            .from(from)
            .into_transaction_request()
    }

    /// Derive the token id the registry assigns to `(sender, salt)`.
    pub async fn interchain_token_id(&self, sender: Address, salt: Salt) -> Result<TokenId> {
        let token_id = self
            .instance
            .interchainTokenId(sender, salt.as_b256())
            .call()
            .await
            .map_err(|e| ItsError::ContractCall(format!("interchainTokenId: {e}")))?;

        debug!(
            sender = %sender,
            salt = %salt,
            token_id = %token_id,
            event = "interchain_token_id_retrieved"
        );

        Ok(TokenId::new(token_id))
    }

    /// Derive the token manager address for `token_id`.
    pub async fn token_manager_address(&self, token_id: TokenId) -> Result<Address> {
        let manager = self
            .instance
            .tokenManagerAddress(token_id.as_b256())
            .call()
            .await
            .map_err(|e| ItsError::ContractCall(format!("tokenManagerAddress: {e}")))?;

        debug!(
            token_id = %token_id,
            token_manager = %manager,
            event = "token_manager_address_retrieved"
        );

        Ok(manager)
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
    #[allow(clippy::too_many_arguments)]
    #[allow(missing_docs)]
    #[sol(rpc)]
    contract InterchainTokenService {
        function deployTokenManager(
            bytes32 salt,
            string calldata destinationChain,
            uint8 tokenManagerType,
            bytes calldata params,
            uint256 gasValue
        ) external payable returns (bytes32 tokenId);

        function interchainTokenId(address sender, bytes32 salt) external view returns (bytes32 tokenId);

        function tokenManagerAddress(bytes32 tokenId) external view returns (address tokenManagerAddress_);

        function interchainTransfer(
            bytes32 tokenId,
            string calldata destinationChain,
            bytes calldata destinationAddress,
            uint256 amount,
            bytes calldata metadata,
            uint256 gasValue
        ) external payable;
    }
);
