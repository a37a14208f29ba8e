//! Alloy-backed registry and token clients.

use alloy_chains::NamedChain;
use alloy_network::{Ethereum, ReceiptResponse};
use alloy_primitives::{Address, Bytes, TxHash, U256};
use alloy_provider::Provider;
use alloy_rpc_types::TransactionRequest;
use async_trait::async_trait;
use tracing::{error, info, Instrument};

use crate::contracts::interchain_token::InterchainTokenContract;
use crate::contracts::interchain_token_service::InterchainTokenServiceContract;
use crate::error::{ItsError, Result};
use crate::protocol::{Salt, TokenId, TokenManagerType};
use crate::spans;
use crate::traits::{InterchainToken, InterchainTokenService};

/// Sends `tx` and waits until it is included, failing on a reverted receipt.
async fn send_and_confirm<P>(
    provider: &P,
    chain: NamedChain,
    operation: &str,
    tx: TransactionRequest,
) -> Result<TxHash>
where
    P: Provider<Ethereum>,
{
    let span = spans::send_transaction(operation, &chain);

    async move {
        let pending = provider.send_transaction(tx).await?;
        let tx_hash = *pending.tx_hash();
        tracing::Span::current().record("tx_hash", tracing::field::display(tx_hash));

        info!(
            tx_hash = %tx_hash,
            operation = operation,
            chain = %chain,
            event = "transaction_sent"
        );

        let receipt = pending
            .get_receipt()
            .instrument(spans::wait_for_receipt(tx_hash, &chain))
            .await?;

        if !receipt.status() {
            let reason = format!("{operation} transaction {tx_hash} reverted");
            spans::record_error_with_context(
                "TransactionReverted",
                &reason,
                Some("Earlier transactions of this workflow remain on chain"),
            );
            error!(
                tx_hash = %tx_hash,
                operation = operation,
                event = "transaction_reverted"
            );
            return Err(ItsError::TransactionFailed { reason });
        }

        info!(
            tx_hash = %tx_hash,
            block_number = ?receipt.block_number(),
            gas_used = receipt.gas_used(),
            event = "transaction_confirmed"
        );

        Ok(tx_hash)
    }
    .instrument(span)
    .await
}

/// ITS registry client signing with the provider's wallet.
///
/// # Examples
///
/// ```rust,no_run
/// use its_orchestrator::providers::AlloyInterchainTokenService;
/// use its_orchestrator::INTERCHAIN_TOKEN_SERVICE_ADDRESS;
/// use alloy_chains::NamedChain;
/// use alloy_primitives::Address;
/// use alloy_provider::ProviderBuilder;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let provider = ProviderBuilder::new()
///     .connect("https://avalanche-fuji-c-chain.publicnode.com")
///     .await?;
///
/// let its = AlloyInterchainTokenService::new(
///     INTERCHAIN_TOKEN_SERVICE_ADDRESS,
///     provider,
///     NamedChain::AvalancheFuji,
///     Address::ZERO,
/// );
/// # Ok(())
/// # }
/// ```
pub struct AlloyInterchainTokenService<P: Provider<Ethereum>> {
    contract: InterchainTokenServiceContract<P>,
    chain: NamedChain,
    from: Address,
}

impl<P: Provider<Ethereum>> AlloyInterchainTokenService<P> {
    pub fn new(address: Address, provider: P, chain: NamedChain, from: Address) -> Self {
        Self {
            contract: InterchainTokenServiceContract::new(address, provider),
            chain,
            from,
        }
    }
}

#[async_trait]
impl<P: Provider<Ethereum>> InterchainTokenService for AlloyInterchainTokenService<P> {
    fn address(&self) -> Address {
        self.contract.address()
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
        let tx = self.contract.deploy_token_manager_transaction(
            self.from,
            salt,
            destination_chain,
            manager_type,
            params,
            gas_value,
            attached_value,
        );
        send_and_confirm(self.contract.provider(), self.chain, "deployTokenManager", tx).await
    }

    async fn interchain_token_id(&self, sender: Address, salt: Salt) -> Result<TokenId> {
        self.contract.interchain_token_id(sender, salt).await
    }

    async fn token_manager_address(&self, token_id: TokenId) -> Result<Address> {
        self.contract.token_manager_address(token_id).await
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
        let tx = self.contract.interchain_transfer_transaction(
            self.from,
            token_id,
            destination_chain,
            receiver,
            amount,
            gas_value,
            attached_value,
        );
        send_and_confirm(self.contract.provider(), self.chain, "interchainTransfer", tx).await
    }
}

/// Interchain token client signing with the provider's wallet.
pub struct AlloyInterchainToken<P: Provider<Ethereum>> {
    contract: InterchainTokenContract<P>,
    chain: NamedChain,
    from: Address,
}

impl<P: Provider<Ethereum>> AlloyInterchainToken<P> {
    pub fn new(address: Address, provider: P, chain: NamedChain, from: Address) -> Self {
        Self {
            contract: InterchainTokenContract::new(address, provider),
            chain,
            from,
        }
    }
}

#[async_trait]
impl<P: Provider<Ethereum>> InterchainToken for AlloyInterchainToken<P> {
    fn address(&self) -> Address {
        self.contract.address()
    }

    async fn mint(&self, to: Address, amount: U256) -> Result<TxHash> {
        let tx = self.contract.mint_transaction(self.from, to, amount);
        send_and_confirm(self.contract.provider(), self.chain, "mint", tx).await
    }

    async fn approve(&self, spender: Address, amount: U256) -> Result<TxHash> {
        let tx = self.contract.approve_transaction(self.from, spender, amount);
        send_and_confirm(self.contract.provider(), self.chain, "approve", tx).await
    }

    async fn add_minter(&self, minter: Address) -> Result<TxHash> {
        let tx = self.contract.add_minter_transaction(self.from, minter);
        send_and_confirm(self.contract.provider(), self.chain, "addMinter", tx).await
    }
}
