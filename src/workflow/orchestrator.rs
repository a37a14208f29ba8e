use alloy_primitives::U256;
use bon::Builder;
use tracing::{debug, error, info, Instrument};

use super::{
    HomeManagerRegistration, MintAndApproval, RemoteManagerRegistration, TransferParams,
    TransferReceipt, Workflow, WorkflowOutcome,
};
use crate::chain::AxelarChain;
use crate::config::OrchestratorConfig;
use crate::error::Result;
use crate::protocol::{token_manager_params, GasFeeRequest, Salt, TokenManagerType};
use crate::spans;
use crate::traits::{GasEstimator, InterchainToken, InterchainTokenService, SaltSource};

/// Runs the ITS registration and transfer workflows
///
/// Every remote collaborator is injected, so the same orchestrator drives
/// live testnets through the Alloy providers and in-memory fakes under test.
/// Steps within a workflow run strictly in order and stop at the first
/// failure; transactions already included stay on chain.
///
/// # Example
///
/// ```rust,no_run
/// use its_orchestrator::providers::{
///     AlloyInterchainToken, AlloyInterchainTokenService, AxelarscanGasEstimator, OsRandomSalt,
/// };
/// use its_orchestrator::{Orchestrator, OrchestratorConfig, Workflow};
/// use its_orchestrator::{INTERCHAIN_TOKEN_SERVICE_ADDRESS, AVALANCHE_FUJI_TOKEN_ADDRESS, FANTOM_TESTNET_TOKEN_ADDRESS};
/// use alloy_chains::NamedChain;
/// use alloy_provider::ProviderBuilder;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// # let signer = alloy_primitives::Address::ZERO;
/// let home = ProviderBuilder::new().connect("https://avalanche-fuji-c-chain.publicnode.com").await?;
/// let remote = ProviderBuilder::new().connect("https://rpc.ankr.com/fantom_testnet").await?;
///
/// let orchestrator = Orchestrator::builder()
///     .config(OrchestratorConfig::builder().signer(signer).build())
///     .token_service(AlloyInterchainTokenService::new(
///         INTERCHAIN_TOKEN_SERVICE_ADDRESS, home.clone(), NamedChain::AvalancheFuji, signer,
///     ))
///     .home_token(AlloyInterchainToken::new(
///         AVALANCHE_FUJI_TOKEN_ADDRESS, home, NamedChain::AvalancheFuji, signer,
///     ))
///     .remote_token(AlloyInterchainToken::new(
///         FANTOM_TESTNET_TOKEN_ADDRESS, remote, NamedChain::FantomTestnet, signer,
///     ))
///     .gas_estimator(AxelarscanGasEstimator::testnet())
///     .salt_source(OsRandomSalt)
///     .build();
///
/// let outcome = orchestrator.run(Workflow::RegisterHomeManager).await?;
/// println!("{outcome}");
/// # Ok(())
/// # }
/// ```
#[derive(Builder, Debug)]
pub struct Orchestrator<S, H, R, G, Z> {
    config: OrchestratorConfig,
    /// ITS registry on the home chain
    token_service: S,
    home_token: H,
    remote_token: R,
    gas_estimator: G,
    salt_source: Z,
}

impl<S, H, R, G, Z> Orchestrator<S, H, R, G, Z>
where
    S: InterchainTokenService,
    H: InterchainToken,
    R: InterchainToken,
    G: GasEstimator,
    Z: SaltSource,
{
    pub fn config(&self) -> &OrchestratorConfig {
        &self.config
    }

    /// Runs one workflow inside a `its_orchestrator.workflow` span.
    pub async fn run(&self, workflow: Workflow) -> Result<WorkflowOutcome> {
        let selector = workflow.kind().selector();
        let span = spans::workflow(selector, &self.config.home_chain());

        async move {
            info!(selector = selector, event = "workflow_started");

            let result = match workflow {
                Workflow::RegisterHomeManager => self
                    .register_home_manager()
                    .await
                    .map(WorkflowOutcome::HomeManagerRegistered),
                Workflow::MintAndApprove => self
                    .mint_and_approve()
                    .await
                    .map(WorkflowOutcome::MintedAndApproved),
                Workflow::RegisterRemoteManager { salt } => self
                    .register_remote_manager(salt)
                    .await
                    .map(WorkflowOutcome::RemoteManagerRegistered),
                Workflow::Transfer(params) => self
                    .transfer(params)
                    .await
                    .map(WorkflowOutcome::Transferred),
            };

            match &result {
                Ok(_) => info!(selector = selector, event = "workflow_completed"),
                Err(e) => {
                    spans::record_error(e);
                    error!(
                        selector = selector,
                        error = %e,
                        event = "workflow_failed"
                    );
                }
            }

            result
        }
        .instrument(span)
        .await
    }

    /// `deployTokenManagerAndAddAMinter`
    ///
    /// Deploys a LOCK_UNLOCK_FEE token manager for the home token under a
    /// fresh salt, then makes the derived manager a minter of the home token.
    /// The printed salt is the input of [`Self::register_remote_manager`].
    pub async fn register_home_manager(&self) -> Result<HomeManagerRegistration> {
        let salt = self.salt_source.next_salt();
        let signer = self.config.signer();
        let params = token_manager_params(signer, self.home_token.address());
        info!(salt = %salt, event = "home_manager_salt_generated");

        let deploy_tx_hash = self
            .token_service
            .deploy_token_manager(
                salt,
                "",
                TokenManagerType::LockUnlockFee,
                params,
                self.config.deploy_gas_value(),
                U256::ZERO,
            )
            .await?;
        info!(tx_hash = %deploy_tx_hash, event = "home_manager_deployed");

        let token_id = self.token_service.interchain_token_id(signer, salt).await?;
        let token_manager = self.token_service.token_manager_address(token_id).await?;
        info!(
            token_id = %token_id,
            token_manager = %token_manager,
            event = "token_manager_derived"
        );

        let add_minter_tx_hash = self.home_token.add_minter(token_manager).await?;
        info!(tx_hash = %add_minter_tx_hash, event = "home_minter_added");

        Ok(HomeManagerRegistration {
            salt,
            deploy_tx_hash,
            token_id,
            token_manager,
            add_minter_tx_hash,
        })
    }

    /// `mintAndApproveITS`
    ///
    /// Mints the configured amount of home token to the signer and lets the
    /// registry spend exactly that amount.
    pub async fn mint_and_approve(&self) -> Result<MintAndApproval> {
        let amount = self.config.mint_amount();

        let mint_tx_hash = self.home_token.mint(self.config.signer(), amount).await?;
        info!(tx_hash = %mint_tx_hash, amount = %amount, event = "tokens_minted");

        let approve_tx_hash = self
            .home_token
            .approve(self.token_service.address(), amount)
            .await?;
        info!(tx_hash = %approve_tx_hash, amount = %amount, event = "registry_approved");

        Ok(MintAndApproval {
            amount,
            mint_tx_hash,
            approve_tx_hash,
        })
    }

    /// `deployTokenManagerRemotely`
    ///
    /// Deploys a MINT_BURN token manager for the remote token on the remote
    /// chain, reusing the home registration's salt so both managers share one
    /// token id. The relayer fee quote is attached as native value.
    pub async fn register_remote_manager(&self, salt: Salt) -> Result<RemoteManagerRegistration> {
        let signer = self.config.signer();
        let params = token_manager_params(signer, self.remote_token.address());
        let destination = self.config.remote_chain().axelar_chain_name()?;

        let gas_quote = self.estimate_gas().await?;

        let deploy_tx_hash = self
            .token_service
            .deploy_token_manager(
                salt,
                destination,
                TokenManagerType::MintBurn,
                params,
                self.config.deploy_gas_value(),
                gas_quote,
            )
            .await?;
        info!(
            tx_hash = %deploy_tx_hash,
            destination_chain = destination,
            event = "remote_manager_deployed"
        );

        let token_id = self.token_service.interchain_token_id(signer, salt).await?;
        let token_manager = self.token_service.token_manager_address(token_id).await?;
        info!(
            token_id = %token_id,
            token_manager = %token_manager,
            event = "token_manager_derived"
        );

        let add_minter_tx_hash = self.remote_token.add_minter(token_manager).await?;
        info!(tx_hash = %add_minter_tx_hash, event = "remote_minter_added");

        Ok(RemoteManagerRegistration {
            salt,
            gas_quote,
            deploy_tx_hash,
            token_id,
            token_manager,
            add_minter_tx_hash,
        })
    }

    /// `transferTokens`
    ///
    /// Sends an interchain transfer of the registered token to the remote
    /// chain. Success means the home chain included the transfer; delivery is
    /// up to the Axelar relayer.
    pub async fn transfer(&self, params: TransferParams) -> Result<TransferReceipt> {
        let destination = self.config.remote_chain().axelar_chain_name()?;
        let receiver = params
            .receiver()
            .unwrap_or_else(|| self.config.transfer_receiver());
        let amount = params.amount().unwrap_or_else(|| self.config.transfer_amount());
        let fee = params.fee().unwrap_or_else(|| self.config.transfer_fee());
        let token_id = params.token_id();

        let gas_quote = self.estimate_gas().await?;

        let tx_hash = self
            .token_service
            .interchain_transfer(token_id, destination, receiver, amount, fee, gas_quote)
            .await?;
        info!(
            tx_hash = %tx_hash,
            receiver = %receiver,
            amount = %amount,
            event = "transfer_submitted"
        );

        Ok(TransferReceipt {
            token_id,
            receiver,
            amount,
            gas_quote,
            tx_hash,
        })
    }

    /// Quotes the relayer fee for a home to remote call.
    pub async fn estimate_gas(&self) -> Result<U256> {
        let request = GasFeeRequest::builder()
            .source_chain(self.config.home_chain().axelar_api_id()?)
            .destination_chain(self.config.remote_chain().axelar_api_id()?)
            .gas_token(self.config.gas_token())
            .gas_limit(self.config.gas_limit())
            .gas_multiplier(self.config.gas_multiplier())
            .build();
        let span = spans::estimate_gas_fee(&request);

        async {
            match self.gas_estimator.estimate_gas_fee(&request).await {
                Ok(quote) => {
                    debug!(quote = %quote, event = "gas_quote_received");
                    Ok(quote)
                }
                Err(e) => {
                    spans::record_error(&e);
                    error!(error = %e, event = "gas_quote_failed");
                    Err(e)
                }
            }
        }
        .instrument(span)
        .await
    }
}
