use std::process::ExitCode;

use alloy_network::EthereumWallet;
use alloy_provider::ProviderBuilder;
use its_orchestrator::providers::{
    AlloyInterchainToken, AlloyInterchainTokenService, AxelarscanGasEstimator, OsRandomSalt,
    RetryingGasEstimator, TokioClock,
};
use its_orchestrator::{Orchestrator, Result, Settings, WorkflowOutcome};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    match run().await {
        Ok(outcome) => {
            println!("{outcome}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, event = "run_failed");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<WorkflowOutcome> {
    let settings = Settings::from_env()?;
    let workflow = settings.workflow.into_workflow(&settings.inputs)?;
    let signer = settings.signer.address();

    info!(
        selector = %settings.workflow,
        signer = %signer,
        home_chain = %settings.home_chain,
        remote_chain = %settings.remote_chain,
        event = "settings_loaded"
    );

    let wallet = EthereumWallet::from(settings.signer.clone());
    let home = ProviderBuilder::new()
        .wallet(wallet.clone())
        .connect_http(settings.home_rpc_url.clone());
    let remote = ProviderBuilder::new()
        .wallet(wallet)
        .connect_http(settings.remote_rpc_url.clone());

    let gas_estimator = RetryingGasEstimator::new(
        AxelarscanGasEstimator::for_chain(settings.home_chain),
        TokioClock,
        settings.retry,
    );

    let orchestrator = Orchestrator::builder()
        .config(settings.orchestrator_config())
        .token_service(AlloyInterchainTokenService::new(
            settings.its_address,
            home.clone(),
            settings.home_chain,
            signer,
        ))
        .home_token(AlloyInterchainToken::new(
            settings.home_token,
            home,
            settings.home_chain,
            signer,
        ))
        .remote_token(AlloyInterchainToken::new(
            settings.remote_token,
            remote,
            settings.remote_chain,
            signer,
        ))
        .gas_estimator(gas_estimator)
        .salt_source(OsRandomSalt)
        .build();

    orchestrator.run(workflow).await
}
