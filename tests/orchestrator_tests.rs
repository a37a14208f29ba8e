//! Integration tests for the ITS workflows using fake implementations
//!
//! Every remote collaborator is a fake sharing one call log, so each test can
//! assert exactly which remote calls a workflow made and in which order.

use alloy_primitives::{address, b256, uint, Address, U256};
use its_orchestrator::providers::RetryingGasEstimator;
use its_orchestrator::testing::{
    derive_token_id, derive_token_manager, CallLog, FakeClock, FakeGasEstimator,
    FakeInterchainToken, FakeInterchainTokenService, FixedSaltSource, RemoteCall,
};
use its_orchestrator::{
    token_manager_params, GasEstimator, GasFeeRequest, GasToken, ItsError, Orchestrator,
    OrchestratorConfig, RetryConfig, Salt, TokenManagerType, TransferParams, Workflow,
    WorkflowInputs, WorkflowKind, WorkflowOutcome, AVALANCHE_FUJI_TOKEN_ADDRESS,
    DEFAULT_DEPLOY_GAS_VALUE, DEFAULT_TRANSFER_FEE, DEFAULT_TRANSFER_RECEIVER,
    FANTOM_TESTNET_TOKEN_ADDRESS, INTERCHAIN_TOKEN_SERVICE_ADDRESS,
};
use std::time::Duration;

const SIGNER: Address = address!("f39Fd6e51aad88F6F4ce6aB8827279cffFb92266");
const QUOTE: U256 = uint!(7130219571282760_U256);

const SALT: Salt = Salt::new(b256!(
    "8bfe80fc2d5d11189f70516a0630de94ebd059fbeeb704f8b2a4d7be006f5733"
));
const OTHER_SALT: Salt = Salt::new(b256!(
    "00000000000000000000000000000000000000000000000000000000000000aa"
));

type TestOrchestrator = Orchestrator<
    FakeInterchainTokenService,
    FakeInterchainToken,
    FakeInterchainToken,
    FakeGasEstimator,
    FixedSaltSource,
>;

/// Fakes behind one orchestrator, all recording into `log`
struct Harness {
    log: CallLog,
    its: FakeInterchainTokenService,
    home_token: FakeInterchainToken,
    gas: FakeGasEstimator,
    orchestrator: TestOrchestrator,
}

/// Helper function to create an orchestrator over fresh fakes
fn create_test_harness(salt: Salt) -> Harness {
    let log = CallLog::new();
    let its = FakeInterchainTokenService::new(INTERCHAIN_TOKEN_SERVICE_ADDRESS, log.clone());
    let home_token = FakeInterchainToken::new(AVALANCHE_FUJI_TOKEN_ADDRESS, log.clone());
    let remote_token = FakeInterchainToken::new(FANTOM_TESTNET_TOKEN_ADDRESS, log.clone());
    let gas = FakeGasEstimator::new(QUOTE, log.clone());

    let orchestrator = Orchestrator::builder()
        .config(OrchestratorConfig::builder().signer(SIGNER).build())
        .token_service(its.clone())
        .home_token(home_token.clone())
        .remote_token(remote_token)
        .gas_estimator(gas.clone())
        .salt_source(FixedSaltSource(salt))
        .build();

    Harness {
        log,
        its,
        home_token,
        gas,
        orchestrator,
    }
}

fn expected_gas_request() -> GasFeeRequest {
    GasFeeRequest::builder()
        .source_chain("avalanche")
        .destination_chain("fantom")
        .gas_token(GasToken::Eth)
        .gas_limit(700_000)
        .gas_multiplier(1.1)
        .build()
}

#[tokio::test]
async fn test_home_registration_runs_steps_in_order() {
    let harness = create_test_harness(SALT);

    let outcome = harness
        .orchestrator
        .register_home_manager()
        .await
        .unwrap();

    assert_eq!(
        harness.log.names(),
        [
            "deployTokenManager",
            "interchainTokenId",
            "tokenManagerAddress",
            "addMinter"
        ]
    );

    let calls = harness.log.calls();
    assert_eq!(
        calls[0],
        RemoteCall::DeployTokenManager {
            salt: SALT,
            destination_chain: String::new(),
            manager_type: TokenManagerType::LockUnlockFee,
            params: token_manager_params(SIGNER, AVALANCHE_FUJI_TOKEN_ADDRESS),
            gas_value: DEFAULT_DEPLOY_GAS_VALUE,
            attached_value: U256::ZERO,
        }
    );

    let token_id = derive_token_id(SIGNER, SALT);
    assert_eq!(
        calls[3],
        RemoteCall::AddMinter {
            token: AVALANCHE_FUJI_TOKEN_ADDRESS,
            minter: derive_token_manager(token_id),
        }
    );

    assert_eq!(outcome.salt, SALT);
    assert_eq!(outcome.token_id, token_id);
    assert_eq!(outcome.token_manager, derive_token_manager(token_id));
}

#[tokio::test]
async fn test_remote_registration_shares_token_identity() {
    let home = create_test_harness(SALT);
    let registered = home.orchestrator.register_home_manager().await.unwrap();

    // Fresh fakes: a second registry instance must derive the same values
    let remote = create_test_harness(OTHER_SALT);
    let outcome = remote
        .orchestrator
        .register_remote_manager(registered.salt)
        .await
        .unwrap();

    assert_eq!(outcome.token_id, registered.token_id);
    assert_eq!(outcome.token_manager, registered.token_manager);
    assert_eq!(outcome.gas_quote, QUOTE);

    assert_eq!(
        remote.log.names(),
        [
            "estimateGasFee",
            "deployTokenManager",
            "interchainTokenId",
            "tokenManagerAddress",
            "addMinter"
        ]
    );

    let calls = remote.log.calls();
    assert_eq!(calls[0], RemoteCall::EstimateGasFee(expected_gas_request()));
    assert_eq!(
        calls[1],
        RemoteCall::DeployTokenManager {
            salt: SALT,
            destination_chain: "Fantom".to_string(),
            manager_type: TokenManagerType::MintBurn,
            params: token_manager_params(SIGNER, FANTOM_TESTNET_TOKEN_ADDRESS),
            gas_value: DEFAULT_DEPLOY_GAS_VALUE,
            attached_value: QUOTE,
        }
    );
    assert_eq!(
        calls[4],
        RemoteCall::AddMinter {
            token: FANTOM_TESTNET_TOKEN_ADDRESS,
            minter: registered.token_manager,
        }
    );
}

#[tokio::test]
async fn test_mint_and_approve_makes_exactly_two_calls() {
    let harness = create_test_harness(SALT);
    let thousand = uint!(1000000000000000000000_U256);

    let outcome = harness.orchestrator.mint_and_approve().await.unwrap();

    assert_eq!(
        harness.log.calls(),
        [
            RemoteCall::Mint {
                token: AVALANCHE_FUJI_TOKEN_ADDRESS,
                to: SIGNER,
                amount: thousand,
            },
            RemoteCall::Approve {
                token: AVALANCHE_FUJI_TOKEN_ADDRESS,
                spender: INTERCHAIN_TOKEN_SERVICE_ADDRESS,
                amount: thousand,
            },
        ]
    );
    assert_eq!(outcome.amount, thousand);
    assert_ne!(outcome.mint_tx_hash, outcome.approve_tx_hash);
}

#[tokio::test]
async fn test_transfer_attaches_gas_quote() {
    let harness = create_test_harness(SALT);
    let token_id = derive_token_id(SIGNER, SALT);
    let params = TransferParams::builder().token_id(token_id).build();

    let receipt = harness.orchestrator.transfer(params).await.unwrap();

    assert_eq!(
        harness.log.calls(),
        [
            RemoteCall::EstimateGasFee(expected_gas_request()),
            RemoteCall::InterchainTransfer {
                token_id,
                destination_chain: "Fantom".to_string(),
                receiver: DEFAULT_TRANSFER_RECEIVER,
                amount: uint!(500000000000000000000_U256),
                gas_value: DEFAULT_TRANSFER_FEE,
                attached_value: QUOTE,
            },
        ]
    );
    assert_eq!(receipt.gas_quote, QUOTE);
    assert_eq!(receipt.receiver, DEFAULT_TRANSFER_RECEIVER);
}

#[tokio::test]
async fn test_transfer_params_override_defaults() {
    let harness = create_test_harness(SALT);
    let receiver = address!("70997970C51812dc3A010C7d01b50e0d17dc79C8");
    let params = TransferParams::builder()
        .token_id(derive_token_id(SIGNER, SALT))
        .receiver(receiver)
        .amount(U256::from(5))
        .fee(U256::from(1))
        .build();

    harness.orchestrator.transfer(params).await.unwrap();

    match &harness.log.calls()[1] {
        RemoteCall::InterchainTransfer {
            receiver: sent_to,
            amount,
            gas_value,
            ..
        } => {
            assert_eq!(*sent_to, receiver);
            assert_eq!(*amount, U256::from(5));
            assert_eq!(*gas_value, U256::from(1));
        }
        other => panic!("expected interchainTransfer, got {other:?}"),
    }
}

#[tokio::test]
async fn test_injected_salt_flows_into_deployment() {
    let first = create_test_harness(SALT);
    let second = create_test_harness(OTHER_SALT);

    let a = first.orchestrator.register_home_manager().await.unwrap();
    let b = second.orchestrator.register_home_manager().await.unwrap();

    assert_eq!(a.salt, SALT);
    assert_eq!(b.salt, OTHER_SALT);
    assert_ne!(a.token_id, b.token_id);
    assert!(matches!(
        &second.log.calls()[0],
        RemoteCall::DeployTokenManager { salt, .. } if *salt == OTHER_SALT
    ));
}

#[tokio::test]
async fn test_failed_deployment_stops_workflow() {
    let harness = create_test_harness(SALT);
    harness.its.fail_on("deployTokenManager");

    let result = harness
        .orchestrator
        .run(Workflow::RegisterHomeManager)
        .await;

    assert!(matches!(result, Err(ItsError::TransactionFailed { .. })));
    assert_eq!(harness.log.names(), ["deployTokenManager"]);
}

#[tokio::test]
async fn test_failed_mint_skips_approval() {
    let harness = create_test_harness(SALT);
    harness.home_token.fail_on("mint");

    let result = harness.orchestrator.mint_and_approve().await;

    assert!(result.is_err());
    assert_eq!(harness.log.names(), ["mint"]);
}

#[tokio::test]
async fn test_gas_quote_failure_precedes_any_transaction() {
    let harness = create_test_harness(SALT);
    harness.gas.fail_times(1);

    let result = harness.orchestrator.register_remote_manager(SALT).await;

    assert!(matches!(result, Err(ItsError::GasEstimation { .. })));
    assert_eq!(harness.log.names(), ["estimateGasFee"]);
}

#[tokio::test]
async fn test_run_dispatches_to_selected_workflow() {
    let harness = create_test_harness(SALT);
    let workflow = WorkflowKind::MintAndApprove
        .into_workflow(&WorkflowInputs::default())
        .unwrap();

    let outcome = harness.orchestrator.run(workflow).await.unwrap();

    assert!(matches!(outcome, WorkflowOutcome::MintedAndApproved(_)));
    assert_eq!(harness.log.names(), ["mint", "approve"]);
}

#[tokio::test]
async fn test_contract_addresses_come_from_collaborators() {
    let registry = address!("aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa");
    let token = address!("bbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb");
    let log = CallLog::new();

    let orchestrator = Orchestrator::builder()
        .config(OrchestratorConfig::builder().signer(SIGNER).build())
        .token_service(FakeInterchainTokenService::new(registry, log.clone()))
        .home_token(FakeInterchainToken::new(token, log.clone()))
        .remote_token(FakeInterchainToken::new(
            FANTOM_TESTNET_TOKEN_ADDRESS,
            log.clone(),
        ))
        .gas_estimator(FakeGasEstimator::new(QUOTE, log.clone()))
        .salt_source(FixedSaltSource(SALT))
        .build();

    orchestrator.mint_and_approve().await.unwrap();
    orchestrator.register_home_manager().await.unwrap();

    let calls = log.calls();
    assert!(matches!(
        &calls[0],
        RemoteCall::Mint { token: minted, .. } if *minted == token
    ));
    assert!(matches!(
        &calls[1],
        RemoteCall::Approve { token: approved, spender, .. }
            if *approved == token && *spender == registry
    ));
    assert!(matches!(
        &calls[2],
        RemoteCall::DeployTokenManager { params, .. }
            if *params == token_manager_params(SIGNER, token)
    ));
}

#[tokio::test]
async fn test_retrying_estimator_recovers_with_fake_clock() {
    let log = CallLog::new();
    let inner = FakeGasEstimator::new(QUOTE, log.clone());
    inner.fail_times(2);
    let clock = FakeClock::new();
    let config = RetryConfig::default()
        .with_max_attempts(3)
        .with_backoff_secs(5);
    let estimator = RetryingGasEstimator::new(inner, clock.clone(), config);

    let quote = estimator
        .estimate_gas_fee(&expected_gas_request())
        .await
        .unwrap();

    assert_eq!(quote, QUOTE);
    assert_eq!(log.len(), 3);
    assert_eq!(clock.sleep_count(), 2);
    assert_eq!(clock.total_sleep_time(), Duration::from_secs(10));
}

#[tokio::test]
async fn test_retrying_estimator_gives_up_after_max_attempts() {
    let log = CallLog::new();
    let inner = FakeGasEstimator::new(QUOTE, log.clone());
    inner.fail_times(10);
    let clock = FakeClock::new();
    let config = RetryConfig::default().with_max_attempts(3);
    let estimator = RetryingGasEstimator::new(inner, clock.clone(), config);

    let result = estimator.estimate_gas_fee(&expected_gas_request()).await;

    assert!(matches!(result, Err(ItsError::GasEstimation { .. })));
    assert_eq!(log.len(), 3);
    assert_eq!(clock.sleep_count(), 2);
}

#[tokio::test]
async fn test_default_retry_is_single_attempt() {
    let log = CallLog::new();
    let inner = FakeGasEstimator::new(QUOTE, log.clone());
    inner.fail_times(1);
    let clock = FakeClock::new();
    let estimator = RetryingGasEstimator::new(inner, clock.clone(), RetryConfig::default());

    assert!(estimator
        .estimate_gas_fee(&expected_gas_request())
        .await
        .is_err());
    assert_eq!(log.len(), 1);
    assert_eq!(clock.sleep_count(), 0);
}
