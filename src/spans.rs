//! Tracing span helpers for ITS orchestration
//!
//! Static span names, structured attributes, and error recording kept apart
//! from the workflow logic.
//!
//! # Example
//!
//! ```rust,no_run
//! use its_orchestrator::spans;
//! use alloy_chains::NamedChain;
//!
//! let span = spans::workflow("deployTokenManagerAndAddAMinter", &NamedChain::AvalancheFuji);
//! let _guard = span.enter();
//! // Your custom orchestration here
//! ```

use alloy_chains::NamedChain;
use alloy_primitives::{Address, TxHash, U256};
use tracing::Span;

use crate::protocol::{GasFeeRequest, Salt, TokenId, TokenManagerType};

/// Create span for one workflow run.
///
/// Parent: None (process root)
/// Children: every remote call the workflow makes
#[inline]
pub fn workflow(selector: &str, home_chain: &NamedChain) -> Span {
    tracing::info_span!(
        "its_orchestrator.workflow",
        selector = selector,
        home_chain = %home_chain,
        error.type = tracing::field::Empty,
        error.message = tracing::field::Empty,
        error.context = tracing::field::Empty,
        otel.status_code = "OK",
    )
}

/// Create span for token manager deployment transaction creation.
///
/// Parent: its_orchestrator.workflow
#[inline]
pub fn deploy_token_manager(
    salt: &Salt,
    destination_chain: &str,
    manager_type: TokenManagerType,
) -> Span {
    tracing::info_span!(
        "its_orchestrator.deploy_token_manager",
        salt = %salt,
        destination_chain = destination_chain,
        manager_type = manager_type.name(),
    )
}

/// Create span for interchain transfer transaction creation.
///
/// Parent: its_orchestrator.workflow
#[inline]
pub fn interchain_transfer(
    token_id: &TokenId,
    destination_chain: &str,
    receiver: &Address,
    amount: &U256,
) -> Span {
    tracing::info_span!(
        "its_orchestrator.interchain_transfer",
        token_id = %token_id,
        destination_chain = destination_chain,
        receiver = %receiver,
        amount = %amount,
    )
}

/// Create span for a gas fee quote, including all retry attempts.
///
/// Parent: its_orchestrator.workflow
/// Children: its_orchestrator.http_request
#[inline]
pub fn estimate_gas_fee(request: &GasFeeRequest) -> Span {
    tracing::info_span!(
        "its_orchestrator.estimate_gas_fee",
        source_chain = request.source_chain(),
        destination_chain = request.destination_chain(),
        gas_token = %request.gas_token(),
        gas_limit = request.gas_limit(),
        gas_multiplier = request.gas_multiplier(),
        error.type = tracing::field::Empty,
        error.message = tracing::field::Empty,
        error.context = tracing::field::Empty,
        otel.status_code = "OK",
    )
}

/// Create span for sending a transaction and waiting for its receipt.
///
/// Parent: its_orchestrator.workflow
/// Children: Provider RPC calls
#[inline]
pub fn send_transaction(operation: &str, chain: &NamedChain) -> Span {
    tracing::debug_span!(
        "its_orchestrator.send_transaction",
        operation = operation,
        chain = %chain,
        tx_hash = tracing::field::Empty,
        error.type = tracing::field::Empty,
        error.message = tracing::field::Empty,
        error.context = tracing::field::Empty,
        otel.status_code = "OK",
    )
}

/// Create span for waiting for transaction inclusion.
///
/// Parent: its_orchestrator.send_transaction
#[inline]
pub fn wait_for_receipt(tx_hash: TxHash, chain: &NamedChain) -> Span {
    tracing::debug_span!(
        "its_orchestrator.wait_for_receipt",
        tx_hash = %tx_hash,
        chain = %chain,
    )
}

/// Create span for HTTP request to the Axelarscan API.
///
/// Parent: its_orchestrator.estimate_gas_fee
#[inline]
pub fn http_request(method: &str, url: &str) -> Span {
    tracing::trace_span!(
        "its_orchestrator.http_request",
        http.method = method,
        http.url = url,
    )
}

/// Record error attributes on the current span.
///
/// Follows OpenTelemetry semantic conventions for error tracking.
pub fn record_error<E: std::error::Error>(error: &E) {
    let current_span = tracing::Span::current();
    current_span.record(
        "error.type",
        error.to_string().split(':').next().unwrap_or("Unknown"),
    );
    current_span.record("error.message", error.to_string());
    current_span.record("otel.status_code", "ERROR");

    if let Some(source) = error.source() {
        current_span.record("error.context", source.to_string());
    }
}

/// Record error attributes with custom context on the current span.
///
/// # Example
///
/// ```rust,no_run
/// use its_orchestrator::spans;
///
/// # fn example() {
/// let span = tracing::info_span!("its_orchestrator.operation");
/// let _guard = span.enter();
///
/// if let Err(e) = some_operation() {
///     spans::record_error_with_context(
///         "TransactionFailed",
///         &format!("Failed to submit transaction: {}", e),
///         Some("Earlier transactions of this workflow stay on chain"),
///     );
/// }
/// # }
/// # fn some_operation() -> Result<(), String> { Ok(()) }
/// ```
pub fn record_error_with_context(
    error_type: &str,
    error_message: &str,
    additional_context: Option<&str>,
) {
    let current_span = tracing::Span::current();
    current_span.record("error.type", error_type);
    current_span.record("error.message", error_message);
    current_span.record("otel.status_code", "ERROR");

    if let Some(context) = additional_context {
        current_span.record("error.context", context);
    }
}
