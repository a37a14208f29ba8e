use thiserror::Error;

#[derive(Error, Debug)]
pub enum ItsError {
    #[error("Chain not supported: {chain}")]
    ChainNotSupported { chain: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Contract call failed: {0}")]
    ContractCall(String),

    #[error("Transaction failed: {reason}")]
    TransactionFailed { reason: String },

    #[error("Pending transaction error: {0}")]
    PendingTransaction(#[from] alloy_provider::PendingTransactionError),

    #[error("Gas estimation failed: {reason}")]
    GasEstimation { reason: String },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Unknown function: {0}")]
    UnknownWorkflow(String),

    #[error("RPC error: {0}")]
    Rpc(#[from] alloy_json_rpc::RpcError<alloy_transport::TransportErrorKind>),
}

pub type Result<T> = std::result::Result<T, ItsError>;
