//! Chain configuration and contract addresses
//!
//! Axelar chain naming, default RPC endpoints and the deployed contract
//! addresses used by the orchestration workflows.

pub mod addresses;
mod axelar;

pub use axelar::{AxelarChain, AXELARSCAN_API, AXELARSCAN_API_TESTNET};
