//! Interchain Token Service contract bindings
//!
//! Alloy-generated bindings and instrumented wrappers for the two contracts the
//! workflows drive:
//!
//! - [`InterchainTokenServiceContract`](interchain_token_service::InterchainTokenServiceContract):
//!   the registry deploying token managers, deriving identities and relaying transfers
//! - [`InterchainTokenContract`](interchain_token::InterchainTokenContract):
//!   the mintable token registered with a token manager

pub mod interchain_token;
pub mod interchain_token_service;
