//! Interchain Token Service protocol types
//!
//! Core protocol-level values exchanged with the ITS registry and the Axelar
//! gas-estimation API: token manager types, salts, token ids and gas quotes.

mod gas;
mod salt;
mod token_manager_type;

pub use gas::{GasFeeRequest, GasToken};
pub use salt::{token_manager_params, Salt, TokenId};
pub use token_manager_type::{InvalidTokenManagerType, TokenManagerType};
