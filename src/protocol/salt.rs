//! Deterministic token identity inputs
//!
//! A [`Salt`] chosen by the deployer, together with the deployer address,
//! determines the [`TokenId`] computed by the registry. The same salt must be
//! reused on every chain that should share the token identity.

use std::fmt;
use std::str::FromStr;

use alloy_primitives::{hex::FromHexError, Address, Bytes, B256};
use alloy_sol_types::SolValue;

/// 32-byte deployment salt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Salt(B256);

impl Salt {
    pub const fn new(bytes: B256) -> Self {
        Self(bytes)
    }

    /// Draws a fresh salt from the operating system RNG.
    pub fn random() -> Self {
        Self(B256::random())
    }

    pub const fn as_b256(&self) -> B256 {
        self.0
    }
}

impl From<B256> for Salt {
    fn from(bytes: B256) -> Self {
        Self(bytes)
    }
}

impl FromStr for Salt {
    type Err = FromHexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        B256::from_str(s.trim()).map(Self)
    }
}

impl fmt::Display for Salt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Interchain token identifier derived by the registry from (deployer, salt)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TokenId(B256);

impl TokenId {
    pub const fn new(bytes: B256) -> Self {
        Self(bytes)
    }

    pub const fn as_b256(&self) -> B256 {
        self.0
    }
}

impl From<B256> for TokenId {
    fn from(bytes: B256) -> Self {
        Self(bytes)
    }
}

impl FromStr for TokenId {
    type Err = FromHexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        B256::from_str(s.trim()).map(Self)
    }
}

impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// ABI-encodes the token manager construction params `(bytes operator, address token)`.
///
/// The operator is passed as the raw 20 address bytes, matching what the
/// token manager expects for an EVM operator.
pub fn token_manager_params(operator: Address, token: Address) -> Bytes {
    let operator = Bytes::copy_from_slice(operator.as_slice());
    (operator, token).abi_encode_params().into()
}
