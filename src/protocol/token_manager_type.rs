//! Token manager custody modes
//!
//! The Interchain Token Service deploys one token manager per token identity
//! and chain. The manager type decides whether tokens are custodied (lock/unlock)
//! or minted and burned on that chain. Values are fixed protocol constants.

use std::fmt;

/// Custody model of an ITS token manager
///
/// # Example
///
/// ```rust
/// use its_orchestrator::TokenManagerType;
///
/// assert_eq!(TokenManagerType::LockUnlockFee.as_u8(), 3);
/// assert_eq!(TokenManagerType::MintBurn.as_u8(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TokenManagerType {
    /// Token deployed by ITS itself (0)
    NativeInterchainToken = 0,
    /// Mint/burn using `burnFrom` and an allowance (1)
    MintBurnFrom = 1,
    /// Lock/unlock custody (2)
    LockUnlock = 2,
    /// Lock/unlock custody for fee-on-transfer tokens (3)
    LockUnlockFee = 3,
    /// Mint/burn with the manager registered as minter (4)
    MintBurn = 4,
}

impl TokenManagerType {
    #[inline]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    #[inline]
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::NativeInterchainToken),
            1 => Some(Self::MintBurnFrom),
            2 => Some(Self::LockUnlock),
            3 => Some(Self::LockUnlockFee),
            4 => Some(Self::MintBurn),
            _ => None,
        }
    }

    /// Protocol name of the manager type, as used in the Solidity enum
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Self::NativeInterchainToken => "NATIVE_INTERCHAIN_TOKEN",
            Self::MintBurnFrom => "MINT_BURN_FROM",
            Self::LockUnlock => "LOCK_UNLOCK",
            Self::LockUnlockFee => "LOCK_UNLOCK_FEE",
            Self::MintBurn => "MINT_BURN",
        }
    }
}

impl From<TokenManagerType> for u8 {
    #[inline]
    fn from(value: TokenManagerType) -> Self {
        value.as_u8()
    }
}

impl TryFrom<u8> for TokenManagerType {
    type Error = InvalidTokenManagerType;

    #[inline]
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_u8(value).ok_or(InvalidTokenManagerType(value))
    }
}

impl fmt::Display for TokenManagerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.as_u8())
    }
}

/// Error returned when a u8 does not name a token manager type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidTokenManagerType(pub u8);

impl fmt::Display for InvalidTokenManagerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid token manager type: {}", self.0)
    }
}

impl std::error::Error for InvalidTokenManagerType {}
