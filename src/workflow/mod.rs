//! Workflow selection and results
//!
//! A run executes exactly one [`Workflow`]. The operator picks it with a
//! selector string ([`WorkflowKind`]); identifiers carried over from earlier
//! runs (salt, token id) are explicit inputs of the workflows that need them.

mod orchestrator;

use std::fmt;
use std::str::FromStr;

use alloy_primitives::{Address, TxHash, U256};
use bon::Builder;

use crate::error::{ItsError, Result};
use crate::protocol::{Salt, TokenId};

pub use orchestrator::Orchestrator;

/// The four workflows, named by their selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkflowKind {
    /// `deployTokenManagerAndAddAMinter`
    RegisterHomeManager,
    /// `mintAndApproveITS`
    MintAndApprove,
    /// `deployTokenManagerRemotely`
    RegisterRemoteManager,
    /// `transferTokens`
    Transfer,
}

impl WorkflowKind {
    pub const ALL: [WorkflowKind; 4] = [
        Self::RegisterHomeManager,
        Self::MintAndApprove,
        Self::RegisterRemoteManager,
        Self::Transfer,
    ];

    pub const fn selector(self) -> &'static str {
        match self {
            Self::RegisterHomeManager => "deployTokenManagerAndAddAMinter",
            Self::MintAndApprove => "mintAndApproveITS",
            Self::RegisterRemoteManager => "deployTokenManagerRemotely",
            Self::Transfer => "transferTokens",
        }
    }

    /// Attaches the inputs the workflow needs.
    ///
    /// # Errors
    ///
    /// `InvalidConfig` if the remote deployment has no salt or the transfer
    /// has no token id.
    pub fn into_workflow(self, inputs: &WorkflowInputs) -> Result<Workflow> {
        Ok(match self {
            Self::RegisterHomeManager => Workflow::RegisterHomeManager,
            Self::MintAndApprove => Workflow::MintAndApprove,
            Self::RegisterRemoteManager => {
                let salt = inputs.salt.ok_or_else(|| {
                    ItsError::InvalidConfig(
                        "SALT is required: use the salt printed by deployTokenManagerAndAddAMinter"
                            .to_string(),
                    )
                })?;
                Workflow::RegisterRemoteManager { salt }
            }
            Self::Transfer => {
                let token_id = inputs.token_id.ok_or_else(|| {
                    ItsError::InvalidConfig(
                        "TOKEN_ID is required: use the token id printed by deployTokenManagerAndAddAMinter"
                            .to_string(),
                    )
                })?;
                let params = TransferParams::builder()
                    .token_id(token_id)
                    .maybe_receiver(inputs.receiver)
                    .build();
                Workflow::Transfer(params)
            }
        })
    }
}

impl FromStr for WorkflowKind {
    type Err = ItsError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.selector() == s)
            .ok_or_else(|| ItsError::UnknownWorkflow(s.to_string()))
    }
}

impl fmt::Display for WorkflowKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.selector())
    }
}

/// Identifiers an operator carries from one run to the next
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkflowInputs {
    pub salt: Option<Salt>,
    pub token_id: Option<TokenId>,
    pub receiver: Option<Address>,
}

/// Parameters of an interchain transfer
///
/// Fields left unset fall back to the orchestrator configuration.
#[derive(Builder, Debug, Clone, PartialEq, Eq)]
pub struct TransferParams {
    token_id: TokenId,
    receiver: Option<Address>,
    amount: Option<U256>,
    fee: Option<U256>,
}

impl TransferParams {
    pub fn token_id(&self) -> TokenId {
        self.token_id
    }

    pub fn receiver(&self) -> Option<Address> {
        self.receiver
    }

    pub fn amount(&self) -> Option<U256> {
        self.amount
    }

    pub fn fee(&self) -> Option<U256> {
        self.fee
    }
}

/// One fully parameterised workflow
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Workflow {
    RegisterHomeManager,
    MintAndApprove,
    RegisterRemoteManager { salt: Salt },
    Transfer(TransferParams),
}

impl Workflow {
    pub fn kind(&self) -> WorkflowKind {
        match self {
            Self::RegisterHomeManager => WorkflowKind::RegisterHomeManager,
            Self::MintAndApprove => WorkflowKind::MintAndApprove,
            Self::RegisterRemoteManager { .. } => WorkflowKind::RegisterRemoteManager,
            Self::Transfer(_) => WorkflowKind::Transfer,
        }
    }
}

/// Result of `deployTokenManagerAndAddAMinter`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeManagerRegistration {
    pub salt: Salt,
    pub deploy_tx_hash: TxHash,
    pub token_id: TokenId,
    pub token_manager: Address,
    pub add_minter_tx_hash: TxHash,
}

impl fmt::Display for HomeManagerRegistration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Salt: {}", self.salt)?;
        writeln!(f, "Transaction Hash: {}", self.deploy_tx_hash)?;
        writeln!(f, "Token ID: {}", self.token_id)?;
        write!(f, "Expected Token Manager Address: {}", self.token_manager)
    }
}

/// Result of `mintAndApproveITS`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MintAndApproval {
    pub amount: U256,
    pub mint_tx_hash: TxHash,
    pub approve_tx_hash: TxHash,
}

impl fmt::Display for MintAndApproval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Minting and Approving ITS successful!")?;
        writeln!(f, "Mint Transaction Hash: {}", self.mint_tx_hash)?;
        write!(f, "Approve Transaction Hash: {}", self.approve_tx_hash)
    }
}

/// Result of `deployTokenManagerRemotely`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteManagerRegistration {
    pub salt: Salt,
    pub gas_quote: U256,
    pub deploy_tx_hash: TxHash,
    pub token_id: TokenId,
    pub token_manager: Address,
    pub add_minter_tx_hash: TxHash,
}

impl fmt::Display for RemoteManagerRegistration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Transaction Hash: {}", self.deploy_tx_hash)?;
        writeln!(f, "Token ID: {}", self.token_id)?;
        write!(f, "Expected Token Manager Address: {}", self.token_manager)
    }
}

/// Result of `transferTokens`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferReceipt {
    pub token_id: TokenId,
    pub receiver: Address,
    pub amount: U256,
    pub gas_quote: U256,
    pub tx_hash: TxHash,
}

impl fmt::Display for TransferReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Transfer Transaction Hash: {}", self.tx_hash)
    }
}

/// Result of any workflow
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkflowOutcome {
    HomeManagerRegistered(HomeManagerRegistration),
    MintedAndApproved(MintAndApproval),
    RemoteManagerRegistered(RemoteManagerRegistration),
    Transferred(TransferReceipt),
}

impl fmt::Display for WorkflowOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HomeManagerRegistered(outcome) => outcome.fmt(f),
            Self::MintedAndApproved(outcome) => outcome.fmt(f),
            Self::RemoteManagerRegistered(outcome) => outcome.fmt(f),
            Self::Transferred(outcome) => outcome.fmt(f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::{address, b256};
    use rstest::rstest;

    #[rstest]
    #[case("deployTokenManagerAndAddAMinter", WorkflowKind::RegisterHomeManager)]
    #[case("mintAndApproveITS", WorkflowKind::MintAndApprove)]
    #[case("deployTokenManagerRemotely", WorkflowKind::RegisterRemoteManager)]
    #[case("transferTokens", WorkflowKind::Transfer)]
    fn test_selector_parse(#[case] selector: &str, #[case] kind: WorkflowKind) {
        assert_eq!(selector.parse::<WorkflowKind>().unwrap(), kind);
        assert_eq!(kind.to_string(), selector);
    }

    #[rstest]
    #[case("")]
    #[case("transfer")]
    #[case("TRANSFERTOKENS")]
    #[case("deployTokenManager")]
    #[case(" transferTokens ")]
    fn test_unknown_selector(#[case] selector: &str) {
        let err = selector.parse::<WorkflowKind>().unwrap_err();
        assert!(matches!(err, ItsError::UnknownWorkflow(ref s) if s == selector));
    }

    #[test]
    fn test_remote_deployment_requires_salt() {
        let err = WorkflowKind::RegisterRemoteManager
            .into_workflow(&WorkflowInputs::default())
            .unwrap_err();
        assert!(matches!(err, ItsError::InvalidConfig(_)));
    }

    #[test]
    fn test_transfer_requires_token_id() {
        let err = WorkflowKind::Transfer
            .into_workflow(&WorkflowInputs::default())
            .unwrap_err();
        assert!(matches!(err, ItsError::InvalidConfig(_)));
    }

    #[test]
    fn test_inputs_flow_into_workflow() {
        let salt = Salt::new(b256!(
            "8bfe80fc2d5d11189f70516a0630de94ebd059fbeeb704f8b2a4d7be006f5733"
        ));
        let token_id = TokenId::new(b256!(
            "07256ce1daceb2ddcbc08981a93222637c6612f190c487362d161ad0a0a4df35"
        ));
        let receiver = address!("510e5EA32386B7C48C4DEEAC80e86859b5e2416C");
        let inputs = WorkflowInputs {
            salt: Some(salt),
            token_id: Some(token_id),
            receiver: Some(receiver),
        };

        assert_eq!(
            WorkflowKind::RegisterRemoteManager
                .into_workflow(&inputs)
                .unwrap(),
            Workflow::RegisterRemoteManager { salt }
        );

        let Workflow::Transfer(params) = WorkflowKind::Transfer.into_workflow(&inputs).unwrap()
        else {
            panic!("expected a transfer workflow");
        };
        assert_eq!(params.token_id(), token_id);
        assert_eq!(params.receiver(), Some(receiver));
        assert_eq!(params.amount(), None);

        for kind in WorkflowKind::ALL {
            assert_eq!(kind.into_workflow(&inputs).unwrap().kind(), kind);
        }
    }

    #[test]
    fn test_home_registration_display() {
        let outcome = WorkflowOutcome::HomeManagerRegistered(HomeManagerRegistration {
            salt: Salt::new(b256!(
                "8bfe80fc2d5d11189f70516a0630de94ebd059fbeeb704f8b2a4d7be006f5733"
            )),
            deploy_tx_hash: b256!(
                "d29816f74ee4429afb24de81b65a0e805b2c350a2f5aaac342395b54a6161b46"
            ),
            token_id: TokenId::new(b256!(
                "07256ce1daceb2ddcbc08981a93222637c6612f190c487362d161ad0a0a4df35"
            )),
            token_manager: address!("3Ee3737C61788bb7d8D630611175EEC1F02F29c0"),
            add_minter_tx_hash: TxHash::ZERO,
        });

        insta::assert_snapshot!(outcome.to_string(), @r"
        Salt: 0x8bfe80fc2d5d11189f70516a0630de94ebd059fbeeb704f8b2a4d7be006f5733
        Transaction Hash: 0xd29816f74ee4429afb24de81b65a0e805b2c350a2f5aaac342395b54a6161b46
        Token ID: 0x07256ce1daceb2ddcbc08981a93222637c6612f190c487362d161ad0a0a4df35
        Expected Token Manager Address: 0x3Ee3737C61788bb7d8D630611175EEC1F02F29c0
        ");
    }
}
