// SPDX-License-Identifier: Apache-2.0
//! Deployed contract addresses
//!
//! The Interchain Token Service proxy shares one address on every EVM chain.
//! Token addresses are the test tokens deployed on Avalanche Fuji and Fantom
//! testnet for the home/remote pair.

use alloy_primitives::{address, Address};

/// <https://docs.axelar.dev/dev/reference/testnet-contract-addresses>
pub const INTERCHAIN_TOKEN_SERVICE_ADDRESS: Address =
    address!("B5FB4BE02232B1bBA4dC8f81dc24C26980dE9e3C");

/// <https://testnet.snowtrace.io/address/0x255bDEBE3E43F3A20A164b25b257Fe2f8b259f91>
pub const AVALANCHE_FUJI_TOKEN_ADDRESS: Address =
    address!("255bDEBE3E43F3A20A164b25b257Fe2f8b259f91");

/// <https://testnet.ftmscan.com/address/0x76223E78d80807FB1BDA0086bce605497B442d64>
pub const FANTOM_TESTNET_TOKEN_ADDRESS: Address =
    address!("76223E78d80807FB1BDA0086bce605497B442d64");

/// Default receiver of `transferTokens` on the remote chain
pub const DEFAULT_TRANSFER_RECEIVER: Address =
    address!("510e5EA32386B7C48C4DEEAC80e86859b5e2416C");
