use std::fmt;
use std::str::FromStr;

use bon::Builder;
use serde::Serialize;

use crate::error::ItsError;

/// Token in which the relayer fee is quoted
///
/// Mirrors the gas token symbols accepted by the Axelar gas-estimation API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GasToken {
    Eth,
    Avax,
    Ftm,
    Matic,
    Bnb,
    Glmr,
}

impl GasToken {
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Eth => "ETH",
            Self::Avax => "AVAX",
            Self::Ftm => "FTM",
            Self::Matic => "MATIC",
            Self::Bnb => "BNB",
            Self::Glmr => "GLMR",
        }
    }
}

impl fmt::Display for GasToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for GasToken {
    type Err = ItsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ETH" => Ok(Self::Eth),
            "AVAX" => Ok(Self::Avax),
            "FTM" => Ok(Self::Ftm),
            "MATIC" => Ok(Self::Matic),
            "BNB" => Ok(Self::Bnb),
            "GLMR" => Ok(Self::Glmr),
            other => Err(ItsError::InvalidConfig(format!(
                "unsupported gas token: {other}"
            ))),
        }
    }
}

/// Parameters of one relayer fee quote
///
/// Chain names are Axelar chain identifiers (see [`crate::AxelarChain`]).
#[derive(Builder, Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GasFeeRequest {
    #[builder(into)]
    source_chain: String,
    #[builder(into)]
    destination_chain: String,
    #[serde(rename = "sourceTokenSymbol", serialize_with = "serialize_gas_token")]
    gas_token: GasToken,
    gas_limit: u64,
    gas_multiplier: f64,
}

impl GasFeeRequest {
    pub fn source_chain(&self) -> &str {
        &self.source_chain
    }

    pub fn destination_chain(&self) -> &str {
        &self.destination_chain
    }

    pub fn gas_token(&self) -> GasToken {
        self.gas_token
    }

    pub fn gas_limit(&self) -> u64 {
        self.gas_limit
    }

    pub fn gas_multiplier(&self) -> f64 {
        self.gas_multiplier
    }
}

fn serialize_gas_token<S: serde::Serializer>(
    token: &GasToken,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(token.symbol())
}
