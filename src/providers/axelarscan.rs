//! Axelarscan gas estimation provider implementation.

use alloy_chains::NamedChain;
use alloy_primitives::U256;
use async_trait::async_trait;
use reqwest::Client;
use std::str::FromStr;
use tracing::{debug, trace, Instrument};

use crate::chain::{AxelarChain, AXELARSCAN_API, AXELARSCAN_API_TESTNET};
use crate::error::{ItsError, Result};
use crate::protocol::GasFeeRequest;
use crate::spans;
use crate::traits::GasEstimator;

/// Gas estimator backed by the public Axelarscan API.
///
/// # Examples
///
/// ```rust,no_run
/// use its_orchestrator::providers::AxelarscanGasEstimator;
/// use its_orchestrator::{GasEstimator, GasFeeRequest, GasToken};
/// use alloy_chains::NamedChain;
///
/// # async fn example() -> Result<(), its_orchestrator::ItsError> {
/// let estimator = AxelarscanGasEstimator::for_chain(NamedChain::AvalancheFuji);
/// let request = GasFeeRequest::builder()
///     .source_chain("avalanche")
///     .destination_chain("fantom")
///     .gas_token(GasToken::Eth)
///     .gas_limit(700_000)
///     .gas_multiplier(1.1)
///     .build();
/// let quote = estimator.estimate_gas_fee(&request).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct AxelarscanGasEstimator {
    base_url: String,
    client: Client,
}

impl AxelarscanGasEstimator {
    /// Creates an estimator for the API rooted at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: Client::new(),
        }
    }

    /// Axelar mainnet API.
    pub fn mainnet() -> Self {
        Self::new(AXELARSCAN_API)
    }

    /// Axelar testnet API.
    pub fn testnet() -> Self {
        Self::new(AXELARSCAN_API_TESTNET)
    }

    /// Picks the API environment matching `source_chain`.
    pub fn for_chain(source_chain: NamedChain) -> Self {
        Self::new(source_chain.axelarscan_api_url())
    }

    fn estimate_url(&self) -> String {
        format!("{}/gmp/estimateGasFee", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl GasEstimator for AxelarscanGasEstimator {
    async fn estimate_gas_fee(&self, request: &GasFeeRequest) -> Result<U256> {
        let url = self.estimate_url();
        let span = spans::http_request("POST", &url);

        async {
            trace!(url = %url, "Requesting gas fee quote from Axelarscan");

            let response = self.client.post(&url).json(request).send().await?;
            let status_code = response.status();
            let body = response.text().await?;
            trace!(status_code = %status_code, "Received response from Axelarscan");

            if !status_code.is_success() {
                return Err(ItsError::GasEstimation {
                    reason: format!("HTTP {status_code}: {}", body.trim()),
                });
            }

            let quote = parse_gas_quote(&body)?;
            debug!(quote = %quote, event = "gas_quote_parsed");
            Ok(quote)
        }
        .instrument(span)
        .await
    }
}

/// Parses a fee quote body: a decimal or hex amount, optionally JSON-quoted.
fn parse_gas_quote(body: &str) -> Result<U256> {
    let raw = body.trim().trim_matches('"');
    if raw.is_empty() {
        return Err(ItsError::GasEstimation {
            reason: "empty response".to_string(),
        });
    }

    U256::from_str(raw).map_err(|e| ItsError::GasEstimation {
        reason: format!("unparseable quote {raw:?}: {e}"),
    })
}
