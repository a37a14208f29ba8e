//! Production implementations of the orchestration traits.
//!
//! These providers talk to real EVM nodes through Alloy, to the Axelarscan
//! gas-estimation API, the system clock and the OS random number generator.
//! Test code uses the fakes in [`crate::testing`] instead.

mod alloy;
mod axelarscan;
mod os_salt;
mod retrying;
mod tokio_clock;

pub use self::alloy::{AlloyInterchainToken, AlloyInterchainTokenService};
pub use self::axelarscan::AxelarscanGasEstimator;
pub use self::os_salt::OsRandomSalt;
pub use self::retrying::RetryingGasEstimator;
pub use self::tokio_clock::TokioClock;
