//! Broker Verification Registry
//!
//! An admin-gated registry mapping broker principals to license metadata
//! and a revocable verification flag. Every gated operation takes the
//! calling principal explicitly; there is no ambient sender.

pub mod call;
pub mod config;
pub mod errors;
pub mod registry;
pub mod response;
pub mod types;

pub use call::{Call, CallOutcome};
pub use config::{LogFormat, RegistryConfig};
pub use errors::*;
pub use registry::BrokerRegistry;
pub use response::ContractResponse;
pub use types::*;
