//! Error types for the broker registry

use crate::types::Principal;
use thiserror::Error;

/// Numeric code for [`RegistryError::Unauthorized`].
pub const ERR_UNAUTHORIZED: u32 = 100;
/// Numeric code for [`RegistryError::AlreadyRegistered`].
pub const ERR_ALREADY_REGISTERED: u32 = 101;
/// Numeric code for [`RegistryError::NotFound`].
pub const ERR_NOT_FOUND: u32 = 102;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Unauthorized: {caller} is not the registry admin")]
    Unauthorized { caller: Principal },

    #[error("Broker already registered: {broker}")]
    AlreadyRegistered { broker: Principal },

    #[error("Broker not found: {broker}")]
    NotFound { broker: Principal },
}

impl RegistryError {
    /// Wire-level error code carried in an `{ "err": <code> }` response.
    pub fn code(&self) -> u32 {
        match self {
            RegistryError::Unauthorized { .. } => ERR_UNAUTHORIZED,
            RegistryError::AlreadyRegistered { .. } => ERR_ALREADY_REGISTERED,
            RegistryError::NotFound { .. } => ERR_NOT_FOUND,
        }
    }
}

pub type Result<T> = std::result::Result<T, RegistryError>;
