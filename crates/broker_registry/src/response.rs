//! Contract-style response shapes: `{ "ok": <bool> }` and `{ "err": <code> }`.

use crate::errors::Result;
use serde::{Deserialize, Serialize};

/// Result of a registry operation as seen by a contract caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContractResponse {
    Ok(bool),
    Err(u32),
}

impl ContractResponse {
    /// Whether this is a success, whatever its payload
    pub fn is_ok(&self) -> bool {
        matches!(self, ContractResponse::Ok(_))
    }

    /// Error code, if this is a failure
    pub fn err_code(&self) -> Option<u32> {
        match self {
            ContractResponse::Ok(_) => None,
            ContractResponse::Err(code) => Some(*code),
        }
    }
}

/// Success without payload is reported as `{ "ok": true }`.
impl From<Result<()>> for ContractResponse {
    fn from(result: Result<()>) -> Self {
        match result {
            Ok(()) => ContractResponse::Ok(true),
            Err(err) => ContractResponse::Err(err.code()),
        }
    }
}

impl From<Result<bool>> for ContractResponse {
    fn from(result: Result<bool>) -> Self {
        match result {
            Ok(flag) => ContractResponse::Ok(flag),
            Err(err) => ContractResponse::Err(err.code()),
        }
    }
}
