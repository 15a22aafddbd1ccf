//! Types for the broker registry

use serde::{Deserialize, Serialize};
use std::fmt;

/// Account identity (a principal address such as `ST1PQ...`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Principal(pub String);

impl Principal {
    /// Create a principal from its address
    pub fn new(address: impl Into<String>) -> Self {
        Self(address.into())
    }

    /// Get the address as string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Principal {
    fn from(address: &str) -> Self {
        Self::new(address)
    }
}

impl From<String> for Principal {
    fn from(address: String) -> Self {
        Self(address)
    }
}

/// License metadata stored per broker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrokerRecord {
    /// License number issued by the jurisdiction
    pub license_number: String,
    /// License expiration (seconds since UNIX epoch)
    pub expiration: u64,
    /// Jurisdiction code, e.g. `CA`
    pub state: String,
    /// `true` while verified, `false` once revoked
    pub status: bool,
}

impl BrokerRecord {
    /// A freshly registered, verified record
    pub fn verified(
        license_number: impl Into<String>,
        expiration: u64,
        state: impl Into<String>,
    ) -> Self {
        Self {
            license_number: license_number.into(),
            expiration,
            state: state.into(),
            status: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_record_serializes_camel_case() {
        let record = BrokerRecord::verified("LIC123456", 1_672_531_200, "CA");
        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            json!({
                "licenseNumber": "LIC123456",
                "expiration": 1672531200u64,
                "state": "CA",
                "status": true
            })
        );
    }

    #[test]
    fn test_principal_is_plain_string_on_the_wire() {
        let p: Principal =
            serde_json::from_str("\"ST2CY5V39NHDPWSXMW9QDT3HC3GD6Q6XX4CFRK9AG\"").unwrap();
        assert_eq!(p, Principal::from("ST2CY5V39NHDPWSXMW9QDT3HC3GD6Q6XX4CFRK9AG"));
        assert_eq!(p.to_string(), p.as_str());
    }
}
