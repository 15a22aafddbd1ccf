//! Registry calls as data, for replaying scripted scenarios.

use crate::registry::BrokerRegistry;
use crate::response::ContractResponse;
use crate::types::{BrokerRecord, Principal};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One invocation of a registry operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Call {
    RegisterBroker {
        sender: Principal,
        broker: Principal,
        license_number: String,
        expiration: u64,
        state: String,
    },
    RevokeBroker {
        sender: Principal,
        broker: Principal,
    },
    IsVerified {
        broker: Principal,
    },
    GetBrokerDetails {
        broker: Principal,
    },
    TransferAdmin {
        sender: Principal,
        new_admin: Principal,
    },
}

impl Call {
    /// Operation name as it appears in the `op` field
    pub fn name(&self) -> &'static str {
        match self {
            Call::RegisterBroker { .. } => "register_broker",
            Call::RevokeBroker { .. } => "revoke_broker",
            Call::IsVerified { .. } => "is_verified",
            Call::GetBrokerDetails { .. } => "get_broker_details",
            Call::TransferAdmin { .. } => "transfer_admin",
        }
    }
}

/// What a call returns on the wire.
///
/// Untagged, so a response prints as `{"ok":true}` and details print as
/// the bare record or `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CallOutcome {
    Response(ContractResponse),
    Details(Option<BrokerRecord>),
}

impl BrokerRegistry {
    /// Execute `call` against this registry
    pub fn dispatch(&self, call: &Call) -> CallOutcome {
        debug!(op = call.name(), "dispatching call");
        match call {
            Call::RegisterBroker {
                sender,
                broker,
                license_number,
                expiration,
                state,
            } => CallOutcome::Response(
                self.register_broker(
                    sender,
                    broker,
                    license_number.as_str(),
                    *expiration,
                    state.as_str(),
                )
                .into(),
            ),
            Call::RevokeBroker { sender, broker } => {
                CallOutcome::Response(self.revoke_broker(sender, broker).into())
            }
            Call::IsVerified { broker } => CallOutcome::Response(self.is_verified(broker).into()),
            Call::GetBrokerDetails { broker } => {
                CallOutcome::Details(self.get_broker_details(broker))
            }
            Call::TransferAdmin { sender, new_admin } => {
                CallOutcome::Response(self.transfer_admin(sender, new_admin).into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_register_call() {
        let call: Call = serde_json::from_value(json!({
            "op": "register_broker",
            "sender": "A",
            "broker": "B",
            "license_number": "LIC123456",
            "expiration": 1672531200u64,
            "state": "CA"
        }))
        .unwrap();

        assert_eq!(call.name(), "register_broker");
        assert_eq!(
            call,
            Call::RegisterBroker {
                sender: "A".into(),
                broker: "B".into(),
                license_number: "LIC123456".into(),
                expiration: 1_672_531_200,
                state: "CA".into(),
            }
        );
    }

    #[test]
    fn test_unknown_op_is_rejected() {
        let parsed = serde_json::from_value::<Call>(json!({ "op": "burn", "broker": "B" }));
        assert!(parsed.is_err());
    }

    #[test]
    fn test_outcome_wire_shapes() {
        let registry = BrokerRegistry::new("A".into());

        let missing = registry.dispatch(&Call::GetBrokerDetails { broker: "B".into() });
        assert_eq!(serde_json::to_value(&missing).unwrap(), json!(null));

        let denied = registry.dispatch(&Call::TransferAdmin {
            sender: "B".into(),
            new_admin: "B".into(),
        });
        assert_eq!(serde_json::to_value(&denied).unwrap(), json!({ "err": 100 }));

        let not_found = registry.dispatch(&Call::IsVerified { broker: "B".into() });
        assert_eq!(serde_json::to_value(&not_found).unwrap(), json!({ "err": 102 }));
    }

    #[test]
    fn test_dispatch_register_then_details() {
        let registry = BrokerRegistry::new("A".into());

        let outcome = registry.dispatch(&Call::RegisterBroker {
            sender: "A".into(),
            broker: "B".into(),
            license_number: "LIC123456".into(),
            expiration: 1_672_531_200,
            state: "CA".into(),
        });
        assert_eq!(outcome, CallOutcome::Response(ContractResponse::Ok(true)));

        let details = registry.dispatch(&Call::GetBrokerDetails { broker: "B".into() });
        assert_eq!(
            serde_json::to_value(&details).unwrap(),
            json!({
                "licenseNumber": "LIC123456",
                "expiration": 1672531200u64,
                "state": "CA",
                "status": true
            })
        );
    }
}
