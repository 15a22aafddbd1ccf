//! Broker registry implementation
//!
//! Holds the admin principal and the broker → license record mapping.
//! Register, revoke and admin transfer are gated on the caller being the
//! current admin; queries are open to anyone.

use crate::config::RegistryConfig;
use crate::errors::*;
use crate::types::*;
use parking_lot::RwLock;
use std::collections::HashMap;
use tracing::{info, warn};

#[derive(Debug)]
struct RegistryState {
    admin: Principal,
    brokers: HashMap<Principal, BrokerRecord>,
}

impl RegistryState {
    fn fresh(admin: Principal) -> Self {
        Self {
            admin,
            brokers: HashMap::new(),
        }
    }

    fn ensure_admin(&self, caller: &Principal) -> Result<()> {
        if caller != &self.admin {
            warn!(%caller, admin = %self.admin, "rejected non-admin call");
            return Err(RegistryError::Unauthorized {
                caller: caller.clone(),
            });
        }
        Ok(())
    }
}

/// Broker Verification Registry
///
/// Admin and broker map live behind a single lock so every gated
/// operation checks and mutates under one write guard.
#[derive(Debug)]
pub struct BrokerRegistry {
    state: RwLock<RegistryState>,
}

impl BrokerRegistry {
    /// Create an empty registry administered by `admin`
    pub fn new(admin: Principal) -> Self {
        Self {
            state: RwLock::new(RegistryState::fresh(admin)),
        }
    }

    /// Create an empty registry with the configured initial admin
    pub fn from_config(config: &RegistryConfig) -> Self {
        Self::new(config.admin.clone())
    }

    /// Register a broker with a verified license record
    pub fn register_broker(
        &self,
        caller: &Principal,
        broker: &Principal,
        license_number: impl Into<String>,
        expiration: u64,
        jurisdiction: impl Into<String>,
    ) -> Result<()> {
        let mut state = self.state.write();
        state.ensure_admin(caller)?;

        if state.brokers.contains_key(broker) {
            warn!(%broker, "broker already registered");
            return Err(RegistryError::AlreadyRegistered {
                broker: broker.clone(),
            });
        }

        let record = BrokerRecord::verified(license_number, expiration, jurisdiction);
        info!(
            %broker,
            license = %record.license_number,
            state = %record.state,
            expiration = record.expiration,
            "broker registered"
        );
        state.brokers.insert(broker.clone(), record);
        Ok(())
    }

    /// Revoke a broker's verification. Succeeds again on an already
    /// revoked broker.
    pub fn revoke_broker(&self, caller: &Principal, broker: &Principal) -> Result<()> {
        let mut state = self.state.write();
        state.ensure_admin(caller)?;

        match state.brokers.get_mut(broker) {
            Some(record) => {
                record.status = false;
                info!(%broker, "broker revoked");
                Ok(())
            }
            None => {
                warn!(%broker, "revoke of unknown broker");
                Err(RegistryError::NotFound {
                    broker: broker.clone(),
                })
            }
        }
    }

    /// Current verification status; `Ok(false)` for a revoked broker
    pub fn is_verified(&self, broker: &Principal) -> Result<bool> {
        let state = self.state.read();
        state
            .brokers
            .get(broker)
            .map(|record| record.status)
            .ok_or_else(|| RegistryError::NotFound {
                broker: broker.clone(),
            })
    }

    /// Full license record, or `None` if never registered
    pub fn get_broker_details(&self, broker: &Principal) -> Option<BrokerRecord> {
        self.state.read().brokers.get(broker).cloned()
    }

    /// Hand admin rights to `new_admin`
    pub fn transfer_admin(&self, caller: &Principal, new_admin: &Principal) -> Result<()> {
        let mut state = self.state.write();
        state.ensure_admin(caller)?;

        info!(from = %state.admin, to = %new_admin, "admin transferred");
        state.admin = new_admin.clone();
        Ok(())
    }

    /// Current admin principal
    pub fn admin(&self) -> Principal {
        self.state.read().admin.clone()
    }

    /// Whether a record exists for `broker`, revoked or not
    pub fn is_registered(&self, broker: &Principal) -> bool {
        self.state.read().brokers.contains_key(broker)
    }

    /// Number of stored records, revoked ones included
    pub fn broker_count(&self) -> usize {
        self.state.read().brokers.len()
    }

    /// Drop every record and install `admin`, as at creation
    pub fn reset(&self, admin: Principal) {
        let mut state = self.state.write();
        info!(%admin, dropped = state.brokers.len(), "registry reset");
        *state = RegistryState::fresh(admin);
    }
}

impl Default for BrokerRegistry {
    fn default() -> Self {
        Self::from_config(&RegistryConfig::default())
    }
}
