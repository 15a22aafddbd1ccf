//! Scenario scripts: a JSON array of registry calls.

use anyhow::{Context, Result};
use broker_registry::{BrokerRegistry, Call, CallOutcome};
use std::fs;
use std::path::Path;
use tracing::info;

pub fn load(path: &Path) -> Result<Vec<Call>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read script {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("invalid script {}", path.display()))
}

/// Replay `calls` in order against `registry`
pub fn replay(registry: &BrokerRegistry, calls: &[Call]) -> Vec<CallOutcome> {
    let outcomes: Vec<CallOutcome> = calls.iter().map(|call| registry.dispatch(call)).collect();
    info!(
        calls = calls.len(),
        brokers = registry.broker_count(),
        admin = %registry.admin(),
        "script replayed"
    );
    outcomes
}
