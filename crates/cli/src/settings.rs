//! Layered configuration: optional file, then `BROKER_REGISTRY_*` environment,
//! then command-line overrides.

use anyhow::{Context, Result};
use broker_registry::{Principal, RegistryConfig};
use config::{Config, Environment, File as ConfigFile};
use std::path::Path;

pub const ENV_PREFIX: &str = "BROKER_REGISTRY";

/// Load configuration from `path` (if any) and the process environment
pub fn load(path: Option<&Path>) -> Result<RegistryConfig> {
    load_layers(path, Environment::with_prefix(ENV_PREFIX))
}

fn load_layers(path: Option<&Path>, env: Environment) -> Result<RegistryConfig> {
    let mut builder = Config::builder();

    if let Some(path) = path {
        if !path.exists() {
            anyhow::bail!(
                "Configuration file {} not found (specified via --config)",
                path.display()
            );
        }
        builder = builder.add_source(ConfigFile::from(path));
    }

    builder = builder.add_source(env);

    builder
        .build()
        .context("failed to assemble configuration")?
        .try_deserialize()
        .context("invalid registry configuration")
}

/// `--admin` wins over both the file and the environment
pub fn apply_admin_override(mut config: RegistryConfig, admin: Option<String>) -> RegistryConfig {
    if let Some(admin) = admin {
        config.admin = Principal::new(admin);
    }
    config
}
