//! Registry configuration

use crate::types::Principal;
use serde::{Deserialize, Serialize};

/// Default initial admin principal.
pub const DEFAULT_ADMIN: &str = "ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM";

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Compact,
}

/// Settings for building a registry and the process around it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Initial admin principal
    pub admin: Principal,
    /// Log level filter used when `RUST_LOG` is unset
    pub log_level: String,
    /// Log output format
    pub log_format: LogFormat,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            admin: Principal::new(DEFAULT_ADMIN),
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let config: RegistryConfig = serde_json::from_str(r#"{"admin":"ST3AM"}"#).unwrap();
        assert_eq!(config.admin, Principal::new("ST3AM"));
        assert_eq!(config.log_level, "info");
        assert_eq!(config.log_format, LogFormat::Pretty);
    }

    #[test]
    fn test_log_format_names() {
        let config: RegistryConfig = serde_json::from_str(r#"{"log_format":"compact"}"#).unwrap();
        assert_eq!(config.log_format, LogFormat::Compact);
        assert_eq!(
            serde_json::to_value(LogFormat::Pretty).unwrap(),
            serde_json::json!("pretty")
        );
    }

    #[test]
    fn test_unknown_log_format_is_rejected() {
        let parsed = serde_json::from_str::<RegistryConfig>(r#"{"log_format":"jsn"}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_default_admin() {
        assert_eq!(RegistryConfig::default().admin.as_str(), DEFAULT_ADMIN);
    }
}
