//! Configuration loading and representation.

use thiserror::Error;

/// Tracing filter directive used when `RUST_LOG` is not set.
pub const LOG_ENV: &str = "CATALOG_LOG";

/// Whether to seed the in-memory stores with demo data at startup.
pub const SEED_ENV: &str = "CATALOG_SEED_DEMO_DATA";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} must be a boolean, got {value:?}")]
    InvalidBool { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    pub log_filter: String,
    pub seed_demo_data: bool,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            log_filter: "info".to_string(),
            seed_demo_data: false,
        }
    }
}

impl CatalogConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Lenient load: invalid values are logged and replaced by defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let log_filter = lookup(LOG_ENV)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or(defaults.log_filter);

        let seed_demo_data = match lookup(SEED_ENV) {
            None => defaults.seed_demo_data,
            Some(raw) => parse_bool(SEED_ENV, &raw).unwrap_or_else(|err| {
                tracing::warn!(%err, "falling back to {}", defaults.seed_demo_data);
                defaults.seed_demo_data
            }),
        };

        Self {
            log_filter,
            seed_demo_data,
        }
    }
}

fn parse_bool(key: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            key,
            value: raw.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(pairs: &[(&str, &str)]) -> CatalogConfig {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        CatalogConfig::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        assert_eq!(load(&[]), CatalogConfig::default());
    }

    #[test]
    fn reads_values() {
        let config = load(&[(LOG_ENV, "storefront_infra=debug"), (SEED_ENV, "TRUE")]);
        assert_eq!(config.log_filter, "storefront_infra=debug");
        assert!(config.seed_demo_data);
    }

    #[test]
    fn blank_log_filter_uses_default() {
        assert_eq!(load(&[(LOG_ENV, "  ")]).log_filter, "info");
    }

    #[test]
    fn invalid_bool_falls_back() {
        assert!(!load(&[(SEED_ENV, "maybe")]).seed_demo_data);
        assert_eq!(
            parse_bool(SEED_ENV, "maybe"),
            Err(ConfigError::InvalidBool {
                key: SEED_ENV,
                value: "maybe".to_string()
            })
        );
    }
}
