//! Shop configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `SHOPCART_CATALOG_PATH` - YAML seed catalog (default: built-in catalog)
//! - `SHOPCART_ALSO_ADD_TO_CART` - Put new catalog products in the cart (default: true)
//! - `SHOPCART_QUANTITY_POLICY` - `clamp` or `unbounded` (default: clamp)

use std::path::PathBuf;

use thiserror::Error;

use crate::cart::QuantityPolicy;
use crate::session::SessionOptions;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Shop configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShopConfig {
    /// Seed catalog file; the built-in catalog is used when unset
    pub catalog_path: Option<PathBuf>,
    /// Session behavior switches
    pub session: SessionOptions,
}

impl ShopConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an unrecognized value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through a lookup function instead of the process
    /// environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an unrecognized value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = SessionOptions::default();

        let catalog_path = get_optional(&lookup, "SHOPCART_CATALOG_PATH").map(PathBuf::from);
        let also_add_to_cart = match get_optional(&lookup, "SHOPCART_ALSO_ADD_TO_CART") {
            Some(value) => parse_bool("SHOPCART_ALSO_ADD_TO_CART", &value)?,
            None => defaults.also_add_to_cart,
        };
        let quantity_policy = match get_optional(&lookup, "SHOPCART_QUANTITY_POLICY") {
            Some(value) => value.parse::<QuantityPolicy>().map_err(|e| {
                ConfigError::InvalidEnvVar("SHOPCART_QUANTITY_POLICY".to_string(), e)
            })?,
            None => defaults.quantity_policy,
        };

        Ok(Self {
            catalog_path,
            session: SessionOptions {
                also_add_to_cart,
                quantity_policy,
            },
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional variable, treating blank values as unset.
fn get_optional<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key).filter(|value| !value.trim().is_empty())
}

/// Parse a boolean flag value.
fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        other => Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            format!("expected true or false, got '{other}'"),
        )),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ShopConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ShopConfig::default());
        assert!(config.session.also_add_to_cart);
        assert_eq!(config.session.quantity_policy, QuantityPolicy::Clamp);
        assert!(config.catalog_path.is_none());
    }

    #[test]
    fn test_all_values() {
        let config = ShopConfig::from_lookup(lookup(&[
            ("SHOPCART_CATALOG_PATH", "/tmp/catalog.yaml"),
            ("SHOPCART_ALSO_ADD_TO_CART", "No"),
            ("SHOPCART_QUANTITY_POLICY", "unbounded"),
        ]))
        .unwrap();
        assert_eq!(config.catalog_path, Some(PathBuf::from("/tmp/catalog.yaml")));
        assert!(!config.session.also_add_to_cart);
        assert_eq!(config.session.quantity_policy, QuantityPolicy::Unbounded);
    }

    #[test]
    fn test_blank_values_use_defaults() {
        let config = ShopConfig::from_lookup(lookup(&[
            ("SHOPCART_CATALOG_PATH", ""),
            ("SHOPCART_ALSO_ADD_TO_CART", "  "),
        ]))
        .unwrap();
        assert_eq!(config, ShopConfig::default());
    }

    #[test]
    fn test_invalid_bool() {
        let err =
            ShopConfig::from_lookup(lookup(&[("SHOPCART_ALSO_ADD_TO_CART", "maybe")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(key, _) if key == "SHOPCART_ALSO_ADD_TO_CART"));
    }

    #[test]
    fn test_invalid_policy() {
        let err =
            ShopConfig::from_lookup(lookup(&[("SHOPCART_QUANTITY_POLICY", "sometimes")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(key, _) if key == "SHOPCART_QUANTITY_POLICY"));
    }
}
