//! Runtime configuration read from environment variables.

use super::source::{CatalogSource, FileCatalogSource, HttpCatalogSource, DEFAULT_ENDPOINT};
use std::path::PathBuf;

pub const ENDPOINT_VAR: &str = "STOREFRONT_ENDPOINT";
pub const CATALOG_FILE_VAR: &str = "STOREFRONT_CATALOG_FILE";
pub const LOG_FILE_VAR: &str = "STOREFRONT_LOG_FILE";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    /// Catalog URL used when no catalog file is set
    pub endpoint: String,
    /// Local catalog file, takes precedence over the endpoint
    pub catalog_file: Option<PathBuf>,
    /// Destination for structured logs
    pub log_file: Option<PathBuf>,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            catalog_file: None,
            log_file: None,
        }
    }
}

impl StorefrontConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from `lookup`. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let defaults = Self::default();

        Self {
            endpoint: get(ENDPOINT_VAR).unwrap_or(defaults.endpoint),
            catalog_file: get(CATALOG_FILE_VAR).map(PathBuf::from),
            log_file: get(LOG_FILE_VAR).map(PathBuf::from),
        }
    }

    pub fn catalog_source(&self) -> Box<dyn CatalogSource> {
        match &self.catalog_file {
            Some(path) => Box::new(FileCatalogSource::new(path.clone())),
            None => Box::new(HttpCatalogSource::new(self.endpoint.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> StorefrontConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        StorefrontConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_without_environment() {
        let config = StorefrontConfig::from_lookup(|_| None);
        assert_eq!(config, StorefrontConfig::default());
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.catalog_source().describe(), DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_overrides_from_environment() {
        let config = config_from(&[
            (ENDPOINT_VAR, "http://localhost:8080/products"),
            (LOG_FILE_VAR, "/tmp/storefront.log"),
        ]);
        assert_eq!(config.endpoint, "http://localhost:8080/products");
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/storefront.log")));
        assert!(config.catalog_file.is_none());
    }

    #[test]
    fn test_catalog_file_takes_precedence() {
        let config = config_from(&[
            (ENDPOINT_VAR, "http://localhost:8080/products"),
            (CATALOG_FILE_VAR, "fixtures/catalog.json"),
        ]);
        assert_eq!(config.catalog_source().describe(), "fixtures/catalog.json");
    }

    #[test]
    fn test_blank_values_are_ignored() {
        let config = config_from(&[(ENDPOINT_VAR, "  ")]);
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
    }
}
