use std::env;
use std::path::PathBuf;

/// Where the product catalog comes from
#[derive(Debug, Clone, Default)]
pub struct CatalogConfig {
    pub path: Option<PathBuf>,
}

impl CatalogConfig {
    /// Load catalog configuration from environment variables
    ///
    /// Environment variables:
    /// - CATALOG_PATH: JSON catalog file (default: none, empty catalog)
    pub fn from_env() -> Self {
        Self::from_value(env::var("CATALOG_PATH").ok())
    }

    pub fn from_value(value: Option<String>) -> Self {
        let path = value
            .map(|raw| raw.trim().to_string())
            .filter(|raw| !raw.is_empty())
            .map(PathBuf::from);

        Self { path }
    }
}
